use crate::blight::bytes::Cursor;
use crate::blight::schema::{AMBIENT_FIELDS, FieldDef, HEADER_FIELDS, LOBJ_FIELDS, NO_AMBIENT};
use crate::blight::{Endianness, FieldView, Result};

/// Container header views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlightHeader {
	/// Four-byte format identifier.
	pub magic: FieldView,
	/// Declared total file size.
	pub filesize: FieldView,
	/// Format version.
	pub version: FieldView,
	/// Populated light object records.
	pub lobj_count: FieldView,
	/// Populated ambient records.
	pub ambient_count: FieldView,
}

impl BlightHeader {
	pub(crate) fn read(cursor: &mut Cursor<'_>) -> Result<Self> {
		let [magic, filesize, version, lobj_count, ambient_count] = take_fields(cursor, &HEADER_FIELDS)?;
		Ok(Self {
			magic,
			filesize,
			version,
			lobj_count,
			ambient_count,
		})
	}

	/// Views paired with their schema keys, in file order.
	pub fn fields(&self) -> [(&'static str, FieldView); 5] {
		keyed(
			&HEADER_FIELDS,
			[self.magic, self.filesize, self.version, self.lobj_count, self.ambient_count],
		)
	}
}

/// Light object record views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lobj {
	/// Four-byte record identifier.
	pub magic: FieldView,
	/// Declared record size.
	pub section_size: FieldView,
	/// Record version.
	pub version: FieldView,
	/// Light type byte, see [`LightType`].
	pub light_type: FieldView,
	/// Index into the ambient records, or [`NO_AMBIENT`].
	pub ambient_index: FieldView,
	/// Light position.
	pub origin: FieldView,
	/// Light target.
	pub destination: FieldView,
	/// Colour effect vector.
	pub color_effect: FieldView,
	/// Light colour.
	pub rgba: FieldView,
}

impl Lobj {
	pub(crate) fn read(cursor: &mut Cursor<'_>) -> Result<Self> {
		let [magic, section_size, version, light_type, ambient_index, origin, destination, color_effect, rgba] =
			take_fields(cursor, &LOBJ_FIELDS)?;
		Ok(Self {
			magic,
			section_size,
			version,
			light_type,
			ambient_index,
			origin,
			destination,
			color_effect,
			rgba,
		})
	}

	/// Views paired with their schema keys, in file order.
	pub fn fields(&self) -> [(&'static str, FieldView); 9] {
		keyed(
			&LOBJ_FIELDS,
			[
				self.magic,
				self.section_size,
				self.version,
				self.light_type,
				self.ambient_index,
				self.origin,
				self.destination,
				self.color_effect,
				self.rgba,
			],
		)
	}

	/// Decoded light type.
	pub fn kind(&self, buf: &[u8]) -> Result<LightType> {
		Ok(LightType::from_byte(self.light_type.u8(buf)?))
	}

	/// Referenced ambient index, `None` for the "no ambient" sentinel.
	pub fn ambient(&self, buf: &[u8], endianness: Endianness) -> Result<Option<u16>> {
		let index = self.ambient_index.u16(buf, endianness)?;
		Ok((index != NO_AMBIENT).then_some(index))
	}
}

/// Ambient record views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ambient {
	/// Ambient colour.
	pub rgba: FieldView,
}

impl Ambient {
	pub(crate) fn read(cursor: &mut Cursor<'_>) -> Result<Self> {
		let [rgba] = take_fields(cursor, &AMBIENT_FIELDS)?;
		Ok(Self { rgba })
	}

	/// Views paired with their schema keys, in file order.
	pub fn fields(&self) -> [(&'static str, FieldView); 1] {
		keyed(&AMBIENT_FIELDS, [self.rgba])
	}
}

/// Known values of a light object's type byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightType {
	/// Omnidirectional point light.
	Point,
	/// Parallel light from `origin` towards `destination`.
	Directional,
	/// Cone light.
	Spot,
	/// Unrecognized type byte.
	Unknown(u8),
}

impl LightType {
	/// Decode a raw type byte.
	pub fn from_byte(byte: u8) -> Self {
		match byte {
			0 => Self::Point,
			1 => Self::Directional,
			2 => Self::Spot,
			other => Self::Unknown(other),
		}
	}

	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Point => "point",
			Self::Directional => "directional",
			Self::Spot => "spot",
			Self::Unknown(_) => "unknown",
		}
	}
}

fn take_fields<const N: usize>(cursor: &mut Cursor<'_>, defs: &[FieldDef; N]) -> Result<[FieldView; N]> {
	let mut views = [FieldView::default(); N];
	for (view, def) in views.iter_mut().zip(defs) {
		*view = FieldView::take(cursor, def)?;
	}
	Ok(views)
}

fn keyed<const N: usize>(defs: &[FieldDef; N], views: [FieldView; N]) -> [(&'static str, FieldView); N] {
	std::array::from_fn(|idx| (defs[idx].key, views[idx]))
}
