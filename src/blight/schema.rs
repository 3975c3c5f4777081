//! Fixed on-disk layout of Blight containers.
//!
//! Each section is a table of [`FieldDef`]s in file order; record sizes and
//! field offsets follow from the tables.

use crate::blight::{BlightError, Result, TypeTag};

/// Header magic.
pub const HEADER_MAGIC: [u8; 4] = *b"LGHT";
/// Light object record magic.
pub const LOBJ_MAGIC: [u8; 4] = *b"LOBJ";
/// Light object slots in a container.
pub const MAX_LOBJS: usize = 16;
/// Ambient slots in a container.
pub const MAX_AMBIENTS: usize = 16;
/// `ambientIndex` value meaning "no ambient record".
pub const NO_AMBIENT: u16 = 0xffff;

/// One field of a record layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
	/// Symbolic key used for addressing (`lobjCount`, `origin`).
	pub key: &'static str,
	/// Element type.
	pub tag: TypeTag,
	/// Element count (1 for scalars).
	pub count: usize,
}

impl FieldDef {
	const fn new(key: &'static str, tag: TypeTag, count: usize) -> Self {
		Self { key, tag, count }
	}

	/// Total bytes occupied by the field.
	pub const fn byte_len(&self) -> usize {
		self.tag.byte_len() * self.count
	}
}

/// Header fields in file order.
pub const HEADER_FIELDS: [FieldDef; 5] = [
	FieldDef::new("magic", TypeTag::BYTE8, 4),
	FieldDef::new("filesize", TypeTag::UINT32, 1),
	FieldDef::new("version", TypeTag::UINT8, 1),
	FieldDef::new("lobjCount", TypeTag::UINT16, 1),
	FieldDef::new("ambientCount", TypeTag::UINT16, 1),
];

/// Light object fields in file order.
pub const LOBJ_FIELDS: [FieldDef; 9] = [
	FieldDef::new("magic", TypeTag::BYTE8, 4),
	FieldDef::new("sectionSize", TypeTag::UINT32, 1),
	FieldDef::new("version", TypeTag::UINT8, 1),
	FieldDef::new("lightType", TypeTag::UINT8, 1),
	FieldDef::new("ambientIndex", TypeTag::UINT16, 1),
	FieldDef::new("origin", TypeTag::FLOAT32, 3),
	FieldDef::new("destination", TypeTag::FLOAT32, 3),
	FieldDef::new("colorEffect", TypeTag::FLOAT32, 3),
	FieldDef::new("rgba", TypeTag::UINT8, 4),
];

/// Ambient fields in file order.
pub const AMBIENT_FIELDS: [FieldDef; 1] = [FieldDef::new("rgba", TypeTag::UINT8, 4)];

/// Header size in bytes.
pub const HEADER_SIZE: usize = record_size(&HEADER_FIELDS);
/// Light object record size in bytes.
pub const LOBJ_SIZE: usize = record_size(&LOBJ_FIELDS);
/// Ambient record size in bytes.
pub const AMBIENT_SIZE: usize = record_size(&AMBIENT_FIELDS);

const fn record_size(fields: &[FieldDef]) -> usize {
	let mut total = 0;
	let mut idx = 0;
	while idx < fields.len() {
		total += fields[idx].byte_len();
		idx += 1;
	}
	total
}

/// Record category addressable by field mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
	/// The single container header.
	Header,
	/// Light object records.
	Lobj,
	/// Ambient RGBA records.
	Ambient,
}

impl Section {
	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Header => "header",
			Self::Lobj => "lobj",
			Self::Ambient => "ambient",
		}
	}

	/// Parse a section name case-insensitively.
	pub fn parse(name: &str) -> Result<Self> {
		[Self::Header, Self::Lobj, Self::Ambient]
			.into_iter()
			.find(|section| section.as_str().eq_ignore_ascii_case(name))
			.ok_or_else(|| BlightError::UnknownSection { name: name.to_owned() })
	}

	/// Field table for the section.
	pub fn fields(self) -> &'static [FieldDef] {
		match self {
			Self::Header => &HEADER_FIELDS,
			Self::Lobj => &LOBJ_FIELDS,
			Self::Ambient => &AMBIENT_FIELDS,
		}
	}

	/// Look up a field definition by key, case-insensitively.
	pub fn field(self, key: &str) -> Option<&'static FieldDef> {
		self.fields().iter().find(|def| def.key.eq_ignore_ascii_case(key))
	}
}
