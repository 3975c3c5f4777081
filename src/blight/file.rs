use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::blight::bytes::Cursor;
use crate::blight::schema::{HEADER_MAGIC, LOBJ_MAGIC, LOBJ_SIZE, MAX_AMBIENTS, MAX_LOBJS, NO_AMBIENT};
use crate::blight::{Ambient, BlightError, BlightHeader, Endianness, FieldAddress, FieldView, Lobj, Result, Section, get_field, set_field};

/// Reader configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadOptions {
	/// Byte order of multi-byte fields.
	pub endianness: Endianness,
	/// Reject advisory mismatches (section size, ambient index, file size)
	/// instead of logging them.
	pub strict_layout: bool,
}

impl ReadOptions {
	/// Strict little-endian preset.
	pub fn strict() -> Self {
		Self {
			endianness: Endianness::Little,
			strict_layout: true,
		}
	}
}

/// Parsed container: field views over a buffer the caller keeps alive.
///
/// Only the first `lobj_count` / `ambient_count` slots are populated; the
/// rest hold empty views.
#[derive(Debug, Clone)]
pub struct Blight {
	/// Header views.
	pub header: BlightHeader,
	lobjs: [Lobj; MAX_LOBJS],
	ambients: [Ambient; MAX_AMBIENTS],
	lobj_count: usize,
	ambient_count: usize,
	endianness: Endianness,
}

impl Blight {
	/// Populated light objects.
	pub fn lobjs(&self) -> &[Lobj] {
		&self.lobjs[..self.lobj_count]
	}

	/// Populated ambient records.
	pub fn ambients(&self) -> &[Ambient] {
		&self.ambients[..self.ambient_count]
	}

	/// Byte order the views were parsed with.
	pub fn endianness(&self) -> Endianness {
		self.endianness
	}

	/// Key/view pairs of one record, or `None` past the populated range.
	pub fn record_fields(&self, section: Section, index: usize) -> Option<Vec<(&'static str, FieldView)>> {
		match section {
			Section::Header => Some(self.header.fields().to_vec()),
			Section::Lobj => self.lobjs().get(index).map(|item| item.fields().to_vec()),
			Section::Ambient => self.ambients().get(index).map(|item| item.fields().to_vec()),
		}
	}

	/// Resolve a symbolic address to a view. The record index is ignored for
	/// the header.
	pub fn resolve(&self, address: &FieldAddress) -> Result<FieldView> {
		let section = address.section;
		let fields = self.record_fields(section, address.index).ok_or(BlightError::IndexOutOfRange {
			section: section.as_str(),
			index: address.index,
			count: match section {
				Section::Header => 1,
				Section::Lobj => self.lobj_count,
				Section::Ambient => self.ambient_count,
			},
		})?;

		let (key, view) = fields
			.into_iter()
			.find(|(key, _)| key.eq_ignore_ascii_case(&address.key.name))
			.ok_or_else(|| BlightError::UnknownField {
				section: section.as_str(),
				key: address.key.name.clone(),
			})?;

		match address.key.element {
			Some(element) => view.element(element).ok_or(BlightError::ElementOutOfRange {
				field: key,
				element,
				len: view.count,
			}),
			None => Ok(view),
		}
	}
}

/// Parse `bytes` into field views.
///
/// Reads the header, then `lobjCount` light objects, then `ambientCount`
/// ambient records. Bad magic, counts over capacity, and truncation reject
/// the whole parse.
pub fn read_blight(bytes: &[u8], options: &ReadOptions) -> Result<Blight> {
	let endianness = options.endianness;
	let mut cursor = Cursor::new(bytes, endianness);

	let header = BlightHeader::read(&mut cursor)?;
	expect_magic(header.magic, bytes, HEADER_MAGIC)?;

	let lobj_count = header.lobj_count.u16(bytes, endianness)?;
	check_capacity("lobj", lobj_count, MAX_LOBJS)?;
	let ambient_count = header.ambient_count.u16(bytes, endianness)?;
	check_capacity("ambient", ambient_count, MAX_AMBIENTS)?;

	let filesize = header.filesize.u32(bytes, endianness)?;
	if usize::try_from(filesize).ok() != Some(bytes.len()) {
		if options.strict_layout {
			return Err(BlightError::FileSizeMismatch {
				declared: filesize,
				actual: bytes.len(),
			});
		}
		warn!(declared = filesize, actual = bytes.len(), "blight file size mismatch");
	}
	debug!(lobj_count, ambient_count, endianness = endianness.as_str(), "blight header");

	let mut lobjs = [Lobj::default(); MAX_LOBJS];
	for (index, slot) in lobjs.iter_mut().take(usize::from(lobj_count)).enumerate() {
		let lobj = Lobj::read(&mut cursor)?;
		expect_magic(lobj.magic, bytes, LOBJ_MAGIC)?;

		let declared = lobj.section_size.u32(bytes, endianness)?;
		if usize::try_from(declared).ok() != Some(LOBJ_SIZE) {
			if options.strict_layout {
				return Err(BlightError::SectionSizeMismatch {
					index,
					declared,
					expected: LOBJ_SIZE as u32,
				});
			}
			warn!(index, declared, expected = LOBJ_SIZE, "lobj section size mismatch");
		}

		let ambient_index = lobj.ambient_index.u16(bytes, endianness)?;
		if ambient_index != NO_AMBIENT && ambient_index >= ambient_count {
			if options.strict_layout {
				return Err(BlightError::AmbientIndexOutOfRange {
					index,
					ambient_index,
					ambient_count,
				});
			}
			warn!(index, ambient_index, ambient_count, "lobj ambient index out of range");
		}

		debug!(index, offset = lobj.magic.offset, "lobj");
		*slot = lobj;
	}

	let mut ambients = [Ambient::default(); MAX_AMBIENTS];
	for slot in ambients.iter_mut().take(usize::from(ambient_count)) {
		*slot = Ambient::read(&mut cursor)?;
	}

	if cursor.remaining() > 0 {
		debug!(at = cursor.pos(), trailing = cursor.remaining(), "blight trailing bytes");
	}

	Ok(Blight {
		header,
		lobjs,
		ambients,
		lobj_count: usize::from(lobj_count),
		ambient_count: usize::from(ambient_count),
		endianness,
	})
}

fn expect_magic(view: FieldView, bytes: &[u8], expected: [u8; 4]) -> Result<()> {
	let got = Cursor::new(view.bytes(bytes)?, Endianness::Little).read_code4()?;
	if got != expected {
		return Err(BlightError::BadMagic {
			at: view.offset,
			expected,
			got,
		});
	}
	Ok(())
}

fn check_capacity(section: &'static str, count: u16, max: usize) -> Result<()> {
	if usize::from(count) > max {
		return Err(BlightError::TooManyRecords { section, count, max });
	}
	Ok(())
}

/// In-memory Blight file that owns its bytes.
pub struct BlightFile {
	/// Reader configuration used for every parse.
	pub options: ReadOptions,
	bytes: Vec<u8>,
}

impl BlightFile {
	/// Read a file and validate that it parses.
	pub fn open(path: impl AsRef<Path>, options: ReadOptions) -> Result<Self> {
		let bytes = fs::read(path)?;
		Self::from_bytes(bytes, options)
	}

	/// Wrap an owned buffer and validate that it parses.
	pub fn from_bytes(bytes: Vec<u8>, options: ReadOptions) -> Result<Self> {
		let _ = read_blight(&bytes, &options)?;
		Ok(Self { options, bytes })
	}

	/// Backing bytes.
	pub fn bytes(&self) -> &[u8] {
		&self.bytes
	}

	/// Parse the current bytes into views.
	pub fn parse(&self) -> Result<Blight> {
		read_blight(&self.bytes, &self.options)
	}

	/// Formatted value of one field.
	pub fn get(&self, address: &FieldAddress) -> Result<String> {
		get_field(&self.bytes, address, &self.options)
	}

	/// Write a text value into one field.
	pub fn set(&mut self, address: &FieldAddress, value: &str) -> Result<()> {
		set_field(&mut self.bytes, address, value, &self.options)
	}

	/// Write the backing bytes to `path`.
	pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
		fs::write(path, &self.bytes)?;
		Ok(())
	}
}
