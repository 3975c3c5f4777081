use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, BlightError>;

/// Coarse failure family of a [`BlightError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
	/// Filesystem or stream IO failure.
	Io,
	/// Structural problem in the binary container; the parse is rejected.
	Format,
	/// Text could not be converted to the field's native type.
	Conversion,
	/// Section, record index, or field key did not resolve.
	Address,
}

/// Errors produced while reading, formatting, and mutating Blight data.
#[derive(Debug, Error)]
pub enum BlightError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Header or record magic did not match.
	#[error("bad magic at offset {at}: expected {expected:?}, got {got:?}")]
	BadMagic {
		/// Byte offset of the magic.
		at: usize,
		/// Expected four-byte magic.
		expected: [u8; 4],
		/// Bytes actually found.
		got: [u8; 4],
	},
	/// Header declared more records than a section can hold.
	#[error("{section} count {count} exceeds capacity {max}")]
	TooManyRecords {
		/// Section whose count overflowed.
		section: &'static str,
		/// Declared record count.
		count: u16,
		/// Fixed section capacity.
		max: usize,
	},
	/// Not enough bytes remained for a requested read.
	#[error("unexpected eof at offset {at}, need {need} bytes, remaining {rem}")]
	UnexpectedEof {
		/// Byte offset where the read was attempted.
		at: usize,
		/// Requested bytes.
		need: usize,
		/// Bytes still available.
		rem: usize,
	},
	/// Strict mode: a light object declared an unexpected section size.
	#[error("lobj {index} section size {declared} does not match record size {expected}")]
	SectionSizeMismatch {
		/// Light object index.
		index: usize,
		/// Declared `sectionSize`.
		declared: u32,
		/// Fixed on-disk record size.
		expected: u32,
	},
	/// Strict mode: a light object referenced a missing ambient record.
	#[error("lobj {index} ambient index {ambient_index} out of range (ambient count {ambient_count})")]
	AmbientIndexOutOfRange {
		/// Light object index.
		index: usize,
		/// Declared ambient index.
		ambient_index: u16,
		/// Populated ambient records.
		ambient_count: u16,
	},
	/// Strict mode: header file size disagrees with the buffer length.
	#[error("header file size {declared} does not match buffer length {actual}")]
	FileSizeMismatch {
		/// Declared `filesize`.
		declared: u32,
		/// Actual buffer length.
		actual: usize,
	},
	/// Text value could not be converted to the target type.
	#[error("invalid value {value:?} for {field} ({ty})")]
	InvalidValue {
		/// Field key being written.
		field: String,
		/// Target type label.
		ty: &'static str,
		/// User-provided text.
		value: String,
	},
	/// Section name is not `header`, `lobj`, or `ambient`.
	#[error("unknown section: {name}")]
	UnknownSection {
		/// User-provided section name.
		name: String,
	},
	/// Field key does not exist in the section.
	#[error("unknown field {key} in section {section}")]
	UnknownField {
		/// Section searched.
		section: &'static str,
		/// User-provided field key.
		key: String,
	},
	/// Field key syntax is invalid.
	#[error("invalid field key: {key}")]
	InvalidFieldKey {
		/// Original user-provided key.
		key: String,
	},
	/// Record index is beyond the populated records of the section.
	#[error("{section} index {index} out of range (count {count})")]
	IndexOutOfRange {
		/// Section addressed.
		section: &'static str,
		/// Requested record index.
		index: usize,
		/// Populated record count.
		count: usize,
	},
	/// Element index is beyond the field's array length.
	#[error("element {element} out of range for {field} (len {len})")]
	ElementOutOfRange {
		/// Field key.
		field: &'static str,
		/// Requested element index.
		element: usize,
		/// Field element count.
		len: usize,
	},
}

impl BlightError {
	/// Classify the error into its failure family.
	pub fn kind(&self) -> ErrorKind {
		match self {
			Self::Io(_) => ErrorKind::Io,
			Self::BadMagic { .. }
			| Self::TooManyRecords { .. }
			| Self::UnexpectedEof { .. }
			| Self::SectionSizeMismatch { .. }
			| Self::AmbientIndexOutOfRange { .. }
			| Self::FileSizeMismatch { .. } => ErrorKind::Format,
			Self::InvalidValue { .. } => ErrorKind::Conversion,
			Self::UnknownSection { .. }
			| Self::UnknownField { .. }
			| Self::InvalidFieldKey { .. }
			| Self::IndexOutOfRange { .. }
			| Self::ElementOutOfRange { .. } => ErrorKind::Address,
		}
	}
}
