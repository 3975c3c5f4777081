//! Scalar type tags.
//!
//! A [`TypeTag`] pairs a category with a width field. The width field is the
//! low byte of the packed tag encoding; for every enumerated tag it holds the
//! width in bits (`UINT8` is 8, `BOOL1` is 1).

/// Scalar category carried by a [`TypeTag`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
	/// Unsigned integer.
	Unsigned,
	/// Two's complement signed integer.
	Signed,
	/// IEEE float (32, 64) or x87 extended (80 bits in 128).
	Float,
	/// Raw byte, rendered as character data.
	Byte,
	/// Half byte.
	Nibble,
	/// Boolean flag.
	Bool,
}

impl ScalarKind {
	/// Category bits of the packed encoding (bits 8..16).
	fn bits(self) -> u16 {
		match self {
			Self::Unsigned => 0x000,
			Self::Signed => 0x100,
			Self::Float => 0x200,
			Self::Byte => 0x400,
			Self::Nibble => 0x800,
			Self::Bool => 0xf00,
		}
	}

	fn from_bits(bits: u16) -> Option<Self> {
		match bits {
			0x000 => Some(Self::Unsigned),
			0x100 => Some(Self::Signed),
			0x200 => Some(Self::Float),
			0x400 => Some(Self::Byte),
			0x800 => Some(Self::Nibble),
			0xf00 => Some(Self::Bool),
			_ => None,
		}
	}
}

/// Scalar type descriptor controlling binary width and text formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeTag {
	kind: ScalarKind,
	width: u8,
}

impl TypeTag {
	/// 8-bit unsigned integer.
	pub const UINT8: Self = Self::new(ScalarKind::Unsigned, 8);
	/// 16-bit unsigned integer.
	pub const UINT16: Self = Self::new(ScalarKind::Unsigned, 16);
	/// 32-bit unsigned integer.
	pub const UINT32: Self = Self::new(ScalarKind::Unsigned, 32);
	/// 64-bit unsigned integer.
	pub const UINT64: Self = Self::new(ScalarKind::Unsigned, 64);
	/// 8-bit signed integer.
	pub const INT8: Self = Self::new(ScalarKind::Signed, 8);
	/// 16-bit signed integer.
	pub const INT16: Self = Self::new(ScalarKind::Signed, 16);
	/// 32-bit signed integer.
	pub const INT32: Self = Self::new(ScalarKind::Signed, 32);
	/// 64-bit signed integer.
	pub const INT64: Self = Self::new(ScalarKind::Signed, 64);
	/// IEEE single precision float.
	pub const FLOAT32: Self = Self::new(ScalarKind::Float, 32);
	/// IEEE double precision float.
	pub const DOUBLE64: Self = Self::new(ScalarKind::Float, 64);
	/// x87 80-bit extended float in 16 bytes of storage.
	pub const DOUBLE128: Self = Self::new(ScalarKind::Float, 128);
	/// Raw byte.
	pub const BYTE8: Self = Self::new(ScalarKind::Byte, 8);
	/// Half byte.
	pub const NIBBLE4: Self = Self::new(ScalarKind::Nibble, 4);
	/// Boolean stored in one byte.
	pub const BOOL1: Self = Self::new(ScalarKind::Bool, 1);

	/// Build a tag from a category and width field.
	pub const fn new(kind: ScalarKind, width: u8) -> Self {
		Self { kind, width }
	}

	/// Decode the packed 16-bit encoding (`0x120` is `INT32`).
	pub fn from_raw(raw: u16) -> Option<Self> {
		let kind = ScalarKind::from_bits(raw & 0xff00)?;
		Some(Self::new(kind, (raw & 0x00ff) as u8))
	}

	/// Packed 16-bit encoding.
	pub fn raw(self) -> u16 {
		self.kind.bits() | u16::from(self.width)
	}

	/// Scalar category.
	pub fn kind(self) -> ScalarKind {
		self.kind
	}

	/// Width field (low byte of the packed tag).
	pub fn size(self) -> u8 {
		self.width
	}

	/// Replace the width field, keeping the category.
	///
	/// Widths above 255 saturate to 255.
	pub fn with_size(self, width: u32) -> Self {
		Self::new(self.kind, u8::try_from(width).unwrap_or(u8::MAX))
	}

	/// Storage size in bytes.
	pub const fn byte_len(self) -> usize {
		(self.width as usize).div_ceil(8)
	}

	/// Unsigned or signed integer.
	pub fn is_int(self) -> bool {
		matches!(self.kind, ScalarKind::Unsigned | ScalarKind::Signed)
	}

	/// Signed integer.
	pub fn is_signed(self) -> bool {
		self.kind == ScalarKind::Signed
	}

	/// Floating point.
	pub fn is_float(self) -> bool {
		self.kind == ScalarKind::Float
	}

	/// Integer or floating point.
	pub fn is_num(self) -> bool {
		self.is_int() || self.is_float()
	}

	/// Byte (character) data.
	pub fn is_char(self) -> bool {
		self.kind == ScalarKind::Byte
	}

	/// Boolean.
	pub fn is_bool(self) -> bool {
		self.kind == ScalarKind::Bool
	}

	/// Short human-readable label such as `u16` or `f32`.
	pub fn label(self) -> &'static str {
		match (self.kind, self.width) {
			(ScalarKind::Unsigned, 8) => "u8",
			(ScalarKind::Unsigned, 16) => "u16",
			(ScalarKind::Unsigned, 32) => "u32",
			(ScalarKind::Unsigned, 64) => "u64",
			(ScalarKind::Signed, 8) => "i8",
			(ScalarKind::Signed, 16) => "i16",
			(ScalarKind::Signed, 32) => "i32",
			(ScalarKind::Signed, 64) => "i64",
			(ScalarKind::Float, 32) => "f32",
			(ScalarKind::Float, 64) => "f64",
			(ScalarKind::Float, 128) => "f80",
			(ScalarKind::Byte, _) => "byte",
			(ScalarKind::Nibble, _) => "nibble",
			(ScalarKind::Bool, _) => "bool",
			_ => "raw",
		}
	}
}

#[cfg(test)]
mod tests;
