use crate::blight::{BlightError, Result};

/// Byte order used for multi-byte scalar fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Endianness {
	/// Little-endian byte order.
	#[default]
	Little,
	/// Big-endian byte order.
	Big,
}

impl Endianness {
	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Little => "little",
			Self::Big => "big",
		}
	}

	/// Copy `bytes` into a fixed array in native little-endian order.
	///
	/// Big-endian input is reversed so callers can always use `from_le_bytes`.
	pub(crate) fn to_le_array<const N: usize>(self, bytes: &[u8]) -> Option<[u8; N]> {
		let mut out: [u8; N] = bytes.get(..N)?.try_into().ok()?;
		if self == Self::Big {
			out.reverse();
		}
		Some(out)
	}

	/// Write little-endian `raw` into `out` using this byte order.
	pub(crate) fn write_le(self, raw: &[u8], out: &mut [u8]) {
		let len = raw.len().min(out.len());
		out[..len].copy_from_slice(&raw[..len]);
		if self == Self::Big {
			out[..len].reverse();
		}
	}
}

/// Simple bounded cursor over an immutable byte slice.
pub struct Cursor<'a> {
	bytes: &'a [u8],
	pos: usize,
	endianness: Endianness,
}

impl<'a> Cursor<'a> {
	/// Create a cursor at position 0.
	pub fn new(bytes: &'a [u8], endianness: Endianness) -> Self {
		Self { bytes, pos: 0, endianness }
	}

	/// Return current byte offset.
	pub fn pos(&self) -> usize {
		self.pos
	}

	/// Return remaining unread bytes.
	pub fn remaining(&self) -> usize {
		self.bytes.len().saturating_sub(self.pos)
	}

	/// Read exactly `n` bytes and advance cursor.
	pub fn read_exact(&mut self, n: usize) -> Result<&'a [u8]> {
		if n > self.remaining() {
			return Err(BlightError::UnexpectedEof {
				at: self.pos,
				need: n,
				rem: self.remaining(),
			});
		}

		let start = self.pos;
		self.pos += n;
		Ok(&self.bytes[start..self.pos])
	}

	/// Skip `n` bytes and return the offset they started at.
	pub fn take(&mut self, n: usize) -> Result<usize> {
		let start = self.pos;
		let _ = self.read_exact(n)?;
		Ok(start)
	}

	/// Read a four-byte code.
	pub fn read_code4(&mut self) -> Result<[u8; 4]> {
		let raw = self.read_exact(4)?;
		let mut out = [0_u8; 4];
		out.copy_from_slice(raw);
		Ok(out)
	}

	/// Read one byte.
	pub fn read_u8(&mut self) -> Result<u8> {
		Ok(self.read_exact(1)?[0])
	}

	/// Read a `u16` in the cursor's byte order.
	pub fn read_u16(&mut self) -> Result<u16> {
		let raw = self.read_exact(2)?;
		let mut buf = [0_u8; 2];
		buf.copy_from_slice(raw);
		Ok(match self.endianness {
			Endianness::Little => u16::from_le_bytes(buf),
			Endianness::Big => u16::from_be_bytes(buf),
		})
	}

	/// Read a `u32` in the cursor's byte order.
	pub fn read_u32(&mut self) -> Result<u32> {
		let raw = self.read_exact(4)?;
		let mut buf = [0_u8; 4];
		buf.copy_from_slice(raw);
		Ok(match self.endianness {
			Endianness::Little => u32::from_le_bytes(buf),
			Endianness::Big => u32::from_be_bytes(buf),
		})
	}
}
