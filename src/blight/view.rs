use std::ops::Range;

use crate::blight::bytes::Cursor;
use crate::blight::codec::{self, FormatSpec};
use crate::blight::schema::FieldDef;
use crate::blight::{BlightError, Endianness, Result, TypeTag};

/// Non-owning view of one field inside a backing buffer.
///
/// A view is only an offset, element type, and element count. Every read goes
/// back to the buffer, so values always reflect its current contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldView {
	/// Byte offset of the first element.
	pub offset: usize,
	/// Element type.
	pub tag: TypeTag,
	/// Element count.
	pub count: usize,
}

impl Default for FieldView {
	fn default() -> Self {
		Self {
			offset: 0,
			tag: TypeTag::UINT8,
			count: 0,
		}
	}
}

impl FieldView {
	/// Consume `def.byte_len()` bytes from `cursor` and view them.
	pub(crate) fn take(cursor: &mut Cursor<'_>, def: &FieldDef) -> Result<Self> {
		let offset = cursor.take(def.byte_len())?;
		Ok(Self {
			offset,
			tag: def.tag,
			count: def.count,
		})
	}

	/// Total bytes covered by the view.
	pub fn byte_len(&self) -> usize {
		self.tag.byte_len() * self.count
	}

	/// Byte range covered by the view.
	pub fn range(&self) -> Range<usize> {
		self.offset..self.offset + self.byte_len()
	}

	/// View of a single element.
	pub fn element(&self, index: usize) -> Option<Self> {
		if index >= self.count {
			return None;
		}
		Some(Self {
			offset: self.offset + index * self.tag.byte_len(),
			tag: self.tag,
			count: 1,
		})
	}

	/// Borrow the viewed bytes, failing if the buffer no longer covers them.
	pub fn bytes<'a>(&self, buf: &'a [u8]) -> Result<&'a [u8]> {
		buf.get(self.range()).ok_or(BlightError::UnexpectedEof {
			at: self.offset,
			need: self.byte_len(),
			rem: buf.len().saturating_sub(self.offset),
		})
	}

	/// Read the first element as `u8`.
	pub fn u8(&self, buf: &[u8]) -> Result<u8> {
		let raw = self.bytes(buf)?;
		let mut cursor = Cursor::new(raw, Endianness::Little);
		cursor.read_u8()
	}

	/// Read the first element as `u16`.
	pub fn u16(&self, buf: &[u8], endianness: Endianness) -> Result<u16> {
		let raw = self.bytes(buf)?;
		let mut cursor = Cursor::new(raw, endianness);
		cursor.read_u16()
	}

	/// Read the first element as `u32`.
	pub fn u32(&self, buf: &[u8], endianness: Endianness) -> Result<u32> {
		let raw = self.bytes(buf)?;
		let mut cursor = Cursor::new(raw, endianness);
		cursor.read_u32()
	}

	/// Read every element as `f32`.
	pub fn f32s(&self, buf: &[u8], endianness: Endianness) -> Result<Vec<f32>> {
		let raw = self.bytes(buf)?;
		Ok(raw
			.chunks_exact(4)
			.filter_map(|chunk| endianness.to_le_array::<4>(chunk))
			.map(f32::from_le_bytes)
			.collect())
	}

	/// Render every element through the codec, joined with `", "`.
	///
	/// Bytes missing from `buf` render as an empty string.
	pub fn format(&self, buf: &[u8], spec: Option<&FormatSpec>, endianness: Endianness) -> String {
		let raw = buf.get(self.range()).unwrap_or(&[]);
		let width = self.tag.byte_len().max(1);
		raw.chunks(width)
			.map(|chunk| codec::format(self.tag, chunk, spec, endianness))
			.collect::<Vec<_>>()
			.join(", ")
	}

	/// Parse `text` and write it through the view into `buf`.
	///
	/// Multi-element views take `count` items separated by commas or
	/// whitespace; byte arrays also accept exactly `count` ASCII characters.
	/// Nothing is written unless every element converts.
	pub fn write(&self, buf: &mut [u8], text: &str, endianness: Endianness) -> Option<()> {
		let range = self.range();
		let target = buf.get_mut(range)?;

		if self.count > 1 && self.tag.is_char() && text.len() == self.count && text.is_ascii() {
			target.copy_from_slice(text.as_bytes());
			return Some(());
		}

		let items: Vec<&str> = if self.count == 1 {
			vec![text]
		} else {
			text.split(|ch: char| ch == ',' || ch.is_whitespace())
				.filter(|item| !item.is_empty())
				.collect()
		};
		if items.len() != self.count {
			return None;
		}

		let width = self.tag.byte_len();
		let mut scratch = target.to_vec();
		for (item, chunk) in items.into_iter().zip(scratch.chunks_mut(width)) {
			codec::encode(self.tag, item, chunk, endianness)?;
		}
		target.copy_from_slice(&scratch);
		Some(())
	}
}
