use std::fmt;

use tracing::debug;

use crate::blight::present::ascii_label;
use crate::blight::{BlightError, FieldKey, ReadOptions, Result, Section, read_blight};

/// Symbolic field address: section, record index, and field key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldAddress {
	/// Record category.
	pub section: Section,
	/// Record index; ignored for [`Section::Header`].
	pub index: usize,
	/// Field within the record.
	pub key: FieldKey,
}

impl FieldAddress {
	/// Build an address from user-facing strings such as
	/// `("lobj", 0, "origin[1]")`.
	pub fn parse(section: &str, index: usize, key: &str) -> Result<Self> {
		Ok(Self {
			section: Section::parse(section)?,
			index,
			key: FieldKey::parse(key)?,
		})
	}
}

impl fmt::Display for FieldAddress {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.section {
			Section::Header => write!(f, "header.{}", self.key),
			section => write!(f, "{}[{}].{}", section.as_str(), self.index, self.key),
		}
	}
}

/// Re-parse `bytes`, resolve `address`, and write `value` into the field.
///
/// The buffer is only modified when the address resolves, every element of
/// `value` converts to the field's type, and the edited buffer still parses
/// (a `lobjCount` past the records present is rejected and rolled back).
pub fn set_field(bytes: &mut [u8], address: &FieldAddress, value: &str, options: &ReadOptions) -> Result<()> {
	let blight = read_blight(bytes, options)?;
	let view = blight.resolve(address)?;
	let previous = view.bytes(bytes)?.to_vec();

	view.write(bytes, value, blight.endianness()).ok_or_else(|| BlightError::InvalidValue {
		field: address.key.to_string(),
		ty: view.tag.label(),
		value: value.to_owned(),
	})?;

	if let Err(err) = read_blight(bytes, options) {
		bytes[view.range()].copy_from_slice(&previous);
		return Err(err);
	}

	debug!(
		section = address.section.as_str(),
		index = address.index,
		key = %address.key,
		offset = view.offset,
		"field set"
	);
	Ok(())
}

/// Re-parse `bytes` and render the field at `address` with default formatting.
pub fn get_field(bytes: &[u8], address: &FieldAddress, options: &ReadOptions) -> Result<String> {
	let blight = read_blight(bytes, options)?;
	let view = blight.resolve(address)?;
	if view.tag.is_char() && view.count > 1 {
		return Ok(ascii_label(view.bytes(bytes)?));
	}
	Ok(view.format(bytes, None, blight.endianness()))
}

#[cfg(test)]
mod tests;
