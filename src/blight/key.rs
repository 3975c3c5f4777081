use std::fmt;

use crate::blight::{BlightError, Result};

/// Field selector within one record: a key with an optional element index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldKey {
	/// Field key, matched case-insensitively against the schema.
	pub name: String,
	/// Zero-based element for array fields.
	pub element: Option<usize>,
}

impl FieldKey {
	/// Parse `name` or `name[index]`.
	pub fn parse(input: &str) -> Result<Self> {
		let invalid = || BlightError::InvalidFieldKey { key: input.to_owned() };

		let bytes = input.as_bytes();
		let mut idx = 0_usize;
		while idx < bytes.len() && (bytes[idx].is_ascii_alphanumeric() || bytes[idx] == b'_') {
			idx += 1;
		}
		if idx == 0 {
			return Err(invalid());
		}
		let name = input[..idx].to_owned();

		if idx == bytes.len() {
			return Ok(Self { name, element: None });
		}

		if bytes[idx] != b'[' || bytes[bytes.len() - 1] != b']' {
			return Err(invalid());
		}
		let digits = &input[idx + 1..bytes.len() - 1];
		if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
			return Err(invalid());
		}
		let element = digits.parse::<usize>().map_err(|_| invalid())?;

		Ok(Self {
			name,
			element: Some(element),
		})
	}
}

impl fmt::Display for FieldKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.element {
			Some(element) => write!(f, "{}[{element}]", self.name),
			None => f.write_str(&self.name),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::FieldKey;
	use crate::blight::BlightError;

	#[test]
	fn parses_plain_and_indexed_keys() {
		let key = FieldKey::parse("lobjCount").expect("plain key");
		assert_eq!(key.name, "lobjCount");
		assert_eq!(key.element, None);

		let key = FieldKey::parse("origin[2]").expect("indexed key");
		assert_eq!(key.name, "origin");
		assert_eq!(key.element, Some(2));
		assert_eq!(key.to_string(), "origin[2]");
	}

	#[test]
	fn rejects_malformed_keys() {
		for input in ["", "[1]", "origin[", "origin[]", "origin[x]", "origin[1]x", "origin.x", "origin[-1]"] {
			let err = FieldKey::parse(input).expect_err("malformed key");
			assert!(matches!(err, BlightError::InvalidFieldKey { .. }), "{input}");
		}
	}
}
