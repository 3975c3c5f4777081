//! Text <-> binary conversion for [`TypeTag`] scalars.
//!
//! Parsing follows C library conventions (`strtol` base detection, `atoi`
//! prefixes) so values typed by hand behave the way tool users expect.
//! Parse functions report failure with `None`; [`format`] never fails.

use std::str::FromStr;

use crate::blight::{BlightError, Endianness, ScalarKind, TypeTag};

/// Case-insensitive literal accepted as boolean true.
pub const TRUE_LITERAL: &str = "TRUE";
/// Case-insensitive literal accepted as boolean false.
pub const FALSE_LITERAL: &str = "FALSE";

const DEFAULT_FLOAT_PRECISION: usize = 2;

/// Width/precision override for [`format`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormatSpec {
	/// Minimum rendered width, right-aligned with spaces.
	pub width: Option<usize>,
	/// Fractional digits for floats, minimum digit count for integers.
	pub precision: Option<usize>,
}

impl FormatSpec {
	/// Spec with only a precision.
	pub fn precision(precision: usize) -> Self {
		Self {
			width: None,
			precision: Some(precision),
		}
	}
}

impl FromStr for FormatSpec {
	type Err = BlightError;

	/// Parse `"8.3"`, `".3"`, `"5"` or the same with a leading `%`.
	fn from_str(input: &str) -> Result<Self, Self::Err> {
		let invalid = || BlightError::InvalidValue {
			field: "format".to_owned(),
			ty: "format spec",
			value: input.to_owned(),
		};

		let body = input.strip_prefix('%').unwrap_or(input);
		if body.is_empty() {
			return Err(invalid());
		}

		let (width, precision) = match body.split_once('.') {
			Some((width, precision)) => (width, Some(precision)),
			None => (body, None),
		};

		let digits = |text: &str| -> Result<Option<usize>, BlightError> {
			if text.is_empty() {
				return Ok(None);
			}
			if !text.bytes().all(|byte| byte.is_ascii_digit()) {
				return Err(invalid());
			}
			text.parse::<usize>().map(Some).map_err(|_| invalid())
		};

		Ok(Self {
			width: digits(width)?,
			// printf treats a bare `.` as precision zero.
			precision: match precision {
				Some(text) => Some(digits(text)?.unwrap_or(0)),
				None => None,
			},
		})
	}
}

/// Parse a boolean.
///
/// `TRUE` (any case) or a non-zero leading integer is true; `FALSE` (any case)
/// or a leading `'0'` is false. The true checks win, so `"1abc"` is true.
pub fn parse_bool(text: &str) -> Option<bool> {
	if text.eq_ignore_ascii_case(TRUE_LITERAL) || leading_int_is_nonzero(text) {
		return Some(true);
	}
	if text.eq_ignore_ascii_case(FALSE_LITERAL) || text.starts_with('0') {
		return Some(false);
	}
	None
}

/// Parse a whole string as an integer with `strtol` base detection.
///
/// The result must fit `i64`; `UINT64` values above `i64::MAX` only
/// convert through [`encode`].
pub fn parse_int(text: &str) -> Option<i64> {
	let (negative, magnitude) = parse_integer(text)?;
	if negative {
		0_i64.checked_sub_unsigned(magnitude)
	} else {
		i64::try_from(magnitude).ok()
	}
}

/// Parse a whole string as a single precision float.
///
/// Leading C whitespace is skipped like `strtof`, but the rest uses Rust
/// float syntax: hex floats such as `0x1p3` are rejected.
pub fn parse_float(text: &str) -> Option<f32> {
	trim_c_space(text).parse::<f32>().ok()
}

/// Parse a whole string as a double precision float, with the same syntax as
/// [`parse_float`].
pub fn parse_double(text: &str) -> Option<f64> {
	trim_c_space(text).parse::<f64>().ok()
}

/// Render the scalar stored in `bytes` as text.
///
/// `spec` overrides the default precision for every tag except `BOOL1`, which
/// always renders `True` or `False`. Unknown tags and short buffers render
/// the raw bytes as uppercase hex.
pub fn format(tag: TypeTag, bytes: &[u8], spec: Option<&FormatSpec>, endianness: Endianness) -> String {
	let precision = spec.and_then(|item| item.precision);
	let width = spec.and_then(|item| item.width);

	let text = match (tag.kind(), tag.size()) {
		(ScalarKind::Bool, 1) => {
			let Some(byte) = bytes.first() else {
				return hex(bytes);
			};
			return if *byte != 0 { "True".to_owned() } else { "False".to_owned() };
		}
		(ScalarKind::Unsigned, 8 | 16 | 32 | 64) => read_unsigned(tag, bytes, endianness).map(|value| format_int(false, value, precision)),
		(ScalarKind::Signed, 8 | 16 | 32 | 64) => {
			read_signed(tag, bytes, endianness).map(|value| format_int(value < 0, value.unsigned_abs(), precision))
		}
		(ScalarKind::Float, 32) => endianness
			.to_le_array::<4>(bytes)
			.map(|raw| format_fixed(f64::from(f32::from_le_bytes(raw)), precision.unwrap_or(DEFAULT_FLOAT_PRECISION))),
		(ScalarKind::Float, 64) => endianness
			.to_le_array::<8>(bytes)
			.map(|raw| format_scientific(f64::from_le_bytes(raw), precision.unwrap_or(DEFAULT_FLOAT_PRECISION))),
		(ScalarKind::Float, 128) => endianness
			.to_le_array::<10>(bytes)
			.map(|raw| format_scientific(f80_to_f64(raw), precision.unwrap_or(DEFAULT_FLOAT_PRECISION))),
		_ => None,
	};

	pad_left(text.unwrap_or_else(|| hex(bytes)), width)
}

/// Parse `text` as `tag` and write the native bytes into `out`.
///
/// Integers must fit the tag's range. `out` is only written on success.
pub fn encode(tag: TypeTag, text: &str, out: &mut [u8], endianness: Endianness) -> Option<()> {
	let len = tag.byte_len();
	if len == 0 || out.len() < len {
		return None;
	}

	match (tag.kind(), tag.size()) {
		(ScalarKind::Unsigned, width @ 1..=64) => {
			let (negative, magnitude) = parse_integer(text)?;
			if (negative && magnitude != 0) || magnitude > unsigned_max(width) {
				return None;
			}
			endianness.write_le(&magnitude.to_le_bytes()[..len], &mut out[..len]);
		}
		(ScalarKind::Signed, width @ 1..=64) => {
			let (negative, magnitude) = parse_integer(text)?;
			let value = if negative { -i128::from(magnitude) } else { i128::from(magnitude) };
			let half = 1_i128 << (width - 1);
			if value < -half || value >= half {
				return None;
			}
			endianness.write_le(&(value as i64).to_le_bytes()[..len], &mut out[..len]);
		}
		(ScalarKind::Float, 32) => {
			let value = parse_float(text)?;
			endianness.write_le(&value.to_le_bytes(), &mut out[..4]);
		}
		(ScalarKind::Float, 64) => {
			let value = parse_double(text)?;
			endianness.write_le(&value.to_le_bytes(), &mut out[..8]);
		}
		(ScalarKind::Float, 128) => {
			let value = parse_double(text)?;
			endianness.write_le(&f64_to_f80(value), &mut out[..10]);
			out[10..len].fill(0);
		}
		(ScalarKind::Bool, _) => {
			out[0] = u8::from(parse_bool(text)?);
			out[1..len].fill(0);
		}
		(ScalarKind::Byte, 8) => {
			out[0] = parse_byte(text)?;
		}
		(ScalarKind::Nibble, 4) => {
			let (negative, magnitude) = parse_integer(text)?;
			if negative || magnitude > 0x0f {
				return None;
			}
			out[0] = magnitude as u8;
		}
		_ => return None,
	}

	Some(())
}

fn read_unsigned(tag: TypeTag, bytes: &[u8], endianness: Endianness) -> Option<u64> {
	Some(match tag.size() {
		8 => u64::from(*bytes.first()?),
		16 => u64::from(u16::from_le_bytes(endianness.to_le_array(bytes)?)),
		32 => u64::from(u32::from_le_bytes(endianness.to_le_array(bytes)?)),
		64 => u64::from_le_bytes(endianness.to_le_array(bytes)?),
		_ => return None,
	})
}

fn read_signed(tag: TypeTag, bytes: &[u8], endianness: Endianness) -> Option<i64> {
	Some(match tag.size() {
		8 => i64::from(*bytes.first()? as i8),
		16 => i64::from(i16::from_le_bytes(endianness.to_le_array(bytes)?)),
		32 => i64::from(i32::from_le_bytes(endianness.to_le_array(bytes)?)),
		64 => i64::from_le_bytes(endianness.to_le_array(bytes)?),
		_ => return None,
	})
}

fn unsigned_max(width: u8) -> u64 {
	if width >= 64 { u64::MAX } else { (1_u64 << width) - 1 }
}

fn parse_byte(text: &str) -> Option<u8> {
	if let Some((false, magnitude)) = parse_integer(text) {
		return u8::try_from(magnitude).ok();
	}

	let mut chars = text.chars();
	match (chars.next(), chars.next()) {
		(Some(ch), None) if ch.is_ascii() => Some(ch as u8),
		_ => None,
	}
}

/// `strtol(text, &end, 0)` that must consume the entire input.
///
/// Returns `(negative, magnitude)` so callers can range check against any
/// width, including the full `u64` range.
fn parse_integer(text: &str) -> Option<(bool, u64)> {
	let body = trim_c_space(text);
	let (negative, body) = match body.as_bytes().first() {
		Some(b'-') => (true, &body[1..]),
		Some(b'+') => (false, &body[1..]),
		_ => (false, body),
	};

	let (radix, digits) = if let Some(hex) = body.strip_prefix("0x").or_else(|| body.strip_prefix("0X")) {
		(16, hex)
	} else if body.len() > 1 && body.starts_with('0') {
		(8, &body[1..])
	} else {
		(10, body)
	};

	if digits.is_empty() || !digits.chars().all(|ch| ch.is_digit(radix)) {
		return None;
	}

	u64::from_str_radix(digits, radix).ok().map(|magnitude| (negative, magnitude))
}

/// `atoi(text) != 0`: only the leading decimal prefix matters.
fn leading_int_is_nonzero(text: &str) -> bool {
	let body = trim_c_space(text);
	let body = body.strip_prefix(['-', '+']).unwrap_or(body);
	body.bytes().take_while(u8::is_ascii_digit).any(|byte| byte != b'0')
}

/// Strip the leading whitespace that `strtol`/`strtod` skip.
fn trim_c_space(text: &str) -> &str {
	text.trim_start_matches([' ', '\t', '\n', '\r', '\x0b', '\x0c'])
}

fn format_int(negative: bool, magnitude: u64, precision: Option<usize>) -> String {
	let digits = magnitude.to_string();
	let min_digits = precision.unwrap_or(1);
	let sign = if negative { "-" } else { "" };
	// printf: zero value with precision 0 prints no digits.
	if min_digits == 0 && magnitude == 0 {
		return sign.to_owned();
	}
	format!("{sign}{digits:0>min_digits$}")
}

fn format_fixed(value: f64, precision: usize) -> String {
	if let Some(text) = non_finite(value, false) {
		return text;
	}
	format!("{value:.precision$}")
}

/// printf `%E`: mantissa, uppercase `E`, signed exponent of at least two digits.
fn format_scientific(value: f64, precision: usize) -> String {
	if let Some(text) = non_finite(value, true) {
		return text;
	}

	let text = format!("{value:.precision$E}");
	let Some((mantissa, exponent)) = text.split_once('E') else {
		return text;
	};
	let exponent: i32 = exponent.parse().unwrap_or(0);
	let sign = if exponent < 0 { '-' } else { '+' };
	format!("{mantissa}E{sign}{:02}", exponent.unsigned_abs())
}

fn non_finite(value: f64, upper: bool) -> Option<String> {
	let text = if value.is_nan() {
		"nan"
	} else if value == f64::INFINITY {
		"inf"
	} else if value == f64::NEG_INFINITY {
		"-inf"
	} else {
		return None;
	};
	Some(if upper { text.to_ascii_uppercase() } else { text.to_owned() })
}

fn pad_left(text: String, width: Option<usize>) -> String {
	match width {
		Some(width) if text.len() < width => format!("{text:>width$}"),
		_ => text,
	}
}

fn hex(bytes: &[u8]) -> String {
	bytes.iter().map(|byte| format!("{byte:02X}")).collect()
}

const F80_BIAS: i32 = 16383;
const F64_BIAS: i32 = 1023;

/// Decode an x87 80-bit extended float (little-endian byte layout).
fn f80_to_f64(raw: [u8; 10]) -> f64 {
	let mut mant_raw = [0_u8; 8];
	mant_raw.copy_from_slice(&raw[..8]);
	let mantissa = u64::from_le_bytes(mant_raw);
	let sign_exp = u16::from_le_bytes([raw[8], raw[9]]);
	let negative = sign_exp & 0x8000 != 0;
	let exponent = i32::from(sign_exp & 0x7fff);

	let magnitude = if exponent == 0x7fff {
		if mantissa << 1 == 0 { f64::INFINITY } else { f64::NAN }
	} else if mantissa == 0 {
		0.0
	} else {
		// Split the scale so subnormal results do not flush to zero early.
		let scale = if exponent == 0 { 1 - F80_BIAS - 63 } else { exponent - F80_BIAS - 63 };
		let half = scale / 2;
		(mantissa as f64) * 2_f64.powi(half) * 2_f64.powi(scale - half)
	};

	if negative { -magnitude } else { magnitude }
}

/// Encode a double as an x87 80-bit extended float (little-endian byte layout).
fn f64_to_f80(value: f64) -> [u8; 10] {
	let bits = value.to_bits();
	let sign: u16 = if bits >> 63 != 0 { 0x8000 } else { 0 };
	let exp11 = ((bits >> 52) & 0x7ff) as i32;
	let fraction = bits & ((1_u64 << 52) - 1);

	let (exponent, mantissa) = if exp11 == 0x7ff {
		let mantissa = if fraction == 0 { 1_u64 << 63 } else { 0xC000_0000_0000_0000 };
		(0x7fff_u16, mantissa)
	} else if exp11 == 0 && fraction == 0 {
		(0, 0)
	} else if exp11 == 0 {
		let shift = fraction.leading_zeros();
		let exponent = 1 - F64_BIAS - 52 + 63 - shift as i32 + F80_BIAS;
		(exponent as u16, fraction << shift)
	} else {
		let exponent = exp11 - F64_BIAS + F80_BIAS;
		(exponent as u16, (1_u64 << 63) | (fraction << 11))
	};

	let mut out = [0_u8; 10];
	out[..8].copy_from_slice(&mantissa.to_le_bytes());
	out[8..].copy_from_slice(&(sign | exponent).to_le_bytes());
	out
}
