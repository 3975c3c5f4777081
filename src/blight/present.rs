//! Human-readable rendering of parsed containers.

use crate::blight::codec::FormatSpec;
use crate::blight::{Blight, FieldView, LightType, Section};

/// Presenter configuration, passed explicitly to every render call.
#[derive(Debug, Clone, Copy)]
pub struct PresentOptions {
	/// Override for float fields (default: two fractional digits).
	pub float_spec: Option<FormatSpec>,
	/// Override for integer fields.
	pub int_spec: Option<FormatSpec>,
	/// Spaces before each field line.
	pub indent: usize,
	/// Append the light type name to `lightType` values.
	pub label_light_types: bool,
}

impl Default for PresentOptions {
	fn default() -> Self {
		Self {
			float_spec: None,
			int_spec: None,
			indent: 2,
			label_light_types: true,
		}
	}
}

/// One rendered record.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSection {
	/// Record category.
	pub section: Section,
	/// Record index; `None` for the header.
	pub index: Option<usize>,
	/// Rendered fields in file order.
	pub fields: Vec<ReportField>,
}

impl ReportSection {
	/// `header`, `lobj[3]`, `ambient[0]`.
	pub fn title(&self) -> String {
		match self.index {
			Some(index) => format!("{}[{index}]", self.section.as_str()),
			None => self.section.as_str().to_owned(),
		}
	}
}

/// One rendered field.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportField {
	/// Schema key.
	pub key: &'static str,
	/// Element type label.
	pub ty: &'static str,
	/// Formatted value.
	pub text: String,
}

/// Render every populated record, header first, then lobjs, then ambients.
pub fn report(blight: &Blight, bytes: &[u8], options: &PresentOptions) -> Vec<ReportSection> {
	let mut out = Vec::with_capacity(1 + blight.lobjs().len() + blight.ambients().len());

	out.push(render_section(blight, bytes, options, Section::Header, None, &blight.header.fields()));
	for (index, lobj) in blight.lobjs().iter().enumerate() {
		out.push(render_section(blight, bytes, options, Section::Lobj, Some(index), &lobj.fields()));
	}
	for (index, ambient) in blight.ambients().iter().enumerate() {
		out.push(render_section(blight, bytes, options, Section::Ambient, Some(index), &ambient.fields()));
	}

	out
}

/// Render the whole container as `key: value` lines grouped by record.
pub fn blight_to_string(blight: &Blight, bytes: &[u8], options: &PresentOptions) -> String {
	let pad = " ".repeat(options.indent);
	let mut out = String::new();
	for section in report(blight, bytes, options) {
		out.push_str(&section.title());
		out.push_str(":\n");
		for field in section.fields {
			out.push_str(&format!("{pad}{}: {}\n", field.key, field.text));
		}
	}
	out
}

fn render_section(
	blight: &Blight,
	bytes: &[u8],
	options: &PresentOptions,
	section: Section,
	index: Option<usize>,
	fields: &[(&'static str, FieldView)],
) -> ReportSection {
	let fields = fields
		.iter()
		.map(|&(key, view)| ReportField {
			key,
			ty: view.tag.label(),
			text: render_field(blight, bytes, options, key, &view),
		})
		.collect();

	ReportSection { section, index, fields }
}

fn render_field(blight: &Blight, bytes: &[u8], options: &PresentOptions, key: &str, view: &FieldView) -> String {
	if view.tag.is_char() && view.count > 1 {
		return ascii_label(bytes.get(view.range()).unwrap_or(&[]));
	}

	let spec = if view.tag.is_float() {
		options.float_spec.as_ref()
	} else if view.tag.is_int() {
		options.int_spec.as_ref()
	} else {
		None
	};
	let text = view.format(bytes, spec, blight.endianness());

	if options.label_light_types && key == "lightType" {
		if let Some(byte) = bytes.get(view.offset) {
			let kind = LightType::from_byte(*byte);
			return format!("{text} ({})", kind.as_str());
		}
	}
	text
}

/// Render a magic code as printable ASCII, `.` for anything else.
pub(crate) fn ascii_label(bytes: &[u8]) -> String {
	bytes
		.iter()
		.map(|byte| {
			if byte.is_ascii_graphic() || *byte == b' ' {
				char::from(*byte)
			} else {
				'.'
			}
		})
		.collect()
}

#[cfg(test)]
mod tests;
