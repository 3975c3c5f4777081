use std::path::PathBuf;

use blightdoc::blight::{BlightFile, FormatSpec, PresentOptions, Result, Section, blight_to_string, report};

use crate::cmd::util::{ReadArgs, emit_json};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long)]
	pub json: bool,
	/// printf-style width/precision for float fields, e.g. `8.3`.
	#[arg(long)]
	pub precision: Option<FormatSpec>,
	/// Same, applied to integer fields.
	#[arg(long = "int-precision")]
	pub int_precision: Option<FormatSpec>,
	#[arg(long, default_value_t = 2)]
	pub indent: usize,
	/// Print `lightType` as a bare number.
	#[arg(long = "no-labels")]
	pub no_labels: bool,
	#[command(flatten)]
	pub read: ReadArgs,
}

/// Print every populated record.
pub fn run(args: Args) -> Result<()> {
	let Args {
		path,
		json,
		precision,
		int_precision,
		indent,
		no_labels,
		read,
	} = args;

	let file = BlightFile::open(&path, read.options())?;
	let blight = file.parse()?;
	let options = PresentOptions {
		float_spec: precision,
		int_spec: int_precision,
		indent,
		label_light_types: !no_labels,
	};

	if !json {
		print!("{}", blight_to_string(&blight, file.bytes(), &options));
		return Ok(());
	}

	let mut header = serde_json::Map::new();
	let mut lobjs = Vec::with_capacity(blight.lobjs().len());
	let mut ambients = Vec::with_capacity(blight.ambients().len());
	for section in report(&blight, file.bytes(), &options) {
		let fields: FieldsJson = section
			.fields
			.into_iter()
			.map(|field| (field.key.to_owned(), serde_json::Value::String(field.text)))
			.collect();
		match section.section {
			Section::Header => header = fields,
			Section::Lobj => lobjs.push(fields),
			Section::Ambient => ambients.push(fields),
		}
	}

	emit_json(&ShowJson {
		path: path.display().to_string(),
		endianness: blight.endianness().as_str(),
		header,
		lobjs,
		ambients,
	})
}

type FieldsJson = serde_json::Map<String, serde_json::Value>;

#[derive(serde::Serialize)]
struct ShowJson {
	path: String,
	endianness: &'static str,
	header: FieldsJson,
	lobjs: Vec<FieldsJson>,
	ambients: Vec<FieldsJson>,
}
