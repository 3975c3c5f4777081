use std::path::PathBuf;

use blightdoc::blight::{BlightFile, Result};

use crate::cmd::util::{ReadArgs, emit_json};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long)]
	pub json: bool,
	#[command(flatten)]
	pub read: ReadArgs,
}

/// Print header fields and a one-line summary per light.
pub fn run(args: Args) -> Result<()> {
	let Args { path, json, read } = args;

	let file = BlightFile::open(&path, read.options())?;
	let blight = file.parse()?;
	let bytes = file.bytes();
	let endianness = blight.endianness();
	let header = &blight.header;

	let mut lights = Vec::with_capacity(blight.lobjs().len());
	for (index, lobj) in blight.lobjs().iter().enumerate() {
		lights.push(LightJson {
			index,
			light_type: lobj.kind(bytes)?.as_str(),
			ambient: lobj.ambient(bytes, endianness)?,
		});
	}

	let payload = InfoJson {
		path: path.display().to_string(),
		endianness: endianness.as_str(),
		filesize: header.filesize.u32(bytes, endianness)?,
		actual_size: bytes.len(),
		version: header.version.u8(bytes)?,
		lobj_count: blight.lobjs().len(),
		ambient_count: blight.ambients().len(),
		lights,
	};

	if json {
		return emit_json(&payload);
	}

	println!("path: {}", payload.path);
	println!("endianness: {}", payload.endianness);
	println!("filesize: {}", payload.filesize);
	println!("actual_size: {}", payload.actual_size);
	println!("version: {}", payload.version);
	println!("lobj_count: {}", payload.lobj_count);
	println!("ambient_count: {}", payload.ambient_count);
	println!("lights:");
	for light in &payload.lights {
		match light.ambient {
			Some(ambient) => println!("  {}: {} ambient={ambient}", light.index, light.light_type),
			None => println!("  {}: {} ambient=-", light.index, light.light_type),
		}
	}

	Ok(())
}

#[derive(serde::Serialize)]
struct LightJson {
	index: usize,
	#[serde(rename = "type")]
	light_type: &'static str,
	ambient: Option<u16>,
}

#[derive(serde::Serialize)]
struct InfoJson {
	path: String,
	endianness: &'static str,
	filesize: u32,
	actual_size: usize,
	version: u8,
	lobj_count: usize,
	ambient_count: usize,
	lights: Vec<LightJson>,
}
