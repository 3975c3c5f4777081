use std::path::PathBuf;

use blightdoc::blight::{BlightFile, FieldAddress, Result};

use crate::cmd::util::ReadArgs;

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	/// `header`, `lobj`, or `ambient`.
	pub section: String,
	/// Record index; ignored for `header`.
	pub index: usize,
	/// Field key, optionally with an element, e.g. `rgba[3]`.
	pub key: String,
	/// New value; array fields take comma or space separated elements.
	#[arg(allow_hyphen_values = true)]
	pub value: String,
	/// Write the edited container here instead of in place.
	#[arg(long, short)]
	pub output: Option<PathBuf>,
	#[command(flatten)]
	pub read: ReadArgs,
}

/// Update one field and write the container back.
pub fn run(args: Args) -> Result<()> {
	let address = FieldAddress::parse(&args.section, args.index, &args.key)?;
	let mut file = BlightFile::open(&args.path, args.read.options())?;
	file.set(&address, &args.value)?;

	let target = args.output.as_ref().unwrap_or(&args.path);
	file.save(target)?;
	println!("{address}: {}", file.get(&address)?);
	Ok(())
}
