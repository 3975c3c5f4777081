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
	/// Field key, optionally with an element, e.g. `origin[1]`.
	pub key: String,
	#[command(flatten)]
	pub read: ReadArgs,
}

pub fn run(args: Args) -> Result<()> {
	let address = FieldAddress::parse(&args.section, args.index, &args.key)?;
	let file = BlightFile::open(&args.path, args.read.options())?;
	println!("{}", file.get(&address)?);
	Ok(())
}
