use blightdoc::blight::{Endianness, ReadOptions, Result};
use serde::Serialize;

/// Reader flags shared by every command.
#[derive(clap::Args, Debug, Clone, Copy)]
pub struct ReadArgs {
	/// Multi-byte fields are big-endian.
	#[arg(long = "big-endian")]
	pub big_endian: bool,
	/// Reject section size, ambient index, and file size mismatches.
	#[arg(long)]
	pub strict: bool,
}

impl ReadArgs {
	/// Reader configuration selected by the flags.
	pub fn options(self) -> ReadOptions {
		ReadOptions {
			endianness: if self.big_endian { Endianness::Big } else { Endianness::Little },
			strict_layout: self.strict,
		}
	}
}

/// Print `value` as pretty JSON on stdout.
pub(crate) fn emit_json<T: Serialize>(value: &T) -> Result<()> {
	let text = serde_json::to_string_pretty(value).map_err(std::io::Error::other)?;
	println!("{text}");
	Ok(())
}
