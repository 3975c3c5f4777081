//! Shared test helpers: synthetic Blight containers.

use std::path::{Path, PathBuf};

/// Size of a serialized light object record.
pub const LOBJ_RECORD_SIZE: u32 = 52;

/// Field values for one light object record.
#[derive(Debug, Clone, Copy)]
pub struct LobjSpec {
	/// Record magic.
	pub magic: [u8; 4],
	/// Declared section size.
	pub section_size: u32,
	/// Record version.
	pub version: u8,
	/// Light type byte.
	pub light_type: u8,
	/// Ambient index (`0xffff` for none).
	pub ambient_index: u16,
	/// Light position.
	pub origin: [f32; 3],
	/// Light target.
	pub destination: [f32; 3],
	/// Colour effect vector.
	pub color_effect: [f32; 3],
	/// Light colour.
	pub rgba: [u8; 4],
}

impl Default for LobjSpec {
	fn default() -> Self {
		Self {
			magic: *b"LOBJ",
			section_size: LOBJ_RECORD_SIZE,
			version: 2,
			light_type: 0,
			ambient_index: 0xffff,
			origin: [0.0; 3],
			destination: [0.0; 3],
			color_effect: [1.0; 3],
			rgba: [255; 4],
		}
	}
}

/// Builder for Blight byte buffers, including deliberately broken ones.
#[derive(Debug, Clone)]
pub struct BlightBuilder {
	magic: [u8; 4],
	version: u8,
	big_endian: bool,
	lobjs: Vec<LobjSpec>,
	ambients: Vec<[u8; 4]>,
	lobj_count: Option<u16>,
	ambient_count: Option<u16>,
	filesize: Option<u32>,
}

impl Default for BlightBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl BlightBuilder {
	/// Empty little-endian container.
	pub fn new() -> Self {
		Self {
			magic: *b"LGHT",
			version: 2,
			big_endian: false,
			lobjs: Vec::new(),
			ambients: Vec::new(),
			lobj_count: None,
			ambient_count: None,
			filesize: None,
		}
	}

	/// Override the header magic.
	pub fn magic(mut self, magic: [u8; 4]) -> Self {
		self.magic = magic;
		self
	}

	/// Set the header version.
	pub fn version(mut self, version: u8) -> Self {
		self.version = version;
		self
	}

	/// Serialize multi-byte fields big-endian.
	pub fn big_endian(mut self) -> Self {
		self.big_endian = true;
		self
	}

	/// Append a light object record.
	pub fn lobj(mut self, lobj: LobjSpec) -> Self {
		self.lobjs.push(lobj);
		self
	}

	/// Append an ambient record.
	pub fn ambient(mut self, rgba: [u8; 4]) -> Self {
		self.ambients.push(rgba);
		self
	}

	/// Declare a light object count that differs from the records written.
	pub fn lobj_count(mut self, count: u16) -> Self {
		self.lobj_count = Some(count);
		self
	}

	/// Declare an ambient count that differs from the records written.
	pub fn ambient_count(mut self, count: u16) -> Self {
		self.ambient_count = Some(count);
		self
	}

	/// Declare a file size that differs from the buffer length.
	pub fn filesize(mut self, filesize: u32) -> Self {
		self.filesize = Some(filesize);
		self
	}

	/// Serialize the container.
	pub fn build(&self) -> Vec<u8> {
		let mut out = Vec::new();
		out.extend_from_slice(&self.magic);
		let filesize_at = out.len();
		self.put_u32(&mut out, 0);
		out.push(self.version);
		self.put_u16(&mut out, self.lobj_count.unwrap_or(self.lobjs.len() as u16));
		self.put_u16(&mut out, self.ambient_count.unwrap_or(self.ambients.len() as u16));

		for lobj in &self.lobjs {
			out.extend_from_slice(&lobj.magic);
			self.put_u32(&mut out, lobj.section_size);
			out.push(lobj.version);
			out.push(lobj.light_type);
			self.put_u16(&mut out, lobj.ambient_index);
			for value in lobj.origin.iter().chain(&lobj.destination).chain(&lobj.color_effect) {
				self.put_u32(&mut out, value.to_bits());
			}
			out.extend_from_slice(&lobj.rgba);
		}

		for rgba in &self.ambients {
			out.extend_from_slice(rgba);
		}

		let filesize = self.filesize.unwrap_or(out.len() as u32);
		let raw = if self.big_endian { filesize.to_be_bytes() } else { filesize.to_le_bytes() };
		out[filesize_at..filesize_at + 4].copy_from_slice(&raw);
		out
	}

	fn put_u16(&self, out: &mut Vec<u8>, value: u16) {
		let raw = if self.big_endian { value.to_be_bytes() } else { value.to_le_bytes() };
		out.extend_from_slice(&raw);
	}

	fn put_u32(&self, out: &mut Vec<u8>, value: u32) {
		let raw = if self.big_endian { value.to_be_bytes() } else { value.to_le_bytes() };
		out.extend_from_slice(&raw);
	}
}

/// Two lights (one referencing an ambient) and one ambient record.
pub fn sample_blight() -> BlightBuilder {
	BlightBuilder::new()
		.lobj(LobjSpec {
			light_type: 1,
			ambient_index: 0,
			origin: [1.0, 2.0, 3.0],
			destination: [0.0, -1.0, 0.5],
			rgba: [255, 128, 64, 255],
			..LobjSpec::default()
		})
		.lobj(LobjSpec {
			light_type: 0,
			origin: [-4.25, 0.0, 10.0],
			rgba: [0, 0, 255, 128],
			..LobjSpec::default()
		})
		.ambient([32, 32, 48, 255])
}

/// Write `bytes` to `dir/name` and return the path.
pub fn write_fixture(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
	let path = dir.join(name);
	std::fs::write(&path, bytes).expect("fixture writes");
	path
}
