#![allow(missing_docs)]

use std::path::Path;
use std::process::{Command, Output};

use blightdoc_testkit::{BlightBuilder, sample_blight, write_fixture};
use serde_json::Value;

#[test]
fn info_json_summarizes_header_and_lights() {
	let dir = tempfile::tempdir().expect("tempdir");
	let path = write_fixture(dir.path(), "sample.blight", &sample_blight().build());

	let json = run_json(&["info", path_arg(&path).as_str(), "--json", "--strict"]);

	assert_eq!(json["endianness"], "little");
	assert_eq!(json["version"], 2);
	assert_eq!(json["lobj_count"], 2);
	assert_eq!(json["ambient_count"], 1);
	assert_eq!(json["filesize"], json["actual_size"]);
	assert_eq!(json["lights"][0]["type"], "directional");
	assert_eq!(json["lights"][0]["ambient"], 0);
	assert!(json["lights"][1]["ambient"].is_null(), "sentinel index renders as null");
}

#[test]
fn show_json_groups_records_by_section() {
	let dir = tempfile::tempdir().expect("tempdir");
	let path = write_fixture(dir.path(), "sample.blight", &sample_blight().build());

	let json = run_json(&["show", path_arg(&path).as_str(), "--json", "--precision", ".3"]);

	assert_eq!(json["header"]["magic"], "LGHT");
	assert_eq!(json["header"]["lobjCount"], "2");
	assert_eq!(json["lobjs"].as_array().map(Vec::len), Some(2));
	assert_eq!(json["lobjs"][0]["origin"], "1.000, 2.000, 3.000");
	assert_eq!(json["lobjs"][0]["lightType"], "1 (directional)");
	assert_eq!(json["lobjs"][1]["ambientIndex"], "65535");
	assert_eq!(json["ambients"][0]["rgba"], "32, 32, 48, 255");
}

#[test]
fn show_text_output_matches_presenter() {
	let dir = tempfile::tempdir().expect("tempdir");
	let path = write_fixture(dir.path(), "sample.blight", &sample_blight().build());

	let output = run(&["show", path_arg(&path).as_str()]);
	assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

	let stdout = String::from_utf8(output.stdout).expect("utf8 stdout");
	assert!(stdout.starts_with("header:\n  magic: LGHT\n"), "{stdout}");
	assert!(stdout.contains("  lightType: 1 (directional)\n"), "{stdout}");
	assert!(stdout.ends_with("ambient[0]:\n  rgba: 32, 32, 48, 255\n"), "{stdout}");
}

#[test]
fn big_endian_flag_selects_byte_order() {
	let dir = tempfile::tempdir().expect("tempdir");
	let path = write_fixture(dir.path(), "be.blight", &sample_blight().big_endian().build());

	let json = run_json(&["info", path_arg(&path).as_str(), "--json", "--big-endian"]);
	assert_eq!(json["endianness"], "big");
	assert_eq!(json["lobj_count"], 2);

	let output = run(&["info", path_arg(&path).as_str()]);
	assert!(!output.status.success(), "little-endian read of big-endian counts overflows capacity");
}

#[test]
fn format_errors_exit_nonzero() {
	let dir = tempfile::tempdir().expect("tempdir");
	let path = write_fixture(dir.path(), "bad.blight", &BlightBuilder::new().magic(*b"NOPE").build());

	let output = run(&["show", path_arg(&path).as_str()]);
	assert_eq!(output.status.code(), Some(1));
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.starts_with("error: "), "{stderr}");
}

fn run(args: &[&str]) -> Output {
	Command::new(env!("CARGO_BIN_EXE_blightdoc")).args(args).output().expect("command executes")
}

fn run_json(args: &[&str]) -> Value {
	let output = run(args);
	assert!(
		output.status.success(),
		"command failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	serde_json::from_slice(&output.stdout).expect("stdout should be valid json")
}

fn path_arg(path: &Path) -> String {
	path.display().to_string()
}
