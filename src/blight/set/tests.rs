use blightdoc_testkit::sample_blight;

use crate::blight::{BlightError, BlightFile, Endianness, ErrorKind, FieldAddress, ReadOptions, get_field, read_blight, set_field};

fn addr(section: &str, index: usize, key: &str) -> FieldAddress {
	FieldAddress::parse(section, index, key).expect("address parses")
}

#[test]
fn set_is_visible_to_a_fresh_parse() {
	let mut bytes = sample_blight().build();
	let options = ReadOptions::default();

	set_field(&mut bytes, &addr("lobj", 1, "lightType"), "2", &options).expect("set light type");
	set_field(&mut bytes, &addr("lobj", 0, "origin"), "4, 5.5, -6", &options).expect("set origin");
	set_field(&mut bytes, &addr("ambient", 0, "rgba[3]"), "0x10", &options).expect("set alpha");

	let blight = read_blight(&bytes, &options).expect("still parses");
	assert_eq!(blight.lobjs()[1].light_type.u8(&bytes).expect("type"), 2);
	assert_eq!(blight.lobjs()[0].origin.f32s(&bytes, Endianness::Little).expect("origin"), vec![4.0, 5.5, -6.0]);
	assert_eq!(blight.ambients()[0].rgba.bytes(&bytes).expect("rgba"), &[32, 32, 48, 16]);
}

#[test]
fn header_ignores_index_and_keys_ignore_case() {
	let mut bytes = sample_blight().build();
	let options = ReadOptions::default();

	set_field(&mut bytes, &addr("HEADER", 99, "VERSION"), "7", &options).expect("set version");
	assert_eq!(get_field(&bytes, &addr("header", 0, "version"), &options).expect("get"), "7");
}

#[test]
fn get_renders_fields() {
	let bytes = sample_blight().build();
	let options = ReadOptions::default();

	assert_eq!(get_field(&bytes, &addr("header", 0, "magic"), &options).expect("magic"), "LGHT");
	assert_eq!(get_field(&bytes, &addr("lobj", 0, "origin"), &options).expect("origin"), "1.00, 2.00, 3.00");
	assert_eq!(get_field(&bytes, &addr("lobj", 0, "destination[1]"), &options).expect("element"), "-1.00");
	assert_eq!(get_field(&bytes, &addr("lobj", 1, "ambientIndex"), &options).expect("sentinel"), "65535");
}

#[test]
fn address_errors_leave_buffer_untouched() {
	let original = sample_blight().build();
	let mut bytes = original.clone();
	let options = ReadOptions::default();

	let err = set_field(&mut bytes, &addr("lobj", 2, "version"), "1", &options).expect_err("index past count");
	assert!(matches!(err, BlightError::IndexOutOfRange { section: "lobj", index: 2, count: 2 }));
	assert_eq!(err.kind(), ErrorKind::Address);

	let err = set_field(&mut bytes, &addr("ambient", 0, "origin"), "1", &options).expect_err("wrong section key");
	assert!(matches!(err, BlightError::UnknownField { section: "ambient", .. }));

	let err = set_field(&mut bytes, &addr("lobj", 0, "origin[3]"), "1", &options).expect_err("element past len");
	assert!(matches!(err, BlightError::ElementOutOfRange { field: "origin", element: 3, len: 3 }));

	assert!(matches!(FieldAddress::parse("lights", 0, "rgba"), Err(BlightError::UnknownSection { .. })));
	assert!(matches!(FieldAddress::parse("lobj", 0, "rgba[x]"), Err(BlightError::InvalidFieldKey { .. })));

	assert_eq!(bytes, original);
}

#[test]
fn conversion_errors_leave_buffer_untouched() {
	let original = sample_blight().build();
	let mut bytes = original.clone();
	let options = ReadOptions::default();

	for (section, index, key, value) in [
		("header", 0, "version", "256"),
		("header", 0, "lobjCount", "two"),
		("lobj", 0, "origin", "1, 2"),
		("lobj", 0, "origin[0]", ""),
		("lobj", 0, "ambientIndex", "-1"),
		("ambient", 0, "rgba", "1 2 3 x"),
	] {
		let err = set_field(&mut bytes, &addr(section, index, key), value, &options).expect_err("bad value");
		assert!(matches!(err, BlightError::InvalidValue { .. }), "{key}={value:?}");
		assert_eq!(err.kind(), ErrorKind::Conversion);
	}

	assert_eq!(bytes, original);
}

#[test]
fn set_rejects_unparseable_buffers() {
	let mut bytes = sample_blight().lobj_count(17).build();
	let err = set_field(&mut bytes, &addr("header", 0, "version"), "1", &ReadOptions::default()).expect_err("invalid source");
	assert!(matches!(err, BlightError::TooManyRecords { .. }));
}

#[test]
fn edits_that_break_the_layout_are_rolled_back() {
	let original = sample_blight().build();
	let mut bytes = original.clone();
	let options = ReadOptions::default();

	let err = set_field(&mut bytes, &addr("header", 0, "lobjCount"), "17", &options).expect_err("over capacity");
	assert!(matches!(err, BlightError::TooManyRecords { count: 17, .. }));
	assert_eq!(bytes, original);

	let err = set_field(&mut bytes, &addr("header", 0, "lobjCount"), "3", &options).expect_err("third lobj missing");
	assert!(matches!(err, BlightError::UnexpectedEof { .. }));
	assert_eq!(bytes, original);

	let err = set_field(&mut bytes, &addr("lobj", 0, "magic"), "XOBJ", &options).expect_err("record magic");
	assert!(matches!(err, BlightError::BadMagic { .. }));
	assert_eq!(bytes, original);

	assert!(read_blight(&bytes, &options).is_ok());
}

#[test]
fn strict_mode_rejects_advisory_breakage_on_write() {
	let original = sample_blight().build();
	let mut bytes = original.clone();

	assert!(set_field(&mut bytes, &addr("lobj", 0, "sectionSize"), "80", &ReadOptions::default()).is_ok());
	bytes.copy_from_slice(&original);

	let err = set_field(&mut bytes, &addr("lobj", 0, "sectionSize"), "80", &ReadOptions::strict()).expect_err("strict layout");
	assert!(matches!(err, BlightError::SectionSizeMismatch { index: 0, declared: 80, .. }));
	assert_eq!(bytes, original);
}

#[test]
fn blight_file_set_and_get() {
	let mut file = BlightFile::from_bytes(sample_blight().build(), ReadOptions::strict()).expect("file");
	file.set(&addr("lobj", 0, "colorEffect[2]"), "0.25").expect("set");
	assert_eq!(file.get(&addr("lobj", 0, "colorEffect")).expect("get"), "1.00, 1.00, 0.25");
}

#[test]
fn address_display_names_the_record() {
	assert_eq!(addr("header", 3, "version").to_string(), "header.version");
	assert_eq!(addr("lobj", 1, "origin[2]").to_string(), "lobj[1].origin[2]");
	assert_eq!(addr("Ambient", 0, "rgba").to_string(), "ambient[0].rgba");
}
