use blightdoc_testkit::sample_blight;

use crate::blight::{FormatSpec, PresentOptions, ReadOptions, Section, blight_to_string, read_blight, report};

#[test]
fn renders_sections_in_file_order() {
	let bytes = sample_blight().build();
	let blight = read_blight(&bytes, &ReadOptions::default()).expect("parses");
	let text = blight_to_string(&blight, &bytes, &PresentOptions::default());

	let expected = "\
header:
  magic: LGHT
  filesize: 121
  version: 2
  lobjCount: 2
  ambientCount: 1
lobj[0]:
  magic: LOBJ
  sectionSize: 52
  version: 2
  lightType: 1 (directional)
  ambientIndex: 0
  origin: 1.00, 2.00, 3.00
  destination: 0.00, -1.00, 0.50
  colorEffect: 1.00, 1.00, 1.00
  rgba: 255, 128, 64, 255
lobj[1]:
  magic: LOBJ
  sectionSize: 52
  version: 2
  lightType: 0 (point)
  ambientIndex: 65535
  origin: -4.25, 0.00, 10.00
  destination: 0.00, 0.00, 0.00
  colorEffect: 1.00, 1.00, 1.00
  rgba: 0, 0, 255, 128
ambient[0]:
  rgba: 32, 32, 48, 255
";
	assert_eq!(text, expected);
}

#[test]
fn options_control_precision_indent_and_labels() {
	let bytes = sample_blight().build();
	let blight = read_blight(&bytes, &ReadOptions::default()).expect("parses");
	let options = PresentOptions {
		float_spec: Some(FormatSpec::precision(1)),
		int_spec: Some(FormatSpec::precision(3)),
		indent: 4,
		label_light_types: false,
	};
	let text = blight_to_string(&blight, &bytes, &options);

	assert!(text.contains("    origin: 1.0, 2.0, 3.0\n"), "{text}");
	assert!(text.contains("    lightType: 001\n"), "{text}");
	assert!(text.contains("    rgba: 032, 032, 048, 255\n"), "{text}");
}

#[test]
fn report_exposes_structured_rows() {
	let bytes = sample_blight().build();
	let blight = read_blight(&bytes, &ReadOptions::default()).expect("parses");
	let sections = report(&blight, &bytes, &PresentOptions::default());

	let titles: Vec<String> = sections.iter().map(|section| section.title()).collect();
	assert_eq!(titles, ["header", "lobj[0]", "lobj[1]", "ambient[0]"]);
	assert_eq!(sections[1].section, Section::Lobj);

	let origin = sections[1].fields.iter().find(|field| field.key == "origin").expect("origin row");
	assert_eq!(origin.ty, "f32");
	assert_eq!(origin.text, "1.00, 2.00, 3.00");
}

#[test]
fn empty_container_renders_header_only() {
	let bytes = blightdoc_testkit::BlightBuilder::new().build();
	let blight = read_blight(&bytes, &ReadOptions::strict()).expect("parses");
	let sections = report(&blight, &bytes, &PresentOptions::default());
	assert_eq!(sections.len(), 1);
	assert_eq!(sections[0].title(), "header");
}
