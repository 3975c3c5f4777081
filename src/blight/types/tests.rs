use crate::blight::{ScalarKind, TypeTag};

#[test]
fn packed_constants_round_trip() {
	let cases = [
		(TypeTag::UINT8, 0x08),
		(TypeTag::UINT16, 0x10),
		(TypeTag::UINT32, 0x20),
		(TypeTag::UINT64, 0x40),
		(TypeTag::INT8, 0x108),
		(TypeTag::INT16, 0x110),
		(TypeTag::INT32, 0x120),
		(TypeTag::INT64, 0x140),
		(TypeTag::FLOAT32, 0x220),
		(TypeTag::DOUBLE64, 0x240),
		(TypeTag::DOUBLE128, 0x280),
		(TypeTag::BYTE8, 0x408),
		(TypeTag::NIBBLE4, 0x804),
		(TypeTag::BOOL1, 0xf01),
	];

	for (tag, raw) in cases {
		assert_eq!(tag.raw(), raw, "{tag:?}");
		assert_eq!(TypeTag::from_raw(raw), Some(tag));
	}
}

#[test]
fn unknown_category_bits_do_not_decode() {
	assert_eq!(TypeTag::from_raw(0x308), None);
	assert_eq!(TypeTag::from_raw(0x1000), None);
}

#[test]
fn size_is_low_byte_and_byte_len_rounds_up() {
	assert_eq!(TypeTag::INT32.size(), 0x20);
	assert_eq!(TypeTag::INT32.byte_len(), 4);
	assert_eq!(TypeTag::BOOL1.byte_len(), 1);
	assert_eq!(TypeTag::NIBBLE4.byte_len(), 1);
	assert_eq!(TypeTag::DOUBLE128.byte_len(), 16);
}

#[test]
fn classification_is_exclusive() {
	let tags = [
		TypeTag::UINT16,
		TypeTag::INT64,
		TypeTag::FLOAT32,
		TypeTag::DOUBLE128,
		TypeTag::BYTE8,
		TypeTag::NIBBLE4,
		TypeTag::BOOL1,
	];

	for tag in tags {
		let hits = [tag.is_int(), tag.is_float(), tag.is_char(), tag.is_bool()]
			.into_iter()
			.filter(|hit| *hit)
			.count();
		assert!(hits <= 1, "{tag:?} has {hits} categories");
		assert_eq!(tag.is_num(), tag.is_int() || tag.is_float());
	}

	assert!(TypeTag::INT8.is_signed());
	assert!(!TypeTag::UINT8.is_signed());
	assert!(!TypeTag::NIBBLE4.is_num());
}

#[test]
fn with_size_second_width_wins_and_category_is_kept() {
	let tag = TypeTag::INT16.with_size(24).with_size(48);
	assert_eq!(tag.size(), 48);
	assert_eq!(tag.kind(), ScalarKind::Signed);
	assert!(tag.is_int());
	assert!(tag.is_signed());
	assert!(!tag.is_float());
}

#[test]
fn with_size_saturates_above_255() {
	assert_eq!(TypeTag::FLOAT32.with_size(300).size(), 255);
	assert_eq!(TypeTag::FLOAT32.with_size(255).size(), 255);
	assert!(TypeTag::FLOAT32.with_size(300).is_float());
}
