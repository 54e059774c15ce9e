use matread_testkit::{CLASS_CELL, CLASS_SPARSE, ElementBuilder, MI_DOUBLE, MI_INT16, MI_INT64, MI_UINT8, encode_doubles, encode_ints, subelement};

use super::{Element, Shape};
use crate::mat::{DecodeOptions, ErrorKind, MatError, ValueKind};

fn parse(builder: &ElementBuilder) -> crate::mat::Result<Element> {
	Element::parse(builder.body(), &DecodeOptions::default())
}

#[test]
fn classifies_shapes() {
	assert_eq!(Shape::classify(1, 1), Shape::Scalar);
	assert_eq!(Shape::classify(1, 5), Shape::Vector);
	assert_eq!(Shape::classify(5, 1), Shape::Vector);
	assert_eq!(Shape::classify(2, 3), Shape::Matrix);
}

#[test]
fn compact_name_is_extracted_without_padding() {
	let element = parse(&ElementBuilder::new("abc", 1, 1).real(subelement(MI_DOUBLE, &encode_doubles(&[1.0])))).expect("element parses");
	assert_eq!(element.name, "abc");
	assert_eq!(element.data_start, Some(48));
}

#[test]
fn regular_name_is_extracted_and_aligned() {
	let element = parse(&ElementBuilder::new("long_name1", 1, 1).real(subelement(MI_DOUBLE, &encode_doubles(&[1.0])))).expect("element parses");
	assert_eq!(element.name, "long_name1");
	assert_eq!(element.data_start, Some(48 + 16));
}

#[test]
fn short_name_in_regular_encoding_is_accepted() {
	let element = parse(
		&ElementBuilder::new("x", 1, 1)
			.regular_name()
			.real(subelement(MI_DOUBLE, &encode_doubles(&[1.0]))),
	)
	.expect("element parses");
	assert_eq!(element.name, "x");
	assert_eq!(element.data_start, Some(56));
}

#[test]
fn complex_flag_is_read_from_flags_byte() {
	let element = parse(&ElementBuilder::new("z", 1, 1).complex_flag().real(subelement(MI_DOUBLE, &encode_doubles(&[1.0])))).expect("element parses");
	assert!(element.complex);
	assert_eq!(element.kind().expect("kind resolves"), ValueKind::Complex);
}

#[test]
fn zero_sized_dimensions_stop_before_name() {
	let mut body = ElementBuilder::new("e", 0, 3).body();
	body.truncate(40);

	let element = Element::parse(body, &DecodeOptions::default()).expect("empty element parses");
	assert_eq!(element.data_start, None);
	assert_eq!(element.name, "");
	assert_eq!(element.kind().expect("kind resolves"), ValueKind::Empty);
}

#[test]
fn rejects_unexpected_marker() {
	let mut body = ElementBuilder::new("a", 1, 1).body();
	body[0] = 13;
	let err = Element::parse(body, &DecodeOptions::default()).expect_err("bad marker should fail");
	assert!(matches!(err, MatError::UnexpectedMarker { marker: 13 }));
	assert_eq!(err.kind(), ErrorKind::MalformedElement);
}

#[test]
fn rejects_more_than_two_dimensions() {
	let err = parse(&ElementBuilder::new("a", 2, 2).dims_len(12)).expect_err("3-D should fail");
	assert!(matches!(err, MatError::Multidimensional { dims_len: 12 }));
	assert_eq!(err.kind(), ErrorKind::MalformedElement);
}

#[test]
fn rejects_negative_dimension() {
	let err = parse(&ElementBuilder::new("a", -1, 2)).expect_err("negative rows should fail");
	assert!(matches!(err, MatError::NegativeDimension { rows: -1, cols: 2 }));
}

#[test]
fn rejects_unsupported_array_classes() {
	for class in [CLASS_CELL, CLASS_SPARSE] {
		let err = parse(&ElementBuilder::new("a", 1, 1).class(class)).expect_err("class should be rejected");
		assert!(matches!(err, MatError::UnsupportedClass { .. }));
		assert_eq!(err.kind(), ErrorKind::UnsupportedEncoding);
	}
}

#[test]
fn rejects_oversize_name() {
	let opt = DecodeOptions {
		max_name_len: 8,
		..DecodeOptions::default()
	};
	let err = Element::parse(ElementBuilder::new("much_too_long", 1, 1).body(), &opt).expect_err("long name should fail");
	assert!(matches!(err, MatError::NameTooLong { len: 13, max: 8 }));
}

#[test]
fn truncated_element_fails_without_overread() {
	let mut body = ElementBuilder::new("a", 1, 1).body();
	body.truncate(30);
	let err = Element::parse(body, &DecodeOptions::default()).expect_err("truncated element should fail");
	assert!(matches!(err, MatError::UnexpectedEof { at: 32, .. }));
}

#[test]
fn kind_follows_real_type_code() {
	let cases = [
		(1, 1, MI_DOUBLE, ValueKind::Double),
		(1, 3, MI_DOUBLE, ValueKind::Vector),
		(2, 2, MI_DOUBLE, ValueKind::Matrix),
		(1, 1, MI_UINT8, ValueKind::Int),
		(1, 1, MI_INT64, ValueKind::Int64),
		(3, 1, MI_INT16, ValueKind::VectorInt),
		(3, 1, MI_INT64, ValueKind::VectorInt),
		(2, 2, MI_INT16, ValueKind::MatrixInt),
	];

	for (rows, cols, code, expected) in cases {
		let count = (rows * cols) as usize;
		let payload = if code == MI_DOUBLE {
			encode_doubles(&vec![0.0; count])
		} else {
			encode_ints(code, &vec![0; count])
		};
		let element = parse(&ElementBuilder::new("k", rows, cols).real(subelement(code, &payload))).expect("element parses");
		assert_eq!(element.kind().expect("kind resolves"), expected, "rows={rows} cols={cols} code={code}");
	}
}

#[test]
fn unknown_real_type_code_is_unsupported() {
	let element = parse(&ElementBuilder::new("k", 1, 1).real(subelement(7, &[0; 8]))).expect("element parses");
	let err = element.kind().expect_err("type code 7 should be rejected");
	assert!(matches!(err, MatError::UnsupportedType { code: 7, .. }));
}
