use matread_testkit::{MI_DOUBLE, MI_INT8, MI_INT16, MI_UINT32, encode_doubles, encode_ints, subelement, subelement_regular};

use super::{assemble, read_imaginary};
use crate::mat::{Cursor, MatError, Numbers, Part, read_subelement};

fn decode_pair(real: Vec<u8>, imag: Vec<u8>, count: usize) -> crate::mat::Result<Vec<f64>> {
	let mut bytes = real;
	bytes.extend_from_slice(&imag);
	let cursor = Cursor::new(&bytes);
	let (real_sub, real) = read_subelement(&cursor, 0, count, Part::Real)?;
	let imag = read_imaginary(&cursor, &real_sub, count)?;
	Ok(assemble(real, imag))
}

#[test]
fn blocks_are_real_then_imaginary() {
	let out = decode_pair(
		subelement(MI_DOUBLE, &encode_doubles(&[1.0, 2.0, 3.0])),
		subelement(MI_DOUBLE, &encode_doubles(&[-1.0, -2.0, -3.0])),
		3,
	)
	.expect("complex decodes");
	assert_eq!(out, vec![1.0, 2.0, 3.0, -1.0, -2.0, -3.0]);
}

#[test]
fn imaginary_encoding_is_independent_of_real() {
	let as_doubles = decode_pair(subelement(MI_DOUBLE, &encode_doubles(&[2.5])), subelement(MI_DOUBLE, &encode_doubles(&[-4.0])), 1)
		.expect("double imaginary decodes");
	let as_int16 = decode_pair(subelement(MI_DOUBLE, &encode_doubles(&[2.5])), subelement(MI_INT16, &encode_ints(MI_INT16, &[-4])), 1)
		.expect("int16 imaginary decodes");

	assert_eq!(as_doubles, vec![2.5, -4.0]);
	assert_eq!(as_int16, as_doubles);
}

#[test]
fn small_real_part_occupies_eight_bytes() {
	let out = decode_pair(
		subelement(MI_INT8, &encode_ints(MI_INT8, &[-3, 7])),
		subelement(MI_UINT32, &encode_ints(MI_UINT32, &[4_000_000_000, 1])),
		2,
	)
	.expect("mixed encodings decode");
	assert_eq!(out, vec![-3.0, 7.0, 4_000_000_000.0, 1.0]);
}

#[test]
fn regular_integer_real_part_is_padded_to_alignment() {
	let out = decode_pair(
		subelement_regular(MI_INT8, &encode_ints(MI_INT8, &[1, 2, 3, 4, 5])),
		subelement(MI_DOUBLE, &encode_doubles(&[0.5, 1.5, 2.5, 3.5, 4.5])),
		5,
	)
	.expect("padded real part decodes");
	assert_eq!(&out[5..], &[0.5, 1.5, 2.5, 3.5, 4.5]);
}

#[test]
fn unknown_imaginary_code_is_unsupported() {
	let err = decode_pair(subelement(MI_DOUBLE, &encode_doubles(&[1.0])), subelement_regular(11, &[0; 8]), 1).expect_err("code 11 should fail");
	assert!(matches!(err, MatError::UnsupportedType {
		part: Part::Imaginary,
		code: 11
	}));
}

#[test]
fn missing_imaginary_part_fails_cleanly() {
	let err = decode_pair(subelement(MI_DOUBLE, &encode_doubles(&[1.0])), Vec::new(), 1).expect_err("missing imaginary part should fail");
	assert!(matches!(err, MatError::UnexpectedEof { at: 16, .. }));
}

#[test]
fn assemble_coerces_both_halves() {
	assert_eq!(assemble(Numbers::Int(vec![1, 2]), Numbers::Double(vec![0.25, 0.5])), vec![1.0, 2.0, 0.25, 0.5]);
}
