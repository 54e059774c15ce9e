use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::debug;

use crate::mat::compression::read_compressed_element;
use crate::mat::complex::{assemble, read_imaginary};
use crate::mat::element::Element;
use crate::mat::numeric::{Numbers, read_subelement};
use crate::mat::{ComplexArray, MatError, MatHeader, Matrix, Part, Result, Value, ValueKind};

/// Runtime limits for decoding.
#[derive(Debug, Clone)]
pub struct DecodeOptions {
	/// Output chunk size used while inflating.
	pub chunk_size: usize,
	/// Maximum allowed decompressed element size.
	pub max_decompressed_bytes: usize,
	/// Maximum accepted variable name length.
	pub max_name_len: usize,
}

impl Default for DecodeOptions {
	fn default() -> Self {
		Self {
			chunk_size: 16 * 1024,
			max_decompressed_bytes: 512 * 1024 * 1024,
			max_name_len: 63,
		}
	}
}

/// Decode progress, logged on every transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
	HeaderChecked,
	Decompressed,
	ElementParsed,
	RealDecoded,
	ImagDecoded,
	Done,
}

/// The single variable stored in a MAT file.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
	/// Parsed file preamble.
	pub header: MatHeader,
	/// Variable name, empty when the array has no elements.
	pub name: String,
	/// Row count.
	pub rows: usize,
	/// Column count.
	pub cols: usize,
	/// Decoded payload.
	pub value: Value,
}

/// Decode the variable stored at `path` with default options.
pub fn decode(path: impl AsRef<Path>) -> Result<Value> {
	Ok(decode_with(path, &DecodeOptions::default())?.value)
}

/// Decode the variable stored at `path`.
pub fn decode_with(path: impl AsRef<Path>, opt: &DecodeOptions) -> Result<Variable> {
	let path = path.as_ref();
	let with_path = |source| MatError::File {
		path: path.to_path_buf(),
		source,
	};

	let file = File::open(path).map_err(with_path)?;
	decode_reader(BufReader::new(file), opt).map_err(|err| match err {
		MatError::Io(source) => with_path(source),
		other => other,
	})
}

/// Decode an in-memory MAT file.
pub fn decode_bytes(bytes: &[u8], opt: &DecodeOptions) -> Result<Variable> {
	decode_reader(bytes, opt)
}

/// Decode a MAT file from a reader positioned at its first byte.
pub fn decode_reader(mut reader: impl Read, opt: &DecodeOptions) -> Result<Variable> {
	let header = MatHeader::read_from(&mut reader)?;
	trace_stage(Stage::HeaderChecked);

	let bytes = read_compressed_element(&mut reader, opt)?;
	trace_stage(Stage::Decompressed);

	let element = Element::parse(bytes, opt)?;
	trace_stage(Stage::ElementParsed);

	let value = decode_element(&element)?;
	trace_stage(Stage::Done);

	Ok(Variable {
		header,
		name: element.name,
		rows: element.rows,
		cols: element.cols,
		value,
	})
}

/// Decode the numeric payload of a parsed element.
pub fn decode_element(element: &Element) -> Result<Value> {
	let Some(data_start) = element.data_start else {
		return Ok(Value::Empty);
	};

	let kind = element.kind()?;
	let cursor = element.cursor();
	let count = element.count();
	let (rows, cols) = (element.rows, element.cols);

	let (real_sub, real) = read_subelement(&cursor, data_start, count, Part::Real)?;
	trace_stage(Stage::RealDecoded);

	if element.complex {
		let imag = read_imaginary(&cursor, &real_sub, count)?;
		trace_stage(Stage::ImagDecoded);
		return complex_value(kind, rows, cols, assemble(real, imag));
	}

	real_value(kind, rows, cols, real)
}

fn real_value(kind: ValueKind, rows: usize, cols: usize, numbers: Numbers) -> Result<Value> {
	let declared = numbers.len();
	let mismatch = || MatError::SizeMismatch {
		part: Part::Real,
		expected: rows * cols,
		declared,
	};

	Ok(match (kind, numbers) {
		(ValueKind::Int, Numbers::Int(values)) => Value::IntScalar(values[0]),
		(ValueKind::Int64, Numbers::Int(values)) => Value::Int64Scalar(values[0]),
		(ValueKind::Double, Numbers::Double(values)) => Value::DoubleScalar(values[0]),
		(ValueKind::VectorInt, Numbers::Int(values)) => Value::IntVector(values),
		(ValueKind::Vector, Numbers::Double(values)) => Value::DoubleVector(values),
		(ValueKind::MatrixInt, Numbers::Int(values)) => Value::IntMatrix(Matrix::new(rows, cols, values).ok_or_else(mismatch)?),
		(ValueKind::Matrix, Numbers::Double(values)) => Value::DoubleMatrix(Matrix::new(rows, cols, values).ok_or_else(mismatch)?),
		_ => return Err(mismatch()),
	})
}

fn complex_value(kind: ValueKind, rows: usize, cols: usize, data: Vec<f64>) -> Result<Value> {
	let declared = data.len() / 2;
	let array = ComplexArray::new(rows, cols, data).ok_or(MatError::SizeMismatch {
		part: Part::Imaginary,
		expected: rows * cols,
		declared,
	})?;

	Ok(match kind {
		ValueKind::Complex => Value::ComplexScalar(array.re()[0], array.im()[0]),
		ValueKind::VectorComplex => Value::ComplexVector(array),
		_ => Value::ComplexMatrix(array),
	})
}

fn trace_stage(stage: Stage) {
	debug!(?stage, "decode stage");
}
