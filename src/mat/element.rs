use tracing::debug;

use crate::mat::bytes::{Cursor, pad8};
use crate::mat::numeric::NumericType;
use crate::mat::{DecodeOptions, MatError, Part, Result, ValueKind};

/// Data type code of a matrix element (`miMATRIX`).
pub const MATRIX_MARKER: u8 = 14;
/// Complex bit inside the array flags byte.
pub const COMPLEX_MASK: u8 = 0x08;

const CLASS_OFFSET: usize = 16;
const FLAGS_OFFSET: usize = 17;
const DIMS_LEN_OFFSET: usize = 28;
const ROWS_OFFSET: usize = 32;
const COLS_OFFSET: usize = 36;
const NAME_SMALL_LEN_OFFSET: usize = 42;
const NAME_LEN_OFFSET: usize = 44;
const NAME_SMALL_START: usize = 44;
const NAME_START: usize = 48;
const TWO_DIMS_LEN: u8 = 8;

/// Array classes that carry no numeric payload of their own.
const UNSUPPORTED_CLASSES: [u8; 4] = [1, 2, 3, 5];

/// Logical rank of a 2-D array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
	/// `1x1`.
	Scalar,
	/// Exactly one dimension equal to one.
	Vector,
	/// Neither dimension equal to one.
	Matrix,
}

impl Shape {
	/// Classify a `rows x cols` array.
	pub fn classify(rows: usize, cols: usize) -> Self {
		match (rows == 1, cols == 1) {
			(true, true) => Self::Scalar,
			(true, false) | (false, true) => Self::Vector,
			(false, false) => Self::Matrix,
		}
	}
}

/// Parsed `miMATRIX` element owning its decompressed bytes.
#[derive(Debug)]
pub struct Element {
	/// Variable name, empty for arrays with no elements.
	pub name: String,
	/// Row count.
	pub rows: usize,
	/// Column count.
	pub cols: usize,
	/// Whether an imaginary subelement follows the real one.
	pub complex: bool,
	/// Array class byte from the flags subelement.
	pub class: u8,
	/// Offset of the first numeric subelement, `None` when the array has no elements.
	pub data_start: Option<usize>,
	bytes: Vec<u8>,
}

impl Element {
	/// Parse array flags, dimensions, and name from a decompressed element.
	pub fn parse(bytes: Vec<u8>, opt: &DecodeOptions) -> Result<Self> {
		let cursor = Cursor::new(&bytes);

		let marker = cursor.u8_at(0)?;
		if marker != MATRIX_MARKER {
			return Err(MatError::UnexpectedMarker { marker });
		}

		let class = cursor.u8_at(CLASS_OFFSET)?;
		if UNSUPPORTED_CLASSES.contains(&class) {
			return Err(MatError::UnsupportedClass { class });
		}
		let complex = cursor.u8_at(FLAGS_OFFSET)? & COMPLEX_MASK != 0;

		let dims_len = cursor.u8_at(DIMS_LEN_OFFSET)?;
		if dims_len != TWO_DIMS_LEN {
			return Err(MatError::Multidimensional { dims_len });
		}

		let raw_rows = cursor.i32_le_at(ROWS_OFFSET)?;
		let raw_cols = cursor.i32_le_at(COLS_OFFSET)?;
		let (Ok(rows), Ok(cols)) = (usize::try_from(raw_rows), usize::try_from(raw_cols)) else {
			return Err(MatError::NegativeDimension { rows: raw_rows, cols: raw_cols });
		};
		let count = rows.checked_mul(cols).ok_or(MatError::DimensionOverflow { rows, cols })?;

		if count == 0 {
			debug!(rows, cols, "element has no data");
			return Ok(Self {
				name: String::new(),
				rows,
				cols,
				complex,
				class,
				data_start: None,
				bytes,
			});
		}

		let (name, data_start) = parse_name(&cursor, opt.max_name_len)?;
		debug!(name = %name, rows, cols, complex, class, data_start, "parsed element");

		Ok(Self {
			name,
			rows,
			cols,
			complex,
			class,
			data_start: Some(data_start),
			bytes,
		})
	}

	/// Number of logical elements (`rows * cols`).
	pub fn count(&self) -> usize {
		self.rows * self.cols
	}

	/// Logical rank of the array.
	pub fn shape(&self) -> Shape {
		Shape::classify(self.rows, self.cols)
	}

	/// Bounds-checked view over the decompressed bytes.
	pub fn cursor(&self) -> Cursor<'_> {
		Cursor::new(&self.bytes)
	}

	/// Resolve the value variant from shape, complex flag, and the real part's type code.
	pub fn kind(&self) -> Result<ValueKind> {
		let Some(data_start) = self.data_start else {
			return Ok(ValueKind::Empty);
		};

		let code = self.cursor().u8_at(data_start)?;
		let shape = self.shape();
		if self.complex {
			return Ok(match shape {
				Shape::Scalar => ValueKind::Complex,
				Shape::Vector => ValueKind::VectorComplex,
				Shape::Matrix => ValueKind::MatrixComplex,
			});
		}

		Ok(match (shape, NumericType::from_code(code, Part::Real)?) {
			(Shape::Scalar, NumericType::Double) => ValueKind::Double,
			(Shape::Vector, NumericType::Double) => ValueKind::Vector,
			(Shape::Matrix, NumericType::Double) => ValueKind::Matrix,
			(Shape::Scalar, NumericType::Int { width: 8, .. }) => ValueKind::Int64,
			(Shape::Scalar, NumericType::Int { .. }) => ValueKind::Int,
			(Shape::Vector, NumericType::Int { .. }) => ValueKind::VectorInt,
			(Shape::Matrix, NumericType::Int { .. }) => ValueKind::MatrixInt,
		})
	}
}

/// Extract the array name and return it with the offset of the first numeric subelement.
fn parse_name(cursor: &Cursor<'_>, max_len: usize) -> Result<(String, usize)> {
	let small_len = cursor.u8_at(NAME_SMALL_LEN_OFFSET)?;
	let (len, start, data_start) = if small_len != 0 {
		let len = usize::from(small_len);
		(len, NAME_SMALL_START, NAME_START)
	} else {
		let len = cursor.u32_le_at(NAME_LEN_OFFSET)? as usize;
		(len, NAME_START, NAME_START + pad8(len))
	};

	if len > max_len {
		return Err(MatError::NameTooLong { len, max: max_len });
	}

	let raw = cursor.slice_at(start, len)?;
	Ok((String::from_utf8_lossy(raw).into_owned(), data_start))
}

#[cfg(test)]
mod tests;
