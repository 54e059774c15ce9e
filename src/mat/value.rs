/// Variant tag of a decoded [`Value`], also used to describe projection requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
	/// Array with no elements.
	Empty,
	/// Integer scalar stored with at most 4 bytes.
	Int,
	/// Integer scalar stored with 8 bytes.
	Int64,
	/// Double scalar.
	Double,
	/// Complex scalar.
	Complex,
	/// Double vector.
	Vector,
	/// Integer vector.
	VectorInt,
	/// Complex vector.
	VectorComplex,
	/// Double matrix.
	Matrix,
	/// Integer matrix.
	MatrixInt,
	/// Complex matrix.
	MatrixComplex,
}

impl ValueKind {
	/// Stable uppercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Empty => "EMPTY",
			Self::Int => "INT",
			Self::Int64 => "INT_64",
			Self::Double => "DOUBLE",
			Self::Complex => "COMPLEX",
			Self::Vector => "VECTOR",
			Self::VectorInt => "VECTOR_INT",
			Self::VectorComplex => "VECTOR_COMPLEX",
			Self::Matrix => "MATRIX",
			Self::MatrixInt => "MATRIX_INT",
			Self::MatrixComplex => "MATRIX_COMPLEX",
		}
	}
}

/// Column-major 2-D array.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
	rows: usize,
	cols: usize,
	data: Vec<T>,
}

impl<T> Matrix<T> {
	/// Wrap column-major `data`; `None` unless `data.len() == rows * cols`.
	pub fn new(rows: usize, cols: usize, data: Vec<T>) -> Option<Self> {
		(rows.checked_mul(cols) == Some(data.len())).then_some(Self { rows, cols, data })
	}

	/// Row count.
	pub fn rows(&self) -> usize {
		self.rows
	}

	/// Column count.
	pub fn cols(&self) -> usize {
		self.cols
	}

	/// Column-major storage.
	pub fn data(&self) -> &[T] {
		&self.data
	}

	/// Element `(i, j)`, stored at `i + rows * j`.
	pub fn get(&self, i: usize, j: usize) -> Option<&T> {
		if i >= self.rows || j >= self.cols {
			return None;
		}
		self.data.get(i + self.rows * j)
	}

	/// Apply `f` to every element, keeping the shape.
	pub fn map<U>(self, f: impl FnMut(T) -> U) -> Matrix<U> {
		Matrix {
			rows: self.rows,
			cols: self.cols,
			data: self.data.into_iter().map(f).collect(),
		}
	}

	/// Take the column-major storage.
	pub fn into_data(self) -> Vec<T> {
		self.data
	}
}

/// Complex array stored as a real block followed by an imaginary block, each column-major.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexArray {
	rows: usize,
	cols: usize,
	data: Vec<f64>,
}

impl ComplexArray {
	/// Wrap `data`; `None` unless `data.len() == 2 * rows * cols`.
	pub fn new(rows: usize, cols: usize, data: Vec<f64>) -> Option<Self> {
		let count = rows.checked_mul(cols)?.checked_mul(2)?;
		(count == data.len()).then_some(Self { rows, cols, data })
	}

	/// Row count.
	pub fn rows(&self) -> usize {
		self.rows
	}

	/// Column count.
	pub fn cols(&self) -> usize {
		self.cols
	}

	/// Number of complex elements.
	pub fn len(&self) -> usize {
		self.rows * self.cols
	}

	/// Return whether the array has no elements.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Both blocks as stored.
	pub fn data(&self) -> &[f64] {
		&self.data
	}

	/// Real block.
	pub fn re(&self) -> &[f64] {
		&self.data[..self.len()]
	}

	/// Imaginary block.
	pub fn im(&self) -> &[f64] {
		&self.data[self.len()..]
	}

	/// Element `(i, j)` as `(re, im)`.
	pub fn get(&self, i: usize, j: usize) -> Option<(f64, f64)> {
		if i >= self.rows || j >= self.cols {
			return None;
		}
		let k = i + self.rows * j;
		Some((self.re()[k], self.im()[k]))
	}

	/// Column-major `(re, im)` pairs.
	pub fn pairs(&self) -> Vec<(f64, f64)> {
		self.re().iter().copied().zip(self.im().iter().copied()).collect()
	}

	/// Interleave into a matrix of `(re, im)` pairs with the same shape.
	pub fn to_matrix(&self) -> Matrix<(f64, f64)> {
		Matrix {
			rows: self.rows,
			cols: self.cols,
			data: self.pairs(),
		}
	}
}

/// Decoded numeric variable.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// Array with `rows * cols == 0`.
	Empty,
	/// Integer scalar stored with at most 4 bytes.
	IntScalar(i64),
	/// Integer scalar stored with 8 bytes.
	Int64Scalar(i64),
	/// Double scalar.
	DoubleScalar(f64),
	/// Complex scalar `(re, im)`.
	ComplexScalar(f64, f64),
	/// Integer row or column vector.
	IntVector(Vec<i64>),
	/// Double row or column vector.
	DoubleVector(Vec<f64>),
	/// Complex row or column vector.
	ComplexVector(ComplexArray),
	/// Integer matrix.
	IntMatrix(Matrix<i64>),
	/// Double matrix.
	DoubleMatrix(Matrix<f64>),
	/// Complex matrix.
	ComplexMatrix(ComplexArray),
}

impl Value {
	/// Variant tag.
	pub fn kind(&self) -> ValueKind {
		match self {
			Self::Empty => ValueKind::Empty,
			Self::IntScalar(_) => ValueKind::Int,
			Self::Int64Scalar(_) => ValueKind::Int64,
			Self::DoubleScalar(_) => ValueKind::Double,
			Self::ComplexScalar(..) => ValueKind::Complex,
			Self::IntVector(_) => ValueKind::VectorInt,
			Self::DoubleVector(_) => ValueKind::Vector,
			Self::ComplexVector(_) => ValueKind::VectorComplex,
			Self::IntMatrix(_) => ValueKind::MatrixInt,
			Self::DoubleMatrix(_) => ValueKind::Matrix,
			Self::ComplexMatrix(_) => ValueKind::MatrixComplex,
		}
	}

	/// Number of logical elements.
	pub fn len(&self) -> usize {
		match self {
			Self::Empty => 0,
			Self::IntScalar(_) | Self::Int64Scalar(_) | Self::DoubleScalar(_) | Self::ComplexScalar(..) => 1,
			Self::IntVector(values) => values.len(),
			Self::DoubleVector(values) => values.len(),
			Self::ComplexVector(values) | Self::ComplexMatrix(values) => values.len(),
			Self::IntMatrix(values) => values.data().len(),
			Self::DoubleMatrix(values) => values.data().len(),
		}
	}

	/// Return whether the value is [`Value::Empty`].
	pub fn is_empty(&self) -> bool {
		matches!(self, Self::Empty)
	}
}

#[cfg(test)]
mod tests;
