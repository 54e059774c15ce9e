use std::path::Path;

use crate::mat::{DecodeOptions, MatError, Matrix, Result, Value, ValueKind, Variable, decode_with};

impl Variable {
	/// Integer scalar of any stored width.
	pub fn int(&self) -> Result<i64> {
		match self.value {
			Value::IntScalar(v) | Value::Int64Scalar(v) => Ok(v),
			_ => Err(self.mismatch(ValueKind::Int)),
		}
	}

	/// Double scalar, widening integer scalars stored with at most 4 bytes.
	pub fn double(&self) -> Result<f64> {
		match self.value {
			Value::DoubleScalar(v) => Ok(v),
			Value::IntScalar(v) => Ok(v as f64),
			_ => Err(self.mismatch(ValueKind::Double)),
		}
	}

	/// Complex scalar as `(re, im)`.
	pub fn complex(&self) -> Result<(f64, f64)> {
		match self.value {
			Value::ComplexScalar(re, im) => Ok((re, im)),
			_ => Err(self.mismatch(ValueKind::Complex)),
		}
	}

	/// Double vector; scalars become one element and empty arrays zero elements.
	pub fn vector(&self) -> Result<Vec<f64>> {
		match &self.value {
			Value::Empty => Ok(Vec::new()),
			Value::DoubleScalar(v) => Ok(vec![*v]),
			Value::DoubleVector(values) => Ok(values.clone()),
			Value::IntScalar(v) => Ok(vec![*v as f64]),
			Value::IntVector(values) => Ok(values.iter().map(|v| *v as f64).collect()),
			_ => Err(self.mismatch(ValueKind::Vector)),
		}
	}

	/// Integer vector; scalars become one element and empty arrays zero elements.
	pub fn vector_int(&self) -> Result<Vec<i64>> {
		match &self.value {
			Value::Empty => Ok(Vec::new()),
			Value::IntScalar(v) => Ok(vec![*v]),
			Value::IntVector(values) => Ok(values.clone()),
			_ => Err(self.mismatch(ValueKind::VectorInt)),
		}
	}

	/// Complex vector as `(re, im)` pairs.
	pub fn vector_complex(&self) -> Result<Vec<(f64, f64)>> {
		match &self.value {
			Value::Empty => Ok(Vec::new()),
			Value::ComplexScalar(re, im) => Ok(vec![(*re, *im)]),
			Value::ComplexVector(values) => Ok(values.pairs()),
			_ => Err(self.mismatch(ValueKind::VectorComplex)),
		}
	}

	/// Double matrix, widening integer arrays; vectors and scalars keep their stored shape.
	pub fn matrix(&self) -> Result<Matrix<f64>> {
		let data = match &self.value {
			Value::Empty => Vec::new(),
			Value::DoubleScalar(v) => vec![*v],
			Value::DoubleVector(values) => values.clone(),
			Value::DoubleMatrix(values) => return Ok(values.clone()),
			Value::IntScalar(v) => vec![*v as f64],
			Value::IntVector(values) => values.iter().map(|v| *v as f64).collect(),
			Value::IntMatrix(values) => return Ok(values.clone().map(|v| v as f64)),
			_ => return Err(self.mismatch(ValueKind::Matrix)),
		};
		self.shaped(data, ValueKind::Matrix)
	}

	/// Integer matrix; vectors and scalars keep their stored shape.
	pub fn matrix_int(&self) -> Result<Matrix<i64>> {
		let data = match &self.value {
			Value::Empty => Vec::new(),
			Value::IntScalar(v) => vec![*v],
			Value::IntVector(values) => values.clone(),
			Value::IntMatrix(values) => return Ok(values.clone()),
			_ => return Err(self.mismatch(ValueKind::MatrixInt)),
		};
		self.shaped(data, ValueKind::MatrixInt)
	}

	/// Complex matrix of `(re, im)` pairs.
	pub fn matrix_complex(&self) -> Result<Matrix<(f64, f64)>> {
		let data = match &self.value {
			Value::Empty => Vec::new(),
			Value::ComplexScalar(re, im) => vec![(*re, *im)],
			Value::ComplexVector(values) | Value::ComplexMatrix(values) => return Ok(values.to_matrix()),
			_ => return Err(self.mismatch(ValueKind::MatrixComplex)),
		};
		self.shaped(data, ValueKind::MatrixComplex)
	}

	fn shaped<T>(&self, data: Vec<T>, expected: ValueKind) -> Result<Matrix<T>> {
		Matrix::new(self.rows, self.cols, data).ok_or_else(|| self.mismatch(expected))
	}

	fn mismatch(&self, expected: ValueKind) -> MatError {
		MatError::TypeMismatch {
			name: self.name.clone(),
			expected,
			actual: self.value.kind(),
		}
	}
}

/// Decode `path` and read an integer scalar.
pub fn read_int(path: impl AsRef<Path>) -> Result<i64> {
	open(path)?.int()
}

/// Decode `path` and read a double scalar.
pub fn read_double(path: impl AsRef<Path>) -> Result<f64> {
	open(path)?.double()
}

/// Decode `path` and read a complex scalar.
pub fn read_complex(path: impl AsRef<Path>) -> Result<(f64, f64)> {
	open(path)?.complex()
}

/// Decode `path` and read a double vector.
pub fn read_vector(path: impl AsRef<Path>) -> Result<Vec<f64>> {
	open(path)?.vector()
}

/// Decode `path` and read an integer vector.
pub fn read_vector_int(path: impl AsRef<Path>) -> Result<Vec<i64>> {
	open(path)?.vector_int()
}

/// Decode `path` and read a complex vector.
pub fn read_vector_complex(path: impl AsRef<Path>) -> Result<Vec<(f64, f64)>> {
	open(path)?.vector_complex()
}

/// Decode `path` and read a double matrix.
pub fn read_matrix(path: impl AsRef<Path>) -> Result<Matrix<f64>> {
	open(path)?.matrix()
}

/// Decode `path` and read an integer matrix.
pub fn read_matrix_int(path: impl AsRef<Path>) -> Result<Matrix<i64>> {
	open(path)?.matrix_int()
}

/// Decode `path` and read a complex matrix.
pub fn read_matrix_complex(path: impl AsRef<Path>) -> Result<Matrix<(f64, f64)>> {
	open(path)?.matrix_complex()
}

fn open(path: impl AsRef<Path>) -> Result<Variable> {
	decode_with(path, &DecodeOptions::default())
}
