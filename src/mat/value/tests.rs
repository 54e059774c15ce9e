use super::{ComplexArray, Matrix, Value, ValueKind};

#[test]
fn matrix_is_column_major() {
	let matrix = Matrix::new(2, 3, vec![1, 4, 2, 5, 3, 6]).expect("shape matches");
	for i in 0..2 {
		for j in 0..3 {
			assert_eq!(matrix.get(i, j), Some(&matrix.data()[i + 2 * j]));
		}
	}
	assert_eq!(matrix.get(1, 2), Some(&6));
	assert_eq!(matrix.get(2, 0), None);
	assert_eq!(matrix.get(0, 3), None);
}

#[test]
fn matrix_rejects_wrong_length() {
	assert!(Matrix::new(2, 2, vec![1.0; 3]).is_none());
	assert!(Matrix::<f64>::new(0, 4, Vec::new()).is_some());
}

#[test]
fn complex_array_splits_blocks() {
	let array = ComplexArray::new(2, 2, vec![1.0, 2.0, 3.0, 4.0, -1.0, -2.0, -3.0, -4.0]).expect("shape matches");
	assert_eq!(array.len(), 4);
	assert_eq!(array.re(), &[1.0, 2.0, 3.0, 4.0]);
	assert_eq!(array.im(), &[-1.0, -2.0, -3.0, -4.0]);
	assert_eq!(array.get(1, 1), Some((4.0, -4.0)));
	assert_eq!(array.pairs()[2], (3.0, -3.0));
	assert!(ComplexArray::new(2, 2, vec![0.0; 4]).is_none());
}

#[test]
fn kind_labels_are_stable() {
	assert_eq!(Value::Empty.kind(), ValueKind::Empty);
	assert_eq!(Value::Int64Scalar(1).kind().as_str(), "INT_64");
	assert_eq!(Value::DoubleVector(vec![1.0]).kind().as_str(), "VECTOR");
	assert_eq!(Value::IntMatrix(Matrix::new(1, 2, vec![1, 2]).expect("shape")).len(), 2);
	assert!(Value::Empty.is_empty());
	assert_eq!(Value::Empty.len(), 0);
}
