use std::path::PathBuf;

use matread::mat::{Matrix, Result, Value, decode_with};
use serde_json::{Value as JsonValue, json};

use crate::cmd::util::{DecodeArgs, complex_label, emit_json};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long)]
	pub json: bool,
	/// Maximum number of elements (text) or rows (text matrices) printed.
	#[arg(long = "max-items", default_value_t = 16)]
	pub max_items: usize,
	#[command(flatten)]
	pub decode: DecodeArgs,
}

/// Decode the variable and print its values.
pub fn run(args: Args) -> Result<()> {
	let Args {
		path,
		json,
		max_items,
		decode,
	} = args;

	let variable = decode_with(&path, &decode.options())?;

	if json {
		emit_json(&ShowJson {
			path: path.display().to_string(),
			name: variable.name.clone(),
			kind: variable.value.kind().as_str(),
			rows: variable.rows,
			cols: variable.cols,
			value: value_to_json(&variable.value),
		});
		return Ok(());
	}

	println!("{} = {} [{}x{}]", variable.name, variable.value.kind().as_str(), variable.rows, variable.cols);
	print_value(&variable.value, max_items);
	Ok(())
}

fn print_value(value: &Value, max_items: usize) {
	match value {
		Value::Empty => println!("  []"),
		Value::IntScalar(v) | Value::Int64Scalar(v) => println!("  {v}"),
		Value::DoubleScalar(v) => println!("  {v}"),
		Value::ComplexScalar(re, im) => println!("  {}", complex_label(*re, *im)),
		Value::IntVector(values) => print_items(values.iter().map(ToString::to_string), values.len(), max_items),
		Value::DoubleVector(values) => print_items(values.iter().map(ToString::to_string), values.len(), max_items),
		Value::ComplexVector(array) => print_items(array.pairs().into_iter().map(|(re, im)| complex_label(re, im)), array.len(), max_items),
		Value::IntMatrix(matrix) => print_rows(matrix, max_items, ToString::to_string),
		Value::DoubleMatrix(matrix) => print_rows(matrix, max_items, ToString::to_string),
		Value::ComplexMatrix(array) => print_rows(&array.to_matrix(), max_items, |(re, im)| complex_label(*re, *im)),
	}
}

fn print_items(items: impl Iterator<Item = String>, len: usize, max_items: usize) {
	let shown: Vec<String> = items.take(max_items).collect();
	if len > max_items {
		println!("  [{}, ... {} more]", shown.join(", "), len - max_items);
	} else {
		println!("  [{}]", shown.join(", "));
	}
}

fn print_rows<T>(matrix: &Matrix<T>, max_items: usize, render: impl Fn(&T) -> String) {
	for i in 0..matrix.rows().min(max_items) {
		let row: Vec<String> = (0..matrix.cols()).filter_map(|j| matrix.get(i, j)).map(&render).collect();
		println!("  {}", row.join("  "));
	}
	if matrix.rows() > max_items {
		println!("  ... {} more rows", matrix.rows() - max_items);
	}
}

fn value_to_json(value: &Value) -> JsonValue {
	match value {
		Value::Empty => json!([]),
		Value::IntScalar(v) | Value::Int64Scalar(v) => json!(v),
		Value::DoubleScalar(v) => json!(v),
		Value::ComplexScalar(re, im) => complex_json(*re, *im),
		Value::IntVector(values) => json!(values),
		Value::DoubleVector(values) => json!(values),
		Value::ComplexVector(array) => JsonValue::Array(array.pairs().into_iter().map(|(re, im)| complex_json(re, im)).collect()),
		Value::IntMatrix(matrix) => rows_json(matrix, |v| json!(v)),
		Value::DoubleMatrix(matrix) => rows_json(matrix, |v| json!(v)),
		Value::ComplexMatrix(array) => rows_json(&array.to_matrix(), |(re, im)| complex_json(*re, *im)),
	}
}

fn rows_json<T>(matrix: &Matrix<T>, render: impl Fn(&T) -> JsonValue) -> JsonValue {
	let rows = (0..matrix.rows())
		.map(|i| JsonValue::Array((0..matrix.cols()).filter_map(|j| matrix.get(i, j)).map(&render).collect()))
		.collect();
	JsonValue::Array(rows)
}

fn complex_json(re: f64, im: f64) -> JsonValue {
	json!({ "re": re, "im": im })
}

#[derive(serde::Serialize)]
struct ShowJson {
	path: String,
	name: String,
	kind: &'static str,
	rows: usize,
	cols: usize,
	value: JsonValue,
}
