#![allow(missing_docs)]

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

use matread_testkit::{ElementBuilder, MI_DOUBLE, MI_INT16, MI_INT32, encode_doubles, encode_ints, header_bytes, subelement};
use serde_json::Value;
use tempfile::TempDir;

#[test]
fn info_json_reports_name_kind_and_shape() {
	let dir = TempDir::new().expect("temp dir");
	let path = write_fixture(&dir, "m.mat", &ElementBuilder::new("grid", 2, 3).real(subelement(MI_INT32, &encode_ints(MI_INT32, &[1, 4, 2, 5, 3, 6]))).file());

	let json = run_json(&["info", path.to_str().expect("utf-8 path"), "--json"]);

	assert_eq!(json["name"], "grid");
	assert_eq!(json["kind"], "MATRIX_INT");
	assert_eq!(json["rows"], 2);
	assert_eq!(json["cols"], 3);
	assert_eq!(json["len"], 6);
	assert_eq!(json["complex"], false);
	assert_eq!(json["version"], 0x0100);
	assert!(json["description"].as_str().is_some_and(|text| text.starts_with("MATLAB 5.0")));
}

#[test]
fn show_json_renders_matrix_rows() {
	let dir = TempDir::new().expect("temp dir");
	let path = write_fixture(&dir, "m.mat", &ElementBuilder::new("grid", 2, 3).real(subelement(MI_INT32, &encode_ints(MI_INT32, &[1, 4, 2, 5, 3, 6]))).file());

	let json = run_json(&["show", path.to_str().expect("utf-8 path"), "--json"]);

	assert_eq!(json["kind"], "MATRIX_INT");
	assert_eq!(json["value"], serde_json::json!([[1, 2, 3], [4, 5, 6]]));
}

#[test]
fn show_json_renders_complex_pairs() {
	let dir = TempDir::new().expect("temp dir");
	let builder = ElementBuilder::new("z", 1, 2)
		.real(subelement(MI_DOUBLE, &encode_doubles(&[1.0, 2.0])))
		.imag(subelement(MI_INT16, &encode_ints(MI_INT16, &[-1, 3])));
	let path = write_fixture(&dir, "z.mat", &builder.file());

	let json = run_json(&["show", path.to_str().expect("utf-8 path"), "--json"]);

	assert_eq!(json["kind"], "VECTOR_COMPLEX");
	assert_eq!(json["value"][0]["re"], 1.0);
	assert_eq!(json["value"][0]["im"], -1.0);
	assert_eq!(json["value"][1]["im"], 3.0);
}

#[test]
fn show_text_truncates_long_vectors() {
	let dir = TempDir::new().expect("temp dir");
	let values: Vec<f64> = (0..10).map(f64::from).collect();
	let path = write_fixture(&dir, "v.mat", &ElementBuilder::new("v", 1, 10).real(subelement(MI_DOUBLE, &encode_doubles(&values))).file());

	let output = run(&["show", path.to_str().expect("utf-8 path"), "--max-items", "3"]);
	assert!(output.status.success(), "command should succeed");

	let stdout = String::from_utf8(output.stdout).expect("utf-8 stdout");
	assert!(stdout.starts_with("v = VECTOR [1x10]"), "unexpected header line: {stdout}");
	assert!(stdout.contains("[0, 1, 2, ... 7 more]"), "unexpected body: {stdout}");
}

#[test]
fn big_endian_file_fails_with_status_one() {
	let dir = TempDir::new().expect("temp dir");
	let mut bytes = header_bytes("MATLAB 5.0 MAT-file", b"MI");
	bytes.extend_from_slice(&[0_u8; 16]);
	let path = write_fixture(&dir, "be.mat", &bytes);

	let output = run(&["info", path.to_str().expect("utf-8 path")]);

	assert_eq!(output.status.code(), Some(1));
	let stderr = String::from_utf8(output.stderr).expect("utf-8 stderr");
	assert!(stderr.contains("error: Unexpected Byte Order"), "unexpected stderr: {stderr}");
}

fn run(args: &[&str]) -> Output {
	Command::new(env!("CARGO_BIN_EXE_matread")).args(args).output().expect("command executes")
}

fn run_json(args: &[&str]) -> Value {
	let output = run(args);
	assert!(output.status.success(), "command should succeed: {}", String::from_utf8_lossy(&output.stderr));
	serde_json::from_slice(&output.stdout).expect("stdout should be valid json")
}

fn write_fixture(dir: &TempDir, name: &str, bytes: &[u8]) -> PathBuf {
	let path = dir.path().join(name);
	fs::write(&path, bytes).expect("fixture writes");
	path
}
