use std::path::PathBuf;

use matread::mat::{Result, ValueKind, decode_with};

use crate::cmd::util::{DecodeArgs, emit_json};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long)]
	pub json: bool,
	#[command(flatten)]
	pub decode: DecodeArgs,
}

/// Print header and variable summary.
pub fn run(args: Args) -> Result<()> {
	let Args { path, json, decode } = args;

	let variable = decode_with(&path, &decode.options())?;
	let kind = variable.value.kind();
	let complex = matches!(kind, ValueKind::Complex | ValueKind::VectorComplex | ValueKind::MatrixComplex);

	if json {
		emit_json(&InfoJson {
			path: path.display().to_string(),
			description: variable.header.description,
			version: variable.header.version,
			name: variable.name,
			kind: kind.as_str(),
			complex,
			rows: variable.rows,
			cols: variable.cols,
			len: variable.value.len(),
		});
		return Ok(());
	}

	println!("path: {}", path.display());
	println!("description: {}", variable.header.description);
	println!("version: 0x{:04x}", variable.header.version);
	println!("name: {}", variable.name);
	println!("kind: {}", kind.as_str());
	println!("complex: {complex}");
	println!("rows: {}", variable.rows);
	println!("cols: {}", variable.cols);
	println!("len: {}", variable.value.len());

	Ok(())
}

#[derive(serde::Serialize)]
struct InfoJson {
	path: String,
	description: String,
	version: u16,
	name: String,
	kind: &'static str,
	complex: bool,
	rows: usize,
	cols: usize,
	len: usize,
}
