//! Synthetic MAT Level-5 fixtures for workspace tests.
//!
//! Everything here produces raw bytes only; nothing depends on the decoder crate so unit tests can
//! build inputs without a circular dev-dependency.

use std::io::Write;

use flate2::Compression;
use flate2::write::ZlibEncoder;

/// `miINT8` data type code.
pub const MI_INT8: u8 = 1;
/// `miUINT8` data type code.
pub const MI_UINT8: u8 = 2;
/// `miINT16` data type code.
pub const MI_INT16: u8 = 3;
/// `miUINT16` data type code.
pub const MI_UINT16: u8 = 4;
/// `miINT32` data type code.
pub const MI_INT32: u8 = 5;
/// `miUINT32` data type code.
pub const MI_UINT32: u8 = 6;
/// `miDOUBLE` data type code.
pub const MI_DOUBLE: u8 = 9;
/// `miINT64` data type code.
pub const MI_INT64: u8 = 12;
/// `miUINT64` data type code.
pub const MI_UINT64: u8 = 13;
/// `miMATRIX` data type code.
pub const MI_MATRIX: u32 = 14;
/// `miCOMPRESSED` data type code.
pub const MI_COMPRESSED: u32 = 15;

/// `mxDOUBLE_CLASS` array class.
pub const CLASS_DOUBLE: u8 = 6;
/// `mxSPARSE_CLASS` array class.
pub const CLASS_SPARSE: u8 = 5;
/// `mxCELL_CLASS` array class.
pub const CLASS_CELL: u8 = 1;

/// Complex bit inside the array flags byte.
pub const FLAG_COMPLEX: u8 = 0x08;

/// Build a 128-byte preamble with the given description and two-byte endian indicator.
pub fn header_bytes(description: &str, endian: &[u8; 2]) -> Vec<u8> {
	let mut out = vec![b' '; 116];
	let text = description.as_bytes();
	let take = text.len().min(116);
	out[..take].copy_from_slice(&text[..take]);
	out.extend_from_slice(&[0_u8; 8]);
	out.extend_from_slice(&0x0100_u16.to_le_bytes());
	out.extend_from_slice(endian);
	out
}

/// Byte width of an integer type code, `8` for doubles.
pub fn width_of(type_code: u8) -> usize {
	match type_code {
		MI_INT8 | MI_UINT8 => 1,
		MI_INT16 | MI_UINT16 => 2,
		MI_INT32 | MI_UINT32 => 4,
		_ => 8,
	}
}

/// Encode integers little-endian at the width implied by `type_code`, truncating each value.
pub fn encode_ints(type_code: u8, values: &[i64]) -> Vec<u8> {
	let width = width_of(type_code);
	let mut out = Vec::with_capacity(values.len() * width);
	for value in values {
		out.extend_from_slice(&value.to_le_bytes()[..width]);
	}
	out
}

/// Encode doubles little-endian.
pub fn encode_doubles(values: &[f64]) -> Vec<u8> {
	values.iter().flat_map(|value| value.to_le_bytes()).collect()
}

/// Numeric subelement, using the compact small-data tag when the payload fits in four bytes.
pub fn subelement(type_code: u8, payload: &[u8]) -> Vec<u8> {
	if !payload.is_empty() && payload.len() <= 4 {
		subelement_small(type_code, payload)
	} else {
		subelement_regular(type_code, payload)
	}
}

/// Numeric subelement with a compact 4-byte tag and payload padded to 8 bytes total.
pub fn subelement_small(type_code: u8, payload: &[u8]) -> Vec<u8> {
	let mut out = Vec::with_capacity(8);
	out.extend_from_slice(&u16::from(type_code).to_le_bytes());
	out.extend_from_slice(&(payload.len() as u16).to_le_bytes());
	out.extend_from_slice(payload);
	out.resize(8, 0);
	out
}

/// Numeric subelement with a full 8-byte tag and payload padded to 8-byte alignment.
pub fn subelement_regular(type_code: u8, payload: &[u8]) -> Vec<u8> {
	subelement_regular_declared(type_code, payload, payload.len() as u32)
}

/// Numeric subelement whose tag declares `declared_len` bytes regardless of the payload.
pub fn subelement_regular_declared(type_code: u8, payload: &[u8], declared_len: u32) -> Vec<u8> {
	let mut out = Vec::with_capacity(8 + pad8(payload.len()));
	out.extend_from_slice(&u32::from(type_code).to_le_bytes());
	out.extend_from_slice(&declared_len.to_le_bytes());
	out.extend_from_slice(payload);
	out.resize(8 + pad8(payload.len()), 0);
	out
}

/// Builder for the decompressed `miMATRIX` element body.
#[derive(Debug, Clone)]
pub struct ElementBuilder {
	name: String,
	rows: i32,
	cols: i32,
	class: u8,
	complex: bool,
	dims_len: u8,
	regular_name: bool,
	real: Vec<u8>,
	imag: Option<Vec<u8>>,
}

impl ElementBuilder {
	/// Start a double-class element with no numeric data.
	pub fn new(name: &str, rows: i32, cols: i32) -> Self {
		Self {
			name: name.to_owned(),
			rows,
			cols,
			class: CLASS_DOUBLE,
			complex: false,
			dims_len: 8,
			regular_name: false,
			real: Vec::new(),
			imag: None,
		}
	}

	/// Override the array class byte.
	pub fn class(mut self, class: u8) -> Self {
		self.class = class;
		self
	}

	/// Override the declared dimension-array byte length.
	pub fn dims_len(mut self, dims_len: u8) -> Self {
		self.dims_len = dims_len;
		self
	}

	/// Force the regular name encoding even for short names.
	pub fn regular_name(mut self) -> Self {
		self.regular_name = true;
		self
	}

	/// Set the real subelement (already tagged).
	pub fn real(mut self, subelement: Vec<u8>) -> Self {
		self.real = subelement;
		self
	}

	/// Set the imaginary subelement (already tagged) and the complex flag.
	pub fn imag(mut self, subelement: Vec<u8>) -> Self {
		self.complex = true;
		self.imag = Some(subelement);
		self
	}

	/// Set the complex flag without an imaginary subelement.
	pub fn complex_flag(mut self) -> Self {
		self.complex = true;
		self
	}

	/// Render the element body as it appears after decompression.
	pub fn body(&self) -> Vec<u8> {
		let mut content = Vec::new();

		content.extend_from_slice(&6_u32.to_le_bytes());
		content.extend_from_slice(&8_u32.to_le_bytes());
		content.push(self.class);
		content.push(if self.complex { FLAG_COMPLEX } else { 0 });
		content.extend_from_slice(&[0_u8; 6]);

		content.extend_from_slice(&u32::from(MI_INT32).to_le_bytes());
		content.extend_from_slice(&u32::from(self.dims_len).to_le_bytes());
		content.extend_from_slice(&self.rows.to_le_bytes());
		content.extend_from_slice(&self.cols.to_le_bytes());

		let name = self.name.as_bytes();
		if !self.regular_name && !name.is_empty() && name.len() <= 4 {
			content.extend_from_slice(&u16::from(MI_INT8).to_le_bytes());
			content.extend_from_slice(&(name.len() as u16).to_le_bytes());
			content.extend_from_slice(name);
			content.resize(content.len() + 4 - name.len(), 0);
		} else {
			content.extend_from_slice(&u32::from(MI_INT8).to_le_bytes());
			content.extend_from_slice(&(name.len() as u32).to_le_bytes());
			content.extend_from_slice(name);
			content.resize(content.len() + pad8(name.len()) - name.len(), 0);
		}

		content.extend_from_slice(&self.real);
		if let Some(imag) = &self.imag {
			content.extend_from_slice(imag);
		}

		let mut out = Vec::with_capacity(8 + content.len());
		out.extend_from_slice(&MI_MATRIX.to_le_bytes());
		out.extend_from_slice(&(content.len() as u32).to_le_bytes());
		out.extend_from_slice(&content);
		out
	}

	/// Render a complete MAT file holding this element.
	pub fn file(&self) -> Vec<u8> {
		mat_file(&self.body())
	}
}

/// zlib-compress `bytes`.
pub fn compress(bytes: &[u8]) -> Vec<u8> {
	let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
	encoder.write_all(bytes).expect("in-memory compression succeeds");
	encoder.finish().expect("in-memory compression finishes")
}

/// Wrap an already-compressed payload in an outer tag of the given data type.
pub fn outer_element(data_type: u32, payload: &[u8]) -> Vec<u8> {
	let mut out = Vec::with_capacity(8 + payload.len());
	out.extend_from_slice(&data_type.to_le_bytes());
	out.extend_from_slice(&(payload.len() as u32).to_le_bytes());
	out.extend_from_slice(payload);
	out
}

/// Full little-endian MAT file: preamble, compressed element tag, compressed body.
pub fn mat_file(body: &[u8]) -> Vec<u8> {
	let mut out = header_bytes("MATLAB 5.0 MAT-file, written by matread_testkit", b"IM");
	out.extend_from_slice(&outer_element(MI_COMPRESSED, &compress(body)));
	out
}

fn pad8(len: usize) -> usize {
	len.div_ceil(8) * 8
}
