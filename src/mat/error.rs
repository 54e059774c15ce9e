use std::path::PathBuf;

use thiserror::Error;

use crate::mat::ValueKind;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, MatError>;

/// Coarse failure class used by callers that only care about the stage that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
	/// Open or read failure.
	Io,
	/// Invalid file preamble.
	Header,
	/// DEFLATE stream failure.
	Decompression,
	/// Structurally invalid element data.
	MalformedElement,
	/// Valid structure using an encoding this decoder does not handle.
	UnsupportedEncoding,
	/// Projection requested a variant the decoded value cannot widen to.
	TypeMismatch,
}

impl ErrorKind {
	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Io => "io",
			Self::Header => "header",
			Self::Decompression => "decompression",
			Self::MalformedElement => "malformed_element",
			Self::UnsupportedEncoding => "unsupported_encoding",
			Self::TypeMismatch => "type_mismatch",
		}
	}
}

/// Which numeric subelement of an element is being decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
	/// First subelement.
	Real,
	/// Second subelement, present only for complex arrays.
	Imaginary,
}

impl Part {
	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Real => "real",
			Self::Imaginary => "imaginary",
		}
	}
}

/// Errors produced while reading and decoding MAT data.
#[derive(Debug, Error)]
pub enum MatError {
	/// Stream IO failure without a known path.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// File could not be opened or read.
	#[error("unable to read file {}: {source}", path.display())]
	File {
		/// Path that failed.
		path: PathBuf,
		/// Underlying IO error.
		#[source]
		source: std::io::Error,
	},
	/// Header byte-order marker is not little-endian.
	#[error("Unexpected Byte Order (marker={marker:?}, expected 'I')")]
	UnexpectedByteOrder {
		/// Byte found at header offset 126.
		marker: char,
	},
	/// Outer element is not a compressed element.
	#[error("unsupported outer element data type {data_type} (expected 15, compressed)")]
	UncompressedElement {
		/// Data type found in the outer tag.
		data_type: u32,
	},
	/// Outer tag declared a negative payload length.
	#[error("negative compressed length {len}")]
	NegativeCompressedLength {
		/// Parsed signed length.
		len: i32,
	},
	/// zlib reported a stream failure.
	#[error("failed to uncompress element: {detail}")]
	Decompression {
		/// Message reported by the inflater.
		detail: String,
	},
	/// Decompression output exceeded configured safety limit.
	#[error("decompressed output exceeded limit {limit} bytes")]
	DecompressedTooLarge {
		/// Maximum allowed output bytes.
		limit: usize,
	},
	/// First byte of the decompressed element is not the matrix marker.
	#[error("unexpected marker {marker} in decompressed element (expected 14)")]
	UnexpectedMarker {
		/// Byte found at offset 0.
		marker: u8,
	},
	/// Dimension array is not a pair of `i32`.
	#[error("multidimensional data unsupported (dimension tag length {dims_len})")]
	Multidimensional {
		/// Declared dimension-array byte length.
		dims_len: u8,
	},
	/// A dimension was negative.
	#[error("negative dimension {rows}x{cols}")]
	NegativeDimension {
		/// Parsed row count.
		rows: i32,
		/// Parsed column count.
		cols: i32,
	},
	/// Element count does not fit in memory.
	#[error("dimension {rows}x{cols} overflows element count")]
	DimensionOverflow {
		/// Row count.
		rows: usize,
		/// Column count.
		cols: usize,
	},
	/// Variable name exceeds configured maximum.
	#[error("variable name length {len} exceeds maximum {max}")]
	NameTooLong {
		/// Declared name length.
		len: usize,
		/// Configured maximum.
		max: usize,
	},
	/// Not enough bytes remained for a requested read.
	#[error("unexpected end of element at offset {at}, need {need} bytes, remaining {rem}")]
	UnexpectedEof {
		/// Byte offset where the read was attempted.
		at: usize,
		/// Requested bytes.
		need: usize,
		/// Bytes available from `at`.
		rem: usize,
	},
	/// Compact tag declared more than four payload bytes.
	#[error("small data tag at offset {at} declares {len} bytes (max 4)")]
	BadSmallDataTag {
		/// Subelement offset.
		at: usize,
		/// Declared compact length.
		len: u16,
	},
	/// Declared subelement length disagrees with the dimensions.
	#[error("size mismatch in {} part: expected {expected} elements, declared {declared}", part.as_str())]
	SizeMismatch {
		/// Subelement being decoded.
		part: Part,
		/// Element count implied by dimensions.
		expected: usize,
		/// Element count implied by declared byte length.
		declared: usize,
	},
	/// Numeric type code is not an integer or double code.
	#[error("unexpected type code {code} when reading {} part of data sequence", part.as_str())]
	UnsupportedType {
		/// Subelement being decoded.
		part: Part,
		/// Offending type code.
		code: u8,
	},
	/// Array class is cell, struct, object, or sparse.
	#[error("unsupported array class {class}")]
	UnsupportedClass {
		/// Class byte from the array flags.
		class: u8,
	},
	/// Typed accessor could not reach the requested variant.
	#[error("Got error while reading {name}. Expected {}, but read {}", expected.as_str(), actual.as_str())]
	TypeMismatch {
		/// Variable name.
		name: String,
		/// Requested kind.
		expected: ValueKind,
		/// Decoded kind.
		actual: ValueKind,
	},
}

impl MatError {
	/// Map the error onto its taxonomy tag.
	pub fn kind(&self) -> ErrorKind {
		match self {
			Self::Io(_) | Self::File { .. } => ErrorKind::Io,
			Self::UnexpectedByteOrder { .. } => ErrorKind::Header,
			Self::Decompression { .. } | Self::DecompressedTooLarge { .. } => ErrorKind::Decompression,
			Self::NegativeCompressedLength { .. }
			| Self::UnexpectedMarker { .. }
			| Self::Multidimensional { .. }
			| Self::NegativeDimension { .. }
			| Self::DimensionOverflow { .. }
			| Self::NameTooLong { .. }
			| Self::UnexpectedEof { .. }
			| Self::BadSmallDataTag { .. }
			| Self::SizeMismatch { .. } => ErrorKind::MalformedElement,
			Self::UncompressedElement { .. } | Self::UnsupportedType { .. } | Self::UnsupportedClass { .. } => ErrorKind::UnsupportedEncoding,
			Self::TypeMismatch { .. } => ErrorKind::TypeMismatch,
		}
	}
}
