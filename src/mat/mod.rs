mod bytes;
mod complex;
mod compression;
mod decode;
mod element;
mod error;
mod header;
mod numeric;
mod project;
mod value;

/// Bounds-checked byte reads.
pub use bytes::Cursor;
/// Complex reconstruction helpers.
pub use complex::{assemble, read_imaginary};
/// Compressed element reading.
pub use compression::{MI_COMPRESSED, inflate, read_compressed_element};
/// Decode entry points and options.
pub use decode::{DecodeOptions, Variable, decode, decode_bytes, decode_element, decode_reader, decode_with};
/// Decompressed element parsing.
pub use element::{Element, Shape};
/// Error and result aliases.
pub use error::{ErrorKind, MatError, Part, Result};
/// File preamble.
pub use header::MatHeader;
/// Numeric subelement decoding.
pub use numeric::{MI_DOUBLE, NumericType, Numbers, Subelement, read_subelement};
/// Typed path accessors.
pub use project::{
	read_complex, read_double, read_int, read_matrix, read_matrix_complex, read_matrix_int, read_vector, read_vector_complex, read_vector_int,
};
/// Decoded value types.
pub use value::{ComplexArray, Matrix, Value, ValueKind};
