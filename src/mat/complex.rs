//! Reconstruction of complex arrays from two independently encoded subelements.
//!
//! Writers are free to store the real and imaginary halves with different numeric types (for
//! example doubles for the real half and `int16` for an all-integer imaginary half), so each half
//! goes through its own type dispatch before both are coerced to `f64`.

use tracing::debug;

use crate::mat::bytes::Cursor;
use crate::mat::numeric::{Numbers, Subelement, read_subelement};
use crate::mat::{Part, Result};

/// Decode the imaginary subelement that follows `real`.
pub fn read_imaginary(cursor: &Cursor<'_>, real: &Subelement, expected: usize) -> Result<Numbers> {
	let offset = real.end();
	debug!(offset, real_small = real.small, "locating imaginary part");
	let (_, imag) = read_subelement(cursor, offset, expected, Part::Imaginary)?;
	Ok(imag)
}

/// Concatenate the coerced real and imaginary blocks.
pub fn assemble(real: Numbers, imag: Numbers) -> Vec<f64> {
	let mut data = real.into_f64();
	data.extend(imag.into_f64());
	data
}

#[cfg(test)]
mod tests;
