use tracing::debug;

use crate::mat::bytes::{Cursor, pad8};
use crate::mat::{MatError, Part, Result};

/// Data type code of IEEE-754 double subelements (`miDOUBLE`).
pub const MI_DOUBLE: u8 = 9;

const TAG_SIZE: usize = 8;
const SMALL_TAG_SIZE: usize = 4;
const SMALL_MAX_LEN: u16 = 4;

/// Storage representation of one numeric subelement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericType {
	/// Little-endian integers of `width` bytes.
	Int {
		/// Bytes per element: 1, 2, 4, or 8.
		width: u8,
		/// Whether values are sign-extended.
		signed: bool,
	},
	/// Little-endian IEEE-754 doubles.
	Double,
}

impl NumericType {
	/// Map a MAT data type code onto its storage representation.
	pub fn from_code(code: u8, part: Part) -> Result<Self> {
		let (width, signed) = match code {
			MI_DOUBLE => return Ok(Self::Double),
			1 => (1, true),
			2 => (1, false),
			3 => (2, true),
			4 => (2, false),
			5 => (4, true),
			6 => (4, false),
			12 => (8, true),
			13 => (8, false),
			_ => return Err(MatError::UnsupportedType { part, code }),
		};
		Ok(Self::Int { width, signed })
	}

	/// Bytes per element.
	pub fn width(self) -> usize {
		match self {
			Self::Int { width, .. } => usize::from(width),
			Self::Double => 8,
		}
	}
}

/// Decoded numbers of one subelement.
#[derive(Debug, Clone, PartialEq)]
pub enum Numbers {
	/// Integer family, widened to `i64`.
	Int(Vec<i64>),
	/// Double family.
	Double(Vec<f64>),
}

impl Numbers {
	/// Number of decoded elements.
	pub fn len(&self) -> usize {
		match self {
			Self::Int(values) => values.len(),
			Self::Double(values) => values.len(),
		}
	}

	/// Return whether no elements were decoded.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Coerce to floating point.
	pub fn into_f64(self) -> Vec<f64> {
		match self {
			Self::Int(values) => values.into_iter().map(|value| value as f64).collect(),
			Self::Double(values) => values,
		}
	}
}

/// Located numeric subelement tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subelement {
	/// Offset of the tag inside the element.
	pub offset: usize,
	/// Storage representation.
	pub ty: NumericType,
	/// Whether the compact 4-byte tag was used.
	pub small: bool,
	/// Declared payload byte length.
	pub declared_len: usize,
	/// Offset of the first payload byte.
	pub payload_start: usize,
}

impl Subelement {
	/// Parse the tag at `offset`.
	///
	/// A non-zero byte at `offset + 2` selects the compact layout: a 16-bit length at `+2` and the
	/// payload at `+4`. Otherwise the length is a 32-bit value at `+4` and the payload starts at
	/// `+8`. Doubles always use the full layout.
	pub fn locate(cursor: &Cursor<'_>, offset: usize, part: Part) -> Result<Self> {
		let ty = NumericType::from_code(cursor.u8_at(offset)?, part)?;

		let small = ty != NumericType::Double && cursor.u8_at(offset + 2)? != 0;
		let (declared_len, payload_start) = if small {
			let len = cursor.u16_le_at(offset + 2)?;
			if len > SMALL_MAX_LEN {
				return Err(MatError::BadSmallDataTag { at: offset, len });
			}
			(usize::from(len), offset + SMALL_TAG_SIZE)
		} else {
			(cursor.u32_le_at(offset + 4)? as usize, offset + TAG_SIZE)
		};

		Ok(Self {
			offset,
			ty,
			small,
			declared_len,
			payload_start,
		})
	}

	/// Bytes occupied by tag and padded payload.
	pub fn footprint(&self) -> usize {
		if self.small { TAG_SIZE } else { TAG_SIZE + pad8(self.declared_len) }
	}

	/// Offset of whatever follows this subelement.
	pub fn end(&self) -> usize {
		self.offset + self.footprint()
	}

	/// Decode exactly `expected` elements from the payload.
	pub fn read(&self, cursor: &Cursor<'_>, expected: usize, part: Part) -> Result<Numbers> {
		let width = self.ty.width();
		let declared = self.declared_len / width;
		if declared != expected {
			return Err(MatError::SizeMismatch { part, expected, declared });
		}

		let need = expected.checked_mul(width).ok_or(MatError::UnexpectedEof {
			at: self.payload_start,
			need: usize::MAX,
			rem: cursor.len().saturating_sub(self.payload_start),
		})?;
		let payload = cursor.slice_at(self.payload_start, need)?;

		let numbers = match self.ty {
			NumericType::Double => Numbers::Double(payload.chunks_exact(8).map(|chunk| f64::from_le_bytes(le(chunk))).collect()),
			NumericType::Int { width, signed } => Numbers::Int(
				payload
					.chunks_exact(usize::from(width))
					.map(|chunk| widen(chunk, signed))
					.collect(),
			),
		};
		debug!(part = part.as_str(), offset = self.offset, ty = ?self.ty, small = self.small, count = expected, "decoded subelement");
		Ok(numbers)
	}
}

/// Locate and decode the subelement at `offset`.
pub fn read_subelement(cursor: &Cursor<'_>, offset: usize, expected: usize, part: Part) -> Result<(Subelement, Numbers)> {
	let sub = Subelement::locate(cursor, offset, part)?;
	let numbers = sub.read(cursor, expected, part)?;
	Ok((sub, numbers))
}

/// Sign- or zero-extend one little-endian integer to `i64`.
///
/// Unsigned 64-bit values above `i64::MAX` keep their bit pattern.
fn widen(chunk: &[u8], signed: bool) -> i64 {
	match (chunk.len(), signed) {
		(1, true) => i64::from(chunk[0] as i8),
		(1, false) => i64::from(chunk[0]),
		(2, true) => i64::from(i16::from_le_bytes(le(chunk))),
		(2, false) => i64::from(u16::from_le_bytes(le(chunk))),
		(4, true) => i64::from(i32::from_le_bytes(le(chunk))),
		(4, false) => i64::from(u32::from_le_bytes(le(chunk))),
		_ => i64::from_le_bytes(le(chunk)),
	}
}

fn le<const N: usize>(chunk: &[u8]) -> [u8; N] {
	let mut buf = [0_u8; N];
	buf.copy_from_slice(&chunk[..N]);
	buf
}
