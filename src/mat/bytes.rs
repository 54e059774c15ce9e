use crate::mat::{MatError, Result};

/// Bounds-checked little-endian reads at explicit offsets of an immutable byte slice.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
	bytes: &'a [u8],
}

impl<'a> Cursor<'a> {
	/// Wrap a byte slice.
	pub fn new(bytes: &'a [u8]) -> Self {
		Self { bytes }
	}

	/// Return total buffer length.
	pub fn len(&self) -> usize {
		self.bytes.len()
	}

	/// Return whether the buffer is empty.
	pub fn is_empty(&self) -> bool {
		self.bytes.is_empty()
	}

	/// Borrow exactly `n` bytes starting at `at`.
	pub fn slice_at(&self, at: usize, n: usize) -> Result<&'a [u8]> {
		let end = at.checked_add(n).ok_or(MatError::UnexpectedEof {
			at,
			need: n,
			rem: self.remaining_from(at),
		})?;
		self.bytes.get(at..end).ok_or(MatError::UnexpectedEof {
			at,
			need: n,
			rem: self.remaining_from(at),
		})
	}

	/// Read one byte.
	pub fn u8_at(&self, at: usize) -> Result<u8> {
		Ok(self.slice_at(at, 1)?[0])
	}

	/// Read a little-endian `u16`.
	pub fn u16_le_at(&self, at: usize) -> Result<u16> {
		Ok(u16::from_le_bytes(self.array_at(at)?))
	}

	/// Read a little-endian `u32`.
	pub fn u32_le_at(&self, at: usize) -> Result<u32> {
		Ok(u32::from_le_bytes(self.array_at(at)?))
	}

	/// Read a little-endian `i32`.
	pub fn i32_le_at(&self, at: usize) -> Result<i32> {
		Ok(i32::from_le_bytes(self.array_at(at)?))
	}

	/// Read a little-endian IEEE-754 `f64`.
	pub fn f64_le_at(&self, at: usize) -> Result<f64> {
		Ok(f64::from_le_bytes(self.array_at(at)?))
	}

	fn array_at<const N: usize>(&self, at: usize) -> Result<[u8; N]> {
		let raw = self.slice_at(at, N)?;
		let mut buf = [0_u8; N];
		buf.copy_from_slice(raw);
		Ok(buf)
	}

	fn remaining_from(&self, at: usize) -> usize {
		self.bytes.len().saturating_sub(at)
	}
}

/// Round `len` up to the next multiple of eight.
pub fn pad8(len: usize) -> usize {
	len.div_ceil(8) * 8
}
