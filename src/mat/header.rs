use std::io::Read;

use crate::mat::{MatError, Result};

/// Parsed MAT Level-5 file preamble.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatHeader {
	/// Free-form description text with trailing spaces and NULs removed.
	pub description: String,
	/// Raw subsystem data offset field.
	pub subsystem_offset: [u8; 8],
	/// Format version field, read little-endian.
	pub version: u16,
	/// Two-character endian indicator as stored (`IM` for little-endian files).
	pub endian: [u8; 2],
}

impl MatHeader {
	/// Fixed preamble size in bytes.
	pub const SIZE: usize = 128;
	/// Length of the descriptive text field.
	pub const DESCRIPTION_LEN: usize = 116;
	/// Offset of the byte that selects byte order.
	pub const BYTE_ORDER_OFFSET: usize = 126;
	/// Marker written by little-endian writers.
	pub const LITTLE_ENDIAN_MARKER: u8 = b'I';

	/// Read and validate the preamble from the start of `reader`.
	pub fn read_from(reader: &mut impl Read) -> Result<Self> {
		let mut raw = [0_u8; Self::SIZE];
		reader.read_exact(&mut raw)?;
		Self::parse(&raw)
	}

	/// Validate a 128-byte preamble.
	pub fn parse(raw: &[u8; Self::SIZE]) -> Result<Self> {
		let marker = raw[Self::BYTE_ORDER_OFFSET];
		if marker != Self::LITTLE_ENDIAN_MARKER {
			return Err(MatError::UnexpectedByteOrder { marker: char::from(marker) });
		}

		let description = String::from_utf8_lossy(&raw[..Self::DESCRIPTION_LEN])
			.trim_end_matches(['\0', ' '])
			.to_owned();
		let mut subsystem_offset = [0_u8; 8];
		subsystem_offset.copy_from_slice(&raw[116..124]);

		Ok(Self {
			description,
			subsystem_offset,
			version: u16::from_le_bytes([raw[124], raw[125]]),
			endian: [raw[126], raw[127]],
		})
	}
}
