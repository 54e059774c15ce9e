use std::io::{self, Read};

use flate2::{Decompress, FlushDecompress, Status};
use tracing::{debug, trace};

use crate::mat::{DecodeOptions, MatError, Result};

/// Data type code of a compressed element (`miCOMPRESSED`).
pub const MI_COMPRESSED: u32 = 15;
/// Size of the outer element tag.
pub const TAG_SIZE: usize = 8;

/// Read the outer compressed-element tag and payload, then inflate it.
pub fn read_compressed_element(reader: &mut impl Read, opt: &DecodeOptions) -> Result<Vec<u8>> {
	let mut tag = [0_u8; TAG_SIZE];
	reader.read_exact(&mut tag)?;

	let data_type = u32::from_le_bytes([tag[0], tag[1], tag[2], tag[3]]);
	if data_type != MI_COMPRESSED {
		return Err(MatError::UncompressedElement { data_type });
	}

	let len = i32::from_le_bytes([tag[4], tag[5], tag[6], tag[7]]);
	let len = usize::try_from(len).map_err(|_| MatError::NegativeCompressedLength { len })?;

	let mut compressed = Vec::new();
	reader.by_ref().take(len as u64).read_to_end(&mut compressed)?;
	if compressed.len() < len {
		return Err(MatError::Io(io::Error::new(
			io::ErrorKind::UnexpectedEof,
			format!("compressed element truncated: declared {len} bytes, read {}", compressed.len()),
		)));
	}
	debug!(compressed_len = len, "read compressed element");

	inflate(&compressed, opt)
}

/// Inflate a zlib-wrapped DEFLATE stream chunk by chunk.
///
/// The stream ends on an explicit end-of-stream marker or once the inflater can make no further
/// progress. The latter accepts a stream whose trailer is missing; whatever was produced so far is
/// returned and the element parser rejects it if it is too short.
pub fn inflate(compressed: &[u8], opt: &DecodeOptions) -> Result<Vec<u8>> {
	let mut stream = Decompress::new(true);
	let mut chunk = vec![0_u8; opt.chunk_size.max(1)];
	let mut out = Vec::new();
	let mut pos = 0_usize;

	loop {
		let input = compressed.get(pos..).unwrap_or_default();
		let in_before = stream.total_in();
		let out_before = stream.total_out();

		let status = stream
			.decompress(input, &mut chunk, FlushDecompress::Sync)
			.map_err(|err| MatError::Decompression { detail: err.to_string() })?;

		let consumed = (stream.total_in() - in_before) as usize;
		let produced = (stream.total_out() - out_before) as usize;
		pos += consumed;

		if out.len() + produced > opt.max_decompressed_bytes {
			return Err(MatError::DecompressedTooLarge {
				limit: opt.max_decompressed_bytes,
			});
		}
		out.extend_from_slice(&chunk[..produced]);
		trace!(consumed, produced, total = out.len(), ?status, "inflate chunk");

		match status {
			Status::StreamEnd | Status::BufError => break,
			Status::Ok if consumed == 0 && produced == 0 => break,
			Status::Ok => {}
		}
	}

	debug!(decompressed_len = out.len(), "inflated element");
	Ok(out)
}
