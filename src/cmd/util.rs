use matread::mat::DecodeOptions;

/// Decoder limits exposed as command-line flags.
#[derive(clap::Args, Debug, Clone)]
pub struct DecodeArgs {
	/// Inflate output chunk size in bytes.
	#[arg(long = "chunk-size")]
	pub chunk_size: Option<usize>,
	/// Maximum decompressed element size in bytes.
	#[arg(long = "max-bytes")]
	pub max_bytes: Option<usize>,
}

impl DecodeArgs {
	/// Overlay flags on the default options.
	pub fn options(&self) -> DecodeOptions {
		let mut opt = DecodeOptions::default();
		if let Some(chunk_size) = self.chunk_size {
			opt.chunk_size = chunk_size;
		}
		if let Some(max_bytes) = self.max_bytes {
			opt.max_decompressed_bytes = max_bytes;
		}
		opt
	}
}

/// Print a serializable payload as pretty JSON on stdout.
pub(crate) fn emit_json<T: serde::Serialize>(payload: &T) {
	match serde_json::to_string_pretty(payload) {
		Ok(text) => println!("{text}"),
		Err(err) => eprintln!("error: failed to render json: {err}"),
	}
}

/// Render a complex number as `re+imi`.
pub(crate) fn complex_label(re: f64, im: f64) -> String {
	if im.is_sign_negative() { format!("{re}{im}i") } else { format!("{re}+{im}i") }
}
