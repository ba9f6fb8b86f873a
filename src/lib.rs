//! # rlepack
//!
//! A byte-oriented run-length encoding codec. Runs of repeated bytes are
//! collapsed into `(count, byte)` records, everything else is copied through
//! as length-prefixed literal records, and decoding reverses the transform
//! exactly.
//!
//! ## Wire Format
//!
//! The encoded stream has no header or footer. It is a sequence of records,
//! each starting with one control byte:
//!
//! - **Bit 7 set**: repeat record. Bits 0-6 hold the run length (1-127) and a
//!   single value byte follows.
//! - **Bit 7 clear**: literal record. Bits 0-6 hold the length (1-127) and that
//!   many raw bytes follow.
//!
//! Longer runs are split across several records.
//!
//! ## Quick Start
//!
//! ```rust
//! use rlepack::{encode_data, decode_data};
//!
//! let original = b"aaaaaaaabcd";
//! let encoded = encode_data(original);
//! assert_eq!(encoded, vec![0x88, b'a', 0x03, b'b', b'c', b'd']);
//!
//! let decoded = decode_data(&encoded).unwrap();
//! assert_eq!(original.to_vec(), decoded);
//! ```
//!
//! ### Working with Files
//!
//! ```rust
//! use rlepack::{pipeline, CodecConfig};
//! use std::path::Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = CodecConfig::default();
//! let stats = pipeline::encode_file(Path::new("input.bin"), Path::new("input.rle"), &config)?;
//! println!("Compression ratio: {:.2}x", stats.ratio());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod format;
pub mod io;
pub mod pipeline;
pub mod stats;

// Re-export commonly used types for convenience
pub use config::{CodecConfig, TruncationPolicy};
pub use decoder::StreamInfo;
pub use error::{RleError, Result};
pub use format::{ControlByte, RunKind, MAX_RUN};
pub use io::{ByteSink, ByteSource};
pub use stats::CodecStats;

/// Encode data in memory.
///
/// Writing into a `Vec<u8>` cannot fail, so unlike the streaming
/// [`encoder::encode`] this returns the encoded bytes directly.
///
/// # Example
///
/// ```rust
/// use rlepack::encode_data;
///
/// assert_eq!(encode_data(&[0x41]), vec![0x81, 0x41]);
/// assert!(encode_data(&[]).is_empty());
/// ```
pub fn encode_data(data: &[u8]) -> Vec<u8> {
    let mut source = data;
    let mut output: Vec<u8> = Vec::with_capacity(data.len() + data.len() / MAX_RUN + 1);
    match encoder::encode(&mut source, &mut output) {
        Ok(stats) => debug_assert_eq!(stats.bytes_out, output.len() as u64),
        // Slices and vectors never fail as source or sink.
        Err(e) => unreachable!("in-memory encode failed: {}", e),
    }
    output
}

/// Decode data in memory using the strict truncation policy.
///
/// # Example
///
/// ```rust
/// use rlepack::decode_data;
///
/// assert_eq!(decode_data(&[0x03, 1, 2, 3]).unwrap(), vec![1, 2, 3]);
/// assert!(decode_data(&[0x03, 1]).is_err());
/// ```
pub fn decode_data(encoded: &[u8]) -> Result<Vec<u8>> {
    decode_data_with(encoded, &CodecConfig::default())
}

/// Decode data in memory with an explicit configuration.
pub fn decode_data_with(encoded: &[u8], config: &CodecConfig) -> Result<Vec<u8>> {
    let mut source = encoded;
    let mut output: Vec<u8> = Vec::with_capacity(encoded.len() * 2);
    decoder::decode(&mut source, &mut output, config.truncation)?;
    Ok(output)
}

/// Get information about an encoded stream without keeping its output.
///
/// # Example
///
/// ```rust
/// use rlepack::{encode_data, inspect_data};
///
/// let data = vec![0u8; 1000];
/// let info = inspect_data(&encode_data(&data)).unwrap();
/// assert_eq!(info.decoded_size(), 1000);
/// assert_eq!(info.crc32, crc32fast::hash(&data));
/// ```
pub fn inspect_data(encoded: &[u8]) -> Result<StreamInfo> {
    let mut source = encoded;
    decoder::inspect(&mut source)
}

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Get library version information
pub fn version_info() -> VersionInfo {
    VersionInfo {
        version: VERSION,
        authors: AUTHORS,
        description: DESCRIPTION,
    }
}

#[derive(Debug, Clone)]
pub struct VersionInfo {
    pub version: &'static str,
    pub authors: &'static str,
    pub description: &'static str,
}
