use thiserror::Error;

#[derive(Error, Debug)]
pub enum RleError {
	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),

	#[error("Invalid argument: {0}")]
	InvalidArgument(String),

	#[error("Malformed stream at offset {offset}: record declares {expected} payload bytes, {actual} available")]
	MalformedStream { offset: u64, expected: usize, actual: usize },

	#[error("Invalid control byte {byte:#04x} at offset {offset}: zero-length record")]
	InvalidControlByte { offset: u64, byte: u8 },

	#[error("Configuration error: {0}")]
	ConfigError(String),

	#[error("Round trip mismatch: original crc32 {expected:08x}, decoded crc32 {actual:08x}")]
	RoundTripMismatch { expected: u32, actual: u32 },
}

pub type Result<T> = std::result::Result<T, RleError>;
