//! Control-byte framing shared by the encoder and decoder.
//!
//! A stream is a sequence of records `[control][payload]`. Bit 7 of the
//! control byte selects the record kind and bits 0-6 carry its length:
//!
//! - `1LLLLLLL vv`: repeat `vv` L times
//! - `0LLLLLLL b1 .. bL`: copy L literal bytes

pub const MODE_BIT: u8 = 0x80;
pub const LENGTH_MASK: u8 = 0x7F;

/// Longest run a single record can describe.
pub const MAX_RUN: usize = LENGTH_MASK as usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunKind {
    Repeat,
    Literal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlByte(u8);

impl ControlByte {
    /// Builds the header for a record of `len` bytes, `len` in `1..=MAX_RUN`.
    pub fn new(kind: RunKind, len: usize) -> Self {
        debug_assert!((1..=MAX_RUN).contains(&len), "run length {} out of range", len);
        let len = len as u8 & LENGTH_MASK;
        match kind {
            RunKind::Repeat => Self(len | MODE_BIT),
            RunKind::Literal => Self(len),
        }
    }

    pub fn from_byte(byte: u8) -> Self {
        Self(byte)
    }

    pub fn kind(self) -> RunKind {
        if self.0 & MODE_BIT != 0 {
            RunKind::Repeat
        } else {
            RunKind::Literal
        }
    }

    pub fn len(self) -> usize {
        (self.0 & LENGTH_MASK) as usize
    }

    /// Zero-length headers are never produced by the encoder.
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Number of payload bytes that follow this header on the wire.
    pub fn payload_len(self) -> usize {
        match self.kind() {
            RunKind::Repeat => 1,
            RunKind::Literal => self.len(),
        }
    }

    pub fn byte(self) -> u8 {
        self.0
    }
}
