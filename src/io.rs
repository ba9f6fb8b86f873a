//! Byte-level source and sink traits consumed by the codec core.
//!
//! Any `BufRead` is a source and any `Write` is a sink, so the core runs
//! equally over slices, `Vec<u8>`, buffered files or sockets.

use std::io::{self, BufRead, ErrorKind, Write};

pub trait ByteSource {
    /// Returns the next byte, or `None` at end of input.
    fn read_one(&mut self) -> io::Result<Option<u8>>;
}

pub trait ByteSink {
    fn write_one(&mut self, byte: u8) -> io::Result<()>;
    fn write_many(&mut self, bytes: &[u8]) -> io::Result<()>;
}

impl<R: BufRead + ?Sized> ByteSource for R {
    fn read_one(&mut self) -> io::Result<Option<u8>> {
        let byte = loop {
            match self.fill_buf() {
                Ok(buf) => break buf.first().copied(),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        };
        if byte.is_some() {
            self.consume(1);
        }
        Ok(byte)
    }
}

impl<W: Write + ?Sized> ByteSink for W {
    fn write_one(&mut self, byte: u8) -> io::Result<()> {
        self.write_all(&[byte])
    }

    fn write_many(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.write_all(bytes)
    }
}

/// Sink that discards output while tracking its length and CRC32.
#[derive(Default)]
pub struct ChecksumSink {
    hasher: crc32fast::Hasher,
    len: u64,
}

impl ChecksumSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn finalize(self) -> u32 {
        self.hasher.finalize()
    }
}

impl Write for ChecksumSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.hasher.update(buf);
        self.len += buf.len() as u64;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
