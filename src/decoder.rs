//! Run-length decoder.
//!
//! Stateless per record: read a control byte, read its payload, expand.
//! The only clean place for the input to end is a record boundary; what
//! happens otherwise is decided by [`TruncationPolicy`].

use crate::config::TruncationPolicy;
use crate::error::{Result, RleError};
use crate::format::{ControlByte, RunKind, MAX_RUN};
use crate::io::{ByteSink, ByteSource, ChecksumSink};
use crate::stats::CodecStats;
use log::{trace, warn};
use std::io;

/// Summary of an encoded stream, gathered without keeping its output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamInfo {
    pub stats: CodecStats,
    pub crc32: u32,
}

impl StreamInfo {
    pub fn encoded_size(&self) -> u64 {
        self.stats.bytes_in
    }

    pub fn decoded_size(&self) -> u64 {
        self.stats.bytes_out
    }
}

/// Fills `buf` from `source`, returning how many bytes were available.
fn read_payload<S: ByteSource + ?Sized>(source: &mut S, buf: &mut [u8]) -> io::Result<usize> {
    for (filled, slot) in buf.iter_mut().enumerate() {
        match source.read_one()? {
            Some(byte) => *slot = byte,
            None => return Ok(filled),
        }
    }
    Ok(buf.len())
}

/// Decodes a record stream from `source` into `sink`.
pub fn decode<S, K>(source: &mut S, sink: &mut K, policy: TruncationPolicy) -> Result<CodecStats>
where
    S: ByteSource + ?Sized,
    K: ByteSink + ?Sized,
{
    let mut stats = CodecStats::new();
    let mut buf = [0u8; MAX_RUN];

    while let Some(byte) = source.read_one()? {
        let offset = stats.bytes_in;
        stats.bytes_in += 1;

        let control = ControlByte::from_byte(byte);
        if control.is_empty() {
            if policy == TruncationPolicy::Strict {
                return Err(RleError::InvalidControlByte { offset, byte });
            }
            warn!("skipping zero-length record {:#04x} at offset {}", byte, offset);
        }

        let expected = control.payload_len();
        let actual = read_payload(source, &mut buf[..expected])?;
        stats.bytes_in += actual as u64;

        if actual < expected {
            if policy == TruncationPolicy::Strict {
                return Err(RleError::MalformedStream { offset, expected, actual });
            }
            warn!(
                "stream truncated at offset {}: record declares {} payload bytes, {} available",
                offset, expected, actual
            );
            if control.kind() == RunKind::Literal {
                sink.write_many(&buf[..actual])?;
                stats.bytes_out += actual as u64;
            }
            break;
        }

        if control.is_empty() {
            continue;
        }

        let len = control.len();
        if control.kind() == RunKind::Repeat {
            let value = buf[0];
            buf[..len].fill(value);
        }
        trace!("{:?} record: {} bytes", control.kind(), len);
        sink.write_many(&buf[..len])?;
        stats.record(control.kind());
        stats.bytes_out += len as u64;
    }

    Ok(stats)
}

/// Walks an encoded stream under the strict policy, discarding output but
/// recording its size and CRC32.
pub fn inspect<S: ByteSource + ?Sized>(source: &mut S) -> Result<StreamInfo> {
    let mut sink = ChecksumSink::new();
    let stats = decode(source, &mut sink, TruncationPolicy::Strict)?;
    debug_assert_eq!(stats.bytes_out, sink.len());
    Ok(StreamInfo { stats, crc32: sink.finalize() })
}
