//! Run-length encoder.
//!
//! A single forward pass over the source with a three byte lookahead
//! window. Every byte ends up in either a repeat record or a literal
//! record, and no record is ever longer than [`MAX_RUN`].

use crate::error::Result;
use crate::format::{ControlByte, RunKind, MAX_RUN};
use crate::io::{ByteSink, ByteSource};
use crate::stats::CodecStats;
use log::trace;
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Repeat { value: u8 },
    Literal,
}

/// `current`, `next` and `next_next`, where `None` marks end of input.
struct Window {
    current: Option<u8>,
    next: Option<u8>,
    next_next: Option<u8>,
}

impl Window {
    fn fill<S: ByteSource + ?Sized>(source: &mut S, stats: &mut CodecStats) -> io::Result<Self> {
        let current = pull(source, stats)?;
        let next = match current {
            Some(_) => pull(source, stats)?,
            None => None,
        };
        let next_next = match next {
            Some(_) => pull(source, stats)?,
            None => None,
        };
        Ok(Self { current, next, next_next })
    }

    fn advance<S: ByteSource + ?Sized>(&mut self, source: &mut S, stats: &mut CodecStats) -> io::Result<()> {
        self.current = self.next;
        self.next = self.next_next;
        if self.next_next.is_some() {
            self.next_next = pull(source, stats)?;
        }
        Ok(())
    }

    /// A new repeat run starts at `next`. Two end-of-input markers also
    /// compare equal, which forces the final literal flush.
    fn repeat_ahead(&self) -> bool {
        self.next == self.next_next
    }
}

fn pull<S: ByteSource + ?Sized>(source: &mut S, stats: &mut CodecStats) -> io::Result<Option<u8>> {
    let byte = source.read_one()?;
    if byte.is_some() {
        stats.bytes_in += 1;
    }
    Ok(byte)
}

fn write_repeat<K: ByteSink + ?Sized>(sink: &mut K, stats: &mut CodecStats, len: usize, value: u8) -> io::Result<()> {
    trace!("repeat record: {} x {:#04x}", len, value);
    sink.write_one(ControlByte::new(RunKind::Repeat, len).byte())?;
    sink.write_one(value)?;
    stats.record(RunKind::Repeat);
    stats.bytes_out += 2;
    Ok(())
}

fn write_literal<K: ByteSink + ?Sized>(sink: &mut K, stats: &mut CodecStats, bytes: &[u8]) -> io::Result<()> {
    trace!("literal record: {} bytes", bytes.len());
    sink.write_one(ControlByte::new(RunKind::Literal, bytes.len()).byte())?;
    sink.write_many(bytes)?;
    stats.record(RunKind::Literal);
    stats.bytes_out += 1 + bytes.len() as u64;
    Ok(())
}

/// Encodes everything `source` yields into `sink`.
///
/// Empty input produces no output. Source and sink errors abort the call
/// and are returned as-is; the sink may hold a partial stream afterwards.
pub fn encode<S, K>(source: &mut S, sink: &mut K) -> Result<CodecStats>
where
    S: ByteSource + ?Sized,
    K: ByteSink + ?Sized,
{
    let mut stats = CodecStats::new();
    let mut window = Window::fill(source, &mut stats)?;

    let mut state = match (window.current, window.next) {
        (None, _) => return Ok(stats),
        // A lone byte is a repeat run of one.
        (Some(first), None) => State::Repeat { value: first },
        (Some(first), Some(second)) if first == second => State::Repeat { value: first },
        _ => State::Literal,
    };

    let mut literal = [0u8; MAX_RUN];
    let mut len = 0usize;

    while let Some(current) = window.current {
        match state {
            State::Repeat { value } => {
                debug_assert_eq!(value, current);
                len += 1;

                if window.next != Some(current) {
                    write_repeat(sink, &mut stats, len, value)?;
                    len = 0;
                    state = match window.next {
                        Some(next) if window.repeat_ahead() => State::Repeat { value: next },
                        _ => State::Literal,
                    };
                }

                if len == MAX_RUN {
                    write_repeat(sink, &mut stats, len, value)?;
                    len = 0;
                }
            }
            State::Literal => {
                literal[len] = current;
                len += 1;

                if window.repeat_ahead() {
                    write_literal(sink, &mut stats, &literal[..len])?;
                    len = 0;
                    if let Some(next) = window.next {
                        state = State::Repeat { value: next };
                    }
                }

                if len == MAX_RUN {
                    write_literal(sink, &mut stats, &literal[..len])?;
                    len = 0;
                }
            }
        }

        window.advance(source, &mut stats)?;
    }

    debug_assert_eq!(len, 0);
    Ok(stats)
}
