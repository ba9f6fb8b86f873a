use crate::format::RunKind;

/// Counters gathered by a single encode or decode call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CodecStats {
    pub bytes_in: u64,
    pub bytes_out: u64,
    pub repeat_records: u64,
    pub literal_records: u64,
}

impl CodecStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> u64 {
        self.repeat_records + self.literal_records
    }

    pub fn record(&mut self, kind: RunKind) {
        match kind {
            RunKind::Repeat => self.repeat_records += 1,
            RunKind::Literal => self.literal_records += 1,
        }
    }

    /// `bytes_in / bytes_out`, or 0.0 when nothing was written.
    pub fn ratio(&self) -> f64 {
        if self.bytes_out > 0 {
            self.bytes_in as f64 / self.bytes_out as f64
        } else {
            0.0
        }
    }
}
