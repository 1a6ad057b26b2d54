//! Cumulative compression statistics and their human-readable report.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::block::BlockRecord;
use crate::format::BYTES_PER_READING;
use crate::utils::format_bytes;

const RULE: &str = "==================================";

/// Running totals over every block a session has emitted since the last reset.
///
/// Invariants: `original_size == total_readings * 4` and
/// `compressed_size == 8 * blocks_compressed + 4 * (readings in raw blocks)`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompressionStats {
    pub total_readings: u64,
    pub original_size: u64,
    pub compressed_size: u64,
    /// Blocks stored as a formula.
    pub blocks_compressed: u64,
    /// Blocks stored verbatim.
    pub blocks_raw: u64,
}

impl CompressionStats {
    /// Accounts for one emitted record that encodes `block_len` readings.
    pub(crate) fn record(&mut self, record: &BlockRecord, block_len: usize) {
        let block_len = block_len as u64;
        self.total_readings += block_len;
        self.original_size += block_len * BYTES_PER_READING;
        self.compressed_size += record.encoded_size();
        match record {
            BlockRecord::Formula { .. } => self.blocks_compressed += 1,
            BlockRecord::Raw { .. } => self.blocks_raw += 1,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn total_blocks(&self) -> u64 {
        self.blocks_compressed + self.blocks_raw
    }

    /// `original_size / compressed_size`, or `1.0` before any block was seen.
    pub fn ratio(&self) -> f32 {
        if self.compressed_size == 0 {
            return 1.0;
        }
        (self.original_size as f64 / self.compressed_size as f64) as f32
    }

    /// Percentage of blocks stored as formulas, or `0.0` before any block was seen.
    pub fn success_rate(&self) -> f32 {
        let total = self.total_blocks();
        if total == 0 {
            return 0.0;
        }
        (self.blocks_compressed as f64 / total as f64 * 100.0) as f32
    }

    /// Renders the multi-line statistics report.
    pub fn report(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CompressionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", RULE)?;
        writeln!(f, "ARTC-LITE Compression Stats")?;
        writeln!(f, "{}", RULE)?;
        writeln!(f, "Total readings:     {}", self.total_readings)?;
        writeln!(f, "Original size:      {}", format_bytes(self.original_size))?;
        writeln!(f, "Compressed size:    {}", format_bytes(self.compressed_size))?;
        writeln!(f, "Compression ratio:  {:.1}x", self.ratio())?;
        writeln!(f, "Success rate:       {:.1}%", self.success_rate())?;
        write!(f, "{}", RULE)
    }
}
