//! The closed, two-variant block record produced by the encoder.

use serde::{Deserialize, Serialize};

use crate::format::{BYTES_PER_READING, FORMULA_BLOCK_BYTES};

/// One encoded block. Records own their data and are immutable once produced.
///
/// A `Formula` does not carry its length; whoever decodes it must know how many
/// readings it stands for (for session output that is always the block size).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BlockRecord {
    /// Reading at position `i` is reconstructed as `slope * i + intercept`.
    Formula { slope: f32, intercept: f32 },
    /// Readings stored verbatim.
    Raw { values: Vec<f32> },
}

impl BlockRecord {
    pub fn is_formula(&self) -> bool {
        matches!(self, BlockRecord::Formula { .. })
    }

    pub fn is_raw(&self) -> bool {
        matches!(self, BlockRecord::Raw { .. })
    }

    /// Number of readings the record holds, if it is self-describing.
    pub fn len_hint(&self) -> Option<usize> {
        match self {
            BlockRecord::Formula { .. } => None,
            BlockRecord::Raw { values } => Some(values.len()),
        }
    }

    /// Storage cost in bytes as counted by the compression statistics.
    pub fn encoded_size(&self) -> u64 {
        match self {
            BlockRecord::Formula { .. } => FORMULA_BLOCK_BYTES,
            BlockRecord::Raw { values } => values.len() as u64 * BYTES_PER_READING,
        }
    }
}
