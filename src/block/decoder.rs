//! Block decoder: the pure inverse of the encoder.

use crate::block::record::BlockRecord;
use crate::error::ArtcError;
use crate::kernels::linear_fit;

/// Reconstructs `length` readings from a record.
///
/// `length` is the length of the block that was encoded. For `Raw` records it
/// must equal the stored value count; a mismatch means the caller paired the
/// record with the wrong block and is reported as `LengthMismatch`.
pub fn decode(record: &BlockRecord, length: usize) -> Result<Vec<f32>, ArtcError> {
    if let BlockRecord::Raw { values } = record {
        if values.len() != length {
            return Err(ArtcError::LengthMismatch {
                expected: length,
                actual: values.len(),
            });
        }
    }
    let mut out = Vec::with_capacity(length);
    decode_into(record, length, &mut out);
    Ok(out)
}

/// Decodes an ordered record sequence in which every `Formula` spans exactly
/// `block_size` readings, concatenating the results.
pub fn decode_sequence(records: &[BlockRecord], block_size: usize) -> Vec<f32> {
    let capacity = records
        .iter()
        .map(|r| r.len_hint().unwrap_or(block_size))
        .sum();
    let mut out = Vec::with_capacity(capacity);
    for record in records {
        decode_into(record, block_size, &mut out);
    }
    out
}

/// Appends the reconstruction of `record` to `out`. `formula_len` is only
/// consulted for `Formula` records; `Raw` records are self-describing.
pub(crate) fn decode_into(record: &BlockRecord, formula_len: usize, out: &mut Vec<f32>) {
    match record {
        BlockRecord::Formula { slope, intercept } => {
            out.extend((0..formula_len).map(|i| linear_fit::predict(*slope, *intercept, i)));
        }
        BlockRecord::Raw { values } => out.extend_from_slice(values),
    }
}
