//! Block encoder: fit, verify, and fall back.

use crate::block::record::BlockRecord;
use crate::kernels::linear_fit;

/// Encodes one block of readings against a per-reading error budget.
///
/// The least-squares line is kept only if replaying it reproduces every
/// reading within `tolerance`; otherwise the block is stored verbatim. This
/// never fails.
pub fn encode(block: &[f32], tolerance: f32) -> BlockRecord {
    encode_with_error(block, tolerance).0
}

/// Same as [`encode`], also returning the worst-case error of the fitted line
/// (whether or not it was kept).
pub(crate) fn encode_with_error(block: &[f32], tolerance: f32) -> (BlockRecord, f32) {
    if block.is_empty() {
        return (encode_raw(block), 0.0);
    }

    let fit = linear_fit::fit(block);
    let max_error = linear_fit::max_abs_error(block, fit.slope, fit.intercept);

    // `max_abs_error` maps any non-finite reconstruction to infinity, so this
    // comparison also rejects overflowed parameters.
    if max_error <= tolerance {
        (
            BlockRecord::Formula {
                slope: fit.slope,
                intercept: fit.intercept,
            },
            max_error,
        )
    } else {
        (encode_raw(block), max_error)
    }
}

/// Stores a block verbatim without attempting a fit.
pub(crate) fn encode_raw(block: &[f32]) -> BlockRecord {
    BlockRecord::Raw {
        values: block.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_block_becomes_formula() {
        let block: Vec<f32> = (0..8).map(|i| 20.0 + i as f32).collect();
        match encode(&block, 0.1) {
            BlockRecord::Formula { slope, intercept } => {
                assert!((slope - 1.0).abs() < 1e-6);
                assert!((intercept - 20.0).abs() < 1e-6);
            }
            other => panic!("Expected formula, got {:?}", other),
        }
    }

    #[test]
    fn test_noisy_block_falls_back_to_raw() {
        let block = [0.5f32, -1.2, 2.3, -0.7, 1.9, -2.4, 0.1, 1.3];
        assert_eq!(
            encode(&block, 0.001),
            BlockRecord::Raw {
                values: block.to_vec()
            }
        );
    }

    #[test]
    fn test_tolerance_is_inclusive() {
        // Fit through [0, 1, 0] is the flat line 1/3; worst error is 2/3.
        let block = [0.0f32, 1.0, 0.0];
        let (_, err) = encode_with_error(&block, 0.0);
        assert!(encode(&block, err).is_formula());
        assert!(encode(&block, err * 0.99).is_raw());
    }

    #[test]
    fn test_zero_tolerance_accepts_exact_lines_only() {
        assert!(encode(&[1.0, 3.0, 5.0, 7.0], 0.0).is_formula());
        assert!(encode(&[1.0, 3.0, 5.0, 7.5], 0.0).is_raw());
    }

    #[test]
    fn test_single_and_empty_blocks() {
        assert_eq!(
            encode(&[7.0], 0.0),
            BlockRecord::Formula {
                slope: 0.0,
                intercept: 7.0
            }
        );
        assert_eq!(encode(&[], 0.1), BlockRecord::Raw { values: vec![] });
    }

    #[test]
    fn test_huge_values_do_not_produce_invalid_formula() {
        let block = [f32::MAX, -f32::MAX, f32::MAX, -f32::MAX];
        assert!(encode(&block, 1.0).is_raw());
    }
}
