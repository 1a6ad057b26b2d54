//! This module contains the pure, stateless kernel for fitting an affine model
//! to one block of readings.
//!
//! The independent variable is the reading's position inside the block
//! (`0..n-1`), not a timestamp. Sums are accumulated in `f64` and the final
//! parameters are narrowed to `f32`, which is the precision they are stored
//! and replayed at. This module is PURE RUST and panic-free.

//==================================================================================
// 1. Public Types
//==================================================================================

/// Slope and intercept of the least-squares line `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f32,
    pub intercept: f32,
}

//==================================================================================
// 2. Core Logic
//==================================================================================

/// Fits an ordinary least-squares line through `(i, block[i])`.
///
/// A single reading yields a flat line through it; an empty block yields the
/// zero line.
pub fn fit(block: &[f32]) -> LinearFit {
    match block.len() {
        0 => LinearFit {
            slope: 0.0,
            intercept: 0.0,
        },
        1 => LinearFit {
            slope: 0.0,
            intercept: block[0],
        },
        len => {
            let n = len as f64;
            let (mut sum_x, mut sum_y, mut sum_xy, mut sum_xx) = (0.0f64, 0.0f64, 0.0f64, 0.0f64);
            for (i, &y) in block.iter().enumerate() {
                let x = i as f64;
                let y = y as f64;
                sum_x += x;
                sum_y += y;
                sum_xy += x * y;
                sum_xx += x * x;
            }

            // Positions are distinct, so the denominator is positive for n >= 2.
            let denom = n * sum_xx - sum_x * sum_x;
            let slope = (n * sum_xy - sum_x * sum_y) / denom;
            let intercept = (sum_y - slope * sum_x) / n;

            LinearFit {
                slope: slope as f32,
                intercept: intercept as f32,
            }
        }
    }
}

/// Evaluates the line at `position`. The decoder replays exactly this
/// expression, so the encoder's error check matches what callers get back.
#[inline]
pub fn predict(slope: f32, intercept: f32, position: usize) -> f32 {
    slope * position as f32 + intercept
}

/// Worst-case absolute reconstruction error of `(slope, intercept)` over `block`.
///
/// Returns `f32::INFINITY` if any reconstruction is not a finite number, so the
/// caller's threshold comparison always rejects such a model.
pub fn max_abs_error(block: &[f32], slope: f32, intercept: f32) -> f32 {
    let mut worst = 0.0f32;
    for (i, &value) in block.iter().enumerate() {
        let err = (value - predict(slope, intercept, i)).abs();
        if !err.is_finite() {
            return f32::INFINITY;
        }
        if err > worst {
            worst = err;
        }
    }
    worst
}

//==================================================================================
// 3. Unit Tests
//==================================================================================
