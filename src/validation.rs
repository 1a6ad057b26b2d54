//! Input validation for readings entering the codec.
//!
//! Every reading must convert to a finite `f32`. Validation is all-or-nothing:
//! the first bad element aborts the whole call and nothing is produced.
//! An empty input is valid.

use ndarray::ArrayView1;
use num_traits::ToPrimitive;

use crate::error::ArtcError;

/// Converts any numeric slice into finite `f32` readings.
pub fn validate_readings<T: ToPrimitive>(data: &[T]) -> Result<Vec<f32>, ArtcError> {
    convert_all(data.iter())
}

/// Array-like form of [`validate_readings`] for `ndarray` callers.
pub fn validate_array<T: ToPrimitive>(data: ArrayView1<'_, T>) -> Result<Vec<f32>, ArtcError> {
    convert_all(data.iter())
}

/// Checks that readings already in `f32` form are all finite.
pub fn ensure_finite(readings: &[f32]) -> Result<(), ArtcError> {
    match readings.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(non_finite(index, readings[index])),
        None => Ok(()),
    }
}

/// Checks a single streamed reading.
pub fn ensure_finite_reading(value: f32) -> Result<(), ArtcError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ArtcError::ValidationError(format!(
            "Reading {} is not finite",
            value
        )))
    }
}

fn convert_all<'a, T, I>(iter: I) -> Result<Vec<f32>, ArtcError>
where
    T: ToPrimitive + 'a,
    I: ExactSizeIterator<Item = &'a T>,
{
    let mut out = Vec::with_capacity(iter.len());
    for (index, item) in iter.enumerate() {
        let value = item.to_f32().ok_or_else(|| {
            ArtcError::ValidationError(format!(
                "Reading at index {} cannot be represented as f32",
                index
            ))
        })?;
        if !value.is_finite() {
            return Err(non_finite(index, value));
        }
        out.push(value);
    }
    Ok(out)
}

fn non_finite(index: usize, value: f32) -> ArtcError {
    ArtcError::ValidationError(format!(
        "Reading at index {} is not finite ({})",
        index, value
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_validate_readings_converts_types() {
        assert_eq!(
            validate_readings(&[1i32, -2, 300]).unwrap(),
            vec![1.0, -2.0, 300.0]
        );
        assert_eq!(
            validate_readings(&[20.5f64, 21.25]).unwrap(),
            vec![20.5, 21.25]
        );
    }

    #[test]
    fn test_empty_input_is_valid() {
        let empty: [f64; 0] = [];
        assert!(validate_readings(&empty).unwrap().is_empty());
        assert!(ensure_finite(&[]).is_ok());
    }

    #[test]
    fn test_non_finite_values_are_rejected() {
        let err = validate_readings(&[1.0f64, f64::NAN, 3.0]).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("index 1"));

        assert!(validate_readings(&[f64::INFINITY]).is_err());
        assert!(validate_readings(&[f64::NEG_INFINITY]).is_err());
        // Finite in f64 but overflows f32.
        assert!(validate_readings(&[1e300f64]).is_err());

        assert!(ensure_finite(&[0.0, 1.0, f32::NAN]).unwrap_err().is_validation());
        assert!(ensure_finite_reading(f32::INFINITY).unwrap_err().is_validation());
        assert!(ensure_finite_reading(-3.5).is_ok());
    }

    #[test]
    fn test_validate_array() {
        let data = array![0.0f64, 0.5, 1.0];
        assert_eq!(validate_array(data.view()).unwrap(), vec![0.0, 0.5, 1.0]);

        let bad = array![0.0f32, f32::NAN];
        assert!(validate_array(bad.view()).unwrap_err().is_validation());
    }
}
