// In: src/config.rs

//! The single source of truth for all artc-lite codec configuration.
//!
//! An `ArtcConfig` is created once at the application boundary (in code, or
//! from a JSON document) and handed to a `Session`, which keeps it fixed for
//! its whole lifetime. Every constructor path goes through `validate()`.

use serde::{Deserialize, Serialize};

use crate::error::ArtcError;

//==================================================================================
// I. Defaults
//==================================================================================

/// Readings per block when the caller does not choose one.
pub const DEFAULT_BLOCK_SIZE: usize = 8;

/// Maximum absolute reconstruction error per reading when the caller does not
/// choose one. Sized for typical environmental sensors (e.g. 0.1 °C).
pub const DEFAULT_TOLERANCE: f32 = 0.1;

//==================================================================================
// II. The Unified ArtcConfig
//==================================================================================

/// Codec configuration: block length and per-reading error budget.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct ArtcConfig {
    /// Number of consecutive readings fitted as one unit. Must be positive.
    #[serde(default = "default_block_size")]
    pub block_size: usize,

    /// Largest allowed `|reading - reconstruction|` for a block to be stored
    /// as a formula. Must be finite and non-negative.
    #[serde(default = "default_tolerance")]
    pub tolerance: f32,
}

impl Default for ArtcConfig {
    fn default() -> Self {
        Self {
            block_size: default_block_size(),
            tolerance: default_tolerance(),
        }
    }
}

impl ArtcConfig {
    /// Builds and validates a configuration.
    pub fn new(block_size: usize, tolerance: f32) -> Result<Self, ArtcError> {
        let config = Self {
            block_size,
            tolerance,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks the construction-time invariants.
    pub fn validate(&self) -> Result<(), ArtcError> {
        if self.block_size == 0 {
            return Err(ArtcError::InvalidConfig(
                "block_size must be greater than zero".into(),
            ));
        }
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(ArtcError::InvalidConfig(format!(
                "tolerance must be a finite, non-negative number, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }

    /// Parses a JSON document such as `{"block_size": 16, "tolerance": 0.05}`.
    /// Missing fields fall back to the defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ArtcError> {
        let config: ArtcConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

/// Helper for `serde` to provide a default for `block_size`.
fn default_block_size() -> usize {
    DEFAULT_BLOCK_SIZE
}

/// Helper for `serde` to provide a default for `tolerance`.
fn default_tolerance() -> f32 {
    DEFAULT_TOLERANCE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ArtcConfig::default();
        assert_eq!(config.block_size, 8);
        assert_eq!(config.tolerance, 0.1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(matches!(
            ArtcConfig::new(0, 0.1),
            Err(ArtcError::InvalidConfig(_))
        ));
        assert!(matches!(
            ArtcConfig::new(8, -0.5),
            Err(ArtcError::InvalidConfig(_))
        ));
        assert!(matches!(
            ArtcConfig::new(8, f32::NAN),
            Err(ArtcError::InvalidConfig(_))
        ));
        assert!(matches!(
            ArtcConfig::new(8, f32::INFINITY),
            Err(ArtcError::InvalidConfig(_))
        ));
        // Zero tolerance is legal: only exactly-linear blocks become formulas.
        assert!(ArtcConfig::new(8, 0.0).is_ok());
    }

    #[test]
    fn test_from_json_with_partial_fields() {
        let config = ArtcConfig::from_json_str(r#"{"tolerance": 0.25}"#).unwrap();
        assert_eq!(config.block_size, DEFAULT_BLOCK_SIZE);
        assert_eq!(config.tolerance, 0.25);

        let config = ArtcConfig::from_json_str(r#"{"block_size": 16}"#).unwrap();
        assert_eq!(config.block_size, 16);
        assert_eq!(config.tolerance, DEFAULT_TOLERANCE);
    }

    #[test]
    fn test_from_json_errors() {
        assert!(matches!(
            ArtcConfig::from_json_str("not json"),
            Err(ArtcError::SerdeJson(_))
        ));
        assert!(matches!(
            ArtcConfig::from_json_str(r#"{"block_size": 0}"#),
            Err(ArtcError::InvalidConfig(_))
        ));
    }
}
