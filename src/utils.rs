//! This module provides small, shared helpers used by the reporting layer.

//==================================================================================
// 1. Core Utility Functions
//==================================================================================

const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

/// Formats a byte count as a human-readable string with one decimal place.
///
/// Scales by 1024 through B, KB, MB and GB; anything that is still at least
/// 1024 GB is rendered in TB without further scaling.
///
/// # Example
/// ```
/// use artc_lite::utils::format_bytes;
/// assert_eq!(format_bytes(1536), "1.5 KB");
/// ```
pub fn format_bytes(num_bytes: u64) -> String {
    let mut value = num_bytes as f64;
    for unit in UNITS {
        if value < 1024.0 {
            return format!("{:.1} {}", value, unit);
        }
        value /= 1024.0;
    }
    format!("{:.1} TB", value)
}

//==================================================================================
// 2. Unit Tests
//==================================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes_small_values() {
        assert_eq!(format_bytes(0), "0.0 B");
        assert_eq!(format_bytes(32), "32.0 B");
        assert_eq!(format_bytes(1023), "1023.0 B");
    }

    #[test]
    fn test_format_bytes_unit_boundaries() {
        assert_eq!(format_bytes(1024), "1.0 KB");
        assert_eq!(format_bytes(1024 * 1024), "1.0 MB");
        assert_eq!(format_bytes(5 * 1024 * 1024 * 1024 / 2), "2.5 GB");
        assert_eq!(format_bytes(1024u64.pow(4)), "1.0 TB");
    }

    #[test]
    fn test_format_bytes_does_not_scale_past_tb() {
        assert_eq!(format_bytes(2048 * 1024u64.pow(4)), "2048.0 TB");
    }
}
