//! Scan configuration.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ScanConfig
// ---------------------------------------------------------------------------

/// Configuration for one scan.
///
/// The defaults accept every plan the grammar describes; the knobs only
/// make the scan stricter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Whether `(` and `)` around room names are legal characters.
    /// When `false` they fail the row as invalid characters.
    pub allow_name_delimiters: bool,

    /// Upper bound on the row width. `None` means unbounded.
    pub max_width: Option<usize>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            allow_name_delimiters: true,
            max_width: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_config_default() {
        let config = ScanConfig::default();
        assert!(config.allow_name_delimiters);
        assert_eq!(config.max_width, None);
    }

    #[test]
    fn test_scan_config_partial_json_uses_defaults() {
        let config: ScanConfig =
            serde_json::from_str(r#"{ "max_width": 120 }"#).unwrap();
        assert!(config.allow_name_delimiters);
        assert_eq!(config.max_width, Some(120));
    }
}
