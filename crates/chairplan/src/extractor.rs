//! `ChairDataExtractor` builder and plan readers.
//!
//! This is the entry point for callers that hold a plan as text, a
//! reader, or a file. It only moves rows into a [`PlanScanner`]; all plan
//! semantics live in `chairplan-scan`.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use chairplan_grammar::Inventory;
use chairplan_scan::{PlanScanner, ScanConfig};

use crate::ChairplanError;

/// Builder for configuring a [`ChairDataExtractor`].
///
/// # Example
///
/// ```rust
/// use chairplan::prelude::*;
///
/// let extractor = ChairDataExtractor::builder()
///     .allow_name_delimiters(false)
///     .max_width(200)
///     .build();
/// let inventory = extractor.extract_from_str("+---+\n|k W|\n+---+").unwrap();
/// assert_eq!(inventory.get("k"), Some(&ChairCounts::new(1, 0, 0, 0)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ChairDataExtractorBuilder {
    config: ScanConfig,
}

impl ChairDataExtractorBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole scan configuration.
    pub fn config(mut self, config: ScanConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets whether `(` and `)` may surround room names.
    pub fn allow_name_delimiters(mut self, allow: bool) -> Self {
        self.config.allow_name_delimiters = allow;
        self
    }

    /// Caps the accepted row width.
    pub fn max_width(mut self, width: usize) -> Self {
        self.config.max_width = Some(width);
        self
    }

    /// Builds the extractor.
    pub fn build(self) -> ChairDataExtractor {
        ChairDataExtractor {
            config: self.config,
        }
    }
}

/// Reads a plan and returns its room inventory.
///
/// The extractor holds only configuration; every call runs a fresh scan.
#[derive(Debug, Clone, Default)]
pub struct ChairDataExtractor {
    config: ScanConfig,
}

impl ChairDataExtractor {
    /// Creates a new builder.
    pub fn builder() -> ChairDataExtractorBuilder {
        ChairDataExtractorBuilder::new()
    }

    /// Creates an extractor with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// The configuration every scan uses.
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Scans a plan held in memory. Rows are separated by `\n` or `\r\n`.
    ///
    /// # Errors
    /// [`ChairplanError::Plan`] if the plan is malformed.
    pub fn extract_from_str(&self, plan: &str) -> Result<Inventory, ChairplanError> {
        let mut scanner = PlanScanner::new(self.config.clone());
        for row in plan.lines() {
            scanner.feed_row(row)?;
        }
        Ok(scanner.finish()?)
    }

    /// Scans a plan from any buffered reader, one line at a time.
    ///
    /// # Errors
    /// [`ChairplanError::Io`] if reading fails (including invalid UTF-8),
    /// [`ChairplanError::Plan`] if the plan is malformed.
    pub fn extract_from_reader<R: BufRead>(&self, reader: R) -> Result<Inventory, ChairplanError> {
        let mut scanner = PlanScanner::new(self.config.clone());
        for row in reader.lines() {
            scanner.feed_row(&row?)?;
        }
        Ok(scanner.finish()?)
    }

    /// Scans the plan stored in a file.
    ///
    /// # Errors
    /// [`ChairplanError::Io`] if the file cannot be opened or read,
    /// [`ChairplanError::Plan`] if the plan is malformed.
    pub fn extract_from_file(&self, path: impl AsRef<Path>) -> Result<Inventory, ChairplanError> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "reading plan");
        let file = File::open(path)?;
        self.extract_from_reader(BufReader::new(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let extractor = ChairDataExtractor::builder().build();
        assert_eq!(extractor.config(), &ScanConfig::default());
    }

    #[test]
    fn test_builder_setters() {
        let extractor = ChairDataExtractor::builder()
            .allow_name_delimiters(false)
            .max_width(80)
            .build();
        assert!(!extractor.config().allow_name_delimiters);
        assert_eq!(extractor.config().max_width, Some(80));
    }

    #[test]
    fn test_builder_config_replaces_all() {
        let config = ScanConfig {
            allow_name_delimiters: false,
            max_width: Some(10),
        };
        let extractor = ChairDataExtractor::builder()
            .max_width(99)
            .config(config.clone())
            .build();
        assert_eq!(extractor.config(), &config);
    }

    #[test]
    fn test_extract_from_str_handles_crlf() {
        let inventory = ChairDataExtractor::new()
            .extract_from_str("+---+\r\n|k W|\r\n+---+\r\n")
            .unwrap();
        assert!(inventory.contains("k"));
    }
}
