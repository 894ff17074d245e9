//! Line validation: character legality and fixed row width.

use chairplan_grammar::{classify, Symbol};

use crate::{PlanError, ScanConfig};

/// One validated plan row: its characters and their classes, column by
/// column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    chars: Vec<char>,
    symbols: Vec<Symbol>,
}

impl Row {
    /// Number of columns.
    pub fn width(&self) -> usize {
        self.chars.len()
    }

    /// The raw characters.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// The class of each character.
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }
}

/// Checks one row and classifies its characters.
///
/// `expected_width` is the width established by the first row, or `None`
/// while reading the first row itself. `line` is 1-based and only used
/// for error context.
///
/// # Errors
/// - [`PlanError::InvalidCharacter`] for a character outside the alphabet
///   (or a name delimiter when the config forbids them)
/// - [`PlanError::RowWidthMismatch`] if the width differs from
///   `expected_width` or exceeds `config.max_width`
pub fn validate_row(
    line: usize,
    text: &str,
    expected_width: Option<usize>,
    config: &ScanConfig,
) -> Result<Row, PlanError> {
    let chars: Vec<char> = text.chars().collect();
    let mut symbols = Vec::with_capacity(chars.len());

    for (column, &c) in chars.iter().enumerate() {
        let symbol = match classify(c) {
            Some(Symbol::NameDelimiter) if !config.allow_name_delimiters => None,
            other => other,
        };
        match symbol {
            Some(symbol) => symbols.push(symbol),
            None => {
                return Err(PlanError::InvalidCharacter {
                    line,
                    column,
                    found: c,
                    text: text.to_string(),
                });
            }
        }
    }

    if let Some(max) = config.max_width {
        if chars.len() > max {
            return Err(PlanError::RowWidthMismatch {
                line,
                expected: max,
                actual: chars.len(),
            });
        }
    }
    if let Some(expected) = expected_width {
        if chars.len() != expected {
            return Err(PlanError::RowWidthMismatch {
                line,
                expected,
                actual: chars.len(),
            });
        }
    }

    Ok(Row { chars, symbols })
}
