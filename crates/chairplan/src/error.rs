//! Unified error type for Chairplan.

use chairplan_grammar::GrammarError;
use chairplan_scan::PlanError;

/// Top-level error that wraps all crate-specific errors.
///
/// When using the `chairplan` meta-crate, you deal with this single
/// error type instead of importing errors from each sub-crate.
/// The `#[from]` attribute on each variant auto-generates `From` impls,
/// so the `?` operator converts sub-crate errors automatically.
#[derive(Debug, thiserror::Error)]
pub enum ChairplanError {
    /// Reading the plan failed.
    #[error("could not read plan: {0}")]
    Io(#[from] std::io::Error),

    /// The plan is malformed.
    #[error(transparent)]
    Plan(#[from] PlanError),

    /// Rendering or parsing a report failed.
    #[error(transparent)]
    Report(#[from] GrammarError),
}

impl ChairplanError {
    /// The plan error inside, if this is one.
    pub fn as_plan_error(&self) -> Option<&PlanError> {
        match self {
            Self::Plan(err) => Some(err),
            _ => None,
        }
    }
}
