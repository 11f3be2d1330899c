//! Contract errors for the classifier entry points.

use thiserror::Error;

/// A caller handed a classifier something other than what it expects.
///
/// These indicate a bug in the caller, not a bad commit message: rule
/// violations are reported through [`RuleOutcome`](super::rules::RuleOutcome)
/// instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContractError {
    /// Text given where a single line was expected contains a line break.
    #[error("This function expects a line as input, got: {0:?}")]
    NotALine(String),

    /// Text given where a single character was expected.
    #[error("This function expects a character as input, got: {0:?}")]
    NotACharacter(String),
}
