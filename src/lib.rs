//! # commit-conventions
//!
//! A linter for the structural conventions of commit messages: a short title,
//! prose paragraphs in the body and footer notes at the end.
//!
//! ## Quick Start
//!
//! ```rust
//! use commit_conventions::{Linter, RuleId};
//!
//! let report = Linter::default().lint_raw("foo: this is only a title\n\nbla blah bla.");
//! assert!(!report.result(RuleId::BodyProse).unwrap().valid);
//! assert_eq!(report.exit_code(false), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod data;
pub mod lint;
pub mod utils;

pub use crate::cli::Cli;
pub use crate::config::LintConfig;
pub use crate::data::check::{LintReport, LintSummary, RuleResult, Severity};
pub use crate::lint::{CommitMessage, Linter, RuleId, RuleOutcome, RuleParams};

/// The current version of commit-conventions.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
