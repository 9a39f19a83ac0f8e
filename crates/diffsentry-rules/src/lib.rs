//! # diffsentry-rules
//!
//! Rule document loading for diffsentry.
//!
//! Style and policy rules live as markdown files in a single directory.
//! The loader reads every matching file (non-recursive) and concatenates
//! their contents into one corpus that gets embedded in the prompt.
//!
//! ## Key Types
//!
//! - [`RuleLoader`] - Scans a directory and builds the corpus
//! - [`RuleCorpus`] - Concatenated rule text plus contributing files
//! - [`RulesError`] - Failure modes of a load

mod loader;

pub use loader::{RuleCorpus, RuleLoader, RulesError};
