//! # diffsentry-git
//!
//! Git diff retrieval for diffsentry.
//!
//! This crate shells out to the `git` binary to obtain the unified diff
//! between two revisions. Validation of the repository itself is left to
//! git; anything it writes to stderr on failure is carried back in the
//! error for diagnostics.
//!
//! ## Key Types
//!
//! - [`DiffRetriever`] - Runs `git diff` and captures its output
//! - [`DiffError`] - Failure modes of a retrieval
//!
//! ## Usage
//!
//! ```rust,ignore
//! use diffsentry_git::DiffRetriever;
//! use std::path::Path;
//!
//! let retriever = DiffRetriever::new();
//! let diff = retriever.retrieve(Path::new("."), "HEAD~1..HEAD").await?;
//! ```

mod diff;

pub use diff::{DiffError, DiffRetriever, DEFAULT_DIFF_TARGET};
