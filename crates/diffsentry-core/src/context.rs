use std::path::PathBuf;
use std::time::{Duration, Instant};

use diffsentry_git::DEFAULT_DIFF_TARGET;

/// Inputs for a single check run
#[derive(Debug, Clone)]
pub struct CheckContext {
    /// Path to the git repository
    pub repo_path: PathBuf,
    /// Directory containing the rule documents
    pub rules_dir: PathBuf,
    /// Revision range passed through to git
    pub diff_target: String,
    /// When the check started
    started_at: Instant,
}

impl CheckContext {
    pub fn new(repo_path: PathBuf, rules_dir: PathBuf) -> Self {
        Self {
            repo_path,
            rules_dir,
            diff_target: DEFAULT_DIFF_TARGET.to_string(),
            started_at: Instant::now(),
        }
    }

    pub fn with_diff_target(mut self, target: impl Into<String>) -> Self {
        self.diff_target = target.into();
        self
    }

    pub fn total_duration(&self) -> Duration {
        self.started_at.elapsed()
    }
}
