use std::path::{Path, PathBuf};
use std::process::Stdio;
use thiserror::Error;
use tokio::process::Command;
use tracing::debug;

/// Revision range used when the caller does not supply one
pub const DEFAULT_DIFF_TARGET: &str = "HEAD~1..HEAD";

#[derive(Error, Debug)]
pub enum DiffError {
    #[error("Failed to invoke git: {0}")]
    SpawnFailed(#[from] std::io::Error),

    #[error("git diff exited with code {code}: {stderr}")]
    CommandFailed { code: i32, stderr: String },

    #[error("git produced non-UTF-8 output: {0}")]
    InvalidOutput(#[from] std::string::FromUtf8Error),
}

/// Retrieves diffs by shelling out to the git binary
pub struct DiffRetriever {
    binary_path: PathBuf,
}

impl Default for DiffRetriever {
    fn default() -> Self {
        Self::new()
    }
}

impl DiffRetriever {
    pub fn new() -> Self {
        Self {
            binary_path: PathBuf::from("git"),
        }
    }

    pub fn with_binary_path(path: PathBuf) -> Self {
        Self { binary_path: path }
    }

    pub fn binary_path(&self) -> &Path {
        &self.binary_path
    }

    /// Check if the git binary is available on the system
    pub async fn is_available(&self) -> bool {
        Command::new(&self.binary_path)
            .arg("--version")
            .output()
            .await
            .map(|o| o.status.success())
            .unwrap_or(false)
    }

    /// Run `git diff <target>` in `repo_path` and return the raw diff text.
    ///
    /// An empty string is a valid result: it means there are no changes
    /// between the two revisions.
    pub async fn retrieve(&self, repo_path: &Path, diff_target: &str) -> Result<String, DiffError> {
        let target = if diff_target.is_empty() {
            DEFAULT_DIFF_TARGET
        } else {
            diff_target
        };

        debug!(
            binary = %self.binary_path.display(),
            target,
            repo = %repo_path.display(),
            "Running git diff"
        );

        let output = Command::new(&self.binary_path)
            .arg("diff")
            .arg(target)
            .current_dir(repo_path)
            .stdin(Stdio::null())
            .output()
            .await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(DiffError::CommandFailed {
                code: output.status.code().unwrap_or(-1),
                stderr,
            });
        }

        let diff = String::from_utf8(output.stdout)?;

        debug!(diff_len = diff.len(), "Captured git diff");

        Ok(diff)
    }
}
