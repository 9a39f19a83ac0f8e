use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum RulesError {
    #[error("Failed to read rules directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read rule file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("No .{extension} files found in rules directory {path}")]
    NoRulesFound { path: PathBuf, extension: String },
}

/// The concatenated rule text and the files that contributed to it
#[derive(Debug, Clone)]
pub struct RuleCorpus {
    /// All rule documents joined with blank lines, trimmed
    pub text: String,
    /// Contributing files, in directory listing order
    pub files: Vec<PathBuf>,
}

/// Loads rule documents from a directory
pub struct RuleLoader {
    extension: String,
}

impl Default for RuleLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleLoader {
    pub fn new() -> Self {
        Self {
            extension: "md".to_string(),
        }
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Read every matching file directly under `dir` and concatenate the
    /// contents, each followed by a blank line. Subdirectories are not
    /// descended into. The first unreadable file aborts the whole load.
    pub fn load(&self, dir: &Path) -> Result<RuleCorpus, RulesError> {
        let entries = fs::read_dir(dir).map_err(|e| RulesError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let mut text = String::new();
        let mut files = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|e| RulesError::DirectoryRead {
                path: dir.to_path_buf(),
                source: e,
            })?;

            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            match path.extension() {
                Some(ext) if ext == self.extension.as_str() => {}
                _ => continue,
            }

            let content = fs::read_to_string(&path).map_err(|e| RulesError::FileRead {
                path: path.clone(),
                source: e,
            })?;

            text.push_str(&content);
            text.push_str("\n\n");
            files.push(path);
        }

        if files.is_empty() {
            return Err(RulesError::NoRulesFound {
                path: dir.to_path_buf(),
                extension: self.extension.clone(),
            });
        }

        let text = text.trim().to_string();

        debug!(
            files = files.len(),
            corpus_len = text.len(),
            "Loaded rule documents"
        );

        Ok(RuleCorpus { text, files })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_single_file_is_trimmed() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("style.md"), "Use tabs.").unwrap();

        let corpus = RuleLoader::new().load(dir.path()).unwrap();

        assert_eq!(corpus.text, "Use tabs.");
        assert_eq!(corpus.files.len(), 1);
    }

    #[test]
    fn test_concatenation_length_arithmetic() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.md"), "alpha").unwrap();
        fs::write(dir.path().join("b.md"), "beta").unwrap();
        fs::write(dir.path().join("c.md"), "gamma").unwrap();

        let corpus = RuleLoader::new().load(dir.path()).unwrap();

        // sum of contents + 2 per separator, minus the trimmed trailing one
        assert_eq!(corpus.text.len(), 5 + 4 + 5 + 2 * 3 - 2);
        assert!(corpus.text.contains("alpha"));
        assert!(corpus.text.contains("beta"));
        assert!(corpus.text.contains("gamma"));
        assert!(corpus.text.contains("\n\n"));
    }

    #[test]
    fn test_non_matching_extensions_are_skipped() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("rules.md"), "rule").unwrap();
        fs::write(dir.path().join("notes.txt"), "not a rule").unwrap();
        fs::write(dir.path().join("README"), "not a rule either").unwrap();

        let corpus = RuleLoader::new().load(dir.path()).unwrap();

        assert_eq!(corpus.text, "rule");
        assert_eq!(corpus.files.len(), 1);
    }

    #[test]
    fn test_subdirectories_are_not_descended() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("top.md"), "top").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("deep.md"), "deep").unwrap();

        let corpus = RuleLoader::new().load(dir.path()).unwrap();

        assert_eq!(corpus.text, "top");
    }

    #[test]
    fn test_no_matching_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("notes.txt"), "not a rule").unwrap();

        let err = RuleLoader::new().load(dir.path()).unwrap_err();

        assert!(matches!(err, RulesError::NoRulesFound { .. }));
    }

    #[test]
    fn test_empty_directory() {
        let dir = TempDir::new().unwrap();

        let err = RuleLoader::new().load(dir.path()).unwrap_err();

        assert!(matches!(err, RulesError::NoRulesFound { .. }));
    }

    #[test]
    fn test_unreadable_file_aborts_the_load() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("good.md"), "fine").unwrap();
        // Invalid UTF-8 makes read_to_string fail
        fs::write(dir.path().join("bad.md"), [0xff, 0xfe, 0x00]).unwrap();

        let err = RuleLoader::new().load(dir.path()).unwrap_err();

        assert!(matches!(err, RulesError::FileRead { .. }));
    }

    #[test]
    fn test_missing_directory() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");

        let err = RuleLoader::new().load(&missing).unwrap_err();

        assert!(matches!(err, RulesError::DirectoryRead { .. }));
    }

    #[test]
    fn test_custom_extension() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("style.adoc"), "asciidoc rule").unwrap();
        fs::write(dir.path().join("style.md"), "markdown rule").unwrap();

        let corpus = RuleLoader::new()
            .with_extension("adoc")
            .load(dir.path())
            .unwrap();

        assert_eq!(corpus.text, "asciidoc rule");
    }
}
