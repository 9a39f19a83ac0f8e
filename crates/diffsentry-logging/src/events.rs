use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Structured log events for the check pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum LogEvent {
    CheckStarted {
        repo_path: PathBuf,
        rules_dir: PathBuf,
        diff_target: String,
    },
    DiffRetrieved {
        bytes: usize,
        preview: String,
    },
    RulesLoaded {
        files: usize,
        bytes: usize,
    },
    PromptBuilt {
        bytes: usize,
    },
    AssessmentRequested {
        model: String,
    },
    AssessmentReceived {
        verdict: String,
        duration_secs: f64,
    },
    CheckFailed {
        stage: String,
        error: String,
    },
}

impl LogEvent {
    /// Add a timestamp to serialize with the event
    fn with_timestamp(&self) -> serde_json::Value {
        let mut value = serde_json::to_value(self).unwrap_or_default();
        if let Some(obj) = value.as_object_mut() {
            obj.insert(
                "timestamp".to_string(),
                serde_json::Value::String(chrono::Utc::now().to_rfc3339()),
            );
        }
        value
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable format with colors
    #[default]
    Pretty,
    /// JSON lines format for machine consumption
    Json,
    /// Compact single-line format
    Compact,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            "compact" => Ok(LogFormat::Compact),
            _ => Err(format!("Unknown log format: {}", s)),
        }
    }
}

/// Logger for check events - handles both console output and file logging
pub struct Logger {
    format: LogFormat,
    file_writer: Option<Mutex<File>>,
}

impl Logger {
    pub fn new(format: LogFormat) -> Self {
        Self {
            format,
            file_writer: None,
        }
    }

    /// Create a logger with file output in addition to console
    pub fn with_file(format: LogFormat, log_path: &Path) -> std::io::Result<Self> {
        if let Some(parent) = log_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)?;

        Ok(Self {
            format,
            file_writer: Some(Mutex::new(file)),
        })
    }

    pub fn log(&self, event: &LogEvent) {
        // File sink is always JSON lines, timestamped
        if let Some(ref writer) = self.file_writer {
            if let Ok(mut file) = writer.lock() {
                let json = event.with_timestamp();
                let _ = writeln!(file, "{}", json);
            }
        }

        match self.format {
            LogFormat::Json => self.log_json(event),
            LogFormat::Pretty => self.log_pretty(event),
            LogFormat::Compact => self.log_compact(event),
        }
    }

    fn log_json(&self, event: &LogEvent) {
        if let Ok(json) = serde_json::to_string(event) {
            let _ = writeln!(std::io::stderr(), "{}", json);
        }
    }

    fn log_pretty(&self, event: &LogEvent) {
        let mut stderr = std::io::stderr();
        match event {
            LogEvent::CheckStarted {
                repo_path,
                rules_dir,
                diff_target,
            } => {
                let _ = writeln!(stderr);
                let _ = writeln!(stderr, "{}", "diffsentry".bold().bright_white());
                let _ = writeln!(
                    stderr,
                    "  {} {}",
                    "Repo:".dimmed(),
                    repo_path.display()
                );
                let _ = writeln!(
                    stderr,
                    "  {} {}",
                    "Rules:".dimmed(),
                    rules_dir.display()
                );
                let _ = writeln!(stderr, "  {} {}", "Range:".dimmed(), diff_target);
                let _ = writeln!(stderr);
            }
            LogEvent::DiffRetrieved { bytes, .. } => {
                if *bytes == 0 {
                    let _ = writeln!(
                        stderr,
                        "  {} {}",
                        "->".bright_green(),
                        "Diff is empty, nothing changed between revisions".yellow()
                    );
                } else {
                    let _ = writeln!(
                        stderr,
                        "  {} Diff retrieved ({} bytes)",
                        "->".bright_green(),
                        bytes
                    );
                }
            }
            LogEvent::RulesLoaded { files, bytes } => {
                let _ = writeln!(
                    stderr,
                    "  {} Rules loaded ({} files, {} bytes)",
                    "->".bright_green(),
                    files,
                    bytes
                );
            }
            LogEvent::PromptBuilt { bytes } => {
                let _ = writeln!(
                    stderr,
                    "  {} Prompt built ({} bytes)",
                    "->".bright_green(),
                    bytes
                );
            }
            LogEvent::AssessmentRequested { model } => {
                let _ = writeln!(
                    stderr,
                    "  {} Analyzing diff with {}...",
                    "->".bright_green(),
                    model.bold()
                );
            }
            LogEvent::AssessmentReceived {
                verdict,
                duration_secs,
            } => {
                let colored_verdict = match verdict.as_str() {
                    "COMPLIANT" => verdict.bright_green().bold(),
                    "NON-COMPLIANT" => verdict.bright_red().bold(),
                    _ => verdict.yellow().bold(),
                };
                let _ = writeln!(
                    stderr,
                    "  {} Verdict: {} ({:.1}s)",
                    "->".bright_green(),
                    colored_verdict,
                    duration_secs
                );
            }
            LogEvent::CheckFailed { stage, error } => {
                let _ = writeln!(
                    stderr,
                    "  {} {} failed: {}",
                    "x".bright_red().bold(),
                    stage,
                    error.bright_red()
                );
            }
        }
    }

    fn log_compact(&self, event: &LogEvent) {
        let mut stderr = std::io::stderr();
        let line = match event {
            LogEvent::CheckStarted {
                repo_path,
                diff_target,
                ..
            } => format!("check {} {}", repo_path.display(), diff_target),
            LogEvent::DiffRetrieved { bytes, .. } => format!("diff {}B", bytes),
            LogEvent::RulesLoaded { files, bytes } => format!("rules {} files {}B", files, bytes),
            LogEvent::PromptBuilt { bytes } => format!("prompt {}B", bytes),
            LogEvent::AssessmentRequested { model } => format!("asking {}", model),
            LogEvent::AssessmentReceived {
                verdict,
                duration_secs,
            } => format!("verdict {} {:.1}s", verdict, duration_secs),
            LogEvent::CheckFailed { stage, error } => format!("failed {}: {}", stage, error),
        };
        let _ = writeln!(stderr, "{}", line);
    }
}
