mod ui;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use diffsentry_core::{CheckContext, CheckRunner};
use diffsentry_git::{DiffRetriever, DEFAULT_DIFF_TARGET};
use diffsentry_llm::{AssessmentClient, GeminiBackend, DEFAULT_MODEL};
use diffsentry_logging::{init_tracing, LogEvent, LogFormat, Logger};
use diffsentry_rules::RuleLoader;

const API_KEY_ENV: &str = "GEMINI_API_KEY";

#[derive(Parser, Debug)]
#[command(
    name = "diffsentry",
    about = "Checks git diffs against style rules with a hosted model",
    version,
    author
)]
struct Cli {
    /// Path to the git repository
    #[arg(short = 'p', long, default_value = ".")]
    repo_path: PathBuf,

    /// Directory containing markdown rule files
    #[arg(short, long)]
    rules_dir: PathBuf,

    /// Revision range to diff (e.g. HEAD~1..HEAD, main..branch)
    #[arg(short = 't', long, default_value = DEFAULT_DIFF_TARGET)]
    diff_target: String,

    /// Model to use for the assessment
    #[arg(short, long)]
    model: Option<String>,

    /// Log output format
    #[arg(long, value_enum, default_value = "pretty")]
    log_format: LogFormatChoice,

    /// Path to the JSON-lines log file
    #[arg(long, default_value = "diffsentry.log")]
    log_file: PathBuf,

    /// Disable the log file
    #[arg(long)]
    no_log_file: bool,

    /// Output the final report as JSON
    #[arg(long)]
    json_output: bool,

    /// Dry run: show what would happen without running git or calling the model
    #[arg(long)]
    dry_run: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormatChoice {
    Pretty,
    Json,
    Compact,
}

impl From<LogFormatChoice> for LogFormat {
    fn from(choice: LogFormatChoice) -> Self {
        match choice {
            LogFormatChoice::Pretty => LogFormat::Pretty,
            LogFormatChoice::Json => LogFormat::Json,
            LogFormatChoice::Compact => LogFormat::Compact,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_format: LogFormat = cli.log_format.into();
    init_tracing("info", log_format);

    let model = cli
        .model
        .clone()
        .unwrap_or_else(|| DEFAULT_MODEL.to_string());

    if cli.dry_run {
        ui::print_dry_run(&cli.repo_path, &cli.rules_dir, &cli.diff_target, &model);
        return Ok(());
    }

    let api_key = std::env::var(API_KEY_ENV)
        .ok()
        .filter(|key| !key.is_empty())
        .with_context(|| format!("{} environment variable not set", API_KEY_ENV))?;

    let logger = if cli.no_log_file {
        Logger::new(log_format)
    } else {
        Logger::with_file(log_format, &cli.log_file).with_context(|| {
            format!("Failed to open log file {}", cli.log_file.display())
        })?
    };
    let logger = Arc::new(logger);

    let retriever = DiffRetriever::new();
    if !retriever.is_available().await {
        anyhow::bail!("git is not available. Make sure it's installed and in PATH.");
    }

    let backend = GeminiBackend::with_model(api_key, model)?;
    let client = AssessmentClient::new(Box::new(backend));

    let context = CheckContext::new(cli.repo_path.clone(), cli.rules_dir.clone())
        .with_diff_target(cli.diff_target.clone());

    let runner = CheckRunner::new(retriever, RuleLoader::new(), &client, logger.clone());

    let report = match runner.run(context).await {
        Ok(report) => report,
        Err(e) => {
            logger.log(&LogEvent::CheckFailed {
                stage: e.stage().to_string(),
                error: e.to_string(),
            });
            return Err(e.into());
        }
    };

    if cli.json_output {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        ui::print_report(&report);
    }

    Ok(())
}
