use std::path::Path;

use colored::Colorize;

use diffsentry_core::CheckReport;
use diffsentry_llm::Verdict;

/// Print the final assessment to stdout. Everything else in the program
/// writes to stderr; stdout carries only this.
pub fn print_report(report: &CheckReport) {
    println!();
    println!("{}", "--- Assessment ---".bold());
    println!("{}", report.assessment.trim_end());
    println!("{}", "------------------".bold());

    let verdict = match report.verdict {
        Verdict::Compliant => report.verdict.to_string().bright_green().bold(),
        Verdict::NonCompliant => report.verdict.to_string().bright_red().bold(),
        Verdict::Unspecified => report.verdict.to_string().yellow().bold(),
    };
    println!("Verdict: {}", verdict);
}

/// Print the dry-run plan to stderr and do nothing else.
pub fn print_dry_run(repo_path: &Path, rules_dir: &Path, diff_target: &str, model: &str) {
    eprintln!("=== Dry Run ===");
    eprintln!("Repo: {}", repo_path.display());
    eprintln!("Rules: {}", rules_dir.display());
    eprintln!("Range: {}", diff_target);
    eprintln!("Model: {}", model);
    eprintln!("No diff retrieved, no request sent.");
}
