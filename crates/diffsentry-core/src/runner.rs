use std::sync::Arc;

use tracing::{debug, info};

use diffsentry_git::DiffRetriever;
use diffsentry_llm::{AssessmentClient, AssessmentPrompts, Verdict};
use diffsentry_logging::{LogEvent, Logger};
use diffsentry_rules::RuleLoader;

use crate::{CheckContext, CheckError, CheckReport};

const PREVIEW_CHARS: usize = 200;

/// Runs the check pipeline: diff, rules, prompt, assessment
pub struct CheckRunner<'a> {
    retriever: DiffRetriever,
    loader: RuleLoader,
    client: &'a AssessmentClient,
    logger: Arc<Logger>,
}

impl<'a> CheckRunner<'a> {
    pub fn new(
        retriever: DiffRetriever,
        loader: RuleLoader,
        client: &'a AssessmentClient,
        logger: Arc<Logger>,
    ) -> Self {
        Self {
            retriever,
            loader,
            client,
            logger,
        }
    }

    /// Run the pipeline to completion. Any stage failure aborts the run;
    /// in particular no network call is made once an earlier stage has
    /// failed.
    pub async fn run(&self, context: CheckContext) -> Result<CheckReport, CheckError> {
        self.logger.log(&LogEvent::CheckStarted {
            repo_path: context.repo_path.clone(),
            rules_dir: context.rules_dir.clone(),
            diff_target: context.diff_target.clone(),
        });

        debug!(target = %context.diff_target, "Retrieving diff");
        let diff = self
            .retriever
            .retrieve(&context.repo_path, &context.diff_target)
            .await?;

        if diff.is_empty() {
            // Not an error: the run continues and the model sees an empty diff
            info!("Diff is empty, nothing changed between revisions");
        }

        self.logger.log(&LogEvent::DiffRetrieved {
            bytes: diff.len(),
            preview: preview(&diff),
        });

        let corpus = self.loader.load(&context.rules_dir)?;

        self.logger.log(&LogEvent::RulesLoaded {
            files: corpus.files.len(),
            bytes: corpus.text.len(),
        });

        let prompt = AssessmentPrompts::build_assessment_prompt(&diff, &corpus.text);

        self.logger.log(&LogEvent::PromptBuilt {
            bytes: prompt.len(),
        });

        self.logger.log(&LogEvent::AssessmentRequested {
            model: self.client.model().to_string(),
        });

        let assessment = self.client.assess(&prompt).await?;
        let verdict = Verdict::parse(&assessment);

        let duration_secs = context.total_duration().as_secs_f64();
        self.logger.log(&LogEvent::AssessmentReceived {
            verdict: verdict.to_string(),
            duration_secs,
        });

        Ok(CheckReport {
            assessment,
            verdict,
            model: self.client.model().to_string(),
            diff_bytes: diff.len(),
            rule_files: corpus.files.len(),
            duration_secs,
        })
    }
}

fn preview(text: &str) -> String {
    text.chars().take(PREVIEW_CHARS).collect()
}
