/// Prompt templates for compliance assessment
pub struct AssessmentPrompts;

impl AssessmentPrompts {
    /// Build the assessment prompt from the diff and the rule corpus.
    ///
    /// Both inputs are embedded verbatim; there is no escaping or size
    /// limiting. Empty strings are legal.
    pub fn build_assessment_prompt(diff_text: &str, rules_text: &str) -> String {
        format!(
            r#"Review the following git diff based on the provided coding/style rules.

RULES:
====================
{rules}
====================

GIT DIFF:
====================
{diff}
====================

Based on the rules, does the git diff comply? Provide a brief explanation for your assessment. Start your response with either "COMPLIANT" or "NON-COMPLIANT"."#,
            rules = rules_text,
            diff = diff_text,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_is_deterministic() {
        let a = AssessmentPrompts::build_assessment_prompt("+foo\n", "Use tabs.");
        let b = AssessmentPrompts::build_assessment_prompt("+foo\n", "Use tabs.");
        assert_eq!(a, b);
    }

    #[test]
    fn test_prompt_embeds_inputs_verbatim() {
        let diff = "diff --git a/x b/x\n+foo\n";
        let rules = "Use tabs.\n\nNo trailing whitespace.";
        let prompt = AssessmentPrompts::build_assessment_prompt(diff, rules);

        assert!(prompt.contains(diff));
        assert!(prompt.contains(rules));
    }

    #[test]
    fn test_prompt_contains_verdict_instruction() {
        let prompt = AssessmentPrompts::build_assessment_prompt("", "");
        assert!(prompt
            .contains(r#"Start your response with either "COMPLIANT" or "NON-COMPLIANT"."#));
    }

    #[test]
    fn test_prompt_accepts_empty_inputs() {
        let prompt = AssessmentPrompts::build_assessment_prompt("", "");
        assert!(prompt.contains("RULES:"));
        assert!(prompt.contains("GIT DIFF:"));
    }
}
