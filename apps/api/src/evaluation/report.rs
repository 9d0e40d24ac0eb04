//! Result rendering: turns a sanitized model reply into display panels.
//!
//! Parsing is all-or-nothing: either every panel is built from the parsed
//! object, or the failure panel is shown with the raw reply for diagnostics.

use tracing::warn;

use crate::evaluation::models::{EvaluationOutcome, EvaluationResult};

/// Panels shown for a successfully parsed reply.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultPanels {
    pub match_assessment: String,
    /// Empty means the keyword block is omitted.
    pub missing_keywords: Vec<String>,
    /// Already numbered, e.g. "1. Add metrics".
    pub suggestions: Vec<String>,
}

/// Panel shown when the reply could not be parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct FailurePanel {
    pub raw_response: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RenderedResult {
    Report(ResultPanels),
    Failure(FailurePanel),
}

/// Parses the sanitized reply. `raw_response` is kept for the failure case.
pub fn interpret(raw_response: &str, sanitized: &str) -> EvaluationOutcome {
    match serde_json::from_str::<EvaluationResult>(sanitized) {
        Ok(result) => EvaluationOutcome::Report { result },
        Err(e) => {
            warn!("model reply is not valid evaluation JSON: {e}");
            EvaluationOutcome::Unparsable {
                raw_response: raw_response.to_string(),
            }
        }
    }
}

/// Drops stray markdown emphasis and quotation marks from a suggestion.
pub fn clean_suggestion(suggestion: &str) -> String {
    suggestion.replace("**", "").replace('"', "")
}

pub fn render_outcome(outcome: &EvaluationOutcome) -> RenderedResult {
    match outcome {
        EvaluationOutcome::Report { result } => RenderedResult::Report(ResultPanels {
            match_assessment: result.match_assessment.clone(),
            missing_keywords: result.missing_keywords.clone(),
            suggestions: result
                .suggestions
                .iter()
                .enumerate()
                .map(|(i, s)| format!("{}. {}", i + 1, clean_suggestion(s)))
                .collect(),
        }),
        EvaluationOutcome::Unparsable { raw_response } => RenderedResult::Failure(FailurePanel {
            raw_response: raw_response.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SANITIZED: &str = r#"{"JD Match": "Strong", "MissingKeywords": ["Docker"], "Resume Suggestions": ["Add metrics"]}"#;

    fn panels(raw: &str, sanitized: &str) -> RenderedResult {
        render_outcome(&interpret(raw, sanitized))
    }

    #[test]
    fn test_strong_match_renders_all_panels() {
        let rendered = panels(SANITIZED, SANITIZED);
        assert_eq!(
            rendered,
            RenderedResult::Report(ResultPanels {
                match_assessment: "Strong".into(),
                missing_keywords: vec!["Docker".into()],
                suggestions: vec!["1. Add metrics".into()],
            })
        );
    }

    #[test]
    fn test_not_json_renders_failure_with_raw_text() {
        let rendered = panels("not json at all", "not json at all");
        assert_eq!(
            rendered,
            RenderedResult::Failure(FailurePanel {
                raw_response: "not json at all".into()
            })
        );
    }

    #[test]
    fn test_failure_keeps_unsanitized_text() {
        let raw = "```json\n{\"JD Match\": \"Strong\",}\n```";
        let RenderedResult::Failure(panel) = panels(raw, "{\"JD Match\": \"Strong\",}") else {
            panic!("expected failure panel");
        };
        assert_eq!(panel.raw_response, raw);
    }

    #[test]
    fn test_missing_match_falls_back_to_unknown() {
        let RenderedResult::Report(report) = panels("", r#"{"MissingKeywords": []}"#) else {
            panic!("expected report");
        };
        assert_eq!(report.match_assessment, "Unknown");
        assert!(report.missing_keywords.is_empty());
        assert!(report.suggestions.is_empty());
    }

    #[test]
    fn test_null_match_renders_report_with_unknown() {
        let sanitized = r#"{"JD Match": null, "MissingKeywords": ["Docker"], "Resume Suggestions": null}"#;
        let RenderedResult::Report(report) = panels(sanitized, sanitized) else {
            panic!("expected report");
        };
        assert_eq!(report.match_assessment, "Unknown");
        assert_eq!(report.missing_keywords, vec!["Docker"]);
        assert!(report.suggestions.is_empty());
    }

    #[test]
    fn test_suggestions_are_cleaned_and_numbered_in_order() {
        let sanitized = r#"{"JD Match": "Medium", "Resume Suggestions": ["**Quantify** impact", "Mention \"Kubernetes\"", "Trim summary"]}"#;
        let RenderedResult::Report(report) = panels(sanitized, sanitized) else {
            panic!("expected report");
        };
        assert_eq!(
            report.suggestions,
            vec![
                "1. Quantify impact",
                "2. Mention Kubernetes",
                "3. Trim summary"
            ]
        );
    }

    #[test]
    fn test_wrong_value_type_is_all_or_nothing() {
        let sanitized = r#"{"JD Match": "Strong", "MissingKeywords": "Docker"}"#;
        assert!(matches!(
            panels(sanitized, sanitized),
            RenderedResult::Failure(_)
        ));
    }

    #[test]
    fn test_json_array_is_not_an_evaluation() {
        assert!(matches!(
            panels("[1, 2]", "[1, 2]"),
            RenderedResult::Failure(_)
        ));
    }

    #[test]
    fn test_clean_suggestion_leaves_single_asterisks() {
        assert_eq!(clean_suggestion("Use *italics* and **bold**"), "Use *italics* and bold");
    }
}
