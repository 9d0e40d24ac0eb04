//! HTML page rendering (askama). Templates live in `templates/` at the crate root.
//! Every interpolated value is HTML-escaped by askama.

use askama::Template;

use crate::evaluation::report::{FailurePanel, RenderedResult, ResultPanels};

/// The single evaluator page: input form plus whatever the last submission produced.
#[derive(Template, Default)]
#[template(path = "evaluator.html")]
pub struct EvaluatorPage {
    pub job_description: String,
    pub warning: Option<String>,
    pub result: Option<ResultPanels>,
    pub failure: Option<FailurePanel>,
}

impl EvaluatorPage {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_warning(job_description: String, warning: String) -> Self {
        Self {
            job_description,
            warning: Some(warning),
            ..Self::default()
        }
    }

    pub fn with_result(job_description: String, rendered: RenderedResult) -> Self {
        let (result, failure) = match rendered {
            RenderedResult::Report(panels) => (Some(panels), None),
            RenderedResult::Failure(panel) => (None, Some(panel)),
        };
        Self {
            job_description,
            result,
            failure,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_page_has_form_and_no_panels() {
        let html = EvaluatorPage::empty().render().unwrap();
        assert!(html.contains("Smart ATS Resume Evaluator"));
        assert!(html.contains(r#"name="job_description""#));
        assert!(html.contains(r#"name="resume""#));
        assert!(!html.contains("ATS Evaluation Results"));
    }

    #[test]
    fn test_report_page_shows_match_keywords_and_numbered_suggestions() {
        let page = EvaluatorPage::with_result(
            "Rust and Docker".into(),
            RenderedResult::Report(ResultPanels {
                match_assessment: "Strong".into(),
                missing_keywords: vec!["Docker".into()],
                suggestions: vec!["1. Add metrics".into()],
            }),
        );
        let html = page.render().unwrap();
        assert!(html.contains("JD Match: Strong"));
        assert!(html.contains(r#"<div class="keyword-item">Docker</div>"#));
        assert!(html.contains(r#"<div class="suggestion-item">1. Add metrics</div>"#));
        assert!(html.contains("Rust and Docker"));
    }

    #[test]
    fn test_empty_keyword_list_omits_block() {
        let page = EvaluatorPage::with_result(
            String::new(),
            RenderedResult::Report(ResultPanels {
                match_assessment: "Low".into(),
                missing_keywords: vec![],
                suggestions: vec!["1. Rewrite summary".into()],
            }),
        );
        let html = page.render().unwrap();
        assert!(!html.contains("Missing Keywords"));
        assert!(html.contains("Resume Improvement Suggestions"));
    }

    #[test]
    fn test_failure_page_shows_error_panel_and_raw_text() {
        let page = EvaluatorPage::with_result(
            String::new(),
            RenderedResult::Failure(FailurePanel {
                raw_response: "not json at all".into(),
            }),
        );
        let html = page.render().unwrap();
        assert!(html.contains("AI Response Error: Invalid JSON format."));
        assert!(html.contains("Error Processing Results"));
        assert!(html.contains("Show Technical Details"));
        assert!(html.contains("not json at all"));
        assert!(!html.contains("JD Match:"));
    }

    #[test]
    fn test_model_text_is_escaped() {
        let page = EvaluatorPage::with_result(
            String::new(),
            RenderedResult::Report(ResultPanels {
                match_assessment: "<script>alert(1)</script>".into(),
                missing_keywords: vec![],
                suggestions: vec![],
            }),
        );
        let html = page.render().unwrap();
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_warning_page() {
        let page = EvaluatorPage::with_warning(String::new(), "⚠️ Please upload".into());
        let html = page.render().unwrap();
        assert!(html.contains(r#"<div class="warning">⚠️ Please upload</div>"#));
    }
}
