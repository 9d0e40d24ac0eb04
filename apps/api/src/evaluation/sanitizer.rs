//! Response sanitizer: coerces a loosely formatted model reply toward parseable JSON.
//!
//! Two passes: drop every markdown code-fence marker, then keep the span from
//! the first `{` to the last `}`. The brace capture is greedy and does not
//! balance brackets, so trailing prose containing `}` is kept too. Parsing is
//! left to the renderer.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref CODE_FENCE: Regex = Regex::new(r"```json|```").unwrap();
    static ref JSON_OBJECT: Regex = Regex::new(r"(?s)(\{.*\})").unwrap();
}

/// Removes "```json" and "```" markers anywhere in the text and trims it.
pub fn strip_code_fences(text: &str) -> String {
    CODE_FENCE.replace_all(text, "").trim().to_string()
}

/// Returns the first-`{`-to-last-`}` span, or `None` when there is no such span.
pub fn extract_json_object(text: &str) -> Option<&str> {
    JSON_OBJECT
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Full sanitization. Text without a JSON-shaped span is returned fence-stripped.
pub fn sanitize_model_response(raw: &str) -> String {
    let unfenced = strip_code_fences(raw);
    match extract_json_object(&unfenced) {
        Some(object) => object.to_string(),
        None => unfenced,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FENCED: &str = "Here is the result:\n```json\n{\"JD Match\": \"Strong\", \"MissingKeywords\": [\"Docker\"], \"Resume Suggestions\": [\"Add metrics\"]}\n```";
    const EXPECTED: &str = r#"{"JD Match": "Strong", "MissingKeywords": ["Docker"], "Resume Suggestions": ["Add metrics"]}"#;

    #[test]
    fn test_fenced_reply_with_preamble_yields_bare_object() {
        assert_eq!(sanitize_model_response(FENCED), EXPECTED);
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        let once = sanitize_model_response(FENCED);
        assert_eq!(sanitize_model_response(&once), once);

        let prose = "  no braces here ```  ";
        let once = sanitize_model_response(prose);
        assert_eq!(sanitize_model_response(&once), once);
    }

    #[test]
    fn test_untagged_fence_is_removed() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(sanitize_model_response(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_bare_object_is_unchanged() {
        assert_eq!(sanitize_model_response(EXPECTED), EXPECTED);
    }

    #[test]
    fn test_multiline_object_is_captured() {
        let input = "Sure!\n{\n  \"JD Match\": \"Low\",\n  \"MissingKeywords\": []\n}\nHope this helps.";
        assert_eq!(
            sanitize_model_response(input),
            "{\n  \"JD Match\": \"Low\",\n  \"MissingKeywords\": []\n}"
        );
    }

    #[test]
    fn test_capture_is_greedy_to_last_brace() {
        let input = "{\"a\": 1} and later {\"b\": 2}";
        assert_eq!(sanitize_model_response(input), input);
    }

    #[test]
    fn test_text_without_object_is_returned_unchanged() {
        assert_eq!(sanitize_model_response("not json at all"), "not json at all");
    }

    #[test]
    fn test_fence_markers_inside_text_are_removed() {
        assert_eq!(strip_code_fences("a```json b ``` c"), "a b  c");
    }
}
