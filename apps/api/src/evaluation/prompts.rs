// Prompt text for resume evaluation.
// Reuses the JSON-only reminder from llm_client::prompts.

use crate::llm_client::prompts::JSON_ONLY_REMINDER;

/// Reply schema the model is asked to follow. The key names are matched
/// exactly when the reply is parsed.
pub const RESPONSE_SCHEMA: &str = r#"{
    "JD Match": "Strong/Medium/Low", // Provide a qualitative assessment with a detailed explanation
    "MissingKeywords": ["keyword1", "keyword2", ...], // List complete keywords, not individual letters
    "Resume Suggestions": [
        "Suggestion 1 without any markdown formatting or special characters",
        "Suggestion 2 without any markdown formatting or special characters",
        ...
    ]
}"#;

pub const FORMATTING_RULES: &str = "IMPORTANT:
1. Return your response as valid JSON without any markdown formatting.
2. Do not use asterisks, quotation marks, or other markdown syntax in the content of the JSON values.
3. For MissingKeywords, provide complete words/phrases, not individual letters.
4. Ensure each suggestion is clear, actionable, and free of formatting characters.";

/// Builds the evaluation prompt.
///
/// Both inputs are embedded verbatim in a single pass; nothing is escaped.
pub fn build_evaluation_prompt(resume_text: &str, job_description: &str) -> String {
    format!(
        "Analyze the following resume against this job description and provide ATS insights.

Resume: {resume_text}
Job Description: {job_description}

Provide your analysis in the following JSON format:
{schema}

{rules}

{reminder}",
        schema = RESPONSE_SCHEMA,
        rules = FORMATTING_RULES,
        reminder = JSON_ONLY_REMINDER,
    )
}
