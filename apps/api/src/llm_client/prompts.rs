// Shared prompt fragments. Feature-specific templates live in a prompts.rs
// next to the feature that owns them.

/// Appended to every prompt that expects a JSON reply.
pub const JSON_ONLY_REMINDER: &str = "IMPORTANT: Return your response as valid JSON \
    without any markdown formatting. Do not use asterisks, quotation marks, or other \
    markdown syntax in the content of the JSON values.";
