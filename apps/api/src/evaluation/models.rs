use bytes::Bytes;
use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::AppError;

pub const MISSING_INPUT_WARNING: &str =
    "⚠️ Please upload a resume and paste the job description before submitting.";

/// A validated submission. Only constructed through [`EvaluationRequest::new`].
#[derive(Debug, Clone)]
pub struct EvaluationRequest {
    job_description: String,
    resume_pdf: Bytes,
}

impl EvaluationRequest {
    /// Rejects a blank job description or a missing/empty upload.
    pub fn new(job_description: String, resume_pdf: Option<Bytes>) -> Result<Self, AppError> {
        match resume_pdf {
            Some(resume_pdf) if !resume_pdf.is_empty() && !job_description.trim().is_empty() => {
                Ok(Self {
                    job_description,
                    resume_pdf,
                })
            }
            _ => Err(AppError::Validation(MISSING_INPUT_WARNING.to_string())),
        }
    }

    pub fn job_description(&self) -> &str {
        &self.job_description
    }

    pub fn resume_pdf(&self) -> &Bytes {
        &self.resume_pdf
    }
}

/// Structured reply from the model. Key names match the prompt schema exactly.
/// A `null` value reads the same as a missing key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    #[serde(
        rename = "JD Match",
        default = "unknown_match",
        deserialize_with = "match_or_unknown"
    )]
    pub match_assessment: String,
    #[serde(rename = "MissingKeywords", default, deserialize_with = "null_as_empty")]
    pub missing_keywords: Vec<String>,
    #[serde(rename = "Resume Suggestions", default, deserialize_with = "null_as_empty")]
    pub suggestions: Vec<String>,
}

fn unknown_match() -> String {
    "Unknown".to_string()
}

fn match_or_unknown<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(unknown_match))
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// What a submission produced once the model has answered.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EvaluationOutcome {
    #[serde(rename = "ok")]
    Report { result: EvaluationResult },
    /// The reply could not be parsed; `raw_response` is the unsanitized text.
    Unparsable { raw_response: String },
}
