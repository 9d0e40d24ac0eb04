//! Evaluation pipeline: extract → prompt → model → sanitize → interpret.
//!
//! Exactly one model call per request. Only an unreadable PDF stops the run
//! early; model failures flow through to the failure panel like any other
//! unparsable reply.

use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::evaluation::models::{EvaluationOutcome, EvaluationRequest};
use crate::evaluation::prompts::build_evaluation_prompt;
use crate::evaluation::report::interpret;
use crate::evaluation::sanitizer::sanitize_model_response;
use crate::extraction::extract_resume_text_blocking;
use crate::llm_client::ModelClient;

pub async fn run_evaluation(
    request: EvaluationRequest,
    model: &dyn ModelClient,
) -> Result<EvaluationOutcome, AppError> {
    let evaluation_id = Uuid::new_v4();
    let span = info_span!("evaluation", %evaluation_id);

    async move {
        let resume_text = extract_resume_text_blocking(request.resume_pdf().clone()).await?;
        let outcome = evaluate_text(&resume_text, request.job_description(), model).await;

        info!(
            parsed = matches!(outcome, EvaluationOutcome::Report { .. }),
            "evaluation finished"
        );
        Ok::<_, AppError>(outcome)
    }
    .instrument(span)
    .await
}

/// Runs the model half of the pipeline on already-extracted resume text.
pub async fn evaluate_text(
    resume_text: &str,
    job_description: &str,
    model: &dyn ModelClient,
) -> EvaluationOutcome {
    let prompt = build_evaluation_prompt(resume_text, job_description);
    let response = model.generate(&prompt).await;
    if response.is_failure() {
        warn!("model call failed; rendering diagnostics");
    }
    let raw = response.raw_text();
    interpret(&raw, &sanitize_model_response(&raw))
}
