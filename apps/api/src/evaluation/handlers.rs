//! Axum route handlers for resume evaluation.

use askama::Template;
use axum::{
    extract::{Multipart, State},
    response::Html,
    Json,
};
use bytes::Bytes;

use crate::errors::AppError;
use crate::evaluation::models::{EvaluationOutcome, EvaluationRequest};
use crate::evaluation::pipeline::run_evaluation;
use crate::evaluation::report::render_outcome;
use crate::render::EvaluatorPage;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Multipart intake
// ────────────────────────────────────────────────────────────────────────────

/// Raw form fields before validation.
#[derive(Debug, Default)]
pub struct Submission {
    pub job_description: String,
    pub resume: Option<Bytes>,
}

fn is_pdf(file_name: Option<&str>, content_type: Option<&str>) -> bool {
    let named_pdf = file_name
        .map(|name| name.to_lowercase().ends_with(".pdf"))
        .unwrap_or(false);
    named_pdf || content_type == Some("application/pdf")
}

/// Reads `job_description` and `resume` from the form. Other fields are ignored.
pub async fn read_submission(mut multipart: Multipart) -> Result<Submission, AppError> {
    let mut submission = Submission::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed form data: {e}")))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "job_description" => {
                submission.job_description = field.text().await.map_err(|e| {
                    AppError::Validation(format!("Unreadable job description: {e}"))
                })?;
            }
            "resume" => {
                let pdf = is_pdf(field.file_name(), field.content_type());
                let data = field.bytes().await.map_err(|e| {
                    AppError::Validation(format!("Unreadable resume upload: {e}"))
                })?;
                // Browsers send an empty part when no file was chosen.
                if data.is_empty() {
                    continue;
                }
                if !pdf {
                    return Err(AppError::Validation(
                        "Invalid file type. Only PDF resumes are supported.".to_string(),
                    ));
                }
                submission.resume = Some(data);
            }
            _ => {}
        }
    }

    Ok(submission)
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /
pub async fn handle_index() -> Result<Html<String>, AppError> {
    Ok(Html(EvaluatorPage::empty().render()?))
}

/// POST /evaluate
///
/// Form submission from the page. Input problems come back as a warning on
/// the page; the model is only called for a complete submission.
pub async fn handle_evaluate_page(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Html<String>, AppError> {
    let submission = match read_submission(multipart).await {
        Ok(submission) => submission,
        Err(AppError::Validation(msg)) => {
            return render(EvaluatorPage::with_warning(String::new(), msg));
        }
        Err(e) => return Err(e),
    };

    let job_description = submission.job_description.clone();
    let request = match EvaluationRequest::new(submission.job_description, submission.resume) {
        Ok(request) => request,
        Err(AppError::Validation(msg)) => {
            return render(EvaluatorPage::with_warning(job_description, msg));
        }
        Err(e) => return Err(e),
    };

    let page = match run_evaluation(request, state.model.as_ref()).await {
        Ok(outcome) => EvaluatorPage::with_result(job_description, render_outcome(&outcome)),
        Err(AppError::UnprocessableEntity(msg)) => {
            EvaluatorPage::with_warning(job_description, msg)
        }
        Err(e) => return Err(e),
    };

    render(page)
}

/// POST /api/v1/evaluations
///
/// Same pipeline for programmatic clients; answers with the outcome as JSON.
pub async fn handle_evaluate_api(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<EvaluationOutcome>, AppError> {
    let submission = read_submission(multipart).await?;
    let request = EvaluationRequest::new(submission.job_description, submission.resume)?;
    let outcome = run_evaluation(request, state.model.as_ref()).await?;
    Ok(Json(outcome))
}

fn render(page: EvaluatorPage) -> Result<Html<String>, AppError> {
    Ok(Html(page.render()?))
}
