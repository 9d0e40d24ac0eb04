//! Resume text extraction.
//!
//! Pulls the text layer out of an uploaded PDF page by page with
//! [`pdf_extract`]. Pages without a text layer contribute an empty segment;
//! only a document that cannot be read at all is an error. `pdf_extract` can
//! panic on malformed input, so the call runs inside `catch_unwind`.

use std::panic::{self, AssertUnwindSafe};

use bytes::Bytes;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("The uploaded file could not be read as a PDF: {0}")]
    Unreadable(String),

    #[error("The uploaded PDF is malformed and could not be processed.")]
    Malformed,

    #[error("PDF extraction task failed: {0}")]
    Task(String),
}

/// Extracts the text of every page, in document order.
fn extract_pages(data: &[u8]) -> Result<Vec<String>, ExtractionError> {
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem_by_pages(data)
    }));
    match result {
        Ok(Ok(pages)) => Ok(pages),
        Ok(Err(e)) => Err(ExtractionError::Unreadable(e.to_string())),
        Err(_) => Err(ExtractionError::Malformed),
    }
}

/// Concatenates page texts with no separator. Empty pages add nothing.
pub fn join_pages<S: AsRef<str>>(pages: &[S]) -> String {
    pages.iter().map(AsRef::as_ref).collect()
}

/// Extracts the resume text from raw PDF bytes.
pub fn extract_resume_text(data: &[u8]) -> Result<String, ExtractionError> {
    let pages = extract_pages(data)?;
    let text = join_pages(&pages);
    debug!(
        "extracted {} characters from {} PDF pages",
        text.len(),
        pages.len()
    );
    Ok(text)
}

/// Runs [`extract_resume_text`] on the blocking pool.
pub async fn extract_resume_text_blocking(data: Bytes) -> Result<String, ExtractionError> {
    tokio::task::spawn_blocking(move || extract_resume_text(&data))
        .await
        .map_err(|e| ExtractionError::Task(e.to_string()))?
}
