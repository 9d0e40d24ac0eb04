// Resume evaluation: prompt building, model reply sanitization, result rendering.
// All model calls go through llm_client::ModelClient.

pub mod handlers;
pub mod models;
pub mod pipeline;
pub mod prompts;
pub mod report;
pub mod sanitizer;
