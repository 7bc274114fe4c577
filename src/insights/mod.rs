//! AI business insight generation.
//!
//! Advisory only: the insight call consumes the trip and vehicle
//! collections and returns prose. Its failure is its own error type and
//! never touches the financial or maintenance figures.

pub mod gemini;

pub use gemini::GeminiClient;

/// Insight generation error types
#[derive(Debug, thiserror::Error)]
pub enum InsightError {
    #[error("insight API key is not configured")]
    MissingApiKey,

    #[error("insight request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("insight request timed out")]
    Timeout,

    #[error("insight response contained no text")]
    EmptyResponse,
}
