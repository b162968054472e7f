//! Error types shared by the page logic and the browser glue.

/// Errors raised while setting up the page.
///
/// None of these are fatal: the page keeps running with the affected
/// widget left inert.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("question bank is malformed: {0}")]
    QuestionBank(#[from] serde_json::Error),

    #[error("required element not found: {0}")]
    MissingElement(&'static str),

    #[error("browser API call failed: {0}")]
    Browser(String),
}

pub type SiteResult<T> = Result<T, SiteError>;
