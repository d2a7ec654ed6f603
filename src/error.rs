/// Application-level errors
///
/// Every network-facing operation converts its failures into one of these
/// variants at the boundary; raw transport errors never cross component seams.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("External API error: {0}")]
    ExternalApi(String),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Submission failed: {0}")]
    Submission(String),
}

impl AppError {
    /// User-facing message for inline display.
    ///
    /// Transport errors get a generic message; the reqwest detail stays in logs.
    pub fn user_message(&self) -> String {
        match self {
            AppError::InvalidInput(msg)
            | AppError::NotFound(msg)
            | AppError::ExternalApi(msg)
            | AppError::Submission(msg) => msg.clone(),
            AppError::HttpClient(_) => "Failed to fetch movie data".to_string(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
