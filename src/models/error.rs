#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Data error: {0}")]
    DataError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Authentication error: {0}")]
    AuthError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// The server understood the request and said no.
    #[error("Rejected: {0}")]
    Rejected(String),
}

impl AppError {
    /// Text safe to put in front of the user.
    ///
    /// Only a rejection carries a server-written message; everything else
    /// collapses to `fallback` so transport details stay in the console.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            AppError::Rejected(message) => message.clone(),
            _ => fallback.to_string(),
        }
    }
}
