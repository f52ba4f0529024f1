use serde::{Deserialize, Serialize};

/// Body of `POST /feedback`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackSubmission {
    pub feedback: String,
}

/// Reply to `POST /feedback`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct FeedbackResponse {
    #[serde(default)]
    pub success: bool,

    #[serde(default)]
    pub message: Option<String>,
}
