use serde::{Deserialize, Serialize};

/// Session state as reported by `/auth/status`.
///
/// The client never sees the session itself, only this summary of it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct SessionStatus {
    #[serde(rename = "isLoggedIn", default)]
    pub is_logged_in: bool,

    #[serde(default)]
    pub role: Option<String>,

    #[serde(default)]
    pub username: Option<String>,
}

impl SessionStatus {
    /// The identity to display, if the server confirms a session.
    pub fn identity(self) -> Option<Identity> {
        if !self.is_logged_in {
            return None;
        }

        Some(Identity::new(
            self.role.unwrap_or_default(),
            self.username.unwrap_or_default(),
        ))
    }
}

/// Who is looking at the dashboard, as shown in its header.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Identity {
    pub role: String,
    pub username: String,
}

impl Identity {
    pub fn new(role: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            username: username.into(),
        }
    }
}

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Reply to `POST /auth/login`, sent with a 200 on success and a 401 on rejection.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,

    #[serde(default)]
    pub role: Option<String>,

    #[serde(default)]
    pub message: Option<String>,
}
