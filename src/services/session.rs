//! Session gate and credential policy.
//!
//! These functions decide what a backend reply means for the user; they do
//! no logging and touch no DOM so they run the same in tests as in the browser.

use crate::config::Config;
use crate::models::{
    error::AppError,
    session::{Credentials, Identity},
};
use crate::services::api::DashboardApi;

/// Asks the server whether a session exists.
///
/// `Ok(None)` is an explicit "not logged in". Callers must treat an `Err`
/// exactly like `Ok(None)`: the dashboard is only shown on a confirmed session.
pub async fn check_session<A: DashboardApi>(api: &A) -> Result<Option<Identity>, AppError> {
    Ok(api.session_status().await?.identity())
}

/// Submits credentials.
///
/// On acceptance the role comes from the server and the username is the one
/// the user typed; the server does not echo it. A refusal becomes
/// `AppError::Rejected` carrying the server's message.
pub async fn login<A: DashboardApi>(
    api: &A,
    credentials: &Credentials,
) -> Result<Identity, AppError> {
    let reply = api.login(credentials).await?;

    if !reply.success {
        return Err(AppError::Rejected(
            reply
                .message
                .unwrap_or_else(|| Config::LOGIN_REJECTED_MESSAGE.to_string()),
        ));
    }

    Ok(Identity::new(
        reply.role.unwrap_or_default(),
        credentials.username.clone(),
    ))
}

/// Ends the session. The reply body is ignored.
pub async fn logout<A: DashboardApi>(api: &A) -> Result<(), AppError> {
    api.logout().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::session::{LoginResponse, SessionStatus};
    use crate::services::mock::MockApi;

    fn credentials() -> Credentials {
        Credentials {
            username: "analyst".to_string(),
            password: "analyst_pass".to_string(),
        }
    }

    #[tokio::test]
    async fn test_check_session_logged_in() {
        let api = MockApi {
            status: || {
                Ok(SessionStatus {
                    is_logged_in: true,
                    role: Some("Administrator".to_string()),
                    username: Some("admin".to_string()),
                })
            },
            ..MockApi::default()
        };

        let identity = check_session(&api).await.unwrap();
        assert_eq!(identity, Some(Identity::new("Administrator", "admin")));
        assert_eq!(api.status_calls.get(), 1);
    }

    #[tokio::test]
    async fn test_check_session_logged_out() {
        let api = MockApi {
            status: || Ok(SessionStatus::default()),
            ..MockApi::default()
        };

        assert_eq!(check_session(&api).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_check_session_transport_error_is_not_retried() {
        let api = MockApi::default();

        assert!(check_session(&api).await.is_err());
        assert_eq!(api.status_calls.get(), 1);
    }

    #[tokio::test]
    async fn test_login_success_uses_typed_username() {
        let api = MockApi {
            login: || {
                Ok(LoginResponse {
                    success: true,
                    role: Some("Analyst".to_string()),
                    message: Some("Login successful".to_string()),
                })
            },
            ..MockApi::default()
        };

        let identity = login(&api, &credentials()).await.unwrap();
        assert_eq!(identity, Identity::new("Analyst", "analyst"));
        assert_eq!(api.last_credentials.borrow().as_ref(), Some(&credentials()));
    }

    #[tokio::test]
    async fn test_login_rejected_carries_server_message() {
        let api = MockApi {
            login: || {
                Ok(LoginResponse {
                    success: false,
                    role: None,
                    message: Some("Bad credentials".to_string()),
                })
            },
            ..MockApi::default()
        };

        let err = login(&api, &credentials()).await.unwrap_err();
        assert_eq!(
            err.user_message(Config::LOGIN_FALLBACK_MESSAGE),
            "Bad credentials"
        );
    }

    #[tokio::test]
    async fn test_login_rejected_without_message() {
        let api = MockApi {
            login: || Ok(LoginResponse::default()),
            ..MockApi::default()
        };

        let err = login(&api, &credentials()).await.unwrap_err();
        assert!(matches!(err, AppError::Rejected(ref m) if m == "Invalid credentials"));
    }

    #[tokio::test]
    async fn test_login_network_failure_gets_generic_message() {
        let api = MockApi::default();

        let err = login(&api, &credentials()).await.unwrap_err();
        assert_eq!(
            err.user_message(Config::LOGIN_FALLBACK_MESSAGE),
            "An error occurred. Please try again."
        );
    }

    #[tokio::test]
    async fn test_logout_reports_failure() {
        let api = MockApi {
            logout: || Err(AppError::ApiError("Network error: offline".to_string())),
            ..MockApi::default()
        };

        assert!(logout(&api).await.is_err());
        assert_eq!(api.logout_calls.get(), 1);
    }
}
