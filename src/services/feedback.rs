use crate::config::Config;
use crate::models::{error::AppError, feedback::FeedbackSubmission};
use crate::services::api::DashboardApi;

/// Sends free-text feedback and returns the confirmation to show.
///
/// `success: false` becomes `AppError::Rejected` so the caller can show the
/// same failure notice it shows for transport errors.
pub async fn send_feedback<A: DashboardApi>(api: &A, text: &str) -> Result<String, AppError> {
    let reply = api
        .submit_feedback(&FeedbackSubmission {
            feedback: text.to_string(),
        })
        .await?;

    if reply.success {
        Ok(reply
            .message
            .unwrap_or_else(|| Config::FEEDBACK_THANKS_MESSAGE.to_string()))
    } else {
        Err(AppError::Rejected(reply.message.unwrap_or_else(|| {
            Config::FEEDBACK_FAILURE_MESSAGE.to_string()
        })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::feedback::FeedbackResponse;
    use crate::services::mock::MockApi;

    #[tokio::test]
    async fn test_feedback_confirmed() {
        let api = MockApi {
            feedback: || {
                Ok(FeedbackResponse {
                    success: true,
                    message: Some("Thanks".to_string()),
                })
            },
            ..MockApi::default()
        };

        let confirmation = send_feedback(&api, "Great charts").await.unwrap();
        assert_eq!(confirmation, "Thanks");
        assert_eq!(
            api.last_feedback.borrow().as_ref().map(|f| f.feedback.as_str()),
            Some("Great charts")
        );
    }

    #[tokio::test]
    async fn test_feedback_text_sent_verbatim() {
        let api = MockApi {
            feedback: || Ok(FeedbackResponse::default()),
            ..MockApi::default()
        };

        let _ = send_feedback(&api, "").await;
        assert_eq!(
            api.last_feedback.borrow().as_ref().map(|f| f.feedback.as_str()),
            Some("")
        );
    }

    #[tokio::test]
    async fn test_feedback_refused_surfaces_failure() {
        let api = MockApi {
            feedback: || Ok(FeedbackResponse::default()),
            ..MockApi::default()
        };

        let err = send_feedback(&api, "hello").await.unwrap_err();
        assert_eq!(
            err.user_message(Config::FEEDBACK_FAILURE_MESSAGE),
            "Unable to send feedback. Please try again."
        );
    }

    #[tokio::test]
    async fn test_feedback_network_failure_surfaces_failure() {
        let api = MockApi::default();

        let err = send_feedback(&api, "hello").await.unwrap_err();
        assert!(matches!(err, AppError::ApiError(_)));
        assert_eq!(
            err.user_message(Config::FEEDBACK_FAILURE_MESSAGE),
            Config::FEEDBACK_FAILURE_MESSAGE
        );
    }
}
