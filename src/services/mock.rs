//! Scripted stand-in for the HTTP backend used by the service tests.

use crate::models::{
    alert::Alert,
    climate::ClimateSnapshot,
    error::AppError,
    feedback::{FeedbackResponse, FeedbackSubmission},
    session::{Credentials, LoginResponse, SessionStatus},
};
use crate::services::api::DashboardApi;
use std::cell::{Cell, RefCell};

type Reply<T> = fn() -> Result<T, AppError>;

/// Each endpoint answers with whatever its reply function returns and
/// counts how often it was called.
pub struct MockApi {
    pub status: Reply<SessionStatus>,
    pub login: Reply<LoginResponse>,
    pub logout: Reply<()>,
    pub climate: Reply<ClimateSnapshot>,
    pub alerts: Reply<Vec<Alert>>,
    pub feedback: Reply<FeedbackResponse>,

    pub status_calls: Cell<u32>,
    pub logout_calls: Cell<u32>,
    pub climate_calls: Cell<u32>,
    pub alerts_calls: Cell<u32>,
    pub last_credentials: RefCell<Option<Credentials>>,
    pub last_feedback: RefCell<Option<FeedbackSubmission>>,
}

fn offline<T>() -> Result<T, AppError> {
    Err(AppError::ApiError("Network error: offline".to_string()))
}

impl Default for MockApi {
    fn default() -> Self {
        Self {
            status: offline,
            login: offline,
            logout: || Ok(()),
            climate: || Ok(ClimateSnapshot::default()),
            alerts: || Ok(Vec::new()),
            feedback: offline,
            status_calls: Cell::new(0),
            logout_calls: Cell::new(0),
            climate_calls: Cell::new(0),
            alerts_calls: Cell::new(0),
            last_credentials: RefCell::new(None),
            last_feedback: RefCell::new(None),
        }
    }
}

impl DashboardApi for MockApi {
    async fn session_status(&self) -> Result<SessionStatus, AppError> {
        self.status_calls.set(self.status_calls.get() + 1);
        (self.status)()
    }

    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, AppError> {
        *self.last_credentials.borrow_mut() = Some(credentials.clone());
        (self.login)()
    }

    async fn logout(&self) -> Result<(), AppError> {
        self.logout_calls.set(self.logout_calls.get() + 1);
        (self.logout)()
    }

    async fn climate_data(&self) -> Result<ClimateSnapshot, AppError> {
        self.climate_calls.set(self.climate_calls.get() + 1);
        (self.climate)()
    }

    async fn alerts(&self) -> Result<Vec<Alert>, AppError> {
        self.alerts_calls.set(self.alerts_calls.get() + 1);
        (self.alerts)()
    }

    async fn submit_feedback(
        &self,
        submission: &FeedbackSubmission,
    ) -> Result<FeedbackResponse, AppError> {
        *self.last_feedback.borrow_mut() = Some(submission.clone());
        (self.feedback)()
    }
}
