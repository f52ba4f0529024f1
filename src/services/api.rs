use crate::config::Config;
use crate::models::{
    alert::Alert,
    climate::{ClimateSnapshot, HumidityTrend, RegionReading, reading_from_json},
    error::AppError,
    feedback::{FeedbackResponse, FeedbackSubmission},
    session::{Credentials, LoginResponse, SessionStatus},
};
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::{Map, Value};

// ENDPOINTS
const STATUS_PATH: &str = "/auth/status";
const LOGIN_PATH: &str = "/auth/login";
const LOGOUT_PATH: &str = "/auth/logout";
const CLIMATE_PATH: &str = "/climate-data";
const ALERTS_PATH: &str = "/alerts";
const FEEDBACK_PATH: &str = "/feedback";

// API CONFIGURATION
/// Configuration for the dashboard API client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    /// Returns the base every endpoint path is appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Constructs the full URL for an endpoint path such as `/alerts`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.trim_end_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfigBuilder::default().build()
    }
}

/// Origin of the page hosting the app, so the API resolves same-origin and
/// the browser attaches the session cookie.
#[cfg(target_arch = "wasm32")]
fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn page_origin() -> Option<String> {
    None
}

// API CONFIGURATION BUILDER
/// Builder for constructing an `ApiConfig` with custom settings.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
}

impl ApiConfigBuilder {
    /// Sets a custom base URL (primarily for testing).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Builds the `ApiConfig`.
    pub fn build(self) -> ApiConfig {
        ApiConfig {
            base_url: self.base_url.unwrap_or_else(|| {
                let origin = page_origin().unwrap_or_else(|| Config::FALLBACK_ORIGIN.to_string());
                format!("{origin}{}", Config::API_BASE_PATH)
            }),
        }
    }
}

// API RESPONSE TYPES
#[derive(Deserialize, Debug)]
struct ApiClimate {
    average_temp_region: Map<String, Value>,
    #[serde(default)]
    humidity_trends: Map<String, Value>,
}

impl From<ApiClimate> for ClimateSnapshot {
    fn from(c: ApiClimate) -> Self {
        let readings = c
            .average_temp_region
            .into_iter()
            .map(|(region, value)| RegionReading {
                celsius: reading_from_json(&value),
                region,
            })
            .collect();

        let humidity = c
            .humidity_trends
            .into_iter()
            .map(|(region, value)| HumidityTrend {
                trend: match value {
                    Value::String(s) => s,
                    other => other.to_string(),
                },
                region,
            })
            .collect();

        ClimateSnapshot::new(readings, humidity)
    }
}

/// The calls the dashboard makes against its backend.
///
/// `DashboardClient` is the HTTP implementation; the seam exists so the
/// session and feedback policies can run against a scripted backend.
#[allow(async_fn_in_trait)]
pub trait DashboardApi {
    async fn session_status(&self) -> Result<SessionStatus, AppError>;

    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, AppError>;

    async fn logout(&self) -> Result<(), AppError>;

    async fn climate_data(&self) -> Result<ClimateSnapshot, AppError>;

    async fn alerts(&self) -> Result<Vec<Alert>, AppError>;

    async fn submit_feedback(
        &self,
        submission: &FeedbackSubmission,
    ) -> Result<FeedbackResponse, AppError>;
}

// DASHBOARD CLIENT
/// HTTP client for the EarthScape API.
pub struct DashboardClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl DashboardClient {
    /// Creates a new client with default configuration.
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(ApiConfig::default())
    }

    /// Creates a new client with the specified configuration.
    pub fn with_config(config: ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// GETs a JSON document, treating any non-2xx status as an error.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let response = self
            .http
            .get(self.config.endpoint(path))
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(self.error_for_status(status, &body));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::DataError(format!("Failed to parse response: {e}")))
    }

    /// POSTs a JSON body and reads the reply body whatever the status.
    ///
    /// Login and feedback answer refusals with a 4xx that still carries a
    /// `{success, message}` document, so the body is tried first and the
    /// status only decides the error when the body is unreadable.
    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, AppError>
    where
        B: serde::Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .http
            .post(self.config.endpoint(path))
            .json(body)
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| self.classify_error(e))?;

        decode_reply(status, &text).map_err(|e| match e {
            Some(err) => err,
            None => self.error_for_status(status, &text),
        })
    }

    /// Converts a reqwest error into an appropriate AppError.
    fn classify_error(&self, error: reqwest::Error) -> AppError {
        if error.is_timeout() {
            AppError::ApiError(format!("Request timeout: {error}"))
        } else if error.is_request() {
            AppError::ApiError(format!("Request error: {error}"))
        } else if error.is_decode() {
            AppError::DataError(format!("Failed to read response: {error}"))
        } else {
            AppError::ApiError(format!("Network error: {error}"))
        }
    }

    /// Creates an error based on HTTP status code.
    fn error_for_status(&self, status: reqwest::StatusCode, body: &str) -> AppError {
        error_for_status(status.as_u16(), body)
    }
}

/// Parses a POST reply body.
///
/// `Err(None)` means the body was unreadable on a non-success status, in
/// which case the status itself is the better error.
fn decode_reply<T: DeserializeOwned>(
    status: reqwest::StatusCode,
    text: &str,
) -> Result<T, Option<AppError>> {
    match serde_json::from_str(text) {
        Ok(reply) => Ok(reply),
        Err(_) if !status.is_success() => Err(None),
        Err(e) => Err(Some(AppError::DataError(format!(
            "Failed to parse response: {e}"
        )))),
    }
}

fn error_for_status(status: u16, body: &str) -> AppError {
    match status {
        401 | 403 => AppError::AuthError(format!("Not authorised ({status}): {body}")),
        404 => AppError::NotFound(format!("Resource not found: {body}")),
        _ => AppError::HttpStatus {
            status,
            body: body.to_string(),
        },
    }
}

impl DashboardApi for DashboardClient {
    async fn session_status(&self) -> Result<SessionStatus, AppError> {
        self.get_json(STATUS_PATH).await
    }

    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, AppError> {
        self.post_json(LOGIN_PATH, credentials).await
    }

    async fn logout(&self) -> Result<(), AppError> {
        let response = self
            .http
            .post(self.config.endpoint(LOGOUT_PATH))
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(self.error_for_status(status, &body));
        }

        Ok(())
    }

    async fn climate_data(&self) -> Result<ClimateSnapshot, AppError> {
        let climate: ApiClimate = self.get_json(CLIMATE_PATH).await?;
        Ok(climate.into())
    }

    async fn alerts(&self) -> Result<Vec<Alert>, AppError> {
        self.get_json(ALERTS_PATH).await
    }

    async fn submit_feedback(
        &self,
        submission: &FeedbackSubmission,
    ) -> Result<FeedbackResponse, AppError> {
        self.post_json(FEEDBACK_PATH, submission).await
    }
}
