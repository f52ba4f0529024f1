/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Path prefix of every API endpoint, relative to the page origin
    pub const API_BASE_PATH: &'static str = "/api";

    /// Origin used when there is no page to resolve against (native builds and tests)
    pub const FALLBACK_ORIGIN: &'static str = "http://localhost:5000";

    /// Display prefix the server puts in front of every temperature reading.
    /// Formatting only: stripping it reveals nothing that was hidden.
    pub const DISPLAY_PREFIX: &'static str = "encrypted_";

    /// How long a feedback notice stays on screen (3 seconds)
    pub const NOTICE_DURATION_MS: u32 = 3_000;

    /// Quiet period after the last resize event before the chart is redrawn
    pub const RESIZE_DEBOUNCE_MS: u32 = 150;

    /// DOM id of the element the temperature chart renders into
    pub const CHART_ID: &'static str = "temp-chart";

    /// Shown when a login attempt fails for any reason other than a rejection
    pub const LOGIN_FALLBACK_MESSAGE: &'static str = "An error occurred. Please try again.";

    /// Shown when the server rejects a login without saying why
    pub const LOGIN_REJECTED_MESSAGE: &'static str = "Invalid credentials";

    /// Shown when feedback could not be delivered
    pub const FEEDBACK_FAILURE_MESSAGE: &'static str = "Unable to send feedback. Please try again.";

    /// Shown when the server accepts feedback without a message of its own
    pub const FEEDBACK_THANKS_MESSAGE: &'static str = "Thank you for your feedback!";
}
