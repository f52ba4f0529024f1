pub mod feed;
pub mod use_alerts;
pub mod use_climate;
pub mod use_feedback;
pub mod use_login;
pub mod use_session;
