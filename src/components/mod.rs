pub mod alert_feed;
pub mod chart;
pub mod dashboard_view;
pub mod feedback_form;
pub mod humidity;
pub mod login_view;
pub mod status;

pub use dashboard_view::DashboardView;
pub use login_view::LoginView;
