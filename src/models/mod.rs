pub mod alert;
pub mod climate;
pub mod error;
pub mod feedback;
pub mod session;
