pub mod api;
pub mod feedback;
pub mod session;

#[cfg(test)]
pub(crate) mod mock;
