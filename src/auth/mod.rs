pub mod handlers;
pub mod marker;
pub mod session;
