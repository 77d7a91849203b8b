// Presentation layer - HTTP surface
pub mod app_state;
pub mod handlers;
pub mod payload;
pub mod router;
