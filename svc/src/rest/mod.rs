pub mod api;
pub mod debug_handlers;
pub mod middleware;
pub mod user_handlers;
pub mod user_requests;
