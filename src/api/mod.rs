//! API endpoint modules.

pub mod health;
pub mod openapi;
pub mod user_info;

pub use health::configure_health_routes;
pub use openapi::ApiDoc;
pub use user_info::configure_routes as configure_user_info_routes;
