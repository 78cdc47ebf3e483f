//! Fareboard Library
//!
//! Fetches Amadeus flight offers for a set of Australian cities, aggregates
//! them into a route snapshot and a daily price trend, and asks Gemini for
//! marketing commentary on the result

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod providers;
pub mod services;
pub mod utils;
pub mod views;

// Re-export common types
pub use config::Settings;
pub use handlers::{create_router, create_router_with_state, AppState};
pub use providers::{FareProvider, InsightModel};
pub use services::{DashboardService, FareService, InsightGenerator};
pub use utils::error::{AppError, AppResult};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Library description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Get version information
pub fn version_info() -> String {
    format!("{} v{} - {}", NAME, VERSION, DESCRIPTION)
}
