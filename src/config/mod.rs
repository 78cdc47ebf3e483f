//! Configuration management module
//!
//! Responsible for loading and managing application configuration: environment
//! variables, provider credentials and the city table.

pub mod cities;
pub mod file;
pub mod settings;

pub use cities::{City, CityTable};
pub use settings::{
    AmadeusConfig, DashboardConfig, GeminiConfig, LoggingConfig, SecurityConfig, ServerConfig,
    Settings,
};
