//! Service layer module
//!
//! Contains fare fetching, normalization, aggregation, insight generation and
//! the dashboard orchestration built on top of them

pub mod aggregator;
pub mod dashboard;
pub mod fares;
pub mod insights;
pub mod markup;
pub mod normalizer;

pub use dashboard::DashboardService;
pub use fares::FareService;
pub use insights::InsightGenerator;
