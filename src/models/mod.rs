//! Data models module
//!
//! Upstream wire formats (Amadeus, Gemini) and the dashboard's own records

pub mod amadeus;
pub mod dashboard;
pub mod flight;
pub mod gemini;

pub use amadeus::{FlightOffer, FlightOffersResponse, OfferQuery, TokenResponse};
pub use dashboard::{ChartData, DashboardPage, ErrorBody, TrendResponse};
pub use flight::{FlightRecord, RouteAverage, TrendPoint};
pub use gemini::{GeminiRequest, GeminiResponse};
