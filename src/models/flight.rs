//! Normalized flight data and aggregation results

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One offer reduced to the fields the dashboard aggregates on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightRecord {
    pub origin: String,
    pub destination: String,
    /// Total price in the configured currency, never negative
    pub price: f64,
    /// First validating airline code
    pub airline: String,
    /// Calendar date of the first segment's departure
    pub departure_date: NaiveDate,
}

impl FlightRecord {
    /// ISO form of the departure date, used as a chart label
    pub fn date_label(&self) -> String {
        self.departure_date.format("%Y-%m-%d").to_string()
    }
}

/// Average price for one origin in the snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteAverage {
    pub origin: String,
    pub average_price: f64,
}

/// Averaged cheapest price for one calendar date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// ISO date, "YYYY-MM-DD"
    pub date: String,
    pub average_price: f64,
}
