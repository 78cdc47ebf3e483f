//! Dashboard response models
//!
//! Chart payloads shared by the HTML page and the JSON endpoint

use serde::{Deserialize, Serialize};

/// Label/value series consumed by the chart front end
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub data: Vec<f64>,
    /// Origin code per bar, lets the page request a route trend on click
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_codes: Option<Vec<String>>,
}

impl ChartData {
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Body of `GET /api/price-trend`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendResponse {
    pub labels: Vec<String>,
    pub data: Vec<f64>,
    pub chart_title: String,
}

/// Everything the dashboard page renders
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardPage {
    pub selected_destination: String,
    pub popular_routes: ChartData,
    pub price_trends: ChartData,
    /// HTML fragment, or plain text when no data was found
    pub ai_summary: String,
    pub trend_chart_title: String,
}

/// Structured error body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
