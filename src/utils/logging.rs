//! Logging utilities
//!
//! Shared helpers for keeping upstream payloads readable in debug logs

use crate::models::{FlightOffer, OfferQuery};

/// Set to true to log full upstream payloads and prompts
/// Default is false to reduce log verbosity
pub const VERBOSE_UPSTREAM_LOGGING: bool = false;

/// Truncate a string with a note about original length
pub fn truncate_content(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len || VERBOSE_UPSTREAM_LOGGING {
        return s.to_string();
    }
    let kept: String = s.chars().take(max_len).collect();
    let dropped = s.chars().count() - max_len;
    format!("{}... ({} chars truncated)", kept, dropped)
}

/// Compact summary of a search result for logging
pub fn create_offers_log_summary(query: &OfferQuery, offers: &[FlightOffer]) -> serde_json::Value {
    let prices: Vec<&str> = offers
        .iter()
        .filter_map(|o| o.price.as_ref().and_then(|p| p.total.as_deref()))
        .take(5)
        .collect();

    serde_json::json!({
        "origin": query.origin,
        "destination": query.destination,
        "departure_date": query.departure_date,
        "offers": offers.len(),
        "sample_prices": prices,
    })
}
