//! Offer normalization
//!
//! Flattens raw Amadeus offers into [`FlightRecord`]s. A malformed offer aborts
//! the whole batch: partial data would silently skew the averages.

use crate::models::{FlightOffer, FlightRecord};
use crate::utils::error::{helpers::malformed_offer, AppResult, ErrorContext};
use chrono::NaiveDate;

/// Normalize every offer fetched for `origin` -> `destination`
pub fn normalize_offers(
    offers: &[FlightOffer],
    origin: &str,
    destination: &str,
) -> AppResult<Vec<FlightRecord>> {
    offers
        .iter()
        .map(|offer| normalize_offer(offer, origin, destination))
        .collect()
}

/// Normalize a single offer
pub fn normalize_offer(offer: &FlightOffer, origin: &str, destination: &str) -> AppResult<FlightRecord> {
    let total = offer
        .price
        .as_ref()
        .and_then(|p| p.total.as_deref())
        .ok_or_else(|| malformed_offer("missing price.total"))?;

    let price: f64 = total.trim().parse().malformed_context("Invalid price.total")?;
    if !price.is_finite() || price < 0.0 {
        return Err(malformed_offer(format!("price out of range: {}", total)));
    }

    let airline = offer
        .validating_airline_codes
        .first()
        .ok_or_else(|| malformed_offer("missing validatingAirlineCodes"))?
        .clone();

    let departure_at = offer
        .itineraries
        .first()
        .and_then(|i| i.segments.first())
        .and_then(|s| s.departure.as_ref())
        .and_then(|d| d.at.as_deref())
        .ok_or_else(|| malformed_offer("missing itineraries[0].segments[0].departure.at"))?;

    Ok(FlightRecord {
        origin: origin.to_string(),
        destination: destination.to_string(),
        price,
        airline,
        departure_date: departure_date(departure_at)?,
    })
}

/// Date portion of a departure timestamp ("2024-05-01T07:30:00" -> 2024-05-01)
fn departure_date(at: &str) -> AppResult<NaiveDate> {
    let date = at.split('T').next().unwrap_or(at);
    NaiveDate::parse_from_str(date, "%Y-%m-%d").malformed_context("Invalid departure timestamp")
}
