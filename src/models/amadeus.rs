//! Amadeus API data models
//!
//! Token exchange and flight offer search structures. Only the fields the
//! dashboard reads are modelled; everything else in the payload is ignored.

use serde::{Deserialize, Serialize};

/// OAuth2 client-credentials token response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Bearer token
    pub access_token: String,
    /// Token type, normally "Bearer"
    #[serde(default)]
    pub token_type: Option<String>,
    /// Lifetime in seconds
    #[serde(default)]
    pub expires_in: Option<u64>,
}

/// Flight offer search response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlightOffersResponse {
    #[serde(default)]
    pub data: Vec<FlightOffer>,
}

/// A single priced offer as returned by the search endpoint
///
/// Fields are lenient on purpose: shape problems are reported by the
/// normalizer, which turns them into a request failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlightOffer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub price: Option<OfferPrice>,
    #[serde(rename = "validatingAirlineCodes", default)]
    pub validating_airline_codes: Vec<String>,
    #[serde(default)]
    pub itineraries: Vec<Itinerary>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OfferPrice {
    /// Total price as a decimal string (e.g. "123.45")
    #[serde(default)]
    pub total: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Itinerary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default)]
    pub segments: Vec<Segment>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Segment {
    #[serde(default)]
    pub departure: Option<FlightEndpoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrival: Option<FlightEndpoint>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlightEndpoint {
    #[serde(rename = "iataCode", default, skip_serializing_if = "Option::is_none")]
    pub iata_code: Option<String>,
    /// Local timestamp, e.g. "2024-05-01T07:30:00"
    #[serde(default)]
    pub at: Option<String>,
}

/// Search parameters for one origin/destination/date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfferQuery {
    pub origin: String,
    pub destination: String,
    /// ISO date, "YYYY-MM-DD"
    pub departure_date: String,
}

impl OfferQuery {
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        departure_date: impl Into<String>,
    ) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            departure_date: departure_date.into(),
        }
    }
}

impl FlightOffer {
    /// Convenience constructor for a well-formed offer
    pub fn simple(total: &str, airline: &str, departure_at: &str) -> Self {
        Self {
            id: None,
            price: Some(OfferPrice {
                total: Some(total.to_string()),
                currency: None,
            }),
            validating_airline_codes: vec![airline.to_string()],
            itineraries: vec![Itinerary {
                duration: None,
                segments: vec![Segment {
                    departure: Some(FlightEndpoint {
                        iata_code: None,
                        at: Some(departure_at.to_string()),
                    }),
                    arrival: None,
                }],
            }],
        }
    }
}
