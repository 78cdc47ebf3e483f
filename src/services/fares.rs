//! Fare fetching service
//!
//! Applies the degrade policy on top of a [`FareProvider`]: credential
//! failures become "no token", search failures become "no offers".

use crate::models::{FlightOffer, OfferQuery};
use crate::providers::FareProvider;
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Fare service
#[derive(Clone)]
pub struct FareService {
    provider: Arc<dyn FareProvider>,
}

impl FareService {
    pub fn new(provider: Arc<dyn FareProvider>) -> Self {
        Self { provider }
    }

    /// Fresh access token, or `None` when the exchange failed
    pub async fn obtain_token(&self) -> Option<String> {
        match self.provider.access_token().await {
            Ok(token) => {
                debug!("Obtained {} access token", self.provider.name());
                Some(token)
            }
            Err(e) => {
                error!("Error getting {} token: {:#}", self.provider.name(), e);
                None
            }
        }
    }

    /// Direct one-way offers for a single date; empty on any failure
    pub async fn search_flight_deals(
        &self,
        access_token: &str,
        origin: &str,
        destination: &str,
        departure_date: NaiveDate,
    ) -> Vec<FlightOffer> {
        let query = OfferQuery::new(origin, destination, departure_date.format("%Y-%m-%d").to_string());

        match self.provider.search_offers(access_token, &query).await {
            Ok(offers) => offers,
            Err(e) => {
                warn!(
                    "Error fetching flight data for {}->{} on {}: {:#}",
                    origin, destination, query.departure_date, e
                );
                Vec::new()
            }
        }
    }
}
