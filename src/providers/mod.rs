//! Provider module
//!
//! Defines the upstream capability traits and their HTTP implementations

pub mod amadeus;
pub mod gemini;

use crate::models::{FlightOffer, OfferQuery};
use anyhow::Result;
use async_trait::async_trait;

/// Flight pricing provider
///
/// Implementations report failures as errors; the service layer decides
/// which of them degrade to "no data" and which abort the request.
#[async_trait]
pub trait FareProvider: Send + Sync {
    /// Get the provider name
    fn name(&self) -> &str;

    /// Exchange client credentials for a bearer token
    async fn access_token(&self) -> Result<String>;

    /// Search one-way direct offers for a single date
    async fn search_offers(&self, access_token: &str, query: &OfferQuery) -> Result<Vec<FlightOffer>>;
}

/// Text generation capability
#[async_trait]
pub trait InsightModel: Send + Sync {
    /// Get the provider name
    fn name(&self) -> &str;

    /// Complete a single prompt
    ///
    /// `Ok(None)` means the provider answered without usable content,
    /// e.g. because the output was blocked.
    async fn generate(&self, prompt: &str) -> Result<Option<String>>;
}

pub use amadeus::AmadeusProvider;
pub use gemini::GeminiProvider;
