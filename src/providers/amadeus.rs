//! Amadeus Provider implementation
//!
//! OAuth2 client-credentials exchange and flight offer search

use super::FareProvider;
use crate::config::AmadeusConfig;
use crate::models::amadeus::*;
use crate::utils::logging::{create_offers_log_summary, truncate_content};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error};

const TOKEN_PATH: &str = "/v1/security/oauth2/token";
const OFFERS_PATH: &str = "/v2/shopping/flight-offers";

/// Amadeus Provider
pub struct AmadeusProvider {
    client: Client,
    config: AmadeusConfig,
}

impl AmadeusProvider {
    /// Create a new provider using the configured timeout
    pub fn new(config: AmadeusConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .user_agent(concat!("fareboard/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, config })
    }

    /// Build an endpoint URL
    fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }
}

#[async_trait]
impl FareProvider for AmadeusProvider {
    fn name(&self) -> &str {
        "amadeus"
    }

    async fn access_token(&self) -> Result<String> {
        if !self.config.has_credentials() {
            anyhow::bail!("Amadeus client credentials are not configured");
        }

        debug!("Requesting Amadeus access token");

        let response = self
            .client
            .post(self.build_url(TOKEN_PATH))
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", self.config.client_id.as_str()),
                ("client_secret", self.config.client_secret.as_str()),
            ])
            .send()
            .await
            .context("Failed to send token request")?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("Amadeus token request failed: {} - {}", status, truncate_content(&error_text, 300));
            anyhow::bail!("Amadeus token request failed: {}", status);
        }

        let token: TokenResponse = response
            .json()
            .await
            .context("Failed to parse token response")?;

        debug!("Obtained Amadeus token (expires_in={:?})", token.expires_in);
        Ok(token.access_token)
    }

    async fn search_offers(&self, access_token: &str, query: &OfferQuery) -> Result<Vec<FlightOffer>> {
        debug!(
            "Searching offers {} -> {} on {}",
            query.origin, query.destination, query.departure_date
        );

        let max = self.config.max_offers.to_string();
        let response = self
            .client
            .get(self.build_url(OFFERS_PATH))
            .bearer_auth(access_token)
            .query(&[
                ("originLocationCode", query.origin.as_str()),
                ("destinationLocationCode", query.destination.as_str()),
                ("departureDate", query.departure_date.as_str()),
                ("adults", "1"),
                ("nonStop", "true"),
                ("currencyCode", self.config.currency.as_str()),
                ("max", max.as_str()),
            ])
            .send()
            .await
            .context("Failed to send flight offer search")?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            anyhow::bail!(
                "Flight offer search failed: {} - {}",
                status,
                truncate_content(&error_text, 300)
            );
        }

        let offers: FlightOffersResponse = response
            .json()
            .await
            .context("Failed to parse flight offer response")?;

        if let Ok(summary) = serde_json::to_string(&create_offers_log_summary(query, &offers.data)) {
            debug!("📥 Offer search result: {}", summary);
        }

        Ok(offers.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_config(base_url: &str) -> AmadeusConfig {
        AmadeusConfig {
            client_id: "client".to_string(),
            client_secret: "secret".to_string(),
            base_url: base_url.to_string(),
            currency: "AUD".to_string(),
            max_offers: 50,
            timeout: 5,
        }
    }

    #[test]
    fn test_build_url_trims_slash() {
        let provider = AmadeusProvider::new(create_test_config("https://test.api.amadeus.com/")).unwrap();
        assert_eq!(
            provider.build_url(TOKEN_PATH),
            "https://test.api.amadeus.com/v1/security/oauth2/token"
        );
    }

    #[tokio::test]
    async fn test_missing_credentials_skip_network() {
        let mut config = create_test_config("http://127.0.0.1:9");
        config.client_id.clear();
        let provider = AmadeusProvider::new(config).unwrap();

        let err = provider.access_token().await.unwrap_err();
        assert!(err.to_string().contains("not configured"));
    }
}
