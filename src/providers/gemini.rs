//! Gemini Provider implementation
//!
//! Single-shot `generateContent` call

use super::InsightModel;
use crate::config::GeminiConfig;
use crate::models::gemini::*;
use crate::utils::logging::truncate_content;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error, warn};

/// Gemini Provider
pub struct GeminiProvider {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GeminiProvider {
    /// Create a provider; fails when no usable API key is configured
    pub fn new(config: &GeminiConfig) -> Result<Self> {
        let api_key = config
            .usable_key()
            .context("Gemini API key is not configured")?
            .to_string();

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .user_agent(concat!("fareboard/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
        })
    }

    /// Build the request URL
    fn build_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl InsightModel for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate(&self, prompt: &str) -> Result<Option<String>> {
        debug!("📤 Gemini prompt: {}", truncate_content(prompt, 200));

        let request = GeminiRequest::from_prompt(prompt);

        let response = self
            .client
            .post(self.build_url())
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await
            .context("Failed to send Gemini request")?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("Gemini API request failed: {} - {}", status, truncate_content(&error_text, 300));
            anyhow::bail!("Gemini API request failed: {}", status);
        }

        let gemini_response: GeminiResponse = response
            .json()
            .await
            .context("Failed to parse Gemini response")?;

        let text = gemini_response.text();
        match &text {
            Some(t) => debug!("📥 Gemini response: {}", truncate_content(t, 200)),
            None => warn!("Gemini returned no usable content"),
        }

        Ok(text)
    }
}
