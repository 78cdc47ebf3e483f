//! AI insight generation
//!
//! Turns the route-average table into a prompt, sends it to the configured
//! [`InsightModel`] and converts the answer into an HTML fragment. Every
//! failure path yields a fixed paragraph instead of an error.

use crate::models::RouteAverage;
use crate::providers::InsightModel;
use crate::services::markup::markdown_to_html;
use std::sync::Arc;
use tracing::{debug, error, warn};

pub const NOT_CONFIGURED_HTML: &str = "<p>Gemini API key not configured. Insights are unavailable.</p>";
pub const NO_DATA_HTML: &str = "<p>No flight data was available to generate insights.</p>";
pub const BLOCKED_HTML: &str =
    "<p>The AI response was blocked for safety reasons. Please try a different query.</p>";
pub const UNAVAILABLE_HTML: &str =
    "<p>Could not generate AI insights. The Gemini API might be unavailable or the key is invalid.</p>";

const ROUTE_COLUMN: &str = "Route from";

/// Insight generator
#[derive(Clone)]
pub struct InsightGenerator {
    model: Option<Arc<dyn InsightModel>>,
    currency: String,
}

impl InsightGenerator {
    /// `model` is `None` when no API key is configured
    pub fn new(model: Option<Arc<dyn InsightModel>>, currency: impl Into<String>) -> Self {
        Self {
            model,
            currency: currency.into(),
        }
    }

    /// Produce the HTML summary for the snapshot routes
    pub async fn generate(&self, routes: &[RouteAverage]) -> String {
        let Some(model) = &self.model else {
            return NOT_CONFIGURED_HTML.to_string();
        };
        if routes.is_empty() {
            return NO_DATA_HTML.to_string();
        }

        let prompt = self.build_prompt(routes);
        debug!("Requesting insights from {} for {} routes", model.name(), routes.len());

        match model.generate(&prompt).await {
            Ok(Some(text)) => markdown_to_html(&text),
            Ok(None) => {
                warn!("Insight response had no usable content");
                BLOCKED_HTML.to_string()
            }
            Err(e) => {
                error!("Error getting Gemini insights: {:#}", e);
                UNAVAILABLE_HTML.to_string()
            }
        }
    }

    /// Build the analyst prompt around a table of the route averages
    pub fn build_prompt(&self, routes: &[RouteAverage]) -> String {
        let table = render_table(routes, &self.price_column());
        format!(
            "You are a market analyst for a chain of hostels in Australia.\n\
             Your goal is to help the marketing team understand airline booking trends to better target customers.\n\
             Based on the following summary of average flight prices from various cities, provide actionable insights.\n\
             \n\
             Data Summary (Average one-way price in {currency} to the destination):\n\
             {table}\n\
             \n\
             Please provide a brief summary as a list of key takeaways. Use bullet points (starting with '*') for list items.\n\
             For the \"General advice\" section, please make \"**General Marketing Advice:**\" a standalone bolded line, \
             followed by a separate bulleted list of the specific advice points.\n\
             \n\
             Format your response using simple markdown. Use bullet points (starting with '*') for lists and bold text for emphasis. \
             Do not use headings.\n",
            currency = self.currency,
            table = table,
        )
    }

    fn price_column(&self) -> String {
        format!("Average Price ({})", self.currency)
    }
}

/// Fixed-width table with a row index, one row per route
///
/// ```text
///   Route from  Average Price (AUD)
/// 0        MEL               200.00
/// ```
pub fn render_table(routes: &[RouteAverage], price_column: &str) -> String {
    let index: Vec<String> = (0..routes.len()).map(|i| i.to_string()).collect();
    let prices: Vec<String> = routes.iter().map(|r| format!("{:.2}", r.average_price)).collect();

    let index_width = index.iter().map(String::len).max().unwrap_or(0);
    let origin_width = routes
        .iter()
        .map(|r| r.origin.chars().count())
        .chain(std::iter::once(ROUTE_COLUMN.len()))
        .max()
        .unwrap_or(0);
    let price_width = prices
        .iter()
        .map(String::len)
        .chain(std::iter::once(price_column.len()))
        .max()
        .unwrap_or(0);

    let mut lines = Vec::with_capacity(routes.len() + 1);
    lines.push(format!(
        "{:>iw$}  {:>ow$}  {:>pw$}",
        "",
        ROUTE_COLUMN,
        price_column,
        iw = index_width,
        ow = origin_width,
        pw = price_width
    ));
    for ((i, route), price) in index.iter().zip(routes).zip(&prices) {
        lines.push(format!(
            "{:<iw$}  {:>ow$}  {:>pw$}",
            i,
            route.origin,
            price,
            iw = index_width,
            ow = origin_width,
            pw = price_width
        ));
    }
    lines.join("\n")
}
