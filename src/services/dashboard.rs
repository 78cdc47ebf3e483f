//! Dashboard orchestration
//!
//! Sequentially fetches the snapshot and trend data for a request, aggregates
//! it and assembles the chart payloads. Nothing is shared between requests;
//! each call obtains its own access token.

use crate::config::CityTable;
use crate::models::{ChartData, DashboardPage, FlightRecord, RouteAverage, TrendPoint, TrendResponse};
use crate::services::aggregator::{cheapest_offer, daily_trend, route_averages};
use crate::services::fares::FareService;
use crate::services::insights::InsightGenerator;
use crate::services::normalizer::normalize_offers;
use crate::utils::error::{helpers::*, AppResult};
use chrono::{Duration, NaiveDate};
use tracing::{debug, info};

pub const AUTH_FAILURE_MESSAGE: &str = "Could not authenticate with Amadeus API";
pub const MISSING_PARAMS_MESSAGE: &str = "Missing origin or destination parameters";
pub const NO_DATA_SUMMARY: &str = "No data found for the selected destination. This may be due to the route having no availability in the next month or an API error.";
pub const DEFAULT_TREND_TITLE: &str = "Daily Price Trend (Next Month)";

/// Dashboard service
#[derive(Clone)]
pub struct DashboardService {
    fares: FareService,
    insights: InsightGenerator,
    cities: CityTable,
    trend_days: u32,
}

impl DashboardService {
    pub fn new(fares: FareService, insights: InsightGenerator, cities: CityTable, trend_days: u32) -> Self {
        Self {
            fares,
            insights,
            cities,
            trend_days,
        }
    }

    pub fn cities(&self) -> &CityTable {
        &self.cities
    }

    /// Build the full dashboard for `destination` (default: first city)
    pub async fn build_page(&self, destination: Option<&str>, today: NaiveDate) -> AppResult<DashboardPage> {
        let destination = match destination.filter(|d| !d.is_empty()) {
            Some(d) => d.to_string(),
            None => self
                .cities
                .default_code()
                .ok_or_else(|| internal_error("City table is empty"))?
                .to_string(),
        };
        let origins = self.cities.origins_for(&destination);

        info!("Building dashboard for {} from {} origins", destination, origins.len());

        let token = self
            .fares
            .obtain_token()
            .await
            .ok_or_else(|| auth_error(AUTH_FAILURE_MESSAGE))?;

        // Snapshot: tomorrow's offers from every origin
        let snapshot_date = today + Duration::days(1);
        let mut snapshot = Vec::new();
        for origin in &origins {
            let offers = self
                .fares
                .search_flight_deals(&token, origin, &destination, snapshot_date)
                .await;
            snapshot.extend(normalize_offers(&offers, origin, &destination)?);
        }

        // Trend: only the first origin, to bound the number of upstream calls
        let trend_origin = origins.first();
        let trend = match trend_origin {
            Some(origin) => daily_trend(&self.trend_records(&token, origin, &destination, today).await?),
            None => Vec::new(),
        };

        let mut page = DashboardPage {
            selected_destination: destination.clone(),
            popular_routes: ChartData::default(),
            price_trends: ChartData::default(),
            ai_summary: NO_DATA_SUMMARY.to_string(),
            trend_chart_title: DEFAULT_TREND_TITLE.to_string(),
        };

        if let (Some(origin), false) = (trend_origin, trend.is_empty()) {
            page.price_trends = trend_chart(&trend);
            page.trend_chart_title = self.trend_title(origin, &destination);
        }

        let routes = route_averages(&snapshot);
        if !routes.is_empty() {
            page.popular_routes = self.route_chart(&routes, &destination);
            page.ai_summary = self.insights.generate(&routes).await;
        }

        Ok(page)
    }

    /// Trend series for an explicit origin/destination pair
    pub async fn price_trend(
        &self,
        origin: Option<&str>,
        destination: Option<&str>,
        today: NaiveDate,
    ) -> AppResult<TrendResponse> {
        let (origin, destination) = match (
            origin.filter(|o| !o.is_empty()),
            destination.filter(|d| !d.is_empty()),
        ) {
            (Some(o), Some(d)) => (o, d),
            _ => return Err(validation_error(MISSING_PARAMS_MESSAGE)),
        };

        let token = self
            .fares
            .obtain_token()
            .await
            .ok_or_else(|| auth_error(AUTH_FAILURE_MESSAGE))?;

        let trend = daily_trend(&self.trend_records(&token, origin, destination, today).await?);

        if trend.is_empty() {
            return Ok(TrendResponse {
                labels: Vec::new(),
                data: Vec::new(),
                chart_title: format!("No Trend Data for {} to {}", origin, destination),
            });
        }

        let chart = trend_chart(&trend);
        Ok(TrendResponse {
            labels: chart.labels,
            data: chart.data,
            chart_title: self.trend_title(origin, destination),
        })
    }

    /// Cheapest record of every day in the trend window
    pub async fn trend_records(
        &self,
        token: &str,
        origin: &str,
        destination: &str,
        today: NaiveDate,
    ) -> AppResult<Vec<FlightRecord>> {
        let mut cheapest = Vec::new();

        for offset in 1..=i64::from(self.trend_days) {
            let date = today + Duration::days(offset);
            let offers = self.fares.search_flight_deals(token, origin, destination, date).await;
            if offers.is_empty() {
                continue;
            }

            let records = normalize_offers(&offers, origin, destination)?;
            if let Some(record) = cheapest_offer(&records) {
                cheapest.push(record.clone());
            }
        }

        debug!(
            "Trend {} -> {}: {} of {} days with offers",
            origin,
            destination,
            cheapest.len(),
            self.trend_days
        );
        Ok(cheapest)
    }

    /// Bar chart payload for the snapshot
    pub fn route_chart(&self, routes: &[RouteAverage], destination: &str) -> ChartData {
        let destination_name = self.cities.display_name(destination);
        ChartData {
            labels: routes
                .iter()
                .map(|r| format!("{} -> {}", self.cities.display_name(&r.origin), destination_name))
                .collect(),
            data: routes.iter().map(|r| r.average_price).collect(),
            origin_codes: Some(routes.iter().map(|r| r.origin.clone()).collect()),
        }
    }

    fn trend_title(&self, origin: &str, destination: &str) -> String {
        format!(
            "Daily Price Trend: {} to {}",
            self.cities.display_name(origin),
            self.cities.display_name(destination)
        )
    }
}

/// Line chart payload for a trend
pub fn trend_chart(points: &[TrendPoint]) -> ChartData {
    ChartData {
        labels: points.iter().map(|p| p.date.clone()).collect(),
        data: points.iter().map(|p| p.average_price).collect(),
        origin_codes: None,
    }
}
