//! HTTP handlers module
//!
//! Contains all HTTP endpoint handling logic

pub mod dashboard;
pub mod health;
pub mod trend;

use crate::config::Settings;
use crate::middleware::logging::request_logging_middleware;
use crate::providers::{AmadeusProvider, FareProvider, GeminiProvider, InsightModel};
use crate::services::{DashboardService, FareService, InsightGenerator};
use anyhow::Result;
use axum::{middleware, routing::get, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    pub dashboard: DashboardService,
}

impl AppState {
    /// Wire the services around the given upstream capabilities
    pub fn new(
        settings: Settings,
        fare_provider: Arc<dyn FareProvider>,
        insight_model: Option<Arc<dyn InsightModel>>,
    ) -> Self {
        let insights = InsightGenerator::new(insight_model, settings.amadeus.currency.clone());
        let dashboard = DashboardService::new(
            FareService::new(fare_provider),
            insights,
            settings.dashboard.cities.clone(),
            settings.dashboard.trend_days,
        );

        Self { settings, dashboard }
    }
}

/// Create application router with the HTTP-backed providers
pub async fn create_router(settings: Settings) -> Result<Router> {
    let fare_provider: Arc<dyn FareProvider> = Arc::new(AmadeusProvider::new(settings.amadeus.clone())?);

    let insight_model: Option<Arc<dyn InsightModel>> = if settings.gemini.is_configured() {
        info!("Gemini insights enabled (model: {})", settings.gemini.model);
        Some(Arc::new(GeminiProvider::new(&settings.gemini)?))
    } else {
        None
    };

    let state = Arc::new(AppState::new(settings, fare_provider, insight_model));
    Ok(create_router_with_state(state))
}

/// Create application router around an existing state
pub fn create_router_with_state(state: Arc<AppState>) -> Router {
    let cors_enabled = state.settings.security.cors_enabled;

    let router = Router::new()
        .route("/", get(dashboard::index).post(dashboard::index))
        .route("/api/price-trend", get(trend::price_trend))
        .route("/health", get(health::health_check))
        .route("/health/live", get(health::liveness_check))
        .layer(middleware::from_fn_with_state(state.clone(), request_logging_middleware))
        .with_state(state)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()));

    if cors_enabled {
        router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
    } else {
        router
    }
}
