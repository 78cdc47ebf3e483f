//! Price trend API handler
//!
//! GET /api/price-trend?origin=MEL&destination=SYD

use crate::handlers::AppState;
use crate::models::TrendResponse;
use crate::utils::error::AppResult;
use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

/// Query parameters; both are required but validated by the service so a
/// missing value yields the JSON error body instead of a rejection
#[derive(Debug, Default, Deserialize)]
pub struct TrendParams {
    pub origin: Option<String>,
    pub destination: Option<String>,
}

pub async fn price_trend(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TrendParams>,
) -> AppResult<Json<TrendResponse>> {
    debug!("Price trend requested: {:?} -> {:?}", params.origin, params.destination);

    let today = chrono::Local::now().date_naive();
    let response = state
        .dashboard
        .price_trend(params.origin.as_deref(), params.destination.as_deref(), today)
        .await?;

    Ok(Json(response))
}
