//! Dashboard page handler
//!
//! GET/POST /

use crate::handlers::AppState;
use crate::utils::error::AppError;
use crate::views::render_dashboard;
use axum::{
    extract::{rejection::FormRejection, Form, State},
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, error};

/// Selector form; also accepted as a query string on GET
#[derive(Debug, Default, Deserialize)]
pub struct DashboardForm {
    pub destination: Option<String>,
}

/// Render the dashboard
///
/// A body that is not a form (or no body at all) selects the default
/// destination instead of rejecting the request.
pub async fn index(
    State(state): State<Arc<AppState>>,
    form: Result<Form<DashboardForm>, FormRejection>,
) -> Response {
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            debug!("Ignoring unreadable dashboard form: {}", rejection);
            DashboardForm::default()
        }
    };
    debug!("Dashboard requested for destination: {:?}", form.destination);

    let today = chrono::Local::now().date_naive();
    match state.dashboard.build_page(form.destination.as_deref(), today).await {
        Ok(page) => Html(render_dashboard(&page, state.dashboard.cities())).into_response(),
        Err(e) => {
            error!("Dashboard unavailable: {}", e);
            (e.status_code(), error_text(&e)).into_response()
        }
    }
}

/// Plain-text body shown in place of the page
fn error_text(err: &AppError) -> String {
    match err {
        AppError::Authentication(message) => {
            format!("Error: {}. Please check your API credentials.", message)
        }
        other => format!("Error: {}", other),
    }
}
