// src/handlers/dashboard.rs

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::{common::error::AppError, config::AppState, models::dashboard::DashboardStats};

// GET /dashboard/stats/
#[utoipa::path(
    get,
    path = "/dashboard/stats/",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Contadores do painel", body = DashboardStats)
    )
)]
pub async fn stats(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let stats = app_state.dashboard_service.stats().await?;
    Ok((StatusCode::OK, Json(stats)))
}
