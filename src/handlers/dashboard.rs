// src/handlers/dashboard.rs

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::{common::error::AppError, config::AppState, models::DashboardKpis};

// GET /api/dashboard/kpis
#[utoipa::path(
    get,
    path = "/api/dashboard/kpis",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Snapshot de KPIs del menú, recalculado en cada request", body = DashboardKpis)
    )
)]
pub async fn get_kpis(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let kpis = app_state.dashboard_service.get_kpis().await?;
    Ok((StatusCode::OK, Json(kpis)))
}
