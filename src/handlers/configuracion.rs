// src/handlers/configuracion.rs

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;

use crate::{common::error::AppError, config::AppState};

// POST /api/configuracion/reset
#[utoipa::path(
    post,
    path = "/api/configuracion/reset",
    tag = "Configuracion",
    responses(
        (status = 200, description = "Datos borrados y demo vuelta a sembrar")
    )
)]
pub async fn reset_datos(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    app_state.seed_service.reset().await?;
    tracing::info!("♻️ Datos reiniciados a la demo");
    Ok((StatusCode::OK, Json(json!({ "ok": true }))))
}
