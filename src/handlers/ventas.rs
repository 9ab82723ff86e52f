// src/handlers/ventas.rs

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::{common::error::AppError, config::AppState, models::Venta};

// ---
// Payloads
// ---
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateVentaPayload {
    pub plato_id: Uuid,

    #[validate(range(min = 1, message = "La cantidad debe ser al menos 1."))]
    pub cantidad: i32,

    /// Momento de la venta; si no viene, se usa el instante actual
    pub fecha: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct VentasQuery {
    /// Filtra las ventas de un plato concreto
    pub plato_id: Option<Uuid>,
}

// ---
// Handlers
// ---

// POST /api/ventas
#[utoipa::path(
    post,
    path = "/api/ventas",
    tag = "Ventas",
    request_body = CreateVentaPayload,
    responses(
        (status = 201, description = "Venta registrada (el total sale del precio vigente)", body = Venta),
        (status = 400, description = "Payload inválido"),
        (status = 404, description = "El plato no existe")
    )
)]
pub async fn create_venta(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateVentaPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let venta = app_state
        .venta_service
        .create(payload.plato_id, payload.cantidad, payload.fecha)
        .await?;

    Ok((StatusCode::CREATED, Json(venta)))
}

// GET /api/ventas
#[utoipa::path(
    get,
    path = "/api/ventas",
    tag = "Ventas",
    params(VentasQuery),
    responses(
        (status = 200, description = "Historial de ventas, cronológico", body = Vec<Venta>)
    )
)]
pub async fn get_all_ventas(
    State(app_state): State<AppState>,
    Query(query): Query<VentasQuery>,
) -> Result<impl IntoResponse, AppError> {
    let ventas = match query.plato_id {
        Some(plato_id) => app_state.venta_service.list_by_plato(plato_id).await?,
        None => app_state.venta_service.list().await?,
    };
    Ok((StatusCode::OK, Json(ventas)))
}
