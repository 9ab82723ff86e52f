// src/handlers/platos.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    models::{Plato, PlatoIngrediente},
    services::plato_service::CostoPlato,
};

use super::ingredientes::validar_no_negativo;

// ---
// Payloads
// ---
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlatoPayload {
    #[validate(length(min = 1, message = "El nombre es obligatorio."))]
    pub nombre: String,

    #[serde(default)]
    pub descripcion: String,

    #[validate(custom(function = "validar_no_negativo"))]
    pub precio_venta: f64,

    // La receta puede venir vacía; las cantidades ilegibles entran como 0
    #[serde(default)]
    pub ingredientes: Vec<PlatoIngrediente>,

    #[serde(default)]
    pub categoria: String,

    #[serde(default = "activo_por_defecto")]
    pub activo: bool,
}

fn activo_por_defecto() -> bool {
    true
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePlatoPayload {
    #[validate(length(min = 1, message = "El nombre no puede quedar vacío."))]
    pub nombre: Option<String>,

    pub descripcion: Option<String>,

    #[validate(custom(function = "validar_no_negativo"))]
    pub precio_venta: Option<f64>,

    pub ingredientes: Option<Vec<PlatoIngrediente>>,

    pub categoria: Option<String>,

    pub activo: Option<bool>,
}

// ---
// Handlers
// ---

// POST /api/platos
#[utoipa::path(
    post,
    path = "/api/platos",
    tag = "Platos",
    request_body = CreatePlatoPayload,
    responses(
        (status = 201, description = "Plato creado", body = Plato),
        (status = 400, description = "Payload inválido")
    )
)]
pub async fn create_plato(
    State(app_state): State<AppState>,
    Json(payload): Json<CreatePlatoPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let plato = app_state
        .plato_service
        .create(
            &payload.nombre,
            &payload.descripcion,
            payload.precio_venta,
            &payload.ingredientes,
            &payload.categoria,
            payload.activo,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(plato)))
}

// GET /api/platos
#[utoipa::path(
    get,
    path = "/api/platos",
    tag = "Platos",
    responses(
        (status = 200, description = "El menú completo", body = Vec<Plato>)
    )
)]
pub async fn get_all_platos(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let platos = app_state.plato_service.list().await?;
    Ok((StatusCode::OK, Json(platos)))
}

// GET /api/platos/{id}
#[utoipa::path(
    get,
    path = "/api/platos/{id}",
    tag = "Platos",
    params(("id" = Uuid, Path, description = "ID del plato")),
    responses(
        (status = 200, description = "Plato", body = Plato),
        (status = 404, description = "No existe")
    )
)]
pub async fn get_plato(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let plato = app_state.plato_service.get(id).await?;
    Ok((StatusCode::OK, Json(plato)))
}

// GET /api/platos/{id}/costo
#[utoipa::path(
    get,
    path = "/api/platos/{id}/costo",
    tag = "Platos",
    params(("id" = Uuid, Path, description = "ID del plato")),
    responses(
        (status = 200, description = "Costo de ingredientes y margen del plato", body = CostoPlato),
        (status = 404, description = "No existe")
    )
)]
pub async fn get_costo_plato(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let costo = app_state.plato_service.costo(id).await?;
    Ok((StatusCode::OK, Json(costo)))
}

// PUT /api/platos/{id}
#[utoipa::path(
    put,
    path = "/api/platos/{id}",
    tag = "Platos",
    params(("id" = Uuid, Path, description = "ID del plato")),
    request_body = UpdatePlatoPayload,
    responses(
        (status = 200, description = "Plato actualizado", body = Plato),
        (status = 404, description = "No existe")
    )
)]
pub async fn update_plato(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdatePlatoPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let plato = app_state
        .plato_service
        .update(
            id,
            payload.nombre.as_deref(),
            payload.descripcion.as_deref(),
            payload.precio_venta,
            payload.ingredientes.as_deref(),
            payload.categoria.as_deref(),
            payload.activo,
        )
        .await?;

    Ok((StatusCode::OK, Json(plato)))
}

// DELETE /api/platos/{id}
#[utoipa::path(
    delete,
    path = "/api/platos/{id}",
    tag = "Platos",
    params(("id" = Uuid, Path, description = "ID del plato")),
    responses(
        (status = 204, description = "Plato eliminado"),
        (status = 404, description = "No existe")
    )
)]
pub async fn delete_plato(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.plato_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
