// src/handlers/ingredientes.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::{
    common::error::AppError,
    config::AppState,
    models::{Ingrediente, UnidadMedida},
};

// ---
// Validación compartida
// ---
pub(crate) fn validar_no_negativo(valor: f64) -> Result<(), ValidationError> {
    if valor < 0.0 || !valor.is_finite() {
        let mut err = ValidationError::new("range");
        err.add_param("min".into(), &0.0);
        err.message = Some("El valor no puede ser negativo.".into());
        return Err(err);
    }
    Ok(())
}

// ---
// Payloads
// ---
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateIngredientePayload {
    #[validate(length(min = 1, message = "El nombre es obligatorio."))]
    pub nombre: String,

    pub unidad: UnidadMedida,

    #[validate(custom(function = "validar_no_negativo"))]
    pub costo_unitario: f64,

    #[validate(custom(function = "validar_no_negativo"))]
    #[serde(default)] // Si el JSON no trae stock, arranca en 0
    pub stock: f64,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateIngredientePayload {
    #[validate(length(min = 1, message = "El nombre no puede quedar vacío."))]
    pub nombre: Option<String>,

    pub unidad: Option<UnidadMedida>,

    #[validate(custom(function = "validar_no_negativo"))]
    pub costo_unitario: Option<f64>,

    #[validate(custom(function = "validar_no_negativo"))]
    pub stock: Option<f64>,
}

// ---
// Handlers
// ---

// POST /api/ingredientes
#[utoipa::path(
    post,
    path = "/api/ingredientes",
    tag = "Ingredientes",
    request_body = CreateIngredientePayload,
    responses(
        (status = 201, description = "Ingrediente registrado", body = Ingrediente),
        (status = 400, description = "Payload inválido")
    )
)]
pub async fn create_ingrediente(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateIngredientePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let ingrediente = app_state
        .ingrediente_service
        .create(&payload.nombre, payload.unidad, payload.costo_unitario, payload.stock)
        .await?;

    Ok((StatusCode::CREATED, Json(ingrediente)))
}

// GET /api/ingredientes
#[utoipa::path(
    get,
    path = "/api/ingredientes",
    tag = "Ingredientes",
    responses(
        (status = 200, description = "Catálogo completo de ingredientes", body = Vec<Ingrediente>)
    )
)]
pub async fn get_all_ingredientes(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let ingredientes = app_state.ingrediente_service.list().await?;
    Ok((StatusCode::OK, Json(ingredientes)))
}

// GET /api/ingredientes/{id}
#[utoipa::path(
    get,
    path = "/api/ingredientes/{id}",
    tag = "Ingredientes",
    params(("id" = Uuid, Path, description = "ID del ingrediente")),
    responses(
        (status = 200, description = "Ingrediente", body = Ingrediente),
        (status = 404, description = "No existe")
    )
)]
pub async fn get_ingrediente(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let ingrediente = app_state.ingrediente_service.get(id).await?;
    Ok((StatusCode::OK, Json(ingrediente)))
}

// PUT /api/ingredientes/{id}
#[utoipa::path(
    put,
    path = "/api/ingredientes/{id}",
    tag = "Ingredientes",
    params(("id" = Uuid, Path, description = "ID del ingrediente")),
    request_body = UpdateIngredientePayload,
    responses(
        (status = 200, description = "Ingrediente actualizado", body = Ingrediente),
        (status = 404, description = "No existe")
    )
)]
pub async fn update_ingrediente(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateIngredientePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let ingrediente = app_state
        .ingrediente_service
        .update(
            id,
            payload.nombre.as_deref(),
            payload.unidad,
            payload.costo_unitario,
            payload.stock,
        )
        .await?;

    Ok((StatusCode::OK, Json(ingrediente)))
}

// DELETE /api/ingredientes/{id}
#[utoipa::path(
    delete,
    path = "/api/ingredientes/{id}",
    tag = "Ingredientes",
    params(("id" = Uuid, Path, description = "ID del ingrediente")),
    responses(
        (status = 204, description = "Ingrediente eliminado"),
        (status = 404, description = "No existe")
    )
)]
pub async fn delete_ingrediente(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.ingrediente_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
