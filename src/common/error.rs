use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

// Error de aplicación único, con `thiserror` para la ergonomía de los `#[from]`.
// Solo existe en el borde HTTP/almacenamiento: el motor de KPIs nunca falla,
// devuelve valores bien definidos.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Error de validación")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Ingrediente no encontrado")]
    IngredienteNotFound,

    #[error("Plato no encontrado")]
    PlatoNotFound,

    // Variante para errores de base de datos
    #[error("Error de base de datos")]
    DatabaseError(#[from] sqlx::Error),

    // Variante genérica para cualquier otro error inesperado
    #[error("Error interno del servidor")]
    InternalServerError(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            // Devuelve el detalle campo a campo de la validación
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "error": "Uno o más campos son inválidos.",
                    "details": details,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::IngredienteNotFound => {
                (StatusCode::NOT_FOUND, "Ingrediente no encontrado.")
            }
            AppError::PlatoNotFound => (StatusCode::NOT_FOUND, "Plato no encontrado."),

            // Todo lo demás (DatabaseError, InternalServerError) es un 500.
            // `tracing` deja registrado el mensaje detallado de `thiserror`.
            ref e => {
                tracing::error!("Error interno del servidor: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Ocurrió un error inesperado.")
            }
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
