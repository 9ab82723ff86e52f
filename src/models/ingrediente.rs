// src/models/ingrediente.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

// Unidad de medida de un ingrediente. En la base es un enum de Postgres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "unidad_medida", rename_all = "lowercase")] // Base de datos
#[serde(rename_all = "lowercase")] // JSON
pub enum UnidadMedida {
    Kg,     // masa
    Litro,  // volumen
    Unidad, // conteo
}

/// Materia prima con precio y stock, consumida por las recetas.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Ingrediente {
    pub id: Uuid,
    pub nombre: String,
    pub unidad: UnidadMedida,
    pub costo_unitario: f64,
    pub stock: f64,
    pub fecha_actualizacion: DateTime<Utc>,
}
