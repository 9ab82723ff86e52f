// src/models/venta.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Una transacción de venta de un plato.
///
/// `plato_id` no tiene FK: si el plato se borra después, la venta queda
/// colgando y los cálculos de KPI simplemente la ignoran.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Venta {
    pub id: Uuid,
    pub plato_id: Uuid,
    pub cantidad: i32,
    pub fecha: DateTime<Utc>,
    pub total: f64,
}
