// src/db/venta_repo.rs

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{common::error::AppError, models::Venta};

#[derive(Clone)]
pub struct VentaRepository {
    pool: PgPool,
}

impl VentaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Snapshot completo del historial de ventas, cronológico.
    pub async fn get_all(&self) -> Result<Vec<Venta>, AppError> {
        let ventas = sqlx::query_as::<_, Venta>(
            "SELECT id, plato_id, cantidad, fecha, total FROM ventas ORDER BY fecha ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(ventas)
    }

    pub async fn get_by_plato(&self, plato_id: Uuid) -> Result<Vec<Venta>, AppError> {
        let ventas = sqlx::query_as::<_, Venta>(
            "SELECT id, plato_id, cantidad, fecha, total
             FROM ventas WHERE plato_id = $1 ORDER BY fecha ASC",
        )
        .bind(plato_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(ventas)
    }

    pub async fn create(
        &self,
        plato_id: Uuid,
        cantidad: i32,
        fecha: DateTime<Utc>,
        total: f64,
    ) -> Result<Venta, AppError> {
        let venta = sqlx::query_as::<_, Venta>(
            r#"
            INSERT INTO ventas (plato_id, cantidad, fecha, total)
            VALUES ($1, $2, $3, $4)
            RETURNING id, plato_id, cantidad, fecha, total
            "#,
        )
        .bind(plato_id)
        .bind(cantidad)
        .bind(fecha)
        .bind(total)
        .fetch_one(&self.pool)
        .await?;
        Ok(venta)
    }
}
