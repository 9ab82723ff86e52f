// src/db/ingrediente_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::{Ingrediente, UnidadMedida},
};

#[derive(Clone)]
pub struct IngredienteRepository {
    pool: PgPool,
}

impl IngredienteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Snapshot completo del catálogo, en orden de inserción. Es la única
    /// capacidad que el motor de KPIs necesita de este repositorio.
    pub async fn get_all(&self) -> Result<Vec<Ingrediente>, AppError> {
        let ingredientes = sqlx::query_as::<_, Ingrediente>(
            "SELECT id, nombre, unidad, costo_unitario, stock, fecha_actualizacion
             FROM ingredientes ORDER BY creado_en ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(ingredientes)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Ingrediente>, AppError> {
        let ingrediente = sqlx::query_as::<_, Ingrediente>(
            "SELECT id, nombre, unidad, costo_unitario, stock, fecha_actualizacion
             FROM ingredientes WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(ingrediente)
    }

    pub async fn create(
        &self,
        nombre: &str,
        unidad: UnidadMedida,
        costo_unitario: f64,
        stock: f64,
    ) -> Result<Ingrediente, AppError> {
        let ingrediente = sqlx::query_as::<_, Ingrediente>(
            r#"
            INSERT INTO ingredientes (nombre, unidad, costo_unitario, stock)
            VALUES ($1, $2, $3, $4)
            RETURNING id, nombre, unidad, costo_unitario, stock, fecha_actualizacion
            "#,
        )
        .bind(nombre)
        .bind(unidad)
        .bind(costo_unitario)
        .bind(stock)
        .fetch_one(&self.pool)
        .await?;
        Ok(ingrediente)
    }

    /// Actualización parcial: los campos en `None` conservan su valor.
    /// `fecha_actualizacion` se renueva siempre.
    pub async fn update(
        &self,
        id: Uuid,
        nombre: Option<&str>,
        unidad: Option<UnidadMedida>,
        costo_unitario: Option<f64>,
        stock: Option<f64>,
    ) -> Result<Option<Ingrediente>, AppError> {
        let ingrediente = sqlx::query_as::<_, Ingrediente>(
            r#"
            UPDATE ingredientes SET
                nombre = COALESCE($2, nombre),
                unidad = COALESCE($3, unidad),
                costo_unitario = COALESCE($4, costo_unitario),
                stock = COALESCE($5, stock),
                fecha_actualizacion = now()
            WHERE id = $1
            RETURNING id, nombre, unidad, costo_unitario, stock, fecha_actualizacion
            "#,
        )
        .bind(id)
        .bind(nombre)
        .bind(unidad)
        .bind(costo_unitario)
        .bind(stock)
        .fetch_optional(&self.pool)
        .await?;
        Ok(ingrediente)
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let resultado = sqlx::query("DELETE FROM ingredientes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(resultado.rows_affected() > 0)
    }
}
