// src/db/plato_repo.rs

use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::{Plato, PlatoIngrediente},
};

#[derive(Clone)]
pub struct PlatoRepository {
    pool: PgPool,
}

const COLUMNAS: &str =
    "id, nombre, descripcion, precio_venta, ingredientes, categoria, activo, fecha_creacion";

impl PlatoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Snapshot completo del menú, en orden de inserción (el ranking de
    /// márgenes empata conservando este orden).
    pub async fn get_all(&self) -> Result<Vec<Plato>, AppError> {
        let platos = sqlx::query_as::<_, Plato>(&format!(
            "SELECT {COLUMNAS} FROM platos ORDER BY creado_en ASC"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(platos)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Plato>, AppError> {
        let plato = sqlx::query_as::<_, Plato>(&format!(
            "SELECT {COLUMNAS} FROM platos WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(plato)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        nombre: &str,
        descripcion: &str,
        precio_venta: f64,
        ingredientes: &[PlatoIngrediente],
        categoria: &str,
        activo: bool,
    ) -> Result<Plato, AppError> {
        let plato = sqlx::query_as::<_, Plato>(&format!(
            r#"
            INSERT INTO platos (nombre, descripcion, precio_venta, ingredientes, categoria, activo)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {COLUMNAS}
            "#
        ))
        .bind(nombre)
        .bind(descripcion)
        .bind(precio_venta)
        .bind(Json(ingredientes))
        .bind(categoria)
        .bind(activo)
        .fetch_one(&self.pool)
        .await?;
        Ok(plato)
    }

    /// Actualización parcial; la receta solo se reemplaza si viene en el
    /// payload (no hay merge de líneas).
    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        id: Uuid,
        nombre: Option<&str>,
        descripcion: Option<&str>,
        precio_venta: Option<f64>,
        ingredientes: Option<&[PlatoIngrediente]>,
        categoria: Option<&str>,
        activo: Option<bool>,
    ) -> Result<Option<Plato>, AppError> {
        let plato = sqlx::query_as::<_, Plato>(&format!(
            r#"
            UPDATE platos SET
                nombre = COALESCE($2, nombre),
                descripcion = COALESCE($3, descripcion),
                precio_venta = COALESCE($4, precio_venta),
                ingredientes = COALESCE($5, ingredientes),
                categoria = COALESCE($6, categoria),
                activo = COALESCE($7, activo)
            WHERE id = $1
            RETURNING {COLUMNAS}
            "#
        ))
        .bind(id)
        .bind(nombre)
        .bind(descripcion)
        .bind(precio_venta)
        .bind(ingredientes.map(Json))
        .bind(categoria)
        .bind(activo)
        .fetch_optional(&self.pool)
        .await?;
        Ok(plato)
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let resultado = sqlx::query("DELETE FROM platos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(resultado.rows_affected() > 0)
    }
}
