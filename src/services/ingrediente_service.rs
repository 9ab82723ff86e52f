// src/services/ingrediente_service.rs

use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::IngredienteRepository,
    models::{Ingrediente, UnidadMedida},
};

#[derive(Clone)]
pub struct IngredienteService {
    repo: IngredienteRepository,
}

impl IngredienteService {
    pub fn new(repo: IngredienteRepository) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> Result<Vec<Ingrediente>, AppError> {
        self.repo.get_all().await
    }

    pub async fn get(&self, id: Uuid) -> Result<Ingrediente, AppError> {
        self.repo.get_by_id(id).await?.ok_or(AppError::IngredienteNotFound)
    }

    pub async fn create(
        &self,
        nombre: &str,
        unidad: UnidadMedida,
        costo_unitario: f64,
        stock: f64,
    ) -> Result<Ingrediente, AppError> {
        self.repo.create(nombre, unidad, costo_unitario, stock).await
    }

    pub async fn update(
        &self,
        id: Uuid,
        nombre: Option<&str>,
        unidad: Option<UnidadMedida>,
        costo_unitario: Option<f64>,
        stock: Option<f64>,
    ) -> Result<Ingrediente, AppError> {
        self.repo
            .update(id, nombre, unidad, costo_unitario, stock)
            .await?
            .ok_or(AppError::IngredienteNotFound)
    }

    /// Borrado físico. Las recetas que referencien este ingrediente quedan
    /// con la línea colgando; el cálculo de costos la trata como costo 0.
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        if self.repo.delete(id).await? {
            Ok(())
        } else {
            Err(AppError::IngredienteNotFound)
        }
    }
}
