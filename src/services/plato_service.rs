// src/services/plato_service.rs

use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{IngredienteRepository, PlatoRepository},
    kpi::costos::{costo_plato, margen_plato},
    models::{Plato, PlatoIngrediente},
};

#[derive(Clone)]
pub struct PlatoService {
    repo: PlatoRepository,
    ingrediente_repo: IngredienteRepository,
}

/// Costo y margen calculados de un plato (para la vista calculadora).
#[derive(Debug, Clone, serde::Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CostoPlato {
    pub costo: f64,
    /// `null` cuando el precio de venta es 0 y el margen no está definido
    pub margen: Option<f64>,
}

impl PlatoService {
    pub fn new(repo: PlatoRepository, ingrediente_repo: IngredienteRepository) -> Self {
        Self { repo, ingrediente_repo }
    }

    pub async fn list(&self) -> Result<Vec<Plato>, AppError> {
        self.repo.get_all().await
    }

    pub async fn get(&self, id: Uuid) -> Result<Plato, AppError> {
        self.repo.get_by_id(id).await?.ok_or(AppError::PlatoNotFound)
    }

    pub async fn create(
        &self,
        nombre: &str,
        descripcion: &str,
        precio_venta: f64,
        ingredientes: &[PlatoIngrediente],
        categoria: &str,
        activo: bool,
    ) -> Result<Plato, AppError> {
        self.repo
            .create(nombre, descripcion, precio_venta, ingredientes, categoria, activo)
            .await
    }

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
    ) -> Result<Plato, AppError> {
        self.repo
            .update(id, nombre, descripcion, precio_venta, ingredientes, categoria, activo)
            .await?
            .ok_or(AppError::PlatoNotFound)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        if self.repo.delete(id).await? {
            Ok(())
        } else {
            Err(AppError::PlatoNotFound)
        }
    }

    /// Costo y margen del plato contra la lista de precios vigente.
    pub async fn costo(&self, id: Uuid) -> Result<CostoPlato, AppError> {
        let plato = self.get(id).await?;
        let ingredientes = self.ingrediente_repo.get_all().await?;
        Ok(CostoPlato {
            costo: costo_plato(&plato, &ingredientes),
            margen: margen_plato(&plato, &ingredientes),
        })
    }
}
