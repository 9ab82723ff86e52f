// src/services/dashboard_service.rs

use std::sync::Arc;

use chrono::Utc;

use crate::{
    common::error::AppError,
    db::{IngredienteRepository, PlatoRepository, VentaRepository},
    kpi::{self, KpiParams, precios::HistorialPrecios},
    models::DashboardKpis,
};

/// Orquesta el motor de KPIs: toma los tres snapshots del almacenamiento y
/// se los pasa al cálculo puro. Toda la matemática vive en `kpi`.
#[derive(Clone)]
pub struct DashboardService {
    ingrediente_repo: IngredienteRepository,
    plato_repo: PlatoRepository,
    venta_repo: VentaRepository,
    // Detrás del trait para poder cambiar el simulador por histórico real
    historial: Arc<dyn HistorialPrecios + Send + Sync>,
    params: KpiParams,
}

impl DashboardService {
    pub fn new(
        ingrediente_repo: IngredienteRepository,
        plato_repo: PlatoRepository,
        venta_repo: VentaRepository,
        historial: Arc<dyn HistorialPrecios + Send + Sync>,
        params: KpiParams,
    ) -> Self {
        Self { ingrediente_repo, plato_repo, venta_repo, historial, params }
    }

    pub async fn get_kpis(&self) -> Result<DashboardKpis, AppError> {
        let ingredientes = self.ingrediente_repo.get_all().await?;
        let platos = self.plato_repo.get_all().await?;
        let ventas = self.venta_repo.get_all().await?;

        Ok(kpi::calcular_kpis(
            &ingredientes,
            &platos,
            &ventas,
            Utc::now(),
            self.historial.as_ref(),
            &self.params,
        ))
    }
}
