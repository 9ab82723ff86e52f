// src/services/venta_service.rs

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{PlatoRepository, VentaRepository},
    models::{Plato, Venta},
};

#[derive(Clone)]
pub struct VentaService {
    repo: VentaRepository,
    plato_repo: PlatoRepository,
}

impl VentaService {
    pub fn new(repo: VentaRepository, plato_repo: PlatoRepository) -> Self {
        Self { repo, plato_repo }
    }

    pub async fn list(&self) -> Result<Vec<Venta>, AppError> {
        self.repo.get_all().await
    }

    pub async fn list_by_plato(&self, plato_id: Uuid) -> Result<Vec<Venta>, AppError> {
        self.repo.get_by_plato(plato_id).await
    }

    /// Registra una venta. El total se calcula una sola vez con el precio
    /// vigente del plato; después queda congelado en el registro.
    pub async fn create(
        &self,
        plato_id: Uuid,
        cantidad: i32,
        fecha: Option<DateTime<Utc>>,
    ) -> Result<Venta, AppError> {
        let plato = self.plato_repo.get_by_id(plato_id).await?;
        let total = total_venta(plato.as_ref(), cantidad)?;

        self.repo
            .create(plato_id, cantidad, fecha.unwrap_or_else(Utc::now), total)
            .await
    }
}

/// Total de la transacción al precio vigente. Vender un plato que no existe
/// en el menú se rechaza; no se aceptan ventas colgantes nuevas (las que
/// quedan colgando por un borrado posterior sí son válidas).
pub(crate) fn total_venta(plato: Option<&Plato>, cantidad: i32) -> Result<f64, AppError> {
    let plato = plato.ok_or(AppError::PlatoNotFound)?;
    Ok(plato.precio_venta * cantidad as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kpi::pruebas::plato;

    #[test]
    fn el_total_sale_del_precio_vigente() {
        let p = plato("Pasta Carbonara", 13.5, &[]);
        assert_eq!(total_venta(Some(&p), 3).unwrap(), 40.5);
    }

    #[test]
    fn vender_un_plato_inexistente_falla_con_not_found() {
        let err = total_venta(None, 2).unwrap_err();
        assert!(matches!(err, AppError::PlatoNotFound));
    }
}
