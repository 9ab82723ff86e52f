// src/kpi/precios.rs

use rand::Rng;

use crate::models::{Ingrediente, PrecioIngrediente, SemanaPrecios};

/// Fuente de la serie semanal de precios de ingredientes.
///
/// El agregador solo depende de este trait: cuando exista un histórico real
/// de precios, se cambia la implementación sin tocar el cálculo de KPIs.
pub trait HistorialPrecios {
    /// Una entrada por semana (`S1..Sn`, la más vieja primero), con un punto
    /// de precio por ingrediente recibido.
    fn serie_semanal(&self, ingredientes: &[Ingrediente], semanas: usize) -> Vec<SemanaPrecios>;
}

/// Implementación provisional: simula el histórico aplicando al costo
/// unitario actual una variación aleatoria de ±10% por semana y por
/// ingrediente. No es reproducible; los tests no deben asertar sobre los
/// valores, solo sobre la estructura.
#[derive(Debug, Clone, Default)]
pub struct JitterSimulado;

impl HistorialPrecios for JitterSimulado {
    fn serie_semanal(&self, ingredientes: &[Ingrediente], semanas: usize) -> Vec<SemanaPrecios> {
        let mut rng = rand::thread_rng();

        (1..=semanas)
            .map(|n| SemanaPrecios {
                semana: format!("S{n}"),
                precios: ingredientes
                    .iter()
                    .map(|ing| {
                        let variacion = rng.gen_range(-0.1..0.1);
                        PrecioIngrediente {
                            ingrediente: ing.nombre.clone(),
                            precio: (ing.costo_unitario * (1.0 + variacion)).round(),
                        }
                    })
                    .collect(),
            })
            .collect()
    }
}
