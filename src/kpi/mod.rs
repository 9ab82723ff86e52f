// src/kpi/mod.rs
//
// El motor de KPIs del dashboard: funciones puras y síncronas sobre
// snapshots ya materializados de ingredientes, platos y ventas. Aquí no hay
// I/O ni estado compartido; cada llamada recibe snapshots frescos y devuelve
// una estructura nueva, así que el resultado es estable si se repite la
// llamada con las mismas entradas.

pub mod costos;
pub mod precios;
pub mod series;
pub mod tendencia;

use chrono::{DateTime, Utc};

use crate::models::{DashboardKpis, Ingrediente, Plato, PlatoRentabilidad, Venta};

use costos::{costo_plato, margen_plato};
use precios::HistorialPrecios;
use tendencia::tendencia_plato;

// Tamaños fijos del dashboard
const MESES_EVOLUCION: u32 = 6;
const SEMANAS_SERIE: usize = 4;
const MAX_INGREDIENTES_SERIE: usize = 4;
const TOP_MENOS_RENTABLES: usize = 5;

/// Parámetros de las heurísticas de rentabilidad. El 65% de margen objetivo
/// y las 20 ventas/mes asumidas son supuestos de negocio, no constantes del
/// cálculo, así que viven aquí y pueden ajustarse por configuración.
#[derive(Debug, Clone)]
pub struct KpiParams {
    /// Margen porcentual a partir del cual un plato se considera rentable.
    pub margen_objetivo: f64,
    /// Volumen mensual asumido al estimar el ahorro potencial. El ahorro es
    /// una estimación heurística, no sale del volumen real de ventas.
    pub ventas_mensuales_estimadas: f64,
}

impl Default for KpiParams {
    fn default() -> Self {
        Self { margen_objetivo: 65.0, ventas_mensuales_estimadas: 20.0 }
    }
}

/// Calcula el snapshot completo de KPIs del dashboard.
///
/// No muta sus entradas ni retiene referencias: consume los snapshots y
/// devuelve una estructura derivada, recalculada en cada request.
pub fn calcular_kpis(
    ingredientes: &[Ingrediente],
    platos: &[Plato],
    ventas: &[Venta],
    ahora: DateTime<Utc>,
    historial: &dyn HistorialPrecios,
    params: &KpiParams,
) -> DashboardKpis {
    // 1. Ganancia del mes en curso
    let (ganancia_mes, _costo_mes) = series::totales_mes_actual(ventas, platos, ingredientes, ahora);

    let platos_activos = platos.iter().filter(|p| p.activo).count() as i64;

    // Promedio por plato activo; definido como 0 cuando no hay activos
    let ganancia_promedio = if platos_activos > 0 {
        (ganancia_mes / platos_activos as f64).round() as i64
    } else {
        0
    };

    // 2. Margen promedio sobre los márgenes definidos (un plato con precio 0
    // no tiene margen y no debe envenenar el promedio con NaN)
    let margenes: Vec<f64> = platos
        .iter()
        .filter_map(|p| margen_plato(p, ingredientes))
        .collect();
    let margen_promedio = if margenes.is_empty() {
        0
    } else {
        (margenes.iter().sum::<f64>() / margenes.len() as f64).round() as i64
    };

    // 3. Ranking de rentabilidad: cada plato con su costo, margen y
    // tendencia (solo con sus propias ventas). Orden ascendente por margen;
    // el sort de Rust es estable, los empates conservan el orden de entrada.
    let mut ranking: Vec<PlatoRentabilidad> = platos
        .iter()
        .map(|plato| PlatoRentabilidad {
            nombre: plato.nombre.clone(),
            costo: costo_plato(plato, ingredientes),
            venta: plato.precio_venta,
            // Margen indefinido (precio 0): se reporta y ordena como 0
            margen: margen_plato(plato, ingredientes).unwrap_or(0.0),
            trend: tendencia_plato(plato.id, ventas, ahora),
        })
        .collect();
    ranking.sort_by(|a, b| a.margen.partial_cmp(&b.margen).unwrap_or(std::cmp::Ordering::Equal));
    ranking.truncate(TOP_MENOS_RENTABLES);

    // 4. Conteos de salud del menú
    let platos_rentables = platos
        .iter()
        .filter(|p| {
            p.activo
                && margen_plato(p, ingredientes)
                    .is_some_and(|m| m >= params.margen_objetivo)
        })
        .count() as i64;
    let platos_revisar = platos_activos - platos_rentables;

    // 5. Ahorro potencial: para cada plato por debajo del objetivo (o sin
    // margen definido), el costo que daría exactamente el margen objetivo,
    // por el volumen mensual asumido
    let ahorro_potencial: f64 = platos
        .iter()
        .filter(|p| {
            margen_plato(p, ingredientes).is_none_or(|m| m < params.margen_objetivo)
        })
        .map(|p| {
            let costo = costo_plato(p, ingredientes);
            let costo_optimo = p.precio_venta * (1.0 - params.margen_objetivo / 100.0);
            (costo - costo_optimo).max(0.0) * params.ventas_mensuales_estimadas
        })
        .sum();

    // 6. Serie mensual de ganancia/costos
    let evolucion_costos =
        series::evolucion_costos(ventas, platos, ingredientes, ahora, MESES_EVOLUCION);

    // 7. Serie semanal de precios, solo los primeros ingredientes del
    // catálogo (orden de inserción)
    let corte = ingredientes.len().min(MAX_INGREDIENTES_SERIE);
    let evolucion_ingredientes = historial.serie_semanal(&ingredientes[..corte], SEMANAS_SERIE);

    DashboardKpis {
        ganancia_total: ganancia_mes.round() as i64,
        ganancia_promedio,
        margen_promedio,
        platos_activos,
        platos_rentables,
        platos_revisar,
        ahorro_potencial: ahorro_potencial.round() as i64,
        top_platos_menos_rentables: ranking,
        evolucion_costos,
        evolucion_ingredientes,
    }
}

// Constructores compactos para los tests del motor.
#[cfg(test)]
pub(crate) mod pruebas {
    use chrono::{DateTime, TimeZone, Utc};
    use sqlx::types::Json;
    use uuid::Uuid;

    use crate::models::{Ingrediente, Plato, PlatoIngrediente, UnidadMedida, Venta};

    pub fn fecha(anio: i32, mes: u32, dia: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(anio, mes, dia, 12, 0, 0).unwrap()
    }

    pub fn ingrediente(nombre: &str, costo_unitario: f64) -> Ingrediente {
        Ingrediente {
            id: Uuid::new_v4(),
            nombre: nombre.to_string(),
            unidad: UnidadMedida::Kg,
            costo_unitario,
            stock: 10.0,
            fecha_actualizacion: fecha(2025, 1, 1),
        }
    }

    pub fn plato(nombre: &str, precio_venta: f64, lineas: &[(Uuid, f64)]) -> Plato {
        Plato {
            id: Uuid::new_v4(),
            nombre: nombre.to_string(),
            descripcion: String::new(),
            precio_venta,
            ingredientes: Json(
                lineas
                    .iter()
                    .map(|&(ingrediente_id, cantidad)| PlatoIngrediente { ingrediente_id, cantidad })
                    .collect(),
            ),
            categoria: "General".to_string(),
            activo: true,
            fecha_creacion: fecha(2025, 1, 1),
        }
    }

    pub fn venta(plato_id: Uuid, cantidad: i32, fecha: DateTime<Utc>) -> Venta {
        Venta { id: Uuid::new_v4(), plato_id, cantidad, fecha, total: 0.0 }
    }
}
