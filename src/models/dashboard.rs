// src/models/dashboard.rs

use serde::Serialize;
use utoipa::ToSchema;

use crate::kpi::tendencia::Tendencia;

// Estructura derivada y efímera: se recalcula en cada request, nunca se
// persiste.

// 1. Resumen (las tarjetas de arriba)
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardKpis {
    pub ganancia_total: i64,    // Ganancia del mes en curso
    pub ganancia_promedio: i64, // Ganancia / platos activos (0 si no hay)
    pub margen_promedio: i64,   // Media de márgenes definidos (0 si no hay)
    pub platos_activos: i64,
    pub platos_rentables: i64, // Activos con margen >= objetivo
    pub platos_revisar: i64,   // Activos - rentables
    pub ahorro_potencial: i64, // Estimación heurística, ver KpiParams
    pub top_platos_menos_rentables: Vec<PlatoRentabilidad>,
    pub evolucion_costos: Vec<PuntoEvolucionMensual>,
    pub evolucion_ingredientes: Vec<SemanaPrecios>,
}

// 2. Ranking de los platos con peor margen
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlatoRentabilidad {
    pub nombre: String,
    pub costo: f64,
    pub venta: f64,
    pub margen: f64, // Fraccional; un margen indefinido (precio 0) se reporta como 0
    pub trend: Tendencia,
}

// 3. Serie mensual de ganancia/costos (gráfico de evolución)
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PuntoEvolucionMensual {
    pub mes: String, // Abreviatura del mes, primera letra en mayúscula
    pub ganancia: i64,
    pub costos: i64,
}

// 4. Serie semanal de precios de ingredientes (gráfico de costos)
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SemanaPrecios {
    pub semana: String, // "S1".."S4"
    pub precios: Vec<PrecioIngrediente>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PrecioIngrediente {
    pub ingrediente: String,
    pub precio: f64,
}
