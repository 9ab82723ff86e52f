// src/kpi/series.rs

use chrono::{DateTime, Datelike, Utc};

use crate::models::{Ingrediente, Plato, PuntoEvolucionMensual, Venta};

use super::costos::costo_plato;

// Abreviaturas en español, primera letra en mayúscula (lo que antes hacía
// el locale es-ES del navegador).
const MESES_ABREV: [&str; 12] = [
    "Ene", "Feb", "Mar", "Abr", "May", "Jun", "Jul", "Ago", "Sep", "Oct", "Nov", "Dic",
];

/// (año, mes 1..=12) del mes calendario `atras` meses antes del de `ahora`.
/// Aritmética exacta sobre (año, mes), sin desbordes por meses cortos.
fn mes_calendario(ahora: DateTime<Utc>, atras: u32) -> (i32, u32) {
    let total = ahora.year() * 12 + ahora.month() as i32 - 1 - atras as i32;
    (total.div_euclid(12), total.rem_euclid(12) as u32 + 1)
}

/// Ganancia y costo acumulados de las ventas de un mes calendario exacto.
///
/// Por cada venta del mes se busca su plato y se acumula
/// `(precio - costo) * cantidad` en ganancia y `costo * cantidad` en costo.
/// Las ventas de platos que ya no existen se saltan, no son un error.
fn totales_mes(
    ventas: &[Venta],
    platos: &[Plato],
    ingredientes: &[Ingrediente],
    anio: i32,
    mes: u32,
) -> (f64, f64) {
    let mut ganancia = 0.0;
    let mut costo_total = 0.0;

    for venta in ventas
        .iter()
        .filter(|v| v.fecha.year() == anio && v.fecha.month() == mes)
    {
        if let Some(plato) = platos.iter().find(|p| p.id == venta.plato_id) {
            let costo = costo_plato(plato, ingredientes);
            ganancia += (plato.precio_venta - costo) * venta.cantidad as f64;
            costo_total += costo * venta.cantidad as f64;
        }
    }

    (ganancia, costo_total)
}

/// Totales del mes calendario que contiene a `ahora`, sin redondear.
pub fn totales_mes_actual(
    ventas: &[Venta],
    platos: &[Plato],
    ingredientes: &[Ingrediente],
    ahora: DateTime<Utc>,
) -> (f64, f64) {
    totales_mes(ventas, platos, ingredientes, ahora.year(), ahora.month())
}

/// Serie mensual de ganancia/costos para los últimos `meses` meses
/// calendario (el más viejo primero), redondeada para presentación.
pub fn evolucion_costos(
    ventas: &[Venta],
    platos: &[Plato],
    ingredientes: &[Ingrediente],
    ahora: DateTime<Utc>,
    meses: u32,
) -> Vec<PuntoEvolucionMensual> {
    (0..meses)
        .rev()
        .map(|atras| {
            let (anio, mes) = mes_calendario(ahora, atras);
            let (ganancia, costos) = totales_mes(ventas, platos, ingredientes, anio, mes);
            PuntoEvolucionMensual {
                mes: MESES_ABREV[(mes - 1) as usize].to_string(),
                ganancia: ganancia.round() as i64,
                costos: costos.round() as i64,
            }
        })
        .collect()
}
