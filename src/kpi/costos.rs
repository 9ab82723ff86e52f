// src/kpi/costos.rs

use crate::models::{Ingrediente, Plato};

/// Costo de ingredientes de una unidad del plato.
///
/// Suma `costo_unitario * cantidad` sobre cada línea de la receta. Una línea
/// que referencia un ingrediente inexistente aporta 0: borrar un ingrediente
/// nunca rompe el cálculo del resto del menú. Sin redondeo; eso es cosa de
/// quien presenta el número.
pub fn costo_plato(plato: &Plato, ingredientes: &[Ingrediente]) -> f64 {
    plato
        .ingredientes
        .iter()
        .map(|linea| {
            // Una cantidad no finita no es una cantidad
            let cantidad = if linea.cantidad.is_finite() { linea.cantidad } else { 0.0 };
            ingredientes
                .iter()
                .find(|i| i.id == linea.ingrediente_id)
                .map_or(0.0, |i| i.costo_unitario * cantidad)
        })
        .sum()
}

/// Margen porcentual del plato: `((precio - costo) / precio) * 100`.
///
/// Con precio de venta 0 el margen no está definido (división por cero);
/// se devuelve `None` en lugar de dejar escapar un NaN hacia los agregados.
pub fn margen_plato(plato: &Plato, ingredientes: &[Ingrediente]) -> Option<f64> {
    if plato.precio_venta == 0.0 {
        return None;
    }
    let costo = costo_plato(plato, ingredientes);
    Some(((plato.precio_venta - costo) / plato.precio_venta) * 100.0)
}
