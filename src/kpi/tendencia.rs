// src/kpi/tendencia.rs

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::Venta;

/// Señal gruesa de impulso de ventas. No es un test estadístico de
/// tendencia: solo compara el conteo de dos ventanas fijas de 30 días.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Tendencia {
    Up,
    Down,
}

/// Clasifica el impulso reciente de un plato.
///
/// Ventanas por edad de la venta respecto a `ahora`:
/// "reciente" = `[0, 30 días)`, "anterior" = `[30, 60 días)`. Devuelve `Up`
/// solo si el conteo reciente supera estrictamente al anterior; los empates
/// (incluido 0 == 0) son `Down`.
pub fn tendencia_plato(plato_id: Uuid, ventas: &[Venta], ahora: DateTime<Utc>) -> Tendencia {
    let treinta = Duration::days(30);
    let sesenta = Duration::days(60);

    let mut recientes = 0usize;
    let mut anteriores = 0usize;

    for venta in ventas.iter().filter(|v| v.plato_id == plato_id) {
        let edad = ahora.signed_duration_since(venta.fecha);
        if edad >= Duration::zero() && edad < treinta {
            recientes += 1;
        } else if edad >= treinta && edad < sesenta {
            anteriores += 1;
        }
    }

    if recientes > anteriores { Tendencia::Up } else { Tendencia::Down }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kpi::pruebas::{fecha, venta};

    #[test]
    fn mas_ventas_recientes_es_up() {
        let ahora = fecha(2025, 6, 15);
        let plato_id = Uuid::new_v4();
        let ventas = vec![
            venta(plato_id, 1, ahora - Duration::days(2)),
            venta(plato_id, 1, ahora - Duration::days(10)),
            venta(plato_id, 1, ahora - Duration::days(40)),
        ];
        assert_eq!(tendencia_plato(plato_id, &ventas, ahora), Tendencia::Up);
    }

    #[test]
    fn empate_resuelve_a_down() {
        let ahora = fecha(2025, 6, 15);
        let plato_id = Uuid::new_v4();
        let ventas = vec![
            venta(plato_id, 1, ahora - Duration::days(5)),
            venta(plato_id, 1, ahora - Duration::days(35)),
        ];
        assert_eq!(tendencia_plato(plato_id, &ventas, ahora), Tendencia::Down);
    }

    #[test]
    fn sin_ventas_es_down() {
        let ahora = fecha(2025, 6, 15);
        assert_eq!(tendencia_plato(Uuid::new_v4(), &[], ahora), Tendencia::Down);
    }

    #[test]
    fn los_limites_de_ventana_son_exactos() {
        let ahora = fecha(2025, 6, 15);
        let plato_id = Uuid::new_v4();
        // Exactamente 30 días: cae en la ventana anterior, no en la reciente
        let ventas = vec![venta(plato_id, 1, ahora - Duration::days(30))];
        assert_eq!(tendencia_plato(plato_id, &ventas, ahora), Tendencia::Down);

        // Exactamente 60 días: fuera de ambas ventanas
        let viejas = vec![
            venta(plato_id, 1, ahora - Duration::days(60)),
            venta(plato_id, 1, ahora - Duration::days(1)),
        ];
        assert_eq!(tendencia_plato(plato_id, &viejas, ahora), Tendencia::Up);
    }

    #[test]
    fn ventas_de_otros_platos_no_cuentan() {
        let ahora = fecha(2025, 6, 15);
        let mio = Uuid::new_v4();
        let otro = Uuid::new_v4();
        let ventas = vec![
            venta(otro, 1, ahora - Duration::days(1)),
            venta(otro, 1, ahora - Duration::days(2)),
        ];
        assert_eq!(tendencia_plato(mio, &ventas, ahora), Tendencia::Down);
    }
}
