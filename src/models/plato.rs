// src/models/plato.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use utoipa::ToSchema;
use uuid::Uuid;

// Una línea de receta: cuánto ingrediente consume una unidad del plato.
// `cantidad` llega del front sin garantías, así que se deserializa de forma
// tolerante: número, string numérico, o cero si no se puede interpretar.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlatoIngrediente {
    pub ingrediente_id: Uuid,
    #[serde(default, deserialize_with = "cantidad_tolerante")]
    pub cantidad: f64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CantidadCruda {
    Numero(f64),
    Texto(String),
    Nada(Option<()>),
}

fn cantidad_tolerante<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let cruda = CantidadCruda::deserialize(deserializer)?;
    let valor = match cruda {
        CantidadCruda::Numero(n) => n,
        CantidadCruda::Texto(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        CantidadCruda::Nada(_) => 0.0,
    };
    // NaN/infinito tampoco son cantidades válidas
    if valor.is_finite() { Ok(valor) } else { Ok(0.0) }
}

/// Un plato del menú: receta embebida y precio de venta.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Plato {
    pub id: Uuid,
    pub nombre: String,
    pub descripcion: String,
    pub precio_venta: f64,
    #[schema(value_type = Vec<PlatoIngrediente>)]
    pub ingredientes: Json<Vec<PlatoIngrediente>>,
    pub categoria: String,
    pub activo: bool,
    pub fecha_creacion: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cantidad_numerica_pasa_directo() {
        let linea: PlatoIngrediente =
            serde_json::from_str(r#"{"ingredienteId":"00000000-0000-0000-0000-000000000001","cantidad":0.3}"#)
                .unwrap();
        assert_eq!(linea.cantidad, 0.3);
    }

    #[test]
    fn cantidad_en_string_se_parsea() {
        let linea: PlatoIngrediente =
            serde_json::from_str(r#"{"ingredienteId":"00000000-0000-0000-0000-000000000001","cantidad":"0.25"}"#)
                .unwrap();
        assert_eq!(linea.cantidad, 0.25);
    }

    #[test]
    fn cantidad_invalida_se_coacciona_a_cero() {
        let linea: PlatoIngrediente =
            serde_json::from_str(r#"{"ingredienteId":"00000000-0000-0000-0000-000000000001","cantidad":"abc"}"#)
                .unwrap();
        assert_eq!(linea.cantidad, 0.0);

        let sin_campo: PlatoIngrediente =
            serde_json::from_str(r#"{"ingredienteId":"00000000-0000-0000-0000-000000000001"}"#).unwrap();
        assert_eq!(sin_campo.cantidad, 0.0);

        let nula: PlatoIngrediente =
            serde_json::from_str(r#"{"ingredienteId":"00000000-0000-0000-0000-000000000001","cantidad":null}"#)
                .unwrap();
        assert_eq!(nula.cantidad, 0.0);
    }
}
