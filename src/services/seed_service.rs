// src/services/seed_service.rs

use chrono::{Datelike, TimeZone, Utc};
use rand::{Rng, SeedableRng, rngs::StdRng};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{IngredienteRepository, PlatoRepository, VentaRepository},
    models::{PlatoIngrediente, UnidadMedida},
};

/// Datos de demostración: el catálogo de ejemplo y seis meses de ventas
/// aleatorias, para que el dashboard tenga algo que mostrar en una
/// instalación nueva.
#[derive(Clone)]
pub struct SeedService {
    pool: PgPool,
    ingrediente_repo: IngredienteRepository,
    plato_repo: PlatoRepository,
    venta_repo: VentaRepository,
}

// (nombre, unidad, costo unitario, stock)
const INGREDIENTES_DEMO: [(&str, UnidadMedida, f64, f64); 10] = [
    ("Salmón Fresco", UnidadMedida::Kg, 24.0, 50.0),
    ("Pollo", UnidadMedida::Kg, 8.5, 100.0),
    ("Res Premium", UnidadMedida::Kg, 18.0, 60.0),
    ("Pasta Fresca", UnidadMedida::Kg, 3.2, 80.0),
    ("Crema", UnidadMedida::Litro, 5.5, 40.0),
    ("Queso Parmesano", UnidadMedida::Kg, 15.0, 30.0),
    ("Vegetales Mix", UnidadMedida::Kg, 4.0, 120.0),
    ("Aceite de Oliva", UnidadMedida::Litro, 12.0, 25.0),
    ("Arroz Arborio", UnidadMedida::Kg, 6.0, 70.0),
    ("Hongos Frescos", UnidadMedida::Kg, 9.0, 45.0),
];

// (nombre, descripción, precio, categoría, líneas como índice en INGREDIENTES_DEMO)
#[allow(clippy::type_complexity)]
const PLATOS_DEMO: [(&str, &str, f64, &str, &[(usize, f64)]); 5] = [
    (
        "Pasta Alfredo",
        "Pasta fresca con salsa cremosa de queso parmesano",
        12.0,
        "Pastas",
        &[(3, 0.25), (4, 0.15), (5, 0.05)],
    ),
    (
        "Salmón a la Parrilla",
        "Filete de salmón fresco con vegetales asados",
        22.0,
        "Pescados",
        &[(0, 0.3), (6, 0.2), (7, 0.02)],
    ),
    (
        "Risotto de Hongos",
        "Arroz cremoso con hongos frescos y parmesano",
        16.0,
        "Arroces",
        &[(8, 0.15), (9, 0.12), (5, 0.04), (4, 0.1)],
    ),
    (
        "Pollo a las Hierbas",
        "Pechuga de pollo con especias y vegetales",
        14.0,
        "Carnes",
        &[(1, 0.25), (6, 0.15), (7, 0.02)],
    ),
    (
        "Pasta Carbonara",
        "Pasta con salsa carbonara tradicional",
        13.5,
        "Pastas",
        &[(3, 0.25), (5, 0.05), (4, 0.1)],
    ),
];

impl SeedService {
    pub fn new(
        pool: PgPool,
        ingrediente_repo: IngredienteRepository,
        plato_repo: PlatoRepository,
        venta_repo: VentaRepository,
    ) -> Self {
        Self { pool, ingrediente_repo, plato_repo, venta_repo }
    }

    /// Siembra los datos de demostración solo si el catálogo está vacío.
    /// Devuelve `true` si sembró algo.
    pub async fn seed_if_empty(&self) -> Result<bool, AppError> {
        let (existentes,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM ingredientes")
            .fetch_one(&self.pool)
            .await?;
        if existentes > 0 {
            return Ok(false);
        }
        self.sembrar().await?;
        Ok(true)
    }

    /// Borra todo y vuelve a sembrar (la operación de reset de la vista de
    /// configuración).
    pub async fn reset(&self) -> Result<(), AppError> {
        sqlx::query("TRUNCATE ingredientes, platos, ventas")
            .execute(&self.pool)
            .await?;
        self.sembrar().await
    }

    async fn sembrar(&self) -> Result<(), AppError> {
        // StdRng y no thread_rng: el future tiene que seguir siendo Send
        let mut rng = StdRng::from_entropy();

        let mut ingrediente_ids: Vec<Uuid> = Vec::with_capacity(INGREDIENTES_DEMO.len());
        for (nombre, unidad, costo, stock) in INGREDIENTES_DEMO {
            let ing = self.ingrediente_repo.create(nombre, unidad, costo, stock).await?;
            ingrediente_ids.push(ing.id);
        }

        let mut platos = Vec::with_capacity(PLATOS_DEMO.len());
        for (nombre, descripcion, precio, categoria, lineas) in PLATOS_DEMO {
            let receta: Vec<PlatoIngrediente> = lineas
                .iter()
                .map(|&(indice, cantidad)| PlatoIngrediente {
                    ingrediente_id: ingrediente_ids[indice],
                    cantidad,
                })
                .collect();
            let plato = self
                .plato_repo
                .create(nombre, descripcion, precio, &receta, categoria, true)
                .await?;
            platos.push(plato);
        }

        // Seis meses de ventas aleatorias por plato, para alimentar las
        // series mensuales y las tendencias
        let ahora = Utc::now();
        for atras in (0..6u32).rev() {
            let total = ahora.year() * 12 + ahora.month() as i32 - 1 - atras as i32;
            let (anio, mes) = (total.div_euclid(12), total.rem_euclid(12) as u32 + 1);

            for plato in &platos {
                let num_ventas = rng.gen_range(10..=24);
                for _ in 0..num_ventas {
                    let dia = rng.gen_range(1..=28);
                    let cantidad: i32 = rng.gen_range(1..=3);
                    let fecha = Utc.with_ymd_and_hms(anio, mes, dia, 13, 0, 0).unwrap();
                    self.venta_repo
                        .create(plato.id, cantidad, fecha, plato.precio_venta * cantidad as f64)
                        .await?;
                }
            }
        }

        tracing::info!("🌱 Datos de demostración sembrados");
        Ok(())
    }
}
