// src/config.rs

use std::{env, sync::Arc, time::Duration};

use sqlx::{PgPool, postgres::PgPoolOptions};

use crate::{
    db::{IngredienteRepository, PlatoRepository, VentaRepository},
    kpi::{KpiParams, precios::JitterSimulado},
    services::{
        DashboardService, IngredienteService, PlatoService, SeedService, VentaService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub ingrediente_service: IngredienteService,
    pub plato_service: PlatoService,
    pub venta_service: VentaService,
    pub dashboard_service: DashboardService,
    pub seed_service: SeedService,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL debe estar definida");

        // Conecta a la base de datos, usando '?' para propagar errores
        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await?;

        tracing::info!("✅ Conexión con la base de datos establecida");

        // Los supuestos de negocio del cálculo de KPIs pueden ajustarse por
        // entorno sin recompilar
        let por_defecto = KpiParams::default();
        let kpi_params = KpiParams {
            margen_objetivo: variable_f64("MARGEN_OBJETIVO", por_defecto.margen_objetivo),
            ventas_mensuales_estimadas: variable_f64(
                "VENTAS_MES_ESTIMADAS",
                por_defecto.ventas_mensuales_estimadas,
            ),
        };

        // --- Arma el grafo de dependencias ---
        let ingrediente_repo = IngredienteRepository::new(db_pool.clone());
        let plato_repo = PlatoRepository::new(db_pool.clone());
        let venta_repo = VentaRepository::new(db_pool.clone());

        let ingrediente_service = IngredienteService::new(ingrediente_repo.clone());
        let plato_service = PlatoService::new(plato_repo.clone(), ingrediente_repo.clone());
        let venta_service = VentaService::new(venta_repo.clone(), plato_repo.clone());
        let dashboard_service = DashboardService::new(
            ingrediente_repo.clone(),
            plato_repo.clone(),
            venta_repo.clone(),
            // Serie de precios simulada mientras no haya histórico real
            Arc::new(JitterSimulado),
            kpi_params,
        );
        let seed_service =
            SeedService::new(db_pool.clone(), ingrediente_repo, plato_repo, venta_repo);

        Ok(Self {
            db_pool,
            ingrediente_service,
            plato_service,
            venta_service,
            dashboard_service,
            seed_service,
        })
    }
}

fn variable_f64(nombre: &str, por_defecto: f64) -> f64 {
    match env::var(nombre) {
        Ok(valor) => valor.parse().unwrap_or_else(|_| {
            tracing::warn!("{} no es un número, usando {}", nombre, por_defecto);
            por_defecto
        }),
        Err(_) => por_defecto,
    }
}
