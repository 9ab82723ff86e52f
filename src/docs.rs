// src/docs.rs

use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Ingredientes ---
        handlers::ingredientes::create_ingrediente,
        handlers::ingredientes::get_all_ingredientes,
        handlers::ingredientes::get_ingrediente,
        handlers::ingredientes::update_ingrediente,
        handlers::ingredientes::delete_ingrediente,

        // --- Platos ---
        handlers::platos::create_plato,
        handlers::platos::get_all_platos,
        handlers::platos::get_plato,
        handlers::platos::get_costo_plato,
        handlers::platos::update_plato,
        handlers::platos::delete_plato,

        // --- Ventas ---
        handlers::ventas::create_venta,
        handlers::ventas::get_all_ventas,

        // --- Dashboard ---
        handlers::dashboard::get_kpis,

        // --- Configuracion ---
        handlers::configuracion::reset_datos,
    ),
    components(
        schemas(
            // --- Modelos ---
            models::ingrediente::UnidadMedida,
            models::ingrediente::Ingrediente,
            models::plato::PlatoIngrediente,
            models::plato::Plato,
            models::venta::Venta,

            // --- Dashboard ---
            models::dashboard::DashboardKpis,
            models::dashboard::PlatoRentabilidad,
            models::dashboard::PuntoEvolucionMensual,
            models::dashboard::SemanaPrecios,
            models::dashboard::PrecioIngrediente,
            crate::kpi::tendencia::Tendencia,
            crate::services::plato_service::CostoPlato,

            // --- Payloads ---
            handlers::ingredientes::CreateIngredientePayload,
            handlers::ingredientes::UpdateIngredientePayload,
            handlers::platos::CreatePlatoPayload,
            handlers::platos::UpdatePlatoPayload,
            handlers::ventas::CreateVentaPayload,
        )
    ),
    tags(
        (name = "Ingredientes", description = "Catálogo de materias primas y precios"),
        (name = "Platos", description = "El menú: recetas y precios de venta"),
        (name = "Ventas", description = "Registro de transacciones"),
        (name = "Dashboard", description = "KPIs de rentabilidad del menú"),
        (name = "Configuracion", description = "Datos de demostración")
    )
)]
pub struct ApiDoc;
