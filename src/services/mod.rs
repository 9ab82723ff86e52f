pub mod dashboard_service;
pub use dashboard_service::DashboardService;
pub mod ingrediente_service;
pub use ingrediente_service::IngredienteService;
pub mod plato_service;
pub use plato_service::PlatoService;
pub mod seed_service;
pub use seed_service::SeedService;
pub mod venta_service;
pub use venta_service::VentaService;
