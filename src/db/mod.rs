pub mod ingrediente_repo;
pub use ingrediente_repo::IngredienteRepository;
pub mod plato_repo;
pub use plato_repo::PlatoRepository;
pub mod venta_repo;
pub use venta_repo::VentaRepository;
