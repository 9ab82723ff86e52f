pub mod dashboard;
pub mod ingrediente;
pub mod plato;
pub mod venta;

pub use dashboard::{
    DashboardKpis, PlatoRentabilidad, PrecioIngrediente, PuntoEvolucionMensual, SemanaPrecios,
};
pub use ingrediente::{Ingrediente, UnidadMedida};
pub use plato::{Plato, PlatoIngrediente};
pub use venta::Venta;
