pub mod configuracion;
pub mod dashboard;
pub mod ingredientes;
pub mod platos;
pub mod ventas;
