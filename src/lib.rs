// GastroMetrics: backend de costeo de menú para restaurantes.
//
// El módulo `kpi` es el motor del dashboard (funciones puras); el resto es
// el borde HTTP y el almacenamiento que lo alimentan.

pub mod common;
pub mod config;
pub mod db;
pub mod docs;
pub mod handlers;
pub mod kpi;
pub mod models;
pub mod services;
