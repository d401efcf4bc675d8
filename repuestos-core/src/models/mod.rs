//! Domain models for the repuestos client.
//!
//! These are the single internal representation of each entity; wire DTOs
//! (camelCase responses, snake_case requests) live next to the service
//! clients and convert to and from these types at the boundary.

mod categoria;
mod compra;
mod dashboard;
mod repuesto;
mod sistema;
mod usuario;
mod vehiculo;
mod venta;

pub use categoria::Categoria;
pub use compra::Compra;
pub use dashboard::FlashGanancias;
pub use repuesto::{Compatibilidad, Repuesto};
pub use sistema::Sistema;
pub use usuario::{Rol, Usuario};
pub use vehiculo::Vehiculo;
pub use venta::Venta;
