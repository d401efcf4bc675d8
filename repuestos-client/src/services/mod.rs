//! Resource clients for the backend REST API.
//!
//! Each client owns its wire DTOs and converts to and from the domain types
//! at this boundary: responses arrive camelCase, requests leave snake_case.

pub mod api;
pub mod auth;
pub mod categorias;
pub mod compras;
pub mod dashboard;
pub mod repuestos;
pub mod sistemas;
pub mod vehiculos;
pub mod ventas;

pub use auth::{AuthClient, Credenciales};
pub use categorias::CategoriaClient;
pub use compras::{CompraClient, CompraResponse};
pub use dashboard::DashboardClient;
pub use repuestos::{NuevoRepuesto, RepuestoClient, RepuestoResponse};
pub use sistemas::SistemaClient;
pub use vehiculos::VehiculoClient;
pub use ventas::{VentaClient, VentaResponse};
