//! repuestos-core: domain models and document aggregation shared by the
//! repuestos inventory and sales client.

pub mod borrador;
pub mod detalle;
pub mod error;
pub mod models;
pub mod observability;

pub use rust_decimal;
pub use serde;
pub use tracing;
pub use validator;
