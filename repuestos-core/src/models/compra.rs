//! A persisted purchase document as loaded from the backend.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::detalle::DetalleCompra;

/// A registered purchase.
#[derive(Debug, Clone)]
pub struct Compra {
    pub id_compra: i64,
    pub nombre_proveedor: String,
    pub fecha: NaiveDateTime,
    pub total: Decimal,
    /// Active flag reported by the backend for the history view.
    pub estado: bool,
    pub lineas: Vec<DetalleCompra>,
}
