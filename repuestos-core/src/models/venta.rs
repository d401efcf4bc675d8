//! A persisted sale document as loaded from the backend.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::detalle::DetalleVenta;

/// A registered sale.
///
/// `total` and `descuento_total` are server-computed; the per-line discount
/// the backend derives is not carried here (display concern of the history
/// view, dropped at the wire boundary like the rest of the response-only
/// fields).
#[derive(Debug, Clone)]
pub struct Venta {
    pub id_venta: i64,
    pub nombre_cliente: String,
    pub fecha: NaiveDateTime,
    pub total: Decimal,
    pub descuento_total: Decimal,
    pub lineas: Vec<DetalleVenta>,
}
