//! Sale and purchase documents under construction, and the gate that decides
//! whether they may be submitted.

use rust_decimal::Decimal;
use validator::Validate;

use crate::detalle::{Detalle, DetalleCompra, DetalleVenta};
use crate::error::{DetalleError, EnvioError};
use crate::models::{Compra, Repuesto, Venta};

/// A sale being filled in, either new or loaded for editing.
#[derive(Debug, Default, Validate)]
pub struct VentaBorrador {
    pub id_venta: Option<i64>,
    #[validate(length(min = 3, message = "customer name needs at least 3 characters"))]
    pub nombre_cliente: String,
    pub detalle: Detalle<DetalleVenta>,
}

impl VentaBorrador {
    pub fn nueva() -> Self {
        Self::default()
    }

    /// Rebuild the draft from a persisted sale plus fresh snapshots of the
    /// parts its lines reference.
    pub fn para_edicion(
        venta: Venta,
        repuestos: impl IntoIterator<Item = Repuesto>,
    ) -> Result<Self, DetalleError> {
        Ok(Self {
            id_venta: Some(venta.id_venta),
            nombre_cliente: venta.nombre_cliente,
            detalle: Detalle::cargar(venta.lineas, repuestos)?,
        })
    }

    pub fn modo_edicion(&self) -> bool {
        self.id_venta.is_some()
    }

    pub fn total(&self) -> Decimal {
        self.detalle.total()
    }

    /// Submission gate: header fields valid, at least one line, and a
    /// strictly positive total. The first failing check is the reason;
    /// nothing is submitted partially.
    pub fn validar_envio(&self) -> Result<(), EnvioError> {
        self.validate()?;
        if self.detalle.is_empty() {
            return Err(EnvioError::SinLineas);
        }
        if self.total() <= Decimal::ZERO {
            return Err(EnvioError::TotalInvalido);
        }
        Ok(())
    }

    /// Discard all form state, returning the draft to a fresh document.
    pub fn reiniciar(&mut self) {
        self.id_venta = None;
        self.nombre_cliente.clear();
        self.detalle.vaciar();
    }
}

/// A purchase being filled in. Same shape as a sale draft, without the stock
/// ceiling on quantities.
#[derive(Debug, Default, Validate)]
pub struct CompraBorrador {
    pub id_compra: Option<i64>,
    #[validate(length(min = 3, message = "supplier name needs at least 3 characters"))]
    pub nombre_proveedor: String,
    pub detalle: Detalle<DetalleCompra>,
}

impl CompraBorrador {
    pub fn nueva() -> Self {
        Self::default()
    }

    pub fn para_edicion(
        compra: Compra,
        repuestos: impl IntoIterator<Item = Repuesto>,
    ) -> Result<Self, DetalleError> {
        Ok(Self {
            id_compra: Some(compra.id_compra),
            nombre_proveedor: compra.nombre_proveedor,
            detalle: Detalle::cargar(compra.lineas, repuestos)?,
        })
    }

    pub fn modo_edicion(&self) -> bool {
        self.id_compra.is_some()
    }

    pub fn total(&self) -> Decimal {
        self.detalle.total()
    }

    pub fn validar_envio(&self) -> Result<(), EnvioError> {
        self.validate()?;
        if self.detalle.is_empty() {
            return Err(EnvioError::SinLineas);
        }
        if self.total() <= Decimal::ZERO {
            return Err(EnvioError::TotalInvalido);
        }
        Ok(())
    }

    pub fn reiniciar(&mut self) {
        self.id_compra = None;
        self.nombre_proveedor.clear();
        self.detalle.vaciar();
    }
}
