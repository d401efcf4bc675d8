//! Line-item ("detalle") aggregation shared by sale and purchase documents.
//!
//! A document under construction holds an ordered collection of lines, one
//! per distinct part, plus a cache of the part snapshots those lines
//! reference. All operations are synchronous and all-or-nothing: a rejected
//! operation returns the reason and leaves both the lines and the cache
//! untouched. The document total is always derived from the lines, never
//! stored.

use std::collections::{HashMap, HashSet};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::DetalleError;
use crate::models::Repuesto;

/// One line of a document. The seam between the shared aggregation logic and
/// the two document flavors: sale lines are bounded by the part's available
/// stock, purchase lines are not.
pub trait LineaDetalle: Sized {
    /// Whether quantities are validated against the part's available stock.
    const VALIDA_STOCK: bool;

    /// Build a line from a part snapshot and the candidate quantity and unit
    /// price. Inputs are validated by the caller.
    fn desde_repuesto(repuesto: &Repuesto, cantidad: u32, precio_unitario: Decimal) -> Self;

    fn id_repuesto(&self) -> i64;
    fn cantidad(&self) -> u32;
    fn precio_unitario(&self) -> Decimal;
    fn total(&self) -> Decimal;

    /// Replace quantity and unit price, keeping
    /// `total == cantidad * precio_unitario`.
    fn ajustar(&mut self, cantidad: u32, precio_unitario: Decimal);
}

/// Sale line. Captures the part's suggested price and cost at the moment the
/// line was added; the backend uses both when computing discounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetalleVenta {
    pub id_repuesto: i64,
    pub cantidad: u32,
    pub precio_sugerido: Decimal,
    pub precio_unitario: Decimal,
    pub costo: Decimal,
    pub total: Decimal,
}

impl LineaDetalle for DetalleVenta {
    const VALIDA_STOCK: bool = true;

    fn desde_repuesto(repuesto: &Repuesto, cantidad: u32, precio_unitario: Decimal) -> Self {
        Self {
            id_repuesto: repuesto.id_repuesto,
            cantidad,
            precio_sugerido: repuesto.precio_sugerido,
            precio_unitario,
            costo: repuesto.costo,
            total: Decimal::from(cantidad) * precio_unitario,
        }
    }

    fn id_repuesto(&self) -> i64 {
        self.id_repuesto
    }

    fn cantidad(&self) -> u32 {
        self.cantidad
    }

    fn precio_unitario(&self) -> Decimal {
        self.precio_unitario
    }

    fn total(&self) -> Decimal {
        self.total
    }

    fn ajustar(&mut self, cantidad: u32, precio_unitario: Decimal) {
        self.cantidad = cantidad;
        self.precio_unitario = precio_unitario;
        self.total = Decimal::from(cantidad) * precio_unitario;
    }
}

/// Purchase line. The unit price is the acquisition cost per unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetalleCompra {
    pub id_repuesto: i64,
    pub cantidad: u32,
    pub costo: Decimal,
    pub total: Decimal,
}

impl LineaDetalle for DetalleCompra {
    const VALIDA_STOCK: bool = false;

    fn desde_repuesto(repuesto: &Repuesto, cantidad: u32, precio_unitario: Decimal) -> Self {
        Self {
            id_repuesto: repuesto.id_repuesto,
            cantidad,
            costo: precio_unitario,
            total: Decimal::from(cantidad) * precio_unitario,
        }
    }

    fn id_repuesto(&self) -> i64 {
        self.id_repuesto
    }

    fn cantidad(&self) -> u32 {
        self.cantidad
    }

    fn precio_unitario(&self) -> Decimal {
        self.costo
    }

    fn total(&self) -> Decimal {
        self.total
    }

    fn ajustar(&mut self, cantidad: u32, precio_unitario: Decimal) {
        self.cantidad = cantidad;
        self.costo = precio_unitario;
        self.total = Decimal::from(cantidad) * precio_unitario;
    }
}

/// Ordered line collection plus the part reference cache.
///
/// Invariants: part ids are unique across lines, every line's quantity is at
/// least 1 and its unit price positive, and the cache holds exactly the parts
/// referenced by at least one line.
#[derive(Debug, Clone)]
pub struct Detalle<L> {
    lineas: Vec<L>,
    repuestos: HashMap<i64, Repuesto>,
}

impl<L> Default for Detalle<L> {
    fn default() -> Self {
        Self {
            lineas: Vec::new(),
            repuestos: HashMap::new(),
        }
    }
}

impl<L: LineaDetalle> Detalle<L> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a document's lines from persisted state (edit mode).
    ///
    /// `repuestos` are the freshly fetched snapshots for the referenced
    /// parts; entries for parts no line references are discarded so the
    /// cache invariant holds from the start.
    pub fn cargar(
        lineas: Vec<L>,
        repuestos: impl IntoIterator<Item = Repuesto>,
    ) -> Result<Self, DetalleError> {
        let mut cache: HashMap<i64, Repuesto> = repuestos
            .into_iter()
            .map(|r| (r.id_repuesto, r))
            .collect();

        let mut vistos = HashSet::with_capacity(lineas.len());
        for linea in &lineas {
            let id = linea.id_repuesto();
            if !vistos.insert(id) {
                return Err(DetalleError::RepuestoDuplicado(id));
            }
            if !cache.contains_key(&id) {
                return Err(DetalleError::RepuestoNoCargado(id));
            }
        }
        cache.retain(|id, _| vistos.contains(id));

        Ok(Self {
            lineas,
            repuestos: cache,
        })
    }

    /// Add a part to the document.
    ///
    /// A part already present does not get a second line: its quantity grows
    /// by `cantidad` and the incoming unit price is discarded in favor of the
    /// one already on the line. Sale quantities are bounded by the passed
    /// snapshot's available stock.
    pub fn agregar(
        &mut self,
        repuesto: Repuesto,
        cantidad: u32,
        precio_unitario: Decimal,
    ) -> Result<(), DetalleError> {
        if cantidad == 0 {
            return Err(DetalleError::CantidadInvalida);
        }
        if precio_unitario <= Decimal::ZERO {
            return Err(DetalleError::PrecioInvalido);
        }

        if let Some(linea) = self
            .lineas
            .iter_mut()
            .find(|l| l.id_repuesto() == repuesto.id_repuesto)
        {
            let nueva_cantidad = linea
                .cantidad()
                .checked_add(cantidad)
                .ok_or(DetalleError::CantidadInvalida)?;
            if L::VALIDA_STOCK && nueva_cantidad > repuesto.stock_actual {
                return Err(DetalleError::StockInsuficiente {
                    disponible: repuesto.stock_actual,
                });
            }
            let precio_existente = linea.precio_unitario();
            linea.ajustar(nueva_cantidad, precio_existente);
            return Ok(());
        }

        if L::VALIDA_STOCK && cantidad > repuesto.stock_actual {
            return Err(DetalleError::StockInsuficiente {
                disponible: repuesto.stock_actual,
            });
        }

        self.lineas
            .push(L::desde_repuesto(&repuesto, cantidad, precio_unitario));
        self.repuestos.insert(repuesto.id_repuesto, repuesto);
        Ok(())
    }

    /// Edit a line in place. Sale quantities are re-checked against the
    /// cached part snapshot.
    pub fn actualizar(
        &mut self,
        indice: usize,
        cantidad: u32,
        precio_unitario: Decimal,
    ) -> Result<(), DetalleError> {
        let id_repuesto = self
            .lineas
            .get(indice)
            .map(LineaDetalle::id_repuesto)
            .ok_or(DetalleError::IndiceInvalido(indice))?;

        if cantidad == 0 {
            return Err(DetalleError::CantidadInvalida);
        }
        if precio_unitario <= Decimal::ZERO {
            return Err(DetalleError::PrecioInvalido);
        }
        if L::VALIDA_STOCK {
            let repuesto = self
                .repuestos
                .get(&id_repuesto)
                .ok_or(DetalleError::RepuestoNoCargado(id_repuesto))?;
            if cantidad > repuesto.stock_actual {
                return Err(DetalleError::StockInsuficiente {
                    disponible: repuesto.stock_actual,
                });
            }
        }

        self.lineas[indice].ajustar(cantidad, precio_unitario);
        Ok(())
    }

    /// Remove a line unconditionally, evicting the part from the cache when
    /// no remaining line references it.
    pub fn eliminar(&mut self, indice: usize) -> Result<L, DetalleError> {
        if indice >= self.lineas.len() {
            return Err(DetalleError::IndiceInvalido(indice));
        }
        let linea = self.lineas.remove(indice);

        let id = linea.id_repuesto();
        if !self.lineas.iter().any(|l| l.id_repuesto() == id) {
            self.repuestos.remove(&id);
        }
        Ok(linea)
    }

    /// Document total: sum of line totals, recomputed on every call.
    pub fn total(&self) -> Decimal {
        self.lineas.iter().map(LineaDetalle::total).sum()
    }

    pub fn lineas(&self) -> &[L] {
        &self.lineas
    }

    /// Cached snapshot for a referenced part, for display and validation.
    pub fn repuesto(&self, id_repuesto: i64) -> Option<&Repuesto> {
        self.repuestos.get(&id_repuesto)
    }

    pub fn len(&self) -> usize {
        self.lineas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lineas.is_empty()
    }

    /// Discard all lines and cached parts.
    pub fn vaciar(&mut self) {
        self.lineas.clear();
        self.repuestos.clear();
    }
}
