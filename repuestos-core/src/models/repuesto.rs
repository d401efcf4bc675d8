//! Part catalog entry ("repuesto") and its vehicle compatibility records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A part in the catalog.
///
/// Snapshots of this type are cached next to a document's lines for display
/// and stock validation; the server remains the source of truth and is
/// re-consulted on every document load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repuesto {
    pub id_repuesto: i64,
    pub nombre: String,
    pub stock_actual: u32,
    pub costo: Decimal,
    pub precio_sugerido: Decimal,
    /// Active flag; deletion on the backend is a deactivation.
    pub estado: bool,
    pub ids_categorias: Vec<i64>,
    pub tags_busqueda: Option<String>,
    pub id_sistema: Option<i64>,
    pub compatibilidades: Vec<Compatibilidad>,
}

impl Repuesto {
    /// Case-insensitive match against the part name and search tags, used by
    /// the part picker's search box.
    pub fn coincide_busqueda(&self, termino: &str) -> bool {
        let termino = termino.trim().to_lowercase();
        if termino.is_empty() {
            return true;
        }
        if self.nombre.to_lowercase().contains(&termino) {
            return true;
        }
        self.tags_busqueda
            .as_deref()
            .is_some_and(|tags| tags.to_lowercase().contains(&termino))
    }
}

/// Compatibility of a part with a vehicle, optionally bounded by model years.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Compatibilidad {
    pub vehiculo_id: i64,
    pub anio_inicio: Option<i32>,
    pub anio_fin: Option<i32>,
    pub notas: Option<String>,
}
