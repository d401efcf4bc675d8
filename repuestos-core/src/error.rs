use thiserror::Error;
use validator::ValidationErrors;

/// Rejection reasons for line-item operations.
///
/// Every rejection is terminal for that one operation and leaves the line
/// collection and the reference cache untouched.
#[derive(Debug, Error)]
pub enum DetalleError {
    #[error("quantity must be at least 1")]
    CantidadInvalida,

    #[error("unit price must be greater than zero")]
    PrecioInvalido,

    #[error("not enough stock: {disponible} available")]
    StockInsuficiente { disponible: u32 },

    #[error("line index {0} out of range")]
    IndiceInvalido(usize),

    #[error("repuesto {0} has no entry in the reference cache")]
    RepuestoNoCargado(i64),

    #[error("repuesto {0} appears in more than one line")]
    RepuestoDuplicado(i64),
}

/// Rejection reasons for the document submission gate.
#[derive(Debug, Error)]
pub enum EnvioError {
    #[error("invalid document fields: {0}")]
    Campos(#[from] ValidationErrors),

    #[error("the document has no lines")]
    SinLineas,

    #[error("the document total must be greater than zero")]
    TotalInvalido,
}
