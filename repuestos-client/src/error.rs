use repuestos_core::error::{DetalleError, EnvioError};
use thiserror::Error;
use validator::ValidationErrors;

/// Client error taxonomy.
///
/// Validation rejections mutate nothing; transport and backend failures
/// leave the in-memory draft untouched so the user may retry; `NoEncontrado`
/// on a document load tells the caller to fall back to the list view.
/// Nothing is retried automatically.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("validation error: {0}")]
    Validacion(#[from] ValidationErrors),

    #[error("document rejected: {0}")]
    Envio(#[from] EnvioError),

    #[error("line item rejected: {0}")]
    Detalle(#[from] DetalleError),

    #[error("resource not found")]
    NoEncontrado,

    #[error("invalid credentials")]
    NoAutorizado,

    #[error("backend error {status}: {message}")]
    Backend { status: u16, message: String },

    #[error("request failed: {0}")]
    Transporte(#[from] reqwest::Error),

    #[error("configuration error: {0}")]
    Configuracion(#[from] config::ConfigError),

    #[error("session storage error: {0}")]
    Sesion(anyhow::Error),
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        ApiError::Sesion(anyhow::Error::new(err))
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Sesion(anyhow::Error::new(err))
    }
}
