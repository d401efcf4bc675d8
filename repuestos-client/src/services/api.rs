//! Shared HTTP plumbing for the resource clients.

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::ApiSettings;
use crate::error::ApiError;

/// Correlation header attached to every outgoing request.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// `{status, message, data}` envelope used by the sistemas and vehículos
/// endpoints.
#[derive(Debug, Deserialize)]
pub struct RespuestaApi<T> {
    pub status: bool,
    pub message: String,
    pub data: Option<T>,
}

/// Error body shape the backend uses for failed operations.
#[derive(Debug, Deserialize)]
struct CuerpoError {
    message: Option<String>,
    error: Option<String>,
}

/// Thin wrapper over `reqwest::Client` bound to the backend base URL.
///
/// Cheap to clone; every resource client holds its own copy.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    settings: ApiSettings,
}

impl ApiClient {
    pub fn new(settings: ApiSettings) -> Self {
        Self {
            client: Client::new(),
            settings,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.settings.base_url
    }

    /// GET `{base_url}{path}` and decode the JSON body.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.settings.base_url, path);
        let response = self
            .client
            .get(&url)
            .header(REQUEST_ID_HEADER, Uuid::new_v4().to_string())
            .send()
            .await
            .map_err(|e| {
                tracing::error!("GET {} failed: {}", url, e);
                ApiError::Transporte(e)
            })?;
        Self::decodificar(response).await
    }

    /// GET for endpoints that answer `null` when the resource is missing;
    /// the absent body becomes `None`.
    pub async fn get_opcional<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Option<T>, ApiError> {
        self.get(path).await
    }

    /// POST a JSON body to `{base_url}{path}` and decode the JSON response.
    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.settings.base_url, path);
        let response = self
            .client
            .post(&url)
            .header(REQUEST_ID_HEADER, Uuid::new_v4().to_string())
            .json(body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("POST {} failed: {}", url, e);
                ApiError::Transporte(e)
            })?;
        Self::decodificar(response).await
    }

    /// Unwrap a `{status, message, data}` envelope, surfacing a declined
    /// `status` as a backend error.
    pub fn desenvolver<T>(respuesta: RespuestaApi<T>) -> Result<T, ApiError> {
        if !respuesta.status {
            return Err(ApiError::Backend {
                status: StatusCode::OK.as_u16(),
                message: respuesta.message,
            });
        }
        respuesta.data.ok_or(ApiError::NoEncontrado)
    }

    /// Map non-success statuses into the error taxonomy; decode otherwise.
    async fn decodificar<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        match status {
            StatusCode::UNAUTHORIZED => Err(ApiError::NoAutorizado),
            StatusCode::NOT_FOUND => Err(ApiError::NoEncontrado),
            _ => {
                let message = response
                    .json::<CuerpoError>()
                    .await
                    .ok()
                    .and_then(|cuerpo| cuerpo.message.or(cuerpo.error))
                    .unwrap_or_else(|| {
                        status.canonical_reason().unwrap_or("unknown error").to_string()
                    });
                Err(ApiError::Backend {
                    status: status.as_u16(),
                    message,
                })
            }
        }
    }
}
