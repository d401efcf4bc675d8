//! Subsystem catalog client. These endpoints answer inside the
//! `{status, message, data}` envelope.

use repuestos_core::models::Sistema;
use serde::Serialize;

use crate::error::ApiError;
use crate::services::api::{ApiClient, RespuestaApi};

#[derive(Debug, Serialize)]
struct SistemaRequest<'a> {
    nombre_sistema: &'a str,
}

pub struct SistemaClient {
    api: ApiClient,
}

impl SistemaClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// `GET /sistemas/findAll`.
    pub async fn find_all(&self) -> Result<Vec<Sistema>, ApiError> {
        let respuesta: RespuestaApi<Vec<Sistema>> = self.api.get("/sistemas/findAll").await?;
        ApiClient::desenvolver(respuesta)
    }

    /// `POST /sistemas/create`; returns the created subsystem with its id.
    pub async fn crear(&self, nombre: &str) -> Result<Sistema, ApiError> {
        let respuesta: RespuestaApi<Sistema> = self
            .api
            .post("/sistemas/create", &SistemaRequest { nombre_sistema: nombre })
            .await?;
        ApiClient::desenvolver(respuesta)
    }
}
