//! Vehicle catalog client. Same envelope as the subsystem endpoints.

use repuestos_core::models::Vehiculo;
use serde::Serialize;

use crate::error::ApiError;
use crate::services::api::{ApiClient, RespuestaApi};

#[derive(Debug, Serialize)]
struct VehiculoRequest<'a> {
    marca: &'a str,
    modelo: &'a str,
}

pub struct VehiculoClient {
    api: ApiClient,
}

impl VehiculoClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// `GET /vehiculos/findAll`.
    pub async fn find_all(&self) -> Result<Vec<Vehiculo>, ApiError> {
        let respuesta: RespuestaApi<Vec<Vehiculo>> = self.api.get("/vehiculos/findAll").await?;
        ApiClient::desenvolver(respuesta)
    }

    /// `POST /vehiculos/create`; returns the created vehicle with its id.
    pub async fn crear(&self, marca: &str, modelo: &str) -> Result<Vehiculo, ApiError> {
        let respuesta: RespuestaApi<Vehiculo> = self
            .api
            .post("/vehiculos/create", &VehiculoRequest { marca, modelo })
            .await?;
        ApiClient::desenvolver(respuesta)
    }
}
