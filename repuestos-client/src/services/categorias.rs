//! Category client.

use repuestos_core::models::Categoria;
use serde::Serialize;

use crate::error::ApiError;
use crate::services::api::ApiClient;

/// Category as the backend expects it.
#[derive(Debug, Serialize)]
struct CategoriaRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    id_categoria: Option<i64>,
    nombre_categoria: &'a str,
}

pub struct CategoriaClient {
    api: ApiClient,
}

impl CategoriaClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// `GET /categoria/findAll`.
    pub async fn find_all(&self) -> Result<Vec<Categoria>, ApiError> {
        self.api.get("/categoria/findAll").await
    }

    /// `GET /categoria/findById/{id}`.
    pub async fn find_by_id(&self, id: i64) -> Result<Categoria, ApiError> {
        self.api
            .get_opcional(&format!("/categoria/findById/{id}"))
            .await?
            .ok_or(ApiError::NoEncontrado)
    }

    /// `POST /categoria`.
    pub async fn crear(&self, nombre: &str) -> Result<(), ApiError> {
        let _: serde_json::Value = self
            .api
            .post(
                "/categoria",
                &CategoriaRequest {
                    id_categoria: None,
                    nombre_categoria: nombre,
                },
            )
            .await?;
        Ok(())
    }

    /// `POST /categoria/update`.
    pub async fn actualizar(&self, categoria: &Categoria) -> Result<(), ApiError> {
        let _: serde_json::Value = self
            .api
            .post(
                "/categoria/update",
                &CategoriaRequest {
                    id_categoria: Some(categoria.id),
                    nombre_categoria: &categoria.nombre,
                },
            )
            .await?;
        Ok(())
    }

    /// `GET /categoria/delete/{id}` — a deactivation on the backend.
    pub async fn eliminar(&self, id: i64) -> Result<(), ApiError> {
        let _: serde_json::Value = self.api.get(&format!("/categoria/delete/{id}")).await?;
        Ok(())
    }
}
