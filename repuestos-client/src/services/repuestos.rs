//! Part catalog client.

use repuestos_core::models::{Compatibilidad, Repuesto};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::services::api::ApiClient;

/// Part as the backend returns it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepuestoResponse {
    pub id_repuesto: i64,
    pub nombre_repuesto: String,
    pub stock_actual: u32,
    pub costo_repuesto: Decimal,
    pub precio_sugerido: Decimal,
    pub estado_repuesto: bool,
    #[serde(default)]
    pub ids_categorias: Vec<i64>,
    #[serde(default)]
    pub tags_busqueda: Option<String>,
    #[serde(default)]
    pub id_sistema: Option<i64>,
    #[serde(default)]
    pub compatibilidades: Vec<CompatibilidadResponse>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilidadResponse {
    pub vehiculo_id: i64,
    #[serde(default)]
    pub anio_inicio: Option<i32>,
    #[serde(default)]
    pub anio_fin: Option<i32>,
    #[serde(default)]
    pub notas: Option<String>,
}

impl From<RepuestoResponse> for Repuesto {
    fn from(wire: RepuestoResponse) -> Self {
        Repuesto {
            id_repuesto: wire.id_repuesto,
            nombre: wire.nombre_repuesto,
            stock_actual: wire.stock_actual,
            costo: wire.costo_repuesto,
            precio_sugerido: wire.precio_sugerido,
            estado: wire.estado_repuesto,
            ids_categorias: wire.ids_categorias,
            tags_busqueda: wire.tags_busqueda,
            id_sistema: wire.id_sistema,
            compatibilidades: wire.compatibilidades.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<CompatibilidadResponse> for Compatibilidad {
    fn from(wire: CompatibilidadResponse) -> Self {
        Compatibilidad {
            vehiculo_id: wire.vehiculo_id,
            anio_inicio: wire.anio_inicio,
            anio_fin: wire.anio_fin,
            notas: wire.notas,
        }
    }
}

/// Input for registering a part; the id is assigned by the backend.
#[derive(Debug, Clone)]
pub struct NuevoRepuesto {
    pub nombre: String,
    pub stock_actual: u32,
    pub costo: Decimal,
    pub precio_sugerido: Decimal,
    pub ids_categorias: Vec<i64>,
    pub tags_busqueda: Option<String>,
    pub id_sistema: Option<i64>,
    pub compatibilidades: Vec<Compatibilidad>,
}

/// Part as the backend expects it.
#[derive(Debug, Serialize)]
struct RepuestoRequest<'a> {
    id_repuesto: Option<i64>,
    nombre_repuesto: &'a str,
    stock_actual: u32,
    costo_repuesto: Decimal,
    precio_sugerido: Decimal,
    estado_repuesto: bool,
    ids_categorias: &'a [i64],
    #[serde(skip_serializing_if = "Option::is_none")]
    tags_busqueda: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    id_sistema: Option<i64>,
    compatibilidades: Vec<CompatibilidadRequest<'a>>,
}

#[derive(Debug, Serialize)]
struct CompatibilidadRequest<'a> {
    vehiculo_id: i64,
    anio_inicio: Option<i32>,
    anio_fin: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    notas: Option<&'a str>,
}

fn codificar_compatibilidades(compatibilidades: &[Compatibilidad]) -> Vec<CompatibilidadRequest<'_>> {
    compatibilidades
        .iter()
        .map(|c| CompatibilidadRequest {
            vehiculo_id: c.vehiculo_id,
            anio_inicio: c.anio_inicio,
            anio_fin: c.anio_fin,
            notas: c.notas.as_deref(),
        })
        .collect()
}

pub struct RepuestoClient {
    api: ApiClient,
}

impl RepuestoClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// `GET /repuesto/findAll`. Feeds both the catalog list and the part
    /// picker of the sale and purchase forms.
    pub async fn find_all(&self) -> Result<Vec<Repuesto>, ApiError> {
        let respuestas: Vec<RepuestoResponse> = self.api.get("/repuesto/findAll").await?;
        Ok(respuestas.into_iter().map(Into::into).collect())
    }

    /// `GET /repuesto/findById/{id}`. Used to refresh the snapshot (price,
    /// stock) right before a part is added to a document.
    pub async fn find_by_id(&self, id: i64) -> Result<Repuesto, ApiError> {
        let respuesta: RepuestoResponse = self
            .api
            .get_opcional(&format!("/repuesto/findById/{id}"))
            .await?
            .ok_or(ApiError::NoEncontrado)?;
        Ok(respuesta.into())
    }

    /// `POST /repuesto`.
    pub async fn crear(&self, nuevo: &NuevoRepuesto) -> Result<(), ApiError> {
        let request = RepuestoRequest {
            id_repuesto: None,
            nombre_repuesto: &nuevo.nombre,
            stock_actual: nuevo.stock_actual,
            costo_repuesto: nuevo.costo,
            precio_sugerido: nuevo.precio_sugerido,
            estado_repuesto: true,
            ids_categorias: &nuevo.ids_categorias,
            tags_busqueda: nuevo.tags_busqueda.as_deref(),
            id_sistema: nuevo.id_sistema,
            compatibilidades: codificar_compatibilidades(&nuevo.compatibilidades),
        };
        let _: serde_json::Value = self.api.post("/repuesto", &request).await?;
        Ok(())
    }

    /// `POST /repuesto/update`.
    pub async fn actualizar(&self, repuesto: &Repuesto) -> Result<(), ApiError> {
        let request = RepuestoRequest {
            id_repuesto: Some(repuesto.id_repuesto),
            nombre_repuesto: &repuesto.nombre,
            stock_actual: repuesto.stock_actual,
            costo_repuesto: repuesto.costo,
            precio_sugerido: repuesto.precio_sugerido,
            estado_repuesto: repuesto.estado,
            ids_categorias: &repuesto.ids_categorias,
            tags_busqueda: repuesto.tags_busqueda.as_deref(),
            id_sistema: repuesto.id_sistema,
            compatibilidades: codificar_compatibilidades(&repuesto.compatibilidades),
        };
        let _: serde_json::Value = self.api.post("/repuesto/update", &request).await?;
        Ok(())
    }

    /// `GET /repuesto/delete/{id}` — a deactivation on the backend.
    pub async fn eliminar(&self, id: i64) -> Result<(), ApiError> {
        let _: serde_json::Value = self.api.get(&format!("/repuesto/delete/{id}")).await?;
        Ok(())
    }

    /// Narrow a fetched catalog with the picker's search box term.
    pub fn filtrar<'a>(repuestos: &'a [Repuesto], termino: &str) -> Vec<&'a Repuesto> {
        repuestos
            .iter()
            .filter(|r| r.coincide_busqueda(termino))
            .collect()
    }
}
