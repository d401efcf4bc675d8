//! Purchases client. Same shape as the sales client over `/compras`.

use chrono::NaiveDateTime;
use repuestos_core::borrador::CompraBorrador;
use repuestos_core::detalle::DetalleCompra;
use repuestos_core::models::Compra;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::services::api::ApiClient;
use crate::services::repuestos::RepuestoClient;

/// Purchase as the backend returns it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompraResponse {
    pub id_compra: i64,
    pub nombre_proveedor: String,
    #[serde(deserialize_with = "crate::utils::fechas::deserializar")]
    pub fecha_compra: NaiveDateTime,
    pub total: Decimal,
    pub detalle_compra: Vec<DetalleCompraResponse>,
    pub estado_compra: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetalleCompraResponse {
    pub total: Decimal,
    pub cantidad: u32,
    pub id_repuesto: i64,
    pub costo_repuesto: Decimal,
}

impl From<CompraResponse> for Compra {
    fn from(wire: CompraResponse) -> Self {
        Compra {
            id_compra: wire.id_compra,
            nombre_proveedor: wire.nombre_proveedor,
            fecha: wire.fecha_compra,
            total: wire.total,
            estado: wire.estado_compra,
            lineas: wire
                .detalle_compra
                .into_iter()
                .map(|d| DetalleCompra {
                    id_repuesto: d.id_repuesto,
                    cantidad: d.cantidad,
                    costo: d.costo_repuesto,
                    total: d.total,
                })
                .collect(),
        }
    }
}

/// Purchase as the backend expects it.
#[derive(Debug, Serialize)]
struct CompraRequest<'a> {
    id_compra: Option<i64>,
    nombre_proveedor: &'a str,
    total_compra: Decimal,
    detalle_compra: Vec<DetalleCompraRequest>,
}

#[derive(Debug, Serialize)]
struct DetalleCompraRequest {
    id_repuesto: i64,
    cantidad: u32,
    total: Decimal,
    costo_repuesto: Decimal,
}

fn codificar(borrador: &CompraBorrador) -> CompraRequest<'_> {
    CompraRequest {
        id_compra: borrador.id_compra,
        nombre_proveedor: &borrador.nombre_proveedor,
        total_compra: borrador.total(),
        detalle_compra: borrador
            .detalle
            .lineas()
            .iter()
            .map(|linea| DetalleCompraRequest {
                id_repuesto: linea.id_repuesto,
                cantidad: linea.cantidad,
                total: linea.total,
                costo_repuesto: linea.costo,
            })
            .collect(),
    }
}

pub struct CompraClient {
    api: ApiClient,
}

impl CompraClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Submit a draft: `POST /compras` for a new purchase,
    /// `POST /compras/update` when editing.
    pub async fn guardar(&self, borrador: &CompraBorrador) -> Result<(), ApiError> {
        borrador.validar_envio()?;

        let request = codificar(borrador);
        let path = if borrador.modo_edicion() {
            "/compras/update"
        } else {
            "/compras"
        };
        let _: serde_json::Value = self.api.post(path, &request).await?;

        tracing::info!(
            total = %request.total_compra,
            lineas = request.detalle_compra.len(),
            edicion = borrador.modo_edicion(),
            "purchase submitted"
        );
        Ok(())
    }

    /// `GET /compras/findAll` — the purchases history.
    pub async fn find_all(&self) -> Result<Vec<Compra>, ApiError> {
        let respuestas: Vec<CompraResponse> = self.api.get("/compras/findAll").await?;
        Ok(respuestas.into_iter().map(Into::into).collect())
    }

    /// `GET /compras/findById/{id}`.
    pub async fn find_by_id(&self, id: i64) -> Result<Compra, ApiError> {
        let respuesta: CompraResponse = self
            .api
            .get_opcional(&format!("/compras/findById/{id}"))
            .await?
            .ok_or(ApiError::NoEncontrado)?;
        Ok(respuesta.into())
    }

    /// `GET /compras/delete/{id}`.
    pub async fn eliminar(&self, id: i64) -> Result<bool, ApiError> {
        self.api.get(&format!("/compras/delete/{id}")).await
    }

    /// Load a persisted purchase and rebuild an editable draft from it.
    pub async fn cargar_borrador(
        &self,
        id: i64,
        repuestos: &RepuestoClient,
    ) -> Result<CompraBorrador, ApiError> {
        let compra = self.find_by_id(id).await?;

        let snapshots = futures::future::try_join_all(
            compra
                .lineas
                .iter()
                .map(|linea| repuestos.find_by_id(linea.id_repuesto)),
        )
        .await?;

        Ok(CompraBorrador::para_edicion(compra, snapshots)?)
    }
}
