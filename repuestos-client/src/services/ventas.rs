//! Sales client.

use chrono::NaiveDateTime;
use repuestos_core::borrador::VentaBorrador;
use repuestos_core::detalle::DetalleVenta;
use repuestos_core::models::Venta;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::services::api::ApiClient;
use crate::services::repuestos::RepuestoClient;

/// Sale as the backend returns it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VentaResponse {
    pub id_venta: i64,
    pub nombre_cliente: String,
    #[serde(deserialize_with = "crate::utils::fechas::deserializar")]
    pub fecha_venta: NaiveDateTime,
    pub total: Decimal,
    pub descuento_total: Decimal,
    pub detalle_venta: Vec<DetalleVentaResponse>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetalleVentaResponse {
    pub total: Decimal,
    pub cantidad: u32,
    pub precio_unitario_repuesto: Decimal,
    pub precio_sugerido_repuesto: Decimal,
    /// Server-computed; read-only here.
    #[serde(default)]
    pub descuento: Option<Decimal>,
    pub id_repuesto: i64,
    pub costo_repuesto: Decimal,
}

impl From<VentaResponse> for Venta {
    fn from(wire: VentaResponse) -> Self {
        Venta {
            id_venta: wire.id_venta,
            nombre_cliente: wire.nombre_cliente,
            fecha: wire.fecha_venta,
            total: wire.total,
            descuento_total: wire.descuento_total,
            lineas: wire
                .detalle_venta
                .into_iter()
                .map(|d| DetalleVenta {
                    id_repuesto: d.id_repuesto,
                    cantidad: d.cantidad,
                    precio_sugerido: d.precio_sugerido_repuesto,
                    precio_unitario: d.precio_unitario_repuesto,
                    costo: d.costo_repuesto,
                    total: d.total,
                })
                .collect(),
        }
    }
}

/// Sale as the backend expects it. The document total travels with the
/// request; discounts are computed server-side and never sent.
#[derive(Debug, Serialize)]
struct VentaRequest<'a> {
    id_venta: Option<i64>,
    nombre_cliente: &'a str,
    total_venta: Decimal,
    detalle_venta: Vec<DetalleVentaRequest>,
}

#[derive(Debug, Serialize)]
struct DetalleVentaRequest {
    id_repuesto: i64,
    cantidad: u32,
    precio_sugerido_repuesto: Decimal,
    precio_unitario_repuesto: Decimal,
    total: Decimal,
    costo_repuesto: Decimal,
}

fn codificar(borrador: &VentaBorrador) -> VentaRequest<'_> {
    VentaRequest {
        id_venta: borrador.id_venta,
        nombre_cliente: &borrador.nombre_cliente,
        total_venta: borrador.total(),
        detalle_venta: borrador
            .detalle
            .lineas()
            .iter()
            .map(|linea| DetalleVentaRequest {
                id_repuesto: linea.id_repuesto,
                cantidad: linea.cantidad,
                precio_sugerido_repuesto: linea.precio_sugerido,
                precio_unitario_repuesto: linea.precio_unitario,
                total: linea.total,
                costo_repuesto: linea.costo,
            })
            .collect(),
    }
}

pub struct VentaClient {
    api: ApiClient,
}

impl VentaClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Submit a draft: `POST /ventas` for a new sale, `POST /ventas/update`
    /// when editing. The submission gate runs first; a rejected draft never
    /// reaches the wire.
    pub async fn guardar(&self, borrador: &VentaBorrador) -> Result<(), ApiError> {
        borrador.validar_envio()?;

        let request = codificar(borrador);
        let path = if borrador.modo_edicion() {
            "/ventas/update"
        } else {
            "/ventas"
        };
        let _: serde_json::Value = self.api.post(path, &request).await?;

        tracing::info!(
            total = %request.total_venta,
            lineas = request.detalle_venta.len(),
            edicion = borrador.modo_edicion(),
            "sale submitted"
        );
        Ok(())
    }

    /// `GET /ventas/findAll` — the sales history.
    pub async fn find_all(&self) -> Result<Vec<Venta>, ApiError> {
        let respuestas: Vec<VentaResponse> = self.api.get("/ventas/findAll").await?;
        Ok(respuestas.into_iter().map(Into::into).collect())
    }

    /// `GET /ventas/findById/{id}`. The backend answers `null` for an
    /// unknown id; that becomes `NoEncontrado` so the caller can fall back
    /// to the history view.
    pub async fn find_by_id(&self, id: i64) -> Result<Venta, ApiError> {
        let respuesta: VentaResponse = self
            .api
            .get_opcional(&format!("/ventas/findById/{id}"))
            .await?
            .ok_or(ApiError::NoEncontrado)?;
        Ok(respuesta.into())
    }

    /// `GET /ventas/delete/{id}`; the backend reports success as a bare
    /// boolean.
    pub async fn eliminar(&self, id: i64) -> Result<bool, ApiError> {
        self.api.get(&format!("/ventas/delete/{id}")).await
    }

    /// Load a persisted sale and rebuild an editable draft from it, fetching
    /// a fresh snapshot of every referenced part for the reference cache.
    pub async fn cargar_borrador(
        &self,
        id: i64,
        repuestos: &RepuestoClient,
    ) -> Result<VentaBorrador, ApiError> {
        let venta = self.find_by_id(id).await?;

        let snapshots = futures::future::try_join_all(
            venta
                .lineas
                .iter()
                .map(|linea| repuestos.find_by_id(linea.id_repuesto)),
        )
        .await?;

        Ok(VentaBorrador::para_edicion(venta, snapshots)?)
    }
}
