//! repuestos-client: typed client for the repuestos inventory and sales
//! backend.
//!
//! One resource client per backend endpoint family, a file-backed session
//! store, and the configuration that binds them. Domain types and the
//! line-item aggregation live in `repuestos-core`.

pub mod config;
pub mod error;
pub mod services;
pub mod session;
pub mod utils;

use std::sync::Arc;

use crate::config::Settings;
use crate::services::api::ApiClient;
use crate::services::{
    AuthClient, CategoriaClient, CompraClient, DashboardClient, RepuestoClient, SistemaClient,
    VehiculoClient, VentaClient,
};
use crate::session::SesionStore;

/// Shared application state bundling the service clients and the session.
///
/// This is the one explicitly passed context the whole client runs on:
/// created after configuration is loaded, dropped when the user is done.
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AuthClient>,
    pub repuestos: Arc<RepuestoClient>,
    pub ventas: Arc<VentaClient>,
    pub compras: Arc<CompraClient>,
    pub categorias: Arc<CategoriaClient>,
    pub sistemas: Arc<SistemaClient>,
    pub vehiculos: Arc<VehiculoClient>,
    pub dashboard: Arc<DashboardClient>,
    pub sesion: Arc<SesionStore>,
}

impl AppState {
    pub fn new(settings: &Settings) -> Self {
        let api = ApiClient::new(settings.api.clone());
        let sesion = Arc::new(SesionStore::new(settings.sesion.archivo.clone()));

        Self {
            auth: Arc::new(AuthClient::new(api.clone(), sesion.clone())),
            repuestos: Arc::new(RepuestoClient::new(api.clone())),
            ventas: Arc::new(VentaClient::new(api.clone())),
            compras: Arc::new(CompraClient::new(api.clone())),
            categorias: Arc::new(CategoriaClient::new(api.clone())),
            sistemas: Arc::new(SistemaClient::new(api.clone())),
            vehiculos: Arc::new(VehiculoClient::new(api.clone())),
            dashboard: Arc::new(DashboardClient::new(api)),
            sesion,
        }
    }

    /// Build the state from layered configuration (file + environment).
    pub fn desde_configuracion() -> Result<Self, crate::error::ApiError> {
        let settings = config::get_configuration()?;
        Ok(Self::new(&settings))
    }
}
