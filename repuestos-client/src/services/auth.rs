//! Authentication and session bootstrap.

use std::sync::Arc;

use repuestos_core::models::Usuario;
use secrecy::{ExposeSecret, Secret};
use serde::Serialize;
use validator::{ValidationError, ValidationErrors};

use crate::error::ApiError;
use crate::services::api::ApiClient;
use crate::session::SesionStore;

/// Login form payload.
#[derive(Debug)]
pub struct Credenciales {
    pub username: String,
    pub password: Secret<String>,
}

impl Credenciales {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: Secret::new(password.into()),
        }
    }

    /// The login form requires at least 3 characters in both fields.
    pub fn validar(&self) -> Result<(), ValidationErrors> {
        let mut errores = ValidationErrors::new();
        if self.username.trim().chars().count() < 3 {
            errores.add("username", ValidationError::new("length"));
        }
        if self.password.expose_secret().chars().count() < 3 {
            errores.add("password", ValidationError::new("length"));
        }
        if errores.is_empty() {
            Ok(())
        } else {
            Err(errores)
        }
    }
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

pub struct AuthClient {
    api: ApiClient,
    sesion: Arc<SesionStore>,
}

impl AuthClient {
    pub fn new(api: ApiClient, sesion: Arc<SesionStore>) -> Self {
        Self { api, sesion }
    }

    /// `POST /auth/login`. Initializes the session store on success; a 401
    /// surfaces as `NoAutorizado` and the store is left untouched.
    pub async fn login(&self, credenciales: &Credenciales) -> Result<Usuario, ApiError> {
        credenciales.validar()?;

        let usuario: Usuario = self
            .api
            .post(
                "/auth/login",
                &LoginRequest {
                    username: &credenciales.username,
                    password: credenciales.password.expose_secret(),
                },
            )
            .await?;

        self.sesion.iniciar(&usuario)?;
        tracing::info!(username = %usuario.username, rol = usuario.rol.as_str(), "signed in");
        Ok(usuario)
    }

    /// End the session. The backend holds no server-side session state, so
    /// this is purely a local clear.
    pub fn logout(&self) -> Result<(), ApiError> {
        self.sesion.cerrar()?;
        tracing::info!("signed out");
        Ok(())
    }
}
