//! File-backed session storage.
//!
//! The signed-in user is one JSON blob persisted under a single fixed
//! location, the way the browser client kept it under one local-storage key:
//! written on sign-in, re-read on every query, deleted on sign-out. A blob
//! that no longer parses is removed on sight and treated as signed-out.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use repuestos_core::models::Usuario;
use tracing::warn;

use crate::error::ApiError;

pub struct SesionStore {
    archivo: PathBuf,
}

impl SesionStore {
    pub fn new(archivo: PathBuf) -> Self {
        Self { archivo }
    }

    pub fn archivo(&self) -> &Path {
        &self.archivo
    }

    /// Persist the signed-in user. Called by the auth client on login.
    pub fn iniciar(&self, usuario: &Usuario) -> Result<(), ApiError> {
        let blob = serde_json::to_vec_pretty(usuario)?;
        fs::write(&self.archivo, blob)?;
        Ok(())
    }

    /// The current user, or `None` when there is no session.
    pub fn actual(&self) -> Option<Usuario> {
        let blob = match fs::read(&self.archivo) {
            Ok(blob) => blob,
            Err(err) => {
                if err.kind() != ErrorKind::NotFound {
                    warn!("could not read session file: {}", err);
                }
                return None;
            }
        };

        match serde_json::from_slice(&blob) {
            Ok(usuario) => Some(usuario),
            Err(err) => {
                // A corrupt blob is unrecoverable; drop it so the next read
                // starts clean.
                warn!("discarding unreadable session blob: {}", err);
                let _ = fs::remove_file(&self.archivo);
                None
            }
        }
    }

    /// End the session. Idempotent.
    pub fn cerrar(&self) -> Result<(), ApiError> {
        match fs::remove_file(&self.archivo) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    pub fn esta_autenticado(&self) -> bool {
        self.actual().is_some()
    }

    /// Role guard for the admin-only actions.
    pub fn es_admin(&self) -> bool {
        self.actual().is_some_and(|usuario| usuario.es_admin())
    }
}
