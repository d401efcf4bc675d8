//! Authenticated user and role.

use serde::{Deserialize, Serialize};

/// Role attached to a user session. Gates the admin-only list actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Rol {
    Admin,
    Vendedor,
}

impl Rol {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rol::Admin => "ADMIN",
            Rol::Vendedor => "VENDEDOR",
        }
    }

    pub fn from_string(s: &str) -> Self {
        match s {
            "ADMIN" => Rol::Admin,
            _ => Rol::Vendedor,
        }
    }
}

/// The signed-in user, as returned by the login endpoint and kept in the
/// session store for the lifetime of the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Usuario {
    pub id: i64,
    pub username: String,
    pub nombre_completo: String,
    pub rol: Rol,
}

impl Usuario {
    pub fn es_admin(&self) -> bool {
        self.rol == Rol::Admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rol_round_trips_through_wire_names() {
        assert_eq!(Rol::from_string(Rol::Admin.as_str()), Rol::Admin);
        assert_eq!(Rol::from_string(Rol::Vendedor.as_str()), Rol::Vendedor);
    }

    #[test]
    fn unknown_rol_defaults_to_vendedor() {
        assert_eq!(Rol::from_string("SUPERVISOR"), Rol::Vendedor);
    }

    #[test]
    fn usuario_deserializes_from_session_blob() {
        let usuario: Usuario = serde_json::from_str(
            r#"{"id":1,"username":"mperez","nombre_completo":"Maria Perez","rol":"ADMIN"}"#,
        )
        .unwrap();
        assert!(usuario.es_admin());
    }
}
