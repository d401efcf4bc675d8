use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,
    #[serde(default)]
    pub sesion: SesionSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiSettings {
    /// Base URL of the backend, up to and including the `/api` prefix.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8080/api".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct SesionSettings {
    /// File the session blob is persisted to between runs.
    #[serde(default = "default_archivo")]
    pub archivo: PathBuf,
}

impl Default for SesionSettings {
    fn default() -> Self {
        Self {
            archivo: default_archivo(),
        }
    }
}

fn default_archivo() -> PathBuf {
    PathBuf::from("usuario_sesion.json")
}

/// Layer an optional `configuration` file with `APP`-prefixed environment
/// variables (`APP_API__BASE_URL`, `APP_SESION__ARCHIVO`).
pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    dotenvy::dotenv().ok();

    let settings = config::Config::builder()
        .add_source(config::File::with_name("configuration").required(false))
        .add_source(config::Environment::with_prefix("APP").separator("__"))
        .build()?;

    settings.try_deserialize()
}
