use serde::{Deserialize, Serialize};

/// Vehicle a part can be compatible with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehiculo {
    pub id: i64,
    pub marca: String,
    pub modelo: String,
}
