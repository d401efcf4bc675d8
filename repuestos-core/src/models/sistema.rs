use serde::{Deserialize, Serialize};

/// Vehicle subsystem a part belongs to (brakes, suspension, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sistema {
    pub id: i64,
    pub nombre: String,
}
