use serde::{Deserialize, Serialize};

/// Part category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Categoria {
    pub id: i64,
    pub nombre: String,
}
