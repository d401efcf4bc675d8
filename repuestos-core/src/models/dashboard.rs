use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Profit snapshot backing the dashboard cards.
///
/// Both figures are computed server-side; `ganancia_socia` is the 50% split.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlashGanancias {
    pub total_ganancia: Decimal,
    pub ganancia_socia: Decimal,
}
