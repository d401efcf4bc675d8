//! Profit dashboard client.

use repuestos_core::models::FlashGanancias;

use crate::error::ApiError;
use crate::services::api::ApiClient;

pub struct DashboardClient {
    api: ApiClient,
}

impl DashboardClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// `GET /dashboard/flash-ganancias` — accumulated profit and the
    /// per-partner split, both computed server-side.
    pub async fn flash_ganancias(&self) -> Result<FlashGanancias, ApiError> {
        self.api.get("/dashboard/flash-ganancias").await
    }
}
