//! Health check operations.

use serde::{Deserialize, Serialize};

use super::ConnectorClient;
use crate::error::Result;

/// Backend health report.
#[derive(Debug, Serialize, Deserialize)]
pub struct Health {
    pub status: String,
}

impl ConnectorClient {
    /// Check backend health.
    pub async fn health(&self) -> Result<Health> {
        self.get_json("/health").await
    }
}
