//! Generator configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the VISS WMS generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Base URL of the VISS server's dataset collection
    pub viss_server_host: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            viss_server_host: "http://localhost:8080/viss/datasets".to_string(),
        }
    }
}
