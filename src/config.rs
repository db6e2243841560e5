//! Configuration layer: runtime settings read from the environment.

use std::path::PathBuf;

/// Service configuration, resolved once at startup.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Socket address the HTTP server binds to
    pub api_addr: String,
    /// Path to the exported classifier artifact
    pub model_path: PathBuf,
    /// Comma-separated CORS origin allowlist, or `*` for any origin
    pub cors_origins: String,
}

impl ServiceConfig {
    /// Reads configuration from `CARDIORISK_*` environment variables,
    /// falling back to development defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let api_addr = std::env::var("CARDIORISK_API_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8000".to_string());

        let model_path = std::env::var("CARDIORISK_MODEL_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("models/heart_classifier.json"));

        let cors_origins = std::env::var("CARDIORISK_CORS_ORIGIN")
            .unwrap_or_else(|_| "http://localhost:5173,http://127.0.0.1:5173".to_string());

        Self {
            api_addr,
            model_path,
            cors_origins,
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
