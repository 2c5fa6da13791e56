//! Service configuration.

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Address to listen on (default: "0.0.0.0:8080").
    pub listen_addr: String,

    /// Path to the JSON record file (default: "data/ventas.json").
    pub data_path: String,

    /// Path to the classifier weight artifact (default:
    /// "model/classifier.json").
    pub model_path: String,

    /// Maximum request body size in bytes.
    pub max_body_bytes: usize,

    /// Request timeout in seconds.
    pub request_timeout_seconds: u64,
}

impl ServiceConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            listen_addr: std::env::var("LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".into()),
            data_path: std::env::var("DATA_PATH").unwrap_or_else(|_| "data/ventas.json".into()),
            model_path: std::env::var("MODEL_PATH")
                .unwrap_or_else(|_| "model/classifier.json".into()),
            max_body_bytes: std::env::var("MAX_BODY_BYTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(64 * 1024),
            request_timeout_seconds: std::env::var("REQUEST_TIMEOUT_SECONDS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".into(),
            data_path: "data/ventas.json".into(),
            model_path: "model/classifier.json".into(),
            max_body_bytes: 64 * 1024,
            request_timeout_seconds: 30,
        }
    }
}
