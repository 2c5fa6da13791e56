//! Common test utilities for ventas integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use std::sync::Arc;

use axum::http::StatusCode;
use axum::Router;
use axum_test::TestServer;
use tempfile::TempDir;

use ventas_model::{ModelError, Scorer};
use ventas_service::{create_router, AppState, ServiceConfig};
use ventas_store::JsonFileStore;

/// Scorer returning a fixed probability vector, whatever the features.
pub struct FixedScorer(pub Vec<f64>);

impl Scorer for FixedScorer {
    fn score(&self, _features: &[f64]) -> Result<Vec<f64>, ModelError> {
        Ok(self.0.clone())
    }
}

/// Scorer that always fails, for exercising the fatal-error path.
pub struct FailingScorer;

impl Scorer for FailingScorer {
    fn score(&self, _features: &[f64]) -> Result<Vec<f64>, ModelError> {
        Err(ModelError::Invalid("scorer unavailable".into()))
    }
}

/// Test harness containing everything needed for integration tests.
pub struct TestHarness {
    /// The test server for making HTTP requests.
    pub server: TestServer,
    /// Temporary directory for the record file (kept alive for test duration).
    pub _temp_dir: TempDir,
}

impl TestHarness {
    /// Create a harness whose scorer always answers with `probabilities`.
    pub fn with_probabilities(probabilities: Vec<f64>) -> Self {
        Self::with_scorer(Arc::new(FixedScorer(probabilities)))
    }

    /// Create a harness with an arbitrary scorer.
    pub fn with_scorer(scorer: Arc<dyn Scorer>) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let data_path = temp_dir.path().join("ventas.json");
        let store = Arc::new(JsonFileStore::new(&data_path));

        let config = ServiceConfig {
            listen_addr: "127.0.0.1:0".into(),
            data_path: data_path.to_string_lossy().to_string(),
            model_path: "unused".into(),
            max_body_bytes: 64 * 1024,
            request_timeout_seconds: 30,
        };

        let state = AppState::new(store, scorer, config);
        let router: Router = create_router(state);

        let server = TestServer::new(router).expect("Failed to create test server");

        Self {
            server,
            _temp_dir: temp_dir,
        }
    }

    /// Register one sale through the form endpoint.
    pub async fn register(&self, cliente_id: &str, total: &str, fecha: &str) {
        self.server
            .post("/")
            .form(&[
                ("cliente_id", cliente_id),
                ("total", total),
                ("fecha", fecha),
            ])
            .await
            .assert_status(StatusCode::SEE_OTHER);
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        // Uniform probabilities; ties resolve to the first tier
        Self::with_probabilities(vec![0.25, 0.25, 0.25, 0.25])
    }
}
