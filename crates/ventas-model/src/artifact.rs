//! The exported weight artifact.
//!
//! The training pipeline exports the network as a JSON document:
//!
//! ```json
//! {
//!   "layers": [
//!     {"weights": [[...], ...], "biases": [...], "activation": "relu"},
//!     {"weights": [[...], ...], "biases": [...], "activation": "softmax"}
//!   ]
//! }
//! ```
//!
//! `weights` is indexed `[input][output]`, so a layer with N inputs and M
//! units has N rows of M columns and M biases.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// A fully-connected network as exported by the training pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    /// Dense layers, applied in order.
    pub layers: Vec<DenseLayer>,
}

/// One dense layer: weight matrix, bias vector, activation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DenseLayer {
    /// Weight matrix, `weights[input][output]`.
    pub weights: Vec<Vec<f64>>,

    /// Bias per output unit.
    pub biases: Vec<f64>,

    /// Activation applied to the layer output.
    pub activation: Activation,
}

/// Supported activation functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Activation {
    /// `max(0, x)` per unit.
    Relu,
    /// Normalized exponentials across the layer.
    Softmax,
    /// Identity.
    Linear,
}

impl DenseLayer {
    /// Number of inputs this layer accepts.
    #[must_use]
    pub fn input_dim(&self) -> usize {
        self.weights.len()
    }

    /// Number of units this layer produces.
    #[must_use]
    pub fn output_dim(&self) -> usize {
        self.biases.len()
    }
}

impl ModelArtifact {
    /// Load an artifact from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON, or
    /// fails structural validation.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(&path).map_err(|e| ModelError::Io(e.to_string()))?;
        Self::from_str(&contents)
    }

    /// Parse an artifact from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not parse or fails structural
    /// validation.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(contents: &str) -> Result<Self> {
        let artifact: Self =
            serde_json::from_str(contents).map_err(|e| ModelError::Parse(e.to_string()))?;
        artifact.validate()?;
        Ok(artifact)
    }

    /// Number of inputs the network accepts.
    #[must_use]
    pub fn input_dim(&self) -> usize {
        self.layers.first().map_or(0, DenseLayer::input_dim)
    }

    /// Number of outputs the network produces.
    #[must_use]
    pub fn output_dim(&self) -> usize {
        self.layers.last().map_or(0, DenseLayer::output_dim)
    }

    /// Check that the layers form a well-shaped network: no empty layers,
    /// rectangular weight matrices, and chained dimensions.
    fn validate(&self) -> Result<()> {
        if self.layers.is_empty() {
            return Err(ModelError::Invalid("artifact has no layers".into()));
        }

        let mut expected_inputs = None;
        for (i, layer) in self.layers.iter().enumerate() {
            if layer.input_dim() == 0 || layer.output_dim() == 0 {
                return Err(ModelError::Invalid(format!("layer {i} is empty")));
            }

            for row in &layer.weights {
                if row.len() != layer.output_dim() {
                    return Err(ModelError::Invalid(format!(
                        "layer {i} weight rows do not match its {} biases",
                        layer.output_dim()
                    )));
                }
            }

            if let Some(expected) = expected_inputs {
                if layer.input_dim() != expected {
                    return Err(ModelError::Invalid(format!(
                        "layer {i} expects {} inputs but the previous layer produces {expected}",
                        layer.input_dim()
                    )));
                }
            }
            expected_inputs = Some(layer.output_dim());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_two_layer_artifact() {
        let json = r#"{
            "layers": [
                {"weights": [[1.0, 0.0], [0.0, 1.0], [1.0, 1.0]],
                 "biases": [0.0, 0.0],
                 "activation": "relu"},
                {"weights": [[1.0, 0.0, 0.0, 0.0], [0.0, 1.0, 0.0, 0.0]],
                 "biases": [0.0, 0.0, 0.0, 0.0],
                 "activation": "softmax"}
            ]
        }"#;

        let artifact = ModelArtifact::from_str(json).unwrap();

        assert_eq!(artifact.layers.len(), 2);
        assert_eq!(artifact.input_dim(), 3);
        assert_eq!(artifact.output_dim(), 4);
        assert_eq!(artifact.layers[0].activation, Activation::Relu);
    }

    #[test]
    fn loads_from_disk() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("classifier.json");
        fs::write(
            &path,
            r#"{"layers": [{"weights": [[0.1]], "biases": [0.2], "activation": "linear"}]}"#,
        )
        .unwrap();

        let artifact = ModelArtifact::from_path(&path).unwrap();
        assert_eq!(artifact.layers.len(), 1);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = ModelArtifact::from_path("does/not/exist.json").unwrap_err();
        assert!(matches!(err, ModelError::Io(_)));
    }

    #[test]
    fn rejects_empty_artifact() {
        let err = ModelArtifact::from_str(r#"{"layers": []}"#).unwrap_err();
        assert!(matches!(err, ModelError::Invalid(_)));
    }

    #[test]
    fn rejects_ragged_weight_matrix() {
        let json = r#"{
            "layers": [
                {"weights": [[1.0, 2.0], [1.0]], "biases": [0.0, 0.0], "activation": "linear"}
            ]
        }"#;

        let err = ModelArtifact::from_str(json).unwrap_err();
        assert!(matches!(err, ModelError::Invalid(_)));
    }

    #[test]
    fn rejects_mismatched_layer_chain() {
        let json = r#"{
            "layers": [
                {"weights": [[1.0, 2.0]], "biases": [0.0, 0.0], "activation": "relu"},
                {"weights": [[1.0]], "biases": [0.0], "activation": "linear"}
            ]
        }"#;

        let err = ModelArtifact::from_str(json).unwrap_err();
        assert!(matches!(err, ModelError::Invalid(_)));
    }

    #[test]
    fn rejects_unknown_activation() {
        let json = r#"{
            "layers": [
                {"weights": [[1.0]], "biases": [0.0], "activation": "tanh"}
            ]
        }"#;

        let err = ModelArtifact::from_str(json).unwrap_err();
        assert!(matches!(err, ModelError::Parse(_)));
    }
}
