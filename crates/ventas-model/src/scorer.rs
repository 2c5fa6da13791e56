//! The scoring boundary and its neural implementation.

use std::path::Path;

use ventas_core::aggregate::FEATURE_DIM;
use ventas_core::Tier;

use crate::artifact::{Activation, DenseLayer, ModelArtifact};
use crate::error::{ModelError, Result};

/// The external scoring function: a feature vector in, one probability per
/// tier out.
///
/// Handlers hold the scorer behind `Arc<dyn Scorer>` and pass it down
/// explicitly; tests substitute a fixed-output implementation.
pub trait Scorer: Send + Sync {
    /// Score a feature vector into a probability distribution over tiers.
    ///
    /// # Errors
    ///
    /// Returns an error if the vector does not match the model's input
    /// arity or evaluation fails.
    fn score(&self, features: &[f64]) -> Result<Vec<f64>>;
}

/// Dense feed-forward scorer over a loaded weight artifact.
#[derive(Debug)]
pub struct NeuralScorer {
    layers: Vec<DenseLayer>,
}

impl NeuralScorer {
    /// Load the scorer from a weight artifact file.
    ///
    /// The artifact must accept the three RFM features and produce one
    /// probability per tier; anything else is rejected here so scoring
    /// itself cannot encounter a mis-shaped network.
    ///
    /// # Errors
    ///
    /// Returns an error if the artifact cannot be read or has the wrong
    /// input/output arity.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let artifact = ModelArtifact::from_path(&path)?;
        let scorer = Self::from_artifact(artifact)?;

        tracing::info!(
            path = %path.as_ref().display(),
            layers = scorer.layers.len(),
            "classifier model loaded"
        );

        Ok(scorer)
    }

    /// Build the scorer from an already-parsed artifact.
    ///
    /// # Errors
    ///
    /// Returns an error if the network's input/output arity does not match
    /// the feature vector and tier set.
    pub fn from_artifact(artifact: ModelArtifact) -> Result<Self> {
        if artifact.input_dim() != FEATURE_DIM {
            return Err(ModelError::Invalid(format!(
                "model accepts {} inputs, the feature vector has {FEATURE_DIM}",
                artifact.input_dim()
            )));
        }
        if artifact.output_dim() != Tier::COUNT {
            return Err(ModelError::Invalid(format!(
                "model produces {} outputs, there are {} tiers",
                artifact.output_dim(),
                Tier::COUNT
            )));
        }

        Ok(Self {
            layers: artifact.layers,
        })
    }
}

impl Scorer for NeuralScorer {
    fn score(&self, features: &[f64]) -> Result<Vec<f64>> {
        let mut values = features.to_vec();
        for layer in &self.layers {
            values = forward(layer, &values)?;
        }
        Ok(values)
    }
}

/// Evaluate one dense layer.
fn forward(layer: &DenseLayer, input: &[f64]) -> Result<Vec<f64>> {
    if input.len() != layer.input_dim() {
        return Err(ModelError::Arity {
            expected: layer.input_dim(),
            got: input.len(),
        });
    }

    let mut output = layer.biases.clone();
    for (x, row) in input.iter().zip(&layer.weights) {
        for (out, w) in output.iter_mut().zip(row) {
            *out += x * w;
        }
    }

    match layer.activation {
        Activation::Relu => {
            for v in &mut output {
                *v = v.max(0.0);
            }
        }
        Activation::Softmax => softmax(&mut output),
        Activation::Linear => {}
    }

    Ok(output)
}

/// In-place numerically stable softmax.
fn softmax(values: &mut [f64]) {
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mut sum = 0.0;
    for v in values.iter_mut() {
        *v = (*v - max).exp();
        sum += *v;
    }
    for v in values.iter_mut() {
        *v /= sum;
    }
}
