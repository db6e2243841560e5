//! Logistic regression adapter over the training pipeline's JSON export.
//!
//! The Python training pipeline fits a standard scaler plus a binary
//! logistic regression and exports the fitted parameters as JSON. This
//! adapter loads that export, validates it against the feature schema, and
//! implements [`Classifier`] with plain f64 arithmetic.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::domain::{FeatureVector, RiskClass, FEATURE_NAMES};
use crate::ports::{ClassOutcome, Classifier, ClassifierError};

/// Errors that can occur while loading a classifier artifact.
#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("Failed to read classifier artifact {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Classifier artifact is not valid JSON: {0}")]
    Format(#[from] serde_json::Error),

    #[error("Classifier artifact rejected: {0}")]
    Invalid(String),
}

/// Model parameters exported by the Python training pipeline.
///
/// This matches the JSON structure produced by the pipeline's export step:
/// fitted standard scaler statistics plus the regression weights, with the
/// training column order declared in `feature_names`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportedPipeline {
    pub model_name: String,
    pub classes: Vec<i64>,
    pub feature_names: Vec<String>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    pub scaler_mean: Vec<f64>,
    pub scaler_scale: Vec<f64>,
}

/// Classifier backed by an exported logistic regression.
///
/// Immutable after a successful load; one instance is shared across all
/// requests for the lifetime of the process.
#[derive(Debug)]
pub struct LogRegClassifier {
    pipeline: ExportedPipeline,
    fingerprint: String,
}

impl LogRegClassifier {
    /// Load and validate an exported model.
    ///
    /// The artifact must declare exactly the published feature schema
    /// (names and order); a retrained model with different columns fails
    /// here instead of producing silently wrong predictions.
    ///
    /// # Errors
    /// Returns error if the file is unreadable, not valid JSON, or fails
    /// the schema and parameter checks.
    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        let bytes = std::fs::read(path).map_err(|source| ArtifactError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let pipeline: ExportedPipeline = serde_json::from_slice(&bytes)?;
        Self::validate(&pipeline)?;

        let fingerprint = fingerprint(&bytes);
        tracing::info!(
            "Loaded classifier {:?} from {:?} (n_features={}, fingerprint={})",
            pipeline.model_name,
            path,
            pipeline.feature_names.len(),
            fingerprint
        );

        Ok(Self {
            pipeline,
            fingerprint,
        })
    }

    /// SHA-256 fingerprint of the artifact bytes (first 8 bytes, hex).
    #[must_use]
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    fn validate(pipeline: &ExportedPipeline) -> Result<(), ArtifactError> {
        if pipeline.classes != [0, 1] {
            return Err(ArtifactError::Invalid(format!(
                "Expected binary classes [0, 1], got {:?}",
                pipeline.classes
            )));
        }

        let n = pipeline.feature_names.len();
        if n != FEATURE_NAMES.len() {
            return Err(ArtifactError::Invalid(format!(
                "Expected {} features, got {n}",
                FEATURE_NAMES.len()
            )));
        }
        for (i, (declared, expected)) in pipeline
            .feature_names
            .iter()
            .zip(FEATURE_NAMES)
            .enumerate()
        {
            if declared != expected {
                return Err(ArtifactError::Invalid(format!(
                    "Feature {i} is {declared:?}, expected {expected:?}"
                )));
            }
        }

        if pipeline.coefficients.len() != n
            || pipeline.scaler_mean.len() != n
            || pipeline.scaler_scale.len() != n
        {
            return Err(ArtifactError::Invalid(
                "Parameter lengths do not match feature_names length".into(),
            ));
        }

        let finite = |values: &[f64]| values.iter().all(|v| v.is_finite());
        if !pipeline.intercept.is_finite()
            || !finite(&pipeline.coefficients)
            || !finite(&pipeline.scaler_mean)
        {
            return Err(ArtifactError::Invalid(
                "Model parameters must be finite".into(),
            ));
        }
        if pipeline.scaler_scale.iter().any(|s| !s.is_finite() || *s == 0.0) {
            return Err(ArtifactError::Invalid(
                "Scaler scale entries must be finite and nonzero".into(),
            ));
        }

        Ok(())
    }

    /// Linear decision score: standardize each feature with the fitted
    /// scaler, dot with the coefficients, add the intercept.
    fn decision_score(&self, features: &[f64]) -> f64 {
        let p = &self.pipeline;
        let mut score = p.intercept;
        for i in 0..features.len() {
            let standardized = (features[i] - p.scaler_mean[i]) / p.scaler_scale[i];
            score += standardized * p.coefficients[i];
        }
        score
    }
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// SHA-256 over the artifact bytes, truncated to the first 8 bytes as hex.
fn fingerprint(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    digest[..8].iter().map(|b| format!("{b:02x}")).collect()
}

impl Classifier for LogRegClassifier {
    fn classify(&self, features: &FeatureVector) -> Result<ClassOutcome, ClassifierError> {
        let score = self.decision_score(features.as_slice());
        if !score.is_finite() {
            return Err(ClassifierError::NonFiniteScore);
        }

        // A zero decision score resolves to class 0, matching the fitted
        // estimator's predict.
        let p_risk = sigmoid(score);
        let class = if score > 0.0 {
            RiskClass::Risk
        } else {
            RiskClass::NoRisk
        };

        tracing::debug!("Classified record: score={score:.4}, p_risk={p_risk:.4}");

        Ok(ClassOutcome {
            class,
            probabilities: [1.0 - p_risk, p_risk],
        })
    }
}
