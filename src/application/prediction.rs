//! Prediction service: Orchestrates feature encoding and classification.
//!
//! This service coordinates:
//! - Classifier availability checks
//! - Feature encoding
//! - Classifier invocation
//! - Normalization into the response contract

use std::sync::Arc;

use crate::domain::{ClinicalRecord, PredictionResult};
use crate::ports::Classifier;
use crate::CardioriskError;

/// Service for running heart disease risk predictions.
///
/// Holds the classifier handle built once at startup and threaded in by
/// the caller; there is no global model state. When the artifact failed to
/// load the handle is absent and every prediction reports the service as
/// unavailable while the process keeps serving.
pub struct PredictionService<C>
where
    C: Classifier,
{
    classifier: Option<Arc<C>>,
}

impl<C> PredictionService<C>
where
    C: Classifier,
{
    /// Create a new prediction service over an optional classifier handle.
    pub fn new(classifier: Option<Arc<C>>) -> Self {
        Self { classifier }
    }

    /// Whether a classifier is loaded and predictions can be served.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.classifier.is_some()
    }

    /// Run one prediction.
    ///
    /// Performs the full pipeline:
    /// 1. Check that a classifier is loaded
    /// 2. Encode the record into the model's feature vector
    /// 3. Invoke the classifier
    /// 4. Normalize the outcome into the response contract
    ///
    /// # Errors
    /// Returns `ModelNotLoaded` when no classifier is available and
    /// `Prediction` when the classifier itself fails. Never panics and
    /// never returns a partial result.
    pub fn predict(&self, record: &ClinicalRecord) -> Result<PredictionResult, CardioriskError> {
        let classifier = self
            .classifier
            .as_ref()
            .ok_or(CardioriskError::ModelNotLoaded)?;

        tracing::debug!("Encoding clinical record...");
        let features = record.encode();

        tracing::debug!("Invoking classifier...");
        let outcome = classifier
            .classify(&features)
            .map_err(|e| CardioriskError::Prediction(e.to_string()))?;

        let result = PredictionResult::new(outcome.class, outcome.predicted_probability());

        tracing::info!(
            "Prediction complete: risk_score={}, confidence={:.2}%, category={}",
            result.risk_score,
            result.confidence,
            result.risk_category
        );

        Ok(result)
    }
}
