//! Classifier port: Trait for binary heart disease classification.
//!
//! This trait abstracts the concrete model representation (currently a
//! logistic regression exported by the training pipeline) from the
//! application logic.

use crate::domain::{FeatureVector, RiskClass};

/// Errors that can occur during classifier invocation.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ClassifierError {
    #[error("Classifier produced a non-finite score")]
    NonFiniteScore,

    #[error("Classifier invocation failed: {0}")]
    Invocation(String),
}

/// Outcome of one classifier invocation.
#[derive(Debug, Clone, Copy)]
pub struct ClassOutcome {
    /// Predicted class label
    pub class: RiskClass,

    /// Probability distribution over [no risk, risk]
    pub probabilities: [f64; 2],
}

impl ClassOutcome {
    /// Probability the classifier assigned to the predicted class.
    #[must_use]
    pub fn predicted_probability(&self) -> f64 {
        self.probabilities[self.class.index()]
    }
}

/// Trait for binary classification over encoded feature vectors.
pub trait Classifier: Send + Sync {
    /// Classify one encoded record.
    ///
    /// Returns the discrete class together with the full class-probability
    /// distribution, so callers can report confidence for the class that
    /// was actually predicted.
    ///
    /// # Errors
    /// Returns `ClassifierError` if the model cannot score the vector.
    fn classify(&self, features: &FeatureVector) -> Result<ClassOutcome, ClassifierError>;
}
