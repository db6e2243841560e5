//! Prediction result types.
//!
//! Output of the binary heart disease classifier, shaped for the stable
//! response contract consumed by downstream clients.

use serde::{Deserialize, Serialize};

/// Binary class label produced by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskClass {
    /// Class 0: no heart disease indicated
    NoRisk,
    /// Class 1: heart disease indicated
    Risk,
}

impl RiskClass {
    /// Index of this class in the classifier's probability distribution.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::NoRisk => 0,
            Self::Risk => 1,
        }
    }
}

/// Human-readable risk category, fixed to the wire strings clients match on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskCategory {
    #[serde(rename = "Heart Risk")]
    HeartRisk,
    #[serde(rename = "No Heart Risk")]
    NoHeartRisk,
}

impl std::fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HeartRisk => write!(f, "Heart Risk"),
            Self::NoHeartRisk => write!(f, "No Heart Risk"),
        }
    }
}

/// Final prediction for one clinical record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Predicted class: 0 = no heart disease, 1 = heart disease
    pub risk_score: u8,

    /// Category derived from `risk_score`
    pub risk_category: RiskCategory,

    /// Probability of the predicted class as a percentage, two decimals
    pub confidence: f64,
}

impl PredictionResult {
    /// Build a result from the predicted class and that class's probability.
    ///
    /// The category is derived from the class so the two can never disagree.
    /// Confidence is `class_probability` expressed as a percentage and
    /// rounded to two decimal places.
    #[must_use]
    pub fn new(class: RiskClass, class_probability: f64) -> Self {
        let risk_category = match class {
            RiskClass::Risk => RiskCategory::HeartRisk,
            RiskClass::NoRisk => RiskCategory::NoHeartRisk,
        };

        Self {
            risk_score: class.index() as u8,
            risk_category,
            confidence: (class_probability * 10_000.0).round() / 100.0,
        }
    }
}
