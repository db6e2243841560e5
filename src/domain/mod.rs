//! Domain layer: Core business types and logic.
//!
//! This module contains pure Rust types with no I/O: the clinical record
//! vocabulary, the feature encoding the trained model expects, and the
//! prediction result contract.

mod features;
mod prediction;
mod record;

pub use features::{FeatureVector, FEATURE_COUNT, FEATURE_NAMES};
pub use prediction::{PredictionResult, RiskCategory, RiskClass};
pub use record::{ChestPainType, ClinicalRecord, SlopeStSegment, Thalassemia};
