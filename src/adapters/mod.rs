//! Adapters layer: Concrete implementations of ports.
//!
//! These modules contain the actual integration with the trained model:
//! - `logreg`: logistic regression loaded from the training pipeline's JSON export

pub mod logreg;

pub use logreg::{ArtifactError, LogRegClassifier};
