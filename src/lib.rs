//! # Cardiorisk
//!
//! Heart disease risk inference service.
//!
//! This crate provides:
//! - Deterministic feature encoding for the trained heart disease model
//! - Binary risk classification with a confidence percentage
//! - An HTTP boundary exposing the prediction endpoint
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture:
//! - `domain`: Core business types (ClinicalRecord, FeatureVector, PredictionResult)
//! - `ports`: Trait definitions for external operations
//! - `adapters`: Concrete implementations (exported logistic regression)
//! - `application`: Use cases orchestrating domain and ports
//! - `http`: HTTP request boundary

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod http;
pub mod ports;

pub use application::PredictionService;
pub use domain::{ClinicalRecord, PredictionResult, RiskCategory};

/// Result type for cardiorisk operations
pub type Result<T> = std::result::Result<T, CardioriskError>;

/// Main error type for cardiorisk
#[derive(Debug, thiserror::Error)]
pub enum CardioriskError {
    #[error("Invalid value for {field}: {message}")]
    InvalidInput { field: String, message: String },

    #[error("Model is not initialized. Please wait for the server to complete initialization.")]
    ModelNotLoaded,

    #[error("Prediction failed: {0}")]
    Prediction(String),
}
