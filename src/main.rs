//! Cardiorisk: Heart Disease Risk Inference Service
//!
//! Main entry point for the HTTP server.

use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cardiorisk::adapters::LogRegClassifier;
use cardiorisk::config::ServiceConfig;
use cardiorisk::http::{self, ApiState};
use cardiorisk::PredictionService;

#[tokio::main]
async fn main() -> Result<()> {
    let (writer, _guard) = tracing_appender::non_blocking(std::io::stdout());

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(writer))
        .init();

    tracing::info!("Starting cardiorisk...");

    let config = ServiceConfig::from_env();

    // A missing or malformed artifact must not keep the server from coming
    // up; the service answers 503 until a valid model is in place.
    let classifier = match LogRegClassifier::load(&config.model_path) {
        Ok(classifier) => Some(Arc::new(classifier)),
        Err(error) => {
            tracing::error!(
                "Failed to load classifier from {:?}: {}",
                config.model_path,
                error
            );
            None
        }
    };

    let predictor = Arc::new(PredictionService::new(classifier));
    let state = ApiState { predictor };

    http::serve(&config.api_addr, state, &config.cors_origins).await?;

    tracing::info!("Cardiorisk shutdown complete.");
    Ok(())
}
