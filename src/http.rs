//! HTTP layer: axum router and endpoint handlers for the prediction API.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::adapters::LogRegClassifier;
use crate::application::PredictionService;
use crate::domain::{ChestPainType, ClinicalRecord, PredictionResult, SlopeStSegment, Thalassemia};
use crate::CardioriskError;

/// Shared application state
#[derive(Clone)]
pub struct ApiState {
    pub predictor: Arc<PredictionService<LogRegClassifier>>,
}

/// Wire form of a clinical record, using the casing the front end submits.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PredictRequest {
    pub age: i64,
    pub sex: i64,
    pub chest_pain_type: String,
    pub resting_blood_pressure: i64,
    pub serum_cholesterol: i64,
    pub fasting_blood_sugar: i64,
    #[serde(rename = "RestingECG")]
    pub resting_ecg: i64,
    pub max_heart_rate: i64,
    pub exercise_induced_angina: i64,
    #[serde(rename = "STDepression")]
    pub st_depression: f64,
    #[serde(rename = "SlopeSTSegment")]
    pub slope_st_segment: String,
    pub num_major_vessels: i64,
    pub thalassemia: String,
}

impl TryFrom<PredictRequest> for ClinicalRecord {
    type Error = CardioriskError;

    fn try_from(request: PredictRequest) -> Result<Self, Self::Error> {
        let chest_pain_type =
            ChestPainType::from_name(&request.chest_pain_type).ok_or_else(|| {
                CardioriskError::InvalidInput {
                    field: "ChestPainType".to_string(),
                    message: format!("Unknown category {:?}", request.chest_pain_type),
                }
            })?;

        let slope_st_segment =
            SlopeStSegment::from_name(&request.slope_st_segment).ok_or_else(|| {
                CardioriskError::InvalidInput {
                    field: "SlopeSTSegment".to_string(),
                    message: format!("Unknown category {:?}", request.slope_st_segment),
                }
            })?;

        let thalassemia = Thalassemia::from_name(&request.thalassemia).ok_or_else(|| {
            CardioriskError::InvalidInput {
                field: "Thalassemia".to_string(),
                message: format!("Unknown category {:?}", request.thalassemia),
            }
        })?;

        Ok(Self {
            age: request.age,
            sex: request.sex,
            chest_pain_type,
            resting_blood_pressure: request.resting_blood_pressure,
            serum_cholesterol: request.serum_cholesterol,
            fasting_blood_sugar: request.fasting_blood_sugar,
            resting_ecg: request.resting_ecg,
            max_heart_rate: request.max_heart_rate,
            exercise_induced_angina: request.exercise_induced_angina,
            st_depression: request.st_depression,
            slope_st_segment,
            num_major_vessels: request.num_major_vessels,
            thalassemia,
        })
    }
}

/// Maps service errors onto HTTP status codes with a `detail` body.
struct ApiError(CardioriskError);

impl From<CardioriskError> for ApiError {
    fn from(error: CardioriskError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            CardioriskError::InvalidInput { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            CardioriskError::ModelNotLoaded => StatusCode::SERVICE_UNAVAILABLE,
            CardioriskError::Prediction(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(serde_json::json!({ "detail": self.0.to_string() }));
        (status, body).into_response()
    }
}

async fn predict(
    State(state): State<ApiState>,
    payload: Result<Json<PredictRequest>, JsonRejection>,
) -> Result<Json<PredictionResult>, ApiError> {
    let Json(request) = payload.map_err(|rejection| CardioriskError::InvalidInput {
        field: "body".to_string(),
        message: rejection.body_text(),
    })?;

    let record = ClinicalRecord::try_from(request)?;
    let result = state.predictor.predict(&record)?;

    Ok(Json(result))
}

async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "Heart Disease Prediction API" }))
}

async fn health(State(state): State<ApiState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "classifier_loaded": state.predictor.is_ready(),
    }))
}

/// Create the API router
pub fn create_router(state: ApiState, cors_origins: &str) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/predict", post(predict))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(cors_origins))
        .with_state(state)
}

/// Start the server
pub async fn serve(addr: &str, state: ApiState, cors_origins: &str) -> std::io::Result<()> {
    let app = create_router(state, cors_origins);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Prediction API listening on {}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}

fn cors_layer(allowed: &str) -> CorsLayer {
    let mut cors = if allowed.trim() == "*" {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins = allowed
            .split(',')
            .filter_map(|origin| origin.trim().parse::<HeaderValue>().ok())
            .collect::<Vec<_>>();
        CorsLayer::new().allow_origin(AllowOrigin::list(origins))
    };

    cors = cors.allow_methods([Method::GET, Method::POST]);
    cors.allow_headers([header::CONTENT_TYPE, header::ACCEPT])
}
