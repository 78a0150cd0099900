// Axum API Server Module
//
// Purpose: JSON API over the suitability estimator
// Endpoints: health, soil defaults/ranges, single and batch estimation

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;

use crate::config::ServerConfig;
use crate::error::SoilError;
use crate::sample::{FieldRange, SoilField, SoilSample};
use crate::suitability::{assess, estimate_batch, CropRecommendation, SuitabilityReport};

/// Largest batch accepted by `/api/estimate/batch`
pub const MAX_BATCH_SIZE: usize = 1_000;

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        tracing::info!(
            strict_validation = config.strict_validation,
            analysis_delay_ms = config.analysis_delay.as_millis() as u64,
            "Initializing application state"
        );

        Self {
            config: Arc::new(config),
            started_at: Utc::now(),
        }
    }

    fn check(&self, sample: &SoilSample) -> Result<(), AppError> {
        let checked = if self.config.strict_validation {
            sample.validate()
        } else {
            sample.check_finite()
        };
        checked.map_err(AppError::Validation)
    }

    async fn simulate_latency(&self) {
        let delay = self.config.analysis_delay;
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))

        // Soil input metadata
        .route("/api/soil/defaults", get(get_defaults))
        .route("/api/soil/ranges", get(get_ranges))

        // Estimation
        .route("/api/estimate", post(estimate_sample))
        .route("/api/estimate/batch", post(estimate_samples))

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339(),
        "startedAt": state.started_at.to_rfc3339(),
    }))
}

async fn get_defaults() -> Json<SoilSample> {
    Json(SoilSample::default())
}

#[derive(Debug, Serialize)]
struct FieldInfo {
    field: &'static str,
    label: &'static str,
    #[serde(flatten)]
    range: FieldRange,
    default: f64,
}

#[derive(Debug, Serialize)]
struct RangesResponse {
    fields: Vec<FieldInfo>,
}

async fn get_ranges() -> Json<RangesResponse> {
    let defaults = SoilSample::default();
    let fields = SoilField::ALL
        .iter()
        .map(|field| FieldInfo {
            field: field.name(),
            label: field.label(),
            range: field.range(),
            default: defaults.get(*field),
        })
        .collect();

    Json(RangesResponse { fields })
}

async fn estimate_sample(
    State(state): State<AppState>,
    Json(sample): Json<SoilSample>,
) -> Result<Json<SuitabilityReport>, AppError> {
    state.check(&sample)?;
    state.simulate_latency().await;

    let report = assess(&sample);
    tracing::info!(top_crop = %report.top_crop, "Analysis complete");

    Ok(Json(report))
}

async fn estimate_samples(
    State(state): State<AppState>,
    Json(samples): Json<Vec<SoilSample>>,
) -> Result<Json<Vec<Vec<CropRecommendation>>>, AppError> {
    if samples.len() > MAX_BATCH_SIZE {
        return Err(AppError::BadRequest(format!(
            "Batch of {} samples exceeds limit of {}",
            samples.len(),
            MAX_BATCH_SIZE
        )));
    }
    for sample in &samples {
        state.check(sample)?;
    }
    state.simulate_latency().await;

    // rayon fan-out off the async runtime
    let results = tokio::task::spawn_blocking(move || estimate_batch(&samples))
        .await
        .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))?;

    tracing::info!(count = results.len(), "Batch analysis complete");
    Ok(Json(results))
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
pub enum AppError {
    Validation(SoilError),
    BadRequest(String),
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::Validation(e) => {
                tracing::warn!("Rejected soil sample: {}", e);
                (StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
