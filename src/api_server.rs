// Axum API Server Module
//
// Purpose: HTTP surface over the nutrition assessor (risk + recommendations)

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use std::sync::Arc;

use crate::assessor::NutritionAssessor;
use crate::config::AssessorConfig;
use crate::data::NutrientSnapshot;
use crate::error::AssessmentError;
use crate::recommendation::{Assessment, MarkdownFormatter, TextFormatter};
use crate::risk::DiseaseRiskScore;

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub assessor: Arc<NutritionAssessor>,
}

impl AppState {
    pub fn new(config: &AssessorConfig) -> anyhow::Result<Self> {
        tracing::info!("Initializing nutrition assessor...");
        let assessor = NutritionAssessor::from_config(config)?;
        Ok(Self::from_assessor(assessor))
    }

    pub fn from_assessor(assessor: NutritionAssessor) -> Self {
        Self {
            assessor: Arc::new(assessor),
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

        // Batch prediction (risk per row, recommendations for the first row)
        .route("/predict", post(predict))

        // Single snapshot endpoints
        .route("/api/assess", post(assess))
        .route("/api/report", post(report))

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// POST /predict
///
/// Body: `{"nutrition_data": [{...}, ...]}` (a single object is also accepted)
async fn predict(
    State(state): State<AppState>,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Json<PredictResponse>, AppError> {
    let Json(payload) = payload?;
    let rows = payload
        .get("nutrition_data")
        .ok_or_else(|| AppError::InvalidInput("Missing 'nutrition_data' field".to_string()))?;
    let snapshots = NutrientSnapshot::batch_from_json(rows)?;
    let assessor = state.assessor.clone();

    tracing::info!("Predicting risk for {} snapshot(s)", snapshots.len());

    // CPU-bound work: run in blocking thread pool
    let assessments = tokio::task::spawn_blocking(move || assessor.assess_batch(&snapshots))
        .await
        .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))?;

    let mut rows = assessments.into_iter();
    let first = rows
        .next()
        .ok_or_else(|| AppError::Internal("Assessment produced no rows".to_string()))?;

    let mut predictions = vec![first.predictions];
    predictions.extend(rows.map(|a| a.predictions));

    Ok(Json(PredictResponse {
        predictions,
        recommendations: first.recommendations,
        food_sources: first.food_sources,
    }))
}

/// POST /api/assess - full assessment for one snapshot
async fn assess(
    State(state): State<AppState>,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Json<Assessment>, AppError> {
    let Json(payload) = payload?;
    let assessment = state.assessor.assess_json(&payload)?;
    Ok(Json(assessment))
}

/// POST /api/report?format=markdown|text - human-readable report for one snapshot
async fn report(
    State(state): State<AppState>,
    Query(params): Query<ReportQuery>,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let assessment = state.assessor.assess_json(&payload)?;

    let (content_type, body) = match params.format.as_deref() {
        Some("text") => (
            "text/plain; charset=utf-8",
            TextFormatter::format(&assessment.recommendations, &assessment.food_sources),
        ),
        Some("markdown") | None => (
            "text/markdown; charset=utf-8",
            MarkdownFormatter::format(&assessment),
        ),
        Some(other) => {
            return Err(AppError::InvalidInput(format!(
                "Unknown report format '{}' (expected 'markdown' or 'text')",
                other
            )))
        }
    };

    Ok(([(header::CONTENT_TYPE, content_type)], body))
}

// ============================================================================
// Request / Response Types
// ============================================================================

#[derive(serde::Serialize)]
struct PredictResponse {
    predictions: Vec<DiseaseRiskScore>,
    recommendations: crate::recommendation::RecommendationSet,
    food_sources: crate::reference::FoodSourceCatalog,
}

#[derive(serde::Deserialize, Debug)]
struct ReportQuery {
    format: Option<String>,
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
pub enum AppError {
    InvalidInput(String),
    Internal(String),
}

impl From<AssessmentError> for AppError {
    fn from(err: AssessmentError) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidInput(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        tracing::warn!("Request failed ({}): {}", status, message);

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
