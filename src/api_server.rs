// Axum API Server Module
//
// Serves the query engine over HTTP for the dashboard's command bar.
// Answers for the loaded snapshot are cached by normalized query text.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use moka::future::Cache;
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::config::EngineConfig;
use crate::data::Dataset;
use crate::query::{normalize_query, JsonFormatter, QueryEngine};
use crate::records::{FarmProject, Funder};

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
    pub engine: Arc<QueryEngine>,
    pub cache: Cache<String, serde_json::Value>,
}

impl AppState {
    /// Load the snapshot in `data_dir` and build the engine
    pub fn new(data_dir: impl AsRef<Path>, config: EngineConfig) -> anyhow::Result<Self> {
        tracing::info!("Loading dataset...");
        let dataset = Dataset::load(data_dir)?;
        Ok(Self::from_dataset(dataset, config))
    }

    pub fn from_dataset(dataset: Dataset, config: EngineConfig) -> Self {
        tracing::info!("Initializing Moka cache...");
        let cache = Cache::builder()
            .max_capacity(10_000)
            .time_to_live(Duration::from_secs(300))
            .build();

        Self {
            dataset: Arc::new(dataset),
            engine: Arc::new(QueryEngine::new(config)),
            cache,
        }
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // Query against the loaded snapshot
        .route("/api/query", post(query_snapshot))
        // Query against caller-supplied records (never cached)
        .route("/api/query/inline", post(query_inline))
        .route("/api/intent", get(classify_intent))
        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Request Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    #[serde(default)]
    pub query: String,
}

#[derive(Debug, Deserialize)]
pub struct InlineQueryRequest {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub projects: Vec<FarmProject>,
    #[serde(default)]
    pub funders: Vec<Funder>,
}

#[derive(Debug, Deserialize)]
pub struct IntentParams {
    #[serde(default)]
    pub q: String,
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "projects": state.dataset.projects().len(),
        "funders": state.dataset.funders().len(),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn query_snapshot(
    State(state): State<AppState>,
    Json(request): Json<QueryRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let cache_key = format!("query:{}", normalize_query(&request.query));

    if let Some(cached) = state.cache.get(&cache_key).await {
        tracing::debug!("Cache hit for {}", cache_key);
        return Ok(Json(cached));
    }

    let result = state.engine.process(
        &request.query,
        state.dataset.projects(),
        state.dataset.funders(),
    );
    let value = JsonFormatter::to_value_with_blocks(&result)
        .map_err(|e| AppError::Internal(format!("Serialization error: {}", e)))?;

    state.cache.insert(cache_key, value.clone()).await;

    Ok(Json(value))
}

async fn query_inline(
    State(state): State<AppState>,
    Json(request): Json<InlineQueryRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    for project in &request.projects {
        crate::data::validate_project(project).map_err(|e| AppError::BadRequest(e.to_string()))?;
    }
    for funder in &request.funders {
        crate::data::validate_funder(funder).map_err(|e| AppError::BadRequest(e.to_string()))?;
    }

    let engine = Arc::clone(&state.engine);
    let result = tokio::task::spawn_blocking(move || {
        engine.process(&request.query, &request.projects, &request.funders)
    })
    .await
    .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))?;

    let value = JsonFormatter::to_value_with_blocks(&result)
        .map_err(|e| AppError::Internal(format!("Serialization error: {}", e)))?;
    Ok(Json(value))
}

async fn classify_intent(
    State(state): State<AppState>,
    Query(params): Query<IntentParams>,
) -> impl IntoResponse {
    let intent = state.engine.classify(
        &params.q,
        state.dataset.projects(),
        state.dataset.funders(),
    );
    Json(serde_json::json!({
        "query": params.q,
        "normalized": normalize_query(&params.q),
        "intent": intent,
    }))
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
enum AppError {
    BadRequest(String),
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Internal(msg) => {
                tracing::warn!("Request failed: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
