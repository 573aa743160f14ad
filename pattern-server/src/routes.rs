//! HTTP routes of the pattern editor.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::store::{PatternStore, StoreError, GLOBAL_CONFIG_FILE, PATTERN_INDEX_FILE, VALUES_FILE};

#[derive(Clone)]
pub struct AppState {
    store: Arc<PatternStore>,
}

/// JSON error body: `{"error": "..."}`.
#[derive(Debug)]
pub enum ApiError {
    NotFound(&'static str),
    BadRequest(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::NotFound(message) => (StatusCode::NOT_FOUND, message.to_string()),
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            Self::Internal(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::InvalidId(_) => Self::BadRequest(err.to_string()),
            other => {
                tracing::error!(err = %other, "store operation failed");
                Self::Internal(other.to_string())
            }
        }
    }
}

type ApiResult = Result<Json<Value>, ApiError>;

fn saved() -> Json<Value> {
    Json(json!({ "success": true }))
}

/// API routes plus static files from the store root for everything else.
pub fn router(store: PatternStore) -> Router {
    let static_files = ServeDir::new(store.root());
    let state = AppState {
        store: Arc::new(store),
    };

    Router::new()
        .route("/api/patterns", get(get_index).post(save_index))
        .route(
            "/api/pattern/:id",
            get(get_pattern).post(save_pattern).delete(delete_pattern),
        )
        .route("/api/values", get(get_values).post(save_values))
        .route(
            "/api/global-config",
            get(get_global_config).post(save_global_config),
        )
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn get_index(State(state): State<AppState>) -> Json<Value> {
    Json(
        state
            .store
            .read_or(PATTERN_INDEX_FILE, json!({ "patterns": [] }))
            .await,
    )
}

async fn save_index(State(state): State<AppState>, Json(body): Json<Value>) -> ApiResult {
    state.store.write(PATTERN_INDEX_FILE, &body).await?;
    Ok(saved())
}

async fn get_pattern(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult {
    let file = PatternStore::pattern_file(&id)?;
    match state.store.read(&file).await {
        Ok(value) => Ok(Json(value)),
        Err(err) => {
            tracing::debug!(%id, %err, "pattern lookup failed");
            Err(ApiError::NotFound("Pattern not found"))
        }
    }
}

async fn save_pattern(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> ApiResult {
    let file = PatternStore::pattern_file(&id)?;
    state.store.write(&file, &body).await?;
    Ok(saved())
}

async fn delete_pattern(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult {
    let file = PatternStore::pattern_file(&id)?;
    state.store.remove(&file).await?;
    Ok(saved())
}

async fn get_values(State(state): State<AppState>) -> Json<Value> {
    Json(state.store.read_or(VALUES_FILE, json!({})).await)
}

async fn save_values(State(state): State<AppState>, Json(body): Json<Value>) -> ApiResult {
    state.store.write(VALUES_FILE, &body).await?;
    Ok(saved())
}

async fn get_global_config(State(state): State<AppState>) -> Json<Value> {
    Json(state.store.read_or(GLOBAL_CONFIG_FILE, json!({})).await)
}

async fn save_global_config(State(state): State<AppState>, Json(body): Json<Value>) -> ApiResult {
    state.store.write(GLOBAL_CONFIG_FILE, &body).await?;
    Ok(saved())
}
