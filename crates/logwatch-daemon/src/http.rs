use crate::store::LogStore;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use logwatch_proto::protocol::{LogRecord, LogSubmission};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

#[derive(Clone)]
struct HttpState {
    store: Arc<LogStore>,
}

#[derive(Debug, Deserialize)]
struct SinceQuery {
    // Absent means "everything"; a non-integer value is rejected with 400
    // by the Query extractor.
    #[serde(default)]
    since: u64,
}

/// Rejections for the producer endpoint, rendered as `{"error": ...}`.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ApiError {
    #[error("{0} required")]
    MissingField(&'static str),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingField(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

pub fn start_server(bind_address: String, port: u16, store: Arc<LogStore>) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let app_state = HttpState { store };

        // Permissive CORS: the feed is also consumed by browser clients.
        let app = Router::new()
            .route("/api/logs", get(get_logs))
            .route("/api/health", get(health))
            .route("/internal/log", post(submit_log))
            .layer(CorsLayer::permissive())
            .with_state(app_state);

        let addr = format!("{}:{}", bind_address, port);
        let listener = match TcpListener::bind(&addr).await {
            Ok(l) => l,
            Err(e) => {
                error!("Failed to bind feed server to {}: {}", addr, e);
                return;
            }
        };

        info!("feed server listening on http://{}", addr);

        if let Err(e) = axum::serve(listener, app).await {
            error!("feed server error: {}", e);
        }
    })
}

/// Incremental fetch: everything with id > since, oldest first.
async fn get_logs(
    State(state): State<HttpState>,
    Query(query): Query<SinceQuery>,
) -> Json<Vec<LogRecord>> {
    Json(state.store.since(query.since).await)
}

async fn health(State(state): State<HttpState>) -> Json<serde_json::Value> {
    Json(json!({ "ok": true, "logs": state.store.len().await }))
}

/// Producer endpoint for scripts and server processes.
async fn submit_log(
    State(state): State<HttpState>,
    Json(submission): Json<LogSubmission>,
) -> Result<Json<serde_json::Value>, ApiError> {
    validate(&submission)?;

    let record = state
        .store
        .append(&submission.full_category(), submission.message.trim())
        .await;
    info!(id = record.id, category = %record.category, "log accepted");

    Ok(Json(json!({ "ok": true })))
}

fn validate(submission: &LogSubmission) -> Result<(), ApiError> {
    if submission.category.trim().is_empty() {
        return Err(ApiError::MissingField("category"));
    }
    if submission.message.trim().is_empty() {
        return Err(ApiError::MissingField("message"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(category: &str, code: &str, message: &str) -> LogSubmission {
        LogSubmission {
            category: category.to_string(),
            code: code.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn validate_requires_category_and_message() {
        assert_eq!(
            validate(&submission("", "", "boom")),
            Err(ApiError::MissingField("category"))
        );
        assert_eq!(
            validate(&submission("  ", "", "boom")),
            Err(ApiError::MissingField("category"))
        );
        assert_eq!(
            validate(&submission("AUTH", "", "")),
            Err(ApiError::MissingField("message"))
        );
        assert!(validate(&submission("AUTH", "LOGIN", "boom")).is_ok());
    }

    #[test]
    fn missing_field_maps_to_bad_request() {
        assert_eq!(
            ApiError::MissingField("category").status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[tokio::test]
    async fn submit_then_fetch_roundtrip() {
        let state = HttpState {
            store: Arc::new(LogStore::new()),
        };

        let ack = submit_log(
            State(state.clone()),
            Json(submission("TEST.FILE", "MISSING", "fixture not found")),
        )
        .await
        .unwrap();
        assert_eq!(ack.0["ok"], true);

        let Json(batch) = get_logs(State(state.clone()), Query(SinceQuery { since: 0 })).await;
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].category, "TEST.FILE.MISSING");
        assert_eq!(batch[0].message, "fixture not found");

        let Json(empty) = get_logs(State(state), Query(SinceQuery { since: 1 })).await;
        assert!(empty.is_empty());
    }

    #[tokio::test]
    async fn rejected_submission_stores_nothing() {
        let state = HttpState {
            store: Arc::new(LogStore::new()),
        };
        let err = submit_log(State(state.clone()), Json(submission("", "", "")))
            .await
            .unwrap_err();
        assert_eq!(err, ApiError::MissingField("category"));
        assert_eq!(state.store.len().await, 0);
    }
}
