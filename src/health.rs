use axum::{
    extract::State, http::Method, http::StatusCode, middleware::from_fn_with_state,
    routing::get, Json, Router,
};
use serde::Serialize;
use time::{format_description::well_known::Rfc3339, OffsetDateTime};
use tracing::{error, instrument};

use crate::cors::{method_gate, MethodGate};
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum HealthResponse {
    Ok {
        status: &'static str,
        message: &'static str,
        timestamp: String,
        environment: String,
        platform: String,
    },
    Error {
        status: &'static str,
        message: &'static str,
        error: String,
        timestamp: String,
    },
}

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/health",
        get(health).layer(from_fn_with_state(MethodGate::new([Method::GET]), method_gate)),
    )
}

fn now_rfc3339() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_default()
}

/// GET /api/health: probes the database and reports the deployment context.
#[instrument(skip(state))]
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    match state.store.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthResponse::Ok {
                status: "OK",
                message: "API is running",
                timestamp: now_rfc3339(),
                environment: state.config.environment.clone(),
                platform: state.config.platform.clone(),
            }),
        ),
        Err(e) => {
            error!(error = %e, "health probe failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(HealthResponse::Error {
                    status: "ERROR",
                    message: "Database connection failed",
                    error: e.to_string(),
                    timestamp: now_rfc3339(),
                }),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{header, Request},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::app::build_app;
    use crate::testing::MemoryStore;

    async fn probe(store: MemoryStore, method: Method) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
        let res = build_app(AppState::fake(Arc::new(store)))
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri("/api/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = res.status();
        let headers = res.headers().clone();
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        (status, headers, bytes.to_vec())
    }

    #[tokio::test]
    async fn reachable_database_is_ok() {
        let (status, _, bytes) = probe(MemoryStore::new(), Method::GET).await;
        assert_eq!(status, StatusCode::OK);
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "OK");
        assert_eq!(body["environment"], "test");
        assert_eq!(body["platform"], "standalone");
        assert!(OffsetDateTime::parse(body["timestamp"].as_str().unwrap(), &Rfc3339).is_ok());
    }

    #[tokio::test]
    async fn unreachable_database_is_error_500() {
        let (status, _, bytes) = probe(MemoryStore::unreachable(), Method::GET).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ERROR");
        assert!(body["error"].as_str().unwrap().contains("Connection refused"));
    }

    #[tokio::test]
    async fn preflight_skips_probe() {
        let (status, headers, bytes) = probe(MemoryStore::unreachable(), Method::OPTIONS).await;
        assert_eq!(status, StatusCode::OK);
        assert!(bytes.is_empty());
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], "GET,OPTIONS");
    }
}
