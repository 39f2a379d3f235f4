use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use tracing::{info, instrument};

use super::dto::{ContactRequest, ContactSubmittedResponse, NewContact};
use crate::{error::ApiError, state::AppState};

/// POST /api/contact/submit
#[instrument(skip(state, payload))]
pub async fn submit_contact(
    State(state): State<AppState>,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ContactSubmittedResponse>), ApiError> {
    let Json(req) = payload?;
    let contact = NewContact::try_from(req)?;

    let submission_id = state
        .store
        .create_contact(&contact)
        .await
        .map_err(ApiError::internal("Failed to submit contact form"))?;

    info!(submission_id, preferred_contact = %contact.preferred_contact, "contact form stored");
    Ok((
        StatusCode::CREATED,
        Json(ContactSubmittedResponse {
            success: true,
            message: "Contact form submitted successfully",
            submission_id,
        }),
    ))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::app::build_app;
    use crate::state::AppState;
    use crate::testing::MemoryStore;

    async fn submit(store: &Arc<MemoryStore>, body: Value) -> (StatusCode, Value) {
        let res = build_app(AppState::fake(store.clone()))
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/api/contact/submit")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = res.status();
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn submission_is_stored_as_new() {
        let store = Arc::new(MemoryStore::new());
        let (status, body) = submit(
            &store,
            json!({"name": "B", "email": "b@x.com", "message": "Screen cracked"}),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["message"], "Contact form submitted successfully");
        let id = body["submissionId"].as_i64().unwrap();

        let stored = store.contacts();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, id);
        assert_eq!(stored[0].status, "new");
        assert_eq!(stored[0].contact.preferred_contact, "email");
    }

    #[tokio::test]
    async fn numeric_phone_is_kept_as_text() {
        let store = Arc::new(MemoryStore::new());
        let (status, _) = submit(
            &store,
            json!({"name": "B", "email": "b@x.com", "message": "hi", "phone": 5551234}),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(store.contacts()[0].contact.phone.as_deref(), Some("5551234"));
    }

    #[tokio::test]
    async fn empty_message_is_400() {
        let store = Arc::new(MemoryStore::new());
        let (status, body) =
            submit(&store, json!({"name": "B", "email": "b@x.com", "message": ""})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Name, email, and message are required");
        assert!(store.contacts().is_empty());
    }

    #[tokio::test]
    async fn get_is_not_allowed() {
        let res = build_app(AppState::fake(Arc::new(MemoryStore::new())))
            .oneshot(
                Request::builder()
                    .method(Method::GET)
                    .uri("/api/contact/submit")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(res.headers()[header::ALLOW], "POST");
        assert_eq!(res.headers()[header::ACCESS_CONTROL_ALLOW_METHODS], "POST,OPTIONS");
    }
}
