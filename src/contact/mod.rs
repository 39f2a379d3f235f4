pub mod dto;
pub mod handlers;
pub mod repo;

use crate::cors::{method_gate, MethodGate};
use crate::state::AppState;
use axum::{http::Method, middleware::from_fn_with_state, routing::post, Router};

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/contact/submit",
        post(handlers::submit_contact)
            .layer(from_fn_with_state(MethodGate::new([Method::POST]), method_gate)),
    )
}
