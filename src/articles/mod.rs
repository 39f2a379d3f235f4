mod dto;
pub mod handlers;
pub mod repo;
pub mod repo_types;

use crate::cors::{method_gate, MethodGate};
use crate::state::AppState;
use axum::{http::Method, middleware::from_fn_with_state, routing::get, Router};

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/articles",
        get(handlers::list_articles)
            .layer(from_fn_with_state(MethodGate::new([Method::GET]), method_gate)),
    )
}
