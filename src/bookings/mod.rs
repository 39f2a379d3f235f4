mod dto;
pub mod handlers;
pub mod repo;
pub mod repo_types;

use crate::cors::{method_gate, MethodGate};
use crate::state::AppState;
use axum::{http::Method, middleware::from_fn_with_state, routing::get, Router};

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/bookings",
        get(handlers::list_bookings)
            .post(handlers::create_booking)
            .layer(from_fn_with_state(
                MethodGate::new([Method::GET, Method::POST]),
                method_gate,
            )),
    )
}
