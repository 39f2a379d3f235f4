use std::net::SocketAddr;

use axum::{http::Uri, Router};
use tower_http::trace::TraceLayer;

use crate::error::ApiError;
use crate::state::AppState;
use crate::{articles, bookings, categories, contact, health, spa};

pub fn build_app(state: AppState) -> Router {
    let static_dir = state.config.static_dir.clone();

    Router::new()
        .nest(
            "/api",
            Router::new()
                .merge(articles::router())
                .merge(bookings::router())
                .merge(contact::router())
                .merge(categories::router())
                .merge(health::router())
                .fallback(api_not_found),
        )
        .fallback_service(spa::service(&static_dir))
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|req: &axum::http::Request<_>| {
                    let method = req.method().clone();
                    let uri = req.uri().clone();
                    tracing::info_span!("http_request", %method, uri = %uri, status = tracing::field::Empty)
                })
                .on_response(
                    |res: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     span: &tracing::Span| {
                        let status = res.status();
                        span.record("status", tracing::field::display(status));
                        let latency_ms = latency.as_millis() as u64;
                        if status.is_server_error() {
                            tracing::error!(%status, latency_ms, "response");
                        } else {
                            tracing::info!(%status, latency_ms, "response");
                        }
                    },
                ),
        )
}

/// Unknown paths under `/api` get a JSON 404 instead of the SPA shell.
async fn api_not_found(uri: Uri) -> ApiError {
    tracing::debug!(%uri, "no such api route");
    ApiError::NotFound("Not found")
}

/// Serves until Ctrl-C, then lets in-flight requests finish.
pub async fn serve(app: Router, host: &str, port: u16) -> anyhow::Result<()> {
    let addr: SocketAddr = format!("{host}:{port}").parse()?;

    tracing::info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
        return;
    }
    tracing::info!("shutdown requested");
}
