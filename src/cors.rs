use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::debug;

const ALLOW_HEADERS: &str = "X-CSRF-Token, X-Requested-With, Accept, Accept-Version, \
Content-Length, Content-MD5, Content-Type, Date, X-Api-Version";

/// Per-route configuration for [`method_gate`]: the verbs the resource serves.
///
/// ```ignore
/// get(handler).layer(from_fn_with_state(MethodGate::new([Method::GET]), method_gate))
/// ```
#[derive(Debug, Clone)]
pub struct MethodGate {
    allowed: Arc<[Method]>,
    allow: Arc<str>,
    cors_methods: Arc<str>,
}

impl MethodGate {
    pub fn new(allowed: impl IntoIterator<Item = Method>) -> Self {
        let allowed: Vec<Method> = allowed.into_iter().collect();
        let names: Vec<&str> = allowed.iter().map(Method::as_str).collect();
        let allow = names.join(", ");
        let cors_methods = names
            .iter()
            .copied()
            .chain(std::iter::once("OPTIONS"))
            .collect::<Vec<_>>()
            .join(",");
        Self {
            allowed: allowed.into(),
            allow: allow.into(),
            cors_methods: cors_methods.into(),
        }
    }

    pub fn allows(&self, method: &Method) -> bool {
        self.allowed.contains(method)
    }

    fn apply_cors(&self, headers: &mut HeaderMap) {
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
            HeaderValue::from_static("true"),
        );
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        );
        if let Ok(v) = HeaderValue::from_str(&self.cors_methods) {
            headers.insert(header::ACCESS_CONTROL_ALLOW_METHODS, v);
        }
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOW_HEADERS),
        );
    }
}

/// Answers preflights and unsupported verbs before the handler runs, and stamps
/// the CORS headers on every response.
pub async fn method_gate(State(gate): State<MethodGate>, req: Request, next: Next) -> Response {
    let method = req.method().clone();

    let mut res = if method == Method::OPTIONS {
        StatusCode::OK.into_response()
    } else if !gate.allows(&method) {
        debug!(%method, uri = %req.uri(), "method not allowed");
        let mut res = (
            StatusCode::METHOD_NOT_ALLOWED,
            format!("Method {method} Not Allowed"),
        )
            .into_response();
        if let Ok(v) = HeaderValue::from_str(&gate.allow) {
            res.headers_mut().insert(header::ALLOW, v);
        }
        res
    } else {
        next.run(req).await
    };

    gate.apply_cors(res.headers_mut());
    res
}
