//! Host Gate Middleware
//!
//! Rejects requests whose effective host is neither allow-listed nor an
//! accepted subdomain. Runs before any handler.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};

use crate::error::ApiError;
use crate::routing::{HostGate, RequestHost};

/// State for [`host_gate_middleware`]
#[derive(Clone)]
pub struct GateState {
    pub gate: Arc<HostGate>,
}

impl GateState {
    pub fn new(gate: HostGate) -> Self {
        Self {
            gate: Arc::new(gate),
        }
    }
}

/// Middleware that admits or rejects a request based on its host
pub async fn host_gate_middleware(
    State(state): State<GateState>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let RequestHost { host, server_name } =
        RequestHost::from_headers(request.headers(), request.uri());

    if !state.gate.evaluate(&host, &server_name).await? {
        tracing::warn!("HostGate returned 403 for requested host={}", host);
        return Err(ApiError::HostDenied(host));
    }

    Ok(next.run(request).await)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::books::{BookLookup, MemoryBookStore};
    use crate::config::{GateConfig, GateParams};
    use crate::routing::ValidatorRegistry;
    use axum::{
        body::to_bytes,
        http::{HeaderValue, StatusCode},
        routing::get,
        Router,
    };
    use futures::future::BoxFuture;
    use hostgate_shared::{Book, LookupError};
    use tower::ServiceExt;

    async fn test_handler() -> &'static str {
        "ok"
    }

    fn app_with(config: GateConfig, params: GateParams, lookup: Arc<dyn BookLookup>) -> Router {
        let registry = ValidatorRegistry::with_builtins(lookup);
        let state = GateState::new(HostGate::new(config, params, &registry).unwrap());

        Router::new()
            .route("/", get(test_handler))
            .layer(axum::middleware::from_fn_with_state(state, host_gate_middleware))
    }

    fn subdomain_app(books: Vec<Book>) -> Router {
        app_with(
            GateConfig {
                domain: Some("scalar.org".to_string()),
                ..GateConfig::default()
            },
            GateParams {
                subdomain_allowed: true,
                subdomain_validator: None,
            },
            Arc::new(MemoryBookStore::with_books(books)),
        )
    }

    fn request(host: &str, forwarded: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri("/").header("Host", host);
        if let Some(forwarded) = forwarded {
            builder = builder.header("X-Forwarded-Host", forwarded);
        }
        builder.body(Body::empty()).unwrap()
    }

    async fn body_string(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_allowed_host_reaches_handler() {
        let app = app_with(
            GateConfig {
                allowed_hosts: "foo.scalar.org".to_string(),
                ..GateConfig::default()
            },
            GateParams::default(),
            Arc::new(MemoryBookStore::new()),
        );

        let response = app.oneshot(request("Foo.Scalar.org", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "ok");
    }

    #[tokio::test]
    async fn test_denied_host_gets_403() {
        let app = app_with(
            GateConfig {
                allowed_hosts: "foo.scalar.org".to_string(),
                ..GateConfig::default()
            },
            GateParams::default(),
            Arc::new(MemoryBookStore::new()),
        );

        let response = app.oneshot(request("bar.scalar.org", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(response.status().canonical_reason(), Some("Forbidden"));

        let body = body_string(response).await;
        assert!(body.contains("Access denied: bar.scalar.org"), "body was {body}");
    }

    #[tokio::test]
    async fn test_forwarded_host_takes_precedence() {
        let app = app_with(
            GateConfig {
                allowed_hosts: "foo.scalar.org".to_string(),
                ..GateConfig::default()
            },
            GateParams::default(),
            Arc::new(MemoryBookStore::new()),
        );

        let response = app
            .clone()
            .oneshot(request("internal.local", Some("foo.scalar.org")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(request("foo.scalar.org", Some("evil.example.com")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert!(body_string(response).await.contains("evil.example.com"));
    }

    #[tokio::test]
    async fn test_non_ascii_forwarded_host_is_not_skipped() {
        let app = app_with(
            GateConfig {
                allowed_hosts: "www.scalar.org".to_string(),
                ..GateConfig::default()
            },
            GateParams::default(),
            Arc::new(MemoryBookStore::new()),
        );

        let request = Request::builder()
            .uri("/")
            .header("Host", "www.scalar.org")
            .header(
                "X-Forwarded-Host",
                HeaderValue::from_bytes(b"caf\xe9.evil.com").unwrap(),
            )
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert!(body_string(response).await.contains("evil.com"));
    }

    #[tokio::test]
    async fn test_subdomain_with_existing_book() {
        let app = subdomain_app(vec![Book::new("foo", false)]);

        let response = app
            .clone()
            .oneshot(request("foo.scalar.org", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app.oneshot(request("nomatch.scalar.org", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_domain_defaults_to_request_host() {
        // no configured domain: the Host header is the domain, and the
        // forwarded host is checked as its subdomain
        let app = app_with(
            GateConfig::default(),
            GateParams {
                subdomain_allowed: true,
                subdomain_validator: None,
            },
            Arc::new(MemoryBookStore::with_books([Book::new("foo", false)])),
        );

        let response = app
            .oneshot(request("scalar.org", Some("foo.scalar.org")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_lookup_failure_is_503() {
        struct Down;

        impl BookLookup for Down {
            fn exists<'a>(
                &'a self,
                _slug: &'a str,
                _require_flag: bool,
            ) -> BoxFuture<'a, Result<bool, LookupError>> {
                Box::pin(async { Err(LookupError::Database("connection reset".to_string())) })
            }
        }

        let app = app_with(
            GateConfig {
                domain: Some("scalar.org".to_string()),
                ..GateConfig::default()
            },
            GateParams {
                subdomain_allowed: true,
                subdomain_validator: None,
            },
            Arc::new(Down),
        );

        let response = app.oneshot(request("foo.scalar.org", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
