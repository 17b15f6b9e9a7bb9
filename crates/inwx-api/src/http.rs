use std::{net::SocketAddr, sync::Arc};

use axum::{
    Router,
    extract::State,
    http::header,
    response::IntoResponse,
    routing::get,
};
use inwx_prometheus::ExpirationMetrics;
use tokio::net::TcpListener;
use tracing::{info, trace};

use crate::error::ApiError;

pub const METRICS_PATH: &str = "/metrics";

/// HTTP exposition service builder.
pub struct HttpApi {
    metrics: Arc<ExpirationMetrics>,
}

impl HttpApi {
    pub fn new(metrics: Arc<ExpirationMetrics>) -> Self {
        Self { metrics }
    }

    /// Build axum router with mounted endpoints.
    ///
    /// Routes:
    /// - GET /metrics - Current gauges in text exposition format
    pub fn router(self) -> Router {
        Router::new()
            .route(METRICS_PATH, get(scrape))
            .with_state(self.metrics)
    }
}

/// Bind the listening socket; failure here is fatal for the process.
pub async fn bind(addr: SocketAddr) -> Result<TcpListener, ApiError> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ApiError::Bind { addr, source })?;
    info!(%addr, "metrics endpoint listening");
    Ok(listener)
}

/// Serve `router` on `listener` until the process ends.
pub async fn serve(listener: TcpListener, router: Router) -> Result<(), ApiError> {
    axum::serve(listener, router).await.map_err(ApiError::Serve)
}

/// GET /metrics
async fn scrape(
    State(metrics): State<Arc<ExpirationMetrics>>,
) -> Result<impl IntoResponse, ApiError> {
    let body = metrics.render()?;
    trace!(bytes = body.len(), "scrape served");
    Ok(([(header::CONTENT_TYPE, metrics.content_type())], body))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode},
    };
    use inwx_core::SnapshotSink;
    use inwx_model::{DomainExpiry, Snapshot};
    use tower::ServiceExt;

    use super::*;

    fn publish(metrics: &ExpirationMetrics, count: u64, entries: &[(&str, f64)]) {
        metrics.publish(&Snapshot {
            count,
            entries: entries
                .iter()
                .map(|(domain, hours_left)| DomainExpiry {
                    domain: (*domain).to_string(),
                    hours_left: *hours_left,
                })
                .collect(),
        });
    }

    async fn get(router: Router, uri: &str) -> (StatusCode, String, String) {
        let response = router
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|v| v.to_str().unwrap().to_string())
            .unwrap_or_default();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, content_type, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn serves_current_gauges() {
        let metrics = Arc::new(ExpirationMetrics::new().unwrap());
        publish(&metrics, 3, &[("example.com", 100.5)]);
        let router = HttpApi::new(metrics).router();

        let (status, content_type, body) = get(router, METRICS_PATH).await;

        assert_eq!(status, StatusCode::OK);
        assert!(content_type.starts_with("text/plain"));
        assert!(body.contains("inwx_domain_count 3"));
        assert!(body.contains(r#"inwx_domain_expiration_hours{domain="example.com"} 100.5"#));
    }

    #[tokio::test]
    async fn reflects_later_publishes() {
        let metrics = Arc::new(ExpirationMetrics::new().unwrap());
        let router = HttpApi::new(Arc::clone(&metrics)).router();

        publish(&metrics, 2, &[("a", 10.0), ("b", 5.0)]);
        let (_, _, before) = get(router.clone(), METRICS_PATH).await;
        assert!(before.contains(r#"domain="b""#));

        publish(&metrics, 1, &[("a", 10.0)]);
        let (_, _, after) = get(router, METRICS_PATH).await;
        assert!(after.contains("inwx_domain_count 1"));
        assert!(!after.contains(r#"domain="b""#));
    }

    #[tokio::test]
    async fn unknown_path_is_not_found() {
        let metrics = Arc::new(ExpirationMetrics::new().unwrap());
        let (status, _, _) = get(HttpApi::new(metrics).router(), "/health").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn bind_conflict_is_reported() {
        let first = bind(([127, 0, 0, 1], 0).into()).await.unwrap();
        let taken = first.local_addr().unwrap();

        let err = bind(taken).await.unwrap_err();
        assert!(matches!(err, ApiError::Bind { addr, .. } if addr == taken));
    }
}
