//! HTTP server for Prometheus metrics exposition
//!
//! Runs a lightweight HTTP server on a separate address for Prometheus
//! scraping, plus a `/health` liveness endpoint.

use crate::metrics::Metrics;
use axum::extract::State;
use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Metrics HTTP server
pub struct MetricsServer;

impl MetricsServer {
    /// Start the metrics server on the given address, serving the registry
    /// at `path` (default `/metrics`).
    ///
    /// Returns a JoinHandle that can be used to abort the server.
    /// Bind failures are logged, not fatal: the receiver keeps running
    /// without exposition.
    pub fn start(address: String, path: String, metrics: Arc<Metrics>) -> JoinHandle<()> {
        tokio::spawn(async move {
            let app = Router::new()
                .route(&path, get(metrics_handler))
                .route("/health", get(health_handler))
                .with_state(metrics);

            let listener = match tokio::net::TcpListener::bind(&address).await {
                Ok(l) => l,
                Err(e) => {
                    error!(error = %e, address = %address, "failed to bind metrics server");
                    return;
                }
            };

            info!(address = %address, path = %path, "metrics server started");

            if let Err(e) = axum::serve(listener, app).await {
                error!(error = %e, "metrics server error");
            }
        })
    }
}

/// Handler for the metrics endpoint
async fn metrics_handler(State(metrics): State<Arc<Metrics>>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [("content-type", "text/plain; version=0.0.4; charset=utf-8")],
        metrics.gather(),
    )
}

/// Handler for /health - simple liveness probe
async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({"status": "ok"})))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use prometheus::Registry;

    #[tokio::test]
    async fn metrics_handler_returns_prometheus_format() {
        let metrics = Metrics::register(Registry::new()).unwrap();
        metrics.alarm_total.with_label_values(&["inst"]).inc();

        let response = metrics_handler(State(metrics)).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let content_type = response
            .headers()
            .get("content-type")
            .unwrap()
            .to_str()
            .unwrap();
        assert!(content_type.contains("text/plain"));

        let body = axum::body::to_bytes(response.into_body(), 100_000)
            .await
            .unwrap();
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert!(text.contains("onmsgrpc_alarm_total"));
    }

    #[tokio::test]
    async fn health_handler_returns_json() {
        let response = health_handler().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), 10_000)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn server_serves_over_http() {
        let metrics = Metrics::register(Registry::new()).unwrap();
        metrics.heartbeat_total.with_label_values(&["inst"]).inc();

        // Bind directly so we know the port before starting the app
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = Router::new()
            .route("/metrics", get(metrics_handler))
            .route("/health", get(health_handler))
            .with_state(metrics);
        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        let body = reqwest::get(format!("http://{addr}/metrics"))
            .await
            .unwrap()
            .text()
            .await
            .unwrap();
        assert!(body.contains("onmsgrpc_heartbeat_total"));
    }
}
