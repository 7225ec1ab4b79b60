//! Concurrent alert dispatch to every alertmanager endpoint
//!
//! The batch is serialized once; every endpoint gets its own POST task with
//! an independent deadline. A failing endpoint is counted and logged but
//! never fails the send as a whole, so one bad alertmanager cannot block the
//! others or surface errors upstream.

use crate::alert::PostableAlert;
use crate::error::{ReceiverError, Result};
use crate::metrics::Metrics;
use crate::resolve::EndpointResolver;
use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::StatusCode;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinSet;
use tracing::{info, warn};

/// Per-request deadline for one alertmanager POST
pub const HTTP_TIMEOUT: Duration = Duration::from_secs(5);

/// Sends serialized alert batches to every resolved endpoint concurrently.
pub struct Dispatcher {
    client: reqwest::Client,
    resolver: EndpointResolver,
    metrics: Arc<Metrics>,
}

impl Dispatcher {
    /// Build the dispatcher and its HTTP client.
    ///
    /// `headers` become static default headers on every request; an entry
    /// that is not a valid HTTP header is a construction error.
    pub fn new(
        resolver: EndpointResolver,
        headers: &HashMap<String, String>,
        metrics: Arc<Metrics>,
    ) -> Result<Self> {
        let mut default_headers = HeaderMap::new();
        for (key, value) in headers {
            let name = HeaderName::from_bytes(key.as_bytes())
                .map_err(|e| ReceiverError::InvalidHeader(format!("{key}: {e}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| ReceiverError::InvalidHeader(format!("{key}: {e}")))?;
            default_headers.insert(name, value);
        }

        let client = reqwest::Client::builder()
            .timeout(HTTP_TIMEOUT)
            .default_headers(default_headers)
            .build()?;

        Ok(Self {
            client,
            resolver,
            metrics,
        })
    }

    /// POST the alert list to every current endpoint.
    ///
    /// An empty list is a no-op. Endpoint resolution or serialization
    /// failure fails the send as a whole; per-endpoint POST failures do not.
    pub async fn send(&self, alerts: &[PostableAlert]) -> Result<()> {
        if alerts.is_empty() {
            return Ok(());
        }

        let endpoints = self.resolver.resolve().await?;
        let payload = Bytes::from(serde_json::to_vec(alerts)?);
        let count = alerts.len();

        let mut tasks = JoinSet::new();
        for url in endpoints {
            let client = self.client.clone();
            let payload = payload.clone();
            let metrics = Arc::clone(&self.metrics);
            tasks.spawn(async move {
                post_alerts(&client, &url, payload, count, &metrics).await;
            });
        }
        while tasks.join_next().await.is_some() {}

        Ok(())
    }
}

async fn post_alerts(
    client: &reqwest::Client,
    url: &str,
    payload: Bytes,
    count: usize,
    metrics: &Metrics,
) {
    metrics.alertmanager_total.with_label_values(&[url]).inc();

    let result = client
        .post(url)
        .header(CONTENT_TYPE, "application/json")
        .body(payload)
        .send()
        .await;

    match result {
        Err(e) => {
            warn!(url = %url, error = %e, count, "error sending to alertmanager");
            metrics.alertmanager_errors.with_label_values(&[url]).inc();
        }
        Ok(resp) if resp.status() != StatusCode::OK => {
            warn!(url = %url, status = %resp.status(), count, "bad status code from alertmanager");
            metrics.alertmanager_errors.with_label_values(&[url]).inc();
        }
        Ok(resp) => {
            info!(url = %url, status = %resp.status(), count, "sent to alertmanager");
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::Utc;
    use prometheus::Registry;
    use std::collections::BTreeMap;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_metrics() -> Arc<Metrics> {
        Metrics::register(Registry::new()).unwrap()
    }

    fn alert(name: &str) -> PostableAlert {
        let now = Utc::now();
        PostableAlert {
            labels: BTreeMap::from([("alertname".to_string(), name.to_string())]),
            generator_url: None,
            starts_at: now,
            ends_at: now,
        }
    }

    fn dispatcher_for(urls: &[String], metrics: Arc<Metrics>) -> Dispatcher {
        let resolver = EndpointResolver::from_urls(urls).unwrap();
        Dispatcher::new(resolver, &HashMap::new(), metrics).unwrap()
    }

    #[tokio::test]
    async fn posts_json_array_to_the_alerts_path() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v2/alerts"))
            .and(header("content-type", "application/json"))
            .and(body_partial_json(serde_json::json!([
                {"labels": {"alertname": "test"}}
            ])))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let metrics = test_metrics();
        let dispatcher = dispatcher_for(&[server.uri()], Arc::clone(&metrics));
        dispatcher.send(&[alert("test")]).await.unwrap();

        let endpoint = format!("{}/api/v2/alerts", server.uri());
        assert_eq!(
            metrics
                .alertmanager_total
                .with_label_values(&[endpoint.as_str()])
                .get(),
            1.0
        );
        assert_eq!(
            metrics
                .alertmanager_errors
                .with_label_values(&[endpoint.as_str()])
                .get(),
            0.0
        );
    }

    #[tokio::test]
    async fn fans_out_one_post_per_endpoint() {
        let am1 = MockServer::start().await;
        let am2 = MockServer::start().await;
        for server in [&am1, &am2] {
            Mock::given(method("POST"))
                .and(path("/api/v2/alerts"))
                .respond_with(ResponseTemplate::new(200))
                .expect(1)
                .mount(server)
                .await;
        }

        let metrics = test_metrics();
        let dispatcher = dispatcher_for(&[am1.uri(), am2.uri()], Arc::clone(&metrics));
        dispatcher.send(&[alert("fanout")]).await.unwrap();

        for server in [&am1, &am2] {
            let endpoint = format!("{}/api/v2/alerts", server.uri());
            assert_eq!(
                metrics
                    .alertmanager_total
                    .with_label_values(&[endpoint.as_str()])
                    .get(),
                1.0
            );
        }
    }

    #[tokio::test]
    async fn non_200_counts_as_failure_but_send_succeeds() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let metrics = test_metrics();
        let dispatcher = dispatcher_for(&[server.uri()], Arc::clone(&metrics));
        assert!(dispatcher.send(&[alert("boom")]).await.is_ok());

        let endpoint = format!("{}/api/v2/alerts", server.uri());
        assert_eq!(
            metrics
                .alertmanager_errors
                .with_label_values(&[endpoint.as_str()])
                .get(),
            1.0
        );
    }

    #[tokio::test]
    async fn a_bad_endpoint_does_not_block_the_good_one() {
        let good = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&good)
            .await;

        // nothing listens on the bad endpoint
        let metrics = test_metrics();
        let dispatcher = dispatcher_for(
            &[good.uri(), "http://127.0.0.1:1".to_string()],
            Arc::clone(&metrics),
        );
        assert!(dispatcher.send(&[alert("mixed")]).await.is_ok());

        assert_eq!(
            metrics
                .alertmanager_errors
                .with_label_values(&["http://127.0.0.1:1/api/v2/alerts"])
                .get(),
            1.0
        );
        let good_endpoint = format!("{}/api/v2/alerts", good.uri());
        assert_eq!(
            metrics
                .alertmanager_errors
                .with_label_values(&[good_endpoint.as_str()])
                .get(),
            0.0
        );
    }

    #[tokio::test]
    async fn empty_list_is_a_no_op() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let metrics = test_metrics();
        let dispatcher = dispatcher_for(&[server.uri()], metrics);
        dispatcher.send(&[]).await.unwrap();
    }

    #[tokio::test]
    async fn configured_headers_ride_on_every_post() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(header("authorization", "Bearer token123"))
            .and(header("x-scope-orgid", "tenant-a"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let metrics = test_metrics();
        let resolver = EndpointResolver::from_urls(&[server.uri()]).unwrap();
        let headers = HashMap::from([
            ("Authorization".to_string(), "Bearer token123".to_string()),
            ("X-Scope-OrgID".to_string(), "tenant-a".to_string()),
        ]);
        let dispatcher = Dispatcher::new(resolver, &headers, metrics).unwrap();
        dispatcher.send(&[alert("hdr")]).await.unwrap();
    }

    #[test]
    fn invalid_header_name_is_a_construction_error() {
        let metrics = test_metrics();
        let resolver = EndpointResolver::from_urls(&[]).unwrap();
        let headers = HashMap::from([("bad header".to_string(), "v".to_string())]);
        assert!(matches!(
            Dispatcher::new(resolver, &headers, metrics),
            Err(ReceiverError::InvalidHeader(_))
        ));
    }
}
