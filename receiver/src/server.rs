//! The receiver service: four bidirectional stream handlers plus lifecycle
//!
//! `ServiceSyncServer` implements the generated `NmsInventoryServiceSync`
//! trait. Alarm lists are counted, wrapped and enqueued; heartbeats bypass
//! the queue and dispatch immediately; inventory and event streams are read
//! and discarded so the upstream never stalls. The server never writes back
//! on any stream - end-of-stream from the client is the sole closing event.

use crate::dispatch::Dispatcher;
use crate::error::{ReceiverError, Result};
use crate::metrics::Metrics;
use crate::queue::{
    AlarmQueue, AlarmSink, BatchWorker, InstanceAlarm, DEFAULT_BATCH_MAX_SIZE,
    DEFAULT_BATCH_MAX_WAIT, DEFAULT_QUEUE_CAPACITY,
};
use crate::resolve::EndpointResolver;
use crate::transform::AlarmTransformer;
use async_trait::async_trait;
use chrono::{Duration as ChronoDuration, Utc};
use onms_core::proto::nms_inventory_service_sync_server::NmsInventoryServiceSync;
use onms_core::{
    AlarmUpdateList, EventUpdateList, HeartBeat, NmsInventoryServiceSyncServer,
    NmsInventoryUpdateList,
};
use parking_lot::Mutex;
use prometheus::Registry;
use std::collections::{BTreeMap, HashMap};
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_stream::wrappers::ReceiverStream;
use tokio_stream::Stream;
use tokio_util::sync::CancellationToken;
use tonic::{Request, Response, Status, Streaming};
use tracing::{debug, error, info, warn};

/// Default horizon for the synthetic heartbeat alert's `ends_at`
pub const DEFAULT_RESOLVE_TIMEOUT: Duration = Duration::from_secs(5 * 60);

/// Response stream type shared by all four methods (the server never sends)
pub type AckStream = Pin<Box<dyn Stream<Item = std::result::Result<(), Status>> + Send>>;

/// Builder for [`ServiceSyncServer`], mirroring the configurable surface of
/// the CLI: endpoints, headers, URL mapping, verbosity and batch tuning.
pub struct ServiceSyncServerBuilder {
    registry: Option<Registry>,
    alertmanager_urls: Vec<String>,
    alertmanager_srv: Option<(String, String)>,
    headers: HashMap<String, String>,
    url_map: HashMap<String, String>,
    verbose: bool,
    resolve_timeout: Duration,
    stale_window: Option<Duration>,
    resolve_window: Option<Duration>,
    queue_capacity: usize,
    batch_max_size: usize,
    batch_max_wait: Duration,
}

impl Default for ServiceSyncServerBuilder {
    fn default() -> Self {
        Self {
            registry: None,
            alertmanager_urls: Vec::new(),
            alertmanager_srv: None,
            headers: HashMap::new(),
            url_map: HashMap::new(),
            verbose: false,
            resolve_timeout: DEFAULT_RESOLVE_TIMEOUT,
            stale_window: None,
            resolve_window: None,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            batch_max_size: DEFAULT_BATCH_MAX_SIZE,
            batch_max_wait: DEFAULT_BATCH_MAX_WAIT,
        }
    }
}

impl ServiceSyncServerBuilder {
    /// Register metrics into an existing registry instead of a fresh one.
    pub fn registry(mut self, registry: Registry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Configure a static alertmanager endpoint list.
    pub fn alertmanager_urls(mut self, urls: Vec<String>) -> Self {
        self.alertmanager_urls = urls;
        self
    }

    /// Configure SRV-based endpoint discovery.
    pub fn alertmanager_srv(mut self, scheme: impl Into<String>, name: impl Into<String>) -> Self {
        self.alertmanager_srv = Some((scheme.into(), name.into()));
        self
    }

    /// Static headers added to every alertmanager POST.
    pub fn headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = headers;
        self
    }

    /// instance_id -> base URL mapping for generator URLs.
    pub fn url_map(mut self, url_map: HashMap<String, String>) -> Self {
        self.url_map = url_map;
        self
    }

    /// Log full alarm detail even when endpoints are configured.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Horizon for the synthetic heartbeat alert's `ends_at`.
    pub fn resolve_timeout(mut self, timeout: Duration) -> Self {
        self.resolve_timeout = timeout;
        self
    }

    /// Window after which non-cleared alarms are dropped as stale.
    pub fn stale_window(mut self, window: Duration) -> Self {
        self.stale_window = Some(window);
        self
    }

    /// Horizon for `ends_at` on forwarded non-cleared alerts.
    pub fn resolve_window(mut self, window: Duration) -> Self {
        self.resolve_window = Some(window);
        self
    }

    /// Queue capacity in alarm slices.
    pub fn queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = capacity;
        self
    }

    /// Accumulated alarm count that triggers a flush.
    pub fn batch_max_size(mut self, size: usize) -> Self {
        self.batch_max_size = size;
        self
    }

    /// Longest a non-empty batch waits before flushing.
    pub fn batch_max_wait(mut self, wait: Duration) -> Self {
        self.batch_max_wait = wait;
        self
    }

    /// Construct the receiver. Configuration problems are fatal here.
    pub fn build(self) -> Result<ServiceSyncServer> {
        if !self.alertmanager_urls.is_empty() && self.alertmanager_srv.is_some() {
            return Err(ReceiverError::Config(
                "static alertmanager URLs and SRV discovery are mutually exclusive".to_string(),
            ));
        }

        let metrics = Metrics::register(self.registry.unwrap_or_default())?;

        let resolver = if !self.alertmanager_urls.is_empty() {
            Some(EndpointResolver::from_urls(&self.alertmanager_urls)?)
        } else if let Some((scheme, name)) = self.alertmanager_srv {
            Some(EndpointResolver::from_srv(scheme, name)?)
        } else {
            None
        };

        let dispatcher = match resolver {
            Some(resolver) => Some(Dispatcher::new(resolver, &self.headers, Arc::clone(&metrics))?),
            None => None,
        };

        let mut transformer = AlarmTransformer::new(self.url_map);
        if let Some(window) = self.stale_window {
            transformer = transformer.stale_window(window);
        }
        if let Some(window) = self.resolve_window {
            transformer = transformer.resolve_window(window);
        }

        let (queue, worker) = AlarmQueue::bounded(
            self.queue_capacity,
            self.batch_max_size,
            self.batch_max_wait,
            Arc::clone(&metrics),
        );

        Ok(ServiceSyncServer {
            inner: Arc::new(ReceiverInner {
                metrics,
                queue,
                transformer,
                dispatcher,
                verbose: self.verbose,
                resolve_timeout: self.resolve_timeout,
            }),
            worker: Arc::new(Mutex::new(Some(worker))),
            cancel: CancellationToken::new(),
        })
    }
}

/// The streaming receiver.
///
/// Cloning is cheap and shares all state; one clone goes into the tonic
/// service via [`ServiceSyncServer::into_server`], another stays with the
/// bootstrap for lifecycle control.
#[derive(Clone)]
pub struct ServiceSyncServer {
    inner: Arc<ReceiverInner>,
    worker: Arc<Mutex<Option<BatchWorker>>>,
    cancel: CancellationToken,
}

struct ReceiverInner {
    metrics: Arc<Metrics>,
    queue: AlarmQueue,
    transformer: AlarmTransformer,
    dispatcher: Option<Dispatcher>,
    verbose: bool,
    resolve_timeout: Duration,
}

impl ServiceSyncServer {
    pub fn builder() -> ServiceSyncServerBuilder {
        ServiceSyncServerBuilder::default()
    }

    /// Spawn the batch worker. Returns `None` if it was already started.
    pub fn start(&self) -> Option<JoinHandle<()>> {
        let worker = self.worker.lock().take()?;
        let sink: Arc<dyn AlarmSink> = Arc::clone(&self.inner) as Arc<dyn AlarmSink>;
        Some(tokio::spawn(worker.run(sink, self.cancel.clone())))
    }

    /// Fire the cancellation token; the worker drains once and exits.
    pub fn shutdown(&self) {
        self.cancel.cancel();
    }

    /// Token tied to [`ServiceSyncServer::shutdown`], for wiring the
    /// transport's graceful-shutdown future.
    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Handle on the receiver's metrics (exposition, tests).
    pub fn metrics(&self) -> Arc<Metrics> {
        Arc::clone(&self.inner.metrics)
    }

    /// Wrap into the generated tonic service.
    pub fn into_server(self) -> NmsInventoryServiceSyncServer<ServiceSyncServer> {
        NmsInventoryServiceSyncServer::new(self)
    }
}

impl ReceiverInner {
    fn handle_alarm_update(&self, list: AlarmUpdateList) {
        let AlarmUpdateList {
            instance_id,
            instance_name,
            snapshot,
            alarms,
        } = list;

        self.metrics
            .alarm_total
            .with_label_values(&[&instance_id])
            .inc();

        if snapshot {
            self.metrics
                .alarm_count
                .with_label_values(&[&instance_id])
                .set(alarms.len() as f64);
        }

        info!(
            instance_id = %instance_id,
            name = %instance_name,
            snapshot,
            alarmcount = alarms.len(),
            "alarm update"
        );

        // wrap alarms with instance info before enqueuing
        let alarmcount = alarms.len();
        let wrapped: Vec<InstanceAlarm> = alarms
            .into_iter()
            .map(|alarm| InstanceAlarm::new(alarm, instance_id.clone(), instance_name.clone()))
            .collect();

        // enqueue - drop if full (best effort)
        if !self.queue.enqueue(wrapped) {
            warn!(
                alarmcount,
                instance_id = %instance_id,
                "alarm queue full, dropping batch"
            );
        }
    }

    async fn handle_heartbeat(&self, heartbeat: HeartBeat) {
        let instance = heartbeat.monitoring_instance.unwrap_or_default();

        self.metrics
            .heartbeat_total
            .with_label_values(&[&instance.instance_id])
            .inc();

        info!(
            instance_id = %instance.instance_id,
            instance_name = %instance.instance_name,
            timestamp = heartbeat.timestamp,
            message = %heartbeat.message,
            "heartbeat"
        );

        let Some(dispatcher) = &self.dispatcher else {
            debug!("alertmanager not set");
            return;
        };

        let now = Utc::now();
        let horizon = ChronoDuration::from_std(self.resolve_timeout)
            .unwrap_or_else(|_| ChronoDuration::seconds(300));

        let alert = crate::alert::PostableAlert {
            labels: BTreeMap::from([
                ("alertname".to_string(), "OpenNMSHeartbeat".to_string()),
                ("instance_id".to_string(), instance.instance_id),
                ("instance_name".to_string(), instance.instance_name),
            ]),
            generator_url: None,
            starts_at: now,
            ends_at: now + horizon,
        };
        debug!(?alert, "adding heartbeat alert");

        if let Err(e) = dispatcher.send(&[alert]).await {
            error!(error = %e, "error during send");
        }
    }

    /// Full structured dump of one alarm, used when no endpoints are
    /// configured and in verbose mode.
    fn log_alarm(&self, ia: &InstanceAlarm) {
        let alarm = &ia.alarm;
        let node = alarm.node_criteria.clone().unwrap_or_default();
        info!(
            alarm_id = alarm.id,
            uei = %alarm.uei,
            node.id = node.id,
            node.foreign_source = %node.foreign_source,
            node.foreign_id = %node.foreign_id,
            node.node_label = %node.node_label,
            node.location = %node.location,
            ip_address = %alarm.ip_address,
            service_name = %alarm.service_name,
            reduction_key = %alarm.reduction_key,
            alarm_type = alarm.r#type,
            count = alarm.count,
            severity = %alarm.severity().as_str_name(),
            first_event_time = alarm.first_event_time,
            description = %alarm.description,
            log_message = %alarm.log_message,
            ack_user = %alarm.ack_user,
            ack_time = alarm.ack_time,
            last_event_time = alarm.last_event_time,
            if_index = alarm.if_index,
            operator_instructions = %alarm.operator_instructions,
            clear_key = %alarm.clear_key,
            managed_object_instance = %alarm.managed_object_instance,
            managed_object_type = %alarm.managed_object_type,
            related_alarm_count = alarm.related_alarm.len(),
            last_update_time = alarm.last_update_time,
            "alarm detail"
        );
    }
}

#[async_trait]
impl AlarmSink for ReceiverInner {
    async fn deliver(&self, batch: Vec<InstanceAlarm>) {
        let mut alerts = Vec::new();
        for ia in &batch {
            if self.dispatcher.is_none() || self.verbose {
                self.log_alarm(ia);

                // finish here if no alertmanagers are configured
                if self.dispatcher.is_none() {
                    continue;
                }
            }

            if let Some(alert) = self.transformer.transform(ia) {
                alerts.push(alert);
            }
        }

        if let Some(dispatcher) = &self.dispatcher {
            if let Err(e) = dispatcher.send(&alerts).await {
                error!(error = %e, "error during send");
            }
        }
    }
}

/// Read-and-discard loop for the streams whose content is ignored.
///
/// Every message must be consumed to avoid backpressure on the sender;
/// end-of-stream completes the RPC, a receive error terminates it with that
/// status.
fn discard_stream<T: Send + 'static>(mut stream: Streaming<T>) -> AckStream {
    let (tx, rx) = mpsc::channel(1);
    tokio::spawn(async move {
        loop {
            match stream.message().await {
                Ok(Some(_)) => continue,
                Ok(None) => break,
                Err(status) => {
                    let _ = tx.send(Err(status)).await;
                    break;
                }
            }
        }
    });
    Box::pin(ReceiverStream::new(rx))
}

#[tonic::async_trait]
impl NmsInventoryServiceSync for ServiceSyncServer {
    type AlarmUpdateStream = AckStream;

    async fn alarm_update(
        &self,
        request: Request<Streaming<AlarmUpdateList>>,
    ) -> std::result::Result<Response<Self::AlarmUpdateStream>, Status> {
        let mut stream = request.into_inner();
        let inner = Arc::clone(&self.inner);
        let (tx, rx) = mpsc::channel(1);
        tokio::spawn(async move {
            loop {
                match stream.message().await {
                    Ok(Some(list)) => inner.handle_alarm_update(list),
                    Ok(None) => break,
                    Err(status) => {
                        let _ = tx.send(Err(status)).await;
                        break;
                    }
                }
            }
        });
        Ok(Response::new(Box::pin(ReceiverStream::new(rx)) as AckStream))
    }

    type HeartBeatUpdateStream = AckStream;

    async fn heart_beat_update(
        &self,
        request: Request<Streaming<HeartBeat>>,
    ) -> std::result::Result<Response<Self::HeartBeatUpdateStream>, Status> {
        let mut stream = request.into_inner();
        let inner = Arc::clone(&self.inner);
        let (tx, rx) = mpsc::channel(1);
        tokio::spawn(async move {
            loop {
                match stream.message().await {
                    Ok(Some(heartbeat)) => inner.handle_heartbeat(heartbeat).await,
                    Ok(None) => break,
                    Err(status) => {
                        let _ = tx.send(Err(status)).await;
                        break;
                    }
                }
            }
        });
        Ok(Response::new(Box::pin(ReceiverStream::new(rx)) as AckStream))
    }

    type InventoryUpdateStream = AckStream;

    /// Accepts and discards inventory data to avoid errors on the upstream side.
    async fn inventory_update(
        &self,
        request: Request<Streaming<NmsInventoryUpdateList>>,
    ) -> std::result::Result<Response<Self::InventoryUpdateStream>, Status> {
        Ok(Response::new(discard_stream(request.into_inner())))
    }

    type EventUpdateStream = AckStream;

    /// Accepts and discards event data to avoid errors on the upstream side.
    async fn event_update(
        &self,
        request: Request<Streaming<EventUpdateList>>,
    ) -> std::result::Result<Response<Self::EventUpdateStream>, Status> {
        Ok(Response::new(discard_stream(request.into_inner())))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use onms_core::{Alarm, MonitoringInstance, Severity};
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn list_of(instance_id: &str, snapshot: bool, count: usize) -> AlarmUpdateList {
        AlarmUpdateList {
            instance_id: instance_id.to_string(),
            instance_name: format!("Instance {instance_id}"),
            snapshot,
            alarms: (0..count)
                .map(|i| Alarm {
                    id: i as u64,
                    severity: Severity::Major as i32,
                    last_event_time: Utc::now().timestamp_millis() as u64,
                    ..Default::default()
                })
                .collect(),
        }
    }

    #[test]
    fn builder_rejects_urls_and_srv_together() {
        let result = ServiceSyncServer::builder()
            .alertmanager_urls(vec!["http://am:9093".to_string()])
            .alertmanager_srv("http", "_am._tcp.example.net")
            .build();
        assert!(matches!(result, Err(ReceiverError::Config(_))));
    }

    #[test]
    fn builder_rejects_invalid_static_url() {
        let result = ServiceSyncServer::builder()
            .alertmanager_urls(vec!["http://am :9093".to_string()])
            .build();
        assert!(matches!(result, Err(ReceiverError::InvalidUrl { .. })));
    }

    #[tokio::test]
    async fn alarm_total_ticks_once_per_list() {
        let server = ServiceSyncServer::builder().build().unwrap();
        let metrics = server.metrics();

        server.inner.handle_alarm_update(list_of("A", false, 3));
        server.inner.handle_alarm_update(list_of("A", false, 7));
        server.inner.handle_alarm_update(list_of("B", false, 1));

        assert_eq!(metrics.alarm_total.with_label_values(&["A"]).get(), 2.0);
        assert_eq!(metrics.alarm_total.with_label_values(&["B"]).get(), 1.0);
    }

    #[tokio::test]
    async fn snapshot_sets_gauge_and_non_snapshot_leaves_it() {
        let server = ServiceSyncServer::builder().build().unwrap();
        let metrics = server.metrics();

        server.inner.handle_alarm_update(list_of("A", true, 3));
        assert_eq!(metrics.alarm_count.with_label_values(&["A"]).get(), 3.0);

        server.inner.handle_alarm_update(list_of("A", true, 5));
        assert_eq!(metrics.alarm_count.with_label_values(&["A"]).get(), 5.0);

        // non-snapshot lists never touch the gauge
        server.inner.handle_alarm_update(list_of("A", false, 9));
        assert_eq!(metrics.alarm_count.with_label_values(&["A"]).get(), 5.0);
    }

    #[tokio::test]
    async fn overflowing_lists_are_dropped_and_counted() {
        let server = ServiceSyncServer::builder()
            .queue_capacity(2)
            .batch_max_size(100)
            .build()
            .unwrap();
        let metrics = server.metrics();

        // worker not started: nothing drains the queue
        for _ in 0..5 {
            server.inner.handle_alarm_update(list_of("A", false, 1));
        }

        assert_eq!(metrics.alarm_dropped.get(), 3.0);
        assert_eq!(metrics.alarm_total.with_label_values(&["A"]).get(), 5.0);
    }

    #[tokio::test]
    async fn heartbeat_without_endpoints_only_counts() {
        let server = ServiceSyncServer::builder().build().unwrap();
        let metrics = server.metrics();

        server
            .inner
            .handle_heartbeat(HeartBeat {
                message: "hello".to_string(),
                timestamp: 1,
                monitoring_instance: Some(MonitoringInstance {
                    instance_id: "A".to_string(),
                    instance_name: "Horizon A".to_string(),
                    instance_type: "HORIZON".to_string(),
                }),
            })
            .await;

        assert_eq!(metrics.heartbeat_total.with_label_values(&["A"]).get(), 1.0);
    }

    #[tokio::test]
    async fn heartbeat_with_endpoint_posts_one_alert() {
        let am = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v2/alerts"))
            .and(body_partial_json(serde_json::json!([
                {"labels": {
                    "alertname": "OpenNMSHeartbeat",
                    "instance_id": "A",
                    "instance_name": "Horizon A"
                }}
            ])))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&am)
            .await;

        let server = ServiceSyncServer::builder()
            .alertmanager_urls(vec![am.uri()])
            .build()
            .unwrap();

        server
            .inner
            .handle_heartbeat(HeartBeat {
                message: "hello".to_string(),
                timestamp: 1,
                monitoring_instance: Some(MonitoringInstance {
                    instance_id: "A".to_string(),
                    instance_name: "Horizon A".to_string(),
                    instance_type: "HORIZON".to_string(),
                }),
            })
            .await;

        // body assertions are enforced by the mock's expect(1)
        let requests = am.received_requests().await.unwrap();
        let body: Vec<crate::alert::PostableAlert> =
            serde_json::from_slice(&requests[0].body).unwrap();
        assert_eq!(body.len(), 1);
        assert_eq!(body[0].ends_at - body[0].starts_at, ChronoDuration::minutes(5));
    }

    #[tokio::test]
    async fn deliver_without_endpoints_sends_nothing() {
        // no dispatcher configured: deliver only logs
        let server = ServiceSyncServer::builder().build().unwrap();
        let batch = vec![InstanceAlarm::new(
            Alarm {
                severity: Severity::Major as i32,
                last_event_time: Utc::now().timestamp_millis() as u64,
                ..Default::default()
            },
            "A",
            "Horizon A",
        )];
        server.inner.deliver(batch).await;
    }

    #[tokio::test]
    async fn start_twice_returns_none() {
        let server = ServiceSyncServer::builder().build().unwrap();
        let handle = server.start();
        assert!(handle.is_some());
        assert!(server.start().is_none());

        server.shutdown();
        handle.unwrap().await.unwrap();
    }

    #[tokio::test]
    async fn shutdown_drains_pending_batch() {
        let am = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v2/alerts"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&am)
            .await;

        let server = ServiceSyncServer::builder()
            .alertmanager_urls(vec![am.uri()])
            .batch_max_size(100)
            .build()
            .unwrap();

        let handle = server.start().unwrap();
        server.inner.handle_alarm_update(list_of("A", false, 2));

        // give the worker a moment to pick the slice up, then cancel
        tokio::time::sleep(Duration::from_millis(50)).await;
        server.shutdown();
        handle.await.unwrap();
    }
}
