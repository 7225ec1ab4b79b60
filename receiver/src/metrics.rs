//! Prometheus metrics for the receiver
//!
//! All families live on one [`Metrics`] struct, registered once at receiver
//! construction against a caller-supplied (or fresh) [`Registry`]. The
//! exposition server encodes the same registry, so an embedding process can
//! merge its own collectors in before handing the registry over.

use crate::error::Result;
use prometheus::{
    Counter, CounterVec, Encoder, Gauge, GaugeVec, Opts, Registry, TextEncoder,
};
use std::sync::Arc;

/// All receiver metrics
pub struct Metrics {
    registry: Registry,

    /// POST attempts per alertmanager endpoint
    pub alertmanager_total: CounterVec,

    /// Failed POSTs per alertmanager endpoint
    pub alertmanager_errors: CounterVec,

    /// AlarmUpdateLists received per upstream instance (one tick per list)
    pub alarm_total: CounterVec,

    /// Active alarms per instance, from the last full snapshot list
    pub alarm_count: GaugeVec,

    /// Heartbeats received per upstream instance
    pub heartbeat_total: CounterVec,

    /// Alarm batches currently waiting in the queue
    pub alarm_queue_depth: Gauge,

    /// Alarms dropped because the queue was full
    pub alarm_dropped: Counter,
}

impl Metrics {
    /// Create every family and register it into `registry`.
    ///
    /// Returns an error if any family clashes with something already
    /// registered (a construction-time, fatal condition).
    pub fn register(registry: Registry) -> Result<Arc<Self>> {
        let alertmanager_total = CounterVec::new(
            Opts::new(
                "onmsgrpc_alertmanager_total",
                "Total number of messages sent to alertmanager.",
            ),
            &["alertmanager"],
        )?;
        registry.register(Box::new(alertmanager_total.clone()))?;

        let alertmanager_errors = CounterVec::new(
            Opts::new(
                "onmsgrpc_alertmanager_failed_total",
                "Total number of messages that could not be sent to alertmanager.",
            ),
            &["alertmanager"],
        )?;
        registry.register(Box::new(alertmanager_errors.clone()))?;

        let alarm_total = CounterVec::new(
            Opts::new(
                "onmsgrpc_alarm_total",
                "Total number of alarm updates seen from a Horizon instance.",
            ),
            &["instance_id"],
        )?;
        registry.register(Box::new(alarm_total.clone()))?;

        let alarm_count = GaugeVec::new(
            Opts::new(
                "onmsgrpc_alarm_count",
                "Current number of active alarms for a Horizon instance from the last full snapshot of alarms.",
            ),
            &["instance_id"],
        )?;
        registry.register(Box::new(alarm_count.clone()))?;

        let heartbeat_total = CounterVec::new(
            Opts::new(
                "onmsgrpc_heartbeat_total",
                "Total number of heartbeat updates seen from a Horizon instance.",
            ),
            &["instance_id"],
        )?;
        registry.register(Box::new(heartbeat_total.clone()))?;

        let alarm_queue_depth = Gauge::new(
            "onmsgrpc_alarm_queue_depth",
            "Current number of alarm batches waiting in the queue.",
        )?;
        registry.register(Box::new(alarm_queue_depth.clone()))?;

        let alarm_dropped = Counter::new(
            "onmsgrpc_alarm_dropped_total",
            "Total number of alarms dropped due to the queue being full.",
        )?;
        registry.register(Box::new(alarm_dropped.clone()))?;

        Ok(Arc::new(Metrics {
            registry,
            alertmanager_total,
            alertmanager_errors,
            alarm_total,
            alarm_count,
            heartbeat_total,
            alarm_queue_depth,
            alarm_dropped,
        }))
    }

    /// The registry every family is registered into
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Encode the registry in Prometheus text format
    pub fn gather(&self) -> String {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        if encoder.encode(&metric_families, &mut buffer).is_ok() {
            String::from_utf8(buffer).unwrap_or_default()
        } else {
            String::new()
        }
    }
}
