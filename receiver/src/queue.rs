//! Bounded alarm batching queue and its flush worker
//!
//! Stream handlers enqueue slices of wrapped alarms without blocking; a
//! single worker accumulates them into a batch and flushes on a size
//! threshold, a wait timer, or shutdown. Overflow drops the whole slice and
//! counts it - upstream streams are never stalled by a slow downstream.

use crate::metrics::Metrics;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use onms_core::Alarm;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Default queue capacity, in alarm slices
pub const DEFAULT_QUEUE_CAPACITY: usize = 100;

/// Default number of accumulated alarms that triggers a flush
pub const DEFAULT_BATCH_MAX_SIZE: usize = 10;

/// Default maximum time a non-empty batch waits before flushing
pub const DEFAULT_BATCH_MAX_WAIT: Duration = Duration::from_secs(20);

/// One alarm wrapped with the identity of the instance that sent it and the
/// wall-clock time it was received.
#[derive(Debug, Clone)]
pub struct InstanceAlarm {
    pub alarm: Alarm,
    pub instance_id: String,
    pub instance_name: String,
    pub received_at: DateTime<Utc>,
}

impl InstanceAlarm {
    /// Wrap an alarm, stamping the current wall-clock.
    pub fn new(alarm: Alarm, instance_id: impl Into<String>, instance_name: impl Into<String>) -> Self {
        Self {
            alarm,
            instance_id: instance_id.into(),
            instance_name: instance_name.into(),
            received_at: Utc::now(),
        }
    }
}

/// Consumes flushed batches (transform + dispatch in production, a collector
/// in tests).
#[async_trait]
pub trait AlarmSink: Send + Sync {
    async fn deliver(&self, batch: Vec<InstanceAlarm>);
}

/// Non-blocking producer half of the batching queue.
#[derive(Clone)]
pub struct AlarmQueue {
    tx: mpsc::Sender<Vec<InstanceAlarm>>,
    metrics: Arc<Metrics>,
}

impl AlarmQueue {
    /// Create the queue and its worker.
    pub fn bounded(
        capacity: usize,
        batch_max_size: usize,
        batch_max_wait: Duration,
        metrics: Arc<Metrics>,
    ) -> (Self, BatchWorker) {
        let (tx, rx) = mpsc::channel(capacity);
        let queue = Self {
            tx,
            metrics: Arc::clone(&metrics),
        };
        let worker = BatchWorker {
            rx,
            batch_max_size,
            batch_max_wait,
            metrics,
        };
        (queue, worker)
    }

    /// Enqueue one slice of alarms without blocking.
    ///
    /// Returns `false` when the queue has no capacity (or the worker is
    /// gone); the slice is dropped whole and counted in the dropped total.
    pub fn enqueue(&self, alarms: Vec<InstanceAlarm>) -> bool {
        let count = alarms.len();
        match self.tx.try_send(alarms) {
            Ok(()) => {
                let depth = self.tx.max_capacity() - self.tx.capacity();
                self.metrics.alarm_queue_depth.set(depth as f64);
                true
            }
            Err(_) => {
                self.metrics.alarm_dropped.inc_by(count as f64);
                false
            }
        }
    }
}

/// The single batch worker.
///
/// Three external events drive it: a slice arriving from the queue, the wait
/// timer expiring, and cancellation. The accumulated batch is owned
/// exclusively by this task, so no locking is involved.
pub struct BatchWorker {
    rx: mpsc::Receiver<Vec<InstanceAlarm>>,
    batch_max_size: usize,
    batch_max_wait: Duration,
    metrics: Arc<Metrics>,
}

impl BatchWorker {
    /// Run until cancelled or the queue closes, draining any partial batch
    /// before returning.
    pub async fn run(mut self, sink: Arc<dyn AlarmSink>, cancel: CancellationToken) {
        let mut batch: Vec<InstanceAlarm> = Vec::new();
        let timer = tokio::time::sleep(self.batch_max_wait);
        tokio::pin!(timer);

        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    if !batch.is_empty() {
                        info!(alarmcount = batch.len(), "flushing batch on shutdown");
                        sink.deliver(std::mem::take(&mut batch)).await;
                    }
                    self.metrics.alarm_queue_depth.set(0.0);
                    return;
                }

                received = self.rx.recv() => match received {
                    Some(alarms) => {
                        batch.extend(alarms);

                        if batch.len() >= self.batch_max_size {
                            info!(alarmcount = batch.len(), "flushing batch on size");
                            sink.deliver(std::mem::take(&mut batch)).await;
                            self.metrics.alarm_queue_depth.set(self.rx.len() as f64);
                            timer.as_mut().reset(tokio::time::Instant::now() + self.batch_max_wait);
                        }
                    }
                    None => {
                        // all senders gone, flush remainder
                        if !batch.is_empty() {
                            info!(alarmcount = batch.len(), "flushing batch on close");
                            sink.deliver(std::mem::take(&mut batch)).await;
                        }
                        self.metrics.alarm_queue_depth.set(0.0);
                        return;
                    }
                },

                () = &mut timer => {
                    if !batch.is_empty() {
                        info!(alarmcount = batch.len(), "flushing batch on timer");
                        sink.deliver(std::mem::take(&mut batch)).await;
                        self.metrics.alarm_queue_depth.set(self.rx.len() as f64);
                    }
                    timer.as_mut().reset(tokio::time::Instant::now() + self.batch_max_wait);
                }
            }
        }
    }
}
