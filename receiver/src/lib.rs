//! onms-receiver - Streaming gRPC receiver for OpenNMS monitoring updates
//!
//! Accepts the four bidirectional `NmsInventoryServiceSync` streams from
//! upstream monitoring instances, transforms alarms and heartbeats into
//! Alertmanager alerts, and fans them out to every configured endpoint.
//!
//! ```text
//! AlarmUpdate ──► AlarmQueue ──► BatchWorker ──► AlarmTransformer ──► Dispatcher ──► N × POST
//! HeartBeatUpdate ───────────────────────────────────────────────────┘
//! InventoryUpdate / EventUpdate ──► read and discard
//! ```

#![deny(unsafe_code)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::panic)]

pub mod alert;
pub mod cli;
pub mod dispatch;
pub mod error;
pub mod metrics;
pub mod metrics_server;
pub mod queue;
pub mod resolve;
pub mod server;
pub mod tls;
pub mod transform;

pub use alert::PostableAlert;
pub use cli::Cli;
pub use dispatch::Dispatcher;
pub use error::{ReceiverError, Result};
pub use metrics::Metrics;
pub use metrics_server::MetricsServer;
pub use queue::{AlarmQueue, AlarmSink, BatchWorker, InstanceAlarm};
pub use resolve::EndpointResolver;
pub use server::{ServiceSyncServer, ServiceSyncServerBuilder};
pub use tls::CertificateSource;
pub use transform::AlarmTransformer;
