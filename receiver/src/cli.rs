//! Command-line interface using clap.

use clap::Parser;
use std::collections::HashMap;
use std::path::PathBuf;

/// A gRPC receiver for OpenNMS monitoring updates that forwards alarms and
/// heartbeats to Alertmanager.
#[derive(Parser, Debug)]
#[command(name = "onms-grpc-receiver")]
#[command(version)]
#[command(about = "Receive OpenNMS streaming updates and fan alerts out to Alertmanager")]
pub struct Cli {
    /// Service listen address
    #[arg(long, default_value = "localhost:8080")]
    pub address: String,

    /// TLS certificate (PEM)
    #[arg(long, requires = "key")]
    pub cert: Option<PathBuf>,

    /// TLS key (PEM)
    #[arg(long, requires = "cert")]
    pub key: Option<PathBuf>,

    /// Alertmanager base URL (repeatable)
    #[arg(
        long = "alertmanager.url",
        value_name = "URL",
        conflicts_with = "alertmanager_srv"
    )]
    pub alertmanager_url: Vec<String>,

    /// DNS SRV name for alertmanager discovery
    #[arg(long = "alertmanager.srv", value_name = "NAME")]
    pub alertmanager_srv: Option<String>,

    /// URL scheme for SRV-discovered alertmanagers
    #[arg(long = "alertmanager.scheme", value_name = "SCHEME", default_value = "http")]
    pub alertmanager_scheme: String,

    /// Custom headers for alertmanager requests as key=value pairs
    #[arg(long, value_name = "KEY=VALUE", value_delimiter = ',', value_parser = parse_key_value)]
    pub headers: Vec<(String, String)>,

    /// Generator URL mapping as instance_id=base_url pairs
    #[arg(long = "map.url", value_name = "ID=URL", value_delimiter = ',', value_parser = parse_key_value)]
    pub map_url: Vec<(String, String)>,

    /// Metrics listen address (metrics disabled when unset)
    #[arg(long = "metrics.address", value_name = "ADDR")]
    pub metrics_address: Option<String>,

    /// Metrics path
    #[arg(long = "metrics.path", default_value = "/metrics")]
    pub metrics_path: String,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Disable all logging
    #[arg(long, conflicts_with = "debug")]
    pub silent: bool,
}

impl Cli {
    /// Configured headers as a map.
    pub fn headers_map(&self) -> HashMap<String, String> {
        self.headers.iter().cloned().collect()
    }

    /// Configured instance_id -> base URL mapping.
    pub fn url_map(&self) -> HashMap<String, String> {
        self.map_url.iter().cloned().collect()
    }
}

fn parse_key_value(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{s}'"))?;
    if key.is_empty() {
        return Err(format!("empty key in '{s}'"));
    }
    Ok((key.to_string(), value.to_string()))
}
