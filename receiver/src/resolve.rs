//! Alertmanager endpoint discovery
//!
//! Two mutually exclusive configurations produce the endpoint list the
//! dispatcher POSTs to:
//!
//! - a static URL list, validated and frozen at construction
//! - a DNS SRV name, looked up freshly on every send so the endpoint set
//!   follows DNS changes without a restart

use crate::error::{ReceiverError, Result};
use hickory_resolver::TokioAsyncResolver;
use std::time::Duration;
use url::Url;

/// Path every alertmanager endpoint accepts alert batches on
pub const ALERTS_PATH: &str = "/api/v2/alerts";

/// Deadline for one SRV lookup
pub const SRV_LOOKUP_TIMEOUT: Duration = Duration::from_secs(2);

/// Supplies the current list of alertmanager endpoint URLs.
///
/// Consulted by the dispatcher on every send; the static variant returns its
/// frozen list, the SRV variant reflects the current DNS view.
pub enum EndpointResolver {
    /// Fixed endpoint URLs, already suffixed with [`ALERTS_PATH`]
    Static(Vec<String>),
    /// SRV-discovered endpoints, resolved per send
    Srv {
        scheme: String,
        name: String,
        resolver: TokioAsyncResolver,
    },
}

impl EndpointResolver {
    /// Build a static resolver from base URLs.
    ///
    /// Each base has [`ALERTS_PATH`] appended, preserving any existing path
    /// prefix; an unparseable result is a construction error.
    pub fn from_urls(urls: &[String]) -> Result<Self> {
        let mut list = Vec::with_capacity(urls.len());
        for base in urls {
            list.push(join_url_path(base, ALERTS_PATH)?);
        }
        Ok(Self::Static(list))
    }

    /// Build an SRV resolver using the system DNS configuration.
    pub fn from_srv(scheme: impl Into<String>, name: impl Into<String>) -> Result<Self> {
        let resolver = TokioAsyncResolver::tokio_from_system_conf()?;
        Ok(Self::Srv {
            scheme: scheme.into(),
            name: name.into(),
            resolver,
        })
    }

    /// Produce the current endpoint list.
    pub async fn resolve(&self) -> Result<Vec<String>> {
        match self {
            Self::Static(list) => Ok(list.clone()),
            Self::Srv {
                scheme,
                name,
                resolver,
            } => {
                let lookup =
                    tokio::time::timeout(SRV_LOOKUP_TIMEOUT, resolver.srv_lookup(name.as_str()))
                        .await
                        .map_err(|_| ReceiverError::ResolveTimeout(SRV_LOOKUP_TIMEOUT))??;

                Ok(srv_endpoints(
                    scheme,
                    lookup.iter().map(|srv| (srv.target().to_utf8(), srv.port())),
                ))
            }
        }
    }
}

/// Map resolved SRV targets to endpoint URLs.
fn srv_endpoints(scheme: &str, targets: impl Iterator<Item = (String, u16)>) -> Vec<String> {
    targets
        .map(|(target, port)| srv_endpoint(scheme, &target, port))
        .collect()
}

/// Format one SRV target as an endpoint URL.
fn srv_endpoint(scheme: &str, target: &str, port: u16) -> String {
    let host = target.trim_end_matches('.');
    format!("{scheme}://{}{ALERTS_PATH}", join_host_port(host, port))
}

/// Join host and port, bracketing IPv6 literals.
pub(crate) fn join_host_port(host: &str, port: u16) -> String {
    if host.contains(':') {
        format!("[{host}]:{port}")
    } else {
        format!("{host}:{port}")
    }
}

/// Join a path onto a base URL, preserving the base's own path prefix.
///
/// `url::Url::join` resolves relative references (dropping the last path
/// segment of the base), which is not what endpoint construction needs;
/// this is a plain segment concatenation validated by a full parse.
pub(crate) fn join_url_path(base: &str, path: &str) -> Result<String> {
    let joined = format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    if let Err(source) = Url::parse(&joined) {
        return Err(ReceiverError::InvalidUrl {
            url: joined,
            source,
        });
    }
    Ok(joined)
}
