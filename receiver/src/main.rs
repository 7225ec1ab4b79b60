//! onms-grpc-receiver - process bootstrap

use anyhow::Context;
use clap::Parser;
use onms_receiver::cli::Cli;
use onms_receiver::metrics_server::MetricsServer;
use onms_receiver::server::ServiceSyncServer;
use onms_receiver::tls::{tls_incoming, CertificateSource, DEFAULT_WATCH_INTERVAL};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio_rustls::TlsAcceptor;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::Server;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if !cli.silent {
        let level = if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        };
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
            )
            .init();
    }

    // construction errors are fatal before anything listens
    let mut builder = ServiceSyncServer::builder()
        .headers(cli.headers_map())
        .url_map(cli.url_map())
        .verbose(cli.debug);
    if !cli.alertmanager_url.is_empty() {
        builder = builder.alertmanager_urls(cli.alertmanager_url.clone());
    }
    if let Some(srv) = &cli.alertmanager_srv {
        builder = builder.alertmanager_srv(cli.alertmanager_scheme.clone(), srv.clone());
    }
    let server = builder.build().context("failed to construct receiver")?;

    if let Some(metrics_address) = &cli.metrics_address {
        MetricsServer::start(
            metrics_address.clone(),
            cli.metrics_path.clone(),
            server.metrics(),
        );
    }

    let worker = server.start();
    let cancel = server.cancel_token();

    // shutdown on ctrl-c
    tokio::spawn({
        let server = server.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("shutdown signal received");
                server.shutdown();
            }
        }
    });

    let listener = TcpListener::bind(&cli.address)
        .await
        .with_context(|| format!("failed to listen on {}", cli.address))?;

    let shutdown = {
        let cancel = cancel.clone();
        async move { cancel.cancelled().await }
    };

    let svc = server.clone().into_server();

    if let (Some(cert), Some(key)) = (&cli.cert, &cli.key) {
        let source = CertificateSource::load(cert.clone(), key.clone())
            .context("failed to load TLS identity")?;
        source.spawn_watcher(DEFAULT_WATCH_INTERVAL, cancel.clone());
        info!(cert = %cert.display(), key = %key.display(), "started certificate watcher");

        let acceptor = TlsAcceptor::from(Arc::new(source.server_config()?));
        let incoming = tls_incoming(listener, acceptor, cancel.clone());

        info!(address = %cli.address, tls = true, "started gRPC server");
        Server::builder()
            .add_service(svc)
            .serve_with_incoming_shutdown(incoming, shutdown)
            .await?;
    } else {
        info!(address = %cli.address, tls = false, "started gRPC server");
        Server::builder()
            .add_service(svc)
            .serve_with_incoming_shutdown(TcpListenerStream::new(listener), shutdown)
            .await?;
    }

    // the transport is down; let the batch worker drain once
    server.shutdown();
    if let Some(handle) = worker {
        let _ = handle.await;
    }
    info!("shutdown complete");

    Ok(())
}
