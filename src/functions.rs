// Standard library
use std::error::Error;
use std::sync::Arc;

// 3rd party crates
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tracing::{debug, info};

// Project imports
use crate::probe::lookup::DnsLookup;
use crate::probe::types::{Prober, ProtocolFamily};
use crate::responder::impls::create_router;
use crate::responder::types::AppState;
use crate::settings::types::ConfigManager;

/// Main application entry that serves the status pages.
///
/// This function:
/// - Builds the probe configuration once from the loaded settings
/// - Binds the status page listener (a bind failure is fatal)
/// - Serves `/ipv4` and `/ipv6` until the shutdown signal arrives
pub async fn run(
    config: Arc<ConfigManager>,
    shutdown_rx: broadcast::Receiver<()>,
) -> Result<(), Box<dyn Error>> {
    let settings = config.get_settings();
    let listen_addr = settings.listen_addr()?;

    let probe_config = settings.probe_config(ProtocolFamily::V4);
    info!(
        "Checking {} on DNS port {}{}",
        probe_config.dns_record,
        probe_config.dns_port,
        if probe_config.consul_enabled {
            format!(
                ", {} on Consul port {}",
                probe_config.consul_record, probe_config.consul_port
            )
        } else {
            String::new()
        }
    );

    let state = AppState::new(
        Prober::new(Arc::new(DnsLookup::new())),
        probe_config,
        settings.log.verbose,
    );

    let listener = TcpListener::bind(listen_addr).await?;
    info!("🌐 Serving DNS status on http://{}", listener.local_addr()?);

    serve(listener, state, shutdown_rx).await?;

    info!("Shutdown complete.");
    Ok(())
}

/// Serves the status pages on `listener` until a shutdown signal is received.
pub async fn serve(
    listener: TcpListener,
    state: AppState,
    mut shutdown_rx: broadcast::Receiver<()>,
) -> Result<(), std::io::Error> {
    let router = create_router(state);

    axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            // A closed channel means nobody can ask us to stop any more
            let _ = shutdown_rx.recv().await;
            debug!("Stopping status page server");
        })
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::constants::PROBE_TIMEOUT;
    use crate::probe::testing::ScriptedLookup;
    use crate::probe::types::ProbeConfig;
    use std::net::SocketAddr;
    use std::time::Duration;

    #[tokio::test]
    async fn serves_until_shutdown() {
        let lookup = ScriptedLookup::new();
        lookup.answer(
            SocketAddr::new(ProtocolFamily::V4.loopback(), 53),
            "example.test",
        );

        let state = AppState::new(
            Prober::new(Arc::new(lookup)),
            ProbeConfig {
                family: ProtocolFamily::V4,
                dns_port: 53,
                consul_port: 8600,
                dns_record: "example.test".to_string(),
                consul_record: "consul.service.consul".to_string(),
                consul_enabled: false,
                timeout: PROBE_TIMEOUT,
            },
            false,
        );

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (shutdown_tx, shutdown_rx) = broadcast::channel(1);
        let server = tokio::spawn(serve(listener, state, shutdown_rx));

        let client = reqwest::Client::new();

        let response = client
            .get(format!("http://{}/ipv4", addr))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::OK);
        assert_eq!(
            response.headers()["content-type"],
            "text/html; charset=UTF-8"
        );
        assert!(response.text().await.unwrap().contains("DNS is UP"));

        let response = client
            .get(format!("http://{}/ipv6", addr))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::SERVICE_UNAVAILABLE);
        assert!(response.text().await.unwrap().contains("DNS is DOWN"));

        drop(client);
        shutdown_tx.send(()).unwrap();
        tokio::time::timeout(Duration::from_secs(5), server)
            .await
            .unwrap()
            .unwrap()
            .unwrap();
    }
}
