// Standard library
use std::sync::Arc;

// 3rd party crates
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tracing::{error, info, warn};

// Project imports
use crate::probe::types::{ProbeConfig, ProbeStatus, Prober, ProtocolFamily};

// Current module imports
use super::constants::{STATUS_CONTENT_TYPE, STATUS_HTML, STATUS_PLACEHOLDER};
use super::types::AppState;

impl AppState {
    pub fn new(prober: Prober, config: ProbeConfig, verbose: bool) -> Self {
        Self {
            prober,
            config: Arc::new(config),
            verbose,
        }
    }

    /// Probes on a detached task, a dropped request does not cancel the probe.
    pub async fn check(&self, family: ProtocolFamily) -> ProbeStatus {
        let prober = self.prober.clone();
        let config = self.config.for_family(family);

        match tokio::spawn(async move { prober.probe(&config).await }).await {
            Ok(status) => status,
            Err(e) => {
                error!("Probe task for {} failed: {}", family, e);
                ProbeStatus::DnsDown
            }
        }
    }
}

/// Creates the status page router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/ipv4", get(ipv4_handler))
        .route("/ipv6", get(ipv6_handler))
        .with_state(state)
}

async fn ipv4_handler(State(state): State<AppState>) -> Response {
    handle(&state, ProtocolFamily::V4).await
}

async fn ipv6_handler(State(state): State<AppState>) -> Response {
    handle(&state, ProtocolFamily::V6).await
}

async fn handle(state: &AppState, family: ProtocolFamily) -> Response {
    let status = state.check(family).await;
    let (_, text) = status_page(status);

    if !status.is_up() {
        warn!("{}: {}", family, text);
    } else if state.verbose {
        info!("{}: {}", family, text);
    }

    status_response(status)
}

/// HTTP status code and page text for a probe outcome.
///
/// This is the only place where outcomes are turned into codes.
pub fn status_page(status: ProbeStatus) -> (StatusCode, &'static str) {
    match status {
        ProbeStatus::Up => (StatusCode::OK, "DNS is UP"),
        ProbeStatus::DnsDown => (StatusCode::SERVICE_UNAVAILABLE, "DNS is DOWN"),
        ProbeStatus::ForwardingDown => (
            StatusCode::SERVICE_UNAVAILABLE,
            "Forwarding to Consul is NOT working",
        ),
        ProbeStatus::ConsulDown => (StatusCode::SERVICE_UNAVAILABLE, "Consul is DOWN"),
    }
}

/// Fills the status page template. The text is inserted as is.
pub fn render_status(text: &str) -> String {
    STATUS_HTML.replace(STATUS_PLACEHOLDER, text)
}

pub fn status_response(status: ProbeStatus) -> Response {
    let (code, text) = status_page(status);
    (
        code,
        [(header::CONTENT_TYPE, STATUS_CONTENT_TYPE)],
        render_status(text),
    )
        .into_response()
}
