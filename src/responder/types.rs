// Standard library
use std::sync::Arc;

// Project imports
use crate::probe::types::{ProbeConfig, Prober};

/// Shared, read-only state handed to every request
#[derive(Clone)]
pub struct AppState {
    pub prober: Prober,
    /// Base configuration; each route swaps in its own protocol family
    pub config: Arc<ProbeConfig>,
    /// Log successful probes too
    pub verbose: bool,
}
