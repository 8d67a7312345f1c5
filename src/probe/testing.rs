// Standard library
use std::collections::HashSet;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Mutex;
use std::time::Duration;

// 3rd party crates
use async_trait::async_trait;

// Current module imports
use super::errors::LookupError;
use super::traits::HostLookup;

/// Fake resolver answering only the scripted (server, name) pairs
#[derive(Debug, Default)]
pub struct ScriptedLookup {
    answers: Mutex<HashSet<(SocketAddr, String)>>,
    calls: Mutex<Vec<(SocketAddr, String)>>,
}

impl ScriptedLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `name` resolvable at `server`
    pub fn answer(&self, server: SocketAddr, name: &str) {
        self.answers
            .lock()
            .unwrap()
            .insert((server, name.to_string()));
    }

    pub fn calls(&self) -> Vec<(SocketAddr, String)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl HostLookup for ScriptedLookup {
    async fn lookup_host(
        &self,
        server: SocketAddr,
        name: &str,
        _timeout: Duration,
    ) -> Result<Vec<IpAddr>, LookupError> {
        let key = (server, name.to_string());
        self.calls.lock().unwrap().push(key.clone());

        if self.answers.lock().unwrap().contains(&key) {
            Ok(vec![IpAddr::V4(Ipv4Addr::new(192, 0, 2, 1))])
        } else {
            Err(LookupError::NxDomain {
                name: name.to_string(),
                server,
            })
        }
    }
}
