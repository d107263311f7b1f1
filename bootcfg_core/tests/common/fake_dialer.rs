//! A deterministic **in‑process stand‑in** for a transport.
//!
//! *  **From the test's perspective**
//!    * Script which endpoints come up with `FakeDialer::reachable` /
//!      `FakeDialer::unreachable`. Anything not scripted refuses the dial.
//!    * Inspect every endpoint the connector tried via `FakeDialer::attempts`.
//!
//! *  **Why this exists**: It lets tests exercise the real dial loop and
//!    session lifecycle without opening a socket.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bootcfg_core::{Connection, Dialer, TlsConfig, TransportError};

#[derive(Default)]
pub struct FakeDialer {
    /// endpoint → `None` when it comes up, `Some(reason)` when the dial fails.
    script: HashMap<String, Option<String>>,
    attempts: Mutex<Vec<String>>,
    close_error: Option<String>,
}

impl FakeDialer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reachable(mut self, endpoint: &str) -> Self {
        self.script.insert(endpoint.to_string(), None);
        self
    }

    pub fn unreachable(mut self, endpoint: &str, reason: &str) -> Self {
        self.script
            .insert(endpoint.to_string(), Some(reason.to_string()));
        self
    }

    /// Connections handed out by this dialer fail to close with `reason`.
    pub fn failing_close(mut self, reason: &str) -> Self {
        self.close_error = Some(reason.to_string());
        self
    }

    /// Endpoints dialed so far, in order.
    pub fn attempts(&self) -> Vec<String> {
        self.attempts.lock().unwrap().clone()
    }
}

#[async_trait]
impl Dialer for FakeDialer {
    type Connection = FakeConnection;

    async fn dial(
        &self,
        endpoint: &str,
        _tls: &TlsConfig,
    ) -> Result<FakeConnection, TransportError> {
        self.attempts.lock().unwrap().push(endpoint.to_string());
        match self.script.get(endpoint) {
            Some(None) => Ok(FakeConnection {
                endpoint: endpoint.to_string(),
                closed: Arc::new(AtomicBool::new(false)),
                close_error: self.close_error.clone(),
            }),
            Some(Some(reason)) => Err(TransportError::new(reason.clone())),
            None => Err(TransportError::new(format!("{endpoint}: connection refused"))),
        }
    }
}

pub struct FakeConnection {
    endpoint: String,
    closed: Arc<AtomicBool>,
    close_error: Option<String>,
}

/// Every stub is the same thing: a view over the connection's `closed` flag.
#[derive(Clone)]
pub struct FakeStub {
    pub endpoint: String,
    pub connection: Arc<AtomicBool>,
}

impl FakeStub {
    /// Stands in for any RPC: fails once the connection is closed.
    pub fn call(&self) -> Result<&str, TransportError> {
        if self.connection.load(Ordering::SeqCst) {
            Err(TransportError::new("connection closed"))
        } else {
            Ok(&self.endpoint)
        }
    }
}

impl FakeConnection {
    fn stub(&self) -> FakeStub {
        FakeStub {
            endpoint: self.endpoint.clone(),
            connection: self.closed.clone(),
        }
    }
}

#[async_trait]
impl Connection for FakeConnection {
    type Groups = FakeStub;
    type Profiles = FakeStub;
    type Ignition = FakeStub;

    fn groups(&self) -> FakeStub {
        self.stub()
    }

    fn profiles(&self) -> FakeStub {
        self.stub()
    }

    fn ignition(&self) -> FakeStub {
        self.stub()
    }

    async fn close(self) -> Result<(), TransportError> {
        self.closed.store(true, Ordering::SeqCst);
        match self.close_error {
            Some(reason) => Err(TransportError::new(reason)),
            None => Ok(()),
        }
    }
}
