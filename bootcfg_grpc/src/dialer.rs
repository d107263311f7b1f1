use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use bootcfg_core::{Connection, Dialer, TlsConfig, TransportError};
use tonic::service::interceptor::InterceptedService;
use tonic::service::Interceptor;
use tonic::transport::{Channel, Endpoint};
use tonic::{Request, Status};
use tracing::{debug, info};

use crate::endpoint::endpoint_uri;
use crate::proto::groups_client::GroupsClient;
use crate::proto::ignition_client::IgnitionClient;
use crate::proto::profiles_client::ProfilesClient;

/// Dials bootcfg endpoints over TLS with tonic.
///
/// The dial is eager: `dial` only succeeds once the TLS connection is up, so
/// an unreachable endpoint fails here instead of on the first RPC.
#[derive(Debug, Clone, Default)]
pub struct GrpcDialer {
    connect_timeout: Option<Duration>,
}

impl GrpcDialer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bounds each dial attempt. Without it the OS connect timeout applies.
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    fn endpoint(&self, endpoint: &str, tls: &TlsConfig) -> Result<Endpoint, TransportError> {
        let uri = endpoint_uri(endpoint)?;
        let mut target = Endpoint::from_shared(uri)
            .map_err(|e| TransportError::with_source(format!("invalid endpoint '{endpoint}'"), e))?
            .tls_config(crate::tls::client_tls_config(tls))
            .map_err(|e| TransportError::with_source("invalid TLS configuration", e))?;
        if let Some(timeout) = self.connect_timeout {
            target = target.connect_timeout(timeout);
        }
        Ok(target)
    }
}

#[async_trait]
impl Dialer for GrpcDialer {
    type Connection = GrpcConnection;

    async fn dial(&self, endpoint: &str, tls: &TlsConfig) -> Result<GrpcConnection, TransportError> {
        let target = self.endpoint(endpoint, tls)?;
        debug!(endpoint, "dialing bootcfg");
        let channel = target
            .connect()
            .await
            .map_err(|e| TransportError::with_source(format!("could not connect to '{endpoint}'"), e))?;
        info!(endpoint, "bootcfg channel established");
        Ok(GrpcConnection::new(channel))
    }
}

/// Rejects every call once the owning connection has been closed.
///
/// All three stubs of a connection share one flag, so closing the connection
/// fails them together, clones included, before anything reaches the channel.
#[derive(Debug, Clone)]
pub struct ClosedGuard {
    closed: Arc<AtomicBool>,
}

impl Interceptor for ClosedGuard {
    fn call(&mut self, request: Request<()>) -> Result<Request<()>, Status> {
        if self.closed.load(Ordering::SeqCst) {
            Err(Status::unavailable("connection closed"))
        } else {
            Ok(request)
        }
    }
}

type Guarded = InterceptedService<Channel, ClosedGuard>;

/// A tonic channel to one bootcfg server.
#[derive(Debug, Clone)]
pub struct GrpcConnection {
    channel: Channel,
    closed: Arc<AtomicBool>,
}

impl GrpcConnection {
    pub(crate) fn new(channel: Channel) -> Self {
        Self {
            channel,
            closed: Arc::new(AtomicBool::new(false)),
        }
    }

    fn guard(&self) -> ClosedGuard {
        ClosedGuard {
            closed: self.closed.clone(),
        }
    }
}

#[async_trait]
impl Connection for GrpcConnection {
    type Groups = GroupsClient<Guarded>;
    type Profiles = ProfilesClient<Guarded>;
    type Ignition = IgnitionClient<Guarded>;

    fn groups(&self) -> Self::Groups {
        GroupsClient::with_interceptor(self.channel.clone(), self.guard())
    }

    fn profiles(&self) -> Self::Profiles {
        ProfilesClient::with_interceptor(self.channel.clone(), self.guard())
    }

    fn ignition(&self) -> Self::Ignition {
        IgnitionClient::with_interceptor(self.channel.clone(), self.guard())
    }

    async fn close(self) -> Result<(), TransportError> {
        debug!("closing bootcfg channel");
        self.closed.store(true, Ordering::SeqCst);
        drop(self.channel);
        Ok(())
    }
}
