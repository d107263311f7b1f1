use async_trait::async_trait;

use super::errors::TransportError;
use crate::config::TlsConfig;

/// Opens transport connections to a single endpoint.
///
/// Implementations decide what an endpoint string means and how the TLS
/// material is applied; the connector only cares whether a dial succeeded.
#[async_trait]
pub trait Dialer: Send + Sync {
    type Connection: Connection;

    async fn dial(&self, endpoint: &str, tls: &TlsConfig)
        -> Result<Self::Connection, TransportError>;
}

/// An established connection plus the service stubs that can be bound to it.
///
/// The three stub types are views over this connection. They own no
/// resources of their own and become unusable once `close` has run.
#[async_trait]
pub trait Connection: Send + Sized + 'static {
    type Groups: Send;
    type Profiles: Send;
    type Ignition: Send;

    fn groups(&self) -> Self::Groups;
    fn profiles(&self) -> Self::Profiles;
    fn ignition(&self) -> Self::Ignition;

    async fn close(self) -> Result<(), TransportError>;
}
