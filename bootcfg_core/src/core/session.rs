use log::info;

use super::connector::dial_endpoints;
use crate::config::ClientConfig;
use crate::connections::{ClientError, Connection, Dialer, TransportError};

/// A live client session: one connection and the three stubs bound to it.
///
/// The stubs are not individually closable. `close` consumes the session, so
/// none of them can be reached through it afterwards; clones taken earlier
/// fail however the transport fails calls on a closed connection.
pub struct Session<C: Connection> {
    endpoint: String,
    connection: C,
    groups: C::Groups,
    profiles: C::Profiles,
    ignition: C::Ignition,
}

impl<C: Connection> Session<C> {
    /// Validates `config`, then connects to the first reachable endpoint.
    pub async fn connect<D>(dialer: &D, config: &ClientConfig) -> Result<Self, ClientError>
    where
        D: Dialer<Connection = C>,
    {
        if config.endpoints.is_empty() {
            return Err(ClientError::NoEndpoints);
        }
        let (endpoint, connection) = dial_endpoints(dialer, &config.endpoints, &config.tls).await?;
        Ok(Self::bind(endpoint, connection))
    }

    fn bind(endpoint: String, connection: C) -> Self {
        Self {
            groups: connection.groups(),
            profiles: connection.profiles(),
            ignition: connection.ignition(),
            endpoint,
            connection,
        }
    }

    /// The endpoint this session is connected to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn groups(&mut self) -> &mut C::Groups {
        &mut self.groups
    }

    pub fn profiles(&mut self) -> &mut C::Profiles {
        &mut self.profiles
    }

    pub fn ignition(&mut self) -> &mut C::Ignition {
        &mut self.ignition
    }

    /// Closes the connection. The transport's close error is returned as is.
    pub async fn close(self) -> Result<(), TransportError> {
        let Self {
            endpoint,
            connection,
            groups,
            profiles,
            ignition,
        } = self;
        drop((groups, profiles, ignition));
        info!("Closing connection to '{}'.", endpoint);
        connection.close().await
    }
}

impl<C: Connection> std::fmt::Debug for Session<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}
