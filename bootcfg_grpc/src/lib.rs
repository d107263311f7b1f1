//! tonic bindings for the bootcfg Groups, Profiles and Ignition services and
//! the transport that plugs them into [`bootcfg_core::Session`].

use bootcfg_core::{ClientConfig, ClientError, Session};

// ── generated protobuf code ───────────────────────────────────────────────────
pub mod proto {
    tonic::include_proto!("bootcfg.v1");
}

mod dialer;
mod endpoint;
mod tls;

pub use dialer::{ClosedGuard, GrpcConnection, GrpcDialer};

/// A bootcfg RPC session over tonic.
pub type Client = Session<GrpcConnection>;

/// Connects to the first reachable endpoint in `config` with default dial settings.
pub async fn connect(config: &ClientConfig) -> Result<Client, ClientError> {
    Client::connect(&GrpcDialer::new(), config).await
}
