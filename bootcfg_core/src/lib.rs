pub mod config;
pub mod connections;
pub mod core;
pub mod utils;

pub use config::{ClientConfig, TlsConfig, TlsFiles};
pub use connections::{ClientError, Connection, Dialer, TransportError};
pub use crate::core::Session;
