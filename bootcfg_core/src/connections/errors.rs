use std::error::Error as StdError;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A failure reported by the transport while dialing or closing a connection.
///
/// The message is what gets displayed; the underlying cause (if any) is
/// reachable through `source()`.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct TransportError {
    message: String,
    #[source]
    source: Option<Box<dyn StdError + Send + Sync>>,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(
        message: impl Into<String>,
        source: impl Into<Box<dyn StdError + Send + Sync>>,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A central error enum for client setup.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("client: no endpoints provided")]
    NoEndpoints,

    #[error("client: no TLS config provided")]
    NoTlsConfig,

    /// Every endpoint was tried; only the last failure is kept.
    #[error("client: failed to dial '{endpoint}': {source}")]
    Dial {
        endpoint: String,
        #[source]
        source: TransportError,
    },

    #[error("client: invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("client: could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("client: malformed config file {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
