use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use super::client_config::ClientConfig;
use super::tls::TlsFiles;
use crate::connections::ClientError;

/// On-disk form of a [`ClientConfig`].
///
/// ```json
/// {
///   "endpoints": ["node1.example:8081", "node2.example:8081"],
///   "tls": { "ca_file": "ca.crt", "cert_file": "client.crt", "key_file": "client.key" }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub endpoints: Vec<String>,
    #[serde(default)]
    pub tls: Option<TlsFiles>,
}

impl ConfigFile {
    pub async fn read(path: impl AsRef<Path>) -> Result<Self, ClientError> {
        let path = path.as_ref();
        debug!("Reading client config from {:?}", path);
        let raw = tokio::fs::read(path).await.map_err(|source| ClientError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_slice(&raw).map_err(|source| ClientError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Validates the file and loads the referenced TLS material.
    pub async fn into_client_config(self) -> Result<ClientConfig, ClientError> {
        if self.endpoints.is_empty() {
            return Err(ClientError::NoEndpoints);
        }
        let tls = self.tls.ok_or(ClientError::NoTlsConfig)?.load().await?;
        Ok(ClientConfig::new(self.endpoints, tls))
    }
}

impl ClientConfig {
    /// Loads and validates a JSON config file.
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, ClientError> {
        ConfigFile::read(path).await?.into_client_config().await
    }
}
