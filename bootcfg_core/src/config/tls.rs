use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::connections::ClientError;

/// Client TLS material, held as PEM bytes.
///
/// With no CA certificate the transport falls back to its own trust roots.
#[derive(Clone, Default)]
pub struct TlsConfig {
    ca_certificate: Option<Vec<u8>>,
    identity: Option<ClientIdentity>,
    domain_name: Option<String>,
}

/// Client certificate and private key used for mutual TLS.
#[derive(Clone)]
pub struct ClientIdentity {
    certificate: Vec<u8>,
    key: Vec<u8>,
}

impl TlsConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ca_certificate(mut self, pem: impl Into<Vec<u8>>) -> Self {
        self.ca_certificate = Some(pem.into());
        self
    }

    pub fn with_identity(mut self, certificate: impl Into<Vec<u8>>, key: impl Into<Vec<u8>>) -> Self {
        self.identity = Some(ClientIdentity {
            certificate: certificate.into(),
            key: key.into(),
        });
        self
    }

    /// Overrides the name checked against the server certificate.
    pub fn with_domain_name(mut self, domain_name: impl Into<String>) -> Self {
        self.domain_name = Some(domain_name.into());
        self
    }

    pub fn ca_certificate(&self) -> Option<&[u8]> {
        self.ca_certificate.as_deref()
    }

    pub fn identity(&self) -> Option<&ClientIdentity> {
        self.identity.as_ref()
    }

    pub fn domain_name(&self) -> Option<&str> {
        self.domain_name.as_deref()
    }
}

impl ClientIdentity {
    pub fn certificate(&self) -> &[u8] {
        &self.certificate
    }

    pub fn key(&self) -> &[u8] {
        &self.key
    }
}

// Key material stays out of debug output.
impl fmt::Debug for TlsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TlsConfig")
            .field("ca_certificate", &self.ca_certificate.as_ref().map(Vec::len))
            .field("identity", &self.identity)
            .field("domain_name", &self.domain_name)
            .finish()
    }
}

impl fmt::Debug for ClientIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientIdentity")
            .field("certificate", &self.certificate.len())
            .field("key", &"<redacted>")
            .finish()
    }
}

/// PEM files on disk that make up a [`TlsConfig`].
///
/// JSON looks like:
/// `{ "ca_file":"ca.crt", "cert_file":"client.crt", "key_file":"client.key" }`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TlsFiles {
    #[serde(default)]
    pub ca_file: Option<PathBuf>,
    #[serde(default)]
    pub cert_file: Option<PathBuf>,
    #[serde(default)]
    pub key_file: Option<PathBuf>,
    #[serde(default)]
    pub domain_name: Option<String>,
}

impl TlsFiles {
    /// Reads every named file. A certificate without its key (or the other
    /// way round) is rejected.
    pub async fn load(&self) -> Result<TlsConfig, ClientError> {
        let mut tls = TlsConfig::new();

        if let Some(ca_file) = &self.ca_file {
            tls = tls.with_ca_certificate(read_pem(ca_file).await?);
        }

        match (&self.cert_file, &self.key_file) {
            (Some(cert_file), Some(key_file)) => {
                let certificate = read_pem(cert_file).await?;
                let key = read_pem(key_file).await?;
                tls = tls.with_identity(certificate, key);
            }
            (None, None) => {}
            (Some(_), None) => {
                return Err(ClientError::InvalidConfig(
                    "cert_file given without key_file".into(),
                ))
            }
            (None, Some(_)) => {
                return Err(ClientError::InvalidConfig(
                    "key_file given without cert_file".into(),
                ))
            }
        }

        if let Some(domain_name) = &self.domain_name {
            tls = tls.with_domain_name(domain_name.clone());
        }
        Ok(tls)
    }
}

async fn read_pem(path: &Path) -> Result<Vec<u8>, ClientError> {
    tokio::fs::read(path).await.map_err(|source| ClientError::Io {
        path: path.to_path_buf(),
        source,
    })
}
