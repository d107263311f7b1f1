use super::tls::TlsConfig;
use crate::connections::ClientError;

/// A validated client configuration.
///
/// TLS is not optional here: the only way to end up without transport
/// security is through [`ClientConfigBuilder`], which refuses to build.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Endpoints in priority order, e.g. `"bootcfg.example:8081"`.
    pub endpoints: Vec<String>,
    pub tls: TlsConfig,
}

impl ClientConfig {
    pub fn new(endpoints: Vec<String>, tls: TlsConfig) -> Self {
        Self { endpoints, tls }
    }

    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ClientConfigBuilder {
    endpoints: Vec<String>,
    tls: Option<TlsConfig>,
}

impl ClientConfigBuilder {
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoints.push(endpoint.into());
        self
    }

    pub fn endpoints<I, S>(mut self, endpoints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.endpoints.extend(endpoints.into_iter().map(Into::into));
        self
    }

    pub fn tls(mut self, tls: TlsConfig) -> Self {
        self.tls = Some(tls);
        self
    }

    /// Endpoints are checked before TLS.
    pub fn build(self) -> Result<ClientConfig, ClientError> {
        if self.endpoints.is_empty() {
            return Err(ClientError::NoEndpoints);
        }
        let tls = self.tls.ok_or(ClientError::NoTlsConfig)?;
        Ok(ClientConfig {
            endpoints: self.endpoints,
            tls,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_keeps_endpoint_order() {
        let config = ClientConfig::builder()
            .endpoint("a:8081")
            .endpoints(["b:8081", "c:8081"])
            .tls(TlsConfig::new())
            .build()
            .unwrap();
        assert_eq!(config.endpoints, vec!["a:8081", "b:8081", "c:8081"]);
    }

    #[test]
    fn build_without_endpoints_fails() {
        let err = ClientConfig::builder()
            .tls(TlsConfig::new())
            .build()
            .unwrap_err();
        assert!(matches!(err, ClientError::NoEndpoints));
    }

    #[test]
    fn build_without_tls_fails() {
        let err = ClientConfig::builder().endpoint("a:8081").build().unwrap_err();
        assert!(matches!(err, ClientError::NoTlsConfig));
    }

    #[test]
    fn missing_endpoints_reported_before_missing_tls() {
        let err = ClientConfig::builder().build().unwrap_err();
        assert!(matches!(err, ClientError::NoEndpoints));
    }
}
