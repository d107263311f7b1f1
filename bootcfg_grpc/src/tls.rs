use bootcfg_core::TlsConfig;
use tonic::transport::{Certificate, ClientTlsConfig, Identity};

/// Maps the PEM material onto tonic's client TLS settings.
///
/// Without a CA certificate the platform's native roots are trusted.
pub(crate) fn client_tls_config(tls: &TlsConfig) -> ClientTlsConfig {
    let mut config = match tls.ca_certificate() {
        Some(pem) => ClientTlsConfig::new().ca_certificate(Certificate::from_pem(pem)),
        None => ClientTlsConfig::new().with_native_roots(),
    };

    if let Some(identity) = tls.identity() {
        config = config.identity(Identity::from_pem(identity.certificate(), identity.key()));
    }

    if let Some(domain_name) = tls.domain_name() {
        config = config.domain_name(domain_name);
    }

    config
}
