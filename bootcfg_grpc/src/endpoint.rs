use bootcfg_core::TransportError;

/// Turns a configured endpoint into the URI tonic dials.
///
/// `host:port` gets an `https://` scheme. Plaintext `http://` endpoints are
/// refused rather than silently upgraded, and so is any other scheme.
pub(crate) fn endpoint_uri(endpoint: &str) -> Result<String, TransportError> {
    let endpoint = endpoint.trim();
    if endpoint.is_empty() {
        return Err(TransportError::new("empty endpoint"));
    }
    if endpoint.starts_with("https://") {
        return Ok(endpoint.to_string());
    }
    if endpoint.starts_with("http://") {
        return Err(TransportError::new(format!(
            "refusing plaintext endpoint '{endpoint}'"
        )));
    }
    if let Some((scheme, _)) = endpoint.split_once("://") {
        return Err(TransportError::new(format!(
            "unsupported scheme '{scheme}' in endpoint '{endpoint}'"
        )));
    }
    Ok(format!("https://{endpoint}"))
}
