use log::{debug, info};

use crate::config::TlsConfig;
use crate::connections::{ClientError, Dialer};

/// Dials each endpoint in order and returns the first connection that comes up.
///
/// A failed attempt moves straight on to the next endpoint: no retry, no
/// delay. Endpoints after the first success are never dialed. When all of
/// them fail, only the last failure is returned.
pub async fn dial_endpoints<D: Dialer>(
    dialer: &D,
    endpoints: &[String],
    tls: &TlsConfig,
) -> Result<(String, D::Connection), ClientError> {
    let mut last_error = None;

    for endpoint in endpoints {
        debug!("Dialing '{}'.", endpoint);
        match dialer.dial(endpoint, tls).await {
            Ok(connection) => {
                info!("Connected to '{}'.", endpoint);
                return Ok((endpoint.clone(), connection));
            }
            Err(source) => {
                debug!("Dial to '{}' failed: {}", endpoint, source);
                last_error = Some(ClientError::Dial {
                    endpoint: endpoint.clone(),
                    source,
                });
            }
        }
    }

    Err(last_error.unwrap_or(ClientError::NoEndpoints))
}
