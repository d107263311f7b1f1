pub mod connection;
pub mod errors;

pub use connection::{Connection, Dialer};
pub use errors::{ClientError, TransportError};
