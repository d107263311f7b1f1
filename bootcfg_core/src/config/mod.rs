mod client_config;
mod file;
mod tls;

pub use client_config::{ClientConfig, ClientConfigBuilder};
pub use file::ConfigFile;
pub use tls::{ClientIdentity, TlsConfig, TlsFiles};
