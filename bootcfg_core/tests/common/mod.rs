pub mod fake_dialer;

use bootcfg_core::{ClientConfig, TlsConfig};
use log::LevelFilter;

/// Logs will appear only when you run with `-- --nocapture`
/// or when the test fails.
pub fn init_test_logging() {
    let _ = env_logger::Builder::from_default_env()
        .filter_level(LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

pub fn config(endpoints: &[&str]) -> ClientConfig {
    ClientConfig::new(
        endpoints.iter().map(|e| e.to_string()).collect(),
        TlsConfig::new().with_ca_certificate("test-ca"),
    )
}
