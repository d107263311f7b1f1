use env_logger::Env;

/// Initialize logging using env_logger.
/// Reads the RUST_LOG environment variable for filtering and defaults to `info`,
/// e.g. `RUST_LOG=bootcfg_core=debug bootcmd group list`
pub fn init_logging() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
}
