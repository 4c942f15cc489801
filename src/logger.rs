use anyhow::{anyhow, Result};
use std::env;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (`info`, `code_recents=debug`, ...).
pub const LOG_ENV: &str = "CODE_RECENTS_LOG";

const DEFAULT_FILTER: &str = "info";

/// Filter from the given directives, `info` when unset or unparsable.
pub fn filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the stderr subscriber; stdout belongs to the host protocol.
/// Records from the `log` macros are forwarded into it.
pub fn init() -> Result<()> {
    let directives = env::var(LOG_ENV).ok();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_env_filter(filter(directives.as_deref()))
        .try_init()
        .map_err(|e| anyhow!("failed to install logger: {e}"))
}
