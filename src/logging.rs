use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Install a stderr `tracing` subscriber filtered by `RUST_LOG` (default `warn`).
///
/// Progress lines go to stdout separately and are not affected by the filter.
pub fn init_logging() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {e}"))?;

    tracing::debug!("imgloader logging initialized");

    Ok(())
}
