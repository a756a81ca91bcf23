//! Logging utilities and defaults.

use std::env;
use std::str::FromStr;

use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

/// Default [`tracing`] initialization for the shim.
pub fn initialize_logging() -> anyhow::Result<()> {
    let env_filter = env::var("RUST_LOG").unwrap_or_else(|_| default_rust_log_value());

    let layer = fmt::layer().with_filter(EnvFilter::from_str(&env_filter)?);
    tracing_subscriber::registry().with(layer).try_init()?;

    info!(
        RUST_LOG = env_filter,
        "Logging initialized; you can restart the shim with a custom `RUST_LOG` env. var. to customize log filtering"
    );
    set_tracing_panic_hook();
    Ok(())
}

/// A good default for [`EnvFilter`] when `RUST_LOG` is not set.
pub fn default_rust_log_value() -> String {
    [
        "info", // Default logging level.
        "ikura_shim_rollkit_rpc=debug",
        "ikura_shim_simulator=debug",
        // Info-only:
        "hyper=info",
        "tower=info",
        "jsonrpsee-server=info",
    ]
    .join(",")
}

/// Adds [`tracing_panic::panic_hook`] to the panic hook.
pub fn set_tracing_panic_hook() {
    let prev_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        tracing_panic::panic_hook(panic_info);
        prev_hook(panic_info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_parses() {
        assert!(EnvFilter::from_str(&default_rust_log_value()).is_ok());
    }
}
