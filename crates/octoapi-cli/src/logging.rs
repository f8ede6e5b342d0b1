//! Logging initialization for the CLI
//!
//! Console logging through `tracing`, written to stderr so command output
//! on stdout stays machine-readable.

use anyhow::{Context, Result};
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the global tracing subscriber.
///
/// Verbose mode lowers the default level to debug; `RUST_LOG` and
/// `LOG_FILTER` directives take precedence either way. Call once at
/// startup.
pub fn init(verbose: bool) -> Result<()> {
    let mut filter = EnvFilter::from_default_env().add_directive(default_level(verbose).into());

    if let Ok(directives) = std::env::var("LOG_FILTER") {
        for directive in directives.split(',') {
            filter = filter.add_directive(
                directive
                    .parse()
                    .context("Failed to parse LOG_FILTER directive")?,
            );
        }
    }

    let fmt_layer = fmt::layer().with_writer(std::io::stderr).with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .context("Failed to install the tracing subscriber")?;

    Ok(())
}

fn default_level(verbose: bool) -> Level {
    if verbose {
        Level::DEBUG
    } else {
        Level::WARN
    }
}
