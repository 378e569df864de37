//! Diagnostic logging setup.

use std::io;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "YAHTZEE_LOG";

/// Install a stderr subscriber when `YAHTZEE_LOG` is set.
///
/// Invalid directives fall back to warnings only.
pub fn init() {
    let Ok(directives) = std::env::var(LOG_ENV) else {
        return;
    };
    let filter = EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
    tracing::debug!(%directives, "logging enabled");
}
