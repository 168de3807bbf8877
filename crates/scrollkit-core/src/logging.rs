use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::GeneralConfig;

const FALLBACK_DIRECTIVES: &str = "info";

/// Install a fmt subscriber filtered by RUST_LOG, or the configured level.
///
/// Invalid directives fall back to "info" and are reported with `warn!`
/// once the subscriber is installed. Returns false when a global subscriber
/// was already installed.
pub fn init(config: &GeneralConfig) -> bool {
    let directives = std::env::var("RUST_LOG").unwrap_or_else(|_| config.log_level.clone());
    let (filter, rejected) = parse_filter(&directives);

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .try_init()
        .is_ok();

    if let Some(reason) = rejected {
        warn!(
            "Invalid log filter '{}' ({}), using '{}'",
            directives, reason, FALLBACK_DIRECTIVES
        );
    }
    installed
}

/// Parse filter directives, returning the parse error when falling back
fn parse_filter(directives: &str) -> (EnvFilter, Option<String>) {
    match EnvFilter::try_new(directives) {
        Ok(filter) => (filter, None),
        Err(e) => (EnvFilter::new(FALLBACK_DIRECTIVES), Some(e.to_string())),
    }
}
