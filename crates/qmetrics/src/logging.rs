//! Log subscriber setup. Events go to stderr so stdout stays parseable.

use qmetrics_config::{GlobalArgs, LogFormat};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding an `EnvFilter` directive string.
pub(crate) const LOG_ENV: &str = "QMETRICS_LOG";

/// Default directive for a `-v` count.
pub(crate) fn level_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

pub(crate) fn init(global: &GlobalArgs) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(level_directive(global.verbose)));
    let registry = tracing_subscriber::registry().with(filter);

    // A subscriber may already be installed when embedded; keep the existing one.
    let _ = match global.log_format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Text => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init(),
    };
}
