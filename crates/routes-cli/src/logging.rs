use tracing_subscriber::fmt;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "ROUTES_LOG";

/// Compact stderr logging. `ROUTES_LOG` takes the usual filter directives
/// and defaults to `warn` so stdout stays clean JSON.
pub fn init() {
    let env_filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact()
        .try_init();
}
