use tracing_subscriber::EnvFilter;

/// Filter directives for log output, e.g. `debug`.
pub(crate) const LOG_ENV: &str = "EXTRACT_SUBDOMAIN_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Route `tracing` events to stderr. Stdout carries the subdomain and nothing else.
pub(crate) fn install() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
    if let Err(e) = installed {
        eprintln!("Warning: failed to install logger: {e}");
    }
}
