use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the log filter, e.g. `DOCSCOPE_LOG=docscope=trace`
const LOG_ENV: &str = "DOCSCOPE_LOG";

fn default_directive(debug: bool) -> &'static str {
    if debug { "docscope=debug" } else { "warn" }
}

/// Install the stderr subscriber. Stdout stays reserved for reports.
pub(crate) fn init(debug: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(debug)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
