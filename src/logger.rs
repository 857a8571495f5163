use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Variables consulted for a filter directive, first match wins.
const FILTER_VARS: [&str; 2] = ["APICHECK_LOG", "RUST_LOG"];

const fn default_directive(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "info" }
}

/// A directive that does not parse falls back to the default level.
fn build_filter(directive: Option<String>, verbose: bool) -> EnvFilter {
    directive
        .and_then(|value| EnvFilter::try_new(value).ok())
        .unwrap_or_else(|| EnvFilter::new(default_directive(verbose)))
}

/// Installs the stderr subscriber; stdout stays reserved for the report.
pub fn init_logging(verbose: bool, no_color: bool) {
    let directive = FILTER_VARS
        .iter()
        .find_map(|name| std::env::var(name).ok());
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(build_filter(directive, verbose))
        .with_ansi(!no_color)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("apicheck: logging already initialised: {}", err);
    }
}
