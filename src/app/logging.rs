use tracing_subscriber::EnvFilter;

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV: &str = "STUDIOGEN_LOG";

const DEFAULT_FILTER: &str = "info";

/// Install the global subscriber writing step diagnostics to stdout.
///
/// Does nothing if a global subscriber is already set.
pub fn init() {
    let filter = std::env::var(LOG_ENV).unwrap_or_else(|_| DEFAULT_FILTER.into());
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stdout)
        .with_target(false)
        .without_time()
        .finish();
    // An embedder's subscriber, or an earlier init, keeps precedence.
    let _ = tracing::subscriber::set_global_default(subscriber);
}
