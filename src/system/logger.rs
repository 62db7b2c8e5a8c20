use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Crate-specific filter variable; wins over `RUST_LOG`.
const LOG_ENV_VAR: &str = "REVEALER_LOG";

/// Installs the global `tracing` subscriber.
///
/// The filter comes from `REVEALER_LOG`, then `RUST_LOG`. Without either the
/// level is `info`, or `debug` when `verbose` is set.
pub fn init_logging(verbose: bool, no_color: bool) {
    let filter = select_filter(
        std::env::var(LOG_ENV_VAR).ok(),
        std::env::var("RUST_LOG").ok(),
        verbose,
    );
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_ansi(!no_color)
        .finish();

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set global default subscriber: {}", err);
    }
}

/// Unparseable directives fall back to `info`.
fn select_filter(crate_var: Option<String>, rust_log: Option<String>, verbose: bool) -> EnvFilter {
    let default_level = if verbose { "debug" } else { "info" };
    match crate_var.or(rust_log) {
        Some(directives) => EnvFilter::try_new(directives).unwrap_or_else(|err| {
            eprintln!("Ignoring invalid log filter: {}", err);
            EnvFilter::new("info")
        }),
        None => EnvFilter::new(default_level),
    }
}
