//! Subscriber setup for `tracing`.
//!
//! LOG_LEVEL replaces the default filter when set (plain level or full directives).
//! LOG_FORMAT=json switches to one JSON object per event; anything else is the
//! human-readable format with target, file and line.
//!
//! Events are written to stderr. The REPL and `ask` own stdout.

use tracing_subscriber::EnvFilter;

/// `repl` and `ask`: only warnings and errors unless LOG_LEVEL says otherwise.
pub const CLI_DEFAULT_FILTER: &str = "warn";
/// `serve`: request spans from tower-http plus our own debug events.
pub const SERVER_DEFAULT_FILTER: &str = "info,math_helper=debug,tower_http=info,axum=info";

fn filter_from_env(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| EnvFilter::new(default_filter))
}

pub fn init_tracing(default_filter: &str) {
    let fmt = tracing_subscriber::fmt()
        .with_env_filter(filter_from_env(default_filter))
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    if std::env::var("LOG_FORMAT").as_deref() == Ok("json") {
        fmt.json().init();
    } else {
        fmt.init();
    }
}
