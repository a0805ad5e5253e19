use std::io::IsTerminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_ENV: &str = "README_AGENT_LOG";
const DEFAULT_DIRECTIVES: &str = "info,readme_agent=info";

/// `README_AGENT_LOG` wins over `RUST_LOG`; unset or unparsable values fall
/// through to the next source.
fn env_filter(own: Option<&str>, rust_log: Option<&str>) -> EnvFilter {
    [own, rust_log]
        .into_iter()
        .flatten()
        .find_map(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVES))
}

/// Logs go to stderr; stdout only ever carries the generated README path.
pub fn init_logging() {
    let own = std::env::var(LOG_ENV).ok();
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = env_filter(own.as_deref(), rust_log.as_deref());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
