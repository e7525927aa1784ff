use std::env;
use tracing_subscriber::EnvFilter;

/// Environment variable that turns on debug output on stderr.
pub const DEBUG_ENV: &str = "POWERPROMPT_DEBUG";

const DEFAULT_DIRECTIVE: &str = "debug";

/// Install a stderr subscriber when `POWERPROMPT_DEBUG` is set.
///
/// `1`, `true` or an empty value enable `debug` for everything; any other
/// value is used as an `EnvFilter` directive (e.g. `engine=trace`), falling
/// back to `debug` when it does not parse. Without the variable nothing is
/// installed and `tracing` macros are no-ops, so the prompt line on stdout is
/// never polluted.
pub fn init_logging() {
    let Ok(value) = env::var(DEBUG_ENV) else {
        return;
    };

    let filter = EnvFilter::try_new(filter_directive(&value))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .without_time()
        .try_init();
}

/// Map the variable's value to a filter directive.
fn filter_directive(value: &str) -> &str {
    let value = value.trim();
    if value.is_empty() || value == "1" || value.eq_ignore_ascii_case("true") {
        DEFAULT_DIRECTIVE
    } else {
        value
    }
}
