//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Environment switch that turns on JSON log output.
const JSON_OUTPUT_VAR: &str = "VITRINE_LOG_JSON";

/// Initialize tracing/logging for the process.
///
/// Filtering comes from `RUST_LOG`, defaulting to `info`. Output is compact
/// single-line text unless `VITRINE_LOG_JSON=1` selects JSON for log shippers.
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let json = std::env::var(JSON_OUTPUT_VAR)
        .is_ok_and(|v| v == "1" || v.eq_ignore_ascii_case("true"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false);

    if json {
        let _ = builder.json().try_init();
    } else {
        let _ = builder.compact().try_init();
    }
}
