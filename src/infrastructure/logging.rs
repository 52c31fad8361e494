// src/infrastructure/logging.rs
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "info,tower_http=info,sqlx=warn";

/// Installs the process-wide subscriber. Development mode gets a readable
/// console format; everything else logs one JSON object per line.
pub fn init_tracing(is_development: bool) {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_FILTER.to_string());

    let registry = tracing_subscriber::registry().with(EnvFilter::new(env_filter));

    let result = if is_development {
        registry.with(fmt::layer().with_target(false)).try_init()
    } else {
        registry
            .with(fmt::layer().json().flatten_event(true))
            .try_init()
    };

    if result.is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
