//! Logging and metrics setup.

use std::sync::Once;

use anyhow::Result;
use metrics::{Unit, describe_counter};
use tracing_subscriber::{
    EnvFilter, fmt,
    layer::{Layer, SubscriberExt},
    util::SubscriberInitExt,
};

static METRIC_DESCRIPTIONS: Once = Once::new();

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` directives take precedence over `level`. `format` is either
/// `text` or `json`.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init(level: &str, format: &str) -> Result<()> {
    describe_metrics();

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = match format {
        "json" => fmt::layer()
            .json()
            .with_current_span(true)
            .with_target(true)
            .boxed(),
        _ => fmt::layer().with_target(true).boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to install tracing subscriber: {err}"))
}

fn describe_metrics() {
    METRIC_DESCRIPTIONS.call_once(|| {
        describe_counter!(
            "cache_requests_total",
            Unit::Count,
            "Cache lookups by content type and outcome (hit, miss, bypass)."
        );
    });
}
