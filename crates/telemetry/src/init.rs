// Path: crates/telemetry/src/init.rs
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Registry};

/// Filter applied when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info";

/// Initializes the global `tracing` subscriber.
///
/// Output goes to stderr so command output on stdout stays machine readable.
/// With `json` set every event is one JSON object per line; otherwise a
/// compact human-readable format is used. `log` records (emitted by the HTTP
/// stack) are bridged into `tracing`.
pub fn init_tracing(json: bool) -> Result<(), anyhow::Error> {
    let json_layer = json.then(|| {
        fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
    });
    let text_layer = (!json).then(|| {
        fmt::layer()
            .compact()
            .with_writer(std::io::stderr)
            .with_target(true)
    });
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let subscriber = Registry::default()
        .with(filter)
        .with(json_layer)
        .with(text_layer);
    tracing_log::LogTracer::init()?;
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
