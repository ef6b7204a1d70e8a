//! Log subscriber setup.
//!
//! Development prints pretty, multi-line events with source locations.
//! Production prints one JSON object per event, flattened, with the active
//! span (request id, method, path) attached.

use tracing_subscriber::{
    EnvFilter, Layer, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::config::Environment;

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Filter used when `RUST_LOG` is unset.
///
/// Downstream HTTP plumbing (`hyper`, `reqwest`) stays quiet even in
/// development; the Notion client logs its own failures.
pub fn default_directives(env: &Environment) -> &'static str {
    match env {
        Environment::Development => "debug,tower_http=debug,hyper=info,hyper_util=info,reqwest=info",
        Environment::Production => "info,tower_http=info,hyper=warn,hyper_util=warn,reqwest=warn",
    }
}

/// Install the global subscriber. `RUST_LOG` overrides [`default_directives`].
pub fn init_tracing(env: &Environment) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(env)));

    let output: BoxedLayer = match env {
        Environment::Development => fmt::layer()
            .pretty()
            .with_file(true)
            .with_line_number(true)
            .boxed(),
        Environment::Production => fmt::layer()
            .json()
            .flatten_event(true)
            .with_current_span(true)
            .with_span_list(false)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(output.with_filter(filter))
        .init();

    tracing::info!(environment = ?env, "Tracing initialized");
}
