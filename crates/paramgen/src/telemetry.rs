use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` wins when set. Otherwise the service logs at info, or at
/// debug in debug mode. Logs are JSON lines unless debug mode asks for
/// human-readable output.
pub fn init(debug: bool) {
    let default_filter = if debug {
        "paramgen=debug,tower_http=debug"
    } else {
        "paramgen=info,tower_http=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    let registry = tracing_subscriber::registry().with(filter);

    if debug {
        registry.with(tracing_subscriber::fmt::layer()).init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    }
}
