use pokedex_domain::Config;
use tracing_subscriber::{fmt, EnvFilter};

/// `RUST_LOG` takes precedence over the configured level.
pub fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.to_ascii_lowercase()));

    fmt().with_env_filter(filter).with_target(false).init();
}
