use flipdns_domain::config::LogFormat;
use flipdns_domain::Config;
use std::str::FromStr;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Installs the process-wide subscriber. `RUST_LOG` directives refine the
/// configured level.
pub fn init_logging(config: &Config) {
    let level = LevelFilter::from_str(&config.logging.level).unwrap_or(LevelFilter::INFO);

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    match config.logging.format {
        LogFormat::Json => subscriber.json().init(),
        LogFormat::Text => subscriber.init(),
    }
}
