//! Logging setup for the treemenu binary.
//!
//! Log lines go to stderr so rendered markup and JSON on stdout stay clean.

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

use crate::config::{LogFormat, LoggingConfig};

/// Environment variable holding an `EnvFilter` directive
pub const LOG_ENV: &str = "TREEMENU_LOG";

/// Install the global subscriber. Later calls are no-ops.
pub fn init(verbosity: u8, logging: &LoggingConfig) {
    let filter = build_filter(verbosity, logging, std::env::var(LOG_ENV).ok().as_deref());
    let _ = Registry::default()
        .with(build_stderr_layer(logging.format).with_filter(filter))
        .try_init();
}

/// Pick the filter: `TREEMENU_LOG`, then the config directive, then `-v` count.
fn build_filter(verbosity: u8, logging: &LoggingConfig, env_directive: Option<&str>) -> EnvFilter {
    let directive = env_directive
        .filter(|d| !d.trim().is_empty())
        .or(logging.filter.as_deref());

    if let Some(directive) = directive {
        match EnvFilter::try_new(directive) {
            Ok(filter) => return filter,
            Err(err) => eprintln!("ignoring invalid log filter '{directive}': {err}"),
        }
    }

    EnvFilter::default().add_directive(level_from_verbosity(verbosity).into())
}

fn build_stderr_layer(format: LogFormat) -> Box<dyn Layer<Registry> + Send + Sync> {
    match format {
        LogFormat::Compact => Box::new(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_writer(std::io::stderr)
                .with_target(true),
        ),
        LogFormat::Pretty => Box::new(
            tracing_subscriber::fmt::layer()
                .pretty()
                .with_writer(std::io::stderr)
                .with_target(true),
        ),
        LogFormat::Json => Box::new(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_current_span(true),
        ),
    }
}

fn level_from_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::ERROR,
        1 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    }
}
