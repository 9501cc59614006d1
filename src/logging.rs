//! File logging
//!
//! The terminal UI owns the screen, so events go to
//! `<log_dir>/modelt.log` with daily rotation. `RUST_LOG` takes precedence
//! over the configured filter.

use std::path::Path;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_FILE: &str = "modelt.log";

/// Installs the global subscriber. When the log directory cannot be
/// created a warning goes to stderr and no subscriber is installed.
pub fn init(log_dir: Option<&Path>, default_filter: &str) {
    let Some(log_dir) = log_dir else {
        eprintln!("Warning: no log directory available, logging disabled");
        return;
    };
    if let Err(e) = std::fs::create_dir_all(log_dir) {
        eprintln!(
            "Warning: Could not initialize file logging in {}: {}",
            log_dir.display(),
            e
        );
        return;
    }

    let filter = resolve_filter(std::env::var("RUST_LOG").ok().as_deref(), default_filter);
    let file_appender = tracing_appender::rolling::daily(log_dir, LOG_FILE);
    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true);

    let _ = tracing_subscriber::registry()
        .with(file_layer)
        .with(filter)
        .try_init();
}

/// `RUST_LOG` when set and valid, else the configured directives, else
/// `info`.
fn resolve_filter(env: Option<&str>, default_filter: &str) -> EnvFilter {
    env.and_then(|directives| EnvFilter::try_new(directives).ok())
        .or_else(|| EnvFilter::try_new(default_filter).ok())
        .unwrap_or_else(|| EnvFilter::new(crate::config::DEFAULT_LOG_FILTER))
}
