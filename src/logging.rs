use std::sync::Once;
use tracing::level_filters::LevelFilter;
use tracing::{debug, info};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

static TEST_SETUP: Once = Once::new();

/// Maps repeated `-d` flags to a level. `RUST_LOG` wins when set.
pub fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        3 => LevelFilter::TRACE,
        _ => {
            eprintln!("Don't be crazy, max is -d -d -d");
            LevelFilter::TRACE
        }
    };
    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    install(env_filter, FmtSpan::NONE);
    debug!(?level, "logging initialised");
}

/// Installs a debug-level subscriber once per test binary.
pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        install(env_filter, FmtSpan::CLOSE);
        info!("Test Setup complete");
    });
}

fn install(env_filter: EnvFilter, span_events: FmtSpan) {
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
        return;
    }
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_span_events(span_events)
                .with_filter(env_filter),
        )
        .try_init()
        .unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
}
