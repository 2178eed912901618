//! Opt-in tracing output
//!
//! stderr carries the single diagnostic line the framework reads, so no
//! subscriber is installed unless `NUMCPUS_LOG` holds a filter directive.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "NUMCPUS_LOG";

pub fn init() {
    let Ok(filter) = EnvFilter::try_from_env(LOG_ENV) else {
        return;
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
