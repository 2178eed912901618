//! numcpus - risu plugin reporting the number of CPUs
//!
//! numcpus provides:
//! - Live mode: the running host's logical CPU count
//! - Offline mode: `processor` entries in a snapshot's `/proc/cpuinfo`
//! - One diagnostic line on stderr and a framework-supplied exit code

use anyhow::Result;
use clap::Parser;

mod cli;
mod core;
mod logging;
mod plugin;

fn main() -> Result<()> {
    logging::init();

    let cli = cli::Cli::parse();
    let code = cli::run(cli)?;
    std::process::exit(code)
}
