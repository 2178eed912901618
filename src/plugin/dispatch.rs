//! Mode dispatch - decides between the live host query and the snapshot scan

use std::fs::File;
use std::path::Path;

use tracing::{debug, warn};

use crate::core::context::{ExecutionContext, Mode};
use crate::core::error::PluginError;
use crate::core::model::Outcome;
use crate::core::tokenizer::count_tokens;
use crate::plugin::host::CpuSource;

/// Token that marks one logical CPU in a cpuinfo listing
pub const PROCESSOR_TOKEN: &str = "processor";

/// Evaluate one invocation. Never retries and never falls back from
/// offline to live.
pub fn dispatch(ctx: &ExecutionContext, host: &dyn CpuSource) -> Outcome {
    let result = match &ctx.mode {
        Mode::Live => Ok(count_live(host)),
        Mode::Offline => count_offline(&ctx.cpuinfo_path()),
        Mode::Undefined(raw) => {
            warn!(raw = ?raw, "RISU_LIVE is neither 0 nor 1");
            Err(PluginError::UndefinedMode)
        }
    };

    match result {
        Ok(count) => Outcome::info(count),
        Err(err) => err.into(),
    }
}

fn count_live(host: &dyn CpuSource) -> usize {
    let cpus = host.logical_cpus();
    debug!(cpus, "queried host");
    cpus
}

/// Count `processor` tokens in a snapshot's cpuinfo file
pub fn count_offline(path: &Path) -> Result<usize, PluginError> {
    let file = File::open(path).map_err(|source| {
        warn!(path = %path.display(), error = %source, "cannot open snapshot file");
        PluginError::OpenFailed {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let table = count_tokens(file).map_err(|source| {
        warn!(path = %path.display(), error = %source, "cannot read snapshot file");
        PluginError::ReadFailed {
            path: path.to_path_buf(),
            source,
        }
    })?;

    debug!(
        path = %path.display(),
        tokens = table.total(),
        distinct = table.distinct(),
        "scanned snapshot file"
    );
    Ok(table.get(PROCESSOR_TOKEN))
}
