//! Plugin errors
//!
//! The `Display` text of each variant is the exact diagnostic line the
//! framework receives.

use std::path::PathBuf;
use thiserror::Error;

use crate::core::model::{Outcome, ResultCode};

#[derive(Debug, Error)]
pub enum PluginError {
    #[error("Undefined RISU_LIVE status")]
    UndefinedMode,

    #[error("Failure to open required file {}", path.display())]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failure to read required file {}", path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PluginError {
    /// Result kind reported for this error
    pub fn result_code(&self) -> ResultCode {
        match self {
            PluginError::UndefinedMode => ResultCode::Failed,
            PluginError::OpenFailed { .. } | PluginError::ReadFailed { .. } => ResultCode::Skipped,
        }
    }
}

impl From<PluginError> for Outcome {
    fn from(err: PluginError) -> Self {
        Outcome::new(err.result_code(), err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_undefined_mode_message() {
        let err = PluginError::UndefinedMode;
        assert_eq!(err.to_string(), "Undefined RISU_LIVE status");
        assert_eq!(err.result_code(), ResultCode::Failed);
    }

    #[test]
    fn test_open_failed_includes_path() {
        let err = PluginError::OpenFailed {
            path: PathBuf::from("/missing/proc/cpuinfo"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        let outcome = Outcome::from(err);
        assert_eq!(outcome.code, ResultCode::Skipped);
        assert_eq!(
            outcome.message,
            "Failure to open required file /missing/proc/cpuinfo"
        );
    }
}
