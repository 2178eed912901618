//! Result model
//!
//! Every run of the plugin ends in exactly one `Outcome`, which the binary
//! maps to the caller-supplied exit code at the very end.

use serde::Serialize;
use std::fmt;

/// The four result kinds understood by the invoking framework
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultCode {
    /// Check passed. Never produced by this plugin, but part of the contract.
    #[allow(dead_code)]
    Okay,
    Skipped,
    Info,
    Failed,
}

impl fmt::Display for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResultCode::Okay => "okay",
            ResultCode::Skipped => "skipped",
            ResultCode::Info => "info",
            ResultCode::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Integer values the framework assigned to each `ResultCode`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ResultCodes {
    pub okay: i32,
    pub skipped: i32,
    pub info: i32,
    pub failed: i32,
}

impl ResultCodes {
    /// Exit code for a result kind
    pub fn exit_code(&self, code: ResultCode) -> i32 {
        match code {
            ResultCode::Okay => self.okay,
            ResultCode::Skipped => self.skipped,
            ResultCode::Info => self.info,
            ResultCode::Failed => self.failed,
        }
    }
}

/// The single result of one invocation: a result kind plus one line of text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub code: ResultCode,
    pub message: String,
}

impl Outcome {
    /// Informational outcome carrying a count
    pub fn info(count: usize) -> Self {
        Self {
            code: ResultCode::Info,
            message: count.to_string(),
        }
    }

    pub fn new(code: ResultCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}
