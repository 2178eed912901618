//! Execution context - the framework's environment signals, parsed once

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use crate::core::model::ResultCodes;

/// Location of the CPU listing inside a snapshot root
pub const CPUINFO_SUFFIX: &str = "/proc/cpuinfo";

/// How the plugin evaluates the system
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Query the running host
    Live,
    /// Analyze a captured snapshot under the root path
    Offline,
    /// Anything other than `1` or `0`, including unset; keeps the raw value
    Undefined(Option<String>),
}

impl Mode {
    /// `1` is live and `0` is offline; every other value is undefined
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::parse::<i64>) {
            Some(Ok(1)) => Mode::Live,
            Some(Ok(0)) => Mode::Offline,
            _ => Mode::Undefined(raw.map(str::to_string)),
        }
    }

    /// Like `parse`, but non-UTF-8 values are undefined rather than rejected
    pub fn from_os(raw: Option<&OsStr>) -> Self {
        match raw {
            None => Mode::parse(None),
            Some(value) => match value.to_str() {
                Some(text) => Mode::parse(Some(text)),
                None => Mode::Undefined(Some(value.to_string_lossy().into_owned())),
            },
        }
    }
}

/// Parse a result code, falling back to 0 when absent or malformed
pub fn parse_code(raw: Option<&str>) -> i32 {
    raw.and_then(|s| s.parse().ok()).unwrap_or(0)
}

/// Immutable inputs of a single run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionContext {
    pub codes: ResultCodes,
    pub mode: Mode,
    pub root: PathBuf,
}

impl ExecutionContext {
    pub fn new(codes: ResultCodes, mode: Mode, root: impl Into<PathBuf>) -> Self {
        Self {
            codes,
            mode,
            root: root.into(),
        }
    }

    /// `<root>/proc/cpuinfo`, joined textually so an empty root yields `/proc/cpuinfo`
    pub fn cpuinfo_path(&self) -> PathBuf {
        snapshot_path(&self.root, CPUINFO_SUFFIX)
    }
}

fn snapshot_path(root: &Path, suffix: &str) -> PathBuf {
    let mut path = OsString::from(root.as_os_str());
    path.push(suffix);
    PathBuf::from(path)
}
