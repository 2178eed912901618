//! CLI module - reads the framework's signals and reports one result

use anyhow::{Context, Result};
use clap::Parser;
use std::ffi::{OsStr, OsString};
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

use crate::core::context::{parse_code, ExecutionContext, Mode};
use crate::core::model::{Outcome, ResultCodes};
use crate::plugin::dispatch::dispatch;
use crate::plugin::host::HostCpus;
use crate::plugin::metadata;

/// numcpus - report the number of CPUs of a live host or a captured snapshot.
#[derive(Parser, Debug)]
#[command(name = "numcpus")]
#[command(
    author,
    version,
    about,
    long_about = r#"numcpus is a risu plugin. It takes no arguments in normal use:
every input comes from the environment set by the framework.

It writes exactly one line to stderr and exits with one of the
result codes it was given:
- RC_INFO with the CPU count
- RC_SKIPPED when <RISU_ROOT>/proc/cpuinfo cannot be opened
- RC_FAILED when RISU_LIVE is neither 0 nor 1

Examples:
    RC_INFO=40 RISU_LIVE=1 numcpus
    RC_INFO=40 RC_SKIPPED=30 RISU_LIVE=0 RISU_ROOT=/tmp/sosreport numcpus
"#
)]
pub struct Cli {
    /// Exit code for a passed check.
    #[arg(
        long,
        env = "RC_OKAY",
        value_name = "CODE",
        value_parser = clap::value_parser!(OsString)
    )]
    pub rc_okay: Option<OsString>,

    /// Exit code for a check that could not be evaluated.
    #[arg(
        long,
        env = "RC_SKIPPED",
        value_name = "CODE",
        value_parser = clap::value_parser!(OsString)
    )]
    pub rc_skipped: Option<OsString>,

    /// Exit code for an informational result.
    #[arg(
        long,
        env = "RC_INFO",
        value_name = "CODE",
        value_parser = clap::value_parser!(OsString)
    )]
    pub rc_info: Option<OsString>,

    /// Exit code for a failed check.
    #[arg(
        long,
        env = "RC_FAILED",
        value_name = "CODE",
        value_parser = clap::value_parser!(OsString)
    )]
    pub rc_failed: Option<OsString>,

    /// Snapshot root used in offline mode.
    #[arg(
        long,
        env = "RISU_ROOT",
        value_name = "ROOT",
        long_help = "Root of a captured snapshot. Offline mode reads <ROOT>/proc/cpuinfo;\n\
the path is joined textually, so an empty root reads /proc/cpuinfo."
    )]
    pub root: Option<PathBuf>,

    /// Evaluation mode: 1 live, 0 offline.
    #[arg(
        long,
        env = "RISU_LIVE",
        value_name = "0|1",
        value_parser = clap::value_parser!(OsString),
        long_help = "1 queries the running host, 0 analyzes the snapshot under the root.\n\
Any other value, including unset, is reported as a failure."
    )]
    pub live: Option<OsString>,

    /// Print the plugin metadata as JSON on stdout and exit.
    #[arg(long)]
    pub metadata: bool,
}

impl Cli {
    /// Build the run's context. Malformed codes become 0; a malformed mode
    /// is kept as undefined. Values are taken as raw OS strings so that
    /// non-UTF-8 input lands here instead of failing in clap.
    pub fn context(&self) -> ExecutionContext {
        let codes = ResultCodes {
            okay: parse_code(self.rc_okay.as_deref().and_then(OsStr::to_str)),
            skipped: parse_code(self.rc_skipped.as_deref().and_then(OsStr::to_str)),
            info: parse_code(self.rc_info.as_deref().and_then(OsStr::to_str)),
            failed: parse_code(self.rc_failed.as_deref().and_then(OsStr::to_str)),
        };

        ExecutionContext::new(
            codes,
            Mode::from_os(self.live.as_deref()),
            self.root.clone().unwrap_or_default(),
        )
    }
}

/// Write the outcome as a single diagnostic line
pub fn emit<W: Write>(outcome: &Outcome, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "{}", outcome.message)?;
    out.flush()
}

/// Run the CLI with parsed arguments, returning the process exit code
pub fn run(cli: Cli) -> Result<i32> {
    if cli.metadata {
        let json = metadata::to_json().context("failed to serialize plugin metadata")?;
        println!("{}", json);
        return Ok(0);
    }

    let ctx = cli.context();
    debug!(mode = ?ctx.mode, root = %ctx.root.display(), "starting check");

    let outcome = dispatch(&ctx, &HostCpus);
    let exit_code = ctx.codes.exit_code(outcome.code);
    debug!(code = %outcome.code, exit_code, "check finished");

    let stderr = std::io::stderr();
    emit(&outcome, &mut stderr.lock()).context("failed to write diagnostic")?;

    Ok(exit_code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::ResultCode;

    #[test]
    fn test_context_from_flags() {
        let cli = Cli::try_parse_from([
            "numcpus",
            "--rc-okay",
            "10",
            "--rc-failed",
            "20",
            "--rc-skipped",
            "30",
            "--rc-info",
            "40",
            "--live",
            "0",
            "--root",
            "/snap",
        ])
        .unwrap();

        let ctx = cli.context();
        assert_eq!(
            ctx.codes,
            ResultCodes {
                okay: 10,
                failed: 20,
                skipped: 30,
                info: 40,
            }
        );
        assert_eq!(ctx.mode, Mode::Offline);
        assert_eq!(ctx.cpuinfo_path(), PathBuf::from("/snap/proc/cpuinfo"));
    }

    #[test]
    fn test_malformed_codes_do_not_error() {
        let cli = Cli::try_parse_from(["numcpus", "--rc-info", "abc", "--live", "x"]).unwrap();
        let ctx = cli.context();
        assert_eq!(ctx.codes.info, 0);
        assert_eq!(ctx.mode, Mode::Undefined(Some("x".to_string())));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_values_do_not_error() {
        use std::os::unix::ffi::OsStringExt;

        let cli = Cli::try_parse_from([
            OsString::from("numcpus"),
            OsString::from("--rc-okay"),
            OsString::from_vec(vec![0xff]),
            OsString::from("--live"),
            OsString::from_vec(vec![0xff]),
        ])
        .unwrap();

        let ctx = cli.context();
        assert_eq!(ctx.codes.okay, 0);
        assert!(matches!(ctx.mode, Mode::Undefined(Some(_))));
    }

    #[test]
    fn test_emit_writes_one_line() {
        let mut buf = Vec::new();
        emit(&Outcome::new(ResultCode::Failed, "Undefined RISU_LIVE status"), &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Undefined RISU_LIVE status\n");
    }
}
