//! Invocation of the external `kindlegen` compiler.
//!
//! The compiler runs inside the scratch directory as
//! `kindlegen issue.opf -o result.mobi`. Its stdout and stderr are captured to
//! a log file next to the package so a failure can be reported with the
//! compiler's own diagnostics.

use crate::error::{Error, Result};
use log::{debug, info};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

pub const MANIFEST_NAME: &str = "issue.opf";
pub const RESULT_NAME: &str = "result.mobi";
const LOG_NAME: &str = "kindlegen.log";

/// Lines of compiler output included in a failure report.
const LOG_TAIL_LINES: usize = 20;
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Compile the package in `workdir` and return the path of the result.
///
/// A non-zero exit status, or a zero status without a result file, is a
/// `CompilerFailed` error.
pub fn compile(compiler: &Path, workdir: &Path, timeout: Option<Duration>) -> Result<PathBuf> {
    let log_path = workdir.join(LOG_NAME);
    let stdout = File::create(&log_path).map_err(Error::io(&log_path))?;
    let stderr = stdout.try_clone().map_err(Error::io(&log_path))?;
    let compiler = &resolve(compiler)?;

    info!(
        "Running {} {MANIFEST_NAME} -o {RESULT_NAME}",
        compiler.display()
    );
    let mut child = Command::new(compiler)
        .arg(MANIFEST_NAME)
        .arg("-o")
        .arg(RESULT_NAME)
        .current_dir(workdir)
        .stdin(Stdio::null())
        .stdout(stdout)
        .stderr(stderr)
        .spawn()
        .map_err(|e| Error::CompilerFailed {
            status: format!("could not start `{}`: {e}", compiler.display()),
            log: String::new(),
        })?;

    let status = match timeout {
        Some(timeout) => wait_with_timeout(&mut child, timeout, compiler)?,
        None => child.wait().map_err(Error::io(compiler))?,
    };

    let log = log_tail(&log_path);
    debug!("{} exited with {status}:\n{log}", compiler.display());
    if !status.success() {
        return Err(Error::compiler_failed(Some(status), log));
    }

    let result = workdir.join(RESULT_NAME);
    if !result.is_file() {
        return Err(Error::compiler_failed(None, log));
    }
    Ok(result)
}

/// Anchor a relative compiler path to the current directory, since the child
/// runs inside `workdir`. Bare names are left for `PATH` lookup.
fn resolve(compiler: &Path) -> Result<PathBuf> {
    if compiler.components().count() > 1 {
        std::path::absolute(compiler).map_err(Error::io(compiler))
    } else {
        Ok(compiler.to_path_buf())
    }
}

fn wait_with_timeout(child: &mut Child, timeout: Duration, compiler: &Path) -> Result<ExitStatus> {
    let started = Instant::now();
    loop {
        if let Some(status) = child.try_wait().map_err(Error::io(compiler))? {
            return Ok(status);
        }
        if started.elapsed() >= timeout {
            // the child may already have exited; either way it must be reaped
            let _ = child.kill();
            let _ = child.wait();
            return Err(Error::CompilerTimeout(timeout));
        }
        std::thread::sleep(POLL_INTERVAL);
    }
}

/// The last few lines of the compiler log, or nothing if it can't be read.
fn log_tail(path: &Path) -> String {
    let Ok(bytes) = std::fs::read(path) else {
        return String::new();
    };
    let contents = String::from_utf8_lossy(&bytes);
    let lines: Vec<&str> = contents.lines().collect();
    lines[lines.len().saturating_sub(LOG_TAIL_LINES)..].join("\n")
}
