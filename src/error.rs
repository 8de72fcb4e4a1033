//! Errors raised while loading a book repository or compiling it.
//!
//! Load-time errors (manifest problems, unsupported article formats, IO) mean
//! the input is bad. Compiler errors mean the toolchain is broken. The two
//! families map to different exit codes so operators can tell them apart.

use std::path::PathBuf;
use std::process::ExitStatus;
use std::time::Duration;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unsupported format `{format}` for `{}`", path.display())]
    UnsupportedFormat { path: PathBuf, format: String },

    #[error("Not a book repository: `{}` not found", .0.display())]
    ManifestMissing(PathBuf),

    #[error("Invalid manifest `{}`: {reason}", path.display())]
    ManifestInvalid { path: PathBuf, reason: String },

    #[error("Asset `{}` referenced by the manifest does not exist", .0.display())]
    MissingAsset(PathBuf),

    #[error("Compiler failed ({status}):\n{log}")]
    CompilerFailed { status: String, log: String },

    #[error("Compiler did not finish within {}s", .0.as_secs())]
    CompilerTimeout(Duration),

    #[error("Failed to access `{}`", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn io<P: Into<PathBuf>>(path: P) -> impl FnOnce(std::io::Error) -> Error {
        let path = path.into();
        move |source| Error::Io { path, source }
    }

    pub(crate) fn compiler_failed(status: Option<ExitStatus>, log: String) -> Error {
        let status = match status {
            Some(status) => status.to_string(),
            None => "no output produced".to_string(),
        };
        Error::CompilerFailed { status, log }
    }

    /// Whether the error comes from the external toolchain rather than the input.
    pub fn is_toolchain(&self) -> bool {
        matches!(
            self,
            Error::CompilerFailed { .. } | Error::CompilerTimeout(_)
        )
    }
}
