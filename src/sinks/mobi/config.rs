//! Periodical output configuration.

use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_OUTFILE: &str = "issue.mobi";
pub const DEFAULT_COMPILER: &str = "kindlegen";

/// Periodical output configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mobi {
    /// Output `.mobi` file path
    pub outfile: PathBuf,
    /// The `kindlegen` binary, looked up on `PATH` if not absolute
    pub compiler: PathBuf,
    /// Kill the compiler if it runs longer than this
    pub timeout: Option<Duration>,
}

impl Default for Mobi {
    fn default() -> Self {
        Self {
            outfile: PathBuf::from(DEFAULT_OUTFILE),
            compiler: PathBuf::from(DEFAULT_COMPILER),
            timeout: None,
        }
    }
}

/// Statistics from rendering a periodical, used for user feedback.
#[derive(Debug)]
pub struct RenderStats {
    /// Where the compiled periodical was written
    pub outfile: PathBuf,
    /// Number of XHTML documents in the package
    pub document_count: usize,
}
