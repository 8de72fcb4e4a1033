//! Kindle periodical generation.
//!
//! This module turns an `Issue` into a `.mobi` file. It writes a complete
//! Open eBook package into a scratch directory:
//! - `issue.opf` package manifest with metadata, manifest items and spine
//! - `toc.ncx` navigation map in the periodical section/article layout
//! - `toc.html` human-readable table of contents
//! - one placeholder page per section and one page per article
//! - a fixed end-of-book page and stylesheet
//!
//! The package is then handed to `kindlegen`, and the resulting file is
//! copied to the configured destination. The scratch directory is removed on
//! every exit path.

mod compiler;
mod config;
mod rendering;
mod styles;

pub use config::{Mobi, DEFAULT_COMPILER, DEFAULT_OUTFILE};
