//! Periodical rendering orchestration.
//!
//! Writes every document of the package into a scratch directory, copies the
//! cover and masthead images next to them, runs the compiler and copies its
//! output to the destination. Each section and article becomes its own XHTML
//! document, named after its identifier so the manifest, spine, NCX and TOC
//! page can cross-reference it.

mod ncx;
mod opf;
mod pages;
mod toc;

use super::compiler::{self, MANIFEST_NAME};
use super::config::{Mobi, RenderStats};
use super::styles::{STYLESHEET, STYLESHEET_NAME};
use crate::error::{Error, Result};
use crate::source::Issue;
use indicatif::ProgressBar;
use log::{debug, info};
use std::path::Path;

impl Mobi {
    /// Render the issue to a `.mobi` file.
    ///
    /// Nothing is written to `outfile` unless the compiler succeeds.
    pub fn render(&self, issue: &Issue, progress: &ProgressBar) -> Result<RenderStats> {
        let scratch = tempfile::Builder::new()
            .prefix("kig-")
            .tempdir()
            .map_err(Error::io(std::env::temp_dir()))?;
        debug!("Writing package to {}", scratch.path().display());

        let document_count = write_package(issue, scratch.path(), progress)?;

        progress.set_message("Compiling periodical...");
        let result = compiler::compile(&self.compiler, scratch.path(), self.timeout)?;

        std::fs::copy(&result, &self.outfile).map_err(Error::io(&self.outfile))?;
        progress.finish_with_message("Periodical generated");
        info!("Wrote {}", self.outfile.display());

        Ok(RenderStats {
            outfile: self.outfile.clone(),
            document_count,
        })
    }
}

/// Write the complete package into `dir`, returning the number of XHTML documents.
pub(crate) fn write_package(issue: &Issue, dir: &Path, progress: &ProgressBar) -> Result<usize> {
    let write = |name: &str, contents: &str| -> Result<()> {
        let path = dir.join(name);
        std::fs::write(&path, contents).map_err(Error::io(path))
    };

    progress.set_length(issue.article_count() as u64);
    progress.set_message("Generating pages...");

    write(pages::END_PAGE_NAME, &pages::render_end())?;
    write(STYLESHEET_NAME, STYLESHEET)?;
    write(MANIFEST_NAME, &opf::render(issue))?;
    write(ncx::NCX_NAME, &ncx::render(issue))?;
    write(toc::TOC_PAGE_NAME, &toc::render(issue))?;
    let mut document_count = 2;

    for section in &issue.sections {
        write(&pages::section_file(section), &pages::render_section(section))?;
        document_count += 1;

        for article in &section.articles {
            write(
                &pages::article_file(article),
                &pages::render_article(issue, section, article),
            )?;
            document_count += 1;
            progress.inc(1);
        }
    }

    let metadata = &issue.metadata;
    for asset in [&metadata.cover_filename, &metadata.logo_filename]
        .into_iter()
        .flatten()
    {
        copy_asset(&issue.root, asset, dir)?;
    }

    Ok(document_count)
}

/// Copy an image from the repository into the package at the same relative path.
fn copy_asset(root: &Path, asset: &Path, dir: &Path) -> Result<()> {
    let source = root.join(asset);
    if !source.is_file() {
        return Err(Error::MissingAsset(source));
    }

    let destination = dir.join(opf::asset_href(asset));
    if let Some(parent) = destination.parent() {
        std::fs::create_dir_all(parent).map_err(Error::io(parent))?;
    }
    std::fs::copy(&source, &destination).map_err(Error::io(&source))?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn test_issue() -> Issue {
    use crate::markup::Markup;
    use crate::source::{new_id, Article, Format, IssueMetadata, Section};
    use std::path::PathBuf;

    let article = |title: &str, description: &str| Article {
        id: new_id(),
        sort_index: None,
        title: title.to_string(),
        author: None,
        description: description.to_string(),
        body: Markup::trusted("<p>body</p>"),
        format: Format::Html,
    };

    Issue {
        metadata: IssueMetadata {
            title: "Weekly <News>".to_string(),
            author: "The Editors".to_string(),
            uid: "issue-1".to_string(),
            language: "en-us".to_string(),
            publisher: "Press & Co".to_string(),
            date: "2026-10-14".to_string(),
            description: String::new(),
            review: String::new(),
            logo_filename: None,
            cover_filename: None,
        },
        root: PathBuf::from("."),
        sections: vec![
            Section {
                id: new_id(),
                sort_index: Some(1),
                title: "Alpha".to_string(),
                articles: vec![article("First", "teaser"), article("Second", "")],
            },
            Section {
                id: new_id(),
                sort_index: Some(2),
                title: "Beta".to_string(),
                articles: vec![article("Third", "")],
            },
        ],
    }
}
