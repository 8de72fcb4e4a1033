use super::{base_name, read_dir_sorted, Article, IssueMetadata, Section};
use crate::error::Result;
use crate::file_ordering::sort_siblings;
use log::{debug, info};
use std::path::{Path, PathBuf};

/// Shown when neither the article nor the issue names an author.
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";

/// Everything we need to know to compile a repository into a book
#[derive(Debug, Clone)]
pub struct Issue {
    pub metadata: IssueMetadata,
    /// The repository the issue was loaded from; asset paths resolve against it
    pub root: PathBuf,
    pub sections: Vec<Section>,
}

impl Issue {
    /// Load the manifest and every non-hidden subdirectory of `root` as a section.
    pub fn load(root: &Path) -> Result<Issue> {
        let metadata = IssueMetadata::load(root)?;

        let mut sections = Vec::new();
        for path in read_dir_sorted(root)? {
            if path.is_dir() && !base_name(&path).starts_with('.') {
                sections.push(Section::load(&path)?);
            } else {
                debug!("Skipping {}", path.display());
            }
        }
        sort_siblings(&mut sections);

        let issue = Issue {
            metadata,
            root: root.to_path_buf(),
            sections,
        };
        info!(
            "Loaded `{}`: {} sections, {} articles",
            issue.metadata.title,
            issue.sections.len(),
            issue.article_count()
        );
        Ok(issue)
    }

    pub fn article_count(&self) -> usize {
        self.sections.iter().map(|s| s.articles.len()).sum()
    }

    /// The author to credit for an article, falling back to the issue's author.
    pub fn article_author<'a>(&'a self, article: &'a Article) -> &'a str {
        article
            .author
            .as_deref()
            .filter(|a| !a.trim().is_empty())
            .or_else(|| Some(self.metadata.author.as_str()).filter(|a| !a.trim().is_empty()))
            .unwrap_or(UNKNOWN_AUTHOR)
    }
}
