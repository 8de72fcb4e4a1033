use super::{base_name, new_id, Format, Normalized};
use crate::error::{Error, Result};
use crate::file_ordering::{split_numeric_prefix, Ordered, Prefixed};
use crate::markup::Markup;
use log::debug;
use std::path::Path;

/// Maximum length of an article description, in characters.
pub const DESCRIPTION_LIMIT: usize = 200;

/// One content item of the book, loaded from a single file
#[derive(Debug, Clone)]
pub struct Article {
    pub id: String,
    pub sort_index: Option<u64>,
    pub title: String,
    /// Falls back to the issue's author at render time
    pub author: Option<String>,
    /// Plain-text teaser shown by the reader's navigation UI
    pub description: String,
    pub body: Markup,
    pub format: Format,
}

impl Article {
    /// Load an article from a file named `[<digits> ]<title>.<ext>`.
    ///
    /// The extension decides the format; anything other than html, htm or txt
    /// is an error and aborts the build.
    pub fn load(path: &Path) -> Result<Article> {
        let file_name = base_name(path);
        let (stem, extension) = match file_name.rfind('.') {
            Some(dot) => (&file_name[..dot], &file_name[dot + 1..]),
            None => (file_name.as_str(), ""),
        };

        let tag = extension.to_uppercase();
        let format = Format::from_tag(&tag).ok_or_else(|| Error::UnsupportedFormat {
            path: path.to_path_buf(),
            format: tag.clone(),
        })?;

        let bytes = std::fs::read(path).map_err(Error::io(path))?;
        let Normalized { body, summary } = format.normalize(&bytes);
        let Prefixed { sort_index, title } = split_numeric_prefix(stem);
        debug!("Loaded article `{title}` ({tag}) from {}", path.display());

        Ok(Article {
            id: new_id(),
            sort_index,
            title,
            author: None,
            description: summarise(summary.as_deref().unwrap_or_default()),
            body,
            format,
        })
    }
}

impl Ordered for Article {
    fn sort_index(&self) -> Option<u64> {
        self.sort_index
    }

    fn title(&self) -> &str {
        &self.title
    }
}

/// Collapse a summary onto one line and cap it at [`DESCRIPTION_LIMIT`] characters.
fn summarise(text: &str) -> String {
    text.chars()
        .filter(|c| *c != '\n' && *c != '\r')
        .take(DESCRIPTION_LIMIT)
        .collect()
}
