use super::{base_name, new_id, read_dir_sorted, Article};
use crate::error::Result;
use crate::file_ordering::{sort_siblings, split_numeric_prefix, Ordered, Prefixed};
use log::debug;
use std::path::Path;

/// An ordered group of articles, loaded from one directory
#[derive(Debug, Clone)]
pub struct Section {
    pub id: String,
    pub sort_index: Option<u64>,
    pub title: String,
    pub articles: Vec<Article>,
}

impl Section {
    /// Load every article file directly inside `dir`.
    ///
    /// A child is an article if it is a regular file whose name has a
    /// non-empty stem before a `.`; dotfiles, extension-less names and
    /// subdirectories are skipped.
    pub fn load(dir: &Path) -> Result<Section> {
        let Prefixed { sort_index, title } = split_numeric_prefix(&base_name(dir));

        let mut articles = Vec::new();
        for path in read_dir_sorted(dir)? {
            let name = base_name(&path);
            if !matches!(name.find('.'), Some(dot) if dot >= 1) || !path.is_file() {
                debug!("Skipping {}", path.display());
                continue;
            }
            articles.push(Article::load(&path)?);
        }
        sort_siblings(&mut articles);

        Ok(Section {
            id: new_id(),
            sort_index,
            title,
            articles,
        })
    }
}

impl Ordered for Section {
    fn sort_index(&self) -> Option<u64> {
        self.sort_index
    }

    fn title(&self) -> &str {
        &self.title
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn section_dir(name: &str, files: &[&str]) -> (tempfile::TempDir, std::path::PathBuf) {
        let root = tempfile::tempdir().expect("can create temp dir");
        let dir = root.path().join(name);
        std::fs::create_dir(&dir).expect("can create section dir");
        for file in files {
            std::fs::write(dir.join(file), "content").expect("can write article");
        }
        (root, dir)
    }

    fn titles(section: &Section) -> Vec<&str> {
        section.articles.iter().map(|a| a.title.as_str()).collect()
    }

    #[test]
    fn directory_name_sets_title_and_index() {
        let (_root, dir) = section_dir("07 World News", &[]);
        let section = Section::load(&dir).expect("can load section");
        assert_eq!(section.title, "World News");
        assert_eq!(section.sort_index, Some(7));
        assert!(section.articles.is_empty());
    }

    #[test]
    fn numbered_articles_sort_numerically() {
        let (_root, dir) = section_dir("News", &["10 Ten.txt", "9 Nine.txt", "100 Hundred.txt"]);
        let section = Section::load(&dir).expect("can load section");
        assert_eq!(titles(&section), vec!["Nine", "Ten", "Hundred"]);
    }

    #[test]
    fn mixed_articles_sort_by_title() {
        let (_root, dir) = section_dir("News", &["2 Zulu.txt", "Alpha.txt", "1 Mike.html"]);
        let section = Section::load(&dir).expect("can load section");
        assert_eq!(titles(&section), vec!["Alpha", "Mike", "Zulu"]);
    }

    #[test]
    fn non_article_entries_are_skipped() {
        let (_root, dir) = section_dir("News", &[".hidden.txt", "README", "Story.txt"]);
        std::fs::create_dir(dir.join("nested.d")).expect("can create nested dir");
        let section = Section::load(&dir).expect("can load section");
        assert_eq!(titles(&section), vec!["Story"]);
    }

    #[test]
    fn unsupported_article_fails_the_section() {
        let (_root, dir) = section_dir("News", &["Story.txt", "Report.docx"]);
        assert!(matches!(
            Section::load(&dir),
            Err(Error::UnsupportedFormat { .. })
        ));
    }
}
