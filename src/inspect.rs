//! Dry run: load a book repository and print its structure without compiling.

use crate::cli::InspectArgs;
use crate::source::{Format, Issue};
use anyhow::{Context, Result};
use serde::Serialize;

#[derive(Serialize)]
struct IssueSummary<'a> {
    title: &'a str,
    author: &'a str,
    sections: Vec<SectionSummary<'a>>,
}

#[derive(Serialize)]
struct SectionSummary<'a> {
    title: &'a str,
    sort_index: Option<u64>,
    articles: Vec<ArticleSummary<'a>>,
}

#[derive(Serialize)]
struct ArticleSummary<'a> {
    title: &'a str,
    sort_index: Option<u64>,
    format: Format,
    author: &'a str,
    description: &'a str,
}

impl<'a> IssueSummary<'a> {
    fn new(issue: &'a Issue) -> IssueSummary<'a> {
        IssueSummary {
            title: &issue.metadata.title,
            author: &issue.metadata.author,
            sections: issue
                .sections
                .iter()
                .map(|section| SectionSummary {
                    title: &section.title,
                    sort_index: section.sort_index,
                    articles: section
                        .articles
                        .iter()
                        .map(|article| ArticleSummary {
                            title: &article.title,
                            sort_index: article.sort_index,
                            format: article.format,
                            author: issue.article_author(article),
                            description: &article.description,
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

pub fn run(args: &InspectArgs) -> Result<()> {
    let issue = Issue::load(&args.repository).with_context(|| {
        format!(
            "Failed to load book repository {}",
            args.repository.display()
        )
    })?;

    if args.json {
        let json = serde_json::to_string_pretty(&IssueSummary::new(&issue))
            .with_context(|| "Failed to serialize book structure")?;
        println!("{json}");
        return Ok(());
    }

    print!("{}", render_tree(&issue));
    Ok(())
}

fn render_tree(issue: &Issue) -> String {
    let mut out = format!(
        "{} by {} ({} sections, {} articles)\n",
        issue.metadata.title,
        issue.metadata.author,
        issue.sections.len(),
        issue.article_count()
    );
    for (i, section) in issue.sections.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, section.title));
        for (j, article) in section.articles.iter().enumerate() {
            out.push_str(&format!(
                "   {}. {} [{}]\n",
                j + 1,
                article.title,
                article.format.tag()
            ));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn repository() -> tempfile::TempDir {
        let root = tempfile::tempdir().expect("can create temp dir");
        fs::write(
            root.path().join("issue.toml"),
            "title = \"Weekly\"\nauthor = \"Editors\"\nuid = \"x\"\nlanguage = \"en\"\n",
        )
        .expect("can write manifest");
        for (section, article) in [("02 Beta", "Story.txt"), ("01 Alpha", "1 Page.html")] {
            fs::create_dir(root.path().join(section)).expect("can create section");
            fs::write(root.path().join(section).join(article), "text").expect("can write article");
        }
        root
    }

    #[test]
    fn tree_lists_reading_order() {
        let root = repository();
        let issue = Issue::load(root.path()).expect("can load");
        assert_eq!(
            render_tree(&issue),
            "Weekly by Editors (2 sections, 2 articles)\n\
             1. Alpha\n   1. Page [HTML]\n\
             2. Beta\n   1. Story [TXT]\n"
        );
    }

    #[test]
    fn summary_serializes_to_json() {
        let root = repository();
        let issue = Issue::load(root.path()).expect("can load");
        let json = serde_json::to_value(IssueSummary::new(&issue)).expect("can serialize");
        assert_eq!(json["sections"][0]["title"], "Alpha");
        assert_eq!(json["sections"][0]["sort_index"], 1);
        assert_eq!(json["sections"][1]["articles"][0]["format"], "TXT");
        assert_eq!(json["sections"][1]["articles"][0]["description"], "text");
    }
}
