//! Table of contents rendering.
//!
//! Generates the human-readable TOC page: one heading per section followed by
//! its numbered articles. This complements the NCX navigation map, which the
//! reader uses for its own navigation UI.

use super::pages::{article_file, xhtml};
use crate::markup::{Markup, Text};
use crate::source::Issue;

pub const TOC_PAGE_NAME: &str = "toc.html";

/// Render the table of contents as XHTML.
pub fn render(issue: &Issue) -> String {
    let mut items = Vec::new();

    for section in &issue.sections {
        items.push(format!("<h2>{}</h2>", Text(&section.title)));
        for (i, article) in section.articles.iter().enumerate() {
            items.push(format!(
                r#"<div><big class="toc-index">{number}. </big><a class="toc-link" href="{href}">{title}</a> <small class="toc-domain">{section}</small></div>"#,
                number = i + 1,
                href = article_file(article),
                title = Text(&article.title),
                section = Text(&section.title),
            ));
        }
    }

    let body = Markup::trusted(format!(
        r#"<h1>TABLE OF CONTENTS</h1>
<div id="toc">
{}
</div>"#,
        items.join("\n")
    ));
    xhtml("Table of Contents", &body)
}
