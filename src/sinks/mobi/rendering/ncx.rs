//! NCX navigation map in the Kindle periodical layout.
//!
//! The map has three levels: a root "periodical" node pointing at the TOC
//! page, one "section" node per section, and one "article" node per article
//! carrying `mbp:meta` author and description. Play order starts at 0 for the
//! root and increases by one per node, depth-first.

use super::pages::{article_file, section_file};
use super::toc::TOC_PAGE_NAME;
use crate::markup::Text;
use crate::source::Issue;

pub const NCX_NAME: &str = "toc.ncx";

/// Shown when an article has no description.
const NO_DESCRIPTION: &str = "...";

pub fn render(issue: &Issue) -> String {
    let mut play_order = 0usize;
    let mut nav_points = String::new();

    for section in &issue.sections {
        play_order += 1;
        nav_points.push_str(&format!(
            r#"
        <navPoint class="section" id="section-{id}" playOrder="{play_order}">
            <navLabel><text>{title}</text></navLabel>
            <content src="{src}" />"#,
            id = section.id,
            title = Text(&section.title),
            src = section_file(section),
        ));

        for article in &section.articles {
            play_order += 1;
            let description = if article.description.is_empty() {
                NO_DESCRIPTION
            } else {
                article.description.as_str()
            };
            nav_points.push_str(&format!(
                r#"
            <navPoint class="article" id="item-{id}" playOrder="{play_order}">
                <navLabel><text>{title}</text></navLabel>
                <content src="{src}" />
                <mbp:meta name="author">{author}</mbp:meta>
                <mbp:meta name="description">{description}</mbp:meta>
            </navPoint>"#,
                id = article.id,
                title = Text(&article.title),
                src = article_file(article),
                author = Text(issue.article_author(article)),
                description = Text(description),
            ));
        }

        nav_points.push_str("\n        </navPoint>");
    }

    let metadata = &issue.metadata;
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE ncx PUBLIC "-//NISO//DTD ncx 2005-1//EN" "http://www.daisy.org/z3986/2005/ncx-2005-1.dtd">
<ncx xmlns="http://www.daisy.org/z3986/2005/ncx/" xmlns:mbp="http://mobipocket.com/ns/mbp" version="2005-1" xml:lang="{language}">
    <head>
        <meta name="dtb:uid" content="{uid}"/>
        <meta name="dtb:depth" content="3"/>
        <meta name="dtb:totalPageCount" content="0"/>
        <meta name="dtb:maxPageNumber" content="0"/>
    </head>
    <docTitle><text>{title}</text></docTitle>
    <docAuthor><text>{author}</text></docAuthor>
    <navMap>
        <navPoint class="periodical" id="periodical" playOrder="0">
        <navLabel><text>Table of Contents</text></navLabel>
        <content src="{TOC_PAGE_NAME}" />{nav_points}
        </navPoint>
    </navMap>
</ncx>
"#,
        language = Text(&metadata.language),
        uid = Text(&metadata.uid),
        title = Text(&metadata.title),
        author = Text(&metadata.author),
    )
}
