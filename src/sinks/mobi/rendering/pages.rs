//! XHTML content pages: article pages, section placeholders and the end page.

use crate::markup::{Markup, Text};
use crate::sinks::mobi::styles::STYLESHEET_NAME;
use crate::source::{Article, Issue, Section};

pub const END_PAGE_NAME: &str = "end.html";

pub fn section_file(section: &Section) -> String {
    format!("section-{}.html", section.id)
}

pub fn article_file(article: &Article) -> String {
    format!("item-{}.html", article.id)
}

/// Wrap a body fragment in the XHTML 1.1 page skeleton every page shares.
pub fn xhtml(title: &str, body: &Markup) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" ?>
<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.1//EN" "http://www.w3.org/TR/xhtml11/DTD/xhtml11.dtd">
<html xmlns="http://www.w3.org/1999/xhtml">
<head>
    <meta http-equiv="content-type" content="text/html; charset=utf-8" />
    <title>{title}</title>
    <link rel="stylesheet" href="{STYLESHEET_NAME}" type="text/css" />
</head>
<body>
{body}
</body>
</html>
"#,
        title = Text(title),
    )
}

pub fn render_end() -> String {
    let body = Markup::trusted(
        r#"<h1 class="centered">End of Book</h1>
<hr />
<p class="centered"><small>Thanks for reading<br />kig</small></p>"#,
    );
    xhtml("END", &body)
}

/// Sections have no content of their own yet, the page only anchors
/// the section in the spine.
pub fn render_section(section: &Section) -> String {
    xhtml(&section.title, &Markup::default())
}

pub fn render_article(issue: &Issue, section: &Section, article: &Article) -> String {
    let body = Markup::trusted(format!(
        r#"<h1 id="item-title" class="centered">{title}</h1>
<div id="item-feed-title" class="centered">
    {section}
    | {author}
</div>
<div id="content">{content}</div>"#,
        title = Text(&article.title),
        section = Text(&section.title),
        author = Text(issue.article_author(article)),
        content = article.body,
    ));
    xhtml(&article.title, &body)
}
