//! OPF package manifest.
//!
//! Lists the book metadata, every document in the package and the reading
//! order. kindlegen reads the `x-metadata` block to produce a periodical
//! rather than a plain book.

use super::ncx::NCX_NAME;
use super::pages::{article_file, section_file, END_PAGE_NAME};
use super::toc::TOC_PAGE_NAME;
use crate::markup::Text;
use crate::source::Issue;
use std::path::{Component, Path};

const XHTML: &str = "application/xhtml+xml";

pub fn render(issue: &Issue) -> String {
    let metadata = &issue.metadata;

    let mut manifest = vec![
        format!(r#"<item id="toc" media-type="application/x-dtbncx+xml" href="{NCX_NAME}"/>"#),
        format!(r#"<item id="toc-html" media-type="{XHTML}" href="{TOC_PAGE_NAME}"/>"#),
    ];
    let mut spine = vec![r#"<itemref idref="toc-html"/>"#.to_string()];

    let cover = metadata.cover_filename.as_deref().map(asset_href);
    if let (Some(href), Some(path)) = (&cover, &metadata.cover_filename) {
        manifest.push(format!(
            r#"<item id="cover" media-type="{mime}" href="{href}" properties="cover-image"/>"#,
            mime = mime_from_path(path),
            href = Text(href),
        ));
    }
    if let Some(path) = &metadata.logo_filename {
        manifest.push(format!(
            r#"<item id="masthead" media-type="{mime}" href="{href}"/>"#,
            mime = mime_from_path(path),
            href = Text(&asset_href(path)),
        ));
    }
    manifest.push(format!(
        r#"<item id="end" media-type="{XHTML}" href="{END_PAGE_NAME}"/>"#
    ));

    for section in &issue.sections {
        manifest.push(format!(
            r#"<item id="section-{id}" media-type="{XHTML}" href="{href}"/>"#,
            id = section.id,
            href = section_file(section),
        ));
        spine.push(format!(r#"<itemref idref="section-{}"/>"#, section.id));

        for article in &section.articles {
            manifest.push(format!(
                r#"<item id="item-{id}" media-type="{XHTML}" href="{href}"/>"#,
                id = article.id,
                href = article_file(article),
            ));
            spine.push(format!(r#"<itemref idref="item-{}"/>"#, article.id));
        }
    }
    spine.push(r#"<itemref idref="end"/>"#.to_string());

    let embedded_cover = match &cover {
        Some(href) => format!("\n            <EmbeddedCover>{}</EmbeddedCover>", Text(href)),
        None => String::new(),
    };

    format!(
        r#"<?xml version="1.0" encoding="UTF-8" ?>
<package xmlns="http://www.idpf.org/2007/opf" version="2.0" unique-identifier="uid">
    <metadata xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:opf="http://www.idpf.org/2007/opf">
        <dc:title>{title}</dc:title>
        <dc:language>{language}</dc:language>
        <dc:identifier id="uid">{uid}</dc:identifier>
        <dc:creator>{author}</dc:creator>
        <dc:publisher>{publisher}</dc:publisher>
        <dc:subject>NON-CLASSIFIABLE</dc:subject>
        <dc:date>{date}</dc:date>
        <dc:description>{description}</dc:description>
        <x-metadata>
            <output encoding="utf-8" content-type="application/x-mobipocket-subscription-magazine"></output>{embedded_cover}
            <Review>{review}</Review>
        </x-metadata>
    </metadata>
    <manifest>
        {manifest}
    </manifest>
    <spine toc="toc">
        {spine}
    </spine>
    <guide>
        <reference type="toc" title="Table of Contents" href="{TOC_PAGE_NAME}"/>
    </guide>
</package>
"#,
        title = Text(&metadata.title),
        language = Text(&metadata.language),
        uid = Text(&metadata.uid),
        author = Text(&metadata.author),
        publisher = Text(&metadata.publisher),
        date = Text(&metadata.date),
        description = Text(&metadata.description),
        review = Text(&metadata.review),
        manifest = manifest.join("\n        "),
        spine = spine.join("\n        "),
    )
}

/// The package-relative href of an asset, with `/` separators.
pub fn asset_href(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Determine MIME type from file extension.
fn mime_from_path(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .as_deref()
    {
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("bmp") => "image/bmp",
        Some("svg") => "image/svg+xml",
        // kindlegen only embeds JPEG covers, so that is the default
        _ => "image/jpeg",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::test_issue;
    use std::path::PathBuf;

    fn idrefs(opf: &str) -> Vec<String> {
        opf.split(r#"idref=""#)
            .skip(1)
            .map(|rest| rest[..rest.find('"').expect("attribute is closed")].to_string())
            .collect()
    }

    fn item_ids(opf: &str) -> Vec<String> {
        opf.split(r#"<item id=""#)
            .skip(1)
            .map(|rest| rest[..rest.find('"').expect("attribute is closed")].to_string())
            .collect()
    }

    #[test]
    fn spine_follows_reading_order() {
        let issue = test_issue();
        let opf = render(&issue);
        let alpha = &issue.sections[0];
        let beta = &issue.sections[1];
        let expected = vec![
            "toc-html".to_string(),
            format!("section-{}", alpha.id),
            format!("item-{}", alpha.articles[0].id),
            format!("item-{}", alpha.articles[1].id),
            format!("section-{}", beta.id),
            format!("item-{}", beta.articles[0].id),
            "end".to_string(),
        ];
        assert_eq!(idrefs(&opf), expected);
    }

    #[test]
    fn every_content_item_is_in_the_spine_once() {
        let opf = render(&test_issue());
        let spine = idrefs(&opf);
        for id in item_ids(&opf)
            .into_iter()
            .filter(|id| id.starts_with("section-") || id.starts_with("item-"))
        {
            assert_eq!(spine.iter().filter(|s| **s == id).count(), 1, "{id}");
        }
    }

    #[test]
    fn no_cover_without_cover_filename() {
        let opf = render(&test_issue());
        assert!(!opf.contains("<EmbeddedCover>"));
        assert!(!opf.contains(r#"id="cover""#));
    }

    #[test]
    fn cover_is_declared_twice_with_same_path() {
        let mut issue = test_issue();
        issue.metadata.cover_filename = Some(PathBuf::from("images/cover & back.jpg"));
        let opf = render(&issue);
        let escaped = "images/cover &amp; back.jpg";
        assert!(opf.contains(&format!("<EmbeddedCover>{escaped}</EmbeddedCover>")));
        assert!(opf.contains(&format!(
            r#"<item id="cover" media-type="image/jpeg" href="{escaped}" properties="cover-image"/>"#
        )));
    }

    #[test]
    fn logo_becomes_masthead_item() {
        let mut issue = test_issue();
        issue.metadata.logo_filename = Some(PathBuf::from("logo.gif"));
        let opf = render(&issue);
        assert!(opf.contains(r#"<item id="masthead" media-type="image/gif" href="logo.gif"/>"#));
        assert!(!idrefs(&opf).contains(&"masthead".to_string()));
    }

    #[test]
    fn metadata_is_escaped() {
        let opf = render(&test_issue());
        assert!(opf.contains("<dc:title>Weekly &lt;News&gt;</dc:title>"));
        assert!(opf.contains("<dc:publisher>Press &amp; Co</dc:publisher>"));
        assert!(opf.contains(r#"<dc:identifier id="uid">issue-1</dc:identifier>"#));
    }

    #[test]
    fn can_build_asset_hrefs() {
        assert_eq!(asset_href(Path::new("./images/cover.jpg")), "images/cover.jpg");
        assert_eq!(asset_href(Path::new("cover.jpg")), "cover.jpg");
    }
}
