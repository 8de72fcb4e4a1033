//! Escaping for generated XML/XHTML documents.
//!
//! Everything interpolated into a generated document is either free text or a
//! pre-formed markup fragment. Free text is wrapped in [`Text`] at the point of
//! interpolation and escaped when displayed; fragments are carried as
//! [`Markup`] and emitted verbatim. Keeping them as separate types means an
//! article body can't be double-escaped and a title can't slip through raw.

use std::fmt;

/// A markup fragment that is trusted to be well formed and written as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markup(String);

impl Markup {
    pub fn trusted<S: Into<String>>(fragment: S) -> Markup {
        Markup(fragment.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Free text, entity-escaped (`&`, `<`, `>`, `"`, `'`) when displayed.
///
/// The same escaping is safe in element content and in quoted attributes.
#[derive(Debug, Clone, Copy)]
pub struct Text<'a>(pub &'a str);

impl fmt::Display for Text<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&html_escape::encode_quoted_attribute(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_is_escaped() {
        let escaped = Text(r#"<a href="x">Tom & 'Jerry'</a>"#).to_string();
        assert!(!escaped.contains('<'));
        assert!(!escaped.contains('>'));
        assert!(!escaped.contains('"'));
        assert!(!escaped.contains('\''));
        assert!(escaped.contains("&amp;"));
        assert!(escaped.contains("&lt;a href="));
    }

    #[test]
    fn plain_text_is_unchanged() {
        assert_eq!(Text("Hello world 123").to_string(), "Hello world 123");
        assert_eq!(Text("中文标题").to_string(), "中文标题");
    }

    #[test]
    fn markup_is_verbatim() {
        let m = Markup::trusted("<p>Tom &amp; Jerry</p>");
        assert_eq!(m.to_string(), "<p>Tom &amp; Jerry</p>");
        assert_eq!(m.as_str(), "<p>Tom &amp; Jerry</p>");
    }
}
