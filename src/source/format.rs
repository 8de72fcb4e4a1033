//! Article payload formats and content normalisation.
//!
//! Article files come from anywhere, so their encoding is a guess. Decoding is
//! best-effort: strict UTF-8 first, then the Chinese legacy encodings that the
//! tool has historically been fed (GB18030, GBK, GB2312). If nothing decodes
//! cleanly the article is kept with empty content rather than aborting the
//! build.

use crate::markup::{Markup, Text};
use encoding_rs::Encoding;
use log::{debug, warn};
use serde::Serialize;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Encodings tried in order when decoding an article payload.
///
/// encoding_rs maps `gbk` and `gb2312` to the same GBK decoder, and GB18030
/// accepts everything GBK does, so in practice only the first two rungs ever
/// succeed. The later rungs never accept anything new.
const DECODE_LADDER: [&str; 4] = ["utf-8", "gb18030", "gbk", "gb2312"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Format {
    Html,
    Htm,
    Txt,
}

/// A payload ready to be dropped into a content page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub body: Markup,
    /// Plain-text version of the content, if the format can provide one.
    pub summary: Option<String>,
}

impl Format {
    /// Match an (already uppercased) extension tag.
    pub fn from_tag(tag: &str) -> Option<Format> {
        match tag {
            "HTML" => Some(Format::Html),
            "HTM" => Some(Format::Htm),
            "TXT" => Some(Format::Txt),
            _ => None,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Format::Html => "HTML",
            Format::Htm => "HTM",
            Format::Txt => "TXT",
        }
    }

    pub fn normalize(self, bytes: &[u8]) -> Normalized {
        let text = decode(bytes);
        match self {
            // HTML is passed through as-is; there is no plain-text extraction
            Format::Html | Format::Htm => Normalized {
                body: Markup::trusted(text),
                summary: None,
            },
            Format::Txt => Normalized {
                body: Markup::trusted(format!("<pre>{}</pre>", Text(&text))),
                summary: Some(text),
            },
        }
    }
}

/// Decode a payload of unknown encoding, falling back to the empty string.
pub fn decode(bytes: &[u8]) -> String {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

    for label in DECODE_LADDER {
        let Some(encoding) = Encoding::for_label(label.as_bytes()) else {
            continue;
        };
        if let Some(text) = encoding.decode_without_bom_handling_and_without_replacement(bytes) {
            if label != "utf-8" {
                debug!("Decoded payload as {}", encoding.name());
            }
            return text.into_owned();
        }
    }

    warn!(
        "Failed to decode {} bytes of article content, using empty content",
        bytes.len()
    );
    String::new()
}
