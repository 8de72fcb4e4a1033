//! The fixed stylesheet shared by every generated page.
//!
//! Kindle strips long tags, so selectors are kept flat and never span more
//! than one element.

pub const STYLESHEET_NAME: &str = "issue.css";

pub const STYLESHEET: &str = r#"/* Supported css features: http://www.idpf.org/2007/ops/OPS_2.0_final_spec.html#Section3.0 */

.pagebreak { page-break-before: always; }
.centered { text-align: center; }
.bottom { vertical-align: text-bottom; }
.quiet { color: #888; }
.x-small { font-size: x-small; }

.toc-index { color: #666; }
a.toc-link { color: #000; }
.toc-domain { color: #999; }

#item-title { margin: 0 0 .2em; }
#item-feed-title { margin: .2em 0 1em; color: #777; font-size: x-small; }

p#discard-items-msg { padding: 0 2em; font-size: x-small; }

code { font-size: small; }
pre { white-space: pre-wrap; }
"#;
