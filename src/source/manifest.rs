//! The `issue.toml` manifest: book-level metadata written by the author.
//!
//! The manifest is a flat TOML document. Only the known fields are accepted;
//! unknown keys are rejected so a typo doesn't silently drop metadata.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

pub const MANIFEST_FILE: &str = "issue.toml";

/// Book-level metadata, populated once per build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IssueMetadata {
    pub title: String,
    pub author: String,
    pub uid: String,
    pub language: String,
    #[serde(default)]
    pub publisher: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub review: String,
    /// Masthead image, relative to the repository root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_filename: Option<PathBuf>,
    /// Cover image, relative to the repository root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_filename: Option<PathBuf>,
}

impl IssueMetadata {
    /// Read and validate `root/issue.toml`.
    pub fn load(root: &Path) -> Result<IssueMetadata> {
        let path = root.join(MANIFEST_FILE);
        if !path.is_file() {
            return Err(Error::ManifestMissing(path));
        }
        let contents = std::fs::read_to_string(&path).map_err(Error::io(&path))?;
        IssueMetadata::parse(&path, &contents)
    }

    /// Parse manifest contents; `path` is only used for error messages.
    pub fn parse(path: &Path, contents: &str) -> Result<IssueMetadata> {
        let metadata: IssueMetadata =
            toml::from_str(contents).map_err(|e| Error::ManifestInvalid {
                path: path.to_path_buf(),
                reason: e.to_string().trim().to_string(),
            })?;
        metadata.validate(path)?;
        Ok(metadata)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        let invalid = |reason: String| Error::ManifestInvalid {
            path: path.to_path_buf(),
            reason,
        };

        for (field, value) in [
            ("title", &self.title),
            ("author", &self.author),
            ("uid", &self.uid),
            ("language", &self.language),
        ] {
            if value.trim().is_empty() {
                return Err(invalid(format!("`{field}` must not be empty")));
            }
        }

        for (field, asset) in [
            ("logo_filename", &self.logo_filename),
            ("cover_filename", &self.cover_filename),
        ] {
            if let Some(asset) = asset {
                if !is_contained(asset) {
                    return Err(invalid(format!(
                        "`{field}` must be a relative path inside the repository, got `{}`",
                        asset.display()
                    )));
                }
            }
        }

        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::ManifestInvalid {
            path: PathBuf::from(MANIFEST_FILE),
            reason: e.to_string(),
        })
    }
}

/// Whether a path stays inside the directory it is resolved against.
fn is_contained(path: &Path) -> bool {
    path.components().all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
        && path.components().any(|c| matches!(c, Component::Normal(_)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
title = "Weekly"
author = "Editors"
uid = "abc123"
language = "en-us"
"#;

    fn parse(contents: &str) -> Result<IssueMetadata> {
        IssueMetadata::parse(Path::new(MANIFEST_FILE), contents)
    }

    #[test]
    fn can_parse_minimal_manifest() {
        let m = parse(MINIMAL).expect("can parse");
        assert_eq!(m.title, "Weekly");
        assert_eq!(m.language, "en-us");
        assert_eq!(m.publisher, "");
        assert_eq!(m.cover_filename, None);
    }

    #[test]
    fn can_parse_full_manifest() {
        let m = parse(
            r#"
title = "Weekly"
author = "Editors"
uid = "abc123"
language = "zh-cn"
publisher = "Press"
date = "2026-10-14"
description = """
Line one
Line two
"""
review = "Good"
logo_filename = "images/logo.gif"
cover_filename = "cover.jpg"
"#,
        )
        .expect("can parse");
        assert_eq!(m.description, "Line one\nLine two\n");
        assert_eq!(m.logo_filename, Some(PathBuf::from("images/logo.gif")));
        assert_eq!(m.cover_filename, Some(PathBuf::from("cover.jpg")));
    }

    #[test]
    fn missing_required_field_is_invalid() {
        let err = parse("title = \"Weekly\"\nauthor = \"Editors\"\nuid = \"x\"\n").unwrap_err();
        assert!(matches!(err, Error::ManifestInvalid { .. }));
        assert!(err.to_string().contains("language"));
    }

    #[test]
    fn empty_required_field_is_invalid() {
        let err = parse(&MINIMAL.replace("\"Editors\"", "\"  \"")).unwrap_err();
        assert!(err.to_string().contains("`author` must not be empty"));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = parse(&format!("{MINIMAL}\nsystem = \"rm -rf /\"\n")).unwrap_err();
        assert!(matches!(err, Error::ManifestInvalid { .. }));
    }

    #[test]
    fn escaping_asset_paths_are_rejected() {
        for asset in ["../cover.jpg", "/etc/cover.jpg", ""] {
            let err = parse(&format!("{MINIMAL}\ncover_filename = \"{asset}\"\n")).unwrap_err();
            assert!(
                matches!(err, Error::ManifestInvalid { .. }),
                "`{asset}` was accepted"
            );
        }
    }

    #[test]
    fn missing_manifest_is_reported() {
        let dir = tempfile::tempdir().expect("can create temp dir");
        assert!(matches!(
            IssueMetadata::load(dir.path()),
            Err(Error::ManifestMissing(_))
        ));
    }

    #[test]
    fn can_roundtrip_manifest() {
        let m = parse(MINIMAL).expect("can parse");
        let toml_str = m.to_toml().expect("can serialize");
        assert_eq!(parse(&toml_str).expect("can parse again"), m);
    }
}
