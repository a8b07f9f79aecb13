//! Descriptor file parsing.
//!
//! Descriptors are line-oriented `KEY = value` files, one per app or
//! library, consumed by the userspace makefiles through this tool. The
//! first occurrence of a key wins; the value is everything after the first
//! `=`, trimmed, so values may themselves contain `=`.

mod app;
mod library;

pub use app::AppDescriptor;
pub use library::LibraryDescriptor;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::UserbuildError;

/// A descriptor file split into trimmed lines.
#[derive(Debug)]
pub struct DescriptorFile {
    path: PathBuf,
    lines: Vec<String>,
}

impl DescriptorFile {
    /// Read and split a descriptor file.
    pub fn load(path: &Path) -> Result<Self, UserbuildError> {
        let content = fs::read_to_string(path).map_err(|source| UserbuildError::FileRead {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Self::from_content(path, &content))
    }

    fn from_content(path: &Path, content: &str) -> Self {
        Self {
            path: path.to_path_buf(),
            lines: content.lines().map(|l| l.trim().to_string()).collect(),
        }
    }

    /// First value declared for `key`, or None when the key never appears.
    pub fn value_of(&self, key: &str) -> Option<String> {
        self.lines.iter().find_map(|line| {
            let (k, v) = line.split_once('=')?;
            if k.trim() == key {
                Some(v.trim().to_string())
            } else {
                None
            }
        })
    }

    /// Value for a key that must be present. Present-but-empty is valid.
    pub fn required(
        &self,
        key: &str,
        no_spaces: bool,
        allow_quotes: bool,
    ) -> Result<String, UserbuildError> {
        match self.value_of(key) {
            Some(value) => {
                check_value(key, &value, no_spaces, allow_quotes)?;
                Ok(value)
            }
            None => Err(UserbuildError::MissingRequiredField {
                key: key.to_string(),
                path: self.path.display().to_string(),
            }),
        }
    }

    /// Value for an optional key, falling back to `default` when absent.
    pub fn optional(
        &self,
        key: &str,
        default: &str,
        no_spaces: bool,
        allow_quotes: bool,
    ) -> Result<String, UserbuildError> {
        match self.value_of(key) {
            Some(value) => {
                check_value(key, &value, no_spaces, allow_quotes)?;
                Ok(value)
            }
            None => Ok(default.to_string()),
        }
    }

    /// Comma-separated list with all spaces removed. Absent or empty keys
    /// yield an empty list, never `[""]`. Quotes are rejected before
    /// splitting.
    pub fn list(&self, key: &str) -> Result<Vec<String>, UserbuildError> {
        let value = match self.value_of(key) {
            Some(v) => v,
            None => return Ok(Vec::new()),
        };
        check_value(key, &value, false, false)?;

        let value = value.replace(' ', "");
        if value.is_empty() {
            return Ok(Vec::new());
        }
        Ok(value.split(',').map(str::to_string).collect())
    }

    /// True when a marker key appears, bare or as a `KEY = ...` line.
    pub fn has_marker(&self, key: &str) -> bool {
        self.lines.iter().any(|line| {
            line.as_str() == key
                || line
                    .split_once('=')
                    .is_some_and(|(k, _)| k.trim() == key)
        })
    }
}

fn check_value(
    key: &str,
    value: &str,
    no_spaces: bool,
    allow_quotes: bool,
) -> Result<(), UserbuildError> {
    if no_spaces && value.contains(' ') {
        return Err(UserbuildError::InvalidFieldValue {
            key: key.to_string(),
            reason: "spaces are not allowed".to_string(),
        });
    }
    if !allow_quotes && value.contains('"') {
        return Err(UserbuildError::InvalidFieldValue {
            key: key.to_string(),
            reason: "quotes are not allowed".to_string(),
        });
    }
    Ok(())
}

/// Check that a version is exactly three dot-separated numeric components.
pub fn validate_version(key: &str, version: &str) -> Result<(), UserbuildError> {
    let parts: Vec<&str> = version.split('.').collect();
    if parts.len() != 3 {
        return Err(UserbuildError::InvalidFieldValue {
            key: key.to_string(),
            reason: format!("'{version}' must have the format X.X.X"),
        });
    }
    if parts
        .iter()
        .any(|p| p.is_empty() || !p.bytes().all(|b| b.is_ascii_digit()))
    {
        return Err(UserbuildError::InvalidFieldValue {
            key: key.to_string(),
            reason: format!("all components of '{version}' must be numbers"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(content: &str) -> DescriptorFile {
        DescriptorFile::from_content(Path::new("test.conf"), content)
    }

    #[test]
    fn value_of_trims_key_and_value() {
        let f = file("NAME =  hello  \n");
        assert_eq!(f.value_of("NAME").as_deref(), Some("hello"));
    }

    #[test]
    fn first_match_wins() {
        let f = file("NAME = first\nNAME = second\n");
        assert_eq!(f.value_of("NAME").as_deref(), Some("first"));
    }

    #[test]
    fn value_splits_only_once() {
        let f = file("CFLAGS = -DVALUE=1\n");
        assert_eq!(f.value_of("CFLAGS").as_deref(), Some("-DVALUE=1"));
    }

    #[test]
    fn key_match_is_exact() {
        let f = file("DEPENDS_ON_PRIV = priv\nDEPENDS_ON = pub\n");
        assert_eq!(f.value_of("DEPENDS_ON").as_deref(), Some("pub"));
        assert_eq!(f.value_of("DEPENDS_ON_PRIV").as_deref(), Some("priv"));
    }

    #[test]
    fn required_missing_key_fails() {
        let f = file("VERSION = 1.0.0\n");
        let err = f.required("NAME", true, false).unwrap_err();
        assert!(matches!(err, UserbuildError::MissingRequiredField { .. }));
    }

    #[test]
    fn required_present_but_empty_is_valid() {
        let f = file("NAME =\n");
        assert_eq!(f.required("NAME", true, false).unwrap(), "");
    }

    #[test]
    fn optional_uses_default_only_when_absent() {
        let f = file("CFLAGS =\n");
        assert_eq!(f.optional("CFLAGS", "-O2", false, false).unwrap(), "");
        assert_eq!(f.optional("LDFLAGS", "-lm", false, false).unwrap(), "-lm");
    }

    #[test]
    fn spaces_rejected_when_forbidden() {
        let f = file("NAME = two words\n");
        let err = f.required("NAME", true, false).unwrap_err();
        assert!(matches!(err, UserbuildError::InvalidFieldValue { .. }));
    }

    #[test]
    fn quotes_rejected_unless_allowed() {
        let f = file("NAME = \"quoted\"\nDESCRIPTION = \"fine\"\n");
        let err = f.required("NAME", false, false).unwrap_err();
        assert!(matches!(err, UserbuildError::InvalidFieldValue { .. }));
        assert_eq!(
            f.optional("DESCRIPTION", "", false, true).unwrap(),
            "\"fine\""
        );
    }

    #[test]
    fn list_removes_spaces_and_splits() {
        let f = file("DEPENDS = a, b,c\n");
        assert_eq!(f.list("DEPENDS").unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn list_empty_value_yields_empty_vec() {
        let f = file("DEPENDS =\n");
        assert!(f.list("DEPENDS").unwrap().is_empty());
        assert!(f.list("SYMLINKS").unwrap().is_empty());
    }

    #[test]
    fn list_rejects_quoted_values() {
        let f = file("DEPENDS_ON_PRIV = \"zlib\"\n");
        let err = f.list("DEPENDS_ON_PRIV").unwrap_err();
        assert!(matches!(err, UserbuildError::InvalidFieldValue { .. }));
    }

    #[test]
    fn marker_matches_bare_line_or_declaration() {
        assert!(file("NO_SHARED\n").has_marker("NO_SHARED"));
        assert!(file("NO_SHARED = 1\n").has_marker("NO_SHARED"));
        assert!(!file("NO_SHARED_EXTRA = 1\n").has_marker("NO_SHARED"));
        assert!(!file("NAME = x\n").has_marker("NO_SHARED"));
    }

    #[test]
    fn version_shape_enforced() {
        assert!(validate_version("VERSION", "2.4.1").is_ok());
        assert!(validate_version("VERSION", "0.0.0").is_ok());
        for bad in ["1.0", "1.0.a", "1.0.0.0", "1..0", "", "a.b.c"] {
            let err = validate_version("VERSION", bad).unwrap_err();
            assert!(
                matches!(err, UserbuildError::InvalidFieldValue { .. }),
                "expected InvalidFieldValue for {bad:?}"
            );
        }
    }
}
