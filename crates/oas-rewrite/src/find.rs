//! Locating URL-bearing values in a plain (untyped) document.

use serde_json::Value;

use crate::uri::{classify, UriKind};

/// Keys whose string values are URL references (case-sensitive).
pub const URL_KEYS: &[&str] = &[
    "$ref",
    "url",
    "externalValue",
    "authorizationUrl",
    "tokenUrl",
    "refreshUrl",
    "openIdConnectUrl",
    "termsOfService",
];

/// One step of a document path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// An object member name.
    Key(String),
    /// An array index.
    Index(usize),
}

impl From<&str> for Segment {
    fn from(key: &str) -> Self {
        Segment::Key(key.to_owned())
    }
}

impl From<usize> for Segment {
    fn from(index: usize) -> Self {
        Segment::Index(index)
    }
}

/// A URL found at a recognized key.
///
/// `path` leads from the document root to the value and ends with the
/// URL-bearing key itself.
#[derive(Debug, Clone, PartialEq)]
pub struct FoundUrl {
    /// Segments from the root to the value, ending with `key`.
    pub path: Vec<Segment>,
    /// The URL-bearing key.
    pub key: String,
    /// The string found there.
    pub value: String,
}

/// Find relative references: plain relatives, root-relative paths, and
/// scheme-relative URLs. With `refs_only`, only `$ref` keys are considered.
///
/// Non-string, empty, and whitespace-only values are skipped, as are
/// fragment-only and absolute references.
pub fn find_relative_urls(document: &Value, refs_only: bool) -> Vec<FoundUrl> {
    find_urls(document, refs_only, |kind| {
        matches!(
            kind,
            UriKind::RelativePath | UriKind::AbsolutePosixPath | UriKind::SchemeRelative
        )
    })
}

/// Find absolute `http://` / `https://` URLs. Other schemes (`file:`,
/// `ftp:`, `mailto:`, `data:`) and scheme-relative URLs are excluded. With
/// `refs_only`, only `$ref` keys are considered.
pub fn find_absolute_http_urls(document: &Value, refs_only: bool) -> Vec<FoundUrl> {
    find_urls(document, refs_only, |kind| kind == UriKind::AbsoluteHttp)
}

/// Whether a key's string value should be treated as a URL reference.
pub(crate) fn is_url_key(key: &str, refs_only: bool) -> bool {
    if refs_only {
        key == "$ref"
    } else {
        URL_KEYS.contains(&key)
    }
}

fn find_urls(
    document: &Value,
    refs_only: bool,
    wanted: impl Fn(UriKind) -> bool,
) -> Vec<FoundUrl> {
    let mut found = Vec::new();
    let mut path = Vec::new();
    walk(document, refs_only, &wanted, &mut path, &mut found);
    found
}

fn walk(
    value: &Value,
    refs_only: bool,
    wanted: &impl Fn(UriKind) -> bool,
    path: &mut Vec<Segment>,
    found: &mut Vec<FoundUrl>,
) {
    match value {
        Value::Object(entries) => {
            for (key, child) in entries {
                if let Value::String(text) = child {
                    if is_url_key(key, refs_only) && classify(text).is_some_and(wanted) {
                        let mut url_path = path.clone();
                        url_path.push(Segment::Key(key.clone()));

                        found.push(FoundUrl {
                            path: url_path,
                            key: key.clone(),
                            value: text.clone(),
                        });
                    }
                    continue;
                }

                path.push(Segment::Key(key.clone()));
                walk(child, refs_only, wanted, path, found);
                path.pop();
            }
        }

        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                path.push(Segment::Index(index));
                walk(item, refs_only, wanted, path, found);
                path.pop();
            }
        }

        _ => {}
    }
}
