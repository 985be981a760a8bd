//! OpenAPI / Swagger version detection.
//!
//! A fast pre-scan that classifies input before any document building
//! happens. Text input is matched line-wise with version-validating
//! patterns (JSON text is parsed and treated as a mapping); mapping input
//! returns whatever string the `openapi`/`swagger` key carries, with
//! pattern validation applied only by the boolean predicates.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::yaml::{NodeId, YamlArena};

/// Specification versions this crate can classify.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecVersion {
    /// Swagger 2.0.
    V20,
    /// OpenAPI 3.0.x.
    V30,
    /// OpenAPI 3.1.x.
    V31,
    /// OpenAPI 3.2.x.
    V32,
}

impl fmt::Display for SpecVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SpecVersion::V20 => "2.0",
            SpecVersion::V30 => "3.0.x",
            SpecVersion::V31 => "3.1.x",
            SpecVersion::V32 => "3.2.x",
        })
    }
}

// Patch numbers reject leading zeros; suffixes (`-rc1`) never match.
static RE_30: Lazy<Regex> = Lazy::new(|| Regex::new(r"^3\.0\.(0|[1-9][0-9]*)$").unwrap());
static RE_31: Lazy<Regex> = Lazy::new(|| Regex::new(r"^3\.1\.(0|[1-9][0-9]*)$").unwrap());
static RE_32: Lazy<Regex> = Lazy::new(|| Regex::new(r"^3\.2\.(0|[1-9][0-9]*)$").unwrap());

// One `openapi:`/`swagger:` line, optionally quoted, optionally followed by
// a comment. Trailing content other than a comment ends the match.
static RE_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?m)^\s*['"]?(?:openapi|swagger)['"]?\s*:\s*['"]?(2\.0|3\.[0-2]\.(?:0|[1-9][0-9]*))['"]?\s*(?:#.*)?$"#,
    )
    .unwrap()
});

/// Classify a version token.
///
/// The whole string must match one of the supported patterns.
pub fn parse_version(token: &str) -> Option<SpecVersion> {
    if token == "2.0" {
        Some(SpecVersion::V20)
    } else if RE_30.is_match(token) {
        Some(SpecVersion::V30)
    } else if RE_31.is_match(token) {
        Some(SpecVersion::V31)
    } else if RE_32.is_match(token) {
        Some(SpecVersion::V32)
    } else {
        None
    }
}

/// Extract the version token from YAML or JSON text.
///
/// JSON text is parsed and delegated to [`get_version_in`] (raw token, no
/// pattern validation). YAML text is scanned line-wise with the validating
/// pattern, so e.g. `openapi: 3.0.4-rc1` yields `None` here.
pub fn get_version(text: &str) -> Option<String> {
    let trimmed = text.trim_start();

    if trimmed.starts_with('{') {
        if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
            return get_version_in(&value).map(ToOwned::to_owned);
        }
    }

    RE_LINE
        .captures(text)
        .map(|caps| caps[1].to_owned())
}

/// Extract the raw version token from a parsed mapping.
///
/// Returns whatever string value `openapi` or `swagger` carries, without
/// pattern validation; non-string values yield `None`.
pub fn get_version_in(document: &Value) -> Option<&str> {
    let map = document.as_object()?;
    map.get("openapi").or_else(|| map.get("swagger"))?.as_str()
}

/// Extract the raw version token from a parsed mapping node.
pub fn get_version_node(arena: &YamlArena, node: NodeId) -> Option<&str> {
    let entries = arena.mapping(node)?;

    for &(key, value) in entries {
        if let Some(name) = arena.scalar_str(key) {
            if name == "openapi" || name == "swagger" {
                return arena.scalar_str(value);
            }
        }
    }

    None
}

/// Detect the specification version of YAML or JSON text.
pub fn detect(text: &str) -> Option<SpecVersion> {
    get_version(text).as_deref().and_then(parse_version)
}

/// Detect the specification version of a parsed mapping.
pub fn detect_in(document: &Value) -> Option<SpecVersion> {
    get_version_in(document).and_then(parse_version)
}

/// Whether the text is a Swagger 2.0 document.
pub fn is_openapi_20(text: &str) -> bool {
    detect(text) == Some(SpecVersion::V20)
}

/// Whether the text is an OpenAPI 3.0.x document.
pub fn is_openapi_30(text: &str) -> bool {
    detect(text) == Some(SpecVersion::V30)
}

/// Whether the text is an OpenAPI 3.1.x document.
pub fn is_openapi_31(text: &str) -> bool {
    detect(text) == Some(SpecVersion::V31)
}

/// Whether the text is an OpenAPI 3.2.x document.
pub fn is_openapi_32(text: &str) -> bool {
    detect(text) == Some(SpecVersion::V32)
}
