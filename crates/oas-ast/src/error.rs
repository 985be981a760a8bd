//! Error types.

use derive_more::derive::{Display, Error, From};

use crate::yaml::YamlParseError;

/// Errors surfaced while turning text into a typed document.
///
/// Shape mismatches inside an otherwise parseable document are never
/// errors: the builders preserve those values in place.
#[derive(Debug, Display, Error, From)]
pub enum Error {
    /// Malformed YAML input.
    #[display("YAML error")]
    Yaml(YamlParseError),

    /// The document's version token matched no supported release line.
    #[display("unsupported OpenAPI version: {}", found.as_deref().unwrap_or("not detected"))]
    #[from(ignore)]
    UnsupportedVersion {
        /// The raw token found in the document, if any.
        found: Option<String>,
    },
}
