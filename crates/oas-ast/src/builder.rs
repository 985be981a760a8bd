//! Version-dispatched document building.

use log::debug;

use crate::{
    error::Error,
    sources::ObjectOrInvalid,
    v30, v31,
    version::{self, SpecVersion},
    yaml::{parse_yaml, YamlArena},
};

/// A typed document of either supported version.
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    V30(v30::OpenApi),
    V31(v31::OpenApi),
}

impl Document {
    /// Which specification line this document was built as.
    pub fn version(&self) -> SpecVersion {
        match self {
            Document::V30(_) => SpecVersion::V30,
            Document::V31(_) => SpecVersion::V31,
        }
    }

    /// Borrow the 3.0 root, if this is a 3.0 document.
    pub fn as_v30(&self) -> Option<&v30::OpenApi> {
        match self {
            Document::V30(document) => Some(document),
            Document::V31(_) => None,
        }
    }

    /// Borrow the 3.1 root, if this is a 3.1 document.
    pub fn as_v31(&self) -> Option<&v31::OpenApi> {
        match self {
            Document::V30(_) => None,
            Document::V31(document) => Some(document),
        }
    }
}

/// A typed document together with the arena its node handles point into.
#[derive(Debug, Clone)]
pub struct ParsedDocument {
    /// Node arena of the original parse; spans and raw values live here.
    pub arena: YamlArena,
    /// The typed root object.
    pub document: Document,
}

/// Parse text (YAML or JSON) and build the typed AST for its detected
/// version.
///
/// Swagger 2.0, 3.2.x, and undetectable versions yield
/// [`Error::UnsupportedVersion`] naming the found token.
pub fn build_document(text: &str) -> Result<ParsedDocument, Error> {
    let arena = parse_yaml(text)?;

    let root = match arena.root() {
        Some(root) => root,
        None => return Err(Error::UnsupportedVersion { found: None }),
    };

    let found = version::get_version_node(&arena, root)
        .map(ToOwned::to_owned)
        .or_else(|| version::get_version(text));
    let detected = found.as_deref().and_then(version::parse_version);

    debug!("detected document version: {detected:?}");

    let document = match detected {
        Some(SpecVersion::V30) => match v30::build_openapi(&arena, root) {
            ObjectOrInvalid::Object(document) => Document::V30(document),
            ObjectOrInvalid::Invalid(_) => {
                return Err(Error::UnsupportedVersion { found });
            }
        },
        Some(SpecVersion::V31) => match v31::build_openapi(&arena, root) {
            ObjectOrInvalid::Object(document) => Document::V31(document),
            ObjectOrInvalid::Invalid(_) => {
                return Err(Error::UnsupportedVersion { found });
            }
        },
        Some(SpecVersion::V20 | SpecVersion::V32) | None => {
            return Err(Error::UnsupportedVersion { found });
        }
    };

    Ok(ParsedDocument { arena, document })
}
