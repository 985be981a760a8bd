use indexmap::IndexMap;
use serde_json::Value;

use crate::{
    build::{mapping_entries, raw_value},
    sources::{KeySource, ObjectOrInvalid, ValueSource},
    yaml::{NodeId, YamlArena},
};

/// Security Requirement Object: scheme name → required scopes.
///
/// Every key names a declared security scheme, so this object has no fixed
/// fields and no extensions; scope lists are kept raw.
///
/// See <https://spec.openapis.org/oas/v3.0.4#security-requirement-object>.
#[derive(Debug, Clone, PartialEq)]
pub struct SecurityRequirement {
    pub root_node: NodeId,
    pub requirements: IndexMap<KeySource<String>, ValueSource<Value>>,
}

pub fn build(arena: &YamlArena, node: NodeId) -> ObjectOrInvalid<SecurityRequirement> {
    let entries = match mapping_entries(arena, node) {
        Ok(entries) => entries,
        Err(raw) => return ObjectOrInvalid::Invalid(raw),
    };

    let mut requirement = SecurityRequirement {
        root_node: node,
        requirements: IndexMap::new(),
    };

    for &(key, value) in entries {
        requirement.requirements.insert(
            KeySource::new(arena.key_string(key), key),
            raw_value(arena, value),
        );
    }

    ObjectOrInvalid::Object(requirement)
}
