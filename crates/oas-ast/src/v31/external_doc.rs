use serde_json::Value;

use crate::{
    build::{extract_extensions, is_extension_key, mapping_entries, raw_field},
    sources::{Extensions, Field, ObjectOrInvalid},
    yaml::{NodeId, YamlArena},
};

/// External Documentation Object: a reference to extended documentation for
/// the enclosing object.
///
/// See <https://spec.openapis.org/oas/v3.1.1#external-documentation-object>.
#[derive(Debug, Clone, PartialEq)]
pub struct ExternalDoc {
    pub root_node: NodeId,
    pub description: Field<Value>,
    /// The URL for the target documentation (required by the spec).
    pub url: Field<Value>,
    pub extensions: Extensions,
}

pub fn build(arena: &YamlArena, node: NodeId) -> ObjectOrInvalid<ExternalDoc> {
    let entries = match mapping_entries(arena, node) {
        Ok(entries) => entries,
        Err(raw) => return ObjectOrInvalid::Invalid(raw),
    };

    let mut doc = ExternalDoc {
        root_node: node,
        description: None,
        url: None,
        extensions: extract_extensions(arena, entries),
    };

    for &(key, value) in entries {
        let name = arena.key_string(key);
        if is_extension_key(&name) {
            continue;
        }

        match name.as_str() {
            "description" => doc.description = Some(raw_field(arena, key, value)),
            "url" => doc.url = Some(raw_field(arena, key, value)),
            _ => {}
        }
    }

    ObjectOrInvalid::Object(doc)
}
