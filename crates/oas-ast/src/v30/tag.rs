use serde_json::Value;

use crate::{
    build::{extract_extensions, is_extension_key, mapping_entries, object_field, raw_field},
    sources::{Extensions, Field, ObjectOrInvalid},
    yaml::{NodeId, YamlArena},
};

use super::{external_doc, ExternalDoc};

/// Adds metadata to a single tag used by Operation Objects.
///
/// See <https://spec.openapis.org/oas/v3.0.4#tag-object>.
#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub root_node: NodeId,
    /// The name of the tag (required by the spec).
    pub name: Field<Value>,
    pub description: Field<Value>,
    pub external_docs: Field<ObjectOrInvalid<ExternalDoc>>,
    pub extensions: Extensions,
}

pub fn build(arena: &YamlArena, node: NodeId) -> ObjectOrInvalid<Tag> {
    let entries = match mapping_entries(arena, node) {
        Ok(entries) => entries,
        Err(raw) => return ObjectOrInvalid::Invalid(raw),
    };

    let mut tag = Tag {
        root_node: node,
        name: None,
        description: None,
        external_docs: None,
        extensions: extract_extensions(arena, entries),
    };

    for &(key, value) in entries {
        let name = arena.key_string(key);
        if is_extension_key(&name) {
            continue;
        }

        match name.as_str() {
            "name" => tag.name = Some(raw_field(arena, key, value)),
            "description" => tag.description = Some(raw_field(arena, key, value)),
            "externalDocs" => {
                tag.external_docs = Some(object_field(arena, key, value, external_doc::build));
            }
            _ => {}
        }
    }

    ObjectOrInvalid::Object(tag)
}
