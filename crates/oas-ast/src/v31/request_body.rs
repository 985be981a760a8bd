use serde_json::Value;

use crate::{
    build::{extract_extensions, is_extension_key, map_field, mapping_entries, raw_field},
    sources::{Extensions, Field, ObjectOrInvalid, SourceMap},
    yaml::{NodeId, YamlArena},
};

use super::{media_type, MediaType};

/// Request Body Object.
///
/// See <https://spec.openapis.org/oas/v3.1.1#request-body-object>.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestBody {
    pub root_node: NodeId,
    pub description: Field<Value>,
    /// Media type → content description (required by the spec).
    pub content: Field<SourceMap<ObjectOrInvalid<MediaType>>>,
    pub required: Field<Value>,
    pub extensions: Extensions,
}

pub fn build(arena: &YamlArena, node: NodeId) -> ObjectOrInvalid<RequestBody> {
    let entries = match mapping_entries(arena, node) {
        Ok(entries) => entries,
        Err(raw) => return ObjectOrInvalid::Invalid(raw),
    };

    let mut body = RequestBody {
        root_node: node,
        description: None,
        content: None,
        required: None,
        extensions: extract_extensions(arena, entries),
    };

    for &(key, value) in entries {
        let name = arena.key_string(key);
        if is_extension_key(&name) {
            continue;
        }

        match name.as_str() {
            "description" => body.description = Some(raw_field(arena, key, value)),
            "content" => body.content = Some(map_field(arena, key, value, media_type::build)),
            "required" => body.required = Some(raw_field(arena, key, value)),
            _ => {}
        }
    }

    ObjectOrInvalid::Object(body)
}
