use serde_json::Value;

use crate::{
    build::{extract_extensions, is_extension_key, map_field, mapping_entries, object_field, raw_field},
    sources::{Extensions, Field, ObjectOrInvalid, SourceMap},
    yaml::{NodeId, YamlArena},
};

use super::{
    build_or_reference, example, media_type, schema, Example, MediaType, ObjectOrReference, Schema,
};

/// Header Object.
///
/// Follows the Parameter Object minus `name` and `in`. `schema` and
/// `content` are mutually exclusive per the spec; both are preserved here
/// when present, for validators to flag.
///
/// See <https://spec.openapis.org/oas/v3.0.4#header-object>.
#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    pub root_node: NodeId,
    pub description: Field<Value>,
    pub required: Field<Value>,
    pub deprecated: Field<Value>,
    pub allow_empty_value: Field<Value>,
    pub style: Field<Value>,
    pub explode: Field<Value>,
    pub allow_reserved: Field<Value>,
    pub schema: Field<ObjectOrReference<Schema>>,
    pub example: Field<Value>,
    pub examples: Field<SourceMap<ObjectOrReference<Example>>>,
    pub content: Field<SourceMap<ObjectOrInvalid<MediaType>>>,
    pub extensions: Extensions,
}

pub fn build(arena: &YamlArena, node: NodeId) -> ObjectOrInvalid<Header> {
    let entries = match mapping_entries(arena, node) {
        Ok(entries) => entries,
        Err(raw) => return ObjectOrInvalid::Invalid(raw),
    };

    let mut header = Header {
        root_node: node,
        description: None,
        required: None,
        deprecated: None,
        allow_empty_value: None,
        style: None,
        explode: None,
        allow_reserved: None,
        schema: None,
        example: None,
        examples: None,
        content: None,
        extensions: extract_extensions(arena, entries),
    };

    for &(key, value) in entries {
        let name = arena.key_string(key);
        if is_extension_key(&name) {
            continue;
        }

        match name.as_str() {
            "description" => header.description = Some(raw_field(arena, key, value)),
            "required" => header.required = Some(raw_field(arena, key, value)),
            "deprecated" => header.deprecated = Some(raw_field(arena, key, value)),
            "allowEmptyValue" => header.allow_empty_value = Some(raw_field(arena, key, value)),
            "style" => header.style = Some(raw_field(arena, key, value)),
            "explode" => header.explode = Some(raw_field(arena, key, value)),
            "allowReserved" => header.allow_reserved = Some(raw_field(arena, key, value)),
            "schema" => {
                header.schema = Some(object_field(arena, key, value, |arena, node| {
                    build_or_reference(arena, node, schema::build)
                }));
            }
            "example" => header.example = Some(raw_field(arena, key, value)),
            "examples" => {
                header.examples = Some(map_field(arena, key, value, |arena, node| {
                    build_or_reference(arena, node, example::build)
                }));
            }
            "content" => {
                header.content = Some(map_field(arena, key, value, media_type::build));
            }
            _ => {}
        }
    }

    ObjectOrInvalid::Object(header)
}
