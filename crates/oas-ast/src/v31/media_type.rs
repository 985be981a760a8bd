use serde_json::Value;

use crate::{
    build::{extract_extensions, is_extension_key, map_field, mapping_entries, object_field, raw_field},
    sources::{Extensions, Field, ObjectOrInvalid, SourceMap},
    yaml::{NodeId, YamlArena},
};

use super::{
    build_or_reference, encoding, example, schema, Encoding, Example, ObjectOrReference, Schema,
};

/// Media Type Object: a schema and examples for one media type.
///
/// See <https://spec.openapis.org/oas/v3.1.1#media-type-object>.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaType {
    pub root_node: NodeId,
    /// In 3.1 a schema position is always a schema; `$ref` is one of its
    /// keywords.
    pub schema: Field<ObjectOrInvalid<Schema>>,
    pub example: Field<Value>,
    pub examples: Field<SourceMap<ObjectOrReference<Example>>>,
    /// Property name → encoding info; applies to `multipart` and
    /// `application/x-www-form-urlencoded` request bodies.
    pub encoding: Field<SourceMap<ObjectOrInvalid<Encoding>>>,
    pub extensions: Extensions,
}

pub fn build(arena: &YamlArena, node: NodeId) -> ObjectOrInvalid<MediaType> {
    let entries = match mapping_entries(arena, node) {
        Ok(entries) => entries,
        Err(raw) => return ObjectOrInvalid::Invalid(raw),
    };

    let mut media_type = MediaType {
        root_node: node,
        schema: None,
        example: None,
        examples: None,
        encoding: None,
        extensions: extract_extensions(arena, entries),
    };

    for &(key, value) in entries {
        let name = arena.key_string(key);
        if is_extension_key(&name) {
            continue;
        }

        match name.as_str() {
            "schema" => {
                media_type.schema = Some(object_field(arena, key, value, schema::build));
            }
            "example" => media_type.example = Some(raw_field(arena, key, value)),
            "examples" => {
                media_type.examples = Some(map_field(arena, key, value, |arena, node| {
                    build_or_reference(arena, node, example::build)
                }));
            }
            "encoding" => {
                media_type.encoding = Some(map_field(arena, key, value, encoding::build));
            }
            _ => {}
        }
    }

    ObjectOrInvalid::Object(media_type)
}
