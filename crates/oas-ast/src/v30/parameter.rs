use serde_json::Value;

use crate::{
    build::{extract_extensions, is_extension_key, map_field, mapping_entries, object_field, raw_field},
    sources::{Extensions, Field, ObjectOrInvalid, SourceMap},
    yaml::{NodeId, YamlArena},
};

use super::{
    build_or_reference, example, media_type, schema, Example, MediaType, ObjectOrReference, Schema,
};

/// Parameter Object: a single operation parameter.
///
/// A unique parameter is defined by the combination of `name` and `in`.
///
/// See <https://spec.openapis.org/oas/v3.0.4#parameter-object>.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub root_node: NodeId,
    /// The name of the parameter (required by the spec).
    pub name: Field<Value>,
    /// The location of the parameter: `query`, `header`, `path` or `cookie`
    /// (required by the spec; YAML name `in`).
    pub location: Field<Value>,
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

pub fn build(arena: &YamlArena, node: NodeId) -> ObjectOrInvalid<Parameter> {
    let entries = match mapping_entries(arena, node) {
        Ok(entries) => entries,
        Err(raw) => return ObjectOrInvalid::Invalid(raw),
    };

    let mut parameter = Parameter {
        root_node: node,
        name: None,
        location: None,
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
            "name" => parameter.name = Some(raw_field(arena, key, value)),
            "in" => parameter.location = Some(raw_field(arena, key, value)),
            "description" => parameter.description = Some(raw_field(arena, key, value)),
            "required" => parameter.required = Some(raw_field(arena, key, value)),
            "deprecated" => parameter.deprecated = Some(raw_field(arena, key, value)),
            "allowEmptyValue" => parameter.allow_empty_value = Some(raw_field(arena, key, value)),
            "style" => parameter.style = Some(raw_field(arena, key, value)),
            "explode" => parameter.explode = Some(raw_field(arena, key, value)),
            "allowReserved" => parameter.allow_reserved = Some(raw_field(arena, key, value)),
            "schema" => {
                parameter.schema = Some(object_field(arena, key, value, |arena, node| {
                    build_or_reference(arena, node, schema::build)
                }));
            }
            "example" => parameter.example = Some(raw_field(arena, key, value)),
            "examples" => {
                parameter.examples = Some(map_field(arena, key, value, |arena, node| {
                    build_or_reference(arena, node, example::build)
                }));
            }
            "content" => {
                parameter.content = Some(map_field(arena, key, value, media_type::build));
            }
            _ => {}
        }
    }

    ObjectOrInvalid::Object(parameter)
}
