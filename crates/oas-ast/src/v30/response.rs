use serde_json::Value;

use crate::{
    build::{extract_extensions, is_extension_key, map_field, mapping_entries, raw_field},
    sources::{Extensions, Field, ObjectOrInvalid, SourceMap},
    yaml::{NodeId, YamlArena},
};

use super::{
    build_or_reference, header, link, media_type, Header, Link, MediaType, ObjectOrReference,
};

/// Response Object: a single response from an API operation.
///
/// See <https://spec.openapis.org/oas/v3.0.4#response-object>.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub root_node: NodeId,
    /// A description of the response (required by the spec).
    pub description: Field<Value>,
    pub headers: Field<SourceMap<ObjectOrReference<Header>>>,
    pub content: Field<SourceMap<ObjectOrInvalid<MediaType>>>,
    pub links: Field<SourceMap<ObjectOrReference<Link>>>,
    pub extensions: Extensions,
}

pub fn build(arena: &YamlArena, node: NodeId) -> ObjectOrInvalid<Response> {
    let entries = match mapping_entries(arena, node) {
        Ok(entries) => entries,
        Err(raw) => return ObjectOrInvalid::Invalid(raw),
    };

    let mut response = Response {
        root_node: node,
        description: None,
        headers: None,
        content: None,
        links: None,
        extensions: extract_extensions(arena, entries),
    };

    for &(key, value) in entries {
        let name = arena.key_string(key);
        if is_extension_key(&name) {
            continue;
        }

        match name.as_str() {
            "description" => response.description = Some(raw_field(arena, key, value)),
            "headers" => {
                response.headers = Some(map_field(arena, key, value, |arena, node| {
                    build_or_reference(arena, node, header::build)
                }));
            }
            "content" => {
                response.content = Some(map_field(arena, key, value, media_type::build));
            }
            "links" => {
                response.links = Some(map_field(arena, key, value, |arena, node| {
                    build_or_reference(arena, node, link::build)
                }));
            }
            _ => {}
        }
    }

    ObjectOrInvalid::Object(response)
}
