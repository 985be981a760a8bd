use serde_json::Value;

use crate::{
    build::{extract_extensions, is_extension_key, map_field, mapping_entries, raw_field},
    sources::{Extensions, Field, ObjectOrInvalid, SourceMap},
    yaml::{NodeId, YamlArena},
};

use super::{build_or_reference, header, Header, ObjectOrReference};

/// Encoding Object: serialization detail for one request-body property.
///
/// See <https://spec.openapis.org/oas/v3.0.4#encoding-object>.
#[derive(Debug, Clone, PartialEq)]
pub struct Encoding {
    pub root_node: NodeId,
    pub content_type: Field<Value>,
    pub headers: Field<SourceMap<ObjectOrReference<Header>>>,
    pub style: Field<Value>,
    pub explode: Field<Value>,
    pub allow_reserved: Field<Value>,
    pub extensions: Extensions,
}

pub fn build(arena: &YamlArena, node: NodeId) -> ObjectOrInvalid<Encoding> {
    let entries = match mapping_entries(arena, node) {
        Ok(entries) => entries,
        Err(raw) => return ObjectOrInvalid::Invalid(raw),
    };

    let mut encoding = Encoding {
        root_node: node,
        content_type: None,
        headers: None,
        style: None,
        explode: None,
        allow_reserved: None,
        extensions: extract_extensions(arena, entries),
    };

    for &(key, value) in entries {
        let name = arena.key_string(key);
        if is_extension_key(&name) {
            continue;
        }

        match name.as_str() {
            "contentType" => encoding.content_type = Some(raw_field(arena, key, value)),
            "headers" => {
                encoding.headers = Some(map_field(arena, key, value, |arena, node| {
                    build_or_reference(arena, node, header::build)
                }));
            }
            "style" => encoding.style = Some(raw_field(arena, key, value)),
            "explode" => encoding.explode = Some(raw_field(arena, key, value)),
            "allowReserved" => encoding.allow_reserved = Some(raw_field(arena, key, value)),
            _ => {}
        }
    }

    ObjectOrInvalid::Object(encoding)
}
