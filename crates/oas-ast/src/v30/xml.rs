use serde_json::Value;

use crate::{
    build::{extract_extensions, is_extension_key, mapping_entries, raw_field},
    sources::{Extensions, Field, ObjectOrInvalid},
    yaml::{NodeId, YamlArena},
};

/// XML Object: fine-tunes XML model definitions on a schema.
///
/// See <https://spec.openapis.org/oas/v3.0.4#xml-object>.
#[derive(Debug, Clone, PartialEq)]
pub struct Xml {
    pub root_node: NodeId,
    pub name: Field<Value>,
    pub namespace: Field<Value>,
    pub prefix: Field<Value>,
    pub attribute: Field<Value>,
    pub wrapped: Field<Value>,
    pub extensions: Extensions,
}

pub fn build(arena: &YamlArena, node: NodeId) -> ObjectOrInvalid<Xml> {
    let entries = match mapping_entries(arena, node) {
        Ok(entries) => entries,
        Err(raw) => return ObjectOrInvalid::Invalid(raw),
    };

    let mut xml = Xml {
        root_node: node,
        name: None,
        namespace: None,
        prefix: None,
        attribute: None,
        wrapped: None,
        extensions: extract_extensions(arena, entries),
    };

    for &(key, value) in entries {
        let name = arena.key_string(key);
        if is_extension_key(&name) {
            continue;
        }

        match name.as_str() {
            "name" => xml.name = Some(raw_field(arena, key, value)),
            "namespace" => xml.namespace = Some(raw_field(arena, key, value)),
            "prefix" => xml.prefix = Some(raw_field(arena, key, value)),
            "attribute" => xml.attribute = Some(raw_field(arena, key, value)),
            "wrapped" => xml.wrapped = Some(raw_field(arena, key, value)),
            _ => {}
        }
    }

    ObjectOrInvalid::Object(xml)
}
