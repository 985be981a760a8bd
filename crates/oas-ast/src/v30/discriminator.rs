use serde_json::Value;

use crate::{
    build::{extract_extensions, is_extension_key, mapping_entries, raw_field},
    sources::{Extensions, Field, ObjectOrInvalid},
    yaml::{NodeId, YamlArena},
};

/// Discriminator Object: informs consumers of an alternative schema based on
/// a property value.
///
/// See <https://spec.openapis.org/oas/v3.0.4#discriminator-object>.
#[derive(Debug, Clone, PartialEq)]
pub struct Discriminator {
    pub root_node: NodeId,
    /// The name of the property holding the discriminator value (required by
    /// the spec).
    pub property_name: Field<Value>,
    /// Mappings between payload values and schema names or references.
    pub mapping: Field<Value>,
    pub extensions: Extensions,
}

pub fn build(arena: &YamlArena, node: NodeId) -> ObjectOrInvalid<Discriminator> {
    let entries = match mapping_entries(arena, node) {
        Ok(entries) => entries,
        Err(raw) => return ObjectOrInvalid::Invalid(raw),
    };

    let mut discriminator = Discriminator {
        root_node: node,
        property_name: None,
        mapping: None,
        extensions: extract_extensions(arena, entries),
    };

    for &(key, value) in entries {
        let name = arena.key_string(key);
        if is_extension_key(&name) {
            continue;
        }

        match name.as_str() {
            "propertyName" => discriminator.property_name = Some(raw_field(arena, key, value)),
            "mapping" => discriminator.mapping = Some(raw_field(arena, key, value)),
            _ => {}
        }
    }

    ObjectOrInvalid::Object(discriminator)
}
