use serde_json::Value;

use crate::{
    build::{extract_extensions, is_extension_key, mapping_entries, raw_field},
    sources::{Extensions, Field, ObjectOrInvalid},
    yaml::{NodeId, YamlArena},
};

/// License information for the exposed API.
///
/// See <https://spec.openapis.org/oas/v3.1.1#license-object>.
#[derive(Debug, Clone, PartialEq)]
pub struct License {
    pub root_node: NodeId,
    pub name: Field<Value>,
    /// An SPDX license expression (new in 3.1; mutually exclusive with
    /// `url`, preserved regardless).
    pub identifier: Field<Value>,
    pub url: Field<Value>,
    pub extensions: Extensions,
}

pub fn build(arena: &YamlArena, node: NodeId) -> ObjectOrInvalid<License> {
    let entries = match mapping_entries(arena, node) {
        Ok(entries) => entries,
        Err(raw) => return ObjectOrInvalid::Invalid(raw),
    };

    let mut license = License {
        root_node: node,
        name: None,
        identifier: None,
        url: None,
        extensions: extract_extensions(arena, entries),
    };

    for &(key, value) in entries {
        let name = arena.key_string(key);
        if is_extension_key(&name) {
            continue;
        }

        match name.as_str() {
            "name" => license.name = Some(raw_field(arena, key, value)),
            "identifier" => license.identifier = Some(raw_field(arena, key, value)),
            "url" => license.url = Some(raw_field(arena, key, value)),
            _ => {}
        }
    }

    ObjectOrInvalid::Object(license)
}
