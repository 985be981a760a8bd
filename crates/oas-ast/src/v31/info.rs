use serde_json::Value;

use crate::{
    build::{extract_extensions, is_extension_key, mapping_entries, object_field, raw_field},
    sources::{Extensions, Field, ObjectOrInvalid},
    yaml::{NodeId, YamlArena},
};

use super::{contact, license, Contact, License};

/// Info Object: metadata about the API.
///
/// `title` and `version` are required by the spec; their absence is a
/// validation finding, not a build failure.
///
/// See <https://spec.openapis.org/oas/v3.1.1#info-object>.
#[derive(Debug, Clone, PartialEq)]
pub struct Info {
    pub root_node: NodeId,
    pub title: Field<Value>,
    /// A short summary of the API (new in 3.1).
    pub summary: Field<Value>,
    pub description: Field<Value>,
    pub terms_of_service: Field<Value>,
    pub contact: Field<ObjectOrInvalid<Contact>>,
    pub license: Field<ObjectOrInvalid<License>>,
    pub version: Field<Value>,
    pub extensions: Extensions,
}

pub fn build(arena: &YamlArena, node: NodeId) -> ObjectOrInvalid<Info> {
    let entries = match mapping_entries(arena, node) {
        Ok(entries) => entries,
        Err(raw) => return ObjectOrInvalid::Invalid(raw),
    };

    let mut info = Info {
        root_node: node,
        title: None,
        summary: None,
        description: None,
        terms_of_service: None,
        contact: None,
        license: None,
        version: None,
        extensions: extract_extensions(arena, entries),
    };

    for &(key, value) in entries {
        let name = arena.key_string(key);
        if is_extension_key(&name) {
            continue;
        }

        match name.as_str() {
            "title" => info.title = Some(raw_field(arena, key, value)),
            "summary" => info.summary = Some(raw_field(arena, key, value)),
            "description" => info.description = Some(raw_field(arena, key, value)),
            "termsOfService" => info.terms_of_service = Some(raw_field(arena, key, value)),
            "contact" => info.contact = Some(object_field(arena, key, value, contact::build)),
            "license" => info.license = Some(object_field(arena, key, value, license::build)),
            "version" => info.version = Some(raw_field(arena, key, value)),
            _ => {}
        }
    }

    ObjectOrInvalid::Object(info)
}
