use serde_json::Value;

use crate::{
    build::{extract_extensions, is_extension_key, mapping_entries, raw_field},
    sources::{Extensions, Field, ObjectOrInvalid},
    yaml::{NodeId, YamlArena},
};

/// Contact information for the exposed API.
///
/// See <https://spec.openapis.org/oas/v3.1.1#contact-object>.
#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
    pub root_node: NodeId,
    pub name: Field<Value>,
    pub url: Field<Value>,
    pub email: Field<Value>,
    pub extensions: Extensions,
}

pub fn build(arena: &YamlArena, node: NodeId) -> ObjectOrInvalid<Contact> {
    let entries = match mapping_entries(arena, node) {
        Ok(entries) => entries,
        Err(raw) => return ObjectOrInvalid::Invalid(raw),
    };

    let mut contact = Contact {
        root_node: node,
        name: None,
        url: None,
        email: None,
        extensions: extract_extensions(arena, entries),
    };

    for &(key, value) in entries {
        let name = arena.key_string(key);
        if is_extension_key(&name) {
            continue;
        }

        match name.as_str() {
            "name" => contact.name = Some(raw_field(arena, key, value)),
            "url" => contact.url = Some(raw_field(arena, key, value)),
            "email" => contact.email = Some(raw_field(arena, key, value)),
            _ => {}
        }
    }

    ObjectOrInvalid::Object(contact)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::yaml::parse_yaml;

    #[test]
    fn builds_all_fields() {
        let arena = parse_yaml(indoc::indoc! {"
            name: API Support
            url: https://example.com/support
            email: support@example.com
            x-slack: '#api-support'
        "})
        .unwrap();

        let contact = build(&arena, arena.root().unwrap());
        let contact = contact.as_object().unwrap();

        assert_eq!(contact.name.as_ref().unwrap().value, "API Support");
        assert_eq!(contact.email.as_ref().unwrap().value, "support@example.com");
        assert_eq!(
            contact.extensions.get("x-slack").unwrap().value,
            "#api-support",
        );
    }

    #[test]
    fn wrong_typed_values_are_preserved() {
        let arena = parse_yaml("email: 42\n").unwrap();

        let contact = build(&arena, arena.root().unwrap());
        let contact = contact.as_object().unwrap();

        assert_eq!(contact.email.as_ref().unwrap().value, 42);
    }
}
