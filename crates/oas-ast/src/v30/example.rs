use serde_json::Value;

use crate::{
    build::{extract_extensions, is_extension_key, mapping_entries, raw_field},
    sources::{Extensions, Field, ObjectOrInvalid},
    yaml::{NodeId, YamlArena},
};

/// Example Object.
///
/// The `value` field is free-form and kept exactly as deserialized; `value`
/// and `externalValue` are mutually exclusive per the spec, but both are
/// preserved here when present.
///
/// See <https://spec.openapis.org/oas/v3.0.4#example-object>.
#[derive(Debug, Clone, PartialEq)]
pub struct Example {
    pub root_node: NodeId,
    pub summary: Field<Value>,
    pub description: Field<Value>,
    /// Embedded literal example.
    pub value: Field<Value>,
    /// A URI that points to the literal example.
    pub external_value: Field<Value>,
    pub extensions: Extensions,
}

pub fn build(arena: &YamlArena, node: NodeId) -> ObjectOrInvalid<Example> {
    let entries = match mapping_entries(arena, node) {
        Ok(entries) => entries,
        Err(raw) => return ObjectOrInvalid::Invalid(raw),
    };

    let mut example = Example {
        root_node: node,
        summary: None,
        description: None,
        value: None,
        external_value: None,
        extensions: extract_extensions(arena, entries),
    };

    for &(key, value) in entries {
        let name = arena.key_string(key);
        if is_extension_key(&name) {
            continue;
        }

        match name.as_str() {
            "summary" => example.summary = Some(raw_field(arena, key, value)),
            "description" => example.description = Some(raw_field(arena, key, value)),
            "value" => example.value = Some(raw_field(arena, key, value)),
            "externalValue" => example.external_value = Some(raw_field(arena, key, value)),
            _ => {}
        }
    }

    ObjectOrInvalid::Object(example)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::yaml::parse_yaml;

    #[test]
    fn free_form_value_is_kept_verbatim() {
        let arena = parse_yaml(indoc::indoc! {"
            summary: a pet
            value:
              id: 7
              tags: [cute]
        "})
        .unwrap();

        let example = build(&arena, arena.root().unwrap());
        let example = example.as_object().unwrap();

        assert_eq!(
            example.value.as_ref().unwrap().value,
            json!({"id": 7, "tags": ["cute"]}),
        );
    }
}
