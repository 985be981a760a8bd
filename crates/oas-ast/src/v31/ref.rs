use serde_json::Value;

use crate::{
    build::{mapping_entries, raw_field, raw_value},
    sources::{Field, ObjectOrInvalid, ValueSource},
    yaml::{NodeId, YamlArena},
};

/// Reference Object.
///
/// In v3.1 a reference may annotate itself with `summary` and
/// `description`, which override the referenced component's own. Schema
/// positions never produce this type; a 3.1 schema carries `$ref` as an
/// ordinary keyword.
///
/// See <https://spec.openapis.org/oas/v3.1.1#reference-object>.
#[derive(Debug, Clone, PartialEq)]
pub struct Reference {
    pub root_node: NodeId,
    /// The reference string.
    pub ref_path: Field<Value>,
    pub summary: Field<Value>,
    pub description: Field<Value>,
}

/// A position that holds either an object, a reference to one, or preserved
/// raw salvage when the source shape matches neither.
#[derive(Debug, Clone, PartialEq)]
pub enum ObjectOrReference<T> {
    Object(T),
    Reference(Reference),
    Invalid(ValueSource<Value>),
}

impl<T> ObjectOrReference<T> {
    /// Borrow the inline object, if there is one.
    pub fn as_object(&self) -> Option<&T> {
        match self {
            ObjectOrReference::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Borrow the reference, if this position holds one.
    pub fn as_reference(&self) -> Option<&Reference> {
        match self {
            ObjectOrReference::Reference(reference) => Some(reference),
            _ => None,
        }
    }
}

/// Build a `Reference` from a mapping node known to carry `$ref`.
pub fn build_reference(arena: &YamlArena, node: NodeId) -> ObjectOrInvalid<Reference> {
    let entries = match mapping_entries(arena, node) {
        Ok(entries) => entries,
        Err(raw) => return ObjectOrInvalid::Invalid(raw),
    };

    let mut reference = Reference {
        root_node: node,
        ref_path: None,
        summary: None,
        description: None,
    };

    for &(key, value) in entries {
        match arena.key_string(key).as_str() {
            "$ref" => reference.ref_path = Some(raw_field(arena, key, value)),
            "summary" => reference.summary = Some(raw_field(arena, key, value)),
            "description" => reference.description = Some(raw_field(arena, key, value)),
            _ => {}
        }
    }

    ObjectOrInvalid::Object(reference)
}

/// Discriminate between a reference and an inline object.
///
/// Used for every referenceable position except schemas.
pub fn build_or_reference<T>(
    arena: &YamlArena,
    node: NodeId,
    build: impl FnOnce(&YamlArena, NodeId) -> ObjectOrInvalid<T>,
) -> ObjectOrReference<T> {
    let Some(entries) = arena.mapping(node) else {
        return ObjectOrReference::Invalid(raw_value(arena, node));
    };

    let has_ref = entries
        .iter()
        .any(|&(key, _)| arena.key_string(key) == "$ref");

    if has_ref {
        return match build_reference(arena, node) {
            ObjectOrInvalid::Object(reference) => ObjectOrReference::Reference(reference),
            ObjectOrInvalid::Invalid(raw) => ObjectOrReference::Invalid(raw),
        };
    }

    match build(arena, node) {
        ObjectOrInvalid::Object(object) => ObjectOrReference::Object(object),
        ObjectOrInvalid::Invalid(raw) => ObjectOrReference::Invalid(raw),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::yaml::parse_yaml;

    #[test]
    fn reference_with_summary_override() {
        let arena = parse_yaml(indoc::indoc! {"
            $ref: '#/components/responses/NotFound'
            summary: a missing thing
            description: overrides the target's description
        "})
        .unwrap();

        let built = build_or_reference(&arena, arena.root().unwrap(), super::super::build_response);
        let reference = built.as_reference().unwrap();

        assert_eq!(
            reference.ref_path.as_ref().unwrap().value,
            "#/components/responses/NotFound",
        );
        assert_eq!(reference.summary.as_ref().unwrap().value, "a missing thing");
    }
}
