use serde_json::Value;

use crate::{
    build::{mapping_entries, raw_field, raw_value},
    sources::{Field, ObjectOrInvalid, ValueSource},
    yaml::{NodeId, YamlArena},
};

/// Reference Object.
///
/// A `$ref` at any position that admits one. In v3.0 a reference is a
/// distinct object: sibling keys are ignored by consumers, and schema
/// positions hold either a [`Schema`](super::Schema) or a `Reference`,
/// never both.
///
/// See <https://spec.openapis.org/oas/v3.0.4#reference-object>.
#[derive(Debug, Clone, PartialEq)]
pub struct Reference {
    pub root_node: NodeId,
    /// The reference string.
    pub ref_path: Field<Value>,
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
    };

    for &(key, value) in entries {
        if arena.key_string(key) == "$ref" {
            reference.ref_path = Some(raw_field(arena, key, value));
        }
    }

    ObjectOrInvalid::Object(reference)
}

/// Discriminate between a reference and an inline object.
///
/// A mapping containing a `$ref` key builds as a [`Reference`]; any other
/// mapping is delegated to the object builder; everything else is preserved
/// raw.
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
