//! Wrappers binding parsed values to their source nodes.
//!
//! Equality and hashing of every wrapper are structural over the carried
//! value only; node handles are location metadata and never participate.

use std::hash::{Hash, Hasher};

use indexmap::{Equivalent, IndexMap};
use serde_json::Value;

use crate::yaml::NodeId;

/// A mapping key with its source node.
#[derive(Debug, Clone)]
pub struct KeySource<K> {
    pub value: K,
    pub key_node: NodeId,
}

impl<K> KeySource<K> {
    pub fn new(value: K, key_node: NodeId) -> Self {
        Self { value, key_node }
    }
}

impl<K: PartialEq> PartialEq for KeySource<K> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<K: Eq> Eq for KeySource<K> {}

impl<K: Hash> Hash for KeySource<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

/// Lets `&str` look up entries of maps keyed by [`KeySource<String>`].
impl Equivalent<KeySource<String>> for str {
    fn equivalent(&self, key: &KeySource<String>) -> bool {
        self == key.value
    }
}

/// A value with its source node.
#[derive(Debug, Clone)]
pub struct ValueSource<V> {
    pub value: V,
    pub value_node: NodeId,
}

impl<V> ValueSource<V> {
    pub fn new(value: V, value_node: NodeId) -> Self {
        Self { value, value_node }
    }
}

impl<V: PartialEq> PartialEq for ValueSource<V> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<V: Eq> Eq for ValueSource<V> {}

/// A named field binding both the key node and the value node.
#[derive(Debug, Clone)]
pub struct FieldSource<V> {
    pub value: V,
    pub key_node: NodeId,
    pub value_node: NodeId,
}

impl<V> FieldSource<V> {
    pub fn new(value: V, key_node: NodeId, value_node: NodeId) -> Self {
        Self {
            value,
            key_node,
            value_node,
        }
    }
}

impl<V: PartialEq> PartialEq for FieldSource<V> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<V: Eq> Eq for FieldSource<V> {}

/// A built object, or the raw value preserved from a source node whose shape
/// did not match.
///
/// Nothing is discarded on a shape mismatch: the offending subtree is
/// deserialized plainly and kept for downstream validators.
#[derive(Debug, Clone, PartialEq)]
pub enum ObjectOrInvalid<T> {
    Object(T),
    Invalid(ValueSource<Value>),
}

impl<T> ObjectOrInvalid<T> {
    /// Borrow the well-formed object, if there is one.
    pub fn as_object(&self) -> Option<&T> {
        match self {
            ObjectOrInvalid::Object(object) => Some(object),
            ObjectOrInvalid::Invalid(_) => None,
        }
    }

    /// Borrow the preserved raw value, if the shape was invalid.
    pub fn as_invalid(&self) -> Option<&ValueSource<Value>> {
        match self {
            ObjectOrInvalid::Object(_) => None,
            ObjectOrInvalid::Invalid(raw) => Some(raw),
        }
    }

    pub fn is_object(&self) -> bool {
        matches!(self, ObjectOrInvalid::Object(_))
    }
}

/// An optional fixed field.
pub type Field<T> = Option<FieldSource<T>>;

/// A sequence-shaped field: the list itself may be salvage, and so may each
/// element.
pub type SourceList<T> = ObjectOrInvalid<Vec<T>>;

/// A mapping-shaped field with source-ordered, key-located entries.
pub type SourceMap<T> = ObjectOrInvalid<IndexMap<KeySource<String>, T>>;

/// Specification extensions: every `x-*` key of an object, in source order,
/// with the full key name kept as written.
pub type Extensions = IndexMap<KeySource<String>, ValueSource<Value>>;
