//! Shared machinery for the per-object builders.
//!
//! Every typed object is built with the same algorithm: reject non-mapping
//! nodes by preserving their raw value, partition entries into extensions
//! and known fixed fields, and keep every fixed-field value with its key and
//! value nodes. Values whose shape does not match the declared field type
//! are preserved raw, never coerced and never dropped.

use indexmap::IndexMap;
use serde_json::Value;

use crate::{
    sources::{Extensions, FieldSource, KeySource, ObjectOrInvalid, SourceList, SourceMap, ValueSource},
    yaml::{NodeId, YamlArena},
};

/// Whether a key names a specification extension.
pub(crate) fn is_extension_key(key: &str) -> bool {
    key.starts_with("x-")
}

/// Preserve a node's raw deserialized value.
pub(crate) fn raw_value(arena: &YamlArena, node: NodeId) -> ValueSource<Value> {
    ValueSource::new(arena.to_plain(node), node)
}

/// A fixed field holding its raw deserialized value (scalar-typed fields).
pub(crate) fn raw_field(arena: &YamlArena, key: NodeId, value: NodeId) -> FieldSource<Value> {
    FieldSource::new(arena.to_plain(value), key, value)
}

/// Mapping entries of a node, or its preserved raw value.
pub(crate) fn mapping_entries<'a>(
    arena: &'a YamlArena,
    node: NodeId,
) -> Result<&'a [(NodeId, NodeId)], ValueSource<Value>> {
    arena.mapping(node).ok_or_else(|| raw_value(arena, node))
}

/// A fixed field holding a single built object.
pub(crate) fn object_field<T>(
    arena: &YamlArena,
    key: NodeId,
    value: NodeId,
    build: impl FnOnce(&YamlArena, NodeId) -> T,
) -> FieldSource<T> {
    FieldSource::new(build(arena, value), key, value)
}

/// A fixed field holding a sequence of built elements.
///
/// A non-sequence value is preserved raw in place of the list.
pub(crate) fn list_field<T>(
    arena: &YamlArena,
    key: NodeId,
    value: NodeId,
    build_item: impl Fn(&YamlArena, NodeId) -> T,
) -> FieldSource<SourceList<T>> {
    let list = match arena.sequence(value) {
        Some(items) => ObjectOrInvalid::Object(
            items.iter().map(|&item| build_item(arena, item)).collect(),
        ),
        None => ObjectOrInvalid::Invalid(raw_value(arena, value)),
    };

    FieldSource::new(list, key, value)
}

/// A fixed field holding a source-ordered map of built values.
///
/// A non-mapping value is preserved raw in place of the map. Duplicate keys
/// keep the first key's position and node; the last value wins.
pub(crate) fn map_field<T>(
    arena: &YamlArena,
    key: NodeId,
    value: NodeId,
    build_item: impl Fn(&YamlArena, NodeId) -> T,
) -> FieldSource<SourceMap<T>> {
    let map = match arena.mapping(value) {
        Some(entries) => ObjectOrInvalid::Object(build_entries(arena, entries, build_item)),
        None => ObjectOrInvalid::Invalid(raw_value(arena, value)),
    };

    FieldSource::new(map, key, value)
}

/// Build an ordered map out of mapping entries.
pub(crate) fn build_entries<T>(
    arena: &YamlArena,
    entries: &[(NodeId, NodeId)],
    build_item: impl Fn(&YamlArena, NodeId) -> T,
) -> IndexMap<KeySource<String>, T> {
    let mut map = IndexMap::with_capacity(entries.len());

    for &(key, value) in entries {
        map.insert(
            KeySource::new(arena.key_string(key), key),
            build_item(arena, value),
        );
    }

    map
}

/// Collect every `x-*` entry of a mapping, in source order.
pub(crate) fn extract_extensions(arena: &YamlArena, entries: &[(NodeId, NodeId)]) -> Extensions {
    let mut extensions = Extensions::new();

    for &(key, value) in entries {
        let name = arena.key_string(key);
        if is_extension_key(&name) {
            extensions.insert(KeySource::new(name, key), raw_value(arena, value));
        }
    }

    extensions
}
