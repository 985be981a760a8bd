use indexmap::IndexMap;

use crate::{
    build::{extract_extensions, is_extension_key, mapping_entries},
    sources::{Extensions, KeySource, ObjectOrInvalid},
    yaml::{NodeId, YamlArena},
};

use super::{path_item, PathItem};

/// Callback Object: out-of-band requests initiated by the API provider.
///
/// Each key is a runtime expression (e.g.
/// `{$request.body#/callbackUrl}`) identifying the callback URL; keys are
/// opaque identifiers here and are not validated.
///
/// See <https://spec.openapis.org/oas/v3.1.1#callback-object>.
#[derive(Debug, Clone, PartialEq)]
pub struct Callback {
    pub root_node: NodeId,
    /// Callback expression → path item, in source order.
    pub expressions: IndexMap<KeySource<String>, ObjectOrInvalid<PathItem>>,
    pub extensions: Extensions,
}

pub fn build(arena: &YamlArena, node: NodeId) -> ObjectOrInvalid<Callback> {
    let entries = match mapping_entries(arena, node) {
        Ok(entries) => entries,
        Err(raw) => return ObjectOrInvalid::Invalid(raw),
    };

    let mut callback = Callback {
        root_node: node,
        expressions: IndexMap::new(),
        extensions: extract_extensions(arena, entries),
    };

    for &(key, value) in entries {
        let name = arena.key_string(key);
        if is_extension_key(&name) {
            continue;
        }

        callback
            .expressions
            .insert(KeySource::new(name, key), path_item::build(arena, value));
    }

    ObjectOrInvalid::Object(callback)
}
