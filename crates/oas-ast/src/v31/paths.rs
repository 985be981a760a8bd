use indexmap::IndexMap;

use crate::{
    build::{extract_extensions, is_extension_key, mapping_entries},
    sources::{Extensions, KeySource, ObjectOrInvalid},
    yaml::{NodeId, YamlArena},
};

use super::{path_item, PathItem};

/// Paths Object: relative endpoint paths and their operations.
///
/// Every non-extension key is kept in source order, whether or not it
/// begins with `/`; path-template validity is a validator concern.
///
/// See <https://spec.openapis.org/oas/v3.1.1#paths-object>.
#[derive(Debug, Clone, PartialEq)]
pub struct Paths {
    pub root_node: NodeId,
    /// Path template → path item, in source order.
    pub paths: IndexMap<KeySource<String>, ObjectOrInvalid<PathItem>>,
    pub extensions: Extensions,
}

pub fn build(arena: &YamlArena, node: NodeId) -> ObjectOrInvalid<Paths> {
    let entries = match mapping_entries(arena, node) {
        Ok(entries) => entries,
        Err(raw) => return ObjectOrInvalid::Invalid(raw),
    };

    let mut paths = Paths {
        root_node: node,
        paths: IndexMap::new(),
        extensions: extract_extensions(arena, entries),
    };

    for &(key, value) in entries {
        let name = arena.key_string(key);
        if is_extension_key(&name) {
            continue;
        }

        paths
            .paths
            .insert(KeySource::new(name, key), path_item::build(arena, value));
    }

    ObjectOrInvalid::Object(paths)
}
