use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    build::{extract_extensions, is_extension_key, mapping_entries, object_field},
    sources::{Extensions, Field, KeySource, ObjectOrInvalid},
    yaml::{NodeId, YamlArena},
};

use super::{build_or_reference, response, ObjectOrReference, Response};

/// Keys the Responses Object recognizes as status codes: `200`-style exact
/// codes and `2XX`-style ranges (uppercase `X` only).
static STATUS_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[1-5][0-9]{2}|[1-5]XX)$").unwrap());

/// Responses Object: expected responses of an operation, keyed by status
/// code.
///
/// Keys that match neither the status-code patterns nor `default` nor `x-*`
/// are not part of the typed map; validators report them from the source
/// node.
///
/// See <https://spec.openapis.org/oas/v3.0.4#responses-object>.
#[derive(Debug, Clone, PartialEq)]
pub struct Responses {
    pub root_node: NodeId,
    /// Documentation of responses other than the ones declared for specific
    /// status codes.
    pub default: Field<ObjectOrReference<Response>>,
    /// Status code → response, in source order.
    pub responses: IndexMap<KeySource<String>, ObjectOrReference<Response>>,
    pub extensions: Extensions,
}

/// Whether a key string is an acceptable Responses status-code key.
pub fn is_status_code_key(key: &str) -> bool {
    STATUS_CODE.is_match(key)
}

pub fn build(arena: &YamlArena, node: NodeId) -> ObjectOrInvalid<Responses> {
    let entries = match mapping_entries(arena, node) {
        Ok(entries) => entries,
        Err(raw) => return ObjectOrInvalid::Invalid(raw),
    };

    let mut responses = Responses {
        root_node: node,
        default: None,
        responses: IndexMap::new(),
        extensions: extract_extensions(arena, entries),
    };

    for &(key, value) in entries {
        let name = arena.key_string(key);
        if is_extension_key(&name) {
            continue;
        }

        if name == "default" {
            responses.default = Some(object_field(arena, key, value, |arena, node| {
                build_or_reference(arena, node, response::build)
            }));
        } else if is_status_code_key(&name) {
            responses.responses.insert(
                KeySource::new(name, key),
                build_or_reference(arena, value, response::build),
            );
        }
    }

    ObjectOrInvalid::Object(responses)
}
