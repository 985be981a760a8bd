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
/// See <https://spec.openapis.org/oas/v3.1.1#responses-object>.
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

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::yaml::parse_yaml;

    fn built(yaml: &str) -> Responses {
        let arena = parse_yaml(yaml).unwrap();
        match build(&arena, arena.root().unwrap()) {
            ObjectOrInvalid::Object(responses) => responses,
            ObjectOrInvalid::Invalid(_) => panic!("expected a Responses object"),
        }
    }

    #[test]
    fn status_codes_and_default() {
        let responses = built(indoc::indoc! {"
            '200':
              description: ok
            '404':
              description: not found
            default:
              description: unexpected error
        "});

        assert_eq!(responses.responses.len(), 2);
        assert!(responses.default.is_some());

        let ok = responses.responses.get("200").unwrap().as_object().unwrap();
        assert_eq!(ok.description.as_ref().unwrap().value, "ok");
    }

    #[test]
    fn invalid_status_keys_are_dropped() {
        let responses = built(indoc::indoc! {"
            '99':
              description: too low
            '200':
              description: ok
            '600':
              description: too high
            '0':
              description: zero
            '999':
              description: way too high
            invalidKey:
              description: not a code
        "});

        let keys: Vec<_> = responses.responses.keys().map(|k| k.value.as_str()).collect();
        assert_eq!(keys, ["200"]);
    }

    #[test]
    fn wildcard_patterns() {
        let responses = built(indoc::indoc! {"
            1XX:
              description: informational
            5XX:
              description: server error
            6XX:
              description: invalid
            2xx:
              description: lowercase is invalid
            '100':
              description: continue
            '599':
              description: boundary
        "});

        let keys: Vec<_> = responses.responses.keys().map(|k| k.value.as_str()).collect();
        assert_eq!(keys, ["1XX", "5XX", "100", "599"]);
    }

    #[test]
    fn extensions_survive_key_filtering() {
        let responses = built(indoc::indoc! {"
            '200':
              description: ok
            x-response-codes: [200, 404]
        "});

        assert_eq!(responses.extensions.len(), 1);
        assert!(responses.extensions.get("x-response-codes").is_some());
    }

    #[test]
    fn invalid_response_value_preserved() {
        let responses = built("'200': invalid-string-not-object\n");

        let response = responses.responses.get("200").unwrap();
        assert_matches!(response, ObjectOrReference::Invalid(_));

        let ObjectOrReference::Invalid(raw) = response else {
            unreachable!();
        };
        assert_eq!(raw.value, "invalid-string-not-object");
    }

    #[test]
    fn reference_values_discriminate() {
        let responses = built("'404': {$ref: '#/components/responses/NotFound'}\n");

        let response = responses.responses.get("404").unwrap();
        assert_matches!(response, ObjectOrReference::Reference(_));
    }
}
