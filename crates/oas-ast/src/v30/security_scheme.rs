use serde_json::Value;

use crate::{
    build::{extract_extensions, is_extension_key, mapping_entries, object_field, raw_field},
    sources::{Extensions, Field, ObjectOrInvalid},
    yaml::{NodeId, YamlArena},
};

use super::{flows, OAuthFlows};

/// Security Scheme Object.
///
/// Which fields are meaningful depends on `type` (`apiKey`, `http`,
/// `oauth2`, `openIdConnect`); everything present is kept.
///
/// See <https://spec.openapis.org/oas/v3.0.4#security-scheme-object>.
#[derive(Debug, Clone, PartialEq)]
pub struct SecurityScheme {
    pub root_node: NodeId,
    /// The type of the scheme (required by the spec; YAML name `type`).
    pub scheme_type: Field<Value>,
    pub description: Field<Value>,
    /// Header, query or cookie parameter name, for `apiKey` schemes.
    pub name: Field<Value>,
    /// Location of the API key (YAML name `in`).
    pub location: Field<Value>,
    /// HTTP authorization scheme, for `http` schemes.
    pub scheme: Field<Value>,
    pub bearer_format: Field<Value>,
    /// Flow configuration, for `oauth2` schemes.
    pub flows: Field<ObjectOrInvalid<OAuthFlows>>,
    pub open_id_connect_url: Field<Value>,
    pub extensions: Extensions,
}

pub fn build(arena: &YamlArena, node: NodeId) -> ObjectOrInvalid<SecurityScheme> {
    let entries = match mapping_entries(arena, node) {
        Ok(entries) => entries,
        Err(raw) => return ObjectOrInvalid::Invalid(raw),
    };

    let mut scheme = SecurityScheme {
        root_node: node,
        scheme_type: None,
        description: None,
        name: None,
        location: None,
        scheme: None,
        bearer_format: None,
        flows: None,
        open_id_connect_url: None,
        extensions: extract_extensions(arena, entries),
    };

    for &(key, value) in entries {
        let name = arena.key_string(key);
        if is_extension_key(&name) {
            continue;
        }

        match name.as_str() {
            "type" => scheme.scheme_type = Some(raw_field(arena, key, value)),
            "description" => scheme.description = Some(raw_field(arena, key, value)),
            "name" => scheme.name = Some(raw_field(arena, key, value)),
            "in" => scheme.location = Some(raw_field(arena, key, value)),
            "scheme" => scheme.scheme = Some(raw_field(arena, key, value)),
            "bearerFormat" => scheme.bearer_format = Some(raw_field(arena, key, value)),
            "flows" => scheme.flows = Some(object_field(arena, key, value, flows::build_flows)),
            "openIdConnectUrl" => {
                scheme.open_id_connect_url = Some(raw_field(arena, key, value));
            }
            _ => {}
        }
    }

    ObjectOrInvalid::Object(scheme)
}
