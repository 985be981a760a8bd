use serde_json::Value;

use crate::{
    build::{extract_extensions, is_extension_key, mapping_entries, object_field, raw_field},
    sources::{Extensions, Field, ObjectOrInvalid},
    yaml::{NodeId, YamlArena},
};

/// OAuth Flows Object: configuration of the supported OAuth flows.
///
/// See <https://spec.openapis.org/oas/v3.0.4#oauth-flows-object>.
#[derive(Debug, Clone, PartialEq)]
pub struct OAuthFlows {
    pub root_node: NodeId,
    pub implicit: Field<ObjectOrInvalid<OAuthFlow>>,
    pub password: Field<ObjectOrInvalid<OAuthFlow>>,
    pub client_credentials: Field<ObjectOrInvalid<OAuthFlow>>,
    pub authorization_code: Field<ObjectOrInvalid<OAuthFlow>>,
    pub extensions: Extensions,
}

/// OAuth Flow Object: one configured flow.
///
/// Which URL fields are required depends on the flow type; this model keeps
/// whatever is present.
///
/// See <https://spec.openapis.org/oas/v3.0.4#oauth-flow-object>.
#[derive(Debug, Clone, PartialEq)]
pub struct OAuthFlow {
    pub root_node: NodeId,
    pub authorization_url: Field<Value>,
    pub token_url: Field<Value>,
    pub refresh_url: Field<Value>,
    /// Scope name → short description, kept raw.
    pub scopes: Field<Value>,
    pub extensions: Extensions,
}

pub fn build_flows(arena: &YamlArena, node: NodeId) -> ObjectOrInvalid<OAuthFlows> {
    let entries = match mapping_entries(arena, node) {
        Ok(entries) => entries,
        Err(raw) => return ObjectOrInvalid::Invalid(raw),
    };

    let mut flows = OAuthFlows {
        root_node: node,
        implicit: None,
        password: None,
        client_credentials: None,
        authorization_code: None,
        extensions: extract_extensions(arena, entries),
    };

    for &(key, value) in entries {
        let name = arena.key_string(key);
        if is_extension_key(&name) {
            continue;
        }

        match name.as_str() {
            "implicit" => flows.implicit = Some(object_field(arena, key, value, build_flow)),
            "password" => flows.password = Some(object_field(arena, key, value, build_flow)),
            "clientCredentials" => {
                flows.client_credentials = Some(object_field(arena, key, value, build_flow));
            }
            "authorizationCode" => {
                flows.authorization_code = Some(object_field(arena, key, value, build_flow));
            }
            _ => {}
        }
    }

    ObjectOrInvalid::Object(flows)
}

pub fn build_flow(arena: &YamlArena, node: NodeId) -> ObjectOrInvalid<OAuthFlow> {
    let entries = match mapping_entries(arena, node) {
        Ok(entries) => entries,
        Err(raw) => return ObjectOrInvalid::Invalid(raw),
    };

    let mut flow = OAuthFlow {
        root_node: node,
        authorization_url: None,
        token_url: None,
        refresh_url: None,
        scopes: None,
        extensions: extract_extensions(arena, entries),
    };

    for &(key, value) in entries {
        let name = arena.key_string(key);
        if is_extension_key(&name) {
            continue;
        }

        match name.as_str() {
            "authorizationUrl" => flow.authorization_url = Some(raw_field(arena, key, value)),
            "tokenUrl" => flow.token_url = Some(raw_field(arena, key, value)),
            "refreshUrl" => flow.refresh_url = Some(raw_field(arena, key, value)),
            "scopes" => flow.scopes = Some(raw_field(arena, key, value)),
            _ => {}
        }
    }

    ObjectOrInvalid::Object(flow)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::yaml::parse_yaml;

    #[test]
    fn builds_authorization_code_flow() {
        let arena = parse_yaml(indoc::indoc! {"
            authorizationCode:
              authorizationUrl: https://auth.example.com/authorize
              tokenUrl: https://auth.example.com/token
              scopes:
                read:pets: read your pets
        "})
        .unwrap();

        let flows = build_flows(&arena, arena.root().unwrap());
        let flows = flows.as_object().unwrap();

        let flow = flows.authorization_code.as_ref().unwrap().value.as_object().unwrap();
        assert_eq!(
            flow.token_url.as_ref().unwrap().value,
            "https://auth.example.com/token",
        );
        assert_eq!(
            flow.scopes.as_ref().unwrap().value,
            json!({"read:pets": "read your pets"}),
        );
    }
}
