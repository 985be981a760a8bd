use serde_json::Value;

use crate::{
    build::{extract_extensions, is_extension_key, mapping_entries, object_field, raw_field},
    sources::{Extensions, Field, ObjectOrInvalid},
    yaml::{NodeId, YamlArena},
};

use super::{server, Server};

/// Link Object: a design-time link for a response.
///
/// `parameters` values and `requestBody` are runtime expressions or literal
/// values; both are opaque to this model and kept raw.
///
/// See <https://spec.openapis.org/oas/v3.0.4#link-object>.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub root_node: NodeId,
    pub operation_ref: Field<Value>,
    pub operation_id: Field<Value>,
    pub parameters: Field<Value>,
    pub request_body: Field<Value>,
    pub description: Field<Value>,
    pub server: Field<ObjectOrInvalid<Server>>,
    pub extensions: Extensions,
}

pub fn build(arena: &YamlArena, node: NodeId) -> ObjectOrInvalid<Link> {
    let entries = match mapping_entries(arena, node) {
        Ok(entries) => entries,
        Err(raw) => return ObjectOrInvalid::Invalid(raw),
    };

    let mut link = Link {
        root_node: node,
        operation_ref: None,
        operation_id: None,
        parameters: None,
        request_body: None,
        description: None,
        server: None,
        extensions: extract_extensions(arena, entries),
    };

    for &(key, value) in entries {
        let name = arena.key_string(key);
        if is_extension_key(&name) {
            continue;
        }

        match name.as_str() {
            "operationRef" => link.operation_ref = Some(raw_field(arena, key, value)),
            "operationId" => link.operation_id = Some(raw_field(arena, key, value)),
            "parameters" => link.parameters = Some(raw_field(arena, key, value)),
            "requestBody" => link.request_body = Some(raw_field(arena, key, value)),
            "description" => link.description = Some(raw_field(arena, key, value)),
            "server" => link.server = Some(object_field(arena, key, value, server::build)),
            _ => {}
        }
    }

    ObjectOrInvalid::Object(link)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::yaml::parse_yaml;

    #[test]
    fn runtime_expressions_stay_opaque() {
        let arena = parse_yaml(indoc::indoc! {"
            operationId: getUserAddress
            parameters:
              userId: $request.path.id
        "})
        .unwrap();

        let link = build(&arena, arena.root().unwrap());
        let link = link.as_object().unwrap();

        assert_eq!(
            link.parameters.as_ref().unwrap().value,
            json!({"userId": "$request.path.id"}),
        );
    }
}
