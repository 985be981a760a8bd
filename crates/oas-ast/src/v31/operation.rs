use serde_json::Value;

use crate::{
    build::{extract_extensions, is_extension_key, list_field, map_field, mapping_entries, object_field, raw_field},
    sources::{Extensions, Field, ObjectOrInvalid, SourceList, SourceMap},
    yaml::{NodeId, YamlArena},
};

use super::{
    build_or_reference, callback, external_doc, parameter, request_body, responses,
    security_requirement, server, Callback, ExternalDoc, ObjectOrReference, Parameter,
    RequestBody, Responses, SecurityRequirement, Server,
};

/// Operation Object: a single API operation on a path.
///
/// See <https://spec.openapis.org/oas/v3.1.1#operation-object>.
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    pub root_node: NodeId,
    /// Tags for API documentation control; plain strings, kept raw.
    pub tags: Field<Value>,
    pub summary: Field<Value>,
    pub description: Field<Value>,
    pub external_docs: Field<ObjectOrInvalid<ExternalDoc>>,
    /// Unique identifier of the operation within the document.
    pub operation_id: Field<Value>,
    pub parameters: Field<SourceList<ObjectOrReference<Parameter>>>,
    pub request_body: Field<ObjectOrReference<RequestBody>>,
    /// Expected responses (required by the spec).
    pub responses: Field<ObjectOrInvalid<Responses>>,
    /// Callback name → callback definition.
    pub callbacks: Field<SourceMap<ObjectOrReference<Callback>>>,
    pub deprecated: Field<Value>,
    pub security: Field<SourceList<ObjectOrInvalid<SecurityRequirement>>>,
    pub servers: Field<SourceList<ObjectOrInvalid<Server>>>,
    pub extensions: Extensions,
}

pub fn build(arena: &YamlArena, node: NodeId) -> ObjectOrInvalid<Operation> {
    let entries = match mapping_entries(arena, node) {
        Ok(entries) => entries,
        Err(raw) => return ObjectOrInvalid::Invalid(raw),
    };

    let mut operation = Operation {
        root_node: node,
        tags: None,
        summary: None,
        description: None,
        external_docs: None,
        operation_id: None,
        parameters: None,
        request_body: None,
        responses: None,
        callbacks: None,
        deprecated: None,
        security: None,
        servers: None,
        extensions: extract_extensions(arena, entries),
    };

    for &(key, value) in entries {
        let name = arena.key_string(key);
        if is_extension_key(&name) {
            continue;
        }

        match name.as_str() {
            "tags" => operation.tags = Some(raw_field(arena, key, value)),
            "summary" => operation.summary = Some(raw_field(arena, key, value)),
            "description" => operation.description = Some(raw_field(arena, key, value)),
            "externalDocs" => {
                operation.external_docs =
                    Some(object_field(arena, key, value, external_doc::build));
            }
            "operationId" => operation.operation_id = Some(raw_field(arena, key, value)),
            "parameters" => {
                operation.parameters = Some(list_field(arena, key, value, |arena, node| {
                    build_or_reference(arena, node, parameter::build)
                }));
            }
            "requestBody" => {
                operation.request_body = Some(object_field(arena, key, value, |arena, node| {
                    build_or_reference(arena, node, request_body::build)
                }));
            }
            "responses" => {
                operation.responses = Some(object_field(arena, key, value, responses::build));
            }
            "callbacks" => {
                operation.callbacks = Some(map_field(arena, key, value, |arena, node| {
                    build_or_reference(arena, node, callback::build)
                }));
            }
            "deprecated" => operation.deprecated = Some(raw_field(arena, key, value)),
            "security" => {
                operation.security =
                    Some(list_field(arena, key, value, security_requirement::build));
            }
            "servers" => operation.servers = Some(list_field(arena, key, value, server::build)),
            _ => {}
        }
    }

    ObjectOrInvalid::Object(operation)
}
