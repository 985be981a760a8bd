use serde_json::Value;

use crate::{
    build::{extract_extensions, is_extension_key, list_field, mapping_entries, object_field, raw_field},
    sources::{Extensions, Field, ObjectOrInvalid, SourceList},
    yaml::{NodeId, YamlArena},
};

use super::{
    components, external_doc, info, paths, security_requirement, server, tag, Components,
    ExternalDoc, Info, Paths, SecurityRequirement, Server, Tag,
};

/// OpenAPI Object: the root of an OpenAPI 3.0 document.
///
/// `openapi`, `info` and `paths` are required by the spec; their absence is
/// a validation finding, not a build failure.
///
/// See <https://spec.openapis.org/oas/v3.0.4#openapi-object>.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenApi {
    pub root_node: NodeId,
    /// The version number of the OpenAPI Specification in use.
    pub openapi: Field<Value>,
    pub info: Field<ObjectOrInvalid<Info>>,
    pub servers: Field<SourceList<ObjectOrInvalid<Server>>>,
    pub paths: Field<ObjectOrInvalid<Paths>>,
    pub components: Field<ObjectOrInvalid<Components>>,
    pub security: Field<SourceList<ObjectOrInvalid<SecurityRequirement>>>,
    pub tags: Field<SourceList<ObjectOrInvalid<Tag>>>,
    pub external_docs: Field<ObjectOrInvalid<ExternalDoc>>,
    pub extensions: Extensions,
}

pub fn build(arena: &YamlArena, node: NodeId) -> ObjectOrInvalid<OpenApi> {
    let entries = match mapping_entries(arena, node) {
        Ok(entries) => entries,
        Err(raw) => return ObjectOrInvalid::Invalid(raw),
    };

    let mut document = OpenApi {
        root_node: node,
        openapi: None,
        info: None,
        servers: None,
        paths: None,
        components: None,
        security: None,
        tags: None,
        external_docs: None,
        extensions: extract_extensions(arena, entries),
    };

    for &(key, value) in entries {
        let name = arena.key_string(key);
        if is_extension_key(&name) {
            continue;
        }

        match name.as_str() {
            "openapi" => document.openapi = Some(raw_field(arena, key, value)),
            "info" => document.info = Some(object_field(arena, key, value, info::build)),
            "servers" => document.servers = Some(list_field(arena, key, value, server::build)),
            "paths" => document.paths = Some(object_field(arena, key, value, paths::build)),
            "components" => {
                document.components = Some(object_field(arena, key, value, components::build));
            }
            "security" => {
                document.security =
                    Some(list_field(arena, key, value, security_requirement::build));
            }
            "tags" => document.tags = Some(list_field(arena, key, value, tag::build)),
            "externalDocs" => {
                document.external_docs = Some(object_field(arena, key, value, external_doc::build));
            }
            _ => {}
        }
    }

    ObjectOrInvalid::Object(document)
}
