use crate::{
    build::{extract_extensions, is_extension_key, map_field, mapping_entries},
    sources::{Extensions, Field, ObjectOrInvalid, SourceMap},
    yaml::{NodeId, YamlArena},
};

use super::{
    build_or_reference, callback, example, header, link, parameter, request_body, response,
    schema, security_scheme, Callback, Example, Header, Link, ObjectOrReference, Parameter,
    RequestBody, Response, Schema, SecurityScheme,
};

/// Components Object: reusable objects for the rest of the document.
///
/// Component key syntax (`^[a-zA-Z0-9.\-_]+$`) is a validation concern and
/// is not enforced here.
///
/// See <https://spec.openapis.org/oas/v3.0.4#components-object>.
#[derive(Debug, Clone, PartialEq)]
pub struct Components {
    pub root_node: NodeId,
    pub schemas: Field<SourceMap<ObjectOrReference<Schema>>>,
    pub responses: Field<SourceMap<ObjectOrReference<Response>>>,
    pub parameters: Field<SourceMap<ObjectOrReference<Parameter>>>,
    pub examples: Field<SourceMap<ObjectOrReference<Example>>>,
    pub request_bodies: Field<SourceMap<ObjectOrReference<RequestBody>>>,
    pub headers: Field<SourceMap<ObjectOrReference<Header>>>,
    pub security_schemes: Field<SourceMap<ObjectOrReference<SecurityScheme>>>,
    pub links: Field<SourceMap<ObjectOrReference<Link>>>,
    pub callbacks: Field<SourceMap<ObjectOrReference<Callback>>>,
    pub extensions: Extensions,
}

pub fn build(arena: &YamlArena, node: NodeId) -> ObjectOrInvalid<Components> {
    let entries = match mapping_entries(arena, node) {
        Ok(entries) => entries,
        Err(raw) => return ObjectOrInvalid::Invalid(raw),
    };

    let mut components = Components {
        root_node: node,
        schemas: None,
        responses: None,
        parameters: None,
        examples: None,
        request_bodies: None,
        headers: None,
        security_schemes: None,
        links: None,
        callbacks: None,
        extensions: extract_extensions(arena, entries),
    };

    for &(key, value) in entries {
        let name = arena.key_string(key);
        if is_extension_key(&name) {
            continue;
        }

        match name.as_str() {
            "schemas" => {
                components.schemas = Some(map_field(arena, key, value, |arena, node| {
                    build_or_reference(arena, node, schema::build)
                }));
            }
            "responses" => {
                components.responses = Some(map_field(arena, key, value, |arena, node| {
                    build_or_reference(arena, node, response::build)
                }));
            }
            "parameters" => {
                components.parameters = Some(map_field(arena, key, value, |arena, node| {
                    build_or_reference(arena, node, parameter::build)
                }));
            }
            "examples" => {
                components.examples = Some(map_field(arena, key, value, |arena, node| {
                    build_or_reference(arena, node, example::build)
                }));
            }
            "requestBodies" => {
                components.request_bodies = Some(map_field(arena, key, value, |arena, node| {
                    build_or_reference(arena, node, request_body::build)
                }));
            }
            "headers" => {
                components.headers = Some(map_field(arena, key, value, |arena, node| {
                    build_or_reference(arena, node, header::build)
                }));
            }
            "securitySchemes" => {
                components.security_schemes = Some(map_field(arena, key, value, |arena, node| {
                    build_or_reference(arena, node, security_scheme::build)
                }));
            }
            "links" => {
                components.links = Some(map_field(arena, key, value, |arena, node| {
                    build_or_reference(arena, node, link::build)
                }));
            }
            "callbacks" => {
                components.callbacks = Some(map_field(arena, key, value, |arena, node| {
                    build_or_reference(arena, node, callback::build)
                }));
            }
            _ => {}
        }
    }

    ObjectOrInvalid::Object(components)
}
