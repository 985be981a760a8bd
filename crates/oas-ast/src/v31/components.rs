use crate::{
    build::{extract_extensions, is_extension_key, map_field, mapping_entries},
    sources::{Extensions, Field, ObjectOrInvalid, SourceMap},
    yaml::{NodeId, YamlArena},
};

use super::{
    build_or_reference, callback, example, header, link, parameter, path_item, request_body,
    response, schema, security_scheme, Callback, Example, Header, Link, ObjectOrReference,
    Parameter, PathItem, RequestBody, Response, Schema, SecurityScheme,
};

/// Components Object: reusable objects for the rest of the document.
///
/// Component key syntax (`^[a-zA-Z0-9.\-_]+$`) is a validation concern and
/// is not enforced here.
///
/// See <https://spec.openapis.org/oas/v3.1.1#components-object>.
#[derive(Debug, Clone, PartialEq)]
pub struct Components {
    pub root_node: NodeId,
    /// Schema maps hold schemas directly; a `$ref` entry is a schema whose
    /// `$ref` keyword is set.
    pub schemas: Field<SourceMap<ObjectOrInvalid<Schema>>>,
    pub responses: Field<SourceMap<ObjectOrReference<Response>>>,
    pub parameters: Field<SourceMap<ObjectOrReference<Parameter>>>,
    pub examples: Field<SourceMap<ObjectOrReference<Example>>>,
    pub request_bodies: Field<SourceMap<ObjectOrReference<RequestBody>>>,
    pub headers: Field<SourceMap<ObjectOrReference<Header>>>,
    pub security_schemes: Field<SourceMap<ObjectOrReference<SecurityScheme>>>,
    pub links: Field<SourceMap<ObjectOrReference<Link>>>,
    pub callbacks: Field<SourceMap<ObjectOrReference<Callback>>>,
    /// Reusable path items (new in 3.1).
    pub path_items: Field<SourceMap<ObjectOrReference<PathItem>>>,
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
        path_items: None,
        extensions: extract_extensions(arena, entries),
    };

    for &(key, value) in entries {
        let name = arena.key_string(key);
        if is_extension_key(&name) {
            continue;
        }

        match name.as_str() {
            "schemas" => {
                components.schemas = Some(map_field(arena, key, value, schema::build));
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
            "pathItems" => {
                components.path_items = Some(map_field(arena, key, value, |arena, node| {
                    build_or_reference(arena, node, path_item::build)
                }));
            }
            _ => {}
        }
    }

    ObjectOrInvalid::Object(components)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::yaml::parse_yaml;

    #[test]
    fn builds_component_maps() {
        let arena = parse_yaml(indoc::indoc! {"
            schemas:
              User:
                type: object
                properties:
                  id:
                    type: integer
              Pet:
                $ref: './pet.yaml#/Pet'
            responses:
              NotFound:
                description: entity not found
            securitySchemes:
              api_key:
                type: apiKey
                name: X-Api-Key
                in: header
        "})
        .unwrap();

        let components = build(&arena, arena.root().unwrap());
        let components = components.as_object().unwrap();

        let schemas = components.schemas.as_ref().unwrap().value.as_object().unwrap();
        let names: Vec<_> = schemas.keys().map(|k| k.value.as_str()).collect();
        assert_eq!(names, ["User", "Pet"]);

        // In 3.1 a `$ref` entry is still a schema, with its `$ref` keyword set.
        let pet = schemas.get("Pet").unwrap().as_object().unwrap();
        assert_eq!(pet.ref_path.as_ref().unwrap().value, "./pet.yaml#/Pet");

        let responses = components.responses.as_ref().unwrap().value.as_object().unwrap();
        let not_found = responses.get("NotFound").unwrap().as_object().unwrap();
        assert_eq!(
            not_found.description.as_ref().unwrap().value,
            "entity not found",
        );
    }

    #[test]
    fn non_mapping_component_group_is_preserved() {
        let arena = parse_yaml("schemas: [not, a, mapping]\n").unwrap();

        let components = build(&arena, arena.root().unwrap());
        let components = components.as_object().unwrap();

        let schemas = &components.schemas.as_ref().unwrap().value;
        assert_matches!(schemas, ObjectOrInvalid::Invalid(_));
    }
}
