use serde_json::Value;

use crate::{
    build::{extract_extensions, is_extension_key, map_field, mapping_entries, raw_field},
    sources::{Extensions, Field, ObjectOrInvalid, SourceMap},
    yaml::{NodeId, YamlArena},
};

/// Server Object: connectivity information for a target server.
///
/// See <https://spec.openapis.org/oas/v3.1.1#server-object>.
#[derive(Debug, Clone, PartialEq)]
pub struct Server {
    pub root_node: NodeId,
    /// A URL to the target host; may be relative and may contain
    /// `{variable}` substitutions (required by the spec).
    pub url: Field<Value>,
    pub description: Field<Value>,
    /// Variable name → substitution value.
    pub variables: Field<SourceMap<ObjectOrInvalid<ServerVariable>>>,
    pub extensions: Extensions,
}

/// Server Variable Object for server URL template substitution.
///
/// See <https://spec.openapis.org/oas/v3.1.1#server-variable-object>.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerVariable {
    pub root_node: NodeId,
    /// Enumeration of allowed substitution values.
    pub enum_values: Field<Value>,
    /// The default substitution value (required by the spec).
    pub default: Field<Value>,
    pub description: Field<Value>,
    pub extensions: Extensions,
}

pub fn build(arena: &YamlArena, node: NodeId) -> ObjectOrInvalid<Server> {
    let entries = match mapping_entries(arena, node) {
        Ok(entries) => entries,
        Err(raw) => return ObjectOrInvalid::Invalid(raw),
    };

    let mut server = Server {
        root_node: node,
        url: None,
        description: None,
        variables: None,
        extensions: extract_extensions(arena, entries),
    };

    for &(key, value) in entries {
        let name = arena.key_string(key);
        if is_extension_key(&name) {
            continue;
        }

        match name.as_str() {
            "url" => server.url = Some(raw_field(arena, key, value)),
            "description" => server.description = Some(raw_field(arena, key, value)),
            "variables" => {
                server.variables = Some(map_field(arena, key, value, build_variable));
            }
            _ => {}
        }
    }

    ObjectOrInvalid::Object(server)
}

pub fn build_variable(arena: &YamlArena, node: NodeId) -> ObjectOrInvalid<ServerVariable> {
    let entries = match mapping_entries(arena, node) {
        Ok(entries) => entries,
        Err(raw) => return ObjectOrInvalid::Invalid(raw),
    };

    let mut variable = ServerVariable {
        root_node: node,
        enum_values: None,
        default: None,
        description: None,
        extensions: extract_extensions(arena, entries),
    };

    for &(key, value) in entries {
        let name = arena.key_string(key);
        if is_extension_key(&name) {
            continue;
        }

        match name.as_str() {
            "enum" => variable.enum_values = Some(raw_field(arena, key, value)),
            "default" => variable.default = Some(raw_field(arena, key, value)),
            "description" => variable.description = Some(raw_field(arena, key, value)),
            _ => {}
        }
    }

    ObjectOrInvalid::Object(variable)
}
