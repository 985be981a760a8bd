use http::Method;
use serde_json::Value;

use crate::{
    build::{extract_extensions, is_extension_key, list_field, mapping_entries, object_field, raw_field},
    sources::{Extensions, Field, ObjectOrInvalid, SourceList},
    yaml::{NodeId, YamlArena},
};

use super::{
    build_or_reference, operation, parameter, server, ObjectOrReference, Operation, Parameter,
    Server,
};

/// Path Item Object: the operations available on a single path.
///
/// See <https://spec.openapis.org/oas/v3.0.4#path-item-object>.
#[derive(Debug, Clone, PartialEq)]
pub struct PathItem {
    pub root_node: NodeId,
    /// A reference to an external definition of this path item (YAML name
    /// `$ref`).
    pub ref_path: Field<Value>,
    pub summary: Field<Value>,
    pub description: Field<Value>,
    pub get: Field<ObjectOrInvalid<Operation>>,
    pub put: Field<ObjectOrInvalid<Operation>>,
    pub post: Field<ObjectOrInvalid<Operation>>,
    pub delete: Field<ObjectOrInvalid<Operation>>,
    pub options: Field<ObjectOrInvalid<Operation>>,
    pub head: Field<ObjectOrInvalid<Operation>>,
    pub patch: Field<ObjectOrInvalid<Operation>>,
    pub trace: Field<ObjectOrInvalid<Operation>>,
    pub servers: Field<SourceList<ObjectOrInvalid<Server>>>,
    /// Parameters applicable to every operation under this path.
    pub parameters: Field<SourceList<ObjectOrReference<Parameter>>>,
    pub extensions: Extensions,
}

impl PathItem {
    /// Well-formed operations defined on this path item, keyed by HTTP
    /// method, in field order.
    pub fn methods(&self) -> Vec<(Method, &Operation)> {
        let defined = [
            (Method::GET, &self.get),
            (Method::PUT, &self.put),
            (Method::POST, &self.post),
            (Method::DELETE, &self.delete),
            (Method::OPTIONS, &self.options),
            (Method::HEAD, &self.head),
            (Method::PATCH, &self.patch),
            (Method::TRACE, &self.trace),
        ];

        defined
            .into_iter()
            .filter_map(|(method, field)| {
                let operation = field.as_ref()?.value.as_object()?;
                Some((method, operation))
            })
            .collect()
    }
}

pub fn build(arena: &YamlArena, node: NodeId) -> ObjectOrInvalid<PathItem> {
    let entries = match mapping_entries(arena, node) {
        Ok(entries) => entries,
        Err(raw) => return ObjectOrInvalid::Invalid(raw),
    };

    let mut item = PathItem {
        root_node: node,
        ref_path: None,
        summary: None,
        description: None,
        get: None,
        put: None,
        post: None,
        delete: None,
        options: None,
        head: None,
        patch: None,
        trace: None,
        servers: None,
        parameters: None,
        extensions: extract_extensions(arena, entries),
    };

    for &(key, value) in entries {
        let name = arena.key_string(key);
        if is_extension_key(&name) {
            continue;
        }

        match name.as_str() {
            "$ref" => item.ref_path = Some(raw_field(arena, key, value)),
            "summary" => item.summary = Some(raw_field(arena, key, value)),
            "description" => item.description = Some(raw_field(arena, key, value)),
            "get" => item.get = Some(object_field(arena, key, value, operation::build)),
            "put" => item.put = Some(object_field(arena, key, value, operation::build)),
            "post" => item.post = Some(object_field(arena, key, value, operation::build)),
            "delete" => item.delete = Some(object_field(arena, key, value, operation::build)),
            "options" => item.options = Some(object_field(arena, key, value, operation::build)),
            "head" => item.head = Some(object_field(arena, key, value, operation::build)),
            "patch" => item.patch = Some(object_field(arena, key, value, operation::build)),
            "trace" => item.trace = Some(object_field(arena, key, value, operation::build)),
            "servers" => item.servers = Some(list_field(arena, key, value, server::build)),
            "parameters" => {
                item.parameters = Some(list_field(arena, key, value, |arena, node| {
                    build_or_reference(arena, node, parameter::build)
                }));
            }
            _ => {}
        }
    }

    ObjectOrInvalid::Object(item)
}
