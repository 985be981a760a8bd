//! Child-edge extraction: which typed nodes hang off a node, in declared
//! field order.
//!
//! Source wrappers (`FieldSource`, `KeySource`) and the salvage sums are
//! transparent here: an `Invalid` position contributes no child, a
//! `Reference` position contributes a `Reference` node, and the synthetic
//! containers (`Paths.paths`, `Responses.responses`, `Callback.expressions`)
//! contribute their entries keyed without a field segment.

use indexmap::IndexMap;
use oas_ast::{
    sources::{Field, FieldSource, KeySource, ObjectOrInvalid, SourceList, SourceMap},
    v30, v31,
};

use crate::{node::NodeRef, path::PathSegment};

/// One traversable child of a node.
#[derive(Debug, Clone)]
pub(crate) struct ChildEdge<'a> {
    /// Field through which the child is reached (the YAML name, or the
    /// container field name for flattened maps).
    pub field: &'static str,
    /// List index or map key, when the field is a collection.
    pub key: Option<PathSegment>,
    /// Flattened containers contribute only their key to formatted paths.
    pub flattened: bool,
    pub node: NodeRef<'a>,
}

/// Types that may contribute a traversable node.
pub(crate) trait AsNodeRef {
    fn as_node_ref(&self) -> Option<NodeRef<'_>>;
}

macro_rules! impl_as_node_ref {
    ($($ty:path => $variant:ident;)*) => {
        $(
            impl AsNodeRef for $ty {
                fn as_node_ref(&self) -> Option<NodeRef<'_>> {
                    Some(NodeRef::$variant(self))
                }
            }
        )*
    };
}

impl_as_node_ref! {
    v30::OpenApi => OpenApi30;
    v30::Info => Info30;
    v30::Contact => Contact30;
    v30::License => License30;
    v30::Server => Server30;
    v30::ServerVariable => ServerVariable30;
    v30::Paths => Paths30;
    v30::PathItem => PathItem30;
    v30::Operation => Operation30;
    v30::Parameter => Parameter30;
    v30::RequestBody => RequestBody30;
    v30::Responses => Responses30;
    v30::Response => Response30;
    v30::Header => Header30;
    v30::MediaType => MediaType30;
    v30::Encoding => Encoding30;
    v30::Example => Example30;
    v30::Link => Link30;
    v30::Callback => Callback30;
    v30::Components => Components30;
    v30::SecurityScheme => SecurityScheme30;
    v30::OAuthFlows => OAuthFlows30;
    v30::OAuthFlow => OAuthFlow30;
    v30::SecurityRequirement => SecurityRequirement30;
    v30::Tag => Tag30;
    v30::ExternalDoc => ExternalDoc30;
    v30::Schema => Schema30;
    v30::Discriminator => Discriminator30;
    v30::Xml => Xml30;
    v30::Reference => Reference30;
    v31::OpenApi => OpenApi31;
    v31::Info => Info31;
    v31::Contact => Contact31;
    v31::License => License31;
    v31::Server => Server31;
    v31::ServerVariable => ServerVariable31;
    v31::Paths => Paths31;
    v31::PathItem => PathItem31;
    v31::Operation => Operation31;
    v31::Parameter => Parameter31;
    v31::RequestBody => RequestBody31;
    v31::Responses => Responses31;
    v31::Response => Response31;
    v31::Header => Header31;
    v31::MediaType => MediaType31;
    v31::Encoding => Encoding31;
    v31::Example => Example31;
    v31::Link => Link31;
    v31::Callback => Callback31;
    v31::Components => Components31;
    v31::SecurityScheme => SecurityScheme31;
    v31::OAuthFlows => OAuthFlows31;
    v31::OAuthFlow => OAuthFlow31;
    v31::SecurityRequirement => SecurityRequirement31;
    v31::Tag => Tag31;
    v31::ExternalDoc => ExternalDoc31;
    v31::Schema => Schema31;
    v31::Discriminator => Discriminator31;
    v31::Xml => Xml31;
    v31::Reference => Reference31;
}

impl<T: AsNodeRef> AsNodeRef for Box<T> {
    fn as_node_ref(&self) -> Option<NodeRef<'_>> {
        (**self).as_node_ref()
    }
}

impl<T: AsNodeRef> AsNodeRef for ObjectOrInvalid<T> {
    fn as_node_ref(&self) -> Option<NodeRef<'_>> {
        match self {
            ObjectOrInvalid::Object(object) => object.as_node_ref(),
            ObjectOrInvalid::Invalid(_) => None,
        }
    }
}

impl<T: AsNodeRef> AsNodeRef for v30::ObjectOrReference<T> {
    fn as_node_ref(&self) -> Option<NodeRef<'_>> {
        match self {
            v30::ObjectOrReference::Object(object) => object.as_node_ref(),
            v30::ObjectOrReference::Reference(reference) => Some(NodeRef::Reference30(reference)),
            v30::ObjectOrReference::Invalid(_) => None,
        }
    }
}

impl<T: AsNodeRef> AsNodeRef for v31::ObjectOrReference<T> {
    fn as_node_ref(&self) -> Option<NodeRef<'_>> {
        match self {
            v31::ObjectOrReference::Object(object) => object.as_node_ref(),
            v31::ObjectOrReference::Reference(reference) => Some(NodeRef::Reference31(reference)),
            v31::ObjectOrReference::Invalid(_) => None,
        }
    }
}

impl AsNodeRef for v30::AdditionalProperties {
    fn as_node_ref(&self) -> Option<NodeRef<'_>> {
        match self {
            v30::AdditionalProperties::Schema(schema) => schema.as_node_ref(),
            v30::AdditionalProperties::Boolean(_) => None,
        }
    }
}

impl AsNodeRef for v31::AdditionalProperties {
    fn as_node_ref(&self) -> Option<NodeRef<'_>> {
        match self {
            v31::AdditionalProperties::Schema(schema) => schema.as_node_ref(),
            v31::AdditionalProperties::Boolean(_) => None,
        }
    }
}

fn object_edge<'a, T: AsNodeRef>(
    edges: &mut Vec<ChildEdge<'a>>,
    field: &'static str,
    value: &'a Field<T>,
) {
    if let Some(source) = value {
        if let Some(node) = source.value.as_node_ref() {
            edges.push(ChildEdge {
                field,
                key: None,
                flattened: false,
                node,
            });
        }
    }
}

fn list_edges<'a, T: AsNodeRef>(
    edges: &mut Vec<ChildEdge<'a>>,
    field: &'static str,
    value: &'a Field<SourceList<T>>,
) {
    let Some(FieldSource {
        value: ObjectOrInvalid::Object(items),
        ..
    }) = value
    else {
        return;
    };

    for (index, item) in items.iter().enumerate() {
        if let Some(node) = item.as_node_ref() {
            edges.push(ChildEdge {
                field,
                key: Some(PathSegment::Index(index)),
                flattened: false,
                node,
            });
        }
    }
}

fn map_edges<'a, T: AsNodeRef>(
    edges: &mut Vec<ChildEdge<'a>>,
    field: &'static str,
    value: &'a Field<SourceMap<T>>,
) {
    let Some(FieldSource {
        value: ObjectOrInvalid::Object(entries),
        ..
    }) = value
    else {
        return;
    };

    for (key, item) in entries {
        if let Some(node) = item.as_node_ref() {
            edges.push(ChildEdge {
                field,
                key: Some(PathSegment::Key(key.value.clone())),
                flattened: false,
                node,
            });
        }
    }
}

fn flattened_map_edges<'a, T: AsNodeRef>(
    edges: &mut Vec<ChildEdge<'a>>,
    field: &'static str,
    entries: &'a IndexMap<KeySource<String>, T>,
) {
    for (key, item) in entries {
        if let Some(node) = item.as_node_ref() {
            edges.push(ChildEdge {
                field,
                key: Some(PathSegment::Key(key.value.clone())),
                flattened: true,
                node,
            });
        }
    }
}

/// All traversable children of a node, in declared field order.
pub(crate) fn children(node: NodeRef<'_>) -> Vec<ChildEdge<'_>> {
    let mut edges = Vec::new();

    match node {
        NodeRef::OpenApi30(doc) => {
            object_edge(&mut edges, "info", &doc.info);
            list_edges(&mut edges, "servers", &doc.servers);
            object_edge(&mut edges, "paths", &doc.paths);
            object_edge(&mut edges, "components", &doc.components);
            list_edges(&mut edges, "security", &doc.security);
            list_edges(&mut edges, "tags", &doc.tags);
            object_edge(&mut edges, "externalDocs", &doc.external_docs);
        }
        NodeRef::OpenApi31(doc) => {
            object_edge(&mut edges, "info", &doc.info);
            list_edges(&mut edges, "servers", &doc.servers);
            object_edge(&mut edges, "paths", &doc.paths);
            map_edges(&mut edges, "webhooks", &doc.webhooks);
            object_edge(&mut edges, "components", &doc.components);
            list_edges(&mut edges, "security", &doc.security);
            list_edges(&mut edges, "tags", &doc.tags);
            object_edge(&mut edges, "externalDocs", &doc.external_docs);
        }

        NodeRef::Info30(info) => {
            object_edge(&mut edges, "contact", &info.contact);
            object_edge(&mut edges, "license", &info.license);
        }
        NodeRef::Info31(info) => {
            object_edge(&mut edges, "contact", &info.contact);
            object_edge(&mut edges, "license", &info.license);
        }

        NodeRef::Contact30(_)
        | NodeRef::Contact31(_)
        | NodeRef::License30(_)
        | NodeRef::License31(_)
        | NodeRef::ServerVariable30(_)
        | NodeRef::ServerVariable31(_)
        | NodeRef::Example30(_)
        | NodeRef::Example31(_)
        | NodeRef::SecurityRequirement30(_)
        | NodeRef::SecurityRequirement31(_)
        | NodeRef::OAuthFlow30(_)
        | NodeRef::OAuthFlow31(_)
        | NodeRef::Discriminator30(_)
        | NodeRef::Discriminator31(_)
        | NodeRef::Xml30(_)
        | NodeRef::Xml31(_)
        | NodeRef::ExternalDoc30(_)
        | NodeRef::ExternalDoc31(_)
        | NodeRef::Reference30(_)
        | NodeRef::Reference31(_) => {}

        NodeRef::Server30(server) => {
            map_edges(&mut edges, "variables", &server.variables);
        }
        NodeRef::Server31(server) => {
            map_edges(&mut edges, "variables", &server.variables);
        }

        NodeRef::Paths30(paths) => {
            flattened_map_edges(&mut edges, "paths", &paths.paths);
        }
        NodeRef::Paths31(paths) => {
            flattened_map_edges(&mut edges, "paths", &paths.paths);
        }

        NodeRef::PathItem30(item) => {
            object_edge(&mut edges, "get", &item.get);
            object_edge(&mut edges, "put", &item.put);
            object_edge(&mut edges, "post", &item.post);
            object_edge(&mut edges, "delete", &item.delete);
            object_edge(&mut edges, "options", &item.options);
            object_edge(&mut edges, "head", &item.head);
            object_edge(&mut edges, "patch", &item.patch);
            object_edge(&mut edges, "trace", &item.trace);
            list_edges(&mut edges, "servers", &item.servers);
            list_edges(&mut edges, "parameters", &item.parameters);
        }
        NodeRef::PathItem31(item) => {
            object_edge(&mut edges, "get", &item.get);
            object_edge(&mut edges, "put", &item.put);
            object_edge(&mut edges, "post", &item.post);
            object_edge(&mut edges, "delete", &item.delete);
            object_edge(&mut edges, "options", &item.options);
            object_edge(&mut edges, "head", &item.head);
            object_edge(&mut edges, "patch", &item.patch);
            object_edge(&mut edges, "trace", &item.trace);
            list_edges(&mut edges, "servers", &item.servers);
            list_edges(&mut edges, "parameters", &item.parameters);
        }

        NodeRef::Operation30(operation) => {
            object_edge(&mut edges, "externalDocs", &operation.external_docs);
            list_edges(&mut edges, "parameters", &operation.parameters);
            object_edge(&mut edges, "requestBody", &operation.request_body);
            object_edge(&mut edges, "responses", &operation.responses);
            map_edges(&mut edges, "callbacks", &operation.callbacks);
            list_edges(&mut edges, "security", &operation.security);
            list_edges(&mut edges, "servers", &operation.servers);
        }
        NodeRef::Operation31(operation) => {
            object_edge(&mut edges, "externalDocs", &operation.external_docs);
            list_edges(&mut edges, "parameters", &operation.parameters);
            object_edge(&mut edges, "requestBody", &operation.request_body);
            object_edge(&mut edges, "responses", &operation.responses);
            map_edges(&mut edges, "callbacks", &operation.callbacks);
            list_edges(&mut edges, "security", &operation.security);
            list_edges(&mut edges, "servers", &operation.servers);
        }

        NodeRef::Parameter30(parameter) => {
            object_edge(&mut edges, "schema", &parameter.schema);
            map_edges(&mut edges, "examples", &parameter.examples);
            map_edges(&mut edges, "content", &parameter.content);
        }
        NodeRef::Parameter31(parameter) => {
            object_edge(&mut edges, "schema", &parameter.schema);
            map_edges(&mut edges, "examples", &parameter.examples);
            map_edges(&mut edges, "content", &parameter.content);
        }

        NodeRef::RequestBody30(body) => {
            map_edges(&mut edges, "content", &body.content);
        }
        NodeRef::RequestBody31(body) => {
            map_edges(&mut edges, "content", &body.content);
        }

        NodeRef::Responses30(responses) => {
            object_edge(&mut edges, "default", &responses.default);
            flattened_map_edges(&mut edges, "responses", &responses.responses);
        }
        NodeRef::Responses31(responses) => {
            object_edge(&mut edges, "default", &responses.default);
            flattened_map_edges(&mut edges, "responses", &responses.responses);
        }

        NodeRef::Response30(response) => {
            map_edges(&mut edges, "headers", &response.headers);
            map_edges(&mut edges, "content", &response.content);
            map_edges(&mut edges, "links", &response.links);
        }
        NodeRef::Response31(response) => {
            map_edges(&mut edges, "headers", &response.headers);
            map_edges(&mut edges, "content", &response.content);
            map_edges(&mut edges, "links", &response.links);
        }

        NodeRef::Header30(header) => {
            object_edge(&mut edges, "schema", &header.schema);
            map_edges(&mut edges, "examples", &header.examples);
            map_edges(&mut edges, "content", &header.content);
        }
        NodeRef::Header31(header) => {
            object_edge(&mut edges, "schema", &header.schema);
            map_edges(&mut edges, "examples", &header.examples);
            map_edges(&mut edges, "content", &header.content);
        }

        NodeRef::MediaType30(media_type) => {
            object_edge(&mut edges, "schema", &media_type.schema);
            map_edges(&mut edges, "examples", &media_type.examples);
            map_edges(&mut edges, "encoding", &media_type.encoding);
        }
        NodeRef::MediaType31(media_type) => {
            object_edge(&mut edges, "schema", &media_type.schema);
            map_edges(&mut edges, "examples", &media_type.examples);
            map_edges(&mut edges, "encoding", &media_type.encoding);
        }

        NodeRef::Encoding30(encoding) => {
            map_edges(&mut edges, "headers", &encoding.headers);
        }
        NodeRef::Encoding31(encoding) => {
            map_edges(&mut edges, "headers", &encoding.headers);
        }

        NodeRef::Link30(link) => {
            object_edge(&mut edges, "server", &link.server);
        }
        NodeRef::Link31(link) => {
            object_edge(&mut edges, "server", &link.server);
        }

        NodeRef::Callback30(callback) => {
            flattened_map_edges(&mut edges, "expressions", &callback.expressions);
        }
        NodeRef::Callback31(callback) => {
            flattened_map_edges(&mut edges, "expressions", &callback.expressions);
        }

        NodeRef::Components30(components) => {
            map_edges(&mut edges, "schemas", &components.schemas);
            map_edges(&mut edges, "responses", &components.responses);
            map_edges(&mut edges, "parameters", &components.parameters);
            map_edges(&mut edges, "examples", &components.examples);
            map_edges(&mut edges, "requestBodies", &components.request_bodies);
            map_edges(&mut edges, "headers", &components.headers);
            map_edges(&mut edges, "securitySchemes", &components.security_schemes);
            map_edges(&mut edges, "links", &components.links);
            map_edges(&mut edges, "callbacks", &components.callbacks);
        }
        NodeRef::Components31(components) => {
            map_edges(&mut edges, "schemas", &components.schemas);
            map_edges(&mut edges, "responses", &components.responses);
            map_edges(&mut edges, "parameters", &components.parameters);
            map_edges(&mut edges, "examples", &components.examples);
            map_edges(&mut edges, "requestBodies", &components.request_bodies);
            map_edges(&mut edges, "headers", &components.headers);
            map_edges(&mut edges, "securitySchemes", &components.security_schemes);
            map_edges(&mut edges, "links", &components.links);
            map_edges(&mut edges, "callbacks", &components.callbacks);
            map_edges(&mut edges, "pathItems", &components.path_items);
        }

        NodeRef::SecurityScheme30(scheme) => {
            object_edge(&mut edges, "flows", &scheme.flows);
        }
        NodeRef::SecurityScheme31(scheme) => {
            object_edge(&mut edges, "flows", &scheme.flows);
        }

        NodeRef::OAuthFlows30(flows) => {
            object_edge(&mut edges, "implicit", &flows.implicit);
            object_edge(&mut edges, "password", &flows.password);
            object_edge(&mut edges, "clientCredentials", &flows.client_credentials);
            object_edge(&mut edges, "authorizationCode", &flows.authorization_code);
        }
        NodeRef::OAuthFlows31(flows) => {
            object_edge(&mut edges, "implicit", &flows.implicit);
            object_edge(&mut edges, "password", &flows.password);
            object_edge(&mut edges, "clientCredentials", &flows.client_credentials);
            object_edge(&mut edges, "authorizationCode", &flows.authorization_code);
        }

        NodeRef::Tag30(tag) => {
            object_edge(&mut edges, "externalDocs", &tag.external_docs);
        }
        NodeRef::Tag31(tag) => {
            object_edge(&mut edges, "externalDocs", &tag.external_docs);
        }

        NodeRef::Schema30(schema) => {
            object_edge(&mut edges, "items", &schema.items);
            map_edges(&mut edges, "properties", &schema.properties);
            object_edge(&mut edges, "additionalProperties", &schema.additional_properties);
            list_edges(&mut edges, "allOf", &schema.all_of);
            list_edges(&mut edges, "oneOf", &schema.one_of);
            list_edges(&mut edges, "anyOf", &schema.any_of);
            object_edge(&mut edges, "not", &schema.not_schema);
            object_edge(&mut edges, "discriminator", &schema.discriminator);
            object_edge(&mut edges, "xml", &schema.xml);
            object_edge(&mut edges, "externalDocs", &schema.external_docs);
        }
        NodeRef::Schema31(schema) => {
            map_edges(&mut edges, "$defs", &schema.defs);
            object_edge(&mut edges, "items", &schema.items);
            list_edges(&mut edges, "prefixItems", &schema.prefix_items);
            object_edge(&mut edges, "contains", &schema.contains);
            object_edge(&mut edges, "unevaluatedItems", &schema.unevaluated_items);
            map_edges(&mut edges, "properties", &schema.properties);
            map_edges(&mut edges, "patternProperties", &schema.pattern_properties);
            object_edge(&mut edges, "additionalProperties", &schema.additional_properties);
            object_edge(&mut edges, "propertyNames", &schema.property_names);
            object_edge(&mut edges, "unevaluatedProperties", &schema.unevaluated_properties);
            map_edges(&mut edges, "dependentSchemas", &schema.dependent_schemas);
            list_edges(&mut edges, "allOf", &schema.all_of);
            list_edges(&mut edges, "oneOf", &schema.one_of);
            list_edges(&mut edges, "anyOf", &schema.any_of);
            object_edge(&mut edges, "not", &schema.not_schema);
            object_edge(&mut edges, "if", &schema.if_schema);
            object_edge(&mut edges, "then", &schema.then_schema);
            object_edge(&mut edges, "else", &schema.else_schema);
            object_edge(&mut edges, "contentSchema", &schema.content_schema);
            object_edge(&mut edges, "discriminator", &schema.discriminator);
            object_edge(&mut edges, "xml", &schema.xml);
            object_edge(&mut edges, "externalDocs", &schema.external_docs);
        }
    }

    edges
}
