//! Static per-type field descriptors.
//!
//! One table per node type and version, in declared field order, the same
//! order the engine visits children in. The tables are compile-time
//! constants, so the "build once, cache per type" requirement is met by
//! construction.

use oas_ast::SpecVersion;

use crate::node::NodeKind;

/// Shape of a fixed field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldShape {
    /// A raw value; never visited as a node.
    Primitive,
    /// A single nested object.
    Object,
    /// A sequence of nested objects.
    List,
    /// A named map of nested objects.
    Map,
    /// A container map flattened into its parent: entries contribute only
    /// their key to formatted paths.
    FlattenedMap,
}

/// Description of one fixed field of a node type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Rust-facing field name.
    pub name: &'static str,
    /// Field name as written in the document.
    pub yaml_name: &'static str,
    /// How the field's value is shaped.
    pub shape: FieldShape,
}

const fn fd(name: &'static str, yaml_name: &'static str, shape: FieldShape) -> FieldDescriptor {
    FieldDescriptor {
        name,
        yaml_name,
        shape,
    }
}

use FieldShape::{FlattenedMap, List, Map, Object, Primitive};

const OPENAPI_30: &[FieldDescriptor] = &[
    fd("openapi", "openapi", Primitive),
    fd("info", "info", Object),
    fd("servers", "servers", List),
    fd("paths", "paths", Object),
    fd("components", "components", Object),
    fd("security", "security", List),
    fd("tags", "tags", List),
    fd("external_docs", "externalDocs", Object),
];

const OPENAPI_31: &[FieldDescriptor] = &[
    fd("openapi", "openapi", Primitive),
    fd("info", "info", Object),
    fd("json_schema_dialect", "jsonSchemaDialect", Primitive),
    fd("servers", "servers", List),
    fd("paths", "paths", Object),
    fd("webhooks", "webhooks", Map),
    fd("components", "components", Object),
    fd("security", "security", List),
    fd("tags", "tags", List),
    fd("external_docs", "externalDocs", Object),
];

const INFO_30: &[FieldDescriptor] = &[
    fd("title", "title", Primitive),
    fd("description", "description", Primitive),
    fd("terms_of_service", "termsOfService", Primitive),
    fd("contact", "contact", Object),
    fd("license", "license", Object),
    fd("version", "version", Primitive),
];

const INFO_31: &[FieldDescriptor] = &[
    fd("title", "title", Primitive),
    fd("summary", "summary", Primitive),
    fd("description", "description", Primitive),
    fd("terms_of_service", "termsOfService", Primitive),
    fd("contact", "contact", Object),
    fd("license", "license", Object),
    fd("version", "version", Primitive),
];

const CONTACT: &[FieldDescriptor] = &[
    fd("name", "name", Primitive),
    fd("url", "url", Primitive),
    fd("email", "email", Primitive),
];

const LICENSE_30: &[FieldDescriptor] = &[
    fd("name", "name", Primitive),
    fd("url", "url", Primitive),
];

const LICENSE_31: &[FieldDescriptor] = &[
    fd("name", "name", Primitive),
    fd("identifier", "identifier", Primitive),
    fd("url", "url", Primitive),
];

const SERVER: &[FieldDescriptor] = &[
    fd("url", "url", Primitive),
    fd("description", "description", Primitive),
    fd("variables", "variables", Map),
];

const SERVER_VARIABLE: &[FieldDescriptor] = &[
    fd("enum_values", "enum", Primitive),
    fd("default", "default", Primitive),
    fd("description", "description", Primitive),
];

const PATHS: &[FieldDescriptor] = &[fd("paths", "paths", FlattenedMap)];

const PATH_ITEM: &[FieldDescriptor] = &[
    fd("ref_path", "$ref", Primitive),
    fd("summary", "summary", Primitive),
    fd("description", "description", Primitive),
    fd("get", "get", Object),
    fd("put", "put", Object),
    fd("post", "post", Object),
    fd("delete", "delete", Object),
    fd("options", "options", Object),
    fd("head", "head", Object),
    fd("patch", "patch", Object),
    fd("trace", "trace", Object),
    fd("servers", "servers", List),
    fd("parameters", "parameters", List),
];

const OPERATION: &[FieldDescriptor] = &[
    fd("tags", "tags", Primitive),
    fd("summary", "summary", Primitive),
    fd("description", "description", Primitive),
    fd("external_docs", "externalDocs", Object),
    fd("operation_id", "operationId", Primitive),
    fd("parameters", "parameters", List),
    fd("request_body", "requestBody", Object),
    fd("responses", "responses", Object),
    fd("callbacks", "callbacks", Map),
    fd("deprecated", "deprecated", Primitive),
    fd("security", "security", List),
    fd("servers", "servers", List),
];

const PARAMETER: &[FieldDescriptor] = &[
    fd("name", "name", Primitive),
    fd("location", "in", Primitive),
    fd("description", "description", Primitive),
    fd("required", "required", Primitive),
    fd("deprecated", "deprecated", Primitive),
    fd("allow_empty_value", "allowEmptyValue", Primitive),
    fd("style", "style", Primitive),
    fd("explode", "explode", Primitive),
    fd("allow_reserved", "allowReserved", Primitive),
    fd("schema", "schema", Object),
    fd("example", "example", Primitive),
    fd("examples", "examples", Map),
    fd("content", "content", Map),
];

const REQUEST_BODY: &[FieldDescriptor] = &[
    fd("description", "description", Primitive),
    fd("content", "content", Map),
    fd("required", "required", Primitive),
];

const RESPONSES: &[FieldDescriptor] = &[
    fd("default", "default", Object),
    fd("responses", "responses", FlattenedMap),
];

const RESPONSE: &[FieldDescriptor] = &[
    fd("description", "description", Primitive),
    fd("headers", "headers", Map),
    fd("content", "content", Map),
    fd("links", "links", Map),
];

const HEADER: &[FieldDescriptor] = &[
    fd("description", "description", Primitive),
    fd("required", "required", Primitive),
    fd("deprecated", "deprecated", Primitive),
    fd("allow_empty_value", "allowEmptyValue", Primitive),
    fd("style", "style", Primitive),
    fd("explode", "explode", Primitive),
    fd("allow_reserved", "allowReserved", Primitive),
    fd("schema", "schema", Object),
    fd("example", "example", Primitive),
    fd("examples", "examples", Map),
    fd("content", "content", Map),
];

const MEDIA_TYPE: &[FieldDescriptor] = &[
    fd("schema", "schema", Object),
    fd("example", "example", Primitive),
    fd("examples", "examples", Map),
    fd("encoding", "encoding", Map),
];

const ENCODING: &[FieldDescriptor] = &[
    fd("content_type", "contentType", Primitive),
    fd("headers", "headers", Map),
    fd("style", "style", Primitive),
    fd("explode", "explode", Primitive),
    fd("allow_reserved", "allowReserved", Primitive),
];

const EXAMPLE: &[FieldDescriptor] = &[
    fd("summary", "summary", Primitive),
    fd("description", "description", Primitive),
    fd("value", "value", Primitive),
    fd("external_value", "externalValue", Primitive),
];

const LINK: &[FieldDescriptor] = &[
    fd("operation_ref", "operationRef", Primitive),
    fd("operation_id", "operationId", Primitive),
    fd("parameters", "parameters", Primitive),
    fd("request_body", "requestBody", Primitive),
    fd("description", "description", Primitive),
    fd("server", "server", Object),
];

const CALLBACK: &[FieldDescriptor] = &[fd("expressions", "expressions", FlattenedMap)];

const COMPONENTS_30: &[FieldDescriptor] = &[
    fd("schemas", "schemas", Map),
    fd("responses", "responses", Map),
    fd("parameters", "parameters", Map),
    fd("examples", "examples", Map),
    fd("request_bodies", "requestBodies", Map),
    fd("headers", "headers", Map),
    fd("security_schemes", "securitySchemes", Map),
    fd("links", "links", Map),
    fd("callbacks", "callbacks", Map),
];

const COMPONENTS_31: &[FieldDescriptor] = &[
    fd("schemas", "schemas", Map),
    fd("responses", "responses", Map),
    fd("parameters", "parameters", Map),
    fd("examples", "examples", Map),
    fd("request_bodies", "requestBodies", Map),
    fd("headers", "headers", Map),
    fd("security_schemes", "securitySchemes", Map),
    fd("links", "links", Map),
    fd("callbacks", "callbacks", Map),
    fd("path_items", "pathItems", Map),
];

const SECURITY_SCHEME: &[FieldDescriptor] = &[
    fd("scheme_type", "type", Primitive),
    fd("description", "description", Primitive),
    fd("name", "name", Primitive),
    fd("location", "in", Primitive),
    fd("scheme", "scheme", Primitive),
    fd("bearer_format", "bearerFormat", Primitive),
    fd("flows", "flows", Object),
    fd("open_id_connect_url", "openIdConnectUrl", Primitive),
];

const OAUTH_FLOWS: &[FieldDescriptor] = &[
    fd("implicit", "implicit", Object),
    fd("password", "password", Object),
    fd("client_credentials", "clientCredentials", Object),
    fd("authorization_code", "authorizationCode", Object),
];

const OAUTH_FLOW: &[FieldDescriptor] = &[
    fd("authorization_url", "authorizationUrl", Primitive),
    fd("token_url", "tokenUrl", Primitive),
    fd("refresh_url", "refreshUrl", Primitive),
    fd("scopes", "scopes", Primitive),
];

const SECURITY_REQUIREMENT: &[FieldDescriptor] =
    &[fd("requirements", "requirements", Primitive)];

const TAG: &[FieldDescriptor] = &[
    fd("name", "name", Primitive),
    fd("description", "description", Primitive),
    fd("external_docs", "externalDocs", Object),
];

const EXTERNAL_DOC: &[FieldDescriptor] = &[
    fd("description", "description", Primitive),
    fd("url", "url", Primitive),
];

const SCHEMA_30: &[FieldDescriptor] = &[
    fd("title", "title", Primitive),
    fd("description", "description", Primitive),
    fd("default", "default", Primitive),
    fd("example", "example", Primitive),
    fd("deprecated", "deprecated", Primitive),
    fd("read_only", "readOnly", Primitive),
    fd("write_only", "writeOnly", Primitive),
    fd("schema_type", "type", Primitive),
    fd("format", "format", Primitive),
    fd("enum_values", "enum", Primitive),
    fd("nullable", "nullable", Primitive),
    fd("multiple_of", "multipleOf", Primitive),
    fd("maximum", "maximum", Primitive),
    fd("exclusive_maximum", "exclusiveMaximum", Primitive),
    fd("minimum", "minimum", Primitive),
    fd("exclusive_minimum", "exclusiveMinimum", Primitive),
    fd("max_length", "maxLength", Primitive),
    fd("min_length", "minLength", Primitive),
    fd("pattern", "pattern", Primitive),
    fd("items", "items", Object),
    fd("max_items", "maxItems", Primitive),
    fd("min_items", "minItems", Primitive),
    fd("unique_items", "uniqueItems", Primitive),
    fd("properties", "properties", Map),
    fd("additional_properties", "additionalProperties", Object),
    fd("required", "required", Primitive),
    fd("max_properties", "maxProperties", Primitive),
    fd("min_properties", "minProperties", Primitive),
    fd("all_of", "allOf", List),
    fd("one_of", "oneOf", List),
    fd("any_of", "anyOf", List),
    fd("not_schema", "not", Object),
    fd("discriminator", "discriminator", Object),
    fd("xml", "xml", Object),
    fd("external_docs", "externalDocs", Object),
];

const SCHEMA_31: &[FieldDescriptor] = &[
    fd("ref_path", "$ref", Primitive),
    fd("schema_dialect", "$schema", Primitive),
    fd("id", "$id", Primitive),
    fd("anchor", "$anchor", Primitive),
    fd("dynamic_anchor", "$dynamicAnchor", Primitive),
    fd("dynamic_ref", "$dynamicRef", Primitive),
    fd("vocabulary", "$vocabulary", Primitive),
    fd("comment", "$comment", Primitive),
    fd("defs", "$defs", Map),
    fd("title", "title", Primitive),
    fd("description", "description", Primitive),
    fd("default", "default", Primitive),
    fd("deprecated", "deprecated", Primitive),
    fd("read_only", "readOnly", Primitive),
    fd("write_only", "writeOnly", Primitive),
    fd("examples", "examples", Primitive),
    fd("schema_type", "type", Primitive),
    fd("format", "format", Primitive),
    fd("enum_values", "enum", Primitive),
    fd("const_value", "const", Primitive),
    fd("multiple_of", "multipleOf", Primitive),
    fd("maximum", "maximum", Primitive),
    fd("exclusive_maximum", "exclusiveMaximum", Primitive),
    fd("minimum", "minimum", Primitive),
    fd("exclusive_minimum", "exclusiveMinimum", Primitive),
    fd("max_length", "maxLength", Primitive),
    fd("min_length", "minLength", Primitive),
    fd("pattern", "pattern", Primitive),
    fd("items", "items", Object),
    fd("prefix_items", "prefixItems", List),
    fd("contains", "contains", Object),
    fd("min_contains", "minContains", Primitive),
    fd("max_contains", "maxContains", Primitive),
    fd("max_items", "maxItems", Primitive),
    fd("min_items", "minItems", Primitive),
    fd("unique_items", "uniqueItems", Primitive),
    fd("unevaluated_items", "unevaluatedItems", Object),
    fd("properties", "properties", Map),
    fd("pattern_properties", "patternProperties", Map),
    fd("additional_properties", "additionalProperties", Object),
    fd("property_names", "propertyNames", Object),
    fd("unevaluated_properties", "unevaluatedProperties", Object),
    fd("required", "required", Primitive),
    fd("max_properties", "maxProperties", Primitive),
    fd("min_properties", "minProperties", Primitive),
    fd("dependent_required", "dependentRequired", Primitive),
    fd("dependent_schemas", "dependentSchemas", Map),
    fd("all_of", "allOf", List),
    fd("one_of", "oneOf", List),
    fd("any_of", "anyOf", List),
    fd("not_schema", "not", Object),
    fd("if_schema", "if", Object),
    fd("then_schema", "then", Object),
    fd("else_schema", "else", Object),
    fd("content_media_type", "contentMediaType", Primitive),
    fd("content_encoding", "contentEncoding", Primitive),
    fd("content_schema", "contentSchema", Object),
    fd("discriminator", "discriminator", Object),
    fd("xml", "xml", Object),
    fd("external_docs", "externalDocs", Object),
    fd("example", "example", Primitive),
];

const DISCRIMINATOR: &[FieldDescriptor] = &[
    fd("property_name", "propertyName", Primitive),
    fd("mapping", "mapping", Primitive),
];

const XML: &[FieldDescriptor] = &[
    fd("name", "name", Primitive),
    fd("namespace", "namespace", Primitive),
    fd("prefix", "prefix", Primitive),
    fd("attribute", "attribute", Primitive),
    fd("wrapped", "wrapped", Primitive),
];

const REFERENCE_30: &[FieldDescriptor] = &[fd("ref_path", "$ref", Primitive)];

const REFERENCE_31: &[FieldDescriptor] = &[
    fd("ref_path", "$ref", Primitive),
    fd("summary", "summary", Primitive),
    fd("description", "description", Primitive),
];

/// Fixed-field descriptors of a node type, in declared (traversal) order.
///
/// Unsupported versions have no typed nodes and yield an empty table.
pub fn field_descriptors(kind: NodeKind, version: SpecVersion) -> &'static [FieldDescriptor] {
    let v31 = match version {
        SpecVersion::V30 => false,
        SpecVersion::V31 => true,
        SpecVersion::V20 | SpecVersion::V32 => return &[],
    };

    match kind {
        NodeKind::OpenApi => {
            if v31 {
                OPENAPI_31
            } else {
                OPENAPI_30
            }
        }
        NodeKind::Info => {
            if v31 {
                INFO_31
            } else {
                INFO_30
            }
        }
        NodeKind::Contact => CONTACT,
        NodeKind::License => {
            if v31 {
                LICENSE_31
            } else {
                LICENSE_30
            }
        }
        NodeKind::Server => SERVER,
        NodeKind::ServerVariable => SERVER_VARIABLE,
        NodeKind::Paths => PATHS,
        NodeKind::PathItem => PATH_ITEM,
        NodeKind::Operation => OPERATION,
        NodeKind::Parameter => PARAMETER,
        NodeKind::RequestBody => REQUEST_BODY,
        NodeKind::Responses => RESPONSES,
        NodeKind::Response => RESPONSE,
        NodeKind::Header => HEADER,
        NodeKind::MediaType => MEDIA_TYPE,
        NodeKind::Encoding => ENCODING,
        NodeKind::Example => EXAMPLE,
        NodeKind::Link => LINK,
        NodeKind::Callback => CALLBACK,
        NodeKind::Components => {
            if v31 {
                COMPONENTS_31
            } else {
                COMPONENTS_30
            }
        }
        NodeKind::SecurityScheme => SECURITY_SCHEME,
        NodeKind::OAuthFlows => OAUTH_FLOWS,
        NodeKind::OAuthFlow => OAUTH_FLOW,
        NodeKind::SecurityRequirement => SECURITY_REQUIREMENT,
        NodeKind::Tag => TAG,
        NodeKind::ExternalDoc => EXTERNAL_DOC,
        NodeKind::Schema => {
            if v31 {
                SCHEMA_31
            } else {
                SCHEMA_30
            }
        }
        NodeKind::Discriminator => DISCRIMINATOR,
        NodeKind::Xml => XML,
        NodeKind::Reference => {
            if v31 {
                REFERENCE_31
            } else {
                REFERENCE_30
            }
        }
    }
}
