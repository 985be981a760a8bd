//! Typed low-level AST for OpenAPI v3.0.x documents.
//!
//! One module per specification object. Each exposes the object struct and a
//! `build` function taking the arena and a node id; positions that admit a
//! `$ref` go through [`build_or_reference`](r#ref::build_or_reference).
//!
//! These are plumbing models: they preserve what the source says, including
//! values of the wrong shape, and leave judgement to validators.

mod callback;
mod components;
mod contact;
mod discriminator;
mod encoding;
mod example;
mod external_doc;
mod flows;
mod header;
mod info;
mod license;
mod link;
mod media_type;
mod openapi;
mod operation;
mod parameter;
mod path_item;
mod paths;
mod r#ref;
mod request_body;
mod response;
mod responses;
mod schema;
mod security_requirement;
mod security_scheme;
mod server;
mod tag;
mod xml;

pub use self::{
    callback::Callback,
    components::Components,
    contact::Contact,
    discriminator::Discriminator,
    encoding::Encoding,
    example::Example,
    external_doc::ExternalDoc,
    flows::{OAuthFlow, OAuthFlows},
    header::Header,
    info::Info,
    license::License,
    link::Link,
    media_type::MediaType,
    openapi::OpenApi,
    operation::Operation,
    parameter::Parameter,
    path_item::PathItem,
    paths::Paths,
    r#ref::{ObjectOrReference, Reference},
    request_body::RequestBody,
    response::Response,
    responses::Responses,
    schema::{AdditionalProperties, Schema},
    security_requirement::SecurityRequirement,
    security_scheme::SecurityScheme,
    server::{Server, ServerVariable},
    tag::Tag,
    xml::Xml,
};

pub use self::openapi::build as build_openapi;

pub use self::{
    callback::build as build_callback, components::build as build_components,
    contact::build as build_contact, discriminator::build as build_discriminator,
    encoding::build as build_encoding, example::build as build_example,
    external_doc::build as build_external_doc, flows::build_flow as build_oauth_flow,
    flows::build_flows as build_oauth_flows, header::build as build_header,
    info::build as build_info, license::build as build_license, link::build as build_link,
    media_type::build as build_media_type, operation::build as build_operation,
    parameter::build as build_parameter, path_item::build as build_path_item,
    paths::build as build_paths, r#ref::build_or_reference,
    request_body::build as build_request_body, response::build as build_response,
    responses::build as build_responses, schema::build as build_schema,
    security_requirement::build as build_security_requirement,
    security_scheme::build as build_security_scheme, server::build as build_server,
    server::build_variable as build_server_variable, tag::build as build_tag,
    xml::build as build_xml,
};
