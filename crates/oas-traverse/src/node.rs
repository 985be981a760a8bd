//! Borrowed references into a typed document, tagged by node type.

use oas_ast::{v30, v31, Document};

/// Version-independent tag of a node's type.
///
/// Hook dispatch works on kinds, so a single visitor serves both document
/// versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum NodeKind {
    OpenApi,
    Info,
    Contact,
    License,
    Server,
    ServerVariable,
    Paths,
    PathItem,
    Operation,
    Parameter,
    RequestBody,
    Responses,
    Response,
    Header,
    MediaType,
    Encoding,
    Example,
    Link,
    Callback,
    Components,
    SecurityScheme,
    OAuthFlows,
    OAuthFlow,
    SecurityRequirement,
    Tag,
    ExternalDoc,
    Schema,
    Discriminator,
    Xml,
    Reference,
}

/// A borrowed AST node of either version.
#[derive(Debug, Clone, Copy)]
#[allow(missing_docs)]
pub enum NodeRef<'a> {
    OpenApi30(&'a v30::OpenApi),
    Info30(&'a v30::Info),
    Contact30(&'a v30::Contact),
    License30(&'a v30::License),
    Server30(&'a v30::Server),
    ServerVariable30(&'a v30::ServerVariable),
    Paths30(&'a v30::Paths),
    PathItem30(&'a v30::PathItem),
    Operation30(&'a v30::Operation),
    Parameter30(&'a v30::Parameter),
    RequestBody30(&'a v30::RequestBody),
    Responses30(&'a v30::Responses),
    Response30(&'a v30::Response),
    Header30(&'a v30::Header),
    MediaType30(&'a v30::MediaType),
    Encoding30(&'a v30::Encoding),
    Example30(&'a v30::Example),
    Link30(&'a v30::Link),
    Callback30(&'a v30::Callback),
    Components30(&'a v30::Components),
    SecurityScheme30(&'a v30::SecurityScheme),
    OAuthFlows30(&'a v30::OAuthFlows),
    OAuthFlow30(&'a v30::OAuthFlow),
    SecurityRequirement30(&'a v30::SecurityRequirement),
    Tag30(&'a v30::Tag),
    ExternalDoc30(&'a v30::ExternalDoc),
    Schema30(&'a v30::Schema),
    Discriminator30(&'a v30::Discriminator),
    Xml30(&'a v30::Xml),
    Reference30(&'a v30::Reference),

    OpenApi31(&'a v31::OpenApi),
    Info31(&'a v31::Info),
    Contact31(&'a v31::Contact),
    License31(&'a v31::License),
    Server31(&'a v31::Server),
    ServerVariable31(&'a v31::ServerVariable),
    Paths31(&'a v31::Paths),
    PathItem31(&'a v31::PathItem),
    Operation31(&'a v31::Operation),
    Parameter31(&'a v31::Parameter),
    RequestBody31(&'a v31::RequestBody),
    Responses31(&'a v31::Responses),
    Response31(&'a v31::Response),
    Header31(&'a v31::Header),
    MediaType31(&'a v31::MediaType),
    Encoding31(&'a v31::Encoding),
    Example31(&'a v31::Example),
    Link31(&'a v31::Link),
    Callback31(&'a v31::Callback),
    Components31(&'a v31::Components),
    SecurityScheme31(&'a v31::SecurityScheme),
    OAuthFlows31(&'a v31::OAuthFlows),
    OAuthFlow31(&'a v31::OAuthFlow),
    SecurityRequirement31(&'a v31::SecurityRequirement),
    Tag31(&'a v31::Tag),
    ExternalDoc31(&'a v31::ExternalDoc),
    Schema31(&'a v31::Schema),
    Discriminator31(&'a v31::Discriminator),
    Xml31(&'a v31::Xml),
    Reference31(&'a v31::Reference),
}

impl<'a> NodeRef<'a> {
    /// Root node reference of a typed document.
    pub fn document(document: &'a Document) -> Self {
        match document {
            Document::V30(root) => NodeRef::OpenApi30(root),
            Document::V31(root) => NodeRef::OpenApi31(root),
        }
    }

    /// The version-independent type tag of this node.
    pub fn kind(self) -> NodeKind {
        match self {
            NodeRef::OpenApi30(_) | NodeRef::OpenApi31(_) => NodeKind::OpenApi,
            NodeRef::Info30(_) | NodeRef::Info31(_) => NodeKind::Info,
            NodeRef::Contact30(_) | NodeRef::Contact31(_) => NodeKind::Contact,
            NodeRef::License30(_) | NodeRef::License31(_) => NodeKind::License,
            NodeRef::Server30(_) | NodeRef::Server31(_) => NodeKind::Server,
            NodeRef::ServerVariable30(_) | NodeRef::ServerVariable31(_) => NodeKind::ServerVariable,
            NodeRef::Paths30(_) | NodeRef::Paths31(_) => NodeKind::Paths,
            NodeRef::PathItem30(_) | NodeRef::PathItem31(_) => NodeKind::PathItem,
            NodeRef::Operation30(_) | NodeRef::Operation31(_) => NodeKind::Operation,
            NodeRef::Parameter30(_) | NodeRef::Parameter31(_) => NodeKind::Parameter,
            NodeRef::RequestBody30(_) | NodeRef::RequestBody31(_) => NodeKind::RequestBody,
            NodeRef::Responses30(_) | NodeRef::Responses31(_) => NodeKind::Responses,
            NodeRef::Response30(_) | NodeRef::Response31(_) => NodeKind::Response,
            NodeRef::Header30(_) | NodeRef::Header31(_) => NodeKind::Header,
            NodeRef::MediaType30(_) | NodeRef::MediaType31(_) => NodeKind::MediaType,
            NodeRef::Encoding30(_) | NodeRef::Encoding31(_) => NodeKind::Encoding,
            NodeRef::Example30(_) | NodeRef::Example31(_) => NodeKind::Example,
            NodeRef::Link30(_) | NodeRef::Link31(_) => NodeKind::Link,
            NodeRef::Callback30(_) | NodeRef::Callback31(_) => NodeKind::Callback,
            NodeRef::Components30(_) | NodeRef::Components31(_) => NodeKind::Components,
            NodeRef::SecurityScheme30(_) | NodeRef::SecurityScheme31(_) => NodeKind::SecurityScheme,
            NodeRef::OAuthFlows30(_) | NodeRef::OAuthFlows31(_) => NodeKind::OAuthFlows,
            NodeRef::OAuthFlow30(_) | NodeRef::OAuthFlow31(_) => NodeKind::OAuthFlow,
            NodeRef::SecurityRequirement30(_) | NodeRef::SecurityRequirement31(_) => {
                NodeKind::SecurityRequirement
            }
            NodeRef::Tag30(_) | NodeRef::Tag31(_) => NodeKind::Tag,
            NodeRef::ExternalDoc30(_) | NodeRef::ExternalDoc31(_) => NodeKind::ExternalDoc,
            NodeRef::Schema30(_) | NodeRef::Schema31(_) => NodeKind::Schema,
            NodeRef::Discriminator30(_) | NodeRef::Discriminator31(_) => NodeKind::Discriminator,
            NodeRef::Xml30(_) | NodeRef::Xml31(_) => NodeKind::Xml,
            NodeRef::Reference30(_) | NodeRef::Reference31(_) => NodeKind::Reference,
        }
    }

    /// The operation behind this reference, when it is one (either version's
    /// operation id is a common want in visitors).
    pub fn as_operation30(self) -> Option<&'a v30::Operation> {
        match self {
            NodeRef::Operation30(operation) => Some(operation),
            _ => None,
        }
    }

    /// See [`NodeRef::as_operation30`].
    pub fn as_operation31(self) -> Option<&'a v31::Operation> {
        match self {
            NodeRef::Operation31(operation) => Some(operation),
            _ => None,
        }
    }
}
