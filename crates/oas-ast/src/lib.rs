//! Source-fidelity typed AST for OpenAPI v3.0.x and v3.1.x documents.
//!
//! Parsing happens in two stages: a span-preserving YAML composer builds a
//! generic node [arena](yaml::YamlArena), then a version-dispatched builder
//! turns the root mapping into a typed object tree where every fixed field
//! keeps its key and value nodes, extensions keep source order, and values
//! of the wrong shape are preserved raw instead of dropped.
//!
//! # Example
//!
//! ```
//! let parsed = oas_ast::build_document(
//!     "openapi: 3.0.4\ninfo: {title: Pets, version: '1.0'}\npaths: {}\n",
//! )
//! .unwrap();
//!
//! let document = parsed.document.as_v30().unwrap();
//! assert_eq!(document.openapi.as_ref().unwrap().value, "3.0.4");
//!
//! let info = document.info.as_ref().unwrap().value.as_object().unwrap();
//! assert_eq!(info.title.as_ref().unwrap().value, "Pets");
//! ```

mod build;
mod builder;
mod error;

pub mod sources;
pub mod v30;
pub mod v31;
pub mod version;
pub mod yaml;

pub use self::{
    builder::{build_document, Document, ParsedDocument},
    error::Error,
    version::SpecVersion,
};
