//! Visitor-based traversal over the typed OpenAPI AST.
//!
//! A [`Visitor`] implements any subset of the per-kind hooks; the engine
//! walks the tree in declared field order, threading a [`NodePath`] that
//! knows the full document position and can render it as an RFC 6901 JSON
//! Pointer or RFC 9535 Normalized JSONPath. Several visitors can share one
//! pass via [`merge_visitors`].
//!
//! # Example
//!
//! ```
//! use oas_traverse::{traverse, Flow, NodePath, NodeRef, PathFormat, Visitor};
//!
//! #[derive(Default)]
//! struct OperationPaths(Vec<String>);
//!
//! impl Visitor for OperationPaths {
//!     fn visit_operation(&mut self, path: &NodePath<'_>) -> Flow {
//!         self.0.push(path.format_path(PathFormat::JsonPointer));
//!         Flow::Continue
//!     }
//! }
//!
//! let parsed = oas_ast::build_document(
//!     "openapi: 3.0.4\ninfo: {title: t, version: '1'}\npaths:\n  /pets:\n    get:\n      responses:\n        '200': {description: ok}\n",
//! )
//! .unwrap();
//!
//! let mut visitor = OperationPaths::default();
//! traverse(NodeRef::document(&parsed.document), &mut visitor);
//!
//! assert_eq!(visitor.0, ["/paths/~1pets/get"]);
//! ```

#![warn(missing_docs)]

mod children;
mod introspect;
mod merge;
mod node;
mod path;
mod traversal;
mod visitor;

pub use self::{
    introspect::{field_descriptors, FieldDescriptor, FieldShape},
    merge::{merge_visitors, MergedVisitor},
    node::{NodeKind, NodeRef},
    path::{format_segments, NodePath, PathFormat, PathSegment},
    traversal::{traverse, traverse_children},
    visitor::{Flow, Visitor},
};
