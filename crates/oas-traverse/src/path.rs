//! Traversal context: where a node sits in the document.

use std::fmt::Write as _;

use crate::{
    children::ChildEdge,
    node::NodeRef,
    traversal,
    visitor::Visitor,
};

/// One token of a document path: a member name or an array index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// An object member name.
    Key(String),
    /// An array index.
    Index(usize),
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        PathSegment::Key(key.to_owned())
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        PathSegment::Index(index)
    }
}

/// Output syntax for [`NodePath::format_path`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathFormat {
    /// RFC 6901 JSON Pointer, e.g. `/paths/~1pets/get/responses/200`.
    JsonPointer,
    /// RFC 9535 Normalized JSONPath, e.g.
    /// `$['paths']['/pets']['get']['responses']['200']`.
    JsonPath,
}

/// Context handed to every visitor hook.
#[derive(Debug, Clone)]
pub struct NodePath<'a> {
    /// The current node.
    pub node: NodeRef<'a>,
    /// Immediate parent node, `None` at the root.
    pub parent: Option<NodeRef<'a>>,
    /// Field through which the current node is reached (the YAML name, or
    /// the container field name for flattened maps).
    pub parent_field: Option<&'static str>,
    /// List index or map key when the parent field is a collection.
    pub parent_key: Option<PathSegment>,
    /// Nodes from the root down to the immediate parent.
    pub ancestors: Vec<NodeRef<'a>>,
    parts: Vec<PathSegment>,
}

impl<'a> NodePath<'a> {
    /// Root context for a traversal.
    pub fn root(node: NodeRef<'a>) -> Self {
        Self {
            node,
            parent: None,
            parent_field: None,
            parent_key: None,
            ancestors: Vec::new(),
            parts: Vec::new(),
        }
    }

    /// A context one level down, through a named field.
    ///
    /// The field contributes a path segment, and `parent_key` another when
    /// the field is a collection. Sub-traversals into flattened containers
    /// should pass the entry key only.
    pub fn create_child(
        &self,
        node: NodeRef<'a>,
        parent_field: &'static str,
        parent_key: Option<PathSegment>,
    ) -> Self {
        let mut parts = self.parts.clone();
        parts.push(PathSegment::Key(parent_field.to_owned()));
        if let Some(key) = &parent_key {
            parts.push(key.clone());
        }

        self.child_with_parts(node, Some(parent_field), parent_key, parts)
    }

    pub(crate) fn child_for_edge(&self, edge: ChildEdge<'a>) -> Self {
        let mut parts = self.parts.clone();
        if !edge.flattened {
            parts.push(PathSegment::Key(edge.field.to_owned()));
        }
        if let Some(key) = &edge.key {
            parts.push(key.clone());
        }

        self.child_with_parts(edge.node, Some(edge.field), edge.key, parts)
    }

    fn child_with_parts(
        &self,
        node: NodeRef<'a>,
        parent_field: Option<&'static str>,
        parent_key: Option<PathSegment>,
        parts: Vec<PathSegment>,
    ) -> Self {
        let mut ancestors = self.ancestors.clone();
        ancestors.push(self.node);

        Self {
            node,
            parent: Some(self.node),
            parent_field,
            parent_key,
            ancestors,
            parts,
        }
    }

    /// How many ancestors the current node has.
    pub fn depth(&self) -> usize {
        self.ancestors.len()
    }

    /// The traversal root (the node itself when at the root).
    pub fn get_root(&self) -> NodeRef<'a> {
        self.ancestors.first().copied().unwrap_or(self.node)
    }

    /// Path tokens from the root to the current node.
    pub fn to_parts(&self) -> &[PathSegment] {
        &self.parts
    }

    /// Render the current position as a JSON Pointer or Normalized JSONPath.
    pub fn format_path(&self, format: PathFormat) -> String {
        format_segments(&self.parts, format)
    }

    /// Re-enter traversal rooted at the current node with another visitor.
    pub fn traverse(&self, visitor: &mut dyn Visitor) {
        traversal::traverse(self.node, visitor);
    }
}

/// Render path tokens in the requested syntax.
pub fn format_segments(segments: &[PathSegment], format: PathFormat) -> String {
    match format {
        PathFormat::JsonPointer => {
            let mut out = String::new();
            for segment in segments {
                out.push('/');
                match segment {
                    PathSegment::Key(key) => out.push_str(&escape_pointer_token(key)),
                    PathSegment::Index(index) => {
                        let _ = write!(out, "{index}");
                    }
                }
            }
            out
        }

        PathFormat::JsonPath => {
            let mut out = String::from("$");
            for segment in segments {
                match segment {
                    PathSegment::Key(key) => {
                        let _ = write!(out, "['{}']", key.replace('\'', "\\'"));
                    }
                    PathSegment::Index(index) => {
                        let _ = write!(out, "[{index}]");
                    }
                }
            }
            out
        }
    }
}

/// RFC 6901 token escaping: `~` first, then `/`.
fn escape_pointer_token(token: &str) -> String {
    token.replace('~', "~0").replace('/', "~1")
}
