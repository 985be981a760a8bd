//! Span-preserving YAML node tree.
//!
//! The composer turns a YAML event stream into an arena of generic nodes
//! (mapping/sequence/scalar) where every node carries a [`Span`] into the
//! original text. Mappings keep key order, scalars keep their style and
//! explicit tag, and aliases resolve to the anchor's node id so shared nodes
//! are represented structurally.

use std::fmt;

use serde_json::Value;

mod loader;

pub use self::loader::{parse_yaml, YamlParseError};

/// A single position in the source text.
///
/// `line` is 1-based, `col` is 0-based, `offset` is a byte index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Mark {
    /// 1-based line number.
    pub line: u32,
    /// 0-based column number.
    pub col: u32,
    /// Byte offset into the source text.
    pub offset: u32,
}

impl Mark {
    pub(crate) fn new(line: u32, col: u32, offset: u32) -> Self {
        Self { line, col, offset }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {} column {}", self.line, self.col + 1)
    }
}

/// Start and end marks of a node in the source text.
///
/// Collection end marks come from the closing parse event. Scalar end marks
/// are computed from the scalar's style and content; they are exact for
/// single-line scalars and clamped to the first line otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Span {
    /// Where the node starts.
    pub start: Mark,
    /// Where the node ends.
    pub end: Mark,
}

/// Handle of a node inside a [`YamlArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Index of this node in its arena.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Presentation style of a scalar in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarStyle {
    Plain,
    SingleQuoted,
    DoubleQuoted,
    Literal,
    Folded,
}

/// An explicit tag attached to a node (e.g. `!!str`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub handle: String,
    pub suffix: String,
}

impl Tag {
    /// Whether this is a YAML core-schema tag with the given suffix.
    pub fn is_core(&self, suffix: &str) -> bool {
        (self.handle == "tag:yaml.org,2002:" || self.handle == "!!") && self.suffix == suffix
    }
}

/// A scalar value resolved with the YAML 1.2 core schema.
///
/// Quoted scalars and scalars tagged `!!str` always resolve to
/// [`ScalarValue::Str`], which is what lets a consumer distinguish `"2.0"`
/// from `2.0`.
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl ScalarValue {
    /// The string content, if this scalar resolved to a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ScalarValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Plain [`serde_json::Value`] rendition of this scalar.
    ///
    /// Non-finite floats have no JSON representation and fall back to their
    /// source text.
    pub fn to_plain(&self) -> Value {
        match self {
            ScalarValue::Null => Value::Null,
            ScalarValue::Bool(b) => Value::Bool(*b),
            ScalarValue::Int(i) => Value::from(*i),
            ScalarValue::Float(f) if f.is_finite() => Value::from(*f),
            ScalarValue::Float(f) => Value::String(f.to_string()),
            ScalarValue::Str(s) => Value::String(s.clone()),
        }
    }
}

/// A scalar node: decoded text plus the resolved value.
#[derive(Debug, Clone, PartialEq)]
pub struct Scalar {
    /// Decoded scalar text as produced by the parser.
    pub text: String,
    /// Presentation style in the source.
    pub style: ScalarStyle,
    /// Explicit tag, if one was written.
    pub tag: Option<Tag>,
    /// Core-schema resolved value.
    pub value: ScalarValue,
}

/// Structure of a node.
#[derive(Debug, Clone, PartialEq)]
pub enum YamlData {
    /// Key/value entry pairs in source order.
    Mapping(Vec<(NodeId, NodeId)>),
    /// Sequence items in source order.
    Sequence(Vec<NodeId>),
    Scalar(Scalar),
}

/// A generic YAML node.
#[derive(Debug, Clone, PartialEq)]
pub struct YamlNode {
    pub data: YamlData,
    pub span: Span,
}

/// Arena of parsed nodes. Aliases share node ids, so the arena is a DAG
/// indexed by [`NodeId`].
#[derive(Debug, Clone, Default)]
pub struct YamlArena {
    nodes: Vec<YamlNode>,
    root: Option<NodeId>,
}

impl YamlArena {
    pub(crate) fn push(&mut self, node: YamlNode) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut YamlNode {
        &mut self.nodes[id.index()]
    }

    pub(crate) fn set_root(&mut self, id: NodeId) {
        self.root = Some(id);
    }

    /// The document root, if the stream contained one.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Number of nodes in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the arena holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Borrow a node by id.
    pub fn node(&self, id: NodeId) -> &YamlNode {
        &self.nodes[id.index()]
    }

    /// Source span of a node.
    pub fn span(&self, id: NodeId) -> Span {
        self.node(id).span
    }

    /// Mapping entries of a node, or `None` if it is not a mapping.
    pub fn mapping(&self, id: NodeId) -> Option<&[(NodeId, NodeId)]> {
        match &self.node(id).data {
            YamlData::Mapping(entries) => Some(entries),
            _ => None,
        }
    }

    /// Sequence items of a node, or `None` if it is not a sequence.
    pub fn sequence(&self, id: NodeId) -> Option<&[NodeId]> {
        match &self.node(id).data {
            YamlData::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Scalar payload of a node, or `None` if it is not a scalar.
    pub fn scalar(&self, id: NodeId) -> Option<&Scalar> {
        match &self.node(id).data {
            YamlData::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    /// String content of a scalar node that resolved to a string.
    pub fn scalar_str(&self, id: NodeId) -> Option<&str> {
        self.scalar(id).and_then(|s| s.value.as_str())
    }

    /// The text to use when a node appears in key position.
    ///
    /// Scalar keys use their decoded text verbatim (so `200`, `true` and
    /// `'200'` all key as written); non-scalar keys fall back to the JSON
    /// rendition of their plain value.
    pub fn key_string(&self, id: NodeId) -> String {
        match self.scalar(id) {
            Some(scalar) => scalar.text.clone(),
            None => self.to_plain(id).to_string(),
        }
    }

    /// Convert a subtree to a plain [`serde_json::Value`].
    ///
    /// Mapping keys are stringified with [`YamlArena::key_string`]. A node
    /// reached again while it is still being expanded (a self-referential
    /// anchor) renders as null.
    pub fn to_plain(&self, id: NodeId) -> Value {
        let mut in_progress = Vec::new();
        self.to_plain_inner(id, &mut in_progress)
    }

    fn to_plain_inner(&self, id: NodeId, in_progress: &mut Vec<NodeId>) -> Value {
        if in_progress.contains(&id) {
            return Value::Null;
        }

        match &self.node(id).data {
            YamlData::Scalar(scalar) => scalar.value.to_plain(),

            YamlData::Sequence(items) => {
                in_progress.push(id);
                let seq = items
                    .iter()
                    .map(|&item| self.to_plain_inner(item, in_progress))
                    .collect();
                in_progress.pop();
                Value::Array(seq)
            }

            YamlData::Mapping(entries) => {
                in_progress.push(id);
                let map = entries
                    .iter()
                    .map(|&(key, value)| {
                        (
                            self.key_string(key),
                            self.to_plain_inner(value, in_progress),
                        )
                    })
                    .collect();
                in_progress.pop();
                Value::Object(map)
            }
        }
    }
}
