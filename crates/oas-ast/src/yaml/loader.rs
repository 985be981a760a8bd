//! Event-stream composer building the node arena.

use std::collections::HashMap;

use derive_more::derive::{Display, Error};
use yaml_rust2::{
    parser::{Event, MarkedEventReceiver, Parser},
    scanner::{Marker, TScalarStyle},
};

use super::{
    Mark, NodeId, Scalar, ScalarStyle, ScalarValue, Span, Tag, YamlArena, YamlData, YamlNode,
};

/// Malformed YAML input.
#[derive(Debug, Clone, Display, Error)]
#[display("YAML parse error at {mark}: {message}")]
pub struct YamlParseError {
    /// Scanner diagnostic.
    pub message: String,
    /// Offending position.
    pub mark: Mark,
}

/// Parse YAML (or its JSON subset) text into a node arena.
///
/// Only the first document of a multi-document stream is composed.
pub fn parse_yaml(text: &str) -> Result<YamlArena, YamlParseError> {
    let mut parser = Parser::new(text.chars());
    let mut composer = Composer::default();

    parser
        .load(&mut composer, false)
        .map_err(|err| YamlParseError {
            message: err.to_string(),
            mark: convert_marker(*err.marker()),
        })?;

    Ok(composer.arena)
}

fn convert_marker(marker: Marker) -> Mark {
    Mark::new(marker.line() as u32, marker.col() as u32, marker.index() as u32)
}

#[derive(Debug)]
enum Container {
    Mapping {
        id: NodeId,
        entries: Vec<(NodeId, NodeId)>,
        pending_key: Option<NodeId>,
    },
    Sequence {
        id: NodeId,
        items: Vec<NodeId>,
    },
}

#[derive(Debug, Default)]
struct Composer {
    arena: YamlArena,
    stack: Vec<Container>,
    anchors: HashMap<usize, NodeId>,
}

impl Composer {
    fn attach(&mut self, id: NodeId) {
        match self.stack.last_mut() {
            Some(Container::Sequence { items, .. }) => items.push(id),

            Some(Container::Mapping {
                entries,
                pending_key,
                ..
            }) => match pending_key.take() {
                Some(key) => entries.push((key, id)),
                None => *pending_key = Some(id),
            },

            // First completed top-level node is the document root.
            None => {
                if self.arena.root().is_none() {
                    self.arena.set_root(id);
                }
            }
        }
    }

    fn register_anchor(&mut self, anchor_id: usize, node: NodeId) {
        if anchor_id > 0 {
            self.anchors.insert(anchor_id, node);
        }
    }

    fn open(&mut self, data: YamlData, marker: Marker, anchor_id: usize) -> NodeId {
        let start = convert_marker(marker);
        let id = self.arena.push(YamlNode {
            data,
            span: Span { start, end: start },
        });
        self.register_anchor(anchor_id, id);
        id
    }

    fn close(&mut self, marker: Marker) {
        let end = convert_marker(marker);

        match self.stack.pop() {
            Some(Container::Mapping { id, entries, .. }) => {
                let node = self.arena.node_mut(id);
                node.data = YamlData::Mapping(entries);
                node.span.end = end;
                self.attach(id);
            }
            Some(Container::Sequence { id, items }) => {
                let node = self.arena.node_mut(id);
                node.data = YamlData::Sequence(items);
                node.span.end = end;
                self.attach(id);
            }
            None => {}
        }
    }
}

impl MarkedEventReceiver for Composer {
    fn on_event(&mut self, event: Event, marker: Marker) {
        match event {
            Event::Scalar(text, style, anchor_id, tag) => {
                let style = convert_style(style);
                let tag = tag.map(|tag| Tag {
                    handle: tag.handle,
                    suffix: tag.suffix,
                });
                let span = scalar_span(marker, &text, style);
                let value = resolve_scalar(&text, style, tag.as_ref());

                let id = self.arena.push(YamlNode {
                    data: YamlData::Scalar(Scalar {
                        text,
                        style,
                        tag,
                        value,
                    }),
                    span,
                });
                self.register_anchor(anchor_id, id);
                self.attach(id);
            }

            Event::MappingStart(anchor_id, ..) => {
                let id = self.open(YamlData::Mapping(Vec::new()), marker, anchor_id);
                self.stack.push(Container::Mapping {
                    id,
                    entries: Vec::new(),
                    pending_key: None,
                });
            }

            Event::SequenceStart(anchor_id, ..) => {
                let id = self.open(YamlData::Sequence(Vec::new()), marker, anchor_id);
                self.stack.push(Container::Sequence {
                    id,
                    items: Vec::new(),
                });
            }

            Event::MappingEnd | Event::SequenceEnd => self.close(marker),

            Event::Alias(anchor_id) => {
                // Unknown aliases have already been rejected by the parser;
                // fall back to a null scalar if one slips through.
                match self.anchors.get(&anchor_id).copied() {
                    Some(id) => self.attach(id),
                    None => {
                        let mark = convert_marker(marker);
                        let id = self.arena.push(YamlNode {
                            data: YamlData::Scalar(Scalar {
                                text: String::new(),
                                style: ScalarStyle::Plain,
                                tag: None,
                                value: ScalarValue::Null,
                            }),
                            span: Span {
                                start: mark,
                                end: mark,
                            },
                        });
                        self.attach(id);
                    }
                }
            }

            // Stream and document delimiters carry no structure.
            _ => {}
        }
    }
}

fn convert_style(style: TScalarStyle) -> ScalarStyle {
    match style {
        TScalarStyle::SingleQuoted => ScalarStyle::SingleQuoted,
        TScalarStyle::DoubleQuoted => ScalarStyle::DoubleQuoted,
        TScalarStyle::Literal => ScalarStyle::Literal,
        TScalarStyle::Folded => ScalarStyle::Folded,
        _ => ScalarStyle::Plain,
    }
}

/// Estimate a scalar's end mark from its decoded content.
///
/// Exact for single-line plain scalars; quoted styles add their delimiters.
/// Block and multi-line scalars clamp to the first line of content.
fn scalar_span(marker: Marker, text: &str, style: ScalarStyle) -> Span {
    let start = convert_marker(marker);

    let first_line = text.lines().next().unwrap_or("");
    let content = if text.contains('\n') { first_line } else { text };

    let delimiters = match style {
        ScalarStyle::Plain => 0,
        ScalarStyle::SingleQuoted => 2 + content.matches('\'').count(),
        ScalarStyle::DoubleQuoted => 2,
        ScalarStyle::Literal | ScalarStyle::Folded => 1,
    };

    let bytes = (content.len() + delimiters) as u32;
    let cols = (content.chars().count() + delimiters) as u32;

    Span {
        start,
        end: Mark::new(start.line, start.col + cols, start.offset + bytes),
    }
}

fn resolve_scalar(text: &str, style: ScalarStyle, tag: Option<&Tag>) -> ScalarValue {
    // Quoted and block styles never resolve to non-strings.
    if style != ScalarStyle::Plain {
        return ScalarValue::Str(text.to_owned());
    }

    if let Some(tag) = tag {
        return resolve_tagged(text, tag);
    }

    resolve_core(text)
}

fn resolve_tagged(text: &str, tag: &Tag) -> ScalarValue {
    if tag.is_core("str") {
        ScalarValue::Str(text.to_owned())
    } else if tag.is_core("null") {
        ScalarValue::Null
    } else if tag.is_core("bool") {
        match parse_bool(text) {
            Some(value) => ScalarValue::Bool(value),
            None => ScalarValue::Str(text.to_owned()),
        }
    } else if tag.is_core("int") {
        match parse_int(text) {
            Some(value) => ScalarValue::Int(value),
            None => ScalarValue::Str(text.to_owned()),
        }
    } else if tag.is_core("float") {
        match parse_float(text) {
            Some(value) => ScalarValue::Float(value),
            None => ScalarValue::Str(text.to_owned()),
        }
    } else {
        // Unknown tags keep their text form.
        ScalarValue::Str(text.to_owned())
    }
}

/// YAML 1.2 core-schema resolution for plain scalars.
fn resolve_core(text: &str) -> ScalarValue {
    match text {
        "" | "~" | "null" | "Null" | "NULL" => return ScalarValue::Null,
        _ => {}
    }

    if let Some(value) = parse_bool(text) {
        return ScalarValue::Bool(value);
    }
    if let Some(value) = parse_int(text) {
        return ScalarValue::Int(value);
    }
    if let Some(value) = parse_float(text) {
        return ScalarValue::Float(value);
    }

    ScalarValue::Str(text.to_owned())
}

fn parse_bool(text: &str) -> Option<bool> {
    match text {
        "true" | "True" | "TRUE" => Some(true),
        "false" | "False" | "FALSE" => Some(false),
        _ => None,
    }
}

fn parse_int(text: &str) -> Option<i64> {
    if let Some(hex) = text.strip_prefix("0x") {
        return i64::from_str_radix(hex, 16).ok();
    }
    if let Some(octal) = text.strip_prefix("0o") {
        return i64::from_str_radix(octal, 8).ok();
    }

    let digits = text.strip_prefix(['-', '+']).unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.trim_start_matches('+').parse().ok()
}

fn parse_float(text: &str) -> Option<f64> {
    match text {
        ".inf" | ".Inf" | ".INF" | "+.inf" | "+.Inf" | "+.INF" => return Some(f64::INFINITY),
        "-.inf" | "-.Inf" | "-.INF" => return Some(f64::NEG_INFINITY),
        ".nan" | ".NaN" | ".NAN" => return Some(f64::NAN),
        _ => {}
    }

    // Reject forms the core schema does not treat as numbers before handing
    // off to the (more lenient) std parser.
    let body = text.strip_prefix(['-', '+']).unwrap_or(text);
    let mantissa = body.split(['e', 'E']).next().unwrap_or("");
    if mantissa.is_empty() || !mantissa.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
        return None;
    }
    if !mantissa.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }

    text.parse().ok()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn core_schema_resolution() {
        assert_eq!(resolve_core("3"), ScalarValue::Int(3));
        assert_eq!(resolve_core("-7"), ScalarValue::Int(-7));
        assert_eq!(resolve_core("0x1F"), ScalarValue::Int(31));
        assert_eq!(resolve_core("3.0"), ScalarValue::Float(3.0));
        assert_eq!(resolve_core("1e3"), ScalarValue::Float(1000.0));
        assert_eq!(resolve_core("TRUE"), ScalarValue::Bool(true));
        assert_eq!(resolve_core("~"), ScalarValue::Null);
        assert_eq!(resolve_core("3.0.4"), ScalarValue::Str("3.0.4".to_owned()));
        assert_eq!(resolve_core("yes"), ScalarValue::Str("yes".to_owned()));
        assert_eq!(resolve_core("1_000"), ScalarValue::Str("1_000".to_owned()));
    }

    #[test]
    fn quoted_scalars_stay_strings() {
        assert_eq!(
            resolve_scalar("2.0", ScalarStyle::SingleQuoted, None),
            ScalarValue::Str("2.0".to_owned()),
        );
    }

    #[test]
    fn flow_json_subset_parses() {
        let arena = parse_yaml(r#"{"openapi": "3.1.0", "info": {"title": "t"}}"#).unwrap();
        let root = arena.root().unwrap();
        let entries = arena.mapping(root).unwrap();

        assert_eq!(arena.key_string(entries[0].0), "openapi");
        assert_eq!(arena.scalar_str(entries[0].1), Some("3.1.0"));
    }
}
