// SPDX-License-Identifier: AGPL-3.0-or-later
//! Editor-state document tree
//!
//! The rich-text editor submits its state as a JSON envelope of the shape
//! `{ "root": { "type": "root", "children": [...], ... } }`. This module
//! decodes that envelope into a closed tree of typed nodes. Decoding is
//! deliberately forgiving: unknown node kinds and nodes with malformed
//! attribute fields become [`DocumentNode::Unknown`] so that a partially
//! filled or forward-versioned draft still serializes, while missing
//! fields take documented defaults.

use serde::Deserialize;
use serde_json::Value;
use unicode_segmentation::UnicodeSegmentation;

/// Error type for editor-state decoding
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("editor state payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("editor state root is not an object")]
    MalformedRoot,
}

/// A decoded editor-state envelope
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditorState {
    /// The root node, or `None` when the payload carried no `root` key
    pub root: Option<DocumentNode>,
}

impl EditorState {
    /// Decode an editor-state JSON payload.
    ///
    /// A missing `root` key decodes to `root: None`; a `root` that is
    /// present but not a JSON object is an error. Extra envelope fields
    /// are ignored.
    pub fn from_json(payload: &str) -> Result<Self, DecodeError> {
        let wire: WireState = serde_json::from_str(payload)?;
        let root = match wire.root {
            Value::Null => None,
            root @ Value::Object(_) => {
                let node: WireNode =
                    serde_json::from_value(root).map_err(|_| DecodeError::MalformedRoot)?;
                Some(node.into_node())
            }
            _ => return Err(DecodeError::MalformedRoot),
        };
        Ok(Self { root })
    }

    /// Count words in the document
    pub fn word_count(&self) -> usize {
        self.root.as_ref().map_or(0, DocumentNode::word_count)
    }

    /// Count characters in the document
    pub fn char_count(&self) -> usize {
        self.root.as_ref().map_or(0, DocumentNode::char_count)
    }
}

/// One node of the document tree.
///
/// Block nodes (paragraph, heading, list, quote, code block) contain other
/// nodes; inline nodes (text, line break, link) hold content within a
/// block. `Text` and `LineBreak` are always leaves. Children order is
/// document order.
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentNode {
    Root {
        children: Vec<DocumentNode>,
    },

    Paragraph {
        children: Vec<DocumentNode>,
        /// Alignment code: 0=unset, then see [`crate::style::Alignment`]
        format: u32,
    },

    Heading {
        children: Vec<DocumentNode>,
        tag: HeadingTag,
    },

    Quote {
        children: Vec<DocumentNode>,
        format: u32,
    },

    CodeBlock {
        children: Vec<DocumentNode>,
        format: u32,
    },

    List {
        children: Vec<DocumentNode>,
        kind: ListKind,
    },

    ListItem {
        children: Vec<DocumentNode>,
    },

    Link {
        children: Vec<DocumentNode>,
        url: String,
        title: Option<String>,
    },

    LineBreak,

    Text {
        text: String,
        /// Inline style bitmask, see [`crate::style::TextStyle`]
        format: u32,
    },

    /// A node whose wire kind was not recognized, or whose attribute
    /// fields had the wrong JSON type. Children are preserved so the
    /// content degrades to visible text instead of vanishing.
    Unknown {
        kind: String,
        children: Vec<DocumentNode>,
    },
}

impl DocumentNode {
    /// Child nodes in document order; empty for leaves
    pub fn children(&self) -> &[DocumentNode] {
        match self {
            Self::Root { children }
            | Self::Paragraph { children, .. }
            | Self::Heading { children, .. }
            | Self::Quote { children, .. }
            | Self::CodeBlock { children, .. }
            | Self::List { children, .. }
            | Self::ListItem { children }
            | Self::Link { children, .. }
            | Self::Unknown { children, .. } => children,
            Self::LineBreak | Self::Text { .. } => &[],
        }
    }

    /// Count words in this subtree
    pub fn word_count(&self) -> usize {
        match self {
            Self::Text { text, .. } => text.unicode_words().count(),
            _ => self.children().iter().map(|c| c.word_count()).sum(),
        }
    }

    /// Count characters in this subtree
    pub fn char_count(&self) -> usize {
        match self {
            Self::Text { text, .. } => text.chars().count(),
            _ => self.children().iter().map(|c| c.char_count()).sum(),
        }
    }
}

/// Heading level, h1 through h6
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeadingTag {
    #[default]
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingTag {
    /// The HTML tag name for this level
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
            Self::H5 => "h5",
            Self::H6 => "h6",
        }
    }

    /// All levels in order
    pub const ALL: [Self; 6] = [Self::H1, Self::H2, Self::H3, Self::H4, Self::H5, Self::H6];

    fn from_wire(tag: &str) -> Option<Self> {
        match tag {
            "h1" => Some(Self::H1),
            "h2" => Some(Self::H2),
            "h3" => Some(Self::H3),
            "h4" => Some(Self::H4),
            "h5" => Some(Self::H5),
            "h6" => Some(Self::H6),
            _ => None,
        }
    }
}

/// List kind, matching the editor's `listType` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListKind {
    #[default]
    Bullet,
    Number,
}

impl ListKind {
    fn from_wire(kind: &str) -> Option<Self> {
        match kind {
            "bullet" => Some(Self::Bullet),
            "number" => Some(Self::Number),
            _ => None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WireState {
    root: Value,
}

/// Wire mirror of a node. Attribute fields are kept as raw values so that
/// a field with the wrong JSON type degrades that one node to `Unknown`
/// instead of failing the whole document.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WireNode {
    #[serde(rename = "type")]
    kind: String,
    children: Value,
    format: Value,
    text: Value,
    tag: Value,
    #[serde(rename = "listType")]
    list_type: Value,
    url: Value,
    title: Value,
}

// Field readers: Ok(None) means absent, Err(()) means present with the
// wrong JSON type.
fn str_field(v: &Value) -> Result<Option<String>, ()> {
    match v {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        _ => Err(()),
    }
}

fn code_field(v: &Value) -> Result<u32, ()> {
    match v {
        Value::Null => Ok(0),
        Value::Number(n) => n.as_u64().map(|n| n as u32).ok_or(()),
        _ => Err(()),
    }
}

fn decode_children(v: Value) -> Vec<DocumentNode> {
    match v {
        Value::Array(items) => items.into_iter().map(decode_child).collect(),
        _ => Vec::new(),
    }
}

fn decode_child(v: Value) -> DocumentNode {
    match serde_json::from_value::<WireNode>(v) {
        Ok(node) => node.into_node(),
        // Not an object at all; keep a placeholder so no node is skipped.
        Err(_) => DocumentNode::Unknown {
            kind: String::new(),
            children: Vec::new(),
        },
    }
}

impl WireNode {
    fn into_node(self) -> DocumentNode {
        let children = decode_children(self.children);
        let kind = self.kind;
        match kind.as_str() {
            "root" => DocumentNode::Root { children },

            "paragraph" => match code_field(&self.format) {
                Ok(format) => DocumentNode::Paragraph { children, format },
                Err(()) => DocumentNode::Unknown { kind, children },
            },

            "heading" => match str_field(&self.tag) {
                Ok(tag) => DocumentNode::Heading {
                    children,
                    tag: tag
                        .as_deref()
                        .and_then(HeadingTag::from_wire)
                        .unwrap_or_default(),
                },
                Err(()) => DocumentNode::Unknown { kind, children },
            },

            "quote" => match code_field(&self.format) {
                Ok(format) => DocumentNode::Quote { children, format },
                Err(()) => DocumentNode::Unknown { kind, children },
            },

            "code" => match code_field(&self.format) {
                Ok(format) => DocumentNode::CodeBlock { children, format },
                Err(()) => DocumentNode::Unknown { kind, children },
            },

            "list" => match str_field(&self.list_type) {
                Ok(list_type) => DocumentNode::List {
                    children,
                    kind: list_type
                        .as_deref()
                        .and_then(ListKind::from_wire)
                        .unwrap_or_default(),
                },
                Err(()) => DocumentNode::Unknown { kind, children },
            },

            "listitem" => DocumentNode::ListItem { children },

            "link" => match (str_field(&self.url), str_field(&self.title)) {
                (Ok(url), Ok(title)) => DocumentNode::Link {
                    children,
                    url: url.unwrap_or_else(|| "#".to_string()),
                    title,
                },
                _ => DocumentNode::Unknown { kind, children },
            },

            "linebreak" => DocumentNode::LineBreak,

            "text" => match (str_field(&self.text), code_field(&self.format)) {
                (Ok(text), Ok(format)) => DocumentNode::Text {
                    text: text.unwrap_or_default(),
                    format,
                },
                _ => DocumentNode::Unknown { kind, children },
            },

            _ => DocumentNode::Unknown { kind, children },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_decode_typical_envelope() {
        let payload = r#"{
            "root": {
                "type": "root",
                "version": 1,
                "direction": "ltr",
                "indent": 0,
                "format": "",
                "children": [
                    {
                        "type": "paragraph",
                        "format": 0,
                        "children": [
                            { "type": "text", "text": "Hello", "format": 1 }
                        ]
                    }
                ]
            }
        }"#;
        let state = EditorState::from_json(payload).unwrap();
        assert_eq!(
            state.root,
            Some(DocumentNode::Root {
                children: vec![DocumentNode::Paragraph {
                    children: vec![DocumentNode::Text {
                        text: "Hello".to_string(),
                        format: 1,
                    }],
                    format: 0,
                }],
            })
        );
    }

    #[test]
    fn test_missing_root_key() {
        let state = EditorState::from_json("{}").unwrap();
        assert_eq!(state.root, None);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(EditorState::from_json("not json").is_err());
    }

    #[test]
    fn test_non_object_root_is_an_error() {
        let err = EditorState::from_json(r#"{"root": 5}"#).unwrap_err();
        assert!(matches!(err, DecodeError::MalformedRoot));
    }

    #[test]
    fn test_unknown_kind_keeps_children() {
        let payload = r#"{
            "root": {
                "type": "root",
                "children": [
                    {
                        "type": "table",
                        "children": [
                            { "type": "text", "text": "cell", "format": 0 }
                        ]
                    }
                ]
            }
        }"#;
        let state = EditorState::from_json(payload).unwrap();
        let root = state.root.unwrap();
        assert_eq!(
            root.children(),
            &[DocumentNode::Unknown {
                kind: "table".to_string(),
                children: vec![DocumentNode::Text {
                    text: "cell".to_string(),
                    format: 0,
                }],
            }]
        );
    }

    #[test]
    fn test_malformed_attribute_degrades_to_unknown() {
        // text field is a number, not a string
        let payload = r#"{
            "root": {
                "type": "root",
                "children": [ { "type": "text", "text": 42 } ]
            }
        }"#;
        let state = EditorState::from_json(payload).unwrap();
        let root = state.root.unwrap();
        assert_eq!(
            root.children(),
            &[DocumentNode::Unknown {
                kind: "text".to_string(),
                children: Vec::new(),
            }]
        );
    }

    #[test]
    fn test_link_url_defaults() {
        let payload = r#"{
            "root": {
                "type": "root",
                "children": [
                    {
                        "type": "link",
                        "children": [ { "type": "text", "text": "click" } ]
                    }
                ]
            }
        }"#;
        let state = EditorState::from_json(payload).unwrap();
        let root = state.root.unwrap();
        match &root.children()[0] {
            DocumentNode::Link { url, title, .. } => {
                assert_eq!(url, "#");
                assert_eq!(*title, None);
            }
            other => panic!("expected link, got {other:?}"),
        }
    }

    #[test]
    fn test_heading_tag_defaults_to_h1() {
        let payload = r#"{
            "root": {
                "type": "root",
                "children": [
                    { "type": "heading", "children": [] },
                    { "type": "heading", "tag": "h3", "children": [] }
                ]
            }
        }"#;
        let state = EditorState::from_json(payload).unwrap();
        let root = state.root.unwrap();
        assert_eq!(
            root.children(),
            &[
                DocumentNode::Heading {
                    children: Vec::new(),
                    tag: HeadingTag::H1,
                },
                DocumentNode::Heading {
                    children: Vec::new(),
                    tag: HeadingTag::H3,
                },
            ]
        );
    }

    #[test]
    fn test_word_count() {
        let state = EditorState {
            root: Some(DocumentNode::Root {
                children: vec![DocumentNode::Paragraph {
                    children: vec![DocumentNode::Text {
                        text: "Hello world this is a test".to_string(),
                        format: 0,
                    }],
                    format: 0,
                }],
            }),
        };
        assert_eq!(state.word_count(), 6);
        assert_eq!(state.char_count(), 26);
    }

    #[test]
    fn test_empty_state_counts_zero() {
        let state = EditorState::default();
        assert_eq!(state.word_count(), 0);
        assert_eq!(state.char_count(), 0);
    }
}
