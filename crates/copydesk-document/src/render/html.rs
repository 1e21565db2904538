// SPDX-License-Identifier: AGPL-3.0-or-later
//! HTML serialization of the document tree
//!
//! This is the article-body serializer: it walks the tree once, emits one
//! HTML fragment per node, and joins the top-level fragments with
//! newlines. Emission is total over all node kinds; there is no error
//! path, only documented fallbacks.
//!
//! Two fallbacks look alike and must not be conflated: an *empty
//! paragraph* inside a document emits `<p><br></p>` (it preserves a
//! visually blank line), while an *empty document* serializes to `<p></p>`.

use crate::node::{DocumentNode, EditorState, ListKind};
use crate::render::{OutputFormat, Renderer};
use crate::style::{wrap_inline, Alignment};

/// Canonical marker stored for an empty or undecodable document
pub const EMPTY_DOCUMENT: &str = "<p></p>";

/// Fragment emitted for a paragraph with no content
const EMPTY_PARAGRAPH: &str = "<p><br></p>";

/// Serialize a document tree to the article-body HTML string.
///
/// An absent root, a root with no children, or a root whose children all
/// emit nothing serializes to [`EMPTY_DOCUMENT`]. Otherwise the non-empty
/// top-level fragments are joined with a single newline. Pure and
/// idempotent.
pub fn serialize_root(root: Option<&DocumentNode>) -> String {
    let children = match root {
        Some(node) => node.children(),
        None => return EMPTY_DOCUMENT.to_string(),
    };
    if children.is_empty() {
        return EMPTY_DOCUMENT.to_string();
    }
    let fragments: Vec<String> = children
        .iter()
        .map(emit_node)
        .filter(|f| !f.is_empty())
        .collect();
    if fragments.is_empty() {
        EMPTY_DOCUMENT.to_string()
    } else {
        fragments.join("\n")
    }
}

/// Emit the HTML fragment for one node, recursing into children.
///
/// Never fails and never skips a node; unknown kinds pass their children
/// through so the content stays visible.
pub fn emit_node(node: &DocumentNode) -> String {
    match node {
        DocumentNode::Text { text, format } => wrap_inline(&escape_html(text), *format),

        DocumentNode::LineBreak => "<br>".to_string(),

        DocumentNode::Paragraph { children, format } => {
            let content = emit_children(children);
            if content.is_empty() {
                return EMPTY_PARAGRAPH.to_string();
            }
            match Alignment::from_code(*format).css() {
                Some(align) => format!("<p style=\"text-align: {align};\">{content}</p>"),
                None => format!("<p>{content}</p>"),
            }
        }

        DocumentNode::Heading { children, tag } => {
            let content = emit_children(children);
            if content.is_empty() {
                // dropped entirely, not placeholder-filled
                String::new()
            } else {
                format!("<{0}>{content}</{0}>", tag.as_str())
            }
        }

        DocumentNode::Quote { children, .. } => {
            format!("<blockquote>{}</blockquote>", emit_children(children))
        }

        DocumentNode::CodeBlock { children, .. } => {
            format!("<pre><code>{}</code></pre>", emit_children(children))
        }

        DocumentNode::List { children, kind } => {
            let items = emit_children(children);
            if items.is_empty() {
                return String::new();
            }
            let tag = match kind {
                ListKind::Bullet => "ul",
                ListKind::Number => "ol",
            };
            format!("<{tag}>{items}</{tag}>")
        }

        DocumentNode::ListItem { children } => {
            format!("<li>{}</li>", emit_children(children))
        }

        DocumentNode::Link {
            children,
            url,
            title,
        } => {
            let content = emit_children(children);
            if content.is_empty() {
                // a link with no content vanishes, href and all
                return String::new();
            }
            match title {
                Some(title) => format!(
                    "<a href=\"{}\" title=\"{}\">{content}</a>",
                    escape_html(url),
                    escape_html(title)
                ),
                None => format!("<a href=\"{}\">{content}</a>", escape_html(url)),
            }
        }

        // A nested root is malformed input; degrade like an unknown kind.
        DocumentNode::Root { children } => emit_children(children),

        DocumentNode::Unknown { kind, children } => {
            if !children.is_empty() {
                tracing::debug!(%kind, "passing through children of unknown node kind");
            }
            emit_children(children)
        }
    }
}

/// Concatenate child fragments with no separator
fn emit_children(children: &[DocumentNode]) -> String {
    children.iter().map(emit_node).collect()
}

/// Entity-escape text for element content and attribute values
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// HTML article-body renderer
pub struct HtmlRenderer;

impl HtmlRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for HtmlRenderer {
    fn format(&self) -> OutputFormat {
        OutputFormat::Html
    }

    fn render(&self, state: &EditorState) -> String {
        serialize_root(state.root.as_ref())
    }
}

/// Submission entry point: decode an editor-state JSON payload and
/// serialize it to article-body HTML.
///
/// A payload that fails to decode still produces the canonical empty
/// document; a partially filled draft must remain submittable.
pub fn render_article_html(payload: &str) -> String {
    match EditorState::from_json(payload) {
        Ok(state) => serialize_root(state.root.as_ref()),
        Err(err) => {
            tracing::warn!(error = %err, "editor state did not decode, storing empty document");
            EMPTY_DOCUMENT.to_string()
        }
    }
}
