// SPDX-License-Identifier: AGPL-3.0-or-later
//! Plain-text rendering of the document tree
//!
//! Excerpts and the search index are derived from the same editor state
//! as the article body. This renderer drops all inline wrappers and
//! markup concerns: blocks are separated by blank lines, list items sit
//! one per line, and a line break becomes a newline. An empty document
//! renders as the empty string; the `<p></p>` marker is an HTML concern.

use crate::node::{DocumentNode, EditorState};
use crate::render::{OutputFormat, Renderer};

/// Extract the plain text of a document tree
pub fn plain_text(root: Option<&DocumentNode>) -> String {
    let Some(root) = root else {
        return String::new();
    };
    let blocks: Vec<String> = root
        .children()
        .iter()
        .map(block_text)
        .filter(|b| !b.is_empty())
        .collect();
    blocks.join("\n\n")
}

fn block_text(node: &DocumentNode) -> String {
    match node {
        DocumentNode::List { children, .. } => {
            let items: Vec<String> = children
                .iter()
                .map(block_text)
                .filter(|i| !i.is_empty())
                .collect();
            items.join("\n")
        }
        _ => {
            let mut out = String::new();
            inline_text(node, &mut out);
            out
        }
    }
}

fn inline_text(node: &DocumentNode, out: &mut String) {
    match node {
        DocumentNode::Text { text, .. } => out.push_str(text),
        DocumentNode::LineBreak => out.push('\n'),
        _ => {
            for child in node.children() {
                inline_text(child, out);
            }
        }
    }
}

/// Plain-text renderer for excerpts and search indexing
pub struct TextRenderer;

impl TextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for TextRenderer {
    fn format(&self) -> OutputFormat {
        OutputFormat::PlainText
    }

    fn render(&self, state: &EditorState) -> String {
        plain_text(state.root.as_ref())
    }
}
