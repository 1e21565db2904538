// SPDX-License-Identifier: AGPL-3.0-or-later
//! Copydesk Document - editor-state tree and article serializers
//!
//! This crate provides:
//! - A typed document tree decoded from the rich-text editor's JSON state
//! - Inline format bitmask and block alignment decoding
//! - The HTML serializer that produces stored article bodies
//! - A plain-text renderer for excerpts and search indexing

pub mod node;
pub mod render;
pub mod style;

pub use node::{DecodeError, DocumentNode, EditorState, HeadingTag, ListKind};
pub use render::html::{render_article_html, serialize_root, HtmlRenderer, EMPTY_DOCUMENT};
pub use render::text::{plain_text, TextRenderer};
pub use render::{OutputFormat, Renderer};
pub use style::{wrap_inline, Alignment, TextStyle};
