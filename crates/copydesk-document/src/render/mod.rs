// SPDX-License-Identifier: AGPL-3.0-or-later
//! Renderers from editor state to stored article content

use crate::node::EditorState;

pub mod html;
pub mod text;

/// Output format identifier for article renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    Html,
    PlainText,
}

impl OutputFormat {
    /// File extension for this format
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::PlainText => "txt",
        }
    }

    /// Short display name
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Html => "HTML",
            Self::PlainText => "TXT",
        }
    }

    /// All formats
    pub const ALL: [Self; 2] = [Self::Html, Self::PlainText];
}

/// Renderer trait: convert editor state to a stored string.
///
/// Rendering is total; malformed trees degrade to documented fallback
/// output instead of failing, so `render` returns a plain `String`.
pub trait Renderer: Send + Sync {
    /// The target format this renderer produces
    fn format(&self) -> OutputFormat;

    /// Render an editor state to a string
    fn render(&self, state: &EditorState) -> String;
}

#[cfg(test)]
mod tests {
    use super::html::HtmlRenderer;
    use super::text::TextRenderer;
    use super::*;

    #[test]
    fn test_format_metadata() {
        for format in OutputFormat::ALL {
            assert!(!format.extension().is_empty());
            assert!(!format.label().is_empty());
        }
    }

    #[test]
    fn test_renderers_are_object_safe() {
        let renderers: Vec<Box<dyn Renderer>> =
            vec![Box::new(HtmlRenderer::new()), Box::new(TextRenderer::new())];
        let formats: Vec<OutputFormat> = renderers.iter().map(|r| r.format()).collect();
        assert_eq!(formats, vec![OutputFormat::Html, OutputFormat::PlainText]);
    }
}
