// SPDX-License-Identifier: AGPL-3.0-or-later
//! Inline format bitmask and block alignment decoding
//!
//! A text node's `format` is an integer bitmask with one bit per inline
//! style; a block node's `format` is a small alignment code. Both come
//! straight off the wire, so unrecognized bits must be ignored rather
//! than rejected.

use bitflags::bitflags;

bitflags! {
    /// Inline text style bits, as stored by the editor
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct TextStyle: u32 {
        const BOLD = 1;
        const ITALIC = 2;
        const UNDERLINE = 4;
        const STRIKETHROUGH = 8;
        const CODE = 16;
        const SUBSCRIPT = 32;
        const SUPERSCRIPT = 64;
    }
}

// Wrapping order. Bits tested later end up outermost.
const WRAPPERS: [(TextStyle, &str); 7] = [
    (TextStyle::BOLD, "strong"),
    (TextStyle::ITALIC, "em"),
    (TextStyle::UNDERLINE, "u"),
    (TextStyle::STRIKETHROUGH, "s"),
    (TextStyle::CODE, "code"),
    (TextStyle::SUBSCRIPT, "sub"),
    (TextStyle::SUPERSCRIPT, "sup"),
];

/// Wrap `text` in the inline tags selected by `format`.
///
/// Each set bit wraps the accumulated string in its tag, in the fixed
/// order bold, italic, underline, strikethrough, code, subscript,
/// superscript. Unrecognized bits are ignored.
pub fn wrap_inline(text: &str, format: u32) -> String {
    let style = TextStyle::from_bits_truncate(format);
    let mut out = text.to_string();
    for (bit, tag) in WRAPPERS {
        if style.contains(bit) {
            out = format!("<{tag}>{out}</{tag}>");
        }
    }
    out
}

/// Horizontal alignment of a block node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Unset,
    Left,
    Center,
    Right,
    Justify,
}

impl Alignment {
    /// Decode a block node's alignment code.
    ///
    /// This reproduces the stored-content semantics exactly: the code is
    /// probed with sequential bitwise tests, not equality. Code 3 has bit
    /// 1 set and so resolves to left; the right branch (`format & 3`) can
    /// only be reached with bits 0 and 1 clear, which makes it unreachable,
    /// and justify is reached only by codes with bit 2 set and bits 0-1
    /// clear (4, 12, ...). Articles already in storage were serialized
    /// under these rules, so they are kept as-is.
    pub const fn from_code(format: u32) -> Self {
        if format & 1 != 0 {
            Self::Left
        } else if format & 2 != 0 {
            Self::Center
        } else if format & 3 != 0 {
            Self::Right
        } else if format & 4 != 0 {
            Self::Justify
        } else {
            Self::Unset
        }
    }

    /// The `text-align` keyword, or `None` when unset
    pub const fn css(&self) -> Option<&'static str> {
        match self {
            Self::Unset => None,
            Self::Left => Some("left"),
            Self::Center => Some("center"),
            Self::Right => Some("right"),
            Self::Justify => Some("justify"),
        }
    }
}
