// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grove Text: bounded word wrapping for node labels.
//!
//! Layout runs before any font is available, so this crate estimates widths
//! with a fixed average character width instead of real glyph metrics. Words
//! are packed greedily: a word joins the current line while the estimated line
//! width stays within the budget, otherwise it starts a new line. A word wider
//! than the budget is never broken; it gets a line of its own.
//!
//! At most [`WrapConfig::max_lines`] lines (three by default) are kept. Any
//! remaining words are dropped, and [`Wrapped::is_truncated`] tells the caller
//! that the output is lossy so it can, for example, show the full text as a
//! tooltip.
//!
//! ```rust
//! use grove_text::wrap;
//!
//! let wrapped = wrap("Ownership and borrowing in practice", 100.0);
//! assert!(wrapped.lines().len() <= 3);
//! assert_eq!(wrapped.lines()[0], "Ownership and");
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::string::String;
use smallvec::SmallVec;

/// Default number of lines kept by [`wrap`].
pub const MAX_LINES: usize = 3;

/// Average glyph advance as a fraction of the font size.
///
/// A reasonable middle ground for proportional sans-serif faces.
pub const AVG_CHAR_WIDTH_EM: f64 = 0.58;

/// Parameters for the width heuristic.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WrapConfig {
    /// Estimated advance of one character, in layout units.
    pub avg_char_width: f64,
    /// Maximum number of lines to keep.
    pub max_lines: usize,
}

impl Default for WrapConfig {
    fn default() -> Self {
        Self {
            avg_char_width: 7.0,
            max_lines: MAX_LINES,
        }
    }
}

impl WrapConfig {
    /// Config for text set at `font_size` layout units.
    #[must_use]
    pub fn for_font_size(font_size: f64) -> Self {
        Self {
            avg_char_width: font_size * AVG_CHAR_WIDTH_EM,
            ..Self::default()
        }
    }

    /// Estimated rendered width of `text`.
    #[must_use]
    pub fn estimate_width(&self, text: &str) -> f64 {
        self.width_of(text.chars().count())
    }

    fn width_of(&self, chars: usize) -> f64 {
        chars as f64 * self.avg_char_width
    }

    /// Wraps `text` into lines no wider than `max_width` (except for single
    /// words that are wider on their own).
    ///
    /// Runs of whitespace, including newlines, collapse to single spaces.
    #[must_use]
    pub fn wrap(&self, text: &str, max_width: f64) -> Wrapped {
        let mut lines: SmallVec<[String; MAX_LINES]> = SmallVec::new();
        let mut words = text.split_whitespace();

        if self.max_lines == 0 {
            return Wrapped {
                lines,
                truncated: words.next().is_some(),
            };
        }

        let mut current = String::new();
        let mut current_chars = 0_usize;
        let mut truncated = false;

        for word in words {
            let word_chars = word.chars().count();
            if current.is_empty() {
                current.push_str(word);
                current_chars = word_chars;
                continue;
            }
            if self.width_of(current_chars + 1 + word_chars) <= max_width {
                current.push(' ');
                current.push_str(word);
                current_chars += 1 + word_chars;
                continue;
            }
            lines.push(core::mem::take(&mut current));
            if lines.len() == self.max_lines {
                truncated = true;
                break;
            }
            current.push_str(word);
            current_chars = word_chars;
        }

        if !current.is_empty() {
            lines.push(current);
        }
        Wrapped { lines, truncated }
    }
}

/// Wraps `text` with the default [`WrapConfig`].
#[must_use]
pub fn wrap(text: &str, max_width: f64) -> Wrapped {
    WrapConfig::default().wrap(text, max_width)
}

/// Result of wrapping a piece of text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Wrapped {
    lines: SmallVec<[String; MAX_LINES]>,
    truncated: bool,
}

impl Wrapped {
    /// The wrapped lines, top to bottom.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Returns `true` if words were dropped because the line limit was hit.
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Returns `true` if the input contained no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
