//! # Text Units
//!
//! A unit is one styled block of text: a header, a paragraph, a linkback, or
//! a generic single-/multi-line block. Units are measured when built, so the
//! layout engine only deals with lines and heights.
//!
//! ## Example
//!
//! ```no_run
//! use nider::{Font, TextUnit, Align, Outline};
//!
//! let font = Font::from_file("fonts/Roboto-Bold.ttf", 48.0)?;
//! let header = TextUnit::header("Hello", font.clone())
//!     .align(Align::Left)
//!     .outline(Outline::new(2))
//!     .build();
//! let linkback = TextUnit::linkback("@nider", font).bottom_padding(30).build();
//! # Ok::<(), nider::NiderError>(())
//! ```

use std::fmt;

use image::Rgb;
use serde::{Deserialize, Serialize};

use crate::font::Font;

/// Default character budget per wrapped line.
pub const DEFAULT_WRAP_WIDTH: usize = 21;

/// Default gap between wrapped lines, in pixels.
pub const DEFAULT_LINE_PADDING: u32 = 6;

/// Default gap between a linkback and the bottom edge, in pixels.
pub const DEFAULT_BOTTOM_PADDING: u32 = 20;

/// Horizontal alignment of each line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Align {
    Left,
    #[default]
    Center,
    Right,
}

/// Halo drawn around glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outline {
    pub width: u32,
    /// Derived from the unit color when unset.
    pub color: Option<Rgb<u8>>,
}

impl Outline {
    pub fn new(width: u32) -> Self {
        Self { width, color: None }
    }

    pub fn with_color(width: u32, color: Rgb<u8>) -> Self {
        Self {
            width,
            color: Some(color),
        }
    }
}

impl Default for Outline {
    fn default() -> Self {
        Self::new(2)
    }
}

/// What role a unit plays; decides wrapping and extra height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitKind {
    Header,
    Paragraph,
    Linkback { bottom_padding: u32 },
    SingleLine,
    Multiline,
}

impl UnitKind {
    /// Whether units of this kind wrap into several lines.
    pub fn is_multiline(self) -> bool {
        matches!(self, Self::Header | Self::Paragraph | Self::Multiline)
    }
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Header => "header",
            Self::Paragraph => "paragraph",
            Self::Linkback { .. } => "linkback",
            Self::SingleLine => "single-line unit",
            Self::Multiline => "multiline unit",
        };
        f.write_str(name)
    }
}

/// A measured, styled block of text.
#[derive(Debug, Clone)]
pub struct TextUnit {
    kind: UnitKind,
    text: String,
    font: Font,
    /// Resolved against the background when unset.
    pub color: Option<Rgb<u8>>,
    pub align: Align,
    pub outline: Option<Outline>,
    /// Wrapped lines; `None` for single-line units.
    lines: Option<Vec<String>>,
    line_height: u32,
    /// Gap between lines; `None` for single-line units.
    line_padding: Option<u32>,
}

impl TextUnit {
    pub fn header(text: impl Into<String>, font: Font) -> UnitBuilder {
        UnitBuilder::new(UnitKind::Header, text, font)
    }

    pub fn paragraph(text: impl Into<String>, font: Font) -> UnitBuilder {
        UnitBuilder::new(UnitKind::Paragraph, text, font)
    }

    pub fn linkback(text: impl Into<String>, font: Font) -> UnitBuilder {
        UnitBuilder::new(
            UnitKind::Linkback {
                bottom_padding: DEFAULT_BOTTOM_PADDING,
            },
            text,
            font,
        )
    }

    pub fn single_line(text: impl Into<String>, font: Font) -> UnitBuilder {
        UnitBuilder::new(UnitKind::SingleLine, text, font)
    }

    pub fn multiline(text: impl Into<String>, font: Font) -> UnitBuilder {
        UnitBuilder::new(UnitKind::Multiline, text, font)
    }

    /// Build a unit from lines measured elsewhere.
    ///
    /// `line_padding` is ignored for single-line kinds, whose only line is
    /// the raw text.
    pub fn measured(
        kind: UnitKind,
        text: impl Into<String>,
        font: Font,
        lines: Vec<String>,
        line_height: u32,
        line_padding: u32,
    ) -> Self {
        let multiline = kind.is_multiline();
        Self {
            kind,
            text: text.into(),
            font,
            color: None,
            align: Align::default(),
            outline: None,
            lines: multiline.then_some(lines),
            line_height,
            line_padding: multiline.then_some(line_padding),
        }
    }

    pub fn kind(&self) -> UnitKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn font(&self) -> &Font {
        &self.font
    }

    pub fn line_height(&self) -> u32 {
        self.line_height
    }

    pub fn line_padding(&self) -> Option<u32> {
        self.line_padding
    }

    /// Lines to draw. Single-line units fall back to their raw text.
    pub fn lines(&self) -> Vec<&str> {
        match &self.lines {
            Some(lines) => lines.iter().map(String::as_str).collect(),
            None => vec![self.text.as_str()],
        }
    }

    /// Vertical extent: `n * (line_height + padding) - padding`, plus the
    /// bottom padding for linkbacks.
    pub fn height(&self) -> u32 {
        let base = match (&self.lines, self.line_padding) {
            (Some(lines), Some(padding)) => {
                let n = lines.len() as u32;
                (n * (self.line_height + padding)).saturating_sub(padding)
            }
            _ => self.line_height,
        };
        match self.kind {
            UnitKind::Linkback { bottom_padding } => base + bottom_padding,
            _ => base,
        }
    }
}

/// Builder returned by the [`TextUnit`] constructors.
pub struct UnitBuilder {
    kind: UnitKind,
    text: String,
    font: Font,
    color: Option<Rgb<u8>>,
    align: Align,
    outline: Option<Outline>,
    wrap_width: usize,
    line_padding: u32,
}

impl UnitBuilder {
    fn new(kind: UnitKind, text: impl Into<String>, font: Font) -> Self {
        Self {
            kind,
            text: text.into(),
            font,
            color: None,
            align: Align::default(),
            outline: None,
            wrap_width: DEFAULT_WRAP_WIDTH,
            line_padding: DEFAULT_LINE_PADDING,
        }
    }

    pub fn color(mut self, color: Rgb<u8>) -> Self {
        self.color = Some(color);
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn outline(mut self, outline: Outline) -> Self {
        self.outline = Some(outline);
        self
    }

    /// Characters per line for multi-line units.
    pub fn wrap_width(mut self, chars: usize) -> Self {
        self.wrap_width = chars.max(1);
        self
    }

    pub fn line_padding(mut self, pixels: u32) -> Self {
        self.line_padding = pixels;
        self
    }

    /// Only meaningful for linkbacks.
    pub fn bottom_padding(mut self, pixels: u32) -> Self {
        if let UnitKind::Linkback { bottom_padding } = &mut self.kind {
            *bottom_padding = pixels;
        }
        self
    }

    /// Wrap and measure the text.
    pub fn build(self) -> TextUnit {
        let lines = if self.kind.is_multiline() {
            wrap(&self.text, self.wrap_width)
        } else {
            Vec::new()
        };
        let line_height = self.font.line_height();
        let mut unit = TextUnit::measured(
            self.kind,
            self.text,
            self.font,
            lines,
            line_height,
            self.line_padding,
        );
        unit.color = self.color;
        unit.align = self.align;
        unit.outline = self.outline;
        unit
    }
}

/// Greedy word wrap to at most `width` characters per line.
///
/// Whitespace runs collapse; words longer than `width` are split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        let mut chars: Vec<char> = word.chars().collect();

        while chars.len() > width {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            lines.push(chars.drain(..width).collect());
        }
        if chars.is_empty() {
            continue;
        }

        let needed = if current_len == 0 {
            chars.len()
        } else {
            current_len + 1 + chars.len()
        };
        if needed > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.extend(chars.iter());
        current_len += chars.len();
    }

    if current_len > 0 {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::testing::block_font;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_wrap_greedy() {
        assert_eq!(
            wrap("the quick brown fox jumps over", 10),
            vec!["the quick", "brown fox", "jumps over"]
        );
    }

    #[test]
    fn test_wrap_splits_long_words() {
        assert_eq!(wrap("abcdefghij xy", 4), vec!["abcd", "efgh", "ij", "xy"]);
        assert_eq!(wrap("ok abcdefgh", 4), vec!["ok", "abcd", "efgh"]);
    }

    #[test]
    fn test_wrap_empty() {
        assert!(wrap("   ", 10).is_empty());
    }

    #[test]
    fn test_multiline_height() {
        let unit = TextUnit::paragraph("aaaa bbbb cccc", block_font(10, 20))
            .wrap_width(4)
            .line_padding(5)
            .build();
        assert_eq!(unit.lines(), vec!["aaaa", "bbbb", "cccc"]);
        // 3 * (20 + 5) - 5
        assert_eq!(unit.height(), 70);
    }

    #[test]
    fn test_single_line_falls_back_to_text() {
        let unit = TextUnit::single_line("one long line of text", block_font(10, 20)).build();
        assert_eq!(unit.lines(), vec!["one long line of text"]);
        assert_eq!(unit.line_padding(), None);
        assert_eq!(unit.height(), 20);
    }

    #[test]
    fn test_linkback_adds_bottom_padding() {
        let unit = TextUnit::linkback("@nider", block_font(10, 20)).build();
        assert_eq!(unit.height(), 20 + DEFAULT_BOTTOM_PADDING);

        let unit = TextUnit::linkback("@nider", block_font(10, 20))
            .bottom_padding(7)
            .build();
        assert_eq!(unit.height(), 27);
    }

    #[test]
    fn test_bottom_padding_ignored_for_other_kinds() {
        let unit = TextUnit::header("hi", block_font(10, 20))
            .bottom_padding(50)
            .build();
        assert_eq!(unit.kind(), UnitKind::Header);
        assert_eq!(unit.height(), 20);
    }

    #[test]
    fn test_measured_unit() {
        let unit = TextUnit::measured(
            UnitKind::Paragraph,
            "ignored for layout",
            block_font(10, 20),
            vec!["a".into(), "b".into()],
            30,
            4,
        );
        assert_eq!(unit.height(), 64);
        assert_eq!(unit.color, None);
    }

    #[test]
    fn test_empty_multiline_has_zero_height() {
        let unit = TextUnit::paragraph("", block_font(10, 20)).build();
        assert!(unit.lines().is_empty());
        assert_eq!(unit.height(), 0);
    }
}
