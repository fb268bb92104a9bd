//! # Rasterizer
//!
//! Draws measured units line by line onto a [`Surface`]. Outlined units get
//! eight offset copies in the outline color first, so the fill pass always
//! sits on top:
//!
//! ```text
//!   ↖ ↑ ↗
//!   ←   →     offsets of ±outline.width
//!   ↙ ↓ ↘
//! ```

use image::Rgb;

use crate::color::BLACK;
use crate::content::{Content, Slot};
use crate::font::Font;
use crate::layout::{CanvasSize, line_x, plan};
use crate::unit::TextUnit;

/// Unit directions of the outline copies: edges first, then diagonals.
pub const OUTLINE_DIRECTIONS: [(f32, f32); 8] = [
    (-1.0, 0.0),
    (1.0, 0.0),
    (0.0, -1.0),
    (0.0, 1.0),
    (-1.0, -1.0),
    (1.0, -1.0),
    (-1.0, 1.0),
    (1.0, 1.0),
];

/// Something text can be drawn on.
pub trait Surface {
    /// Width used for alignment.
    fn width(&self) -> u32;

    /// Draw one line with its line box's top-left corner at `(x, y)`.
    fn draw_text(&mut self, x: f32, y: f32, text: &str, font: &Font, color: Rgb<u8>);
}

/// Draw every unit of `content` at the positions planned for `size`.
pub fn draw_content<S: Surface>(surface: &mut S, content: &Content, size: CanvasSize) {
    for (slot, top) in plan(content, size) {
        let unit = match slot {
            Slot::Header => content.header(),
            Slot::Paragraph => content.paragraph(),
            Slot::Linkback => content.linkback(),
        };
        if let Some(unit) = unit {
            tracing::debug!(slot = ?slot, top, lines = unit.lines().len(), "Drawing unit");
            draw_unit(surface, unit, top);
        }
    }
}

/// Draw a unit starting at `top`.
///
/// Single-line units draw one line and never advance; multi-line units
/// advance by line height plus line padding after each line.
pub fn draw_unit<S: Surface>(surface: &mut S, unit: &TextUnit, top: i32) {
    let canvas_width = surface.width();
    let font = unit.font();
    // Colors are resolved before drawing; anything left unset draws black.
    let fill = unit.color.unwrap_or(BLACK);
    let mut y = top as f32;

    for line in unit.lines() {
        let (line_width, _) = font.text_size(line);
        let x = line_x(unit.align, canvas_width, line_width);

        if let Some(outline) = unit.outline {
            let halo = outline.color.unwrap_or(fill);
            let d = outline.width as f32;
            for (dx, dy) in OUTLINE_DIRECTIONS {
                surface.draw_text(x + dx * d, y + dy * d, line, font, halo);
            }
        }

        surface.draw_text(x, y, line, font, fill);

        if let Some(padding) = unit.line_padding() {
            y += (unit.line_height() + padding) as f32;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::testing::block_font;
    use crate::unit::{Align, Outline, TextUnit};
    use pretty_assertions::assert_eq;

    /// Records draw calls instead of touching pixels.
    struct Recorder {
        width: u32,
        calls: Vec<(f32, f32, String, Rgb<u8>)>,
    }

    impl Recorder {
        fn new(width: u32) -> Self {
            Self {
                width,
                calls: Vec::new(),
            }
        }
    }

    impl Surface for Recorder {
        fn width(&self) -> u32 {
            self.width
        }

        fn draw_text(&mut self, x: f32, y: f32, text: &str, _font: &Font, color: Rgb<u8>) {
            self.calls.push((x, y, text.to_string(), color));
        }
    }

    const FILL: Rgb<u8> = Rgb([255, 255, 255]);
    const HALO: Rgb<u8> = Rgb([1, 1, 1]);

    #[test]
    fn test_plain_line_draws_once() {
        let unit = TextUnit::single_line("abcd", block_font(10, 20))
            .color(FILL)
            .build();
        let mut surface = Recorder::new(100);
        draw_unit(&mut surface, &unit, 7);
        assert_eq!(surface.calls, vec![(30.0, 7.0, "abcd".to_string(), FILL)]);
    }

    #[test]
    fn test_outline_draws_eight_copies_then_fill() {
        let unit = TextUnit::single_line("ab", block_font(10, 20))
            .color(FILL)
            .outline(Outline::with_color(3, HALO))
            .build();
        let mut surface = Recorder::new(100);
        draw_unit(&mut surface, &unit, 50);

        assert_eq!(surface.calls.len(), 9);
        let (halos, fill) = surface.calls.split_at(8);
        assert!(halos.iter().all(|call| call.3 == HALO));
        assert_eq!(fill[0], (40.0, 50.0, "ab".to_string(), FILL));

        let mut offsets: Vec<(i32, i32)> = halos
            .iter()
            .map(|(x, y, _, _)| ((x - 40.0) as i32, (y - 50.0) as i32))
            .collect();
        offsets.sort();
        assert_eq!(
            offsets,
            vec![
                (-3, -3),
                (-3, 0),
                (-3, 3),
                (0, -3),
                (0, 3),
                (3, -3),
                (3, 0),
                (3, 3),
            ]
        );
    }

    #[test]
    fn test_multiline_advances_cursor() {
        let unit = TextUnit::paragraph("aa bbbb", block_font(10, 20))
            .wrap_width(4)
            .line_padding(5)
            .align(Align::Left)
            .color(FILL)
            .build();
        let mut surface = Recorder::new(200);
        draw_unit(&mut surface, &unit, 10);

        let ys: Vec<f32> = surface.calls.iter().map(|call| call.1).collect();
        assert_eq!(ys, vec![10.0, 35.0]);
        assert!(surface.calls.iter().all(|call| (call.0 - 15.0).abs() < 1e-3));
    }

    #[test]
    fn test_outlined_multiline_counts() {
        let unit = TextUnit::header("one two three", block_font(10, 20))
            .wrap_width(5)
            .color(FILL)
            .outline(Outline::with_color(1, HALO))
            .build();
        let mut surface = Recorder::new(500);
        draw_unit(&mut surface, &unit, 0);
        assert_eq!(surface.calls.len(), 3 * 9);
    }

    #[test]
    fn test_draw_content_order() {
        let font = block_font(10, 20);
        let content = Content::builder()
            .linkback(TextUnit::linkback("l", font.clone()).color(FILL).build())
            .paragraph(TextUnit::paragraph("p", font.clone()).color(FILL).build())
            .header(TextUnit::header("h", font).color(FILL).build())
            .build()
            .unwrap();
        let mut surface = Recorder::new(100);
        draw_content(&mut surface, &content, CanvasSize::fixed(100, 1000));

        let drawn: Vec<(&str, f32)> = surface
            .calls
            .iter()
            .map(|call| (call.2.as_str(), call.1))
            .collect();
        // header at padding, paragraph centered, linkback 20+20 above bottom
        assert_eq!(drawn, vec![("h", 45.0), ("p", 490.0), ("l", 960.0)]);
    }
}
