//! # Fonts
//!
//! Text measurement and glyph coverage, behind the [`Typeface`] trait so the
//! layout engine never depends on a particular font backend.
//!
//! [`TtfFace`] renders TrueType/OpenType fonts with `ab_glyph`, producing
//! anti-aliased coverage in `0.0..=1.0` that the canvas blends into pixels.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use ab_glyph::{Font as _, FontArc, PxScale, ScaleFont};

use crate::error::{NiderError, Result};

/// Measures and rasterizes single lines of text.
pub trait Typeface: Send + Sync {
    /// Rendered (width, height) of one line in pixels.
    fn text_size(&self, text: &str) -> (u32, u32);

    /// Height of one line box in pixels.
    fn line_height(&self) -> u32;

    /// Emit glyph coverage for `text`, relative to the top-left of its line box.
    fn rasterize(&self, text: &str, plot: &mut dyn FnMut(i32, i32, f32));
}

/// Shared handle to a typeface.
#[derive(Clone)]
pub struct Font {
    face: Arc<dyn Typeface>,
    name: String,
}

impl Font {
    /// Wrap any typeface.
    pub fn new(name: impl Into<String>, face: impl Typeface + 'static) -> Self {
        Self {
            face: Arc::new(face),
            name: name.into(),
        }
    }

    /// Load a TTF/OTF file at the given pixel size.
    pub fn from_file(path: impl AsRef<Path>, pixel_size: f32) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(NiderError::ResourceNotFound {
                kind: "font",
                path: path.to_path_buf(),
            });
        }
        let bytes = std::fs::read(path)?;
        let face = TtfFace::from_vec(bytes, pixel_size)?;
        Ok(Self::new(path.display().to_string(), face))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn text_size(&self, text: &str) -> (u32, u32) {
        self.face.text_size(text)
    }

    #[inline]
    pub fn line_height(&self) -> u32 {
        self.face.line_height()
    }

    #[inline]
    pub fn rasterize(&self, text: &str, plot: &mut dyn FnMut(i32, i32, f32)) {
        self.face.rasterize(text, plot)
    }
}

impl fmt::Debug for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Font").field("name", &self.name).finish()
    }
}

/// TrueType face at a fixed pixel size.
pub struct TtfFace {
    font: FontArc,
    scale: PxScale,
}

impl TtfFace {
    pub fn from_vec(bytes: Vec<u8>, pixel_size: f32) -> Result<Self> {
        let font = FontArc::try_from_vec(bytes).map_err(|e| NiderError::Font(e.to_string()))?;
        Ok(Self {
            font,
            scale: PxScale::from(pixel_size),
        })
    }

    /// Glyph ids with their caret x positions, plus the total advance.
    fn layout(&self, text: &str) -> (Vec<(ab_glyph::GlyphId, f32)>, f32) {
        let scaled = self.font.as_scaled(self.scale);
        let mut glyphs = Vec::with_capacity(text.len());
        let mut caret_x = 0.0f32;
        let mut previous = None;

        for ch in text.chars() {
            let glyph_id = scaled.glyph_id(ch);
            if let Some(prev) = previous {
                caret_x += scaled.kern(prev, glyph_id);
            }
            glyphs.push((glyph_id, caret_x));
            caret_x += scaled.h_advance(glyph_id);
            previous = Some(glyph_id);
        }

        (glyphs, caret_x)
    }
}

impl Typeface for TtfFace {
    fn text_size(&self, text: &str) -> (u32, u32) {
        let (_, advance) = self.layout(text);
        (advance.ceil() as u32, self.line_height())
    }

    fn line_height(&self) -> u32 {
        let scaled = self.font.as_scaled(self.scale);
        (scaled.ascent() - scaled.descent()).ceil().max(1.0) as u32
    }

    fn rasterize(&self, text: &str, plot: &mut dyn FnMut(i32, i32, f32)) {
        let baseline_y = self.font.as_scaled(self.scale).ascent();
        let (glyphs, _) = self.layout(text);

        for (glyph_id, glyph_x) in glyphs {
            let glyph =
                glyph_id.with_scale_and_position(self.scale, ab_glyph::point(glyph_x, baseline_y));

            if let Some(outlined) = self.font.outline_glyph(glyph) {
                let bounds = outlined.px_bounds();
                outlined.draw(|px, py, coverage| {
                    plot(
                        px as i32 + bounds.min.x as i32,
                        py as i32 + bounds.min.y as i32,
                        coverage,
                    );
                });
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::testing::block_font;
    use super::*;

    #[test]
    fn test_missing_font_file() {
        let err = Font::from_file("/definitely/not/here.ttf", 24.0).unwrap_err();
        assert!(matches!(err, NiderError::ResourceNotFound { kind: "font", .. }));
    }

    #[test]
    fn test_invalid_font_bytes() {
        assert!(matches!(
            TtfFace::from_vec(vec![0, 1, 2, 3], 24.0),
            Err(NiderError::Font(_))
        ));
    }

    #[test]
    fn test_block_font_metrics() {
        let font = block_font(10, 20);
        assert_eq!(font.text_size("abc"), (30, 20));
        assert_eq!(font.line_height(), 20);

        let mut covered = 0;
        font.rasterize("a b", &mut |_, _, _| covered += 1);
        assert_eq!(covered, 2 * 9 * 20);
    }
}
