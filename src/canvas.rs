//! # Canvas
//!
//! The RGBA pixel buffer every render path draws into. Wraps an
//! [`image::RgbaImage`] and implements [`Surface`] by alpha-blending glyph
//! coverage from the unit's font.

use std::path::Path;

use image::{DynamicImage, Rgb, Rgba, RgbaImage, imageops};

use crate::error::{NiderError, Result};
use crate::font::Font;
use crate::raster::Surface;

#[derive(Debug, Clone)]
pub struct Canvas {
    buffer: RgbaImage,
}

impl Canvas {
    /// Allocate a transparent canvas.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(NiderError::Configuration(format!(
                "canvas size must be positive, got {}x{}",
                width, height
            )));
        }
        Ok(Self {
            buffer: RgbaImage::new(width, height),
        })
    }

    /// Adopt an existing image, e.g. a photo.
    pub fn from_image(buffer: RgbaImage) -> Self {
        Self { buffer }
    }

    pub fn buffer(&self) -> &RgbaImage {
        &self.buffer
    }

    /// Paint every pixel with an opaque color.
    pub fn fill(&mut self, color: Rgb<u8>) {
        let [r, g, b] = color.0;
        for pixel in self.buffer.pixels_mut() {
            *pixel = Rgba([r, g, b, 255]);
        }
    }

    /// Repeat `texture` from the top-left corner until the canvas is covered.
    pub fn tile(&mut self, texture: &RgbaImage) {
        let offsets = tile_offsets(
            self.buffer.width(),
            self.buffer.height(),
            texture.width(),
            texture.height(),
        );
        for (x, y) in offsets {
            imageops::replace(&mut self.buffer, texture, x as i64, y as i64);
        }
    }

    /// Encode to `path`; the format follows the extension.
    ///
    /// JPEG has no alpha channel, so JPEG targets are flattened to RGB.
    pub fn save(&self, path: &Path) -> Result<()> {
        let is_jpeg = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| matches!(ext.to_ascii_lowercase().as_str(), "jpg" | "jpeg"))
            .unwrap_or(false);

        if is_jpeg {
            DynamicImage::ImageRgba8(self.buffer.clone())
                .to_rgb8()
                .save(path)?;
        } else {
            self.buffer.save(path)?;
        }
        Ok(())
    }

    fn blend_pixel(&mut self, x: i32, y: i32, color: Rgb<u8>, coverage: f32) {
        if x < 0 || y < 0 || x as u32 >= self.buffer.width() || y as u32 >= self.buffer.height() {
            return;
        }
        let alpha = coverage.clamp(0.0, 1.0);
        if alpha <= 0.0 {
            return;
        }

        let pixel = self.buffer.get_pixel_mut(x as u32, y as u32);
        let [r, g, b, a] = pixel.0;
        let mix = |under: u8, over: u8| (under as f32 + (over as f32 - under as f32) * alpha).round() as u8;
        let out_alpha = alpha * 255.0 + a as f32 * (1.0 - alpha);
        *pixel = Rgba([
            mix(r, color.0[0]),
            mix(g, color.0[1]),
            mix(b, color.0[2]),
            out_alpha.round().min(255.0) as u8,
        ]);
    }
}

impl Surface for Canvas {
    fn width(&self) -> u32 {
        self.buffer.width()
    }

    fn draw_text(&mut self, x: f32, y: f32, text: &str, font: &Font, color: Rgb<u8>) {
        let origin_x = x.round() as i32;
        let origin_y = y.round() as i32;
        font.rasterize(text, &mut |px, py, coverage| {
            self.blend_pixel(origin_x + px, origin_y + py, color, coverage);
        });
    }
}

/// Top-left corners needed to cover a `width`×`height` canvas with a
/// `tile_width`×`tile_height` texture, row by row.
pub fn tile_offsets(width: u32, height: u32, tile_width: u32, tile_height: u32) -> Vec<(u32, u32)> {
    if tile_width == 0 || tile_height == 0 {
        return Vec::new();
    }
    let columns = width.div_ceil(tile_width);
    let rows = height.div_ceil(tile_height);

    (0..rows)
        .flat_map(|row| (0..columns).map(move |column| (column * tile_width, row * tile_height)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::testing::block_font;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_zero_size_is_rejected() {
        assert!(matches!(Canvas::new(0, 10), Err(NiderError::Configuration(_))));
        assert!(matches!(Canvas::new(10, 0), Err(NiderError::Configuration(_))));
    }

    #[test]
    fn test_tile_offsets_grid() {
        let offsets = tile_offsets(1080, 1080, 400, 400);
        assert_eq!(
            offsets,
            vec![
                (0, 0),
                (400, 0),
                (800, 0),
                (0, 400),
                (400, 400),
                (800, 400),
                (0, 800),
                (400, 800),
                (800, 800),
            ]
        );
    }

    #[test]
    fn test_tile_offsets_exact_fit() {
        assert_eq!(tile_offsets(200, 100, 100, 100), vec![(0, 0), (100, 0)]);
        assert!(tile_offsets(200, 100, 0, 100).is_empty());
    }

    #[test]
    fn test_tile_covers_canvas() {
        let mut texture = RgbaImage::from_pixel(4, 4, Rgba([10, 20, 30, 255]));
        texture.put_pixel(0, 0, Rgba([255, 0, 0, 255]));

        let mut canvas = Canvas::new(10, 6).unwrap();
        canvas.tile(&texture);

        assert!(canvas.buffer().pixels().all(|p| p.0[3] == 255));
        assert_eq!(canvas.buffer().get_pixel(8, 4), &Rgba([255, 0, 0, 255]));
        assert_eq!(canvas.buffer().get_pixel(9, 5), &Rgba([10, 20, 30, 255]));
    }

    #[test]
    fn test_fill() {
        let mut canvas = Canvas::new(3, 3).unwrap();
        canvas.fill(Rgb([1, 2, 3]));
        assert!(canvas.buffer().pixels().all(|p| *p == Rgba([1, 2, 3, 255])));
    }

    #[test]
    fn test_draw_text_blends_coverage() {
        let mut canvas = Canvas::new(40, 20).unwrap();
        canvas.fill(Rgb([0, 0, 0]));
        canvas.draw_text(2.0, 3.0, "a", &block_font(5, 4), Rgb([200, 100, 50]));

        assert_eq!(canvas.buffer().get_pixel(2, 3), &Rgba([200, 100, 50, 255]));
        assert_eq!(canvas.buffer().get_pixel(5, 6), &Rgba([200, 100, 50, 255]));
        // block glyph leaves the last column of its advance empty
        assert_eq!(canvas.buffer().get_pixel(6, 3), &Rgba([0, 0, 0, 255]));
        assert_eq!(canvas.buffer().get_pixel(2, 7), &Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn test_draw_text_clips_at_edges() {
        let mut canvas = Canvas::new(4, 4).unwrap();
        canvas.draw_text(-2.0, -2.0, "aaaa", &block_font(4, 10), Rgb([9, 9, 9]));
        assert_eq!(canvas.buffer().get_pixel(0, 0), &Rgba([9, 9, 9, 255]));
    }

    #[test]
    fn test_save_png_and_jpeg() {
        let dir = tempfile::tempdir().unwrap();
        let mut canvas = Canvas::new(8, 8).unwrap();
        canvas.fill(Rgb([50, 60, 70]));

        let png = dir.path().join("out.png");
        let jpg = dir.path().join("out.jpg");
        canvas.save(&png).unwrap();
        canvas.save(&jpg).unwrap();

        let reloaded = image::open(&png).unwrap().to_rgba8();
        assert_eq!(reloaded.get_pixel(4, 4), &Rgba([50, 60, 70, 255]));
        assert_eq!(image::open(&jpg).unwrap().width(), 8);
    }
}
