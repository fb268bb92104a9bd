//! # Image
//!
//! Orchestrates one render: background, color resolution, sizing, layout,
//! rasterization and saving.
//!
//! ## Pipeline
//!
//! ```text
//! draw_on_bg / draw_on_texture / draw_on_image
//!        │
//!        ├─ contrast color (only if some unit lacks a color)
//!        ├─ size_canvas  (grows the canvas on overflow; not for photos)
//!        ├─ fill / tile / load photo + adjustments
//!        ├─ resolve_units (unit colors, then outline colors)
//!        ├─ draw_content
//!        └─ save
//! ```
//!
//! Each entry point consumes the `Image`, so an instance renders once.
//! Missing textures or photos fail before any canvas is allocated.

use std::path::{Path, PathBuf};

use image::{Rgb, RgbaImage};

use crate::adjust::{self, Enhancement, Filter};
use crate::background::{BackgroundSource, RandomBackground};
use crate::canvas::Canvas;
use crate::color::{self, dominant_color, opposite};
use crate::content::Content;
use crate::error::{NiderError, Result};
use crate::layout::{CanvasSize, size_canvas};
use crate::notice::Notice;
use crate::presets::Preset;
use crate::raster::draw_content;

/// What a finished render produced.
#[derive(Debug, Clone)]
pub struct RenderReport {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    /// False if the canvas had to grow to fit the content.
    pub fits: bool,
    pub title: String,
    pub description: String,
    /// Non-fatal diagnostics, in the order they were raised.
    pub notices: Vec<Notice>,
}

/// A text image waiting to be drawn.
pub struct Image {
    content: Content,
    output: PathBuf,
    width: u32,
    height: u32,
    title: String,
    description: String,
    background: Box<dyn BackgroundSource>,
}

impl Image {
    /// Create an image of the requested size that will be saved to `output`.
    ///
    /// Fails if the size is not positive or `output` cannot be created.
    pub fn new(content: Content, output: impl Into<PathBuf>, width: u32, height: u32) -> Result<Self> {
        let output = output.into();
        if !is_path_creatable(&output) {
            return Err(NiderError::Configuration(format!(
                "it seems impossible to create a file in path {}",
                output.display()
            )));
        }
        if width == 0 || height == 0 {
            return Err(NiderError::Configuration(
                "width and height of the image have to be positive".into(),
            ));
        }

        let title = content.header().map(|u| u.text().to_string()).unwrap_or_default();
        let description = content
            .paragraph()
            .map(|u| u.text().to_string())
            .unwrap_or_default();

        Ok(Self {
            content,
            output,
            width,
            height,
            title,
            description,
            background: Box::new(RandomBackground::new()),
        })
    }

    /// Create an image sized by a preset.
    pub fn from_preset(content: Content, output: impl Into<PathBuf>, preset: Preset) -> Result<Self> {
        Self::new(content, output, preset.width, preset.height)
    }

    /// Override the title (defaults to the header text).
    pub fn title(mut self, title: impl Into<String>) -> Self {
        let title = title.into();
        if !title.is_empty() {
            self.title = title;
        }
        self
    }

    /// Override the description (defaults to the paragraph text).
    pub fn description(mut self, description: impl Into<String>) -> Self {
        let description = description.into();
        if !description.is_empty() {
            self.description = description;
        }
        self
    }

    /// Source of random colors/textures when none is given.
    pub fn background_source(mut self, source: impl BackgroundSource + 'static) -> Self {
        self.background = Box::new(source);
        self
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    /// Draw on a tiled texture; a random one is used when `texture` is `None`.
    pub fn draw_on_texture(mut self, texture: Option<&Path>) -> Result<RenderReport> {
        let texture_path = match texture {
            Some(path) => path.to_path_buf(),
            None => self.background.texture()?,
        };
        if !texture_path.is_file() {
            return Err(NiderError::ResourceNotFound {
                kind: "texture",
                path: texture_path,
            });
        }
        tracing::debug!(texture = %texture_path.display(), "Drawing on texture");

        let texture = image::open(&texture_path)?.to_rgba8();
        let contrast = self.contrast_with(|| dominant_color(&texture));

        let mut notices = Vec::new();
        let (size, notice) = size_canvas(self.width, self.height, &self.content);
        notices.extend(notice);

        let mut canvas = Canvas::new(size.width, size.height)?;
        canvas.tile(&texture);

        self.finish(canvas, size, contrast, notices)
    }

    /// Draw on a solid color; a random FLAT UI color is used when `color` is `None`.
    pub fn draw_on_bg(mut self, color: Option<Rgb<u8>>) -> Result<RenderReport> {
        let bg = match color {
            Some(color) => color,
            None => self.background.flat_color(),
        };
        tracing::debug!(color = %color::to_hex(bg), "Drawing on solid background");

        let contrast = self.contrast_with(|| bg);

        let mut notices = Vec::new();
        let (size, notice) = size_canvas(self.width, self.height, &self.content);
        notices.extend(notice);

        let mut canvas = Canvas::new(size.width, size.height)?;
        canvas.fill(bg);

        self.finish(canvas, size, contrast, notices)
    }

    /// Draw on a photo. The photo's size replaces the requested size.
    ///
    /// Filters run first, in order, then enhancements, in order.
    pub fn draw_on_image(
        self,
        photo: &Path,
        filters: &[Filter],
        enhancements: &[Enhancement],
    ) -> Result<RenderReport> {
        if !photo.is_file() {
            return Err(NiderError::ResourceNotFound {
                kind: "image",
                path: photo.to_path_buf(),
            });
        }
        tracing::debug!(photo = %photo.display(), "Drawing on photo");

        let loaded: RgbaImage = image::open(photo)?.to_rgba8();
        let contrast = self.contrast_with(|| dominant_color(&loaded));
        let adjusted = adjust::apply_all(&loaded, filters, enhancements);

        let size = CanvasSize::fixed(adjusted.width(), adjusted.height());
        let canvas = Canvas::from_image(adjusted);

        self.finish(canvas, size, contrast, Vec::new())
    }

    /// Contrast color for the background, computed only when needed.
    fn contrast_with(&self, background: impl FnOnce() -> Rgb<u8>) -> Option<Rgb<u8>> {
        self.content
            .depends_on_opposite_to_bg_color()
            .then(|| opposite(background()))
    }

    fn finish(
        mut self,
        mut canvas: Canvas,
        size: CanvasSize,
        contrast: Option<Rgb<u8>>,
        mut notices: Vec<Notice>,
    ) -> Result<RenderReport> {
        notices.extend(color::resolve_units(&mut self.content, contrast));

        draw_content(&mut canvas, &self.content, size);

        tracing::debug!(path = %self.output.display(), "Saving image");
        canvas.save(&self.output)?;
        tracing::info!(
            path = %self.output.display(),
            width = size.width,
            height = size.height,
            "Rendered image"
        );

        Ok(RenderReport {
            path: self.output,
            width: size.width,
            height: size.height,
            fits: size.fits,
            title: self.title,
            description: self.description,
            notices,
        })
    }
}

/// True if a file could be created at `path`: its directory exists and is
/// not read-only.
pub fn is_path_creatable(path: &Path) -> bool {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::metadata(dir)
        .map(|meta| meta.is_dir() && !meta.permissions().readonly())
        .unwrap_or(false)
}
