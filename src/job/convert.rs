//! Conversion from job schema types to content and images.

use std::path::{Path, PathBuf};

use crate::background::RandomBackground;
use crate::color;
use crate::compose::{Image, RenderReport};
use crate::content::{Content, DEFAULT_PADDING};
use crate::error::{NiderError, Result};
use crate::font::Font;
use crate::presets::Preset;
use crate::unit::{Outline, TextUnit, UnitBuilder};

use super::schema::*;

/// Resolve `path` against `base` unless it is absolute.
fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

impl JobFile {
    /// Canvas size from the preset and explicit overrides.
    pub fn size(&self) -> Result<(u32, u32)> {
        let preset = match &self.preset {
            Some(name) => Preset::by_name(name)
                .ok_or_else(|| NiderError::Configuration(format!("unknown preset '{}'", name)))?,
            None => Preset::default(),
        };
        Ok((
            self.width.unwrap_or(preset.width),
            self.height.unwrap_or(preset.height),
        ))
    }

    /// Load fonts, measure units and build the content.
    pub fn to_content(&self, base: &Path) -> Result<Content> {
        let mut builder = Content::builder().padding(self.padding.unwrap_or(DEFAULT_PADDING));
        if let Some(unit) = &self.header {
            builder = builder.header(unit.to_unit(base, |text, font| TextUnit::header(text, font))?);
        }
        if let Some(unit) = &self.paragraph {
            builder = builder.paragraph(unit.to_unit(base, |text, font| TextUnit::paragraph(text, font))?);
        }
        if let Some(unit) = &self.linkback {
            builder = builder.linkback(unit.to_unit(base, |text, font| TextUnit::linkback(text, font))?);
        }
        builder.build()
    }

    /// Render the job. Relative paths are taken relative to `base`.
    pub fn run(&self, base: &Path) -> Result<RenderReport> {
        let (width, height) = self.size()?;
        let content = self.to_content(base)?;
        let mut image = Image::new(content, resolve(base, &self.output), width, height)?;
        if let Some(title) = &self.title {
            image = image.title(title.as_str());
        }
        if let Some(description) = &self.description {
            image = image.description(description.as_str());
        }

        match &self.background {
            JsonBackground::Color { color: value } => {
                let bg = value.as_deref().map(color::parse).transpose()?;
                image.draw_on_bg(bg)
            }
            JsonBackground::Texture { path, texture_dir } => {
                if let Some(dir) = texture_dir {
                    image = image.background_source(RandomBackground::with_texture_dir(resolve(base, dir)));
                }
                let path = path.as_ref().map(|p| resolve(base, p));
                image.draw_on_texture(path.as_deref())
            }
            JsonBackground::Photo {
                path,
                filters,
                enhancements,
            } => image.draw_on_image(&resolve(base, path), filters, enhancements),
        }
    }
}

impl JsonUnit {
    fn to_unit(&self, base: &Path, make: fn(String, Font) -> UnitBuilder) -> Result<TextUnit> {
        let font = Font::from_file(resolve(base, &self.font), self.font_size)?;
        let mut builder = make(self.text.clone(), font);

        if let Some(value) = &self.color {
            builder = builder.color(color::parse(value)?);
        }
        if let Some(align) = self.align {
            builder = builder.align(align);
        }
        if let Some(outline) = &self.outline {
            let color = outline.color.as_deref().map(color::parse).transpose()?;
            builder = builder.outline(Outline {
                width: outline.width,
                color,
            });
        }
        if let Some(chars) = self.wrap_width {
            builder = builder.wrap_width(chars);
        }
        if let Some(pixels) = self.line_padding {
            builder = builder.line_padding(pixels);
        }
        if let Some(pixels) = self.bottom_padding {
            builder = builder.bottom_padding(pixels);
        }
        Ok(builder.build())
    }
}
