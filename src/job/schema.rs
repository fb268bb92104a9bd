//! JSON schema types for render jobs.

use std::path::PathBuf;

use serde::Deserialize;

use crate::adjust::{Enhancement, Filter};
use crate::unit::Align;

fn default_font_size() -> f32 {
    18.0
}

/// Top-level JSON job.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JobFile {
    /// Where to save the rendered image.
    pub output: PathBuf,
    /// Named size preset, e.g. "instagram-portrait-post".
    #[serde(default)]
    pub preset: Option<String>,
    /// Explicit width; overrides the preset width.
    #[serde(default)]
    pub width: Option<u32>,
    /// Explicit height; overrides the preset height.
    #[serde(default)]
    pub height: Option<u32>,
    /// Padding between units (default: 45).
    #[serde(default)]
    pub padding: Option<u32>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub background: JsonBackground,
    #[serde(default)]
    pub header: Option<JsonUnit>,
    #[serde(default)]
    pub paragraph: Option<JsonUnit>,
    #[serde(default)]
    pub linkback: Option<JsonUnit>,
}

/// Background to draw on.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum JsonBackground {
    /// Solid color; random FLAT UI color when omitted.
    Color {
        #[serde(default)]
        color: Option<String>,
    },
    /// Tiled texture; random file from `texture_dir` when `path` is omitted.
    Texture {
        #[serde(default)]
        path: Option<PathBuf>,
        #[serde(default)]
        texture_dir: Option<PathBuf>,
    },
    /// Existing photo with optional adjustments.
    Photo {
        path: PathBuf,
        #[serde(default)]
        filters: Vec<Filter>,
        #[serde(default)]
        enhancements: Vec<Enhancement>,
    },
}

impl Default for JsonBackground {
    fn default() -> Self {
        JsonBackground::Color { color: None }
    }
}

/// One text unit.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JsonUnit {
    pub text: String,
    /// Path to a TTF/OTF font.
    pub font: PathBuf,
    #[serde(default = "default_font_size")]
    pub font_size: f32,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub align: Option<Align>,
    #[serde(default)]
    pub outline: Option<JsonOutline>,
    /// Characters per line (header/paragraph only).
    #[serde(default)]
    pub wrap_width: Option<usize>,
    /// Pixels between lines (header/paragraph only).
    #[serde(default)]
    pub line_padding: Option<u32>,
    /// Pixels above the bottom edge (linkback only).
    #[serde(default)]
    pub bottom_padding: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JsonOutline {
    #[serde(default = "default_outline_width")]
    pub width: u32,
    #[serde(default)]
    pub color: Option<String>,
}

fn default_outline_width() -> u32 {
    2
}
