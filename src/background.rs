//! Where backgrounds come from when the caller does not pick one.
//!
//! [`Image`](crate::Image) asks a [`BackgroundSource`] for a flat color or a
//! texture path. [`RandomBackground`] picks randomly; tests plug in fixed
//! sources instead.

use std::path::{Path, PathBuf};

use image::Rgb;
use rand::seq::IndexedRandom;

use crate::color::FLAT_UI;
use crate::error::{NiderError, Result};

/// File extensions treated as textures.
const TEXTURE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "gif", "webp"];

pub trait BackgroundSource {
    /// A background color.
    fn flat_color(&mut self) -> Rgb<u8>;

    /// Path to a texture image.
    fn texture(&mut self) -> Result<PathBuf>;
}

/// Random FLAT UI colors and random textures from a directory.
#[derive(Debug, Clone, Default)]
pub struct RandomBackground {
    texture_dir: Option<PathBuf>,
}

impl RandomBackground {
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory to draw random textures from.
    pub fn with_texture_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            texture_dir: Some(dir.into()),
        }
    }
}

impl BackgroundSource for RandomBackground {
    fn flat_color(&mut self) -> Rgb<u8> {
        let mut rng = rand::rng();
        FLAT_UI
            .choose(&mut rng)
            .map(|(_, color)| *color)
            .unwrap_or(FLAT_UI[0].1)
    }

    fn texture(&mut self) -> Result<PathBuf> {
        let dir = self.texture_dir.as_deref().ok_or_else(|| {
            NiderError::Configuration("no texture given and no texture directory configured".into())
        })?;

        let candidates = list_textures(dir)?;
        let mut rng = rand::rng();
        candidates.choose(&mut rng).cloned().ok_or_else(|| {
            NiderError::Configuration(format!("no textures found in {}", dir.display()))
        })
    }
}

/// Image files directly inside `dir`, sorted.
fn list_textures(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        let is_texture = path.is_file()
            && path
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| TEXTURE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
                .unwrap_or(false);
        if is_texture {
            found.push(path);
        }
    }
    found.sort();
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_color_comes_from_palette() {
        let mut source = RandomBackground::new();
        for _ in 0..20 {
            let color = source.flat_color();
            assert!(FLAT_UI.iter().any(|(_, c)| *c == color));
        }
    }

    #[test]
    fn test_texture_without_dir_is_configuration_error() {
        let err = RandomBackground::new().texture().unwrap_err();
        assert!(matches!(err, NiderError::Configuration(_)));
    }

    #[test]
    fn test_texture_picks_image_files_only() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("notes.txt"), "not a texture").unwrap();
        std::fs::write(dir.path().join("paper.PNG"), b"").unwrap();

        let mut source = RandomBackground::with_texture_dir(dir.path());
        assert_eq!(source.texture().unwrap(), dir.path().join("paper.PNG"));
    }

    #[test]
    fn test_empty_texture_dir() {
        let dir = tempfile::tempdir().unwrap();
        let err = RandomBackground::with_texture_dir(dir.path())
            .texture()
            .unwrap_err();
        assert!(matches!(err, NiderError::Configuration(_)));
    }
}
