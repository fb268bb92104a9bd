//! # Photo Adjustments
//!
//! Filters and enhancements applied to a photo before text is drawn on it.
//!
//! Enhancements follow the usual "factor" convention: `1.0` leaves the image
//! unchanged, `0.0` yields the degenerate image, and anything above `1.0`
//! extrapolates away from it.
//!
//! | Enhancement | Degenerate image |
//! |-------------|------------------|
//! | Brightness  | black |
//! | Contrast    | mean gray |
//! | Color       | grayscale |
//! | Sharpness   | smoothed |

use image::{DynamicImage, Rgba, RgbaImage, imageops};
use serde::Deserialize;

const SMOOTH_KERNEL: [f32; 9] = [1.0, 1.0, 1.0, 1.0, 5.0, 1.0, 1.0, 1.0, 1.0];
const SHARPEN_KERNEL: [f32; 9] = [-2.0, -2.0, -2.0, -2.0, 32.0, -2.0, -2.0, -2.0, -2.0];

/// Whole-image filters.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Filter {
    /// Gaussian blur with the given sigma.
    Blur { sigma: f32 },
    Sharpen,
    Smooth,
    Grayscale,
    Invert,
}

impl Filter {
    pub fn apply(self, image: &RgbaImage) -> RgbaImage {
        match self {
            Filter::Blur { sigma } => imageops::blur(image, sigma),
            Filter::Sharpen => imageops::filter3x3(image, &SHARPEN_KERNEL),
            Filter::Smooth => imageops::filter3x3(image, &SMOOTH_KERNEL),
            Filter::Grayscale => DynamicImage::ImageRgba8(image.clone()).grayscale().to_rgba8(),
            Filter::Invert => {
                let mut out = image.clone();
                imageops::invert(&mut out);
                out
            }
        }
    }
}

/// Factor-based enhancements.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "type", content = "factor", rename_all = "snake_case")]
pub enum Enhancement {
    Brightness(f32),
    Contrast(f32),
    Color(f32),
    Sharpness(f32),
}

impl Enhancement {
    pub fn apply(self, image: &RgbaImage) -> RgbaImage {
        match self {
            Enhancement::Brightness(factor) => {
                let black = RgbaImage::from_pixel(image.width(), image.height(), Rgba([0, 0, 0, 255]));
                interpolate(&black, image, factor)
            }
            Enhancement::Contrast(factor) => {
                let mean = mean_luma(image);
                let gray = RgbaImage::from_pixel(
                    image.width(),
                    image.height(),
                    Rgba([mean, mean, mean, 255]),
                );
                interpolate(&gray, image, factor)
            }
            Enhancement::Color(factor) => {
                let gray = Filter::Grayscale.apply(image);
                interpolate(&gray, image, factor)
            }
            Enhancement::Sharpness(factor) => {
                let smooth = Filter::Smooth.apply(image);
                interpolate(&smooth, image, factor)
            }
        }
    }
}

/// Apply filters in order, then enhancements in order.
pub fn apply_all(image: &RgbaImage, filters: &[Filter], enhancements: &[Enhancement]) -> RgbaImage {
    let filtered = filters
        .iter()
        .fold(image.clone(), |acc, filter| filter.apply(&acc));
    enhancements
        .iter()
        .fold(filtered, |acc, enhancement| enhancement.apply(&acc))
}

/// `degenerate + (image - degenerate) * factor`, clamped; alpha comes from `image`.
fn interpolate(degenerate: &RgbaImage, image: &RgbaImage, factor: f32) -> RgbaImage {
    let mut out = image.clone();
    for (dst, from) in out.pixels_mut().zip(degenerate.pixels()) {
        for channel in 0..3 {
            let base = from.0[channel] as f32;
            let target = dst.0[channel] as f32;
            dst.0[channel] = (base + (target - base) * factor).round().clamp(0.0, 255.0) as u8;
        }
    }
    out
}

/// Mean perceived brightness, rounded.
fn mean_luma(image: &RgbaImage) -> u8 {
    let count = image.width() as u64 * image.height() as u64;
    if count == 0 {
        return 0;
    }
    let total: u64 = DynamicImage::ImageRgba8(image.clone())
        .to_luma8()
        .pixels()
        .map(|p| p.0[0] as u64)
        .sum();
    ((total + count / 2) / count) as u8
}
