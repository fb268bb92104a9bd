//! # Colors
//!
//! Pure color helpers used when a unit leaves its color unspecified:
//!
//! | Function | Purpose |
//! |----------|---------|
//! | [`parse`] | `#rgb`, `#rrggbb`, `rgb(r, g, b)` or a FLAT UI name → RGB |
//! | [`dominant_color`] | Most common color of an image (quantized histogram) |
//! | [`opposite`] | Contrast color for a background |
//! | [`blend`] | Linear mix of two colors |
//!
//! [`resolve`] applies them to the units of a [`crate::Content`].

pub mod palette;
pub mod resolve;

use std::collections::HashMap;

use image::{Rgb, RgbaImage};

use crate::error::{NiderError, Result};

pub use palette::FLAT_UI;
pub use resolve::resolve_units;

pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

/// Below this per-channel distance the inverted color is too close to the
/// original (mid grays), so black or white is used instead.
const MIN_CONTRAST_DISTANCE: u8 = 96;

/// Bits kept per channel when bucketing pixels for [`dominant_color`].
const QUANT_BITS: u8 = 4;

/// Parse a color string.
///
/// ```
/// use image::Rgb;
/// assert_eq!(nider::color::parse("#f00").unwrap(), Rgb([255, 0, 0]));
/// assert_eq!(nider::color::parse("rgb(1, 2, 3)").unwrap(), Rgb([1, 2, 3]));
/// ```
pub fn parse(value: &str) -> Result<Rgb<u8>> {
    let value = value.trim();
    let invalid = || NiderError::Color(format!("unrecognized color '{}'", value));

    if let Some(hex) = value.strip_prefix('#') {
        let digits: Vec<u8> = hex
            .chars()
            .map(|c| c.to_digit(16).map(|d| d as u8))
            .collect::<Option<_>>()
            .ok_or_else(invalid)?;
        return match digits.as_slice() {
            [r, g, b] => Ok(Rgb([r * 17, g * 17, b * 17])),
            [r1, r2, g1, g2, b1, b2] => Ok(Rgb([r1 * 16 + r2, g1 * 16 + g2, b1 * 16 + b2])),
            _ => Err(invalid()),
        };
    }

    if let Some(body) = value
        .strip_prefix("rgb(")
        .and_then(|rest| rest.strip_suffix(')'))
    {
        let channels: Vec<u8> = body
            .split(',')
            .map(|part| part.trim().parse::<u8>().ok())
            .collect::<Option<_>>()
            .ok_or_else(invalid)?;
        return match channels.as_slice() {
            [r, g, b] => Ok(Rgb([*r, *g, *b])),
            _ => Err(invalid()),
        };
    }

    palette::by_name(value).ok_or_else(invalid)
}

/// Format a color as `#rrggbb`.
pub fn to_hex(color: Rgb<u8>) -> String {
    let [r, g, b] = color.0;
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

/// Perceived brightness in [0, 1].
#[inline]
pub fn luminance(color: Rgb<u8>) -> f32 {
    let [r, g, b] = color.0;
    (0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32) / 255.0
}

/// Contrast color for a background.
///
/// The channel-wise inverse, unless that lands too close to the input
/// (mid grays), in which case black or white is picked by luminance.
pub fn opposite(color: Rgb<u8>) -> Rgb<u8> {
    let inverted = Rgb(color.0.map(|c| 255 - c));
    let distance = color
        .0
        .iter()
        .zip(inverted.0.iter())
        .map(|(a, b)| a.abs_diff(*b))
        .max()
        .unwrap_or(0);

    if distance >= MIN_CONTRAST_DISTANCE {
        inverted
    } else if luminance(color) > 0.5 {
        BLACK
    } else {
        WHITE
    }
}

/// Mix `a` toward `b` by `ratio` (0.0 = `a`, 1.0 = `b`).
pub fn blend(a: Rgb<u8>, b: Rgb<u8>, ratio: f32) -> Rgb<u8> {
    let t = ratio.clamp(0.0, 1.0);
    let mut out = [0u8; 3];
    for (i, channel) in out.iter_mut().enumerate() {
        let from = a.0[i] as f32;
        let to = b.0[i] as f32;
        *channel = (from + (to - from) * t).round() as u8;
    }
    Rgb(out)
}

/// Dominant color of an image.
///
/// Pixels are bucketed by their top [`QUANT_BITS`] bits per channel; the
/// fullest bucket wins (ties go to the lowest bucket key) and its members
/// are averaged. Fully transparent pixels are ignored. An empty or fully
/// transparent image yields black.
pub fn dominant_color(image: &RgbaImage) -> Rgb<u8> {
    let shift = 8 - QUANT_BITS;
    let mut buckets: HashMap<u32, (u64, [u64; 3])> = HashMap::new();

    for pixel in image.pixels() {
        let [r, g, b, a] = pixel.0;
        if a == 0 {
            continue;
        }
        let key = ((r >> shift) as u32) << (2 * QUANT_BITS)
            | ((g >> shift) as u32) << QUANT_BITS
            | (b >> shift) as u32;
        let entry = buckets.entry(key).or_insert((0, [0; 3]));
        entry.0 += 1;
        entry.1[0] += r as u64;
        entry.1[1] += g as u64;
        entry.1[2] += b as u64;
    }

    buckets
        .into_iter()
        .max_by(|(ka, (ca, _)), (kb, (cb, _))| ca.cmp(cb).then(kb.cmp(ka)))
        .map(|(_, (count, sums))| Rgb(sums.map(|s| (s / count) as u8)))
        .unwrap_or(BLACK)
}
