//! Fill in unit and outline colors that were left unset.

use image::Rgb;

use super::{BLACK, blend};
use crate::content::Content;
use crate::notice::Notice;

/// How far an inferred outline color moves toward black.
pub const OUTLINE_DARKEN_RATIO: f32 = 0.2;

/// Assign `contrast` to every uncolored unit, then derive missing outline
/// colors from the unit color. Units with explicit colors are untouched.
///
/// Outlines are resolved even when `contrast` is `None`; a unit that is
/// still uncolored after the first step keeps its outline unset.
///
/// Returns one notice per inferred color, in draw order.
pub fn resolve_units(content: &mut Content, contrast: Option<Rgb<u8>>) -> Vec<Notice> {
    let mut notices = Vec::new();

    for (slot, unit) in content.units_mut() {
        let color = match (unit.color, contrast) {
            (Some(color), _) => color,
            (None, None) => continue,
            (None, Some(contrast)) => {
                unit.color = Some(contrast);
                notices.push(
                    Notice::AutoColor {
                        unit: slot,
                        color: contrast,
                    }
                    .emit(),
                );
                contrast
            }
        };

        if let Some(outline) = unit.outline.as_mut().filter(|o| o.color.is_none()) {
            let darker = blend(color, BLACK, OUTLINE_DARKEN_RATIO);
            outline.color = Some(darker);
            notices.push(
                Notice::AutoOutlineColor {
                    unit: slot,
                    color: darker,
                }
                .emit(),
            );
        }
    }

    notices
}
