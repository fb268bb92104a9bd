//! # Layout
//!
//! Two pipeline stages, kept separate so each can be tested alone:
//!
//! 1. [`size_canvas`] compares the content height with the requested canvas
//!    height and grows the canvas when content overflows. The result carries
//!    the `fits` flag forward.
//! 2. [`plan`] turns content plus a [`CanvasSize`] into a top offset per
//!    unit; [`line_x`] gives the left offset of each line.
//!
//! ```text
//! fits:              overflow:
//! ┌────────────┐     ┌────────────┐
//! │ padding    │     │ padding    │
//! │ HEADER     │     │ HEADER     │
//! │            │     │ padding    │
//! │ PARAGRAPH  │ ←─  │ PARAGRAPH  │  centered vs stacked
//! │            │     │ padding    │
//! │ linkback   │     │ linkback   │
//! │ bottom pad │     │ bottom pad │
//! └────────────┘     └────────────┘
//! ```

use crate::content::{Content, Slot};
use crate::notice::Notice;
use crate::unit::Align;

/// Left margin for left-aligned lines, as a fraction of canvas width.
pub const LEFT_MARGIN: f32 = 0.075;

/// Right edge for right-aligned lines, as a fraction of canvas width.
pub const RIGHT_EDGE: f32 = 0.925;

/// Final canvas dimensions and whether the content fit the requested height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
    pub fits: bool,
}

impl CanvasSize {
    /// Dimensions taken as-is, e.g. from a photo.
    pub fn fixed(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            fits: true,
        }
    }
}

/// Grow the canvas to the content height when it does not fit.
///
/// Content that is exactly as tall as the canvas counts as not fitting.
pub fn size_canvas(width: u32, height: u32, content: &Content) -> (CanvasSize, Option<Notice>) {
    if content.height() >= height {
        let size = CanvasSize {
            width,
            height: content.height(),
            fits: false,
        };
        let notice = Notice::SizeAdjusted {
            requested: height,
            actual: size.height,
        }
        .emit();
        (size, Some(notice))
    } else {
        (CanvasSize::fixed(width, height), None)
    }
}

/// Top offset of each present unit, in draw order.
///
/// Offsets are signed: on a fixed canvas shorter than a unit, a centered
/// paragraph starts above the top edge and a linkback above its own slot.
pub fn plan(content: &Content, size: CanvasSize) -> Vec<(Slot, i32)> {
    let padding = content.padding() as i64;
    let canvas_height = size.height as i64;

    content
        .units()
        .map(|(slot, unit)| {
            let unit_height = unit.height() as i64;
            let top = match slot {
                Slot::Header => padding,
                Slot::Paragraph if size.fits => (canvas_height - unit_height).div_euclid(2),
                Slot::Paragraph => match content.header() {
                    Some(header) => 2 * padding + header.height() as i64,
                    None => padding,
                },
                Slot::Linkback => canvas_height - unit_height,
            };
            (slot, top as i32)
        })
        .collect()
}

/// Left offset of a line of width `line_width` on a canvas `canvas_width` wide.
#[inline]
pub fn line_x(align: Align, canvas_width: u32, line_width: u32) -> f32 {
    let canvas = canvas_width as f32;
    let line = line_width as f32;
    match align {
        Align::Center => (canvas - line) / 2.0,
        Align::Left => canvas * LEFT_MARGIN,
        Align::Right => RIGHT_EDGE * canvas - line,
    }
}
