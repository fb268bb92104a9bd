//! Non-fatal render diagnostics.
//!
//! Notices never abort a render. Each one is logged at `warn` level when it
//! is raised and collected into the [`crate::RenderReport`].

use std::fmt;

use image::Rgb;

use crate::color::to_hex;
use crate::content::Slot;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Content did not fit; the canvas was made taller.
    SizeAdjusted { requested: u32, actual: u32 },
    /// A unit had no color, so the background's contrast color was used.
    AutoColor { unit: Slot, color: Rgb<u8> },
    /// An outline had no color, so a darkened unit color was used.
    AutoOutlineColor { unit: Slot, color: Rgb<u8> },
}

impl Notice {
    /// Log the notice and hand it back.
    pub(crate) fn emit(self) -> Self {
        match &self {
            Notice::SizeAdjusted { requested, actual } => {
                tracing::warn!(requested, actual, "{}", self);
            }
            Notice::AutoColor { unit, color } | Notice::AutoOutlineColor { unit, color } => {
                tracing::warn!(unit = ?unit, color = %to_hex(*color), "{}", self);
            }
        }
        self
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::SizeAdjusted { requested, actual } => write!(
                f,
                "content does not fit in height {}; image height set to {}",
                requested, actual
            ),
            Notice::AutoColor { unit, color } => write!(
                f,
                "{:?} has no color; using generated {}",
                unit,
                to_hex(*color)
            ),
            Notice::AutoOutlineColor { unit, color } => write!(
                f,
                "{:?} outline has no color; using generated {}",
                unit,
                to_hex(*color)
            ),
        }
    }
}
