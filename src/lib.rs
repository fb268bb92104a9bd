//! # Nider - Text Images for Social Media
//!
//! Nider renders a header, a paragraph and a linkback onto a solid color, a
//! tiled texture or an existing photo, and saves the result. It provides:
//!
//! - **Units**: measured, wrapped blocks of styled text
//! - **Layout**: canvas sizing, vertical placement and alignment
//! - **Rasterization**: line drawing with an optional 8-direction outline
//! - **Colors**: contrast and outline colors inferred from the background
//!
//! ## Quick Start
//!
//! ```no_run
//! use nider::{Content, Font, Image, TextUnit, presets::Preset};
//!
//! let bold = Font::from_file("fonts/Roboto-Bold.ttf", 64.0)?;
//! let regular = Font::from_file("fonts/Roboto-Regular.ttf", 36.0)?;
//!
//! let content = Content::builder()
//!     .header(TextUnit::header("Nider", bold).build())
//!     .paragraph(TextUnit::paragraph("Text based images, quickly.", regular.clone()).build())
//!     .linkback(TextUnit::linkback("github.com/nider", regular).build())
//!     .build()?;
//!
//! let report = Image::from_preset(content, "post.png", Preset::INSTAGRAM_SQUARE_POST)?
//!     .draw_on_bg(None)?;
//! for notice in &report.notices {
//!     println!("{}", notice);
//! }
//! # Ok::<(), nider::NiderError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`unit`] | Text units and wrapping |
//! | [`content`] | Unit aggregate and required height |
//! | [`layout`] | Canvas sizing and unit placement |
//! | [`raster`] | Drawing units onto a surface |
//! | [`color`] | Contrast, blend and dominant color |
//! | [`compose`] | The `Image` render pipeline |
//! | [`job`] | JSON render jobs |
//! | [`error`] | Error types |

pub mod adjust;
pub mod background;
pub mod canvas;
pub mod color;
pub mod compose;
pub mod content;
pub mod error;
pub mod font;
pub mod job;
pub mod layout;
pub mod notice;
pub mod presets;
pub mod raster;
pub mod unit;

// Re-exports for convenience
pub use compose::{Image, RenderReport};
pub use content::Content;
pub use error::{NiderError, Result};
pub use font::Font;
pub use notice::Notice;
pub use unit::{Align, Outline, TextUnit};
