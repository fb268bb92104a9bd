//! # Render Jobs
//!
//! JSON description of one image render, used by the `nider` binary.
//!
//! ## Example
//!
//! ```
//! use nider::job::JobFile;
//!
//! let json = r##"{
//!     "output": "quote.png",
//!     "preset": "instagram-portrait-post",
//!     "background": {"type": "color", "color": "#2c3e50"},
//!     "header": {"text": "Monday", "font": "fonts/Bold.ttf", "font_size": 64},
//!     "paragraph": {"text": "Start small.", "font": "fonts/Regular.ttf", "align": "left"},
//!     "linkback": {"text": "@nider", "font": "fonts/Regular.ttf", "bottom_padding": 30}
//! }"##;
//!
//! let job: JobFile = serde_json::from_str(json).unwrap();
//! assert_eq!(job.size().unwrap(), (1080, 1350));
//! ```

mod convert;
mod schema;

use std::path::Path;

use crate::error::Result;

pub use schema::{JobFile, JsonBackground, JsonOutline, JsonUnit};

impl JobFile {
    /// Read and parse a job file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}
