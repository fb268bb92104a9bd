//! # Content
//!
//! Groups the units drawn on one image and computes the vertical space they
//! need:
//!
//! ```text
//! height = 2 * padding + paragraph   (if present)
//!        + 1 * padding + header      (if present)
//!        + linkback                  (if present, bottom padding included)
//! ```

use crate::error::{NiderError, Result};
use crate::unit::TextUnit;

/// Default padding between units and canvas edges, in pixels.
pub const DEFAULT_PADDING: u32 = 45;

/// Which slot of the content a unit occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Header,
    Paragraph,
    Linkback,
}

/// Up to one header, paragraph and linkback plus shared padding.
#[derive(Debug, Clone)]
pub struct Content {
    header: Option<TextUnit>,
    paragraph: Option<TextUnit>,
    linkback: Option<TextUnit>,
    padding: u32,
    height: u32,
}

impl Content {
    /// Start building content.
    pub fn builder() -> ContentBuilder {
        ContentBuilder::default()
    }

    /// Create content; at least one unit is required.
    pub fn new(
        header: Option<TextUnit>,
        paragraph: Option<TextUnit>,
        linkback: Option<TextUnit>,
        padding: u32,
    ) -> Result<Self> {
        if header.is_none() && paragraph.is_none() && linkback.is_none() {
            return Err(NiderError::Configuration(
                "content has to consist of at least one unit".into(),
            ));
        }

        let mut height = 0;
        if let Some(paragraph) = &paragraph {
            height += 2 * padding + paragraph.height();
        }
        if let Some(header) = &header {
            height += padding + header.height();
        }
        if let Some(linkback) = &linkback {
            height += linkback.height();
        }

        Ok(Self {
            header,
            paragraph,
            linkback,
            padding,
            height,
        })
    }

    pub fn header(&self) -> Option<&TextUnit> {
        self.header.as_ref()
    }

    pub fn paragraph(&self) -> Option<&TextUnit> {
        self.paragraph.as_ref()
    }

    pub fn linkback(&self) -> Option<&TextUnit> {
        self.linkback.as_ref()
    }

    pub fn padding(&self) -> u32 {
        self.padding
    }

    /// Total vertical extent required by all units.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// True if any present unit still needs a color derived from the background.
    pub fn depends_on_opposite_to_bg_color(&self) -> bool {
        self.units().any(|(_, unit)| unit.color.is_none())
    }

    /// Present units in draw order: header, paragraph, linkback.
    pub fn units(&self) -> impl Iterator<Item = (Slot, &TextUnit)> {
        [
            (Slot::Header, self.header.as_ref()),
            (Slot::Paragraph, self.paragraph.as_ref()),
            (Slot::Linkback, self.linkback.as_ref()),
        ]
        .into_iter()
        .filter_map(|(slot, unit)| unit.map(|u| (slot, u)))
    }

    /// Present units in draw order, mutably. Used for color resolution only;
    /// colors do not affect height.
    pub(crate) fn units_mut(&mut self) -> impl Iterator<Item = (Slot, &mut TextUnit)> {
        [
            (Slot::Header, self.header.as_mut()),
            (Slot::Paragraph, self.paragraph.as_mut()),
            (Slot::Linkback, self.linkback.as_mut()),
        ]
        .into_iter()
        .filter_map(|(slot, unit)| unit.map(|u| (slot, u)))
    }
}

/// Builder for [`Content`].
#[derive(Debug)]
pub struct ContentBuilder {
    header: Option<TextUnit>,
    paragraph: Option<TextUnit>,
    linkback: Option<TextUnit>,
    padding: u32,
}

impl Default for ContentBuilder {
    fn default() -> Self {
        Self {
            header: None,
            paragraph: None,
            linkback: None,
            padding: DEFAULT_PADDING,
        }
    }
}

impl ContentBuilder {
    pub fn header(mut self, unit: TextUnit) -> Self {
        self.header = Some(unit);
        self
    }

    pub fn paragraph(mut self, unit: TextUnit) -> Self {
        self.paragraph = Some(unit);
        self
    }

    pub fn linkback(mut self, unit: TextUnit) -> Self {
        self.linkback = Some(unit);
        self
    }

    pub fn padding(mut self, padding: u32) -> Self {
        self.padding = padding;
        self
    }

    pub fn build(self) -> Result<Content> {
        Content::new(self.header, self.paragraph, self.linkback, self.padding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::testing::block_font;
    use crate::unit::UnitKind;
    use image::Rgb;

    fn measured(kind: UnitKind, height: u32) -> TextUnit {
        TextUnit::measured(kind, "x", block_font(10, height), Vec::new(), height, 0)
    }

    fn paragraph(height: u32) -> TextUnit {
        // one line, no padding: height == line height
        TextUnit::measured(
            UnitKind::Paragraph,
            "p",
            block_font(10, height),
            vec!["p".into()],
            height,
            0,
        )
    }

    #[test]
    fn test_empty_content_is_an_error() {
        let err = Content::builder().build().unwrap_err();
        assert!(matches!(err, NiderError::Configuration(_)));
    }

    #[test]
    fn test_paragraph_only_height() {
        let content = Content::builder().paragraph(paragraph(100)).build().unwrap();
        assert_eq!(content.height(), 2 * 45 + 100);
        assert_eq!(content.padding(), DEFAULT_PADDING);
    }

    #[test]
    fn test_all_units_height() {
        let header = TextUnit::measured(
            UnitKind::Header,
            "h",
            block_font(10, 30),
            vec!["h".into()],
            30,
            0,
        );
        let linkback = measured(UnitKind::Linkback { bottom_padding: 20 }, 15);
        let content = Content::builder()
            .header(header)
            .paragraph(paragraph(100))
            .linkback(linkback)
            .padding(10)
            .build()
            .unwrap();
        // (2*10 + 100) + (10 + 30) + (15 + 20)
        assert_eq!(content.height(), 120 + 40 + 35);
    }

    #[test]
    fn test_linkback_only_has_no_padding() {
        let content = Content::builder()
            .linkback(measured(UnitKind::Linkback { bottom_padding: 20 }, 15))
            .build()
            .unwrap();
        assert_eq!(content.height(), 35);
    }

    #[test]
    fn test_depends_on_background_if_any_unit_uncolored() {
        let mut colored = paragraph(10);
        colored.color = Some(Rgb([1, 2, 3]));
        let uncolored = measured(UnitKind::Linkback { bottom_padding: 0 }, 10);

        let content = Content::builder()
            .paragraph(colored.clone())
            .linkback(uncolored)
            .build()
            .unwrap();
        assert!(content.depends_on_opposite_to_bg_color());

        let content = Content::builder().paragraph(colored).build().unwrap();
        assert!(!content.depends_on_opposite_to_bg_color());
    }

    #[test]
    fn test_units_in_draw_order() {
        let content = Content::builder()
            .linkback(measured(UnitKind::Linkback { bottom_padding: 0 }, 10))
            .header(measured(UnitKind::Header, 10))
            .build()
            .unwrap();
        let slots: Vec<Slot> = content.units().map(|(slot, _)| slot).collect();
        assert_eq!(slots, vec![Slot::Header, Slot::Linkback]);
    }
}
