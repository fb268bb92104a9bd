//! # Size Presets
//!
//! Canvas sizes for common social media posts.
//!
//! | Preset | Width | Height |
//! |--------|-------|--------|
//! | Facebook square post | 470 | 470 |
//! | Facebook landscape post | 1024 | 512 |
//! | Twitter post | 1024 | 512 |
//! | Twitter large card | 506 | 506 |
//! | Instagram square post | 1080 | 1080 |
//! | Instagram portrait post | 1080 | 1350 |
//! | Instagram landscape post | 1080 | 566 |
//!
//! ```
//! use nider::presets::Preset;
//!
//! let preset = Preset::by_name("instagram-portrait-post").unwrap();
//! assert_eq!((preset.width, preset.height), (1080, 1350));
//! ```

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub name: &'static str,
    pub width: u32,
    pub height: u32,
}

impl Preset {
    pub const FACEBOOK_SQUARE_POST: Self = Self {
        name: "facebook-square-post",
        width: 470,
        height: 470,
    };

    pub const FACEBOOK_LANDSCAPE_POST: Self = Self {
        name: "facebook-landscape-post",
        width: 1024,
        height: 512,
    };

    /// Same size as [`Preset::FACEBOOK_LANDSCAPE_POST`].
    pub const TWITTER_POST: Self = Self {
        name: "twitter-post",
        width: 1024,
        height: 512,
    };

    pub const TWITTER_LARGE_CARD: Self = Self {
        name: "twitter-large-card",
        width: 506,
        height: 506,
    };

    pub const INSTAGRAM_SQUARE_POST: Self = Self {
        name: "instagram-square-post",
        width: 1080,
        height: 1080,
    };

    pub const INSTAGRAM_PORTRAIT_POST: Self = Self {
        name: "instagram-portrait-post",
        width: 1080,
        height: 1350,
    };

    pub const INSTAGRAM_LANDSCAPE_POST: Self = Self {
        name: "instagram-landscape-post",
        width: 1080,
        height: 566,
    };

    /// Every preset, in table order.
    pub const ALL: [Self; 7] = [
        Self::FACEBOOK_SQUARE_POST,
        Self::FACEBOOK_LANDSCAPE_POST,
        Self::TWITTER_POST,
        Self::TWITTER_LARGE_CARD,
        Self::INSTAGRAM_SQUARE_POST,
        Self::INSTAGRAM_PORTRAIT_POST,
        Self::INSTAGRAM_LANDSCAPE_POST,
    ];

    /// Look up a preset; `_` and `-` are interchangeable.
    pub fn by_name(name: &str) -> Option<Self> {
        let key = name.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL.into_iter().find(|preset| preset.name == key)
    }
}

impl Default for Preset {
    fn default() -> Self {
        Self::INSTAGRAM_SQUARE_POST
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_name() {
        assert_eq!(Preset::by_name("twitter_large_card"), Some(Preset::TWITTER_LARGE_CARD));
        assert_eq!(Preset::by_name("Facebook-Square-Post"), Some(Preset::FACEBOOK_SQUARE_POST));
        assert_eq!(Preset::by_name("myspace"), None);
    }

    #[test]
    fn test_twitter_post_matches_facebook_landscape() {
        assert_eq!(
            (Preset::TWITTER_POST.width, Preset::TWITTER_POST.height),
            (
                Preset::FACEBOOK_LANDSCAPE_POST.width,
                Preset::FACEBOOK_LANDSCAPE_POST.height
            )
        );
    }

    #[test]
    fn test_default_is_instagram_square() {
        assert_eq!(Preset::default().width, 1080);
        assert_eq!(Preset::default().height, 1080);
    }
}
