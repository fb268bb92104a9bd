//! FLAT UI palette used for random backgrounds and named colors.

use image::Rgb;

/// The 20 FLAT UI colors, by name.
pub const FLAT_UI: [(&str, Rgb<u8>); 20] = [
    ("turquoise", Rgb([0x1a, 0xbc, 0x9c])),
    ("emerald", Rgb([0x2e, 0xcc, 0x71])),
    ("peter_river", Rgb([0x34, 0x98, 0xdb])),
    ("amethyst", Rgb([0x9b, 0x59, 0xb6])),
    ("wet_asphalt", Rgb([0x34, 0x49, 0x5e])),
    ("green_sea", Rgb([0x16, 0xa0, 0x85])),
    ("nephritis", Rgb([0x27, 0xae, 0x60])),
    ("belize_hole", Rgb([0x29, 0x80, 0xb9])),
    ("wisteria", Rgb([0x8e, 0x44, 0xad])),
    ("midnight_blue", Rgb([0x2c, 0x3e, 0x50])),
    ("sun_flower", Rgb([0xf1, 0xc4, 0x0f])),
    ("carrot", Rgb([0xe6, 0x7e, 0x22])),
    ("alizarin", Rgb([0xe7, 0x4c, 0x3c])),
    ("clouds", Rgb([0xec, 0xf0, 0xf1])),
    ("concrete", Rgb([0x95, 0xa5, 0xa6])),
    ("orange", Rgb([0xf3, 0x9c, 0x12])),
    ("pumpkin", Rgb([0xd3, 0x54, 0x00])),
    ("pomegranate", Rgb([0xc0, 0x39, 0x2b])),
    ("silver", Rgb([0xbd, 0xc3, 0xc7])),
    ("asbestos", Rgb([0x7f, 0x8c, 0x8d])),
];

/// Look up a FLAT UI color by name (case-insensitive, `-`/space/`_` interchangeable).
pub fn by_name(name: &str) -> Option<Rgb<u8>> {
    let key: String = name
        .trim()
        .chars()
        .map(|c| match c {
            '-' | ' ' => '_',
            c => c.to_ascii_lowercase(),
        })
        .collect();
    FLAT_UI
        .iter()
        .find(|(n, _)| *n == key)
        .map(|(_, color)| *color)
}
