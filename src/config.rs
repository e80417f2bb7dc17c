use log::Level;

use crate::background::color::Rgb;

pub const NUM_BLOBS: usize = 5;

pub const BLOB_COLORS: &[Rgb] = &[
    Rgb::new(0xD5, 0x9D, 0x6B), // tan
    Rgb::new(0xF7, 0xB7, 0xA3), // peach
    Rgb::new(0x85, 0xBD, 0xB3), // teal
    Rgb::new(0xA0, 0xE7, 0xE5), // light cyan
    Rgb::new(0xE6, 0xA4, 0xB4), // soft pink
    Rgb::new(0xDB, 0xC3, 0x7A), // muted yellow
];

pub const BACKGROUND_PALETTE: &[Rgb] = &[
    Rgb::new(0xD5, 0x9D, 0x6B), // tan
    Rgb::new(0xDB, 0xC3, 0x7A), // muted yellow
    Rgb::new(0x85, 0xBD, 0xB3), // teal
    Rgb::new(0xBD, 0xC7, 0x89), // olive
];

pub const BLOB_ANIMATION_STYLE_ID: &str = "blob-animation-style";
pub const BACKGROUND_ANIMATION_STYLE_ID: &str = "dynamic-background-animation-style";
pub const BACKGROUND_ANIMATION_CLASS: &str = "animated-gradient-background";
pub const BACKGROUND_KEYFRAMES_NAME: &str = "dynamicBackgroundAnimation";

/// Milliseconds between two revealed characters of the typewriter.
pub const TYPEWRITER_INTERVAL_MS: u32 = 40;

pub const TYPEWRITER_LINES: &[&str] = &["Coming December 2025", "Iroquois Ridge Highschool"];

pub const STATS: &[&str] = &[
    "500+ Registrants",
    "$6000+ in prizes",
    "5+ Workshops",
    "Celebrating a Decade of Innovation",
];

pub const EVENT_TITLE: &str = "Hack The Ridge";
pub const EVENT_YEAR: &str = "2025";

pub const ARCHIVE_URL: &str = "https://2024.hacktheridge.ca";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

// The font switcher is a design-review aid, never shipped.
#[cfg(debug_assertions)]
pub fn show_font_switcher() -> bool {
    true
}

#[cfg(not(debug_assertions))]
pub fn show_font_switcher() -> bool {
    false
}
