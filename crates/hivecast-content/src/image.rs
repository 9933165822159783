//! Placeholder image resolution.

use hivecast_core::{ImageReference, Theme};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

/// Placeholder service standing in for real asset generation: 2:3 pin
/// format, brand yellow on black.
const PLACEHOLDER_URL_PREFIX: &str = "https://via.placeholder.com/1000x1333/FFB800/000000";

/// Derive the placeholder image reference for a theme.
///
/// Pure string construction over the theme's text overlay: equal overlays
/// produce byte-identical references. The overlay doubles as alt text.
#[must_use]
pub fn resolve_image(theme: &Theme) -> ImageReference {
    let encoded = utf8_percent_encode(&theme.text_overlay, NON_ALPHANUMERIC).to_string();
    ImageReference {
        url: format!("{PLACEHOLDER_URL_PREFIX}?text={encoded}"),
        alt: theme.text_overlay.clone(),
    }
}
