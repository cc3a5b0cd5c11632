// SPDX-License-Identifier: MIT
//
// Color and theme token decoding.
//
// Configuration is best-effort: unrecognized tokens decode to `None` and
// the caller leaves the SDK's existing value in place. Nothing here
// raises.

use sheetkit_sdk::{ColorScheme, Rgba};

/// Decode a color-scheme token. Unknown tokens are ignored by the caller.
pub fn decode_color_scheme(token: &str) -> Option<ColorScheme> {
    match token {
        "automatic" => Some(ColorScheme::Automatic),
        "light" => Some(ColorScheme::Light),
        "dark" => Some(ColorScheme::Dark),
        "web" => Some(ColorScheme::Web),
        _ => None,
    }
}

/// Decode a `#RRGGBB` or `#AARRGGBB` hex token. The `#` prefix and
/// surrounding whitespace are optional; anything else is rejected.
pub fn decode_hex_color(token: &str) -> Option<Rgba> {
    let hex = token.trim().trim_start_matches('#');
    match hex.len() {
        6 => {
            let rgb = u32::from_str_radix(hex, 16).ok()?;
            Some(Rgba::opaque(
                ((rgb >> 16) & 0xFF) as u8,
                ((rgb >> 8) & 0xFF) as u8,
                (rgb & 0xFF) as u8,
            ))
        }
        8 => {
            let argb = u32::from_str_radix(hex, 16).ok()?;
            Some(Rgba {
                alpha: ((argb >> 24) & 0xFF) as u8,
                red: ((argb >> 16) & 0xFF) as u8,
                green: ((argb >> 8) & 0xFF) as u8,
                blue: (argb & 0xFF) as u8,
            })
        }
        _ => None,
    }
}
