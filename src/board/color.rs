//! Hex color strings

use std::fmt;

/// 8-bit sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Parse `#rgb` or `#rrggbb` (leading `#` optional, case-insensitive)
pub fn parse_hex_color(s: &str) -> Option<Rgb> {
    let hex = s.trim();
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    match hex.len() {
        3 => {
            let mut channels = hex.chars().map(|c| {
                let v = c.to_digit(16).unwrap_or(0) as u8;
                v * 17
            });
            Some(Rgb(channels.next()?, channels.next()?, channels.next()?))
        }
        6 => {
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
            Some(Rgb(channel(0)?, channel(2)?, channel(4)?))
        }
        _ => None,
    }
}

/// Format a color the way tiles store it
pub fn to_hex_color(rgb: Rgb) -> String {
    rgb.to_string()
}
