//! Color value parsing and normalization
//!
//! Accepts the three fill formats found in collection assets: hex strings
//! (3 or 6 digits, `#` optional), `rgb()`/`rgba()` triplets, and named colors
//! resolved through a supplied name-to-hex table. The normal form everywhere
//! in the crate is lower-case `#rrggbb`.

use std::collections::HashMap;

/// An 8-bit-per-channel RGB color
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Parse a 3- or 6-digit hex color, with or without a leading `#`
    pub fn parse_hex(input: &str) -> Option<Self> {
        let digits = input.trim().trim_start_matches('#');
        match digits.len() {
            3 => {
                let nibbles: Vec<u8> = digits
                    .chars()
                    .filter_map(|c| c.to_digit(16))
                    .map(|d| d as u8)
                    .collect();
                let [r, g, b] = nibbles.as_slice() else {
                    return None;
                };
                Some(Self {
                    r: r * 17,
                    g: g * 17,
                    b: b * 17,
                })
            }
            6 => {
                let r = u8::from_str_radix(digits.get(0..2)?, 16).ok()?;
                let g = u8::from_str_radix(digits.get(2..4)?, 16).ok()?;
                let b = u8::from_str_radix(digits.get(4..6)?, 16).ok()?;
                Some(Self { r, g, b })
            }
            _ => None,
        }
    }

    /// Parse any supported fill value: hex, `rgb()`/`rgba()`, or a name
    ///
    /// Named colors resolve through the supplied lower-case name-to-hex
    /// table; alpha components are ignored.
    pub fn parse_fill(input: &str, names: &HashMap<String, String>) -> Option<Self> {
        let value = input.trim();
        if value.is_empty() {
            return None;
        }

        let lower = value.to_ascii_lowercase();
        if let Some(inner) = lower
            .strip_prefix("rgba(")
            .or_else(|| lower.strip_prefix("rgb("))
        {
            return parse_rgb_components(inner.strip_suffix(')')?);
        }

        if let Some(hex) = names.get(&lower) {
            return Self::parse_hex(hex);
        }

        Self::parse_hex(value)
    }

    /// Lower-case `#rrggbb` normal form
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Squared Euclidean distance in RGB space
    pub const fn distance_sq(self, other: Self) -> u32 {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;
        (dr * dr + dg * dg + db * db) as u32
    }
}

fn parse_rgb_components(inner: &str) -> Option<Rgb> {
    let mut components = inner.split(',').map(str::trim);
    let r = parse_channel(components.next()?)?;
    let g = parse_channel(components.next()?)?;
    let b = parse_channel(components.next()?)?;
    Some(Rgb { r, g, b })
}

// Channels may be written as integers or decimals; clamp into 0..=255
fn parse_channel(component: &str) -> Option<u8> {
    let value: f64 = component.parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    Some(value.round().clamp(0.0, 255.0) as u8)
}

/// Normalize any valid hex input to lower-case `#rrggbb`
pub fn normalize_hex(input: &str) -> Option<String> {
    Rgb::parse_hex(input).map(Rgb::to_hex)
}
