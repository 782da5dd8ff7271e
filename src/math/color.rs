//! RGB color value type with hex formatting and Euclidean distance
//!
//! Colors are compared channel-wise and measured in plain RGB space; no
//! perceptual weighting is applied anywhere in the pipeline.

use crate::io::error::{MosaicError, Result};
use std::fmt;
use std::str::FromStr;

/// An opaque 8-bit-per-channel RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Color {
    /// Pure black, also the average of an empty region
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Create a color from its channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Format as `#RRGGBB` with uppercase digits
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Parse `RRGGBB` or `#RRGGBB`, case-insensitive
    ///
    /// # Errors
    ///
    /// Returns `InvalidHex` carrying the original input if it is not exactly
    /// six hex digits after an optional leading `#`
    pub fn from_hex(hex: &str) -> Result<Self> {
        let invalid = |reason| MosaicError::InvalidHex {
            value: hex.to_string(),
            reason,
        };

        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.is_empty() {
            return Err(invalid("color cannot be empty"));
        }
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid("expected six hexadecimal digits"));
        }

        let channel = |range: std::ops::Range<usize>| {
            digits
                .get(range)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .ok_or_else(|| invalid("expected six hexadecimal digits"))
        };

        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Channels as an array, in RGB order
    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Squared Euclidean distance in channel space
    ///
    /// Exact integer arithmetic, so ties compare equal without rounding noise.
    pub const fn distance_squared(self, other: Self) -> u32 {
        let dr = self.r.abs_diff(other.r) as u32;
        let dg = self.g.abs_diff(other.g) as u32;
        let db = self.b.abs_diff(other.b) as u32;
        dr * dr + dg * dg + db * db
    }

    /// Euclidean distance in channel space
    pub fn distance(self, other: Self) -> f64 {
        f64::from(self.distance_squared(other)).sqrt()
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = MosaicError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

/// Remove repeated colors, keeping the first occurrence of each
pub fn dedup_preserving_order(colors: &[Color]) -> Vec<Color> {
    let mut seen = std::collections::HashSet::with_capacity(colors.len());
    colors
        .iter()
        .copied()
        .filter(|color| seen.insert(*color))
        .collect()
}

/// Index of the candidate nearest to `color`
///
/// Ties go to the lowest index. Returns `None` only for an empty slice.
pub fn nearest_index(color: Color, candidates: &[Color]) -> Option<usize> {
    let mut best: Option<(usize, u32)> = None;
    for (index, &candidate) in candidates.iter().enumerate() {
        let distance = color.distance_squared(candidate);
        if best.is_none_or(|(_, best_distance)| distance < best_distance) {
            best = Some((index, distance));
        }
    }
    best.map(|(index, _)| index)
}
