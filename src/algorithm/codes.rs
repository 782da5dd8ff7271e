//! Human-readable color codes grouped by hue family
//!
//! Every distinct mapped color receives a code made of a family letter and a
//! two-digit sequence number (`R01`, `R02`, `Y01`, ...). Numbers are handed
//! out in order of first appearance, so the same mosaic always produces the
//! same codes.

use crate::io::error::Result;
use crate::math::color::Color;
use std::collections::HashMap;

/// Hue family used as the code prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorFamily {
    /// Dark, unsaturated colors
    Black,
    /// Light, unsaturated colors
    White,
    /// Hue in [330, 30)
    Red,
    /// Hue in [30, 90)
    Yellow,
    /// Hue in [90, 150)
    Green,
    /// Hue in [150, 210)
    Cyan,
    /// Hue in [210, 270)
    Blue,
    /// Hue in [270, 330)
    Magenta,
}

impl ColorFamily {
    /// Letter used at the start of the color code
    pub const fn prefix(self) -> char {
        match self {
            Self::Black => 'K',
            Self::White => 'W',
            Self::Red => 'R',
            Self::Yellow => 'Y',
            Self::Green => 'G',
            Self::Cyan => 'C',
            Self::Blue => 'B',
            Self::Magenta => 'M',
        }
    }

    /// Classify a color by chroma, brightness and hue
    ///
    /// Near-black and near-white are checked before hue. Grays that are
    /// neither fall into the red family since their hue is 0.
    pub fn classify(color: Color) -> Self {
        let [r, g, b] = color.channels();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);

        let max_norm = f64::from(max) / 255.0;
        let delta_norm = f64::from(max - min) / 255.0;

        if delta_norm < 0.01 && max_norm < 0.2 {
            return Self::Black;
        }
        if delta_norm < 0.05 && max_norm > 0.8 {
            return Self::White;
        }

        let hue = hue_degrees(color);
        if !(30.0..330.0).contains(&hue) {
            Self::Red
        } else if hue < 90.0 {
            Self::Yellow
        } else if hue < 150.0 {
            Self::Green
        } else if hue < 210.0 {
            Self::Cyan
        } else if hue < 270.0 {
            Self::Blue
        } else {
            Self::Magenta
        }
    }
}

/// Hue angle in degrees within [0, 360), 0 for achromatic colors
pub fn hue_degrees(color: Color) -> f64 {
    let [r, g, b] = color.channels();
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    if max == min {
        return 0.0;
    }

    // Integer channel differences keep hues on a sector edge exact
    let delta = f64::from(max - min);
    let diff = |lhs: u8, rhs: u8| f64::from(i16::from(lhs) - i16::from(rhs));

    let sector = if max == r {
        (diff(g, b) / delta).rem_euclid(6.0)
    } else if max == g {
        diff(b, r) / delta + 2.0
    } else {
        diff(r, g) / delta + 4.0
    };

    (sector * 60.0).rem_euclid(360.0)
}

/// Case-insensitive lookup from hex color to assigned code
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorCodes {
    codes: HashMap<String, String>,
    assignment_order: Vec<String>,
}

impl ColorCodes {
    /// Code assigned to a hex color, matched case-insensitively
    pub fn code_for(&self, hex: &str) -> Option<&str> {
        self.codes.get(&normalize_key(hex)).map(String::as_str)
    }

    /// Number of distinct colors with a code
    pub const fn len(&self) -> usize {
        self.assignment_order.len()
    }

    /// Whether no codes have been assigned
    pub const fn is_empty(&self) -> bool {
        self.assignment_order.is_empty()
    }

    /// `(hex, code)` pairs in assignment order, hex in uppercase
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.assignment_order.iter().filter_map(|hex| {
            self.codes.get(hex).map(|code| (hex.as_str(), code.as_str()))
        })
    }
}

// Lookups accept "#abc123" and "ABC123" alike
fn normalize_key(hex: &str) -> String {
    let trimmed = hex.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
    format!("#{}", digits.to_ascii_uppercase())
}

/// Assign codes to hex colors in order of first appearance
///
/// Repeats (compared case-insensitively) keep the code of their first
/// occurrence.
///
/// # Errors
///
/// Returns `InvalidHex` if any entry is not a valid hex color
pub fn assign_color_codes<'a, I>(hexes: I) -> Result<ColorCodes>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut codes = ColorCodes::default();
    let mut counters: HashMap<ColorFamily, usize> = HashMap::new();

    for hex in hexes {
        let key = normalize_key(hex);
        if codes.codes.contains_key(&key) {
            continue;
        }

        let family = ColorFamily::classify(Color::from_hex(hex)?);
        let counter = counters.entry(family).or_insert(0);
        *counter += 1;

        let code = format!("{}{counter:02}", family.prefix());
        codes.assignment_order.push(key.clone());
        codes.codes.insert(key, code);
    }

    Ok(codes)
}
