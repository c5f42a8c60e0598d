//! Colour space conversion routines.
//!
//! Everything here works on fractions: hue is in degrees, every other channel in [0,1].
//! Percentages and 0-255 integers are a presentation layer applied by the colour models.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::color::Normalized;
use crate::error::ColourError;

/// Added before truncating so that values such as `0.29 * 100` land on 29, not 28.
const TRUNCATION_EPSILON: f64 = 1e-9;

/// Six or eight hex digits.
static HEX_STRICT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9A-Fa-f]{2}){3,4}$").expect("valid hex pattern"));
/// Three, six or eight hex digits.
static HEX_SHORT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(([0-9A-Fa-f]{2}){3,4}|[0-9A-Fa-f]{3})$").expect("valid hex pattern")
});

/// Which hex string lengths are accepted.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum HexPolicy {
    /// `rrggbb` or `rrggbbaa`.
    #[default]
    Strict,
    /// Also `rgb`, each digit doubled.
    AllowShort,
}

/// Hue, saturation and value. Hue in degrees, the rest in [0,1].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

/// Cyan, magenta, yellow and key in [0,1].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Cmyk {
    pub c: f64,
    pub m: f64,
    pub y: f64,
    pub k: f64,
}

/// Cyan, magenta and yellow in [0,1].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Cmy {
    pub c: f64,
    pub m: f64,
    pub y: f64,
}

/// Truncate toward zero, tolerating floating point noise just below an integer.
pub fn truncate(value: f64) -> f64 {
    (value + TRUNCATION_EPSILON).trunc()
}

/// Fraction to whole percent.
pub fn to_percent(fraction: f64) -> f64 {
    truncate(fraction * 100.0)
}

/// Percent to fraction.
pub fn from_percent(percent: f64) -> f64 {
    percent * 0.01
}

/// Convert RGB to HSV. A grey has hue 0, black has saturation 0.
pub fn rgb_to_hsv(rgb: &Normalized) -> Hsv {
    let c_max = rgb.max_rgb();
    let c_min = rgb.min_rgb();
    let delta = c_max - c_min;

    let h = if c_max == c_min {
        0.0
    } else if c_max == rgb.r {
        60.0 * ((rgb.g - rgb.b) / delta).rem_euclid(6.0)
    } else if c_max == rgb.g {
        60.0 * ((rgb.b - rgb.r) / delta + 2.0)
    } else {
        60.0 * ((rgb.r - rgb.g) / delta + 4.0)
    };
    let s = if c_max == 0.0 { 0.0 } else { delta / c_max };

    Hsv { h, s, v: c_max }
}

/// Convert HSV to RGB. Hue wraps around 360 degrees.
pub fn hsv_to_rgb(hsv: Hsv, alpha: f64) -> Normalized {
    let h = hsv.h.rem_euclid(360.0);
    let c = hsv.v * hsv.s;
    let x = c * (1.0 - ((h / 60.0).rem_euclid(2.0) - 1.0).abs());
    let m = hsv.v - c;

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    Normalized::new(r + m, g + m, b + m, alpha)
}

/// Convert RGB to CMYK. Pure black yields C = M = Y = 0.
pub fn rgb_to_cmyk(rgb: &Normalized) -> Cmyk {
    let k = 1.0 - rgb.max_rgb();
    let ink = |channel: f64| {
        if k == 1.0 {
            0.0
        } else {
            (1.0 - channel - k) / (1.0 - k)
        }
    };

    Cmyk {
        c: ink(rgb.r),
        m: ink(rgb.g),
        y: ink(rgb.b),
        k,
    }
}

/// Convert CMYK to RGB.
pub fn cmyk_to_rgb(cmyk: Cmyk, alpha: f64) -> Normalized {
    let k = 1.0 - cmyk.k;
    Normalized::new(
        (1.0 - cmyk.c) * k,
        (1.0 - cmyk.m) * k,
        (1.0 - cmyk.y) * k,
        alpha,
    )
}

/// Convert RGB to CMY.
pub fn rgb_to_cmy(rgb: &Normalized) -> Cmy {
    Cmy {
        c: 1.0 - rgb.r,
        m: 1.0 - rgb.g,
        y: 1.0 - rgb.b,
    }
}

/// Convert CMY to RGB.
pub fn cmy_to_rgb(cmy: Cmy, alpha: f64) -> Normalized {
    Normalized::new(1.0 - cmy.c, 1.0 - cmy.m, 1.0 - cmy.y, alpha)
}

/// Format as lowercase hex without `#`, with or without the alpha pair.
/// Out of range channels are clipped so the output length is fixed.
pub fn to_hex(rgb: &Normalized, with_alpha: bool) -> String {
    let byte = |channel: f64| truncate(channel * 255.0).clamp(0.0, 255.0) as u8;
    let mut hex = format!("{:02x}{:02x}{:02x}", byte(rgb.r), byte(rgb.g), byte(rgb.b));
    if with_alpha {
        hex.push_str(&format!("{:02x}", byte(rgb.a)));
    }
    hex
}

/// Parse a hex colour. A single leading `#` is ignored, case does not matter.
/// Six digit and short forms are opaque.
pub fn parse_hex(input: &str, policy: HexPolicy) -> Result<Normalized, ColourError> {
    let invalid = || ColourError::InvalidHex {
        input: input.to_string(),
    };
    let hex = input.strip_prefix('#').unwrap_or(input);
    let pattern = match policy {
        HexPolicy::Strict => &HEX_STRICT,
        HexPolicy::AllowShort => &HEX_SHORT,
    };
    if !pattern.is_match(hex) {
        return Err(invalid());
    }

    let digits: Vec<f64> = if hex.len() == 3 {
        hex.chars()
            .map(|digit| digit.to_digit(16).map(|d| f64::from(d * 17)))
            .collect::<Option<_>>()
            .ok_or_else(invalid)?
    } else {
        (0..hex.len())
            .step_by(2)
            .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).map(f64::from))
            .collect::<Result<_, _>>()
            .map_err(|_| invalid())?
    };

    let alpha = digits.get(3).map_or(1.0, |a| a / 255.0);
    Ok(Normalized::new(
        digits[0] / 255.0,
        digits[1] / 255.0,
        digits[2] / 255.0,
        alpha,
    ))
}
