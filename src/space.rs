//! Supported colour spaces.

use std::fmt;
use std::str::FromStr;

use crate::error::ColourError;

/// Representation a colour is read from or written to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum ColourSpace {
    /// Normalised red, green, blue and alpha ([0,1]).
    #[default]
    Rgb,
    /// Red, green and blue in [0,255], alpha in [0,1].
    RgbFull,
    /// Hue in degrees, saturation and value in percent, alpha in [0,1].
    Hsv,
    /// Six digit hex string, no alpha.
    Hex,
    /// Eight digit hex string, alpha last.
    HexLong,
    /// Cyan, magenta and yellow in percent, alpha in [0,1].
    Cmy,
    /// Cyan, magenta, yellow and key in percent, alpha in [0,1].
    Cmyk,
}

impl ColourSpace {
    /// Every colour space, in declaration order.
    pub const ALL: [ColourSpace; 7] = [
        Self::Rgb,
        Self::RgbFull,
        Self::Hsv,
        Self::Hex,
        Self::HexLong,
        Self::Cmy,
        Self::Cmyk,
    ];

    /// Accepted channel counts for numeric spaces, alpha included.
    /// Hex spaces take a string and return None.
    pub fn arity(&self) -> Option<(usize, usize)> {
        match self {
            Self::Rgb | Self::RgbFull | Self::Hsv | Self::Cmy => Some((3, 4)),
            Self::Cmyk => Some((4, 5)),
            Self::Hex | Self::HexLong => None,
        }
    }

    /// True for the spaces represented as text.
    pub fn is_hex(&self) -> bool {
        self.arity().is_none()
    }

    /// Short lowercase name, also accepted by `from_str`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Rgb => "rgb",
            Self::RgbFull => "rgbfull",
            Self::Hsv => "hsv",
            Self::Hex => "hex",
            Self::HexLong => "hexlong",
            Self::Cmy => "cmy",
            Self::Cmyk => "cmyk",
        }
    }
}

impl fmt::Display for ColourSpace {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColourSpace {
    type Err = ColourError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        ColourSpace::ALL
            .into_iter()
            .find(|space| space.name() == name)
            .ok_or(ColourError::UnknownColourSpace {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_names_round_trip() {
        for space in ColourSpace::ALL {
            assert_eq!(space.name().parse::<ColourSpace>(), Ok(space));
        }
        assert_eq!("  HexLong ".parse::<ColourSpace>(), Ok(ColourSpace::HexLong));
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(
            "lab".parse::<ColourSpace>(),
            Err(ColourError::UnknownColourSpace {
                name: "lab".to_string()
            })
        );
    }

    #[test]
    fn test_arity() {
        assert_eq!(ColourSpace::Cmyk.arity(), Some((4, 5)));
        assert_eq!(ColourSpace::Hsv.arity(), Some((3, 4)));
        assert!(ColourSpace::Hex.is_hex());
        assert!(!ColourSpace::RgbFull.is_hex());
    }
}
