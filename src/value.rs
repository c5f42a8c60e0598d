//! Colour values as exchanged with callers.

use std::fmt;

use crate::error::ColourError;
use crate::space::ColourSpace;

/// A colour expressed in some colour space.
/// Numeric spaces use `Channels`, hex spaces use `Hex`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Ordered channel values, alpha last.
    Channels(Vec<f64>),
    /// Hexadecimal text.
    Hex(String),
}

impl Value {
    /// Get the channels, if this is a numeric value.
    pub fn channels(&self) -> Option<&[f64]> {
        match self {
            Self::Channels(channels) => Some(channels),
            Self::Hex(_) => None,
        }
    }

    /// Get the text, if this is a hex value.
    pub fn as_hex(&self) -> Option<&str> {
        match self {
            Self::Channels(_) => None,
            Self::Hex(hex) => Some(hex),
        }
    }

    /// Check that the value carries channels fitting the numeric `space`.
    pub(crate) fn expect_channels(&self, space: ColourSpace) -> Result<&[f64], ColourError> {
        let channels = self
            .channels()
            .ok_or(ColourError::ExpectedChannels { space })?;
        let (min, max) = space.arity().ok_or(ColourError::ExpectedHex { space })?;
        if channels.len() < min || channels.len() > max {
            return Err(ColourError::WrongArity {
                space,
                min,
                max,
                found: channels.len(),
            });
        }
        if !channels.iter().all(|c| c.is_finite()) {
            return Err(ColourError::NonFinite { space });
        }
        Ok(channels)
    }

    /// Check that the value carries text for the hex `space`.
    pub(crate) fn expect_hex(&self, space: ColourSpace) -> Result<&str, ColourError> {
        self.as_hex().ok_or(ColourError::ExpectedHex { space })
    }
}

impl From<Vec<f64>> for Value {
    fn from(channels: Vec<f64>) -> Self {
        Value::Channels(channels)
    }
}

impl From<&[f64]> for Value {
    fn from(channels: &[f64]) -> Self {
        Value::Channels(channels.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for Value {
    fn from(channels: [f64; N]) -> Self {
        Value::Channels(channels.to_vec())
    }
}

impl From<&str> for Value {
    fn from(hex: &str) -> Self {
        Value::Hex(hex.to_string())
    }
}

impl From<String> for Value {
    fn from(hex: String) -> Self {
        Value::Hex(hex)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Hex(hex) => f.write_str(hex),
            Self::Channels(channels) => {
                let joined = channels
                    .iter()
                    .map(|c| c.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "[{joined}]")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_expect_channels_arity() {
        let value = Value::from([0.1, 0.2]);
        assert_eq!(
            value.expect_channels(ColourSpace::Rgb),
            Err(ColourError::WrongArity {
                space: ColourSpace::Rgb,
                min: 3,
                max: 4,
                found: 2
            })
        );
        let value = Value::from([0.0, 0.0, 0.0, 0.0, 1.0]);
        assert!(value.expect_channels(ColourSpace::Cmyk).is_ok());
        assert!(value.expect_channels(ColourSpace::Hsv).is_err());
    }

    #[test]
    fn test_expect_channels_finite() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(
                Value::from([0.5, bad, 0.5]).expect_channels(ColourSpace::Hsv),
                Err(ColourError::NonFinite {
                    space: ColourSpace::Hsv
                })
            );
        }
        assert_eq!(
            Value::from([0.0, 1.0, f64::NAN, 0.0, 1.0]).expect_channels(ColourSpace::Cmyk),
            Err(ColourError::NonFinite {
                space: ColourSpace::Cmyk
            })
        );
    }

    #[test]
    fn test_expect_kind() {
        assert_eq!(
            Value::from("ff0000").expect_channels(ColourSpace::Rgb),
            Err(ColourError::ExpectedChannels {
                space: ColourSpace::Rgb
            })
        );
        assert_eq!(
            Value::from([1.0, 0.0, 0.0]).expect_hex(ColourSpace::Hex),
            Err(ColourError::ExpectedHex {
                space: ColourSpace::Hex
            })
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::from([1.0, 0.5, 0.0]).to_string(), "[1, 0.5, 0]");
        assert_eq!(Value::from("ff8000").to_string(), "ff8000");
    }
}
