//! Error types.

use std::{error::Error, fmt};

use crate::space::ColourSpace;

/// Possible reasons for a colour input to be rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColourError {
    /// The hexadecimal string has the wrong length or contains non-hex characters.
    InvalidHex {
        /// Text that was rejected, as received.
        input: String,
    },
    /// The number of channels does not fit the colour space.
    WrongArity {
        /// Colour space the channels were meant for.
        space: ColourSpace,
        /// Smallest accepted number of channels.
        min: usize,
        /// Largest accepted number of channels.
        max: usize,
        /// Number of channels received.
        found: usize,
    },
    /// A channel is NaN or infinite.
    NonFinite {
        /// Colour space the channels were meant for.
        space: ColourSpace,
    },
    /// Numeric channels were expected but a string was given.
    ExpectedChannels {
        /// Colour space that needs channels.
        space: ColourSpace,
    },
    /// A hexadecimal string was expected but channels were given.
    ExpectedHex {
        /// Colour space that needs a string.
        space: ColourSpace,
    },
    /// The name does not match any colour space.
    UnknownColourSpace {
        /// Name that was looked up.
        name: String,
    },
}

impl Error for ColourError {}

impl fmt::Display for ColourError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidHex { input } => write!(f, "\"{input}\" is not a valid hex colour."),
            Self::WrongArity {
                space,
                min,
                max,
                found,
            } => write!(
                f,
                "{space} expects between {min} and {max} channels, got {found}."
            ),
            Self::NonFinite { space } => write!(f, "{space} channels must be finite numbers."),
            Self::ExpectedChannels { space } => {
                write!(f, "{space} expects numeric channels, got a string.")
            }
            Self::ExpectedHex { space } => {
                write!(f, "{space} expects a hex string, got numeric channels.")
            }
            Self::UnknownColourSpace { name } => write!(f, "Unknown colour space \"{name}\"."),
        }
    }
}
