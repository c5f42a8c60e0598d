//! Colour values that convert between colour spaces.

use crate::color::{Decimal, Normalized};
use crate::convert::{self, Cmy, Cmyk, HexPolicy, Hsv};
use crate::error::ColourError;
use crate::space::ColourSpace;
use crate::value::Value;

/// What `set` does with input it cannot apply.
/// The colour is left untouched either way.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum InvalidInput {
    /// Log a warning and return the current colour, so interactive editing is never interrupted.
    #[default]
    Ignore,
    /// Return the error to the caller.
    Report,
}

/// Parameters for creating a colour.
#[derive(Debug, Clone)]
pub struct ColourDescriptor {
    /// Initial colour.
    pub colour: Value,
    /// Space of the initial colour, also the default space of `get` and `set`.
    pub colour_space: ColourSpace,
    /// If true, stored channels are clipped to [0,1].
    pub clamp: bool,
    /// Handling of rejected input.
    pub on_invalid: InvalidInput,
}

impl Default for ColourDescriptor {
    fn default() -> Self {
        Self {
            colour: Value::from([0.0, 0.0, 0.0, 1.0]),
            colour_space: ColourSpace::Rgb,
            clamp: true,
            on_invalid: InvalidInput::Ignore,
        }
    }
}

/// Common interface of the colour storage backends.
pub trait ColourModel {
    /// Space the colour was created in.
    fn colour_space(&self) -> ColourSpace;

    /// Get the colour in `colour_space`, or in the creation space if None.
    fn get(&self, colour_space: Option<ColourSpace>) -> Value;

    /// Set the colour from `colour` expressed in `colour_space` (creation space if None)
    /// and return it read back in that space.
    /// Passing no colour re-applies the current one.
    fn set(
        &mut self,
        colour: Option<Value>,
        colour_space: Option<ColourSpace>,
    ) -> Result<Value, ColourError>;

    /// Shorthand for `get(Some(colour_space))`.
    fn get_in(&self, colour_space: ColourSpace) -> Value {
        self.get(Some(colour_space))
    }

    /// Shorthand for `set(Some(colour), Some(colour_space))`.
    fn set_in<V>(&mut self, colour: V, colour_space: ColourSpace) -> Result<Value, ColourError>
    where
        V: Into<Value>,
        Self: Sized,
    {
        self.set(Some(colour.into()), Some(colour_space))
    }
}

/// Input decoded into the fractional form of its colour space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) enum Decoded {
    Rgb(Normalized),
    Hsv(Hsv, f64),
    Cmy(Cmy, f64),
    Cmyk(Cmyk, f64),
}

impl Decoded {
    /// Convert to normalised RGBA.
    pub(crate) fn into_rgb(self) -> Normalized {
        match self {
            Self::Rgb(rgb) => rgb,
            Self::Hsv(hsv, a) => convert::hsv_to_rgb(hsv, a),
            Self::Cmy(cmy, a) => convert::cmy_to_rgb(cmy, a),
            Self::Cmyk(cmyk, a) => convert::cmyk_to_rgb(cmyk, a),
        }
    }
}

/// Read `value` as a colour in `space`.
pub(crate) fn decode(
    value: &Value,
    space: ColourSpace,
    hex_policy: HexPolicy,
) -> Result<Decoded, ColourError> {
    if space.is_hex() {
        let hex = value.expect_hex(space)?;
        return convert::parse_hex(hex, hex_policy).map(Decoded::Rgb);
    }

    let ch = value.expect_channels(space)?;
    // Alpha is the channel following the colour channels.
    let alpha = |index: usize| ch.get(index).copied().unwrap_or(1.0);
    let decoded = match space {
        ColourSpace::Rgb => Decoded::Rgb(Normalized::new(ch[0], ch[1], ch[2], alpha(3))),
        ColourSpace::RgbFull => Decoded::Rgb(Normalized::new(
            ch[0] / 255.0,
            ch[1] / 255.0,
            ch[2] / 255.0,
            alpha(3),
        )),
        ColourSpace::Hsv => Decoded::Hsv(
            Hsv {
                h: ch[0],
                s: convert::from_percent(ch[1]),
                v: convert::from_percent(ch[2]),
            },
            alpha(3),
        ),
        ColourSpace::Cmy => Decoded::Cmy(
            Cmy {
                c: convert::from_percent(ch[0]),
                m: convert::from_percent(ch[1]),
                y: convert::from_percent(ch[2]),
            },
            alpha(3),
        ),
        ColourSpace::Cmyk => Decoded::Cmyk(
            Cmyk {
                c: convert::from_percent(ch[0]),
                m: convert::from_percent(ch[1]),
                y: convert::from_percent(ch[2]),
                k: convert::from_percent(ch[3]),
            },
            alpha(4),
        ),
        ColourSpace::Hex | ColourSpace::HexLong => {
            return Err(ColourError::ExpectedHex { space });
        }
    };
    Ok(decoded)
}

/// Output in the 0-255 form.
pub(crate) fn present_rgb_full(rgb: &Normalized) -> Value {
    let decimal = Decimal::from(rgb);
    Value::from([
        decimal.r as f64,
        decimal.g as f64,
        decimal.b as f64,
        decimal.a,
    ])
}

/// Output with integer hue and percentages.
pub(crate) fn present_hsv(hsv: Hsv, alpha: f64) -> Value {
    Value::from([
        // Truncating a hue just under 360 can land on 360 itself.
        convert::truncate(hsv.h).rem_euclid(360.0),
        convert::to_percent(hsv.s),
        convert::to_percent(hsv.v),
        alpha,
    ])
}

/// Output as whole percentages.
pub(crate) fn present_cmy(cmy: Cmy, alpha: f64) -> Value {
    Value::from([
        convert::to_percent(cmy.c),
        convert::to_percent(cmy.m),
        convert::to_percent(cmy.y),
        alpha,
    ])
}

/// Output as whole percentages.
pub(crate) fn present_cmyk(cmyk: Cmyk, alpha: f64) -> Value {
    Value::from([
        convert::to_percent(cmyk.c),
        convert::to_percent(cmyk.m),
        convert::to_percent(cmyk.y),
        convert::to_percent(cmyk.k),
        alpha,
    ])
}

/// Apply the invalid input policy to a rejected `set`.
pub(crate) fn reject(
    policy: InvalidInput,
    space: ColourSpace,
    err: ColourError,
) -> Result<(), ColourError> {
    match policy {
        InvalidInput::Ignore => {
            log::warn!("Ignoring {space} input: {err}");
            Ok(())
        }
        InvalidInput::Report => Err(err),
    }
}

/// Colour value owning its state as normalised RGBA.
#[derive(Debug, Clone, PartialEq)]
pub struct Colour {
    /// Current colour.
    components: Normalized,
    /// Space the colour was created in.
    colour_space: ColourSpace,
    /// If true, components are kept within [0,1].
    clamp: bool,
    /// Handling of rejected input.
    on_invalid: InvalidInput,
}

impl Default for Colour {
    fn default() -> Self {
        Self {
            components: Normalized::BLACK,
            colour_space: ColourSpace::Rgb,
            clamp: true,
            on_invalid: InvalidInput::Ignore,
        }
    }
}

impl Colour {
    /// Create a new colour.
    /// Fails only if the initial colour is rejected and the descriptor asks for `Report`.
    /// # Example
    /// ```
    /// use rwcolour::{Colour, ColourDescriptor, ColourModel, ColourSpace, Value};
    ///
    /// let colour = Colour::new(&ColourDescriptor {
    ///     colour: Value::from("ff8800"),
    ///     colour_space: ColourSpace::Hex,
    ///     ..Default::default()
    /// })
    /// .unwrap();
    /// assert_eq!(colour.get(None), Value::from("ff8800"));
    /// ```
    pub fn new(descriptor: &ColourDescriptor) -> Result<Self, ColourError> {
        let mut colour = Self {
            colour_space: descriptor.colour_space,
            clamp: descriptor.clamp,
            on_invalid: descriptor.on_invalid,
            ..Default::default()
        };
        colour.set(Some(descriptor.colour.clone()), None)?;
        log::debug!(
            "Created {} colour {:?}.",
            colour.colour_space,
            colour.components
        );
        Ok(colour)
    }

    /// Stored normalised RGBA.
    pub fn components(&self) -> Normalized {
        self.components
    }

    /// Whether components are clipped to [0,1].
    pub fn is_clamped(&self) -> bool {
        self.clamp
    }

    /// Store a colour, applying the clamping policy.
    fn store(&mut self, rgba: Normalized) {
        self.components = if self.clamp { rgba.clamped() } else { rgba };
    }
}

impl ColourModel for Colour {
    fn colour_space(&self) -> ColourSpace {
        self.colour_space
    }

    fn get(&self, colour_space: Option<ColourSpace>) -> Value {
        let rgb = &self.components;
        match colour_space.unwrap_or(self.colour_space) {
            ColourSpace::Rgb => Value::from(<[f64; 4]>::from(*rgb)),
            ColourSpace::RgbFull => present_rgb_full(rgb),
            ColourSpace::Hsv => present_hsv(convert::rgb_to_hsv(rgb), rgb.a),
            ColourSpace::Cmy => present_cmy(convert::rgb_to_cmy(rgb), rgb.a),
            ColourSpace::Cmyk => present_cmyk(convert::rgb_to_cmyk(rgb), rgb.a),
            ColourSpace::Hex => Value::Hex(convert::to_hex(rgb, false)),
            ColourSpace::HexLong => Value::Hex(convert::to_hex(rgb, true)),
        }
    }

    fn set(
        &mut self,
        colour: Option<Value>,
        colour_space: Option<ColourSpace>,
    ) -> Result<Value, ColourError> {
        let space = colour_space.unwrap_or(self.colour_space);
        match colour {
            None => self.store(self.components),
            Some(value) => match decode(&value, space, HexPolicy::Strict) {
                Ok(decoded) => {
                    self.store(decoded.into_rgb());
                    log::trace!("Set {space} {value} -> {:?}.", self.components);
                }
                Err(err) => reject(self.on_invalid, space, err)?,
            },
        }
        Ok(self.get(Some(space)))
    }
}
