//! Colour values backed by a native colour object of the host application.

pub mod emulated;

use crate::color::Normalized;
use crate::convert::{self, Cmy, Cmyk, HexPolicy, Hsv};
use crate::error::ColourError;
use crate::model::{self, ColourDescriptor, ColourModel, Decoded, InvalidInput};
use crate::space::ColourSpace;
use crate::value::Value;

/// Colour models a native colour object understands.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NativeModel {
    /// Red, green, blue, alpha.
    Rgb,
    /// Hue in degrees, saturation, value, alpha.
    Hsv,
    /// Cyan, magenta, yellow, alpha.
    Cmy,
    /// Cyan, magenta, yellow, key. Alpha is separate.
    Cmyk,
}

/// Colour object owned by the host application.
///
/// Channels other than hue are fractions in [0,1]. For `NativeModel::Cmyk` the fourth
/// channel is key and alpha goes through `alpha`/`set_alpha`; for every other model the
/// fourth channel is alpha. The object may clamp or reinterpret values on its own.
pub trait NativeColour {
    /// Read the colour in `model`.
    fn color(&self, model: NativeModel) -> [f64; 4];
    /// Replace the colour with `channels` expressed in `model`.
    fn set_color(&mut self, model: NativeModel, channels: [f64; 4]);
    /// Read the alpha channel.
    fn alpha(&self) -> f64;
    /// Replace the alpha channel.
    fn set_alpha(&mut self, alpha: f64);
}

/// Colour value that stores nothing itself and forwards to a native colour object.
/// The native object is borrowed: its owner, not this adapter, decides when it goes away.
pub struct HostColour<'a, N: NativeColour + ?Sized> {
    /// Source of truth for the colour.
    native: &'a mut N,
    /// Space the colour was created in.
    colour_space: ColourSpace,
    /// If true, channels are clipped to [0,1] before reaching the native object.
    clamp: bool,
    /// Handling of rejected input.
    on_invalid: InvalidInput,
}

impl<'a, N: NativeColour + ?Sized> HostColour<'a, N> {
    /// Wrap `native` and set it to the descriptor's colour.
    pub fn new(native: &'a mut N, descriptor: &ColourDescriptor) -> Result<Self, ColourError> {
        let mut colour = Self {
            native,
            colour_space: descriptor.colour_space,
            clamp: descriptor.clamp,
            on_invalid: descriptor.on_invalid,
        };
        colour.set(Some(descriptor.colour.clone()), None)?;
        log::debug!("Attached {} colour to a native colour.", colour.colour_space);
        Ok(colour)
    }

    /// Native colour object.
    pub fn native(&self) -> &N {
        &*self.native
    }

    /// Current colour as normalised RGBA, as the native object reports it.
    pub fn components(&self) -> Normalized {
        Normalized::from(self.native.color(NativeModel::Rgb))
    }

    /// Apply the clamping policy to a fractional channel.
    fn fit(&self, channel: f64) -> f64 {
        if self.clamp {
            channel.clamp(0.0, 1.0)
        } else {
            channel
        }
    }

    /// Forward decoded input to the native object in its own model.
    fn forward(&mut self, decoded: Decoded) {
        match decoded {
            Decoded::Rgb(rgb) => {
                let channels = [self.fit(rgb.r), self.fit(rgb.g), self.fit(rgb.b), self.fit(rgb.a)];
                self.native.set_color(NativeModel::Rgb, channels);
            }
            Decoded::Hsv(hsv, a) => {
                let h = if self.clamp { hsv.h.rem_euclid(360.0) } else { hsv.h };
                let channels = [h, self.fit(hsv.s), self.fit(hsv.v), self.fit(a)];
                self.native.set_color(NativeModel::Hsv, channels);
            }
            Decoded::Cmy(cmy, a) => {
                let channels = [self.fit(cmy.c), self.fit(cmy.m), self.fit(cmy.y), self.fit(a)];
                self.native.set_color(NativeModel::Cmy, channels);
            }
            Decoded::Cmyk(cmyk, a) => {
                let channels = [
                    self.fit(cmyk.c),
                    self.fit(cmyk.m),
                    self.fit(cmyk.y),
                    self.fit(cmyk.k),
                ];
                self.native.set_color(NativeModel::Cmyk, channels);
                let a = self.fit(a);
                self.native.set_alpha(a);
            }
        }
    }
}

impl<'a, N: NativeColour + ?Sized> ColourModel for HostColour<'a, N> {
    fn colour_space(&self) -> ColourSpace {
        self.colour_space
    }

    fn get(&self, colour_space: Option<ColourSpace>) -> Value {
        match colour_space.unwrap_or(self.colour_space) {
            ColourSpace::Rgb => Value::from(self.native.color(NativeModel::Rgb)),
            ColourSpace::RgbFull => model::present_rgb_full(&self.components()),
            ColourSpace::Hsv => {
                let [h, s, v, a] = self.native.color(NativeModel::Hsv);
                model::present_hsv(Hsv { h, s, v }, a)
            }
            ColourSpace::Cmy => {
                let [c, m, y, a] = self.native.color(NativeModel::Cmy);
                model::present_cmy(Cmy { c, m, y }, a)
            }
            ColourSpace::Cmyk => {
                let [c, m, y, k] = self.native.color(NativeModel::Cmyk);
                model::present_cmyk(Cmyk { c, m, y, k }, self.native.alpha())
            }
            ColourSpace::Hex => Value::Hex(convert::to_hex(&self.components(), false)),
            ColourSpace::HexLong => Value::Hex(convert::to_hex(&self.components(), true)),
        }
    }

    fn set(
        &mut self,
        colour: Option<Value>,
        colour_space: Option<ColourSpace>,
    ) -> Result<Value, ColourError> {
        let space = colour_space.unwrap_or(self.colour_space);
        match colour {
            None => self.forward(Decoded::Rgb(self.components())),
            Some(value) => match model::decode(&value, space, HexPolicy::AllowShort) {
                Ok(decoded) => {
                    log::trace!("Forwarding {space} {value} to the native colour.");
                    self.forward(decoded);
                }
                Err(err) => model::reject(self.on_invalid, space, err)?,
            },
        }
        Ok(self.get(Some(space)))
    }
}
