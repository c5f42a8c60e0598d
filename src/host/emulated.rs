//! Native colour stand-in for running without a host application.

use crate::color::Normalized;
use crate::convert::{self, Cmy, Cmyk, Hsv};
use crate::host::{NativeColour, NativeModel};

/// Keeps RGBA verbatim and converts on request, following the native conventions.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Emulated {
    /// Stored colour.
    rgba: Normalized,
}

impl Emulated {
    /// Create a new native colour.
    pub fn new(rgba: Normalized) -> Self {
        Self { rgba }
    }

    /// Stored colour.
    pub fn rgba(&self) -> Normalized {
        self.rgba
    }
}

impl NativeColour for Emulated {
    fn color(&self, model: NativeModel) -> [f64; 4] {
        let rgba = &self.rgba;
        match model {
            NativeModel::Rgb => (*rgba).into(),
            NativeModel::Hsv => {
                let Hsv { h, s, v } = convert::rgb_to_hsv(rgba);
                [h, s, v, rgba.a]
            }
            NativeModel::Cmy => {
                let Cmy { c, m, y } = convert::rgb_to_cmy(rgba);
                [c, m, y, rgba.a]
            }
            NativeModel::Cmyk => {
                let Cmyk { c, m, y, k } = convert::rgb_to_cmyk(rgba);
                [c, m, y, k]
            }
        }
    }

    fn set_color(&mut self, model: NativeModel, channels: [f64; 4]) {
        let [x, y, z, w] = channels;
        self.rgba = match model {
            NativeModel::Rgb => Normalized::from(channels),
            NativeModel::Hsv => convert::hsv_to_rgb(Hsv { h: x, s: y, v: z }, w),
            NativeModel::Cmy => convert::cmy_to_rgb(Cmy { c: x, m: y, y: z }, w),
            NativeModel::Cmyk => convert::cmyk_to_rgb(
                Cmyk {
                    c: x,
                    m: y,
                    y: z,
                    k: w,
                },
                self.rgba.a,
            ),
        };
    }

    fn alpha(&self) -> f64 {
        self.rgba.a
    }

    fn set_alpha(&mut self, alpha: f64) {
        self.rgba.a = alpha;
    }
}
