//! Colour data.

use crate::convert::truncate;

/// Colour data, stored in normalised form ([0,1]).
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Normalized {
    /// Red component.
    pub r: f64,
    /// Green component.
    pub g: f64,
    /// Blue component.
    pub b: f64,
    /// Alpha component.
    pub a: f64,
}

impl Default for Normalized {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Normalized {
    /// Opaque black.
    pub const BLACK: Normalized = Normalized::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Normalized = Normalized::new(1.0, 1.0, 1.0, 1.0);

    /// Create a new colour from its components.
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Copy of the colour with every component clipped to [0,1].
    pub fn clamped(self) -> Self {
        let [r, g, b, a]: [f64; 4] = self.into();
        Self::new(
            r.clamp(0.0, 1.0),
            g.clamp(0.0, 1.0),
            b.clamp(0.0, 1.0),
            a.clamp(0.0, 1.0),
        )
    }

    /// Largest of the three colour components.
    pub fn max_rgb(&self) -> f64 {
        self.r.max(self.g).max(self.b)
    }

    /// Smallest of the three colour components.
    pub fn min_rgb(&self) -> f64 {
        self.r.min(self.g).min(self.b)
    }

    /// Single precision copy for GPU consumption.
    pub fn to_uniform(&self) -> SwatchUniform {
        SwatchUniform {
            colour: [self.r as f32, self.g as f32, self.b as f32, self.a as f32],
        }
    }
}

impl From<Normalized> for [f64; 4] {
    fn from(item: Normalized) -> Self {
        bytemuck::cast(item)
    }
}

impl From<[f64; 4]> for Normalized {
    fn from(item: [f64; 4]) -> Self {
        bytemuck::cast(item)
    }
}

/// Colour data, stored in decimal form ([0,255]).
/// Alpha stays normalised.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Decimal {
    /// Red component.
    pub r: i64,
    /// Green component.
    pub g: i64,
    /// Blue component.
    pub b: i64,
    /// Alpha component.
    pub a: f64,
}

impl From<Normalized> for Decimal {
    fn from(item: Normalized) -> Self {
        Decimal::from(&item)
    }
}

impl From<&Normalized> for Decimal {
    fn from(item: &Normalized) -> Self {
        Decimal {
            r: truncate(item.r * 255.0) as i64,
            g: truncate(item.g * 255.0) as i64,
            b: truncate(item.b * 255.0) as i64,
            a: item.a,
        }
    }
}

impl From<Decimal> for Normalized {
    fn from(item: Decimal) -> Self {
        Normalized::from(&item)
    }
}

impl From<&Decimal> for Normalized {
    fn from(item: &Decimal) -> Self {
        Normalized {
            r: item.r as f64 / 255.0,
            g: item.g as f64 / 255.0,
            b: item.b as f64 / 255.0,
            a: item.a,
        }
    }
}

/// Uniform used for painting a colour swatch.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SwatchUniform {
    /// Swatch colour (r, g, b, a).
    pub colour: [f32; 4],
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_clamped() {
        let colour = Normalized::new(2.0, -1.0, 0.5, 1.0).clamped();
        assert_eq!(colour, Normalized::new(1.0, 0.0, 0.5, 1.0));
    }

    #[test]
    fn test_decimal_truncates() {
        let decimal = Decimal::from(Normalized::new(1.0, 0.5, 0.0, 0.25));
        assert_eq!(
            decimal,
            Decimal {
                r: 255,
                g: 127,
                b: 0,
                a: 0.25
            }
        );
        for n in 0..=255 {
            let normalized = Normalized::new(n as f64 / 255.0, 0.0, 0.0, 1.0);
            assert_eq!(Decimal::from(normalized).r, n);
        }
    }

    #[test]
    fn test_array_cast() {
        let array: [f64; 4] = Normalized::new(0.1, 0.2, 0.3, 0.4).into();
        assert_eq!(array, [0.1, 0.2, 0.3, 0.4]);
        assert_eq!(Normalized::from(array).b, 0.3);
    }

    #[test]
    fn test_uniform_layout() {
        let uniform = Normalized::WHITE.to_uniform();
        assert_eq!(bytemuck::bytes_of(&uniform).len(), 16);
        assert_eq!(uniform.colour, [1.0; 4]);
    }
}
