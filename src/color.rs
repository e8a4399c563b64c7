//! Color types.
//!
//! [`Rgba`] is the 8-bit storage format of a [`Framebuffer`](crate::framebuffer::Framebuffer).
//! [`ColorF`] is the working color of the rasterizer: floating-point channels with alpha in
//! `[0, 1]`, so that fading by small per-step amounts does not collapse to zero the way an
//! 8-bit alpha would.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// RGBA color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
pub struct Rgba {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
    /// Alpha component (0-255, 255 = fully opaque).
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);

    /// Create a new RGBA color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color (alpha = 255).
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Convert to array representation.
    #[must_use]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Create from array representation.
    #[must_use]
    pub const fn from_array(arr: [u8; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }
}

/// RGBA color with floating-point components in `[0, 1]`.
///
/// A value type: every alpha adjustment returns a new color.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ColorF {
    /// Red (0.0-1.0).
    pub r: f32,
    /// Green (0.0-1.0).
    pub g: f32,
    /// Blue (0.0-1.0).
    pub b: f32,
    /// Alpha (0.0-1.0).
    pub a: f32,
}

impl ColorF {
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    /// The light blue used by the interactive board.
    pub const SKY: Self = Self::new(0.4, 0.8, 1.0, 1.0);

    /// Create a new color.
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Same RGB, different alpha.
    #[must_use]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Same RGB, alpha multiplied by `rate`.
    #[must_use]
    pub fn scale_alpha(self, rate: f32) -> Self {
        self.with_alpha(self.a * rate)
    }

    /// Quantize to 8-bit channels. Out-of-range channels saturate.
    #[must_use]
    pub fn to_rgba(self) -> Rgba {
        Rgba::new(
            unit_to_u8(self.r),
            unit_to_u8(self.g),
            unit_to_u8(self.b),
            unit_to_u8(self.a),
        )
    }
}

impl From<Rgba> for ColorF {
    fn from(c: Rgba) -> Self {
        Self::new(
            f32::from(c.r) / 255.0,
            f32::from(c.g) / 255.0,
            f32::from(c.b) / 255.0,
            f32::from(c.a) / 255.0,
        )
    }
}

impl From<ColorF> for Rgba {
    fn from(c: ColorF) -> Self {
        c.to_rgba()
    }
}

/// Clamp a rate into `[0, 1]`. NaN becomes 0.
#[must_use]
pub fn clamp_unit(v: f32) -> f32 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}

#[inline]
fn unit_to_u8(v: f32) -> u8 {
    (clamp_unit(v) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rgba_constants() {
        assert_eq!(Rgba::BLACK, Rgba::rgb(0, 0, 0));
        assert_eq!(Rgba::WHITE, Rgba::rgb(255, 255, 255));
        assert_eq!(Rgba::TRANSPARENT.a, 0);
    }

    #[test]
    fn test_rgba_to_array_from_array() {
        let color = Rgba::new(10, 20, 30, 40);
        assert_eq!(color.to_array(), [10, 20, 30, 40]);
        assert_eq!(Rgba::from_array(color.to_array()), color);
    }

    #[test]
    fn test_scale_alpha_keeps_rgb() {
        let c = ColorF::SKY.scale_alpha(0.3);
        assert_relative_eq!(c.r, 0.4);
        assert_relative_eq!(c.g, 0.8);
        assert_relative_eq!(c.b, 1.0);
        assert_relative_eq!(c.a, 0.3);
    }

    #[test]
    fn test_scale_alpha_returns_new_value() {
        let base = ColorF::WHITE;
        let _faded = base.scale_alpha(0.5);
        assert_relative_eq!(base.a, 1.0);
    }

    #[test]
    fn test_to_rgba_rounds_and_saturates() {
        assert_eq!(ColorF::new(0.5, 1.5, -0.2, 1.0).to_rgba(), Rgba::new(128, 255, 0, 255));
        assert_eq!(ColorF::SKY.to_rgba(), Rgba::new(102, 204, 255, 255));
    }

    #[test]
    fn test_from_rgba() {
        let c = ColorF::from(Rgba::new(255, 0, 51, 255));
        assert_relative_eq!(c.r, 1.0);
        assert_relative_eq!(c.g, 0.0);
        assert_relative_eq!(c.b, 0.2);
        assert_relative_eq!(c.a, 1.0);
    }

    #[test]
    fn test_clamp_unit() {
        assert_relative_eq!(clamp_unit(-1.0), 0.0);
        assert_relative_eq!(clamp_unit(0.25), 0.25);
        assert_relative_eq!(clamp_unit(7.0), 1.0);
        assert_relative_eq!(clamp_unit(f32::NAN), 0.0);
    }
}
