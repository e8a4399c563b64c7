//! Pixel targets the rasterizer writes into.
//!
//! The rasterizer never touches a concrete buffer. It only needs something it can
//! `set(x, y, color)` on, which keeps it independent of any windowing or image type.
//!
//! Range checking is the target's job. Callers clip endpoints to the target before
//! rasterizing; every pixel a line emits, corners included, lies inside the bounding
//! box of its endpoints.

use crate::color::ColorF;
use crate::geometry::Point;

/// What an emitted pixel is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelKind {
    /// A pixel on the stepped line itself.
    Main,
    /// A softened corner pixel marking a diagonal step.
    Corner,
}

/// A writable pixel surface.
pub trait PixelTarget {
    /// Write (overwrite) one pixel.
    fn set(&mut self, x: i32, y: i32, color: ColorF);

    /// Write one pixel, told what kind it is.
    ///
    /// The rasterizer always calls this; override it to tell main pixels from
    /// corner pixels.
    fn mark(&mut self, x: i32, y: i32, color: ColorF, kind: PixelKind) {
        let _ = kind;
        self.set(x, y, color);
    }
}

impl<F> PixelTarget for F
where
    F: FnMut(i32, i32, ColorF),
{
    fn set(&mut self, x: i32, y: i32, color: ColorF) {
        (self)(x, y, color);
    }
}

/// One recorded write.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Emission {
    /// Where.
    pub point: Point,
    /// With what.
    pub color: ColorF,
    /// Main or corner.
    pub kind: PixelKind,
}

/// In-memory target that logs every write in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingTarget {
    emissions: Vec<Emission>,
}

impl RecordingTarget {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every write, in emission order.
    #[must_use]
    pub fn emissions(&self) -> &[Emission] {
        &self.emissions
    }

    /// Main pixels only, in emission order.
    pub fn main(&self) -> impl Iterator<Item = &Emission> + '_ {
        self.emissions.iter().filter(|e| e.kind == PixelKind::Main)
    }

    /// Corner pixels only, in emission order.
    pub fn corners(&self) -> impl Iterator<Item = &Emission> + '_ {
        self.emissions.iter().filter(|e| e.kind == PixelKind::Corner)
    }

    /// Positions of the main pixels, in emission order.
    #[must_use]
    pub fn main_points(&self) -> Vec<Point> {
        self.main().map(|e| e.point).collect()
    }

    /// Alpha of each main pixel, in emission order.
    #[must_use]
    pub fn main_alphas(&self) -> Vec<f32> {
        self.main().map(|e| e.color.a).collect()
    }

    /// Forget everything recorded so far.
    pub fn clear(&mut self) {
        self.emissions.clear();
    }
}

impl PixelTarget for RecordingTarget {
    fn set(&mut self, x: i32, y: i32, color: ColorF) {
        self.mark(x, y, color, PixelKind::Main);
    }

    fn mark(&mut self, x: i32, y: i32, color: ColorF, kind: PixelKind) {
        self.emissions.push(Emission {
            point: Point::new(x, y),
            color,
            kind,
        });
    }
}
