//! Line rasterization.
//!
//! One integer walk from `end` back to `start`, shared by every variant. The
//! variants only differ in the color each emitted pixel gets:
//!
//! - plain: every main pixel gets the base color;
//! - anti-aliased: each diagonal step also marks its two corner pixels with
//!   `alpha * aa_color_rate`;
//! - tail decay: a constant head near `end`, then alpha falls linearly to a small
//!   positive value at `start`;
//! - geometric decay: alpha is multiplied by a fixed rate on every step.
//!
//! The error term is kept doubled so the half-pixel rounding threshold stays an
//! integer.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::color::{clamp_unit, ColorF};
use crate::geometry::{Axis, Point, Segment};
use crate::target::{PixelKind, PixelTarget};

/// Corner alpha rate used when none is given.
pub const DEFAULT_AA_COLOR_RATE: f32 = 0.3;

/// Fading tail fraction used when none is given.
pub const DEFAULT_DECAY_SECTION_RATE: f32 = 0.5;

/// How alpha changes along the walk.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Decay {
    /// Constant color.
    #[default]
    None,
    /// The trailing `section_rate` of the segment (measured from `start`) fades
    /// linearly.
    Tail {
        /// Fraction of the driving-axis length that fades, in `[0, 1]`.
        section_rate: f32,
    },
    /// Alpha is multiplied by `rate` after every step away from `end`.
    Geometric {
        /// Per-step multiplier, in `[0, 1]`.
        rate: f32,
    },
}

impl Decay {
    /// Same mode with its rate clamped into `[0, 1]`.
    #[must_use]
    pub fn clamped(self) -> Self {
        match self {
            Self::None => Self::None,
            Self::Tail { section_rate } => Self::Tail {
                section_rate: clamp_unit(section_rate),
            },
            Self::Geometric { rate } => Self::Geometric {
                rate: clamp_unit(rate),
            },
        }
    }
}

/// Per-pixel color policy for [`rasterize`].
///
/// Every rate is clamped into `[0, 1]` when it is set.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LineOptions {
    anti_alias: bool,
    aa_color_rate: f32,
    decay: Decay,
}

impl Default for LineOptions {
    fn default() -> Self {
        Self::plain()
    }
}

impl LineOptions {
    /// No corner pixels, no decay.
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            anti_alias: false,
            aa_color_rate: DEFAULT_AA_COLOR_RATE,
            decay: Decay::None,
        }
    }

    /// Corner pixels at `aa_color_rate`, no decay.
    #[must_use]
    pub fn anti_aliased(aa_color_rate: f32) -> Self {
        Self::plain().anti_alias(true).aa_color_rate(aa_color_rate)
    }

    /// Corner pixels plus a linearly fading tail.
    #[must_use]
    pub fn decaying(decay_section_rate: f32, aa_color_rate: f32) -> Self {
        Self::anti_aliased(aa_color_rate).decay(Decay::Tail {
            section_rate: decay_section_rate,
        })
    }

    /// Corner pixels plus per-step multiplicative fading.
    #[must_use]
    pub fn geometric(rate: f32, aa_color_rate: f32) -> Self {
        Self::anti_aliased(aa_color_rate).decay(Decay::Geometric { rate })
    }

    /// Enable or disable corner pixels.
    #[must_use]
    pub const fn anti_alias(mut self, enabled: bool) -> Self {
        self.anti_alias = enabled;
        self
    }

    /// Set the corner alpha rate.
    #[must_use]
    pub fn aa_color_rate(mut self, rate: f32) -> Self {
        self.aa_color_rate = clamp_unit(rate);
        self
    }

    /// Set the decay mode.
    #[must_use]
    pub fn decay(mut self, decay: Decay) -> Self {
        self.decay = decay.clamped();
        self
    }

    /// Whether corner pixels are emitted.
    #[must_use]
    pub const fn is_anti_aliased(&self) -> bool {
        self.anti_alias
    }

    /// Corner alpha rate.
    #[must_use]
    pub const fn corner_rate(&self) -> f32 {
        self.aa_color_rate
    }

    /// Decay mode.
    #[must_use]
    pub const fn decay_mode(&self) -> Decay {
        self.decay
    }
}

/// Stepping state of one walk.
///
/// The error term runs in `i64`: doubled distances across the whole `i32` range
/// need 34 bits.
struct Walk {
    now: Point,
    start: Point,
    step: Point,
    driving: Axis,
    /// Doubled driving-axis distance.
    threshold: i64,
    /// Doubled non-driving distance, added every step.
    rise: i64,
    e: i64,
}

impl Walk {
    fn new(seg: &Segment) -> Self {
        let dist = seg.dist();
        let driving = seg.driving_axis();
        Self {
            now: seg.end,
            start: seg.start,
            step: seg.step(),
            driving,
            threshold: 2 * i64::from(dist.get(driving)),
            rise: 2 * i64::from(dist.get(driving.other())),
            e: i64::from(dist.get(driving)),
        }
    }

    fn driving_pos(&self) -> i32 {
        self.now.get(self.driving)
    }

    fn at_start(&self) -> bool {
        self.driving_pos() == self.start.get(self.driving)
    }

    /// Move one pixel along the driving axis. On a diagonal step, returns the
    /// near and far corner pixels.
    fn advance(&mut self) -> Option<[Point; 2]> {
        let d = self.driving;
        let n = d.other();
        let before = self.now;

        *self.now.get_mut(d) += self.step.get(d);
        self.e += self.rise;

        if self.e < self.threshold {
            return None;
        }

        *self.now.get_mut(n) += self.step.get(n);
        // Keep the overshoot; resetting to zero would bend the line.
        self.e -= self.threshold;

        Some([before.with(n, self.now.get(n)), before.with(d, self.now.get(d))])
    }
}

/// Alpha schedule of one walk.
enum Fade {
    Constant,
    Tail {
        split: i64,
        tail_len: i64,
        fade_step: Option<f32>,
    },
    Geometric {
        rate: f32,
    },
}

impl Fade {
    fn new(decay: Decay, seg: &Segment) -> Self {
        match decay {
            Decay::None => Self::Constant,
            Decay::Tail { section_rate } => {
                let axis = seg.driving_axis();
                let delta = f64::from(seg.end.get(axis)) - f64::from(seg.start.get(axis));
                let decay_len = (delta * f64::from(section_rate)).round() as i64;
                Self::Tail {
                    split: i64::from(seg.start.get(axis)) + decay_len,
                    tail_len: decay_len.abs(),
                    fade_step: None,
                }
            }
            Decay::Geometric { rate } => Self::Geometric { rate },
        }
    }

    /// Color for the pixel reached by the step taken from driving position `from`.
    fn next(&mut self, color: ColorF, from: i32) -> ColorF {
        match self {
            Self::Constant => color,
            Self::Tail { split, tail_len, fade_step } => {
                if fade_step.is_none() && i64::from(from) == *split {
                    // +1 keeps a zero-length tail from dividing by zero
                    *fade_step = Some(color.a / (1 + *tail_len) as f32);
                }
                match fade_step {
                    Some(step) => color.with_alpha((color.a - *step).max(0.0)),
                    None => color,
                }
            }
            Self::Geometric { rate } => color.scale_alpha(*rate),
        }
    }

    /// Color the corners of a step are softened from, given the colors before
    /// and after [`Fade::next`].
    ///
    /// Geometric fading draws a step's corners before multiplying, so they keep
    /// the previous pixel's alpha.
    fn corner_base(&self, previous: ColorF, current: ColorF) -> ColorF {
        match self {
            Self::Geometric { .. } => previous,
            Self::Constant | Self::Tail { .. } => current,
        }
    }
}

/// Rasterize `start`–`end` into `target`, walking from `end` to `start`.
///
/// Emits exactly `max(|dx|, |dy|) + 1` main pixels, `end` first and `start` last.
/// With anti-aliasing on, every diagonal step additionally emits its two corner
/// pixels before the main pixel it leads to. Under tail decay the corners carry
/// the faded alpha of that main pixel; under geometric decay they carry the
/// alpha from before the step's multiplication.
///
/// No bounds checking happens here: every pixel emitted lies within the bounding
/// box of the two endpoints, so clip the endpoints to the target beforehand.
pub fn rasterize<T>(target: &mut T, start: Point, end: Point, color: ColorF, options: &LineOptions)
where
    T: PixelTarget + ?Sized,
{
    let seg = Segment::new(start, end);
    log::trace!(
        "rasterize {:?} -> {:?}: {} px, {:?}",
        end,
        start,
        seg.pixel_count(),
        options
    );

    let mut walk = Walk::new(&seg);
    let mut fade = Fade::new(options.decay, &seg);
    let mut current = color;

    target.mark(walk.now.x, walk.now.y, current, PixelKind::Main);

    while !walk.at_start() {
        let from = walk.driving_pos();
        let corners = walk.advance();
        let previous = current;
        current = fade.next(current, from);

        if options.anti_alias {
            if let Some(corners) = corners {
                let soft = fade
                    .corner_base(previous, current)
                    .scale_alpha(options.aa_color_rate);
                for p in corners {
                    target.mark(p.x, p.y, soft, PixelKind::Corner);
                }
            }
        }

        target.mark(walk.now.x, walk.now.y, current, PixelKind::Main);
    }
}

/// Plain line: no corner pixels, no decay.
pub fn render_line<T>(target: &mut T, start: Point, end: Point, color: ColorF)
where
    T: PixelTarget + ?Sized,
{
    rasterize(target, start, end, color, &LineOptions::plain());
}

/// Line with corner pixels at every diagonal step.
pub fn render_line_aa<T>(
    target: &mut T,
    start: Point,
    end: Point,
    color: ColorF,
    aa_color_rate: f32,
) where
    T: PixelTarget + ?Sized,
{
    rasterize(target, start, end, color, &LineOptions::anti_aliased(aa_color_rate));
}

/// Line with corner pixels whose trailing `decay_section_rate` fades toward `start`.
pub fn render_decay_line<T>(
    target: &mut T,
    start: Point,
    end: Point,
    color: ColorF,
    decay_section_rate: f32,
    aa_color_rate: f32,
) where
    T: PixelTarget + ?Sized,
{
    let options = LineOptions::decaying(decay_section_rate, aa_color_rate);
    rasterize(target, start, end, color, &options);
}

/// Line with corner pixels whose alpha is multiplied by `rate` on every step.
pub fn render_geometric_line<T>(
    target: &mut T,
    start: Point,
    end: Point,
    color: ColorF,
    rate: f32,
    aa_color_rate: f32,
) where
    T: PixelTarget + ?Sized,
{
    rasterize(target, start, end, color, &LineOptions::geometric(rate, aa_color_rate));
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::target::RecordingTarget;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn coord() -> impl Strategy<Value = i32> {
        -64i32..64
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        /// Corner pixels never leave the endpoints' bounding box.
        #[test]
        fn prop_corners_inside_bounding_box(
            sx in coord(), sy in coord(), ex in coord(), ey in coord()
        ) {
            let mut rec = RecordingTarget::new();
            rasterize(&mut rec, Point::new(sx, sy), Point::new(ex, ey), ColorF::WHITE,
                &LineOptions::anti_aliased(0.3));

            for e in rec.emissions() {
                prop_assert!(e.point.x >= sx.min(ex) && e.point.x <= sx.max(ex));
                prop_assert!(e.point.y >= sy.min(ey) && e.point.y <= sy.max(ey));
            }
        }

        /// Corner pixels are never on the line itself.
        #[test]
        fn prop_corners_off_the_line(
            sx in coord(), sy in coord(), ex in coord(), ey in coord()
        ) {
            let mut rec = RecordingTarget::new();
            rasterize(&mut rec, Point::new(sx, sy), Point::new(ex, ey), ColorF::WHITE,
                &LineOptions::anti_aliased(0.3));

            let main: HashSet<Point> = rec.main_points().into_iter().collect();
            for e in rec.corners() {
                prop_assert!(!main.contains(&e.point), "corner {:?} on the line", e.point);
            }
        }
    }
}
