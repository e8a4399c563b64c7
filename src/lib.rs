//! # kotsubu-line
//!
//! Integer-only line rasterizer for pixel boards.
//!
//! Lines are walked from their end point back toward their start point with a
//! Bresenham-family error accumulator. On top of that walk the rasterizer can:
//!
//! - **Pseudo anti-alias**: mark both corner pixels of every diagonal step with an
//!   alpha-attenuated copy of the line color.
//! - **Decay**: fade alpha linearly over a trailing fraction of the line, or
//!   geometrically on every step.
//!
//! The rasterizer writes through the [`PixelTarget`](target::PixelTarget)
//! capability only, so it works on a [`Framebuffer`](framebuffer::Framebuffer),
//! a [`PixelBoard`](board::PixelBoard), a recording target or a closure.
//!
//! ## Quick Start
//!
//! ```rust
//! use kotsubu_line::prelude::*;
//!
//! let mut board = PixelBoard::new(40, 30, 12.0)?;
//! render_decay_line(
//!     &mut board,
//!     Point::new(2, 2),
//!     Point::new(37, 20),
//!     ColorF::SKY,
//!     DEFAULT_DECAY_SECTION_RATE,
//!     DEFAULT_AA_COLOR_RATE,
//! );
//!
//! let view = board.present(Rgba::BLACK)?;
//! let png = PngEncoder::to_bytes(&view)?;
//! assert!(!png.is_empty());
//! # Ok::<(), kotsubu_line::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for colors, points and line options
//! - `cli`: the `kotsubu-line` command-line renderer

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only
#![cfg_attr(test, allow(clippy::unwrap_used))]

// ============================================================================
// Core Modules
// ============================================================================

/// Color types.
pub mod color;

/// Integer points, axes and segments.
pub mod geometry;

/// The pixel-target capability and a recording target.
pub mod target;

/// Line rasterization.
pub mod render;

// ============================================================================
// Surfaces
// ============================================================================

/// RGBA pixel buffer.
pub mod framebuffer;

/// Scaled pixel board.
pub mod board;

/// Drag-to-draw input handling.
pub mod interaction;

/// Output encoders (PNG).
pub mod output;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for kotsubu-line operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```rust
/// use kotsubu_line::prelude::*;
/// ```
pub mod prelude {
    pub use crate::board::PixelBoard;
    pub use crate::color::{ColorF, Rgba};
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{Distance, Point, Segment};
    pub use crate::interaction::DragSession;
    pub use crate::output::PngEncoder;
    pub use crate::render::{
        rasterize, render_decay_line, render_geometric_line, render_line, render_line_aa, Decay,
        LineOptions, DEFAULT_AA_COLOR_RATE, DEFAULT_DECAY_SECTION_RATE,
    };
    pub use crate::target::{PixelKind, PixelTarget, RecordingTarget};
}
