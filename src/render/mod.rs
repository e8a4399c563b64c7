//! Line rasterization.
//!
//! A Bresenham-family integer walk with three additions: it runs from the
//! segment's end toward its start, it can mark the corners of every diagonal
//! step with softened pixels, and it can fade alpha along the way.
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."

mod line;

pub use line::{
    rasterize, render_decay_line, render_geometric_line, render_line, render_line_aa, Decay,
    LineOptions, DEFAULT_AA_COLOR_RATE, DEFAULT_DECAY_SECTION_RATE,
};
