//! Drag-to-draw input handling without a window.
//!
//! A press on the board anchors the line's start; every drag frame whose cursor is
//! on the board clears it and redraws the line from the anchor to the cursor.
//! Rendering runs from the cursor back toward the anchor, so a decaying line fades
//! out at the point where the drag began.

use crate::board::PixelBoard;
use crate::color::ColorF;
use crate::geometry::Point;
use crate::render::{rasterize, LineOptions};

/// State of one press–drag–release gesture.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragSession {
    start: Option<Point>,
}

impl DragSession {
    /// An idle session.
    #[must_use]
    pub const fn new() -> Self {
        Self { start: None }
    }

    /// Whether a press is being dragged.
    #[must_use]
    pub const fn is_drawing(&self) -> bool {
        self.start.is_some()
    }

    /// Anchor of the current gesture.
    #[must_use]
    pub const fn start(&self) -> Option<Point> {
        self.start
    }

    /// Handle a button press at a screen position.
    ///
    /// Drawing only starts when the position lies on the board. Returns whether it did.
    pub fn press(&mut self, board: &PixelBoard, screen_x: f32, screen_y: f32) -> bool {
        let pos = board.to_image_pos(screen_x, screen_y);
        if board.contains(pos) {
            log::debug!("drag started at {pos:?}");
            self.start = Some(pos);
        } else {
            self.start = None;
        }
        self.start.is_some()
    }

    /// Handle one drag frame.
    ///
    /// While drawing, and with the cursor on the board, clears the board and
    /// renders the line from the anchor to the cursor. Returns whether a frame
    /// was rendered; off-board frames keep the previous line.
    pub fn drag(
        &self,
        board: &mut PixelBoard,
        screen_x: f32,
        screen_y: f32,
        color: ColorF,
        options: &LineOptions,
    ) -> bool {
        let Some(start) = self.start else {
            return false;
        };

        let end = board.to_image_pos(screen_x, screen_y);
        if !board.contains(end) {
            return false;
        }

        board.clear();
        rasterize(board, start, end, color, options);
        true
    }

    /// Handle the button release.
    pub fn release(&mut self) {
        if let Some(start) = self.start.take() {
            log::debug!("drag from {start:?} released");
        }
    }
}
