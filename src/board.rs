//! Pixel board: a small image shown enlarged on screen.
//!
//! The board owns the image lines are rasterized into, maps screen positions
//! onto image pixels, and produces the enlarged, additively composited view.

use crate::color::{ColorF, Rgba};
use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;
use crate::geometry::Point;
use crate::target::PixelTarget;

/// Smallest display scale.
pub const MIN_SCALE: f32 = 1.0;

/// Largest display scale.
pub const MAX_SCALE: f32 = 50.0;

/// An image plus the scale it is displayed at.
#[derive(Debug, Clone)]
pub struct PixelBoard {
    image: Framebuffer,
    scale: f32,
}

impl PixelBoard {
    /// Create a transparent `width` x `height` board shown at `scale`.
    ///
    /// `scale` is clamped into `[MIN_SCALE, MAX_SCALE]`.
    ///
    /// # Errors
    ///
    /// Returns an error if a dimension is zero or `scale` is not finite.
    ///
    /// # Example
    ///
    /// ```
    /// use kotsubu_line::board::PixelBoard;
    /// use kotsubu_line::geometry::Point;
    ///
    /// let board = PixelBoard::new(400, 300, 12.0).unwrap();
    /// assert_eq!(board.to_image_pos(130.0, 25.0), Point::new(10, 2));
    /// assert!(board.contains(Point::new(399, 299)));
    /// ```
    pub fn new(width: u32, height: u32, scale: f32) -> Result<Self> {
        let image = Framebuffer::new(width, height)?;
        let mut board = Self {
            image,
            scale: MIN_SCALE,
        };
        board.set_scale(scale)?;
        Ok(board)
    }

    /// Image width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.image.width()
    }

    /// Image height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.image.height()
    }

    /// Current display scale.
    #[must_use]
    pub const fn scale(&self) -> f32 {
        self.scale
    }

    /// Change the display scale, clamped into `[MIN_SCALE, MAX_SCALE]`.
    ///
    /// # Errors
    ///
    /// Returns an error if `scale` is NaN or infinite.
    pub fn set_scale(&mut self, scale: f32) -> Result<()> {
        if !scale.is_finite() {
            return Err(Error::InvalidScale(scale));
        }
        let clamped = scale.clamp(MIN_SCALE, MAX_SCALE);
        if (clamped - scale).abs() > f32::EPSILON {
            log::debug!("board scale {scale} clamped to {clamped}");
        }
        self.scale = clamped;
        Ok(())
    }

    /// The underlying image.
    #[must_use]
    pub const fn image(&self) -> &Framebuffer {
        &self.image
    }

    /// Map a screen position onto the image pixel under it.
    ///
    /// Positions left of or above the board map to negative coordinates; check
    /// them with [`contains`](Self::contains).
    #[must_use]
    pub fn to_image_pos(&self, screen_x: f32, screen_y: f32) -> Point {
        Point::new((screen_x / self.scale).floor() as i32, (screen_y / self.scale).floor() as i32)
    }

    /// Whether `point` is a pixel of the image.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        self.image.contains(point.x, point.y)
    }

    /// Reset the image to transparent black.
    pub fn clear(&mut self) {
        self.image.clear(Rgba::TRANSPARENT);
    }

    /// The enlarged view: the image upscaled by the display scale and added onto
    /// a canvas filled with `background`.
    ///
    /// # Errors
    ///
    /// Returns an error if the enlarged canvas cannot be allocated.
    pub fn present(&self, background: Rgba) -> Result<Framebuffer> {
        let layer = self.image.upscale_nearest(self.scale)?;
        let mut canvas = Framebuffer::new(layer.width(), layer.height())?;
        canvas.clear(background);
        canvas.composite_additive(&layer)?;
        Ok(canvas)
    }
}

impl PixelTarget for PixelBoard {
    fn set(&mut self, x: i32, y: i32, color: ColorF) {
        self.image.set(x, y, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::render_line;

    #[test]
    fn test_new_board() {
        let board = PixelBoard::new(40, 30, 12.0).unwrap();
        assert_eq!((board.width(), board.height()), (40, 30));
        assert!((board.scale() - 12.0).abs() < f32::EPSILON);
        assert!(PixelBoard::new(0, 30, 12.0).is_err());
    }

    #[test]
    fn test_scale_is_clamped() {
        let mut board = PixelBoard::new(4, 4, 0.2).unwrap();
        assert!((board.scale() - MIN_SCALE).abs() < f32::EPSILON);

        board.set_scale(80.0).unwrap();
        assert!((board.scale() - MAX_SCALE).abs() < f32::EPSILON);

        assert!(board.set_scale(f32::NAN).is_err());
        assert!((board.scale() - MAX_SCALE).abs() < f32::EPSILON);
    }

    #[test]
    fn test_to_image_pos() {
        let board = PixelBoard::new(10, 10, 4.0).unwrap();
        assert_eq!(board.to_image_pos(0.0, 0.0), Point::new(0, 0));
        assert_eq!(board.to_image_pos(3.9, 4.0), Point::new(0, 1));
        assert_eq!(board.to_image_pos(-0.5, 39.9), Point::new(-1, 9));
    }

    #[test]
    fn test_contains() {
        let board = PixelBoard::new(10, 5, 1.0).unwrap();
        assert!(board.contains(Point::new(9, 4)));
        assert!(!board.contains(Point::new(10, 4)));
        assert!(!board.contains(Point::new(0, -1)));
    }

    #[test]
    fn test_clear() {
        let mut board = PixelBoard::new(5, 5, 1.0).unwrap();
        render_line(&mut board, Point::new(0, 0), Point::new(4, 4), ColorF::WHITE);
        assert_eq!(board.image().get_pixel(2, 2), Some(Rgba::WHITE));

        board.clear();
        assert_eq!(board.image().get_pixel(2, 2), Some(Rgba::TRANSPARENT));
    }

    #[test]
    fn test_present_adds_onto_background() {
        let mut board = PixelBoard::new(3, 2, 2.0).unwrap();
        board.set(1, 0, ColorF::new(0.4, 0.8, 1.0, 1.0));

        let view = board.present(Rgba::rgb(10, 10, 10)).unwrap();
        assert_eq!((view.width(), view.height()), (6, 4));
        assert_eq!(view.get_pixel(0, 0), Some(Rgba::rgb(10, 10, 10)));
        assert_eq!(view.get_pixel(2, 0), Some(Rgba::rgb(112, 214, 255)));
        assert_eq!(view.get_pixel(3, 1), Some(Rgba::rgb(112, 214, 255)));
        assert_eq!(view.get_pixel(2, 2), Some(Rgba::rgb(10, 10, 10)));
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_out_of_range_write_panics() {
        let mut board = PixelBoard::new(3, 3, 1.0).unwrap();
        render_line(&mut board, Point::new(0, 0), Point::new(3, 0), ColorF::WHITE);
    }
}
