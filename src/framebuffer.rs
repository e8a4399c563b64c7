//! RGBA pixel buffer.
//!
//! Rows are padded to a 64-byte stride so whole-row operations stay SIMD
//! friendly. Whole-buffer compositing goes through trueno vectors.

use crate::color::{ColorF, Rgba};
use crate::error::{Error, Result};
use crate::target::PixelTarget;
use trueno::Vector;

/// Row alignment in bytes (64 bytes for AVX-512).
const ROW_ALIGNMENT: usize = 64;

/// RGBA8 pixel buffer in row-major order.
///
/// As a [`PixelTarget`] it is bounds-checked: writing outside the buffer panics.
/// The inherent [`set_pixel`](Self::set_pixel) clips silently instead.
#[derive(Debug, Clone)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    /// Each pixel is 4 bytes: [R, G, B, A].
    pixels: Vec<u8>,
    /// Row width in bytes, including padding.
    stride: usize,
}

impl Framebuffer {
    /// Create a transparent framebuffer.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use kotsubu_line::framebuffer::Framebuffer;
    ///
    /// let fb = Framebuffer::new(400, 300).unwrap();
    /// assert_eq!(fb.width(), 400);
    /// assert_eq!(fb.height(), 300);
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        let row_bytes = (width as usize) * 4;
        let stride = row_bytes.div_ceil(ROW_ALIGNMENT) * ROW_ALIGNMENT;

        Ok(Self {
            width,
            height,
            pixels: vec![0; stride * (height as usize)],
            stride,
        })
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Total number of pixels.
    #[must_use]
    pub const fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Whether `(x, y)` addresses a pixel of this buffer.
    #[must_use]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    /// Fill every pixel with `color`.
    pub fn clear(&mut self, color: Rgba) {
        let pattern = color.to_array();
        for y in 0..self.height as usize {
            let start = y * self.stride;
            let row = &mut self.pixels[start..start + (self.width as usize) * 4];
            for chunk in row.chunks_exact_mut(4) {
                chunk.copy_from_slice(&pattern);
            }
        }
    }

    /// Color at `(x, y)`, or `None` when out of bounds.
    #[must_use]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let idx = self.pixel_index(x, y);
        let mut px = [0u8; 4];
        px.copy_from_slice(&self.pixels[idx..idx + 4]);
        Some(Rgba::from_array(px))
    }

    /// Overwrite the pixel at `(x, y)`. Does nothing when out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if x >= self.width || y >= self.height {
            return;
        }

        let idx = self.pixel_index(x, y);
        self.pixels[idx..idx + 4].copy_from_slice(&color.to_array());
    }

    /// Add `layer` onto this buffer, weighting its RGB by its own alpha.
    ///
    /// `out.rgb = dst.rgb + src.rgb * src.a`, `out.a = dst.a + src.a`, saturating
    /// at 255. Transparent layer pixels leave the destination untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffers differ in size.
    pub fn composite_additive(&mut self, layer: &Framebuffer) -> Result<()> {
        if self.width != layer.width || self.height != layer.height {
            return Err(Error::DimensionMismatch {
                expected: (self.width, self.height),
                actual: (layer.width, layer.height),
            });
        }

        let row_bytes = (self.width as usize) * 4;
        for y in 0..self.height as usize {
            let start = y * self.stride;
            let src = &layer.pixels[start..start + row_bytes];
            let dst = &mut self.pixels[start..start + row_bytes];

            let weights: Vec<f32> = src
                .chunks_exact(4)
                .flat_map(|px| {
                    let a = f32::from(px[3]) / 255.0;
                    [a, a, a, 1.0]
                })
                .collect();
            let src_vec = Vector::from_vec(src.iter().map(|&b| f32::from(b)).collect());
            let dst_vec = Vector::from_vec(dst.iter().map(|&b| f32::from(b)).collect());

            let summed = src_vec.mul(&Vector::from_vec(weights)).and_then(|w| dst_vec.add(&w));
            match summed {
                Ok(result) => {
                    for (out, &v) in dst.iter_mut().zip(result.as_slice()) {
                        *out = v.round().clamp(0.0, 255.0) as u8;
                    }
                }
                Err(_) => add_row_scalar(dst, src),
            }
        }

        Ok(())
    }

    /// Enlarge by `scale` using nearest-neighbour sampling.
    ///
    /// The result is `ceil(width * scale)` by `ceil(height * scale)`.
    ///
    /// # Errors
    ///
    /// Returns an error if `scale` is not a finite positive number.
    pub fn upscale_nearest(&self, scale: f32) -> Result<Framebuffer> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(Error::InvalidScale(scale));
        }

        let out_w = (self.width as f32 * scale).ceil() as u32;
        let out_h = (self.height as f32 * scale).ceil() as u32;
        let mut out = Framebuffer::new(out_w, out_h)?;

        for oy in 0..out_h {
            let sy = ((oy as f32 / scale) as u32).min(self.height - 1);
            for ox in 0..out_w {
                let sx = ((ox as f32 / scale) as u32).min(self.width - 1);
                let idx = self.pixel_index(sx, sy);
                let odx = out.pixel_index(ox, oy);
                out.pixels[odx..odx + 4].copy_from_slice(&self.pixels[idx..idx + 4]);
            }
        }

        Ok(out)
    }

    /// Pixel data without stride padding, as PNG expects.
    #[must_use]
    pub fn to_compact_pixels(&self) -> Vec<u8> {
        let row_bytes = (self.width as usize) * 4;
        let mut compact = Vec::with_capacity(row_bytes * (self.height as usize));
        for y in 0..self.height as usize {
            let start = y * self.stride;
            compact.extend_from_slice(&self.pixels[start..start + row_bytes]);
        }
        compact
    }

    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * self.stride + (x as usize) * 4
    }
}

fn add_row_scalar(dst: &mut [u8], src: &[u8]) {
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let a = f32::from(s[3]) / 255.0;
        for c in 0..3 {
            d[c] = (f32::from(d[c]) + f32::from(s[c]) * a).round().min(255.0) as u8;
        }
        d[3] = d[3].saturating_add(s[3]);
    }
}

impl PixelTarget for Framebuffer {
    fn set(&mut self, x: i32, y: i32, color: ColorF) {
        assert!(
            self.contains(x, y),
            "pixel ({x}, {y}) outside {}x{} framebuffer",
            self.width,
            self.height
        );
        self.set_pixel(x as u32, y as u32, color.to_rgba());
    }
}
