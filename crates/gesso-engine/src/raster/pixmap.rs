use std::fmt;

use crate::paint::Color;

/// Error returned when a pixel buffer cannot be allocated.
///
/// Rendering never recovers from this internally: there is no safe
/// fallback image, so the failure is handed to the host.
#[derive(Debug, Clone)]
pub struct PixmapError(pub String);

impl fmt::Display for PixmapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pixmap allocation error: {}", self.0)
    }
}

impl std::error::Error for PixmapError {}

/// Owned width × height RGBA8 pixel buffer, rows top to bottom.
///
/// A pixmap belongs to exactly one owner (a control's cached gradient, a
/// surface's backing store); it is regenerated rather than shared when its
/// defining parameters change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pixmap {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Pixmap {
    /// Allocates a transparent pixmap.
    ///
    /// Negative dimensions are treated as a zero-size request and yield an
    /// empty buffer. Dimension products that overflow the byte count are
    /// the one true failure here.
    pub fn new(width: i32, height: i32) -> Result<Self, PixmapError> {
        let width = width.max(0) as u32;
        let height = height.max(0) as u32;

        let bytes = (width as usize)
            .checked_mul(height as usize)
            .and_then(|px| px.checked_mul(4))
            .ok_or_else(|| PixmapError(format!("{width}x{height} exceeds addressable size")))?;

        Ok(Self { width, height, data: vec![0; bytes] })
    }

    /// Wraps an existing RGBA8 buffer. `data.len()` must be exactly
    /// `width * height * 4`.
    pub fn from_rgba8(width: u32, height: u32, data: Vec<u8>) -> Result<Self, PixmapError> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|px| px.checked_mul(4))
            .ok_or_else(|| PixmapError(format!("{width}x{height} exceeds addressable size")))?;
        if data.len() != expected {
            return Err(PixmapError(format!(
                "buffer length {} does not match {width}x{height} RGBA8",
                data.len()
            )));
        }
        Ok(Self { width, height, data })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Raw RGBA8 bytes, row-major.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Reads the pixel at `(x, y)`; `None` outside the buffer.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        let i = 4 * (y as usize * self.width as usize + x as usize);
        Some(Color::new(self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]))
    }

    /// Writes the pixel at `(x, y)`; out-of-bounds writes are dropped.
    pub fn set_pixel(&mut self, x: i32, y: i32, c: Color) {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return;
        }
        let i = 4 * (y as usize * self.width as usize + x as usize);
        self.data[i] = c.r;
        self.data[i + 1] = c.g;
        self.data[i + 2] = c.b;
        self.data[i + 3] = c.a;
    }

    /// Source-over blends `c` onto the pixel at `(x, y)` with `coverage`.
    pub fn blend_pixel(&mut self, x: i32, y: i32, c: Color, coverage: u8) {
        let Some(dst) = self.pixel(x, y) else { return };
        self.set_pixel(x, y, c.over(dst, coverage));
    }

    /// Fills the whole buffer with `c`.
    pub fn fill(&mut self, c: Color) {
        let packed = c.to_u32();
        for px in bytemuck::cast_slice_mut::<u8, u32>(&mut self.data) {
            *px = packed;
        }
    }
}
