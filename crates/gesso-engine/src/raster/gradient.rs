//! Four-corner gradient rasterization.
//!
//! Bilinear interpolation over the unit square with the corner colors as
//! control points: for each pixel at normalized `(u, v)`,
//!
//! ```text
//! top    = lerp(top_left,    top_right,    u)
//! bottom = lerp(bottom_left, bottom_right, u)
//! pixel  = lerp(top, bottom, v)
//! ```
//!
//! Deterministic: identical inputs produce byte-identical buffers.

use crate::paint::Color;

use super::{Pixmap, PixmapError};

/// Rasterizes a `width` × `height` bitmap from four corner colors.
///
/// Degenerate inputs follow the interpolation contract rather than
/// failing: negative or zero dimensions yield an empty buffer, and a
/// 1×1 request yields a single pixel equal to `top_left`. The only error
/// is an allocation-size overflow, which the caller must surface.
pub fn rasterize(
    width: i32,
    height: i32,
    top_left: Color,
    top_right: Color,
    bottom_left: Color,
    bottom_right: Color,
) -> Result<Pixmap, PixmapError> {
    let mut pm = Pixmap::new(width, height)?;
    if pm.is_empty() {
        return Ok(pm);
    }

    let w = pm.width();
    let h = pm.height();

    // For a single row/column the axis denominator collapses; pin the
    // coordinate to 0 so the top/left corner wins.
    let du = if w > 1 { 1.0 / (w - 1) as f32 } else { 0.0 };
    let dv = if h > 1 { 1.0 / (h - 1) as f32 } else { 0.0 };

    for y in 0..h {
        let v = y as f32 * dv;
        for x in 0..w {
            let u = x as f32 * du;
            let top = top_left.lerp(top_right, u);
            let bottom = bottom_left.lerp(bottom_right, u);
            pm.set_pixel(x as i32, y as i32, top.lerp(bottom, v));
        }
    }
    Ok(pm)
}
