//! Background composition: solid, gradient, and image fills under a clip.

use gesso_engine::coords::{Rect, Vec2};
use gesso_engine::paint::{Color, ColorField};
use gesso_engine::path::ClosedPath;
use gesso_engine::raster::{Pixmap, PixmapError, Surface, gradient};

use crate::style::ImageLayout;

/// Fully resolved fill for one compositor call.
///
/// The painter resolves state-dependent colors before building this, so
/// the compositor never consults interaction state itself.
#[derive(Debug)]
pub enum Fill<'a> {
    Solid(Color),
    /// Four-corner gradient; an incomplete field skips the fill.
    Gradient(ColorField),
    Image(&'a Pixmap, ImageLayout),
}

/// Fills `rect` on `surface` with `fill`, clipped to `clip`.
///
/// The clip is applied before any fill so rounded borders produce
/// correctly clipped interiors, and is always reset before returning
/// (including on the error path) so callers can never observe a stale
/// clip. The only error is gradient-bitmap allocation overflow, which is
/// surfaced to the host untouched.
pub fn composite(
    surface: &mut Surface,
    clip: &ClosedPath,
    rect: Rect,
    fill: Fill<'_>,
) -> Result<(), PixmapError> {
    surface.set_clip(*clip);
    let result = fill_clipped(surface, rect, fill);
    surface.reset_clip();
    result
}

fn fill_clipped(surface: &mut Surface, rect: Rect, fill: Fill<'_>) -> Result<(), PixmapError> {
    match fill {
        Fill::Solid(color) => {
            surface.fill_rect(rect, color);
        }
        Fill::Gradient(field) => {
            let Some([tl, tr, bl, br]) = field.corners() else {
                log::debug!("gradient field incomplete; skipping background fill");
                return Ok(());
            };
            // Regenerated every call: the bitmap's defining parameters are
            // the rect size and corner colors, and the host may change
            // either between repaints.
            let bitmap =
                gradient::rasterize(rect.w.round() as i32, rect.h.round() as i32, tl, tr, bl, br)?;
            surface.blit(&bitmap, rect.origin());
        }
        Fill::Image(image, layout) => match layout {
            ImageLayout::None => {
                surface.blit(image, rect.origin());
            }
            ImageLayout::Center => {
                let offset = Vec2::new(
                    (rect.w - image.width() as f32) * 0.5,
                    (rect.h - image.height() as f32) * 0.5,
                );
                surface.blit(image, rect.origin() + offset);
            }
            ImageLayout::Stretch => {
                surface.blit_scaled(image, rect);
            }
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use gesso_engine::coords::CornerRadii;

    use super::*;

    const RED: Color = Color::rgb(255, 0, 0);
    const BLUE: Color = Color::rgb(0, 0, 255);

    fn rect_clip(rect: Rect) -> ClosedPath {
        ClosedPath::rectangle(rect)
    }

    // ── solid ─────────────────────────────────────────────────────────────

    #[test]
    fn solid_fill_reads_back_inside_clip() {
        let mut s = Surface::new(10, 10).unwrap();
        let rect = Rect::from_size(10.0, 10.0);
        composite(&mut s, &rect_clip(rect), rect, Fill::Solid(RED)).unwrap();
        assert_eq!(s.pixel(5, 5), Some(RED));
    }

    #[test]
    fn rounded_clip_masks_solid_corners() {
        let mut s = Surface::new(20, 20).unwrap();
        let rect = Rect::from_size(20.0, 20.0);
        let clip = ClosedPath::rounded(rect, CornerRadii::all(8.0));
        composite(&mut s, &clip, rect, Fill::Solid(RED)).unwrap();
        assert_eq!(s.pixel(10, 10), Some(RED));
        assert_eq!(s.pixel(0, 0), Some(Color::TRANSPARENT));
    }

    #[test]
    fn clip_does_not_persist_after_composite() {
        let mut s = Surface::new(10, 10).unwrap();
        let small = Rect::from_size(2.0, 2.0);
        composite(&mut s, &rect_clip(small), small, Fill::Solid(RED)).unwrap();
        // A later unclipped fill must reach the whole surface.
        s.fill_rect(Rect::from_size(10.0, 10.0), BLUE);
        assert_eq!(s.pixel(9, 9), Some(BLUE));
    }

    // ── gradient ──────────────────────────────────────────────────────────

    #[test]
    fn gradient_fill_places_corner_colors() {
        let mut s = Surface::new(8, 8).unwrap();
        let rect = Rect::from_size(8.0, 8.0);
        let field = ColorField::from_corners(RED, BLUE, BLUE, RED);
        composite(&mut s, &rect_clip(rect), rect, Fill::Gradient(field)).unwrap();
        assert_eq!(s.pixel(0, 0), Some(RED));
        assert_eq!(s.pixel(7, 0), Some(BLUE));
        assert_eq!(s.pixel(0, 7), Some(BLUE));
        assert_eq!(s.pixel(7, 7), Some(RED));
    }

    #[test]
    fn incomplete_gradient_field_is_skipped() {
        let mut s = Surface::new(8, 8).unwrap();
        let rect = Rect::from_size(8.0, 8.0);
        let field = ColorField { top_left: Some(RED), ..ColorField::unset() };
        composite(&mut s, &rect_clip(rect), rect, Fill::Gradient(field)).unwrap();
        assert_eq!(s.pixel(4, 4), Some(Color::TRANSPARENT));
    }

    // ── image ─────────────────────────────────────────────────────────────

    fn image_2x2(c: Color) -> Pixmap {
        let mut pm = Pixmap::new(2, 2).unwrap();
        pm.fill(c);
        pm
    }

    #[test]
    fn image_none_draws_at_origin() {
        let mut s = Surface::new(10, 10).unwrap();
        let rect = Rect::new(3.0, 3.0, 6.0, 6.0);
        let img = image_2x2(RED);
        composite(&mut s, &rect_clip(rect), rect, Fill::Image(&img, ImageLayout::None)).unwrap();
        assert_eq!(s.pixel(3, 3), Some(RED));
        assert_eq!(s.pixel(5, 5), Some(Color::TRANSPARENT));
    }

    #[test]
    fn image_center_centers_natural_size() {
        let mut s = Surface::new(10, 10).unwrap();
        let rect = Rect::new(2.0, 2.0, 6.0, 6.0);
        let img = image_2x2(RED);
        composite(&mut s, &rect_clip(rect), rect, Fill::Image(&img, ImageLayout::Center)).unwrap();
        // 2×2 image centered in a 6×6 rect at (2,2) lands at (4,4)..(6,6).
        assert_eq!(s.pixel(4, 4), Some(RED));
        assert_eq!(s.pixel(5, 5), Some(RED));
        assert_eq!(s.pixel(3, 3), Some(Color::TRANSPARENT));
        assert_eq!(s.pixel(6, 6), Some(Color::TRANSPARENT));
    }

    #[test]
    fn image_stretch_fills_rect() {
        let mut s = Surface::new(10, 10).unwrap();
        let rect = Rect::new(1.0, 1.0, 8.0, 8.0);
        let img = image_2x2(RED);
        composite(&mut s, &rect_clip(rect), rect, Fill::Image(&img, ImageLayout::Stretch)).unwrap();
        assert_eq!(s.pixel(1, 1), Some(RED));
        assert_eq!(s.pixel(8, 8), Some(RED));
        assert_eq!(s.pixel(0, 0), Some(Color::TRANSPARENT));
    }
}
