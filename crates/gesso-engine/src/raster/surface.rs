use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};

use crate::coords::{Rect, Vec2};
use crate::paint::Color;
use crate::path::ClosedPath;
use crate::text::{FontId, FontSystem};

use super::{Pixmap, PixmapError};

/// Software drawing surface backed by a [`Pixmap`].
///
/// This is the target every styling operation draws into. It supports the
/// full surface contract the styling layer needs: path fill and stroke,
/// clip set/reset, solid rect fill, pixmap blits, text drawing, and pixel
/// readback.
///
/// Shape edges are anti-aliased from the path's signed distance (the same
/// per-quadrant rounded-rect distance the border geometry exposes); the
/// clip is a binary pixel-center test so clipped solid fills read back
/// bit-exact in the interior.
pub struct Surface {
    pixmap: Pixmap,
    clip: Option<ClosedPath>,
}

impl Surface {
    /// Allocates a transparent surface.
    pub fn new(width: i32, height: i32) -> Result<Self, PixmapError> {
        Ok(Self { pixmap: Pixmap::new(width, height)?, clip: None })
    }

    /// Wraps an existing pixmap as the backing store.
    pub fn from_pixmap(pixmap: Pixmap) -> Self {
        Self { pixmap, clip: None }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Full surface bounds as a rect.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::from_size(self.pixmap.width() as f32, self.pixmap.height() as f32)
    }

    #[inline]
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    pub fn into_pixmap(self) -> Pixmap {
        self.pixmap
    }

    /// Reads the pixel at `(x, y)`; `None` outside the surface.
    #[inline]
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.pixmap.pixel(x, y)
    }

    /// Overwrites every pixel with `c`, ignoring the clip.
    pub fn clear(&mut self, c: Color) {
        self.pixmap.fill(c);
    }

    // ── clipping ──────────────────────────────────────────────────────────

    /// Restricts subsequent drawing to the interior of `path`.
    ///
    /// Replaces any previous clip; clips do not nest.
    pub fn set_clip(&mut self, path: ClosedPath) {
        self.clip = Some(path);
    }

    /// Restores drawing to the full surface bounds.
    pub fn reset_clip(&mut self) {
        self.clip = None;
    }

    #[inline]
    fn clip_allows(&self, cx: f32, cy: f32) -> bool {
        match &self.clip {
            Some(path) => path.contains(Vec2::new(cx, cy)),
            None => true,
        }
    }

    // ── filling ───────────────────────────────────────────────────────────

    /// Fills the interior of `path` with `c`, anti-aliased at the boundary.
    pub fn fill_path(&mut self, path: &ClosedPath, c: Color) {
        let bbox = path.bounding_box();
        self.for_each_pixel_in(bbox.inset(-1.0), |surface, x, y, cx, cy| {
            let sd = path.signed_distance(Vec2::new(cx, cy));
            let cov = coverage(0.5 - sd);
            if cov > 0 && surface.clip_allows(cx, cy) {
                surface.pixmap.blend_pixel(x, y, c, cov);
            }
        });
    }

    /// Fills `rect` with `c` using hard half-open edges (no edge AA).
    ///
    /// Control rects are integer-aligned in practice; a hard edge keeps
    /// solid backgrounds bit-exact all the way to the boundary.
    pub fn fill_rect(&mut self, rect: Rect, c: Color) {
        self.for_each_pixel_in(rect, |surface, x, y, cx, cy| {
            if rect.contains(Vec2::new(cx, cy)) && surface.clip_allows(cx, cy) {
                surface.pixmap.blend_pixel(x, y, c, 255);
            }
        });
    }

    // ── stroking ──────────────────────────────────────────────────────────

    /// Strokes `path` with a pen of `width`, centered on the boundary.
    ///
    /// Coverage falls off over the half-pixel AA band on both pen edges,
    /// so the stroke never reaches further than `width / 2` plus the AA
    /// band outside the path's bounding box. `width <= 0` draws nothing.
    pub fn stroke_path(&mut self, path: &ClosedPath, width: f32, c: Color) {
        if width <= 0.0 {
            return;
        }
        let half = width * 0.5;
        let reach = half + 1.0;
        let bbox = path.bounding_box().inset(-reach);
        self.for_each_pixel_in(bbox, |surface, x, y, cx, cy| {
            let sd = path.signed_distance(Vec2::new(cx, cy)).abs();
            let cov = coverage(0.5 + half - sd);
            if cov > 0 && surface.clip_allows(cx, cy) {
                surface.pixmap.blend_pixel(x, y, c, cov);
            }
        });
    }

    // ── blitting ──────────────────────────────────────────────────────────

    /// Source-over blits `src` at its natural size with its top-left
    /// corner at `origin` (rounded to the pixel grid).
    pub fn blit(&mut self, src: &Pixmap, origin: Vec2) {
        let ox = origin.x.round() as i32;
        let oy = origin.y.round() as i32;
        for sy in 0..src.height() as i32 {
            for sx in 0..src.width() as i32 {
                let (x, y) = (ox + sx, oy + sy);
                if !self.clip_allows(x as f32 + 0.5, y as f32 + 0.5) {
                    continue;
                }
                if let Some(c) = src.pixel(sx, sy) {
                    self.pixmap.blend_pixel(x, y, c, 255);
                }
            }
        }
    }

    /// Blits `src` scaled to exactly fill `dst` (nearest neighbor; aspect
    /// ratio is not preserved).
    pub fn blit_scaled(&mut self, src: &Pixmap, dst: Rect) {
        let dst = dst.normalized();
        if src.is_empty() || dst.is_empty() {
            return;
        }
        let (sw, sh) = (src.width() as f32, src.height() as f32);
        self.for_each_pixel_in(dst, |surface, x, y, cx, cy| {
            if !dst.contains(Vec2::new(cx, cy)) || !surface.clip_allows(cx, cy) {
                return;
            }
            let u = (cx - dst.x) / dst.w;
            let v = (cy - dst.y) / dst.h;
            let sx = ((u * sw) as i32).clamp(0, src.width() as i32 - 1);
            let sy = ((v * sh) as i32).clamp(0, src.height() as i32 - 1);
            if let Some(c) = src.pixel(sx, sy) {
                surface.pixmap.blend_pixel(x, y, c, 255);
            }
        });
    }

    // ── text ──────────────────────────────────────────────────────────────

    /// Draws `text` with its top-left at `origin`, wrapped at `max_width`
    /// when given.
    ///
    /// Glyphs are laid out and rasterized through fontdue each call and
    /// blended by coverage; an unknown `font` logs and draws nothing.
    pub fn draw_text(
        &mut self,
        fonts: &FontSystem,
        text: &str,
        font: FontId,
        size: f32,
        color: Color,
        origin: Vec2,
        max_width: Option<f32>,
    ) {
        let Some(face) = fonts.get(font) else {
            log::warn!("Surface::draw_text: unknown FontId {font:?}, skipping");
            return;
        };

        let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings {
            x: origin.x,
            y: origin.y,
            max_width,
            ..LayoutSettings::default()
        });
        layout.append(&[face], &TextStyle::new(text, size, 0));

        let glyphs: Vec<_> = layout
            .glyphs()
            .iter()
            .filter(|g| g.char_data.rasterize() && g.width > 0 && g.height > 0)
            .map(|g| (g.key, g.x, g.y))
            .collect();

        for (key, gx, gy) in glyphs {
            let (metrics, bitmap) = face.rasterize_config(key);
            let ox = gx.round() as i32;
            let oy = gy.round() as i32;
            for row in 0..metrics.height {
                for col in 0..metrics.width {
                    let cov = bitmap[row * metrics.width + col];
                    if cov == 0 {
                        continue;
                    }
                    let (x, y) = (ox + col as i32, oy + row as i32);
                    if self.clip_allows(x as f32 + 0.5, y as f32 + 0.5) {
                        self.pixmap.blend_pixel(x, y, color, cov);
                    }
                }
            }
        }
    }

    // ── internal ──────────────────────────────────────────────────────────

    /// Visits every surface pixel whose center can fall inside `area`,
    /// passing integer coordinates and the pixel-center position.
    fn for_each_pixel_in(&mut self, area: Rect, mut f: impl FnMut(&mut Self, i32, i32, f32, f32)) {
        let area = match area.normalized().intersect(self.bounds()) {
            Some(a) => a,
            None => return,
        };
        let x0 = area.x.floor() as i32;
        let y0 = area.y.floor() as i32;
        let x1 = area.right().ceil() as i32;
        let y1 = area.bottom().ceil() as i32;
        for y in y0..y1 {
            for x in x0..x1 {
                f(self, x, y, x as f32 + 0.5, y as f32 + 0.5);
            }
        }
    }
}

/// Maps an unclamped coverage value to `[0, 255]`.
#[inline]
fn coverage(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}
