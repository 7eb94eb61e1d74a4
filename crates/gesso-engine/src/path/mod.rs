//! Closed boundary paths for control borders.
//!
//! A [`ClosedPath`] is the boundary of a rectangle or rounded rectangle:
//! straight edges joined by quarter-circle arcs, wound clockwise so the
//! path never self-intersects. The same path serves three consumers:
//! stroking (border), filling (background), and clipping (interior).
//!
//! Radii are clamped to half the shorter side at construction, so a path
//! is well formed by the time anything draws with it.

use crate::coords::{CornerRadii, Rect, Vec2};

/// One segment of a closed path.
///
/// Arc angles are in radians with 0 along +X and positive sweep turning
/// clockwise in screen space (+Y down).
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PathSeg {
    Line { from: Vec2, to: Vec2 },
    Arc { center: Vec2, radius: f32, start_angle: f32, sweep: f32 },
}

/// Closed boundary of a (possibly rounded) rectangle.
///
/// Construction normalizes the rectangle and clamps radii, so two paths
/// built from equivalent inputs compare equal; in particular, a rounded
/// path with radius zero equals the plain rectangle path.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ClosedPath {
    rect: Rect,
    radii: CornerRadii,
}

impl ClosedPath {
    /// Sharp-cornered rectangle boundary.
    pub fn rectangle(rect: Rect) -> Self {
        Self { rect: rect.normalized(), radii: CornerRadii::zero() }
    }

    /// Rounded rectangle boundary.
    ///
    /// Radii exceeding half the shorter side are clamped; negative radii
    /// are treated as zero. A fully zero radius degenerates to
    /// [`ClosedPath::rectangle`].
    pub fn rounded(rect: Rect, radii: CornerRadii) -> Self {
        let rect = rect.normalized();
        let radii = radii.clamped_for(rect);
        if radii.is_zero() {
            Self::rectangle(rect)
        } else {
            Self { rect, radii }
        }
    }

    /// Tight bounding box; always equals the construction rectangle.
    #[inline]
    pub fn bounding_box(&self) -> Rect {
        self.rect
    }

    #[inline]
    pub fn radii(&self) -> CornerRadii {
        self.radii
    }

    /// Signed distance from `p` to the boundary: negative inside,
    /// positive outside, zero on the path.
    ///
    /// Per-quadrant rounded-rectangle distance; the corner radius in
    /// effect is the one belonging to the quadrant `p` falls in.
    pub fn signed_distance(&self, p: Vec2) -> f32 {
        let c = self.rect.center();
        let half = Vec2::new(self.rect.w * 0.5, self.rect.h * 0.5);
        let d = p - c;

        let r = match (d.x >= 0.0, d.y >= 0.0) {
            (false, false) => self.radii.top_left,
            (true, false) => self.radii.top_right,
            (true, true) => self.radii.bottom_right,
            (false, true) => self.radii.bottom_left,
        };

        let qx = d.x.abs() - half.x + r;
        let qy = d.y.abs() - half.y + r;
        let outside = Vec2::new(qx.max(0.0), qy.max(0.0)).length();
        outside + qx.max(qy).min(0.0) - r
    }

    /// True when `p` lies inside or on the boundary.
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        self.signed_distance(p) <= 0.0
    }

    /// The explicit segment sequence, clockwise from the end of the
    /// top-left corner: top edge, TR arc, right edge, BR arc, bottom
    /// edge, BL arc, left edge, TL arc. Zero-radius corners emit no arc;
    /// zero-length edges (radii meeting in the middle) emit no line.
    pub fn segments(&self) -> Vec<PathSeg> {
        use std::f32::consts::FRAC_PI_2 as QUARTER;

        let Rect { x, y, w, h } = self.rect;
        let CornerRadii { top_left: tl, top_right: tr, bottom_right: br, bottom_left: bl } =
            self.radii;

        fn line(segs: &mut Vec<PathSeg>, from: Vec2, to: Vec2) {
            if (to - from).length() > 0.0 {
                segs.push(PathSeg::Line { from, to });
            }
        }

        let mut segs = Vec::with_capacity(8);

        line(&mut segs, Vec2::new(x + tl, y), Vec2::new(x + w - tr, y));
        if tr > 0.0 {
            segs.push(PathSeg::Arc {
                center: Vec2::new(x + w - tr, y + tr),
                radius: tr,
                start_angle: -QUARTER,
                sweep: QUARTER,
            });
        }
        line(&mut segs, Vec2::new(x + w, y + tr), Vec2::new(x + w, y + h - br));
        if br > 0.0 {
            segs.push(PathSeg::Arc {
                center: Vec2::new(x + w - br, y + h - br),
                radius: br,
                start_angle: 0.0,
                sweep: QUARTER,
            });
        }
        line(&mut segs, Vec2::new(x + w - br, y + h), Vec2::new(x + bl, y + h));
        if bl > 0.0 {
            segs.push(PathSeg::Arc {
                center: Vec2::new(x + bl, y + h - bl),
                radius: bl,
                start_angle: QUARTER,
                sweep: QUARTER,
            });
        }
        line(&mut segs, Vec2::new(x, y + h - bl), Vec2::new(x, y + tl));
        if tl > 0.0 {
            segs.push(PathSeg::Arc {
                center: Vec2::new(x + tl, y + tl),
                radius: tl,
                start_angle: 2.0 * QUARTER,
                sweep: QUARTER,
            });
        }
        segs
    }
}
