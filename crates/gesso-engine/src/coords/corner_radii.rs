use super::Rect;

/// Per-corner radii for a rounded rectangle (logical pixels).
///
/// Corners follow CSS convention: top-left, top-right, bottom-right,
/// bottom-left. Negative values are treated as zero by consumers.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CornerRadii {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadii {
    #[inline]
    pub const fn new(top_left: f32, top_right: f32, bottom_right: f32, bottom_left: f32) -> Self {
        Self { top_left, top_right, bottom_right, bottom_left }
    }

    /// Uniform radius on all four corners.
    #[inline]
    pub const fn all(r: f32) -> Self {
        Self { top_left: r, top_right: r, bottom_right: r, bottom_left: r }
    }

    /// No rounding.
    #[inline]
    pub const fn zero() -> Self {
        Self::all(0.0)
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.top_left <= 0.0
            && self.top_right <= 0.0
            && self.bottom_right <= 0.0
            && self.bottom_left <= 0.0
    }

    /// Clamps every radius into `[0, min(w, h) / 2]` for `rect`.
    ///
    /// An oversized radius would make adjacent arcs overlap and the
    /// boundary self-intersect; clamping keeps the path well formed.
    /// Idempotent: clamping an already-clamped value is a no-op.
    #[must_use]
    pub fn clamped_for(self, rect: Rect) -> Self {
        let r = rect.normalized();
        let limit = (r.w.min(r.h) * 0.5).max(0.0);
        Self {
            top_left: self.top_left.clamp(0.0, limit),
            top_right: self.top_right.clamp(0.0, limit),
            bottom_right: self.bottom_right.clamp(0.0, limit),
            bottom_left: self.bottom_left.clamp(0.0, limit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── clamped_for ───────────────────────────────────────────────────────

    #[test]
    fn clamp_is_identity_when_in_range() {
        let radii = CornerRadii::all(3.0);
        assert_eq!(radii.clamped_for(Rect::from_size(20.0, 20.0)), radii);
    }

    #[test]
    fn clamp_limits_to_half_shorter_side() {
        let clamped = CornerRadii::all(50.0).clamped_for(Rect::from_size(20.0, 12.0));
        assert_eq!(clamped, CornerRadii::all(6.0));
    }

    #[test]
    fn clamp_is_idempotent() {
        let rect = Rect::from_size(15.0, 9.0);
        let once = CornerRadii::all(100.0).clamped_for(rect);
        assert_eq!(once.clamped_for(rect), once);
    }

    #[test]
    fn clamp_zeroes_negative_radii() {
        let clamped = CornerRadii::new(-4.0, 2.0, -1.0, 0.0)
            .clamped_for(Rect::from_size(10.0, 10.0));
        assert_eq!(clamped, CornerRadii::new(0.0, 2.0, 0.0, 0.0));
    }
}
