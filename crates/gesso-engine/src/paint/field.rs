use super::Color;

/// Four independently configurable corner colors feeding gradient
/// rasterization.
///
/// Semantics:
/// - every corner starts unset; a control's host assigns corners through
///   the setters as its gradient properties change
/// - an incomplete field is not an error: consumers treat it as "gradient
///   disabled for this paint" and skip the fill.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct ColorField {
    pub top_left: Option<Color>,
    pub top_right: Option<Color>,
    pub bottom_left: Option<Color>,
    pub bottom_right: Option<Color>,
}

impl ColorField {
    /// All corners unset.
    #[inline]
    pub const fn unset() -> Self {
        Self { top_left: None, top_right: None, bottom_left: None, bottom_right: None }
    }

    /// All four corners assigned at once.
    #[inline]
    pub const fn from_corners(
        top_left: Color,
        top_right: Color,
        bottom_left: Color,
        bottom_right: Color,
    ) -> Self {
        Self {
            top_left: Some(top_left),
            top_right: Some(top_right),
            bottom_left: Some(bottom_left),
            bottom_right: Some(bottom_right),
        }
    }

    /// Uniform field (all corners the same color).
    #[inline]
    pub const fn uniform(c: Color) -> Self {
        Self::from_corners(c, c, c, c)
    }

    #[inline]
    pub fn is_complete(self) -> bool {
        self.top_left.is_some()
            && self.top_right.is_some()
            && self.bottom_left.is_some()
            && self.bottom_right.is_some()
    }

    /// Returns `[tl, tr, bl, br]` when every corner is set, `None` otherwise.
    #[inline]
    pub fn corners(self) -> Option<[Color; 4]> {
        Some([self.top_left?, self.top_right?, self.bottom_left?, self.bottom_right?])
    }
}
