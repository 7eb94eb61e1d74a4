//! Styling value objects.
//!
//! These are immutable-by-convention snapshots the host passes into each
//! paint call. The host mutates its own copies in response to property
//! changes and triggers a repaint; the painter holds nothing between
//! frames.

use gesso_engine::coords::CornerRadii;
use gesso_engine::paint::ColorField;
use gesso_engine::raster::Pixmap;

use crate::state::ColorStateTable;

/// Outline shape of a control's border.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum BorderShape {
    Rectangle,
    /// Rounded corners with a uniform radius; radii exceeding half the
    /// shorter control side are clamped at path-build time.
    Rounded { radius: f32 },
}

/// Per-corner rounding opt-out for [`BorderShape::Rounded`].
///
/// A cleared flag leaves that corner sharp. All corners rounded by
/// default.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CornerFlags {
    pub top_left: bool,
    pub top_right: bool,
    pub bottom_right: bool,
    pub bottom_left: bool,
}

impl Default for CornerFlags {
    fn default() -> Self {
        Self::ALL
    }
}

impl CornerFlags {
    pub const ALL: CornerFlags =
        CornerFlags { top_left: true, top_right: true, bottom_right: true, bottom_left: true };

    /// Expands the flags into per-corner radii: `radius` where the flag is
    /// set, zero where it is cleared.
    #[inline]
    pub fn radii(self, radius: f32) -> CornerRadii {
        let r = |on: bool| if on { radius } else { 0.0 };
        CornerRadii::new(
            r(self.top_left),
            r(self.top_right),
            r(self.bottom_right),
            r(self.bottom_left),
        )
    }
}

/// Configuration of a control's outline.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BorderSpec {
    /// Pen width; zero or negative draws no border.
    pub thickness: f32,
    /// Stroke color per visual state. Disabled controls still render a
    /// border, using the disabled slot.
    pub colors: ColorStateTable,
    pub shape: BorderShape,
    pub corners: CornerFlags,
}

impl BorderSpec {
    /// Sharp-cornered border.
    pub fn rectangle(thickness: f32, colors: ColorStateTable) -> Self {
        Self { thickness, colors, shape: BorderShape::Rectangle, corners: CornerFlags::ALL }
    }

    /// Uniformly rounded border.
    pub fn rounded(thickness: f32, colors: ColorStateTable, radius: f32) -> Self {
        Self {
            thickness,
            colors,
            shape: BorderShape::Rounded { radius },
            corners: CornerFlags::ALL,
        }
    }

    /// No visible border (zero thickness, transparent colors).
    pub fn none() -> Self {
        Self::rectangle(0.0, ColorStateTable::default())
    }

    pub fn corners(mut self, corners: CornerFlags) -> Self {
        self.corners = corners;
        self
    }
}

/// How an image is laid into its destination rect.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum ImageLayout {
    /// Natural size at the rect origin.
    #[default]
    None,
    /// Natural size, centered in the rect.
    Center,
    /// Scaled to exactly fill the rect; aspect ratio is not preserved.
    Stretch,
}

/// Background mode of a paint request.
///
/// `Solid` takes its color from the request's background state table at
/// paint time; the other modes carry their pixel sources with them.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Background {
    #[default]
    Solid,
    Gradient(ColorField),
    Image(Pixmap, ImageLayout),
}

/// Position of an element along one axis of its container.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum Align {
    Near,
    #[default]
    Center,
    Far,
}

impl Align {
    /// Offset of an element of `size` within an extent of `within`.
    #[inline]
    pub fn offset(self, within: f32, size: f32) -> f32 {
        match self {
            Align::Near => 0.0,
            Align::Center => (within - size) * 0.5,
            Align::Far => within - size,
        }
    }
}

/// Two-axis alignment; defaults to centered both ways.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Alignment {
    pub h: Align,
    pub v: Align,
}

impl Alignment {
    pub const CENTER: Alignment = Alignment { h: Align::Center, v: Align::Center };

    #[inline]
    pub const fn new(h: Align, v: Align) -> Self {
        Self { h, v }
    }
}
