//! Text/image relation layout.
//!
//! Computes where a control's image and text label sit relative to each
//! other inside the content rectangle, then issues the draw calls. All
//! arithmetic is on sizes the caller supplies (or that `draw_content`
//! measures), so the placement rules are testable without a font.

use gesso_engine::coords::{Rect, Vec2};
use gesso_engine::paint::Color;
use gesso_engine::raster::{Pixmap, Surface};
use gesso_engine::text::{FontId, FontSystem};

use crate::style::Alignment;

/// Spatial arrangement rule between a text label and an accompanying
/// image.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum LayoutRelation {
    /// Both elements aligned independently over the same area.
    #[default]
    Overlay,
    /// Side by side, image first; the pair is aligned as a unit.
    ImageBeforeText,
    /// Side by side, text first.
    TextBeforeImage,
    /// Stacked, image on top.
    ImageAboveText,
    /// Stacked, text on top.
    TextAboveImage,
}

/// Computed placement for both content elements.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ContentLayout {
    pub image_origin: Vec2,
    pub text_origin: Vec2,
}

/// Aligns an element of `size` inside `container`.
fn place(container: Rect, size: Vec2, align: Alignment) -> Vec2 {
    Vec2::new(
        container.x + align.h.offset(container.w, size.x),
        container.y + align.v.offset(container.h, size.y),
    )
}

#[inline]
fn absent(size: Vec2) -> bool {
    size.x <= 0.0 || size.y <= 0.0
}

/// Computes the top-left placement of image and text within `container`.
///
/// Overlay aligns each element independently (centered alignment puts both
/// on the same center point). The before/after and above/below relations
/// treat the two elements as one unit with no gap between them: the pair's
/// bounding box is aligned in the container, order decides which element
/// comes first along the main axis, and each element is aligned within the
/// pair on the cross axis.
///
/// A zero-sized element degenerates the relation to single-element
/// alignment of the other; the absent element is still reported at its
/// own aligned position, which callers skip drawing anyway.
pub fn content_layout(
    container: Rect,
    relation: LayoutRelation,
    image_size: Vec2,
    text_size: Vec2,
    align: Alignment,
) -> ContentLayout {
    let independent = ContentLayout {
        image_origin: place(container, image_size, align),
        text_origin: place(container, text_size, align),
    };

    if absent(image_size) || absent(text_size) {
        return independent;
    }

    match relation {
        LayoutRelation::Overlay => independent,
        LayoutRelation::ImageBeforeText | LayoutRelation::TextBeforeImage => {
            let pair = Vec2::new(image_size.x + text_size.x, image_size.y.max(text_size.y));
            let origin = place(container, pair, align);
            let cross = |h: f32| origin.y + align.v.offset(pair.y, h);
            let (first, second) = match relation {
                LayoutRelation::ImageBeforeText => (image_size, text_size),
                _ => (text_size, image_size),
            };
            let first_origin = Vec2::new(origin.x, cross(first.y));
            let second_origin = Vec2::new(origin.x + first.x, cross(second.y));
            if relation == LayoutRelation::ImageBeforeText {
                ContentLayout { image_origin: first_origin, text_origin: second_origin }
            } else {
                ContentLayout { image_origin: second_origin, text_origin: first_origin }
            }
        }
        LayoutRelation::ImageAboveText | LayoutRelation::TextAboveImage => {
            let pair = Vec2::new(image_size.x.max(text_size.x), image_size.y + text_size.y);
            let origin = place(container, pair, align);
            let cross = |w: f32| origin.x + align.h.offset(pair.x, w);
            let (first, second) = match relation {
                LayoutRelation::ImageAboveText => (image_size, text_size),
                _ => (text_size, image_size),
            };
            let first_origin = Vec2::new(cross(first.x), origin.y);
            let second_origin = Vec2::new(cross(second.x), origin.y + first.y);
            if relation == LayoutRelation::ImageAboveText {
                ContentLayout { image_origin: first_origin, text_origin: second_origin }
            } else {
                ContentLayout { image_origin: second_origin, text_origin: first_origin }
            }
        }
    }
}

/// Lays out and draws both content elements in one pass.
///
/// Empty text or a missing image is a valid "nothing to draw" input, not
/// an error; the remaining element falls back to single-element alignment.
/// The image is drawn before the text so a label overlays its image under
/// [`LayoutRelation::Overlay`].
pub fn draw_content(
    surface: &mut Surface,
    fonts: &FontSystem,
    container: Rect,
    text: &str,
    font: Option<FontId>,
    font_size: f32,
    text_color: Color,
    image: Option<&Pixmap>,
    relation: LayoutRelation,
    align: Alignment,
) {
    let text_size = match font {
        Some(id) if !text.is_empty() => fonts.measure_text(text, id, font_size, None),
        _ => Vec2::zero(),
    };
    let image_size = image
        .map(|pm| Vec2::new(pm.width() as f32, pm.height() as f32))
        .unwrap_or(Vec2::zero());

    let layout = content_layout(container, relation, image_size, text_size, align);

    if let Some(pm) = image {
        if !pm.is_empty() {
            surface.blit(pm, layout.image_origin);
        }
    }
    if let Some(id) = font {
        if !text.is_empty() {
            surface.draw_text(fonts, text, id, font_size, text_color, layout.text_origin, None);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::style::{Align, Alignment};

    use super::*;

    const CONTAINER: Rect = Rect::new(0.0, 0.0, 100.0, 50.0);

    // ── overlay ───────────────────────────────────────────────────────────

    #[test]
    fn overlay_centers_both_on_the_same_point() {
        let l = content_layout(
            CONTAINER,
            LayoutRelation::Overlay,
            Vec2::new(20.0, 20.0),
            Vec2::new(40.0, 10.0),
            Alignment::CENTER,
        );
        let image_center = l.image_origin + Vec2::new(10.0, 10.0);
        let text_center = l.text_origin + Vec2::new(20.0, 5.0);
        assert_eq!(image_center, text_center);
        assert_eq!(image_center, Vec2::new(50.0, 25.0));
    }

    // ── horizontal pair ───────────────────────────────────────────────────

    #[test]
    fn image_before_text_centers_the_pair() {
        // Pair is 60 wide: image x = (100-60)/2 = 20, text x = 40; both
        // vertically centered within height 50.
        let l = content_layout(
            CONTAINER,
            LayoutRelation::ImageBeforeText,
            Vec2::new(20.0, 20.0),
            Vec2::new(40.0, 10.0),
            Alignment::CENTER,
        );
        assert_eq!(l.image_origin, Vec2::new(20.0, 15.0));
        assert_eq!(l.text_origin, Vec2::new(40.0, 20.0));
    }

    #[test]
    fn text_before_image_swaps_order_only() {
        let l = content_layout(
            CONTAINER,
            LayoutRelation::TextBeforeImage,
            Vec2::new(20.0, 20.0),
            Vec2::new(40.0, 10.0),
            Alignment::CENTER,
        );
        assert_eq!(l.text_origin, Vec2::new(20.0, 20.0));
        assert_eq!(l.image_origin, Vec2::new(60.0, 15.0));
    }

    // ── vertical pair ─────────────────────────────────────────────────────

    #[test]
    fn image_above_text_stacks_centered() {
        let l = content_layout(
            CONTAINER,
            LayoutRelation::ImageAboveText,
            Vec2::new(20.0, 20.0),
            Vec2::new(40.0, 10.0),
            Alignment::CENTER,
        );
        // Stack is 30 tall: image y = (50-30)/2 = 10, text y = 30.
        assert_eq!(l.image_origin, Vec2::new(40.0, 10.0));
        assert_eq!(l.text_origin, Vec2::new(30.0, 30.0));
    }

    #[test]
    fn text_above_image_swaps_order_only() {
        let l = content_layout(
            CONTAINER,
            LayoutRelation::TextAboveImage,
            Vec2::new(20.0, 20.0),
            Vec2::new(40.0, 10.0),
            Alignment::CENTER,
        );
        assert_eq!(l.text_origin, Vec2::new(30.0, 10.0));
        assert_eq!(l.image_origin, Vec2::new(40.0, 20.0));
    }

    // ── degenerate inputs ─────────────────────────────────────────────────

    #[test]
    fn missing_image_degenerates_to_text_centering() {
        let l = content_layout(
            CONTAINER,
            LayoutRelation::ImageBeforeText,
            Vec2::zero(),
            Vec2::new(40.0, 10.0),
            Alignment::CENTER,
        );
        assert_eq!(l.text_origin, Vec2::new(30.0, 20.0));
    }

    #[test]
    fn empty_text_degenerates_to_image_centering() {
        let l = content_layout(
            CONTAINER,
            LayoutRelation::ImageAboveText,
            Vec2::new(20.0, 20.0),
            Vec2::zero(),
            Alignment::CENTER,
        );
        assert_eq!(l.image_origin, Vec2::new(40.0, 15.0));
    }

    // ── non-centered alignment ────────────────────────────────────────────

    #[test]
    fn near_alignment_packs_pair_to_top_left() {
        let l = content_layout(
            CONTAINER,
            LayoutRelation::ImageBeforeText,
            Vec2::new(20.0, 20.0),
            Vec2::new(40.0, 10.0),
            Alignment::new(Align::Near, Align::Near),
        );
        assert_eq!(l.image_origin, Vec2::new(0.0, 0.0));
        assert_eq!(l.text_origin, Vec2::new(20.0, 0.0));
    }

    #[test]
    fn far_alignment_packs_pair_to_bottom_right() {
        let l = content_layout(
            CONTAINER,
            LayoutRelation::ImageBeforeText,
            Vec2::new(20.0, 20.0),
            Vec2::new(40.0, 10.0),
            Alignment::new(Align::Far, Align::Far),
        );
        assert_eq!(l.image_origin, Vec2::new(40.0, 30.0));
        assert_eq!(l.text_origin, Vec2::new(60.0, 40.0));
    }
}
