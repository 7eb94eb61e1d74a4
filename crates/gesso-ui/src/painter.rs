//! Per-repaint orchestration.
//!
//! One call to [`ControlPainter::paint`] runs the whole repaint of a
//! control from a state snapshot. The sequence is fixed (background under
//! content under border): the border is drawn last to cover any
//! anti-aliasing bleed where the filled interior meets the edge.

use gesso_engine::coords::Rect;
use gesso_engine::raster::{Pixmap, PixmapError, Surface};
use gesso_engine::text::{FontId, FontSystem};

use crate::background::{Fill, composite};
use crate::border::{border_path, draw_border};
use crate::layout::{LayoutRelation, draw_content};
use crate::state::{ColorStateTable, InteractionState};
use crate::style::{Alignment, Background, BorderSpec};

/// Snapshot of everything one repaint needs.
///
/// Ephemeral: constructed by the host per paint event from the control's
/// current properties and input state, consumed by
/// [`ControlPainter::paint`], then dropped. Painting the same request onto
/// the same starting surface twice produces pixel-identical output.
#[derive(Debug, Clone)]
pub struct PaintRequest {
    /// Client rectangle of the control on the target surface.
    pub rect: Rect,
    pub enabled: bool,
    pub state: InteractionState,

    pub background: Background,
    /// Colors for [`Background::Solid`], resolved against
    /// `enabled`/`state` at paint time.
    pub background_colors: ColorStateTable,

    pub border: BorderSpec,

    pub text: String,
    pub font: Option<FontId>,
    pub font_size: f32,
    pub text_colors: ColorStateTable,

    pub image: Option<Pixmap>,
    pub relation: LayoutRelation,
    pub align: Alignment,
}

impl PaintRequest {
    /// A transparent, borderless, empty request covering `rect`.
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            enabled: true,
            state: InteractionState::Normal,
            background: Background::Solid,
            background_colors: ColorStateTable::default(),
            border: BorderSpec::none(),
            text: String::new(),
            font: None,
            font_size: 12.0,
            text_colors: ColorStateTable::default(),
            image: None,
            relation: LayoutRelation::default(),
            align: Alignment::CENTER,
        }
    }

    pub fn enabled(mut self, v: bool) -> Self {
        self.enabled = v;
        self
    }

    pub fn state(mut self, v: InteractionState) -> Self {
        self.state = v;
        self
    }

    pub fn background(mut self, v: Background) -> Self {
        self.background = v;
        self
    }

    pub fn background_colors(mut self, v: ColorStateTable) -> Self {
        self.background_colors = v;
        self
    }

    pub fn border(mut self, v: BorderSpec) -> Self {
        self.border = v;
        self
    }

    pub fn text(mut self, text: impl Into<String>, font: FontId, size: f32) -> Self {
        self.text = text.into();
        self.font = Some(font);
        self.font_size = size;
        self
    }

    pub fn text_colors(mut self, v: ColorStateTable) -> Self {
        self.text_colors = v;
        self
    }

    pub fn image(mut self, v: Pixmap) -> Self {
        self.image = Some(v);
        self
    }

    pub fn relation(mut self, v: LayoutRelation) -> Self {
        self.relation = v;
        self
    }

    pub fn align(mut self, v: Alignment) -> Self {
        self.align = v;
        self
    }
}

/// Stateless repaint orchestrator.
pub struct ControlPainter;

impl ControlPainter {
    /// Paints one control repaint from `request` onto `surface`.
    ///
    /// Steps, in fixed order:
    /// 1. build the border path over the stroke rect (client rect shrunk
    ///    by one unit per axis, so strokes stay inside the control), with
    ///    rounding clamped
    /// 2. clip to the path and composite the background, resolving the
    ///    solid color through the state table
    /// 3. reset the clip, lay out and draw text/image
    /// 4. stroke the border last, over the filled interior and content
    ///
    /// Missing content (no image, empty text) is a valid "nothing to draw"
    /// input. Invalid geometry is clamped along the way; the only error
    /// that can cross this boundary is a gradient-bitmap allocation
    /// failure, which has no safe fallback.
    pub fn paint(
        surface: &mut Surface,
        fonts: &FontSystem,
        request: &PaintRequest,
    ) -> Result<(), PixmapError> {
        let rect = request.rect.normalized();
        if rect.is_empty() {
            // Collapsed to nothing by the host or by clamping; a valid
            // "nothing to paint" input.
            return Ok(());
        }

        // Stroke rect convention: width−1, height−1 keeps a 1 px pen on
        // the boundary inside the client rect.
        let stroke_rect = Rect::new(rect.x, rect.y, (rect.w - 1.0).max(0.0), (rect.h - 1.0).max(0.0));
        let path = border_path(stroke_rect, &request.border);

        let fill = match &request.background {
            Background::Solid => {
                Fill::Solid(request.background_colors.resolve(request.enabled, request.state))
            }
            Background::Gradient(field) => Fill::Gradient(*field),
            Background::Image(pixmap, layout) => Fill::Image(pixmap, *layout),
        };
        composite(surface, &path, rect, fill)?;

        draw_content(
            surface,
            fonts,
            rect,
            &request.text,
            request.font,
            request.font_size,
            request.text_colors.resolve(request.enabled, request.state),
            request.image.as_ref(),
            request.relation,
            request.align,
        );

        draw_border(surface, &request.border, request.enabled, request.state, &path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use gesso_engine::paint::{Color, ColorField};

    use crate::style::ImageLayout;

    use super::*;

    const ENABLED: Color = Color::rgb(50, 100, 150);
    const DISABLED: Color = Color::rgb(80, 80, 80);
    const HOVER: Color = Color::rgb(70, 120, 170);
    const PRESSED: Color = Color::rgb(30, 80, 130);
    const BORDER: Color = Color::rgb(200, 40, 40);

    fn background_table() -> ColorStateTable {
        ColorStateTable::new(ENABLED, DISABLED, HOVER, PRESSED)
    }

    fn request(rect: Rect) -> PaintRequest {
        PaintRequest::new(rect).background_colors(background_table())
    }

    // ── solid background round trip ───────────────────────────────────────

    #[test]
    fn solid_background_matches_resolved_color_per_state() {
        let fonts = FontSystem::new();
        let cases = [
            (true, InteractionState::Normal, ENABLED),
            (true, InteractionState::Hover, HOVER),
            (true, InteractionState::Pressed, PRESSED),
            (false, InteractionState::Hover, DISABLED),
        ];
        for (enabled, state, expected) in cases {
            let mut surface = Surface::new(20, 20).unwrap();
            let req = request(Rect::from_size(20.0, 20.0)).enabled(enabled).state(state);
            ControlPainter::paint(&mut surface, &fonts, &req).unwrap();
            assert_eq!(surface.pixel(10, 10), Some(expected), "state {state:?}");
        }
    }

    // ── paint order ───────────────────────────────────────────────────────

    #[test]
    fn border_is_drawn_over_the_background() {
        let fonts = FontSystem::new();
        let mut surface = Surface::new(20, 20).unwrap();
        let req = request(Rect::from_size(20.0, 20.0))
            .border(BorderSpec::rectangle(2.0, ColorStateTable::uniform(BORDER)));
        ControlPainter::paint(&mut surface, &fonts, &req).unwrap();
        // Stroke rect is 19×19; its top edge midpoint carries border color.
        assert_eq!(surface.pixel(10, 0), Some(BORDER));
        assert_eq!(surface.pixel(10, 10), Some(ENABLED));
    }

    #[test]
    fn disabled_control_still_gets_a_border() {
        let fonts = FontSystem::new();
        let mut surface = Surface::new(20, 20).unwrap();
        let border_colors = ColorStateTable::uniform(BORDER).disabled(Color::rgb(90, 90, 90));
        let req = request(Rect::from_size(20.0, 20.0))
            .enabled(false)
            .border(BorderSpec::rectangle(2.0, border_colors));
        ControlPainter::paint(&mut surface, &fonts, &req).unwrap();
        assert_eq!(surface.pixel(10, 0), Some(Color::rgb(90, 90, 90)));
    }

    // ── clip interaction ──────────────────────────────────────────────────

    #[test]
    fn rounded_border_clips_background_corners() {
        let fonts = FontSystem::new();
        let mut surface = Surface::new(21, 21).unwrap();
        let req = request(Rect::from_size(21.0, 21.0))
            .border(BorderSpec::rounded(0.0, ColorStateTable::default(), 8.0));
        ControlPainter::paint(&mut surface, &fonts, &req).unwrap();
        assert_eq!(surface.pixel(10, 10), Some(ENABLED));
        // The sharp corner outside the rounded clip stays untouched.
        assert_eq!(surface.pixel(0, 0), Some(Color::TRANSPARENT));
    }

    // ── gradient + image backgrounds ──────────────────────────────────────

    #[test]
    fn gradient_background_rasterizes_under_the_clip() {
        let fonts = FontSystem::new();
        let mut surface = Surface::new(16, 16).unwrap();
        let field = ColorField::uniform(ENABLED);
        let req = request(Rect::from_size(16.0, 16.0)).background(Background::Gradient(field));
        ControlPainter::paint(&mut surface, &fonts, &req).unwrap();
        assert_eq!(surface.pixel(8, 8), Some(ENABLED));
    }

    #[test]
    fn image_background_stretch_fills_the_control() {
        let fonts = FontSystem::new();
        let mut tile = Pixmap::new(2, 2).unwrap();
        tile.fill(BORDER);
        let mut surface = Surface::new(16, 16).unwrap();
        let req = request(Rect::from_size(16.0, 16.0))
            .background(Background::Image(tile, ImageLayout::Stretch));
        ControlPainter::paint(&mut surface, &fonts, &req).unwrap();
        assert_eq!(surface.pixel(1, 1), Some(BORDER));
        assert_eq!(surface.pixel(14, 14), Some(BORDER));
    }

    // ── content ───────────────────────────────────────────────────────────

    #[test]
    fn standalone_image_content_is_centered() {
        let fonts = FontSystem::new();
        let mut glyph = Pixmap::new(4, 4).unwrap();
        glyph.fill(BORDER);
        let mut surface = Surface::new(20, 20).unwrap();
        let req = request(Rect::from_size(20.0, 20.0)).image(glyph);
        ControlPainter::paint(&mut surface, &fonts, &req).unwrap();
        // 4×4 image centered in 20×20 occupies (8,8)..(12,12).
        assert_eq!(surface.pixel(8, 8), Some(BORDER));
        assert_eq!(surface.pixel(11, 11), Some(BORDER));
        assert_eq!(surface.pixel(7, 7), Some(ENABLED));
    }

    // ── idempotence ───────────────────────────────────────────────────────

    #[test]
    fn repainting_the_same_request_is_pixel_identical() {
        let fonts = FontSystem::new();
        let req = request(Rect::from_size(12.0, 12.0))
            .state(InteractionState::Hover)
            .border(BorderSpec::rounded(1.0, ColorStateTable::uniform(BORDER), 3.0));

        let mut a = Surface::new(12, 12).unwrap();
        ControlPainter::paint(&mut a, &fonts, &req).unwrap();
        let mut b = Surface::new(12, 12).unwrap();
        ControlPainter::paint(&mut b, &fonts, &req).unwrap();
        assert_eq!(a.pixmap().data(), b.pixmap().data());
    }

    // ── degenerate geometry ───────────────────────────────────────────────

    #[test]
    fn zero_sized_rect_paints_nothing_and_does_not_fail() {
        let fonts = FontSystem::new();
        let mut surface = Surface::new(10, 10).unwrap();
        let req = request(Rect::from_size(0.0, 0.0))
            .border(BorderSpec::rounded(2.0, ColorStateTable::uniform(BORDER), 4.0));
        ControlPainter::paint(&mut surface, &fonts, &req).unwrap();
        assert_eq!(surface.pixel(0, 0), Some(Color::TRANSPARENT));
    }
}
