//! Border geometry construction and state-resolved stroking.

use gesso_engine::coords::{CornerRadii, Rect};
use gesso_engine::path::ClosedPath;
use gesso_engine::raster::Surface;

use crate::state::InteractionState;
use crate::style::{BorderShape, BorderSpec};

/// Builds the closed border path for `rect` under `spec`.
///
/// `rect` is the stroke rectangle the caller has already prepared (the
/// painter pre-shrinks the client rect by one unit per side so the stroke
/// stays within the control's bounds). Rounding is expanded through the
/// per-corner flags and clamped to half the shorter side; a rounded shape
/// with zero radius degenerates to the plain rectangle path.
pub fn border_path(rect: Rect, spec: &BorderSpec) -> ClosedPath {
    match spec.shape {
        BorderShape::Rectangle => ClosedPath::rectangle(rect),
        BorderShape::Rounded { radius } => ClosedPath::rounded(rect, spec.corners.radii(radius)),
    }
}

/// Strokes `path` with the spec's pen, colored for the current state.
///
/// Disabled controls still render a border, from the disabled slot of the
/// spec's color table. Zero thickness draws nothing. Neither `spec` nor
/// `path` is mutated; the only side effect is on `surface`.
pub fn draw_border(
    surface: &mut Surface,
    spec: &BorderSpec,
    enabled: bool,
    state: InteractionState,
    path: &ClosedPath,
) {
    if spec.thickness <= 0.0 {
        return;
    }
    let color = spec.colors.resolve(enabled, state);
    surface.stroke_path(path, spec.thickness, color);
}
