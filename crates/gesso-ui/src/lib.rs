//! Gesso UI: control styling on top of `gesso-engine`.
//!
//! This crate turns a control's abstract visual state (enabled, interaction
//! state, configured colors, border, image, text) into pixels on a surface.
//! The host control owns all of that state and hands a snapshot to
//! [`ControlPainter::paint`] once per repaint; nothing here persists
//! between calls.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use gesso_ui::prelude::*;
//!
//! let mut surface = Surface::new(120, 32)?;
//! let fonts = FontSystem::new();
//!
//! let request = PaintRequest::new(Rect::from_size(120.0, 32.0))
//!     .background_colors(ColorStateTable::new(steel, gray, steel_light, steel_dark))
//!     .border(BorderSpec::rounded(1.0, border_colors, 4.0))
//!     .state(InteractionState::Hover);
//!
//! ControlPainter::paint(&mut surface, &fonts, &request)?;
//! ```

pub mod background;
pub mod border;
pub mod image_load;
pub mod layout;
pub mod painter;
pub mod state;
pub mod style;

// Top-level re-exports for the common entry point.
pub use painter::{ControlPainter, PaintRequest};
pub use state::{ColorStateTable, InteractionState};

/// Everything a host control needs to drive the painter.
pub mod prelude {
    pub use crate::background::Fill;
    pub use crate::layout::{ContentLayout, LayoutRelation};
    pub use crate::painter::{ControlPainter, PaintRequest};
    pub use crate::state::{ColorStateTable, InteractionState};
    pub use crate::style::{
        Align, Alignment, Background, BorderShape, BorderSpec, CornerFlags, ImageLayout,
    };

    // Re-export the engine primitives everyone needs.
    pub use gesso_engine::coords::{CornerRadii, Rect, Vec2};
    pub use gesso_engine::paint::{Color, ColorField};
    pub use gesso_engine::path::ClosedPath;
    pub use gesso_engine::raster::{Pixmap, PixmapError, Surface};
    pub use gesso_engine::text::{FontId, FontSystem};
}
