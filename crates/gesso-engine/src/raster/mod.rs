//! Software rasterization.
//!
//! Responsibilities:
//! - own the RGBA8 pixel buffer ([`Pixmap`])
//! - expose the drawing surface the styling layer paints through
//!   ([`Surface`]: path fill/stroke, clip set/reset, blits, text, readback)
//! - rasterize four-corner gradients ([`gradient`])
//!
//! Everything here is synchronous and single-threaded; a surface is owned
//! by one control repaint at a time.

pub mod gradient;

mod pixmap;
mod surface;

pub use pixmap::{Pixmap, PixmapError};
pub use surface::Surface;
