//! Paint model shared between the styling layer and the raster surface.
//!
//! Scope:
//! - color representation (straight-alpha RGBA8)
//! - the four-corner color field feeding gradient rasterization
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod field;

pub use color::Color;
pub use field::ColorField;
