//! Gesso engine crate.
//!
//! This crate owns the geometry, color, and software-raster pieces used by
//! the styling layer: coordinate types, closed border paths, the pixel
//! surface, the four-corner gradient rasterizer, and text metrics.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod path;
pub mod raster;
pub mod text;
