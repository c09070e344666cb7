//! Inkpad Render Library
//!
//! Raster surface implementations for Inkpad.
//! The default implementation rasterizes on the CPU with tiny-skia.

mod export;
mod pixmap_surface;
mod renderer;

pub use export::{encode_png, flatten_rgba8};
pub use pixmap_surface::PixmapSurface;
pub use renderer::{MAX_DIMENSION, RenderResult, RendererError, blend_mode};
