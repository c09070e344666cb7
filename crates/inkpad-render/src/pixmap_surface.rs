//! CPU raster surface backed by a tiny-skia pixmap.

use crate::renderer::{RenderResult, RendererError, blend_mode, check_dimensions};
use inkpad_core::{StyleSnapshot, Surface};
use kurbo::{BezPath, PathEl};
use log::warn;
use tiny_skia::{Color, LineCap, LineJoin, Paint, PathBuilder, Pixmap, Stroke, Transform};

/// Anti-aliased RGBA raster. Starts fully transparent.
#[derive(Debug, Clone)]
pub struct PixmapSurface {
    pixmap: Pixmap,
}

impl PixmapSurface {
    /// Allocate a transparent surface.
    pub fn new(width: u32, height: u32) -> RenderResult<Self> {
        check_dimensions(width, height)?;
        let pixmap = Pixmap::new(width, height).ok_or(RendererError::InvalidDimensions { width, height })?;
        Ok(Self { pixmap })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Premultiplied RGBA bytes, row-major.
    pub fn data(&self) -> &[u8] {
        self.pixmap.data()
    }

    /// Alpha of the pixel at (x, y), or `None` outside the surface.
    pub fn alpha_at(&self, x: u32, y: u32) -> Option<u8> {
        self.pixmap.pixel(x, y).map(|p| p.alpha())
    }
}

impl Surface for PixmapSurface {
    fn clear(&mut self) {
        self.pixmap.fill(Color::TRANSPARENT);
    }

    fn stroke_path(&mut self, path: &BezPath, style: &StyleSnapshot) {
        // Fewer than two points yields no path and draws nothing.
        let Some(path) = to_skia_path(path) else {
            return;
        };

        let color = style.stroke_color;
        let mut paint = Paint::default();
        paint.set_color_rgba8(color.r, color.g, color.b, color.a);
        paint.anti_alias = true;
        paint.blend_mode = blend_mode(style.composite_mode);

        let stroke = Stroke {
            width: style.line_width as f32,
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            ..Stroke::default()
        };

        self.pixmap
            .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }

    fn size(&self) -> (u32, u32) {
        (self.pixmap.width(), self.pixmap.height())
    }

    fn resize(&mut self, width: u32, height: u32) -> bool {
        match PixmapSurface::new(width, height) {
            Ok(surface) => {
                *self = surface;
                true
            }
            Err(e) => {
                warn!("Failed to resize surface: {}", e);
                false
            }
        }
    }
}

fn to_skia_path(path: &BezPath) -> Option<tiny_skia::Path> {
    let mut builder = PathBuilder::new();
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => builder.move_to(p.x as f32, p.y as f32),
            PathEl::LineTo(p) => builder.line_to(p.x as f32, p.y as f32),
            PathEl::QuadTo(p1, p2) => {
                builder.quad_to(p1.x as f32, p1.y as f32, p2.x as f32, p2.y as f32)
            }
            PathEl::CurveTo(p1, p2, p3) => builder.cubic_to(
                p1.x as f32,
                p1.y as f32,
                p2.x as f32,
                p2.y as f32,
                p3.x as f32,
                p3.y as f32,
            ),
            PathEl::ClosePath => builder.close(),
        }
    }
    builder.finish()
}
