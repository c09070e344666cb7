//! Raster surface abstraction.

use crate::style::StyleSnapshot;
use kurbo::{BezPath, PathEl, Point};

/// Trait for drawing backends.
///
/// Paths handed to a surface are already in device space. Implementations
/// draw each call immediately on top of the current raster, honoring the
/// style's composite mode.
pub trait Surface {
    /// Clear the whole raster to transparent.
    fn clear(&mut self);

    /// Stroke `path` with `style`.
    fn stroke_path(&mut self, path: &BezPath, style: &StyleSnapshot);

    /// Current size in device pixels.
    fn size(&self) -> (u32, u32);

    /// Reallocate the raster. Contents are lost. Returns false if the size is unusable.
    fn resize(&mut self, width: u32, height: u32) -> bool;
}

/// One recorded stroke call.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand {
    pub points: Vec<Point>,
    pub style: StyleSnapshot,
}

/// Surface that records stroke calls instead of rasterizing.
///
/// The command list holds everything drawn since the last clear, so two
/// recordings with equal command lists would produce equal rasters.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    commands: Vec<DrawCommand>,
    clears: usize,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
            clears: 0,
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of times the surface was cleared.
    pub fn clear_count(&self) -> usize {
        self.clears
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.commands.clear();
        self.clears += 1;
    }

    fn stroke_path(&mut self, path: &BezPath, style: &StyleSnapshot) {
        let points = path
            .elements()
            .iter()
            .filter_map(|el| match *el {
                PathEl::MoveTo(p) | PathEl::LineTo(p) => Some(p),
                _ => None,
            })
            .collect();
        self.commands.push(DrawCommand {
            points,
            style: *style,
        });
    }

    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn resize(&mut self, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 {
            return false;
        }
        self.width = width;
        self.height = height;
        self.commands.clear();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_points() {
        let mut surface = RecordingSurface::new(10, 10);
        let mut path = BezPath::new();
        path.move_to((1.0, 2.0));
        path.line_to((3.0, 4.0));
        surface.stroke_path(&path, &StyleSnapshot::default());

        assert_eq!(surface.commands().len(), 1);
        assert_eq!(
            surface.commands()[0].points,
            vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)]
        );
    }

    #[test]
    fn test_clear_drops_commands() {
        let mut surface = RecordingSurface::new(10, 10);
        surface.stroke_path(&BezPath::new(), &StyleSnapshot::default());
        surface.clear();
        assert!(surface.commands().is_empty());
        assert_eq!(surface.clear_count(), 1);
    }

    #[test]
    fn test_resize_rejects_zero() {
        let mut surface = RecordingSurface::new(10, 10);
        assert!(!surface.resize(0, 5));
        assert_eq!(surface.size(), (10, 10));
        assert!(surface.resize(20, 5));
        assert_eq!(surface.size(), (20, 5));
    }
}
