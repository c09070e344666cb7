//! Renderer errors and style mapping shared by the raster backends.

use inkpad_core::CompositeMode;
use thiserror::Error;

/// Largest accepted surface edge, in pixels.
pub const MAX_DIMENSION: u32 = 32767;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Invalid surface dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] png::EncodingError),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// tiny-skia blend mode for a composite mode.
pub fn blend_mode(mode: CompositeMode) -> tiny_skia::BlendMode {
    match mode {
        CompositeMode::SourceOver => tiny_skia::BlendMode::SourceOver,
        CompositeMode::DestinationOut => tiny_skia::BlendMode::DestinationOut,
    }
}

pub(crate) fn check_dimensions(width: u32, height: u32) -> RenderResult<()> {
    if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(RendererError::InvalidDimensions { width, height });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_modes() {
        assert_eq!(blend_mode(CompositeMode::SourceOver), tiny_skia::BlendMode::SourceOver);
        assert_eq!(
            blend_mode(CompositeMode::DestinationOut),
            tiny_skia::BlendMode::DestinationOut
        );
    }

    #[test]
    fn test_dimension_limits() {
        assert!(check_dimensions(1, 1).is_ok());
        assert!(check_dimensions(0, 10).is_err());
        assert!(check_dimensions(MAX_DIMENSION + 1, 10).is_err());
    }
}
