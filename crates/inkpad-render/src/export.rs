//! PNG export of a raster surface.

use crate::pixmap_surface::PixmapSurface;
use crate::renderer::RenderResult;
use inkpad_core::InkColor;
use peniko::Color;

/// Straight-alpha RGBA8 bytes of the surface.
///
/// With a background, pixels are composited over it and the result is opaque
/// wherever the background is.
pub fn flatten_rgba8(surface: &PixmapSurface, background: Option<Color>) -> Vec<u8> {
    let background = background.map(InkColor::from);
    let mut out = Vec::with_capacity(surface.data().len());

    for pixel in surface.pixmap().pixels() {
        match background {
            Some(bg) => {
                // Premultiplied source over a straight-alpha background.
                let inv = 255 - u16::from(pixel.alpha());
                let over = |src: u8, dst: u8| -> u8 {
                    (u16::from(src) + (u16::from(dst) * inv + 127) / 255) as u8
                };
                let bg_alpha = (u16::from(bg.a) * inv + 127) / 255;
                out.extend_from_slice(&[
                    over(pixel.red(), scale(bg.r, bg.a)),
                    over(pixel.green(), scale(bg.g, bg.a)),
                    over(pixel.blue(), scale(bg.b, bg.a)),
                    (u16::from(pixel.alpha()) + bg_alpha) as u8,
                ]);
            }
            None => {
                let color = pixel.demultiply();
                out.extend_from_slice(&[color.red(), color.green(), color.blue(), color.alpha()]);
            }
        }
    }

    if background.is_some_and(|bg| bg.a < 255) {
        demultiply_in_place(&mut out);
    }
    out
}

/// Encode the surface as an RGBA8 PNG.
pub fn encode_png(surface: &PixmapSurface, background: Option<Color>) -> RenderResult<Vec<u8>> {
    let rgba = flatten_rgba8(surface, background);
    let mut png_data = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut png_data, surface.width(), surface.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&rgba)?;
    }
    Ok(png_data)
}

fn scale(channel: u8, alpha: u8) -> u8 {
    ((u16::from(channel) * u16::from(alpha) + 127) / 255) as u8
}

fn demultiply_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}
