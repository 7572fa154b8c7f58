//! Open-Graph preview banner and application icon
//!
//! Both images are drawn procedurally: a diagonal indigo gradient with a round
//! play mark. The PNG-encoded banner is rendered at most once per process and
//! shared from then on.

use crate::utils::error::TeraPeekError;
use image::{DynamicImage, ImageOutputFormat, Rgba, RgbaImage};
use once_cell::sync::OnceCell;
use std::io::Cursor;
use std::path::Path;
use tracing::{debug, info};

pub const OG_WIDTH: u32 = 1200;
pub const OG_HEIGHT: u32 = 630;

const GRADIENT_START: [f32; 3] = [79.0, 70.0, 229.0]; // Indigo 600
const GRADIENT_END: [f32; 3] = [129.0, 140.0, 248.0]; // Indigo 400
const MARK_COLOR: [u8; 3] = [255, 255, 255];

static OG_IMAGE: OnceCell<Vec<u8>> = OnceCell::new();

/// Draw the brand gradient with the play mark centred
pub fn render_banner(width: u32, height: u32) -> RgbaImage {
    let cx = width as f32 / 2.0;
    let cy = height as f32 / 2.0;
    let radius = width.min(height) as f32 * 0.3;
    let span = (width + height).max(1) as f32;

    RgbaImage::from_fn(width, height, |x, y| {
        let px = x as f32 + 0.5;
        let py = y as f32 + 0.5;
        let dx = px - cx;
        let dy = py - cy;

        if dx * dx + dy * dy <= radius * radius && !in_play_triangle(dx, dy, radius) {
            let [r, g, b] = MARK_COLOR;
            return Rgba([r, g, b, 255]);
        }

        let t = (x + y) as f32 / span;
        let channel = |i: usize| {
            (GRADIENT_START[i] + (GRADIENT_END[i] - GRADIENT_START[i]) * t).round() as u8
        };
        Rgba([channel(0), channel(1), channel(2), 255])
    })
}

/// Square icon variant of the banner
pub fn render_icon(size: u32) -> RgbaImage {
    render_banner(size, size)
}

/// Triangle pointing right, cut out of the mark disk
fn in_play_triangle(dx: f32, dy: f32, radius: f32) -> bool {
    let left = -radius * 0.3;
    let right = radius * 0.45;
    if dx < left || dx > right {
        return false;
    }
    let half_height = radius * 0.45 * (right - dx) / (right - left);
    dy.abs() <= half_height
}

fn encode_png(image: RgbaImage) -> Result<Vec<u8>, TeraPeekError> {
    let mut buf = Vec::new();
    DynamicImage::ImageRgba8(image).write_to(&mut Cursor::new(&mut buf), ImageOutputFormat::Png)?;
    Ok(buf)
}

/// PNG bytes of the 1200x630 preview banner
pub fn og_image_png() -> Result<&'static [u8], TeraPeekError> {
    OG_IMAGE
        .get_or_try_init(|| {
            debug!("Rendering preview banner");
            encode_png(render_banner(OG_WIDTH, OG_HEIGHT))
        })
        .map(Vec::as_slice)
}

/// Write the preview banner to `path`
pub fn write_og_image(path: &Path) -> Result<(), TeraPeekError> {
    let png = og_image_png()?;
    std::fs::write(path, png)?;
    info!("Wrote preview banner to {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_dimensions() {
        let banner = render_banner(OG_WIDTH, OG_HEIGHT);
        assert_eq!(banner.dimensions(), (OG_WIDTH, OG_HEIGHT));
    }

    #[test]
    fn test_banner_corners_are_gradient_and_centre_ring_is_white() {
        let banner = render_banner(OG_WIDTH, OG_HEIGHT);
        assert_eq!(banner.get_pixel(0, 0).0, [79, 70, 229, 255]);

        // Just inside the disk edge, outside the triangle
        let ring_x = OG_WIDTH / 2;
        let ring_y = OG_HEIGHT / 2 - (OG_HEIGHT as f32 * 0.3) as u32 + 5;
        assert_eq!(banner.get_pixel(ring_x, ring_y).0, [255, 255, 255, 255]);

        // Centre of the disk lies inside the play triangle
        let centre = banner.get_pixel(OG_WIDTH / 2, OG_HEIGHT / 2);
        assert_ne!(centre.0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_og_image_is_png_and_cached() {
        let first = og_image_png().expect("render");
        assert_eq!(&first[0..4], b"\x89PNG");

        let second = og_image_png().expect("render");
        assert!(std::ptr::eq(first, second), "banner should be rendered once");
    }

    #[test]
    fn test_og_image_decodes_to_expected_size() {
        let png = og_image_png().expect("render");
        let decoded = image::load_from_memory(png).expect("decode");
        assert_eq!((decoded.width(), decoded.height()), (OG_WIDTH, OG_HEIGHT));
    }

    #[test]
    fn test_write_og_image() {
        let temp = tempfile::TempDir::new().expect("temp dir");
        let path = temp.path().join("og.png");
        write_og_image(&path).expect("write");
        assert_eq!(std::fs::read(&path).unwrap(), og_image_png().unwrap());
    }

    #[test]
    fn test_icon_is_square() {
        assert_eq!(render_icon(256).dimensions(), (256, 256));
    }
}
