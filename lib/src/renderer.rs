use crate::ascii::{AsciiArtifact, luminance_to_ascii};
use crate::config::RenderParams;
use crate::error::RenderError;
use crate::filters::calculate_luminance;
use crate::grid::{GlyphMetrics, GridSize};
use image::{DynamicImage, GenericImageView, imageops::FilterType};
use std::path::Path;

/// Decode an image file
///
/// The path must exist; anything `image` cannot decode is a `Decode` error.
pub fn load_image(path: &Path) -> Result<DynamicImage, RenderError> {
    if !path.exists() {
        return Err(RenderError::MissingInput(path.to_path_buf()));
    }

    image::open(path).map_err(|source| RenderError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Converts an image to ASCII art
///
/// Pipeline:
/// 1. Compute the character grid from the glyph aspect and render parameters
/// 2. Resample the image to exactly one pixel per grid cell (nearest neighbour)
/// 3. Reduce each pixel to luminance
/// 4. Map luminance to palette glyphs, row-major
///
/// # Arguments
/// * `image` - Decoded input image, any colour type
/// * `metrics` - Glyph cell size of the display font
/// * `params` - Grid height controls
///
/// # Returns
/// An artifact with `grid.height` lines of `grid.width` characters
pub fn render(
    image: &DynamicImage,
    metrics: &GlyphMetrics,
    params: &RenderParams,
) -> Result<AsciiArtifact, RenderError> {
    let (width, height) = image.dimensions();
    let grid = GridSize::compute(width, height, metrics, params)?;

    let resampled = image
        .resize_exact(grid.width, grid.height, FilterType::Nearest)
        .to_rgba8();
    let lum = calculate_luminance(&resampled);

    Ok(luminance_to_ascii(&lum))
}

/// Decode and render an image file in one step
pub fn render_path(
    path: &Path,
    metrics: &GlyphMetrics,
    params: &RenderParams,
) -> Result<AsciiArtifact, RenderError> {
    let image = load_image(path)?;
    render(&image, metrics, params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, Rgba, RgbaImage};

    fn metrics() -> GlyphMetrics {
        GlyphMetrics::new(7.0, 14.0)
    }

    fn gradient(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
            let v = ((x + y) % 256) as u8;
            Rgb([v, v, v])
        }))
    }

    fn assert_shape(art: &AsciiArtifact, width: usize, height: usize) {
        let lines: Vec<&str> = art.lines().collect();
        assert_eq!(lines.len(), height);
        assert!(lines.iter().all(|line| line.chars().count() == width));
    }

    #[test]
    fn test_render_default_scenario() {
        let art = render(&gradient(200, 100), &metrics(), &RenderParams::default()).unwrap();
        assert_eq!(art.grid(), GridSize { width: 200, height: 50 });
        assert_shape(&art, 200, 50);
    }

    #[test]
    fn test_render_small_ratio_scenario() {
        let params = RenderParams {
            height_ratio: 0.2,
            ..Default::default()
        };
        let art = render(&gradient(200, 100), &metrics(), &params).unwrap();
        assert_shape(&art, 40, 10);
    }

    #[test]
    fn test_render_one_by_one() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(1, 1, Rgb([90, 90, 90])));
        let art = render(&img, &metrics(), &RenderParams::default()).unwrap();
        let grid = art.grid();
        assert!(grid.width >= 1 && grid.height >= 1);
        assert_shape(&art, grid.width as usize, grid.height as usize);
    }

    #[test]
    fn test_render_black_and_white() {
        let params = RenderParams {
            height_ratio: 0.4,
            ..Default::default()
        };

        let black = DynamicImage::ImageRgb8(RgbImage::from_pixel(30, 20, Rgb([0, 0, 0])));
        let art = render(&black, &metrics(), &params).unwrap();
        assert!(art.lines().all(|line| line.chars().all(|c| c == '@')));

        let white = DynamicImage::ImageRgba8(RgbaImage::from_pixel(30, 20, Rgba([255; 4])));
        let art = render(&white, &metrics(), &params).unwrap();
        assert!(art.lines().all(|line| line.chars().all(|c| c == '.')));
    }

    #[test]
    fn test_render_is_deterministic() {
        let img = gradient(123, 77);
        let params = RenderParams::from_font_size(50, 8, 11, 1.4);
        let first = render(&img, &metrics(), &params).unwrap();
        let second = render(&img, &metrics(), &params).unwrap();
        assert_eq!(first.text().as_bytes(), second.text().as_bytes());
    }

    #[test]
    fn test_darker_side_uses_denser_glyphs() {
        // Left half black, right half white
        let img = DynamicImage::ImageLuma8(image::GrayImage::from_fn(40, 20, |x, _| {
            image::Luma([if x < 20 { 0 } else { 255 }])
        }));
        let params = RenderParams {
            height_ratio: 0.2,
            ..Default::default()
        };
        let art = render(&img, &metrics(), &params).unwrap();
        for line in art.lines() {
            assert!(line.starts_with('@'));
            assert!(line.ends_with('.'));
        }
    }

    #[test]
    fn test_render_rejects_invalid_params() {
        let params = RenderParams {
            height_ratio: 10.0,
            ..Default::default()
        };
        let result = render(&gradient(10, 10), &metrics(), &params);
        assert!(matches!(result, Err(RenderError::InvalidParameter(_))));
    }

    #[test]
    fn test_load_missing_path() {
        let result = load_image(Path::new("/definitely/not/here.png"));
        assert!(matches!(result, Err(RenderError::MissingInput(_))));
    }

    #[test]
    fn test_load_undecodable_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"not an image").unwrap();

        let result = load_image(&path);
        assert!(matches!(result, Err(RenderError::Decode { .. })));
    }

    #[test]
    fn test_render_path_round_trips_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("black.png");
        RgbImage::from_pixel(8, 8, Rgb([0, 0, 0])).save(&path).unwrap();

        let params = RenderParams {
            height_ratio: 0.2,
            ..Default::default()
        };
        let art = render_path(&path, &metrics(), &params).unwrap();
        assert_eq!(art.grid(), GridSize { width: 20, height: 10 });
        assert!(art.text().chars().all(|c| c == '@' || c == '\n'));
    }
}
