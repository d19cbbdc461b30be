/// Basic example: Convert a synthetic test image to ASCII art
///
/// Draws a bright disc with a dark rim on a gray background and prints the
/// result at a few height ratios.
use img2ascii::{GlyphMetrics, RenderParams, render};
use image::{DynamicImage, Rgb, RgbImage};

fn main() {
    println!("img2ascii - Basic Example");
    println!("=========================\n");

    let width = 160;
    let height = 120;
    let center_x = width as f32 / 2.0;
    let center_y = height as f32 / 2.0;
    let radius = 45.0;

    let img = RgbImage::from_fn(width, height, |x, y| {
        let dx = x as f32 - center_x;
        let dy = y as f32 - center_y;
        let dist = (dx * dx + dy * dy).sqrt();

        if dist < radius {
            Rgb([255, 255, 255])
        } else if (dist - radius).abs() < 5.0 {
            Rgb([0, 0, 0])
        } else {
            Rgb([100, 100, 100])
        }
    });
    let img = DynamicImage::ImageRgb8(img);

    println!("Created test image: {}x{}\n", width, height);

    // Typical monospace cell at 8pt
    let metrics = GlyphMetrics::new(7.0, 14.0);

    for ratio in [0.2, 0.4] {
        let params = RenderParams {
            height_ratio: ratio,
            ..Default::default()
        };

        match render(&img, &metrics, &params) {
            Ok(art) => {
                let grid = art.grid();
                println!("Height ratio {ratio}: {}x{} characters", grid.width, grid.height);
                println!("{art}\n");
            }
            Err(e) => eprintln!("Render failed: {e}"),
        }
    }
}
