use image::{GrayImage, Luma, RgbaImage};

/// Calculate luminance from an RGBA image
///
/// Formula: L = (299*R + 587*G + 114*B) / 1000, rounded to nearest
/// These are the ITU-R 601-2 luma weights. Alpha is ignored.
///
/// # Arguments
/// * `img` - Input RGBA image
///
/// # Returns
/// Grayscale image with luminance values
pub fn calculate_luminance(img: &RgbaImage) -> GrayImage {
    let (width, height) = img.dimensions();
    let mut output = GrayImage::new(width, height);

    for (x, y, pixel) in img.enumerate_pixels() {
        output.put_pixel(x, y, Luma([luma_601(pixel[0], pixel[1], pixel[2])]));
    }

    output
}

/// Weighted luma of a single RGB triple
pub fn luma_601(r: u8, g: u8, b: u8) -> u8 {
    let weighted = 299 * r as u32 + 587 * g as u32 + 114 * b as u32;
    // Max is 255_000 + 500, so the result always fits in a u8
    ((weighted + 500) / 1000) as u8
}
