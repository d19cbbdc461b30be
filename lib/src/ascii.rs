use crate::grid::GridSize;
use crate::palette::glyph_for;
use image::GrayImage;
use rayon::prelude::*;
use std::fmt;

/// A rendered block of ASCII art
///
/// `grid.height` lines of exactly `grid.width` characters, joined by `\n`
/// with no trailing newline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsciiArtifact {
    text: String,
    grid: GridSize,
}

impl AsciiArtifact {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn grid(&self) -> GridSize {
        self.grid
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.lines()
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

impl fmt::Display for AsciiArtifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Map every pixel of a luminance image to a palette glyph
///
/// Rows are mapped in parallel and joined in order, one line per row.
///
/// # Arguments
/// * `lum` - Luminance image already resampled to the grid size
///
/// # Returns
/// The laid-out artifact
pub fn luminance_to_ascii(lum: &GrayImage) -> AsciiArtifact {
    let (width, height) = lum.dimensions();

    let lines: Vec<String> = lum
        .as_raw()
        .par_chunks(width as usize)
        .map(|row| row.iter().map(|&p| glyph_for(p)).collect::<String>())
        .collect();

    AsciiArtifact {
        text: lines.join("\n"),
        grid: GridSize { width, height },
    }
}
