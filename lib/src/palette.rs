//! ASCII character palette
//!
//! A single ramp of 11 glyphs ordered from the densest (`@`) to the sparsest (`.`).
//! Dark pixels map to the start of the ramp, light pixels to the end.

/// Glyphs ordered by visual density, dense to sparse
pub const PALETTE: [char; 11] = [
    '@', // 0: darkest
    '#', // 1
    '$', // 2
    '%', // 3
    '?', // 4
    '*', // 5
    '+', // 6
    ';', // 7
    ':', // 8
    ',', // 9
    '.', // 10: lightest
];

/// Map a luminance value to its palette index
///
/// Floors `luminance * 11 / 256`, which splits [0, 255] into 11 nearly even bands.
///
/// # Arguments
/// * `luminance` - Grayscale value [0, 255]
///
/// # Returns
/// An index in `0..PALETTE.len()`
pub fn palette_index(luminance: u8) -> usize {
    let index = luminance as usize * PALETTE.len() / 256;
    index.min(PALETTE.len() - 1)
}

/// Get the glyph for a luminance value
pub fn glyph_for(luminance: u8) -> char {
    PALETTE[palette_index(luminance)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_has_eleven_entries() {
        assert_eq!(PALETTE.len(), 11);
    }

    #[test]
    fn test_glyph_for_darkest() {
        assert_eq!(glyph_for(0), '@');
    }

    #[test]
    fn test_glyph_for_lightest() {
        assert_eq!(glyph_for(255), '.');
    }

    #[test]
    fn test_palette_index_matches_floor_formula() {
        for p in 0..=255u8 {
            let expected = (p as usize * 11) / 256;
            assert_eq!(palette_index(p), expected, "luminance {p}");
            assert!(palette_index(p) <= 10);
        }
    }

    #[test]
    fn test_palette_index_is_monotonic() {
        let mut previous = palette_index(0);
        for p in 1..=255u8 {
            let current = palette_index(p);
            assert!(current >= previous, "index dropped at luminance {p}");
            previous = current;
        }
    }

    #[test]
    fn test_band_boundaries() {
        // 23 * 11 = 253 < 256, 24 * 11 = 264 >= 256
        assert_eq!(glyph_for(23), '@');
        assert_eq!(glyph_for(24), '#');
        assert_eq!(glyph_for(128), '*');
    }
}
