use crate::config::RenderParams;
use crate::error::RenderError;

/// Height in pixels of the output window's button bar
pub const TOOLBAR_HEIGHT: f32 = 30.0;

/// Pixel size of one glyph cell in the display font
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphMetrics {
    pub cell_width: f32,
    pub cell_height: f32,
}

impl GlyphMetrics {
    pub fn new(cell_width: f32, cell_height: f32) -> Self {
        Self {
            cell_width,
            cell_height,
        }
    }

    /// Width over height of one cell
    ///
    /// Glyphs are usually taller than wide, so this is below 1.0 and
    /// widens the grid to keep the output from looking stretched.
    pub fn aspect_correction(&self) -> Result<f64, RenderError> {
        let (w, h) = (self.cell_width, self.cell_height);
        if !w.is_finite() || !h.is_finite() || w <= 0.0 || h <= 0.0 {
            return Err(RenderError::InvalidParameter(format!(
                "glyph cell must have a positive size, got {w}x{h}"
            )));
        }
        Ok(w as f64 / h as f64)
    }
}

/// Character-grid dimensions of an artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSize {
    pub width: u32,
    pub height: u32,
}

impl GridSize {
    /// Compute the character grid for an image of the given pixel size
    ///
    /// height = max(1, round(base * font_size_scale * height_ratio))
    /// width  = max(1, round(height * image_aspect / aspect_correction))
    pub fn compute(
        image_width: u32,
        image_height: u32,
        metrics: &GlyphMetrics,
        params: &RenderParams,
    ) -> Result<Self, RenderError> {
        params.validate().map_err(RenderError::InvalidParameter)?;

        if image_width == 0 || image_height == 0 {
            return Err(RenderError::InvalidParameter(format!(
                "image must not be empty, got {image_width}x{image_height}"
            )));
        }

        let aspect_correction = metrics.aspect_correction()?;
        let height = (params.base_grid_height as f64 * params.font_size_scale * params.height_ratio)
            .round()
            .max(1.0);

        let image_aspect = image_width as f64 / image_height as f64;
        let width = (height * image_aspect / aspect_correction).round().max(1.0);

        let height = to_dimension("height", height)?;
        let width = to_dimension("width", width)?;

        log::debug!(
            "grid {width}x{height} for {image_width}x{image_height} image (aspect correction {aspect_correction:.3})"
        );
        Ok(Self { width, height })
    }

    /// Number of cells in the grid
    pub fn cells(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Pixel size of a window showing this grid above the toolbar
    pub fn window_size(&self, metrics: &GlyphMetrics) -> [f32; 2] {
        [
            self.width as f32 * metrics.cell_width,
            self.height as f32 * metrics.cell_height + TOOLBAR_HEIGHT,
        ]
    }
}

fn to_dimension(name: &str, value: f64) -> Result<u32, RenderError> {
    if !value.is_finite() || value < 1.0 || value > u32::MAX as f64 {
        return Err(RenderError::InvalidParameter(format!(
            "grid {name} out of range: {value}"
        )));
    }
    Ok(value as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics() -> GlyphMetrics {
        GlyphMetrics::new(7.0, 14.0)
    }

    #[test]
    fn test_default_scenario() {
        let grid = GridSize::compute(200, 100, &metrics(), &RenderParams::default()).unwrap();
        assert_eq!(grid, GridSize { width: 200, height: 50 });
    }

    #[test]
    fn test_small_ratio_scenario() {
        let params = RenderParams {
            height_ratio: 0.2,
            ..Default::default()
        };
        let grid = GridSize::compute(200, 100, &metrics(), &params).unwrap();
        assert_eq!(grid, GridSize { width: 40, height: 10 });
    }

    #[test]
    fn test_font_size_scale_shrinks_grid() {
        let params = RenderParams::from_font_size(50, 8, 16, 1.0);
        let grid = GridSize::compute(200, 100, &metrics(), &params).unwrap();
        assert_eq!(grid.height, 25);
        assert_eq!(grid.width, 100);
    }

    #[test]
    fn test_one_by_one_image() {
        let grid = GridSize::compute(1, 1, &metrics(), &RenderParams::default()).unwrap();
        assert_eq!(grid.height, 50);
        assert_eq!(grid.width, 100);
    }

    #[test]
    fn test_narrow_image_clamps_width() {
        let params = RenderParams {
            height_ratio: 0.2,
            ..Default::default()
        };
        let grid = GridSize::compute(1, 10_000, &metrics(), &params).unwrap();
        assert_eq!(grid.width, 1);
        assert_eq!(grid.height, 10);
    }

    #[test]
    fn test_tiny_scale_clamps_height() {
        let params = RenderParams {
            base_grid_height: 1,
            font_size_scale: 8.0 / 24.0,
            height_ratio: 0.2,
        };
        let grid = GridSize::compute(100, 100, &metrics(), &params).unwrap();
        assert_eq!(grid.height, 1);
        assert!(grid.width >= 1);
    }

    #[test]
    fn test_zero_sized_image_rejected() {
        let result = GridSize::compute(0, 100, &metrics(), &RenderParams::default());
        assert!(matches!(result, Err(RenderError::InvalidParameter(_))));
    }

    #[test]
    fn test_degenerate_metrics_rejected() {
        let result = GridSize::compute(
            10,
            10,
            &GlyphMetrics::new(0.0, 14.0),
            &RenderParams::default(),
        );
        assert!(matches!(result, Err(RenderError::InvalidParameter(_))));
    }

    #[test]
    fn test_window_size_includes_toolbar() {
        let grid = GridSize { width: 40, height: 10 };
        assert_eq!(grid.window_size(&metrics()), [280.0, 170.0]);
    }
}
