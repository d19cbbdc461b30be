use crate::error::ConfigError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Character-grid height at the default font size and a 1.0 ratio
pub const BASE_GRID_HEIGHT: u32 = 50;

/// Font size the base grid height is calibrated against
pub const DEFAULT_FONT_SIZE: u32 = 8;
pub const MIN_FONT_SIZE: u32 = 1;
pub const MAX_FONT_SIZE: u32 = 24;

pub const DEFAULT_HEIGHT_RATIO: f64 = 1.0;
pub const MIN_HEIGHT_RATIO: f64 = 0.2;
pub const MAX_HEIGHT_RATIO: f64 = 4.0;
pub const HEIGHT_RATIO_STEP: f64 = 0.2;

/// Name of the folder artifacts are saved into
pub const OUTPUT_DIR_NAME: &str = "asciiOutput";

/// Settings file looked up beside the executable
pub const SETTINGS_FILE_NAME: &str = "img2ascii.toml";

// Absorbs float noise from slider steps (e.g. 3 * 0.2)
const RATIO_EPSILON: f64 = 1e-9;

/// Parameters controlling the size of the character grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderParams {
    /// Reference grid height at the default font size
    pub base_grid_height: u32,
    /// `default_font_size / current_font_size`
    pub font_size_scale: f64,
    /// User multiplier in [0.2, 4.0]
    pub height_ratio: f64,
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            base_grid_height: BASE_GRID_HEIGHT,
            font_size_scale: 1.0,
            height_ratio: DEFAULT_HEIGHT_RATIO,
        }
    }
}

impl RenderParams {
    /// Build parameters from the active font size
    pub fn from_font_size(
        base_grid_height: u32,
        default_font_size: u32,
        font_size: u32,
        height_ratio: f64,
    ) -> Self {
        Self {
            base_grid_height,
            font_size_scale: default_font_size as f64 / font_size.max(1) as f64,
            height_ratio,
        }
    }

    /// Validates the parameters
    pub fn validate(&self) -> Result<(), String> {
        if self.base_grid_height == 0 {
            return Err("base_grid_height must be positive, got 0".to_string());
        }
        if !self.font_size_scale.is_finite() || self.font_size_scale <= 0.0 {
            return Err(format!(
                "font_size_scale must be positive, got {}",
                self.font_size_scale
            ));
        }
        if !self.height_ratio.is_finite()
            || self.height_ratio < MIN_HEIGHT_RATIO - RATIO_EPSILON
            || self.height_ratio > MAX_HEIGHT_RATIO + RATIO_EPSILON
        {
            return Err(format!(
                "height_ratio must be between {MIN_HEIGHT_RATIO} and {MAX_HEIGHT_RATIO}, got {}",
                self.height_ratio
            ));
        }
        Ok(())
    }
}

/// Clamp a font size into the selectable range
pub fn clamp_font_size(size: u32) -> u32 {
    size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE)
}

/// Snap a height ratio to the slider step and clamp it into range
pub fn snap_height_ratio(ratio: f64) -> f64 {
    if !ratio.is_finite() {
        return DEFAULT_HEIGHT_RATIO;
    }
    let snapped = (ratio / HEIGHT_RATIO_STEP).round() * HEIGHT_RATIO_STEP;
    snapped.clamp(MIN_HEIGHT_RATIO, MAX_HEIGHT_RATIO)
}

/// Settings loaded from `img2ascii.toml`
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Settings {
    #[serde(default)]
    pub render: RenderSettings,
    #[serde(default)]
    pub output: OutputSettings,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct RenderSettings {
    pub base_grid_height: u32,
    pub default_font_size: u32,
    /// Font size selected at startup
    pub font_size: u32,
    /// Height ratio selected at startup
    pub height_ratio: f64,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            base_grid_height: BASE_GRID_HEIGHT,
            default_font_size: DEFAULT_FONT_SIZE,
            font_size: DEFAULT_FONT_SIZE,
            height_ratio: DEFAULT_HEIGHT_RATIO,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputSettings {
    pub dir_name: String,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            dir_name: OUTPUT_DIR_NAME.to_string(),
        }
    }
}

impl Settings {
    /// Load settings from a file path, or from the default location when `None`.
    ///
    /// A missing file yields the defaults. A file that exists but cannot be
    /// read, parsed or validated is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if !path.exists() {
            log::debug!("no settings file at '{}', using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        let settings: Settings = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;
        settings.validate()?;

        log::info!("loaded settings from '{}'", path.display());
        Ok(settings)
    }

    /// Validates the setting ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        let render = &self.render;
        if render.base_grid_height == 0 {
            return Err(ConfigError::Invalid(
                "render.base_grid_height must be positive".to_string(),
            ));
        }
        for (name, size) in [
            ("render.default_font_size", render.default_font_size),
            ("render.font_size", render.font_size),
        ] {
            if !(MIN_FONT_SIZE..=MAX_FONT_SIZE).contains(&size) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be between {MIN_FONT_SIZE} and {MAX_FONT_SIZE}, got {size}"
                )));
            }
        }
        if !(MIN_HEIGHT_RATIO..=MAX_HEIGHT_RATIO).contains(&render.height_ratio) {
            return Err(ConfigError::Invalid(format!(
                "render.height_ratio must be between {MIN_HEIGHT_RATIO} and {MAX_HEIGHT_RATIO}, got {}",
                render.height_ratio
            )));
        }
        let dir_name = self.output.dir_name.trim();
        if dir_name.is_empty() || dir_name.contains(['/', '\\']) {
            return Err(ConfigError::Invalid(format!(
                "output.dir_name must be a plain folder name, got {:?}",
                self.output.dir_name
            )));
        }
        Ok(())
    }
}

/// Directory holding the running executable, or the current directory
pub fn executable_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Default settings file path
pub fn default_path() -> PathBuf {
    executable_dir().join(SETTINGS_FILE_NAME)
}
