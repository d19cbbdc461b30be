//! Persisting artifacts to the output folder
//!
//! Saved files land in a folder beside the executable (`asciiOutput` by default)
//! and are named after the local time they were written, at second resolution.

use crate::ascii::AsciiArtifact;
use crate::config::{OUTPUT_DIR_NAME, executable_dir};
use crate::error::SaveError;
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};
use std::process::Command;

/// File name for an artifact saved at `timestamp`
///
/// Format: `ascii_art_YYYYMMDD_HHMMSS.txt`
pub fn artifact_file_name(timestamp: DateTime<Local>) -> String {
    format!("ascii_art_{}.txt", timestamp.format("%Y%m%d_%H%M%S"))
}

/// Folder that saved artifacts are written into
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputDir {
    path: PathBuf,
}

impl Default for OutputDir {
    fn default() -> Self {
        Self::beside_executable(OUTPUT_DIR_NAME)
    }
}

impl OutputDir {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<directory of the running executable>/<dir_name>`
    pub fn beside_executable(dir_name: &str) -> Self {
        Self::new(executable_dir().join(dir_name))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the folder if it does not exist yet
    pub fn ensure(&self) -> Result<&Path, SaveError> {
        std::fs::create_dir_all(&self.path).map_err(|source| SaveError::CreateDir {
            path: self.path.clone(),
            source,
        })?;
        Ok(&self.path)
    }

    /// Write the artifact using the current local time for its name
    pub fn save(&self, artifact: &AsciiArtifact) -> Result<PathBuf, SaveError> {
        self.save_at(artifact, Local::now())
    }

    /// Write the artifact as UTF-8 text, named after `timestamp`
    ///
    /// A file with the same name is overwritten.
    pub fn save_at(
        &self,
        artifact: &AsciiArtifact,
        timestamp: DateTime<Local>,
    ) -> Result<PathBuf, SaveError> {
        self.ensure()?;

        let file_path = self.path.join(artifact_file_name(timestamp));
        std::fs::write(&file_path, artifact.text()).map_err(|source| SaveError::Write {
            path: file_path.clone(),
            source,
        })?;

        log::info!("saved ASCII art to '{}'", file_path.display());
        Ok(file_path)
    }

    /// Create the folder if needed and open it in the platform file browser
    pub fn reveal(&self) -> Result<(), SaveError> {
        let path = self.ensure()?;

        file_browser_command(path)
            .spawn()
            .map_err(|source| SaveError::Reveal {
                path: path.to_path_buf(),
                source,
            })?;

        log::debug!("opened '{}' in the file browser", path.display());
        Ok(())
    }
}

fn file_browser_command(path: &Path) -> Command {
    let program = if cfg!(target_os = "windows") {
        "explorer"
    } else if cfg!(target_os = "macos") {
        "open"
    } else {
        "xdg-open"
    };

    let mut command = Command::new(program);
    command.arg(path);
    command
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RenderParams;
    use crate::grid::GlyphMetrics;
    use crate::renderer::render;
    use chrono::TimeZone;
    use image::{DynamicImage, Rgb, RgbImage};

    fn artifact() -> AsciiArtifact {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(4, 4, Rgb([255, 255, 255])));
        let params = RenderParams {
            height_ratio: 0.2,
            ..Default::default()
        };
        render(&img, &GlyphMetrics::new(7.0, 14.0), &params).unwrap()
    }

    fn timestamp() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 9, 7, 5, 2).unwrap()
    }

    #[test]
    fn test_artifact_file_name_format() {
        assert_eq!(artifact_file_name(timestamp()), "ascii_art_20240309_070502.txt");
    }

    #[test]
    fn test_save_creates_directory_and_file() {
        let root = tempfile::tempdir().unwrap();
        let out = OutputDir::new(root.path().join("asciiOutput"));
        let art = artifact();

        let path = out.save_at(&art, timestamp()).unwrap();

        assert_eq!(path, root.path().join("asciiOutput/ascii_art_20240309_070502.txt"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), art.text());
    }

    #[test]
    fn test_save_into_existing_directory() {
        let root = tempfile::tempdir().unwrap();
        let out = OutputDir::new(root.path());

        let path = out.save(&artifact()).unwrap();
        assert!(path.exists());
        assert_eq!(path.parent(), Some(root.path()));
    }

    #[test]
    fn test_save_fails_when_directory_is_a_file() {
        let root = tempfile::tempdir().unwrap();
        let blocker = root.path().join("asciiOutput");
        std::fs::write(&blocker, "").unwrap();

        let result = OutputDir::new(&blocker).save_at(&artifact(), timestamp());
        assert!(matches!(result, Err(SaveError::CreateDir { .. })));
    }

    #[test]
    fn test_beside_executable_uses_dir_name() {
        let out = OutputDir::beside_executable("asciiOutput");
        assert!(out.path().ends_with("asciiOutput"));
    }
}
