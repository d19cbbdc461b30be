use std::io;
use std::path::PathBuf;

/// Errors raised while loading or rendering an image
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("input path does not exist: {}", .0.display())]
    MissingInput(PathBuf),

    #[error("failed to decode image '{}': {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("invalid render parameter: {0}")]
    InvalidParameter(String),
}

/// Errors raised while persisting an artifact or revealing the output folder
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("failed to create output directory '{}': {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to open '{}' in the file browser: {source}", .path.display())]
    Reveal {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Errors raised while loading settings
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid setting: {0}")]
    Invalid(String),
}
