//! img2ascii - image to ASCII art converter
//!
//! Resamples an image to a character grid sized for the display font and maps
//! each cell's luminance onto an 11-glyph ramp from `@` (dark) to `.` (light).
//!
//! # Example
//! ```no_run
//! use img2ascii::{GlyphMetrics, RenderParams, render};
//!
//! let image = img2ascii::load_image("photo.jpg".as_ref()).unwrap();
//! let metrics = GlyphMetrics::new(7.0, 14.0);
//! let art = render(&image, &metrics, &RenderParams::default()).unwrap();
//! println!("{art}");
//! ```

pub mod ascii;
pub mod config;
pub mod error;
pub mod filters;
pub mod grid;
pub mod output;
pub mod palette;
pub mod renderer;
pub mod session;

// Re-export main types for convenience
pub use ascii::AsciiArtifact;
pub use config::{RenderParams, Settings};
pub use error::{ConfigError, RenderError, SaveError};
pub use grid::{GlyphMetrics, GridSize};
pub use output::OutputDir;
pub use palette::PALETTE;
pub use renderer::{load_image, render, render_path};
pub use session::{RenderSession, RenderTicket, parse_drop_payload};
