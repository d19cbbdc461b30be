use crate::ascii::AsciiArtifact;
use crate::config::{RenderParams, Settings, clamp_font_size, snap_height_ratio};
use crate::error::{RenderError, SaveError};
use crate::grid::GlyphMetrics;
use crate::output::OutputDir;
use crate::renderer::{load_image, render};
use image::DynamicImage;
use std::path::{Path, PathBuf};

/// Turn a drag-and-drop payload into a file path
///
/// Drop transports wrap paths containing spaces in braces, e.g. `{C:/My Pictures/cat.png}`.
pub fn parse_drop_payload(payload: &str) -> PathBuf {
    PathBuf::from(payload.trim().trim_matches(|c: char| c == '{' || c == '}'))
}

/// Ticket identifying one requested render
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RenderTicket(u64);

/// State owned by the presentation layer between renders
///
/// Holds the user's density controls, the decoded source image and the most
/// recently rendered artifact. Failed loads and renders leave the previous
/// source and artifact in place.
#[derive(Debug)]
pub struct RenderSession {
    settings: Settings,
    font_size: u32,
    height_ratio: f64,
    source: Option<(PathBuf, DynamicImage)>,
    artifact: Option<AsciiArtifact>,
    latest_ticket: u64,
}

impl Default for RenderSession {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl RenderSession {
    pub fn new(settings: Settings) -> Self {
        let font_size = clamp_font_size(settings.render.font_size);
        let height_ratio = snap_height_ratio(settings.render.height_ratio);
        Self {
            settings,
            font_size,
            height_ratio,
            source: None,
            artifact: None,
            latest_ticket: 0,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn font_size(&self) -> u32 {
        self.font_size
    }

    pub fn set_font_size(&mut self, size: u32) {
        self.font_size = clamp_font_size(size);
    }

    pub fn height_ratio(&self) -> f64 {
        self.height_ratio
    }

    pub fn set_height_ratio(&mut self, ratio: f64) {
        self.height_ratio = snap_height_ratio(ratio);
    }

    /// Parameters for the current controls
    pub fn render_params(&self) -> RenderParams {
        let render = &self.settings.render;
        RenderParams::from_font_size(
            render.base_grid_height,
            render.default_font_size,
            self.font_size,
            self.height_ratio,
        )
    }

    /// Path of the currently loaded image
    pub fn source_path(&self) -> Option<&Path> {
        self.source.as_ref().map(|(path, _)| path.as_path())
    }

    pub fn artifact(&self) -> Option<&AsciiArtifact> {
        self.artifact.as_ref()
    }

    /// Decode `path` and render it with the current controls
    ///
    /// On failure the previously loaded image and artifact are kept.
    pub fn load(
        &mut self,
        path: &Path,
        metrics: &GlyphMetrics,
    ) -> Result<&AsciiArtifact, RenderError> {
        let params = self.render_params();
        let result = load_image(path).and_then(|image| {
            let art = render(&image, metrics, &params)?;
            Ok((image, art))
        });

        let (image, art) = result.inspect_err(|err| log::warn!("render aborted: {err}"))?;
        log::info!(
            "rendered '{}' as {}x{} characters",
            path.display(),
            art.grid().width,
            art.grid().height
        );

        // Anything still in flight was requested before this load
        self.begin_render();
        self.source = Some((path.to_path_buf(), image));
        Ok(&*self.artifact.insert(art))
    }

    /// Render the held image again after a control change
    ///
    /// Returns `Ok(None)` when no image has been loaded yet.
    pub fn rerender(
        &mut self,
        metrics: &GlyphMetrics,
    ) -> Result<Option<&AsciiArtifact>, RenderError> {
        let Some((_, image)) = &self.source else {
            return Ok(None);
        };

        let result = render(image, metrics, &self.render_params());
        let ticket = self.begin_render();
        self.finish_render(ticket, result)?;
        Ok(self.artifact.as_ref())
    }

    /// Reserve a ticket for a render about to start
    ///
    /// Any ticket handed out earlier becomes stale.
    pub fn begin_render(&mut self) -> RenderTicket {
        self.latest_ticket += 1;
        RenderTicket(self.latest_ticket)
    }

    /// Apply a finished render if no newer one was requested since
    ///
    /// Results for stale tickets are dropped and leave the current artifact untouched.
    /// Returns `Ok(())` whether or not the result was applied.
    pub fn finish_render(
        &mut self,
        ticket: RenderTicket,
        result: Result<AsciiArtifact, RenderError>,
    ) -> Result<(), RenderError> {
        if ticket.0 != self.latest_ticket {
            log::debug!(
                "discarding render {} superseded by {}",
                ticket.0,
                self.latest_ticket
            );
            return Ok(());
        }

        match result {
            Ok(art) => {
                self.artifact = Some(art);
                Ok(())
            }
            Err(err) => {
                log::warn!("render aborted: {err}");
                Err(err)
            }
        }
    }

    /// Pixel size of the output window for the current artifact
    pub fn window_size(&self, metrics: &GlyphMetrics) -> Option<[f32; 2]> {
        self.artifact
            .as_ref()
            .map(|art| art.grid().window_size(metrics))
    }

    /// Save the current artifact into `dir`
    ///
    /// Does nothing and returns `Ok(None)` when nothing has been rendered.
    /// The artifact stays in memory whatever the outcome.
    pub fn save(&self, dir: &OutputDir) -> Result<Option<PathBuf>, SaveError> {
        let Some(art) = &self.artifact else {
            log::debug!("save requested with nothing rendered");
            return Ok(None);
        };

        dir.save(art).map(Some).inspect_err(|err| {
            log::warn!("save failed: {err}");
        })
    }

    /// Output folder configured in the settings
    pub fn output_dir(&self) -> OutputDir {
        OutputDir::beside_executable(&self.settings.output.dir_name)
    }
}
