use eframe::egui;
use img2ascii::config::{
    HEIGHT_RATIO_STEP, MAX_FONT_SIZE, MAX_HEIGHT_RATIO, MIN_FONT_SIZE, MIN_HEIGHT_RATIO,
};
use img2ascii::grid::TOOLBAR_HEIGHT;
use img2ascii::{GlyphMetrics, OutputDir, RenderSession, Settings, parse_drop_payload};
use std::path::Path;

/// Message shown under the controls
enum Status {
    Info(String),
    Error(String),
}

/// Buttons pressed in the output window this frame
#[derive(Default)]
struct OutputActions {
    save: bool,
    open_folder: bool,
    close: bool,
}

/// Main application state for the image-to-ASCII GUI
pub struct AsciiApp {
    /// Controls, loaded image and last artifact
    session: RenderSession,
    /// Where "Save ASCII" writes to
    output_dir: OutputDir,
    /// Whether the output window is open
    show_output: bool,
    status: Option<Status>,
}

impl AsciiApp {
    /// Create a new application from loaded settings
    pub fn new(_cc: &eframe::CreationContext<'_>, settings: Settings) -> Self {
        let session = RenderSession::new(settings);
        let output_dir = session.output_dir();
        Self {
            session,
            output_dir,
            show_output: false,
            status: None,
        }
    }

    fn font_id(&self) -> egui::FontId {
        egui::FontId::monospace(self.session.font_size() as f32)
    }

    /// Measure one cell of the monospace font at the current size
    fn glyph_metrics(&self, ctx: &egui::Context) -> GlyphMetrics {
        let font_id = self.font_id();
        ctx.fonts(|fonts| {
            GlyphMetrics::new(fonts.glyph_width(&font_id, 'A'), fonts.row_height(&font_id))
        })
    }

    /// Load an image from file path and render it
    fn load_image(&mut self, ctx: &egui::Context, path: &Path) {
        let metrics = self.glyph_metrics(ctx);
        match self.session.load(path, &metrics) {
            Ok(art) => {
                let grid = art.grid();
                self.status = Some(Status::Info(format!(
                    "{} ({}x{} characters)",
                    path.display(),
                    grid.width,
                    grid.height
                )));
                self.show_output = true;
            }
            Err(e) => {
                self.status = Some(Status::Error(format!("Invalid image: {e}")));
            }
        }
    }

    /// Re-render the loaded image after a control changed
    fn rerender(&mut self, ctx: &egui::Context) {
        let metrics = self.glyph_metrics(ctx);
        if let Err(e) = self.session.rerender(&metrics) {
            self.status = Some(Status::Error(format!("Render failed: {e}")));
        }
    }

    fn save_ascii(&mut self) {
        match self.session.save(&self.output_dir) {
            Ok(Some(path)) => {
                self.status = Some(Status::Info(format!("Saved to {}", path.display())));
            }
            Ok(None) => {}
            Err(e) => {
                log::error!("{e}");
                self.status = Some(Status::Error(e.to_string()));
            }
        }
    }

    fn open_output_folder(&mut self) {
        if let Err(e) = self.output_dir.reveal() {
            log::error!("{e}");
            self.status = Some(Status::Error(e.to_string()));
        }
    }

    /// Pick up the first file dropped onto any window this frame
    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| {
            i.raw
                .dropped_files
                .first()
                .and_then(|file| file.path.as_ref())
                .map(|path| parse_drop_payload(&path.to_string_lossy()))
        });

        if let Some(path) = dropped {
            self.load_image(ctx, &path);
        }
    }

    /// Render the control panel UI
    ///
    /// Returns true when a control changed
    fn render_controls(&mut self, ui: &mut egui::Ui) -> bool {
        let mut changed = false;

        let mut font_size = self.session.font_size();
        if ui
            .add(egui::Slider::new(&mut font_size, MIN_FONT_SIZE..=MAX_FONT_SIZE).text("Font Size"))
            .changed()
        {
            self.session.set_font_size(font_size);
            changed = true;
        }

        let mut ratio = self.session.height_ratio();
        if ui
            .add(
                egui::Slider::new(&mut ratio, MIN_HEIGHT_RATIO..=MAX_HEIGHT_RATIO)
                    .step_by(HEIGHT_RATIO_STEP)
                    .text("Height / Font Ratio"),
            )
            .on_hover_text("Multiplies the number of output lines")
            .changed()
        {
            self.session.set_height_ratio(ratio);
            changed = true;
        }

        changed
    }

    /// Show the rendered artifact in its own fixed-size window
    fn show_output_window(&self, ctx: &egui::Context) -> OutputActions {
        let metrics = self.glyph_metrics(ctx);
        let (Some(art), Some(size)) = (self.session.artifact(), self.session.window_size(&metrics))
        else {
            return OutputActions::default();
        };
        let font_id = self.font_id();

        let viewport = egui::ViewportBuilder::default()
            .with_title("ASCII Output")
            .with_inner_size(size)
            .with_resizable(false);

        ctx.show_viewport_immediate(
            egui::ViewportId::from_hash_of("ascii_output"),
            viewport,
            |ctx, _class| {
                let mut actions = OutputActions::default();

                egui::TopBottomPanel::top("output_toolbar")
                    .exact_height(TOOLBAR_HEIGHT)
                    .show(ctx, |ui| {
                        ui.horizontal_centered(|ui| {
                            actions.save = ui.button("Save ASCII").clicked();
                            actions.open_folder = ui.button("Open Folder").clicked();
                        });
                    });

                egui::CentralPanel::default()
                    .frame(egui::Frame::NONE.fill(ctx.style().visuals.panel_fill))
                    .show(ctx, |ui| {
                        ui.spacing_mut().item_spacing = egui::Vec2::ZERO;
                        ui.add(egui::Label::new(egui::RichText::new(art.text()).font(font_id.clone())).extend());
                    });

                actions.close = ctx.input(|i| i.viewport().close_requested());
                actions
            },
        )
    }
}

impl eframe::App for AsciiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_dropped_files(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(30.0);
                ui.label(
                    egui::RichText::new("@#$%?*+;:,.")
                        .font(egui::FontId::monospace(32.0))
                        .strong(),
                );
                ui.add_space(10.0);

                let hovering = ctx.input(|i| !i.raw.hovered_files.is_empty());
                let hint = if hovering {
                    "Release to convert"
                } else {
                    "Drag and drop an image file into this window"
                };
                ui.label(egui::RichText::new(hint).font(egui::FontId::monospace(12.0)));

                ui.add_space(4.0);
                if ui.button("Open Image...").clicked()
                    && let Some(path) = rfd::FileDialog::new()
                        .add_filter("Images", &["png", "jpg", "jpeg", "bmp", "gif"])
                        .pick_file()
                {
                    self.load_image(ctx, &path);
                }
            });

            ui.add_space(16.0);
            ui.separator();

            if self.render_controls(ui) {
                self.rerender(ctx);
            }

            ui.separator();
            match &self.status {
                Some(Status::Info(msg)) => {
                    ui.label(msg);
                }
                Some(Status::Error(msg)) => {
                    ui.colored_label(egui::Color32::RED, msg);
                }
                None => {}
            }
        });

        if self.show_output {
            let actions = self.show_output_window(ctx);
            if actions.save {
                self.save_ascii();
            }
            if actions.open_folder {
                self.open_output_folder();
            }
            if actions.close {
                self.show_output = false;
            }
        }
    }
}
