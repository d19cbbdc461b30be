mod app;

use app::AsciiApp;
use eframe::egui;
use img2ascii::Settings;

fn main() -> Result<(), eframe::Error> {
    // Configure logging
    env_logger::init();

    let settings = Settings::load(None).unwrap_or_else(|e| {
        log::error!("{e}, falling back to default settings");
        Settings::default()
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([500.0, 500.0])
            .with_title("Image To ASCII")
            .with_drag_and_drop(true)
            .with_icon(load_icon()),
        ..Default::default()
    };

    eframe::run_native(
        "Image To ASCII",
        options,
        Box::new(|cc| Ok(Box::new(AsciiApp::new(cc, settings)))),
    )
}

/// Generate the window icon: a dense disc on a light background
fn load_icon() -> egui::IconData {
    let icon_size = 32;
    let mut pixels = vec![0u8; icon_size * icon_size * 4];
    let center = icon_size as f32 / 2.0 - 0.5;

    for y in 0..icon_size {
        for x in 0..icon_size {
            let idx = (y * icon_size + x) * 4;
            let dx = x as f32 - center;
            let dy = y as f32 - center;
            let dist = (dx * dx + dy * dy).sqrt();

            // Ring of dots fading outward, like the palette ramp
            let shade = if dist < 9.0 {
                20
            } else if dist < 13.0 && (x + y) % 2 == 0 {
                120
            } else {
                235
            };

            pixels[idx] = shade;
            pixels[idx + 1] = shade;
            pixels[idx + 2] = shade;
            pixels[idx + 3] = 255;
        }
    }

    egui::IconData {
        rgba: pixels,
        width: icon_size as u32,
        height: icon_size as u32,
    }
}
