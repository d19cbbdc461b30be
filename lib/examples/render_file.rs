/// Render an image file to stdout
///
/// Usage: cargo run --example render_file -- <image> [font_size] [height_ratio]
use img2ascii::{GlyphMetrics, RenderSession, parse_drop_payload};
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("usage: render_file <image> [font_size] [height_ratio]");
        return ExitCode::FAILURE;
    };

    let mut session = RenderSession::default();
    if let Some(size) = args.next().and_then(|s| s.parse().ok()) {
        session.set_font_size(size);
    }
    if let Some(ratio) = args.next().and_then(|s| s.parse().ok()) {
        session.set_height_ratio(ratio);
    }

    // Cell size scales linearly with the font, 7x14 at 8pt
    let scale = session.font_size() as f32 / 8.0;
    let metrics = GlyphMetrics::new(7.0 * scale, 14.0 * scale);

    match session.load(&parse_drop_payload(&path), &metrics) {
        Ok(art) => {
            println!("{art}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
