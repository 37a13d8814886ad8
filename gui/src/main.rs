mod app;

use app::ConverterApp;
use asciify::glyph::covers_scaled;
use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    // Configure logging
    env_logger::init();

    // Configure viewport/window
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 768.0])
            .with_min_inner_size([720.0, 540.0])
            .with_title("Image to ASCII Converter")
            .with_icon(load_icon()),
        ..Default::default()
    };

    eframe::run_native(
        "Image to ASCII Converter",
        options,
        Box::new(|cc| Box::new(ConverterApp::new(cc))),
    )
}

/// Application icon: the '@' ramp glyph, black on white
fn load_icon() -> egui::IconData {
    let icon_size = 32u32;
    let mut pixels = Vec::with_capacity((icon_size * icon_size * 4) as usize);

    for y in 0..icon_size {
        for x in 0..icon_size {
            let value = if covers_scaled('@', x, y, icon_size) { 0 } else { 255 };
            pixels.extend_from_slice(&[value, value, value, 255]);
        }
    }

    egui::IconData {
        rgba: pixels,
        width: icon_size,
        height: icon_size,
    }
}
