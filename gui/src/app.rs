use asciify::export::{
    IMAGE_FILE_NAME, TEXT_FILE_NAME, clipboard_payload, save_png, save_text,
};
use asciify::{Conversion, ConverterConfig, Outcome, Session, Ticket, convert_file, run_guarded};
use eframe::egui;
use image::RgbaImage;
use std::path::PathBuf;
use std::sync::mpsc::{Receiver, Sender, channel};

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "webp", "tiff", "tif", "ico"];

/// Result of a background conversion, tagged with its request
struct Finished {
    ticket: Ticket,
    path: PathBuf,
    result: asciify::Result<Conversion>,
}

/// Main application state for the converter GUI
pub struct ConverterApp {
    /// Conversion state machine
    session: Session,
    /// Conversion and export settings
    config: ConverterConfig,

    /// Worker results flow back through this channel
    sender: Sender<Finished>,
    receiver: Receiver<Finished>,

    /// Texture for the source image of the displayed conversion
    preview_texture: Option<egui::TextureHandle>,

    /// Show the copy acknowledgment on the next frame, after the clipboard was written
    copied_notice: bool,
    /// Error message to display (if any)
    error_message: Option<String>,
}

impl Default for ConverterApp {
    fn default() -> Self {
        let (sender, receiver) = channel();
        Self {
            session: Session::new(),
            config: ConverterConfig::default(),
            sender,
            receiver,
            preview_texture: None,
            copied_notice: false,
            error_message: None,
        }
    }
}

impl ConverterApp {
    /// Create a new converter application
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Start converting a file on the rayon pool
    fn open_file(&mut self, path: PathBuf, ctx: &egui::Context) {
        let ticket = self.session.begin();
        log::info!(
            "converting {} (request {})",
            path.display(),
            ticket.generation()
        );

        let config = self.config.clone();
        let sender = self.sender.clone();
        let ctx = ctx.clone();
        rayon::spawn(move || {
            let result = run_guarded(|| convert_file(&path, &config));
            // The receiver only goes away when the app shuts down
            let _ = sender.send(Finished {
                ticket,
                path,
                result,
            });
            ctx.request_repaint();
        });
    }

    /// Apply finished conversions to the session
    fn poll_workers(&mut self) {
        while let Ok(finished) = self.receiver.try_recv() {
            let Finished {
                ticket,
                path,
                result,
            } = finished;

            match self.session.finish(ticket, result) {
                Outcome::Committed => {
                    log::info!("converted {}", path.display());
                    self.preview_texture = None;
                    self.error_message = None;
                }
                Outcome::Failed(e) => {
                    log::warn!("failed to convert {}: {}", path.display(), e);
                    self.error_message =
                        Some(format!("Failed to convert {}: {}", path.display(), e));
                }
                Outcome::Stale => {
                    log::debug!(
                        "dropping superseded result for {} (request {})",
                        path.display(),
                        ticket.generation()
                    );
                }
            }
        }
    }

    fn pick_image(&mut self, ctx: &egui::Context) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", IMAGE_EXTENSIONS)
            .pick_file()
        {
            self.open_file(path, ctx);
        }
    }

    fn copy_to_clipboard(&mut self, ctx: &egui::Context) {
        if let Some(art) = self.session.art() {
            let payload = clipboard_payload(art, self.config.preserve_spacing_on_copy);
            ctx.output_mut(|o| o.copied_text = payload);
            self.copied_notice = true;
            ctx.request_repaint();
        }
    }

    fn download_text(&mut self) {
        let Some(art) = self.session.art() else {
            return;
        };
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Text", &["txt"])
            .set_file_name(TEXT_FILE_NAME)
            .save_file()
            && let Err(e) = save_text(art, &path)
        {
            self.error_message = Some(format!("Failed to save text: {}", e));
        }
    }

    fn download_image(&mut self) {
        let Some(art) = self.session.art() else {
            return;
        };
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG", &["png"])
            .set_file_name(IMAGE_FILE_NAME)
            .save_file()
            && let Err(e) = save_png(art, &self.config, &path)
        {
            self.error_message = Some(format!("Failed to save image: {}", e));
        }
    }

    /// Render the settings panel
    fn render_settings(&mut self, ui: &mut egui::Ui) {
        ui.heading("Settings");
        ui.separator();

        ui.checkbox(
            &mut self.config.preserve_spacing_on_copy,
            "Preserve spacing on copy",
        )
        .on_hover_text("Copy spaces as non-breaking spaces so pasted art stays aligned");

        ui.checkbox(&mut self.config.enable_image_export, "Enable PNG export")
            .on_hover_text("Show the button that saves the art as an image");

        ui.add_space(8.0);
        ui.label(format!("Columns: {}", self.config.width));
        ui.label(format!(
            "Font: {} px, line height {:.1} px",
            self.config.font_size,
            self.config.line_height()
        ));
    }

    /// Render the copy / save buttons
    fn render_actions(&mut self, ui: &mut egui::Ui) {
        let enabled = self.session.exports_enabled();

        ui.horizontal(|ui| {
            if ui.add_enabled(enabled, egui::Button::new("Copy")).clicked() {
                self.copy_to_clipboard(ui.ctx());
            }
            if ui
                .add_enabled(enabled, egui::Button::new("Download .txt"))
                .clicked()
            {
                self.download_text();
            }
            if self.config.enable_image_export
                && ui
                    .add_enabled(enabled, egui::Button::new("Download PNG"))
                    .clicked()
            {
                self.download_image();
            }
        });
    }

    /// Convert RgbaImage to egui ColorImage
    fn rgba_to_color_image(img: &RgbaImage) -> egui::ColorImage {
        let (width, height) = img.dimensions();
        egui::ColorImage::from_rgba_unmultiplied([width as usize, height as usize], img.as_raw())
    }

    /// Display the source image of the displayed conversion
    fn render_preview(&mut self, ui: &mut egui::Ui) {
        if self.preview_texture.is_none()
            && let Some(conversion) = self.session.displayed()
        {
            let color_image = Self::rgba_to_color_image(&conversion.source);
            self.preview_texture = Some(ui.ctx().load_texture(
                "preview",
                color_image,
                egui::TextureOptions::default(),
            ));
        }

        if let Some(tex) = &self.preview_texture {
            let size = tex.size_vec2();
            let max_size = egui::vec2(ui.available_width(), 240.0);
            // Shrink to fit, never upscale
            let scale = (max_size.x / size.x).min(max_size.y / size.y).min(1.0);
            ui.image((tex.id(), size * scale));
            ui.label(format!("{}x{}", size.x as u32, size.y as u32));
        }
    }
}

impl eframe::App for ConverterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_workers();

        if self.copied_notice {
            self.copied_notice = false;
            rfd::MessageDialog::new()
                .set_level(rfd::MessageLevel::Info)
                .set_title("Image to ASCII Converter")
                .set_description("Copied to clipboard!")
                .set_buttons(rfd::MessageButtons::Ok)
                .show();
        }

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Image...").clicked() {
                        ui.close_menu();
                        self.pick_image(ctx);
                    }

                    ui.separator();

                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });

        // Left panel: Settings
        egui::SidePanel::left("settings_panel")
            .resizable(true)
            .default_width(220.0)
            .show(ctx, |ui| {
                self.render_settings(ui);
            });

        // Central panel: input, preview, actions and output
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Image to ASCII Converter");

            if ui.button("Open Image...").clicked() {
                self.pick_image(ctx);
            }

            // Show error message if any
            if let Some(ref msg) = self.error_message {
                ui.colored_label(egui::Color32::RED, msg);
                if ui.button("Clear Error").clicked() {
                    self.error_message = None;
                }
            }
            ui.separator();

            self.render_preview(ui);
            self.render_actions(ui);

            if self.session.is_loading() {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Converting to ASCII...");
                });
            }

            // Kept on screen while a newer file converts, like the preview
            if let Some(conversion) = self.session.displayed() {
                let art = &conversion.art;
                ui.separator();
                egui::ScrollArea::both().show(ui, |ui| {
                    ui.add(
                        egui::Label::new(egui::RichText::new(art.as_str()).monospace())
                            .wrap(false),
                    );
                });
            }
        });
    }
}
