// src/ui/widgets.rs

use eframe::egui;
use folio_studio_lib::{
    media::{FsImageProbe, ImageProbe},
    template::{AvatarSource, LinkRef},
};

pub fn copy_icon_button(ui: &mut egui::Ui, enabled: bool, hover: &str) -> bool {
    ui.add_enabled(enabled, egui::Button::new("⧉"))
        .on_hover_text(hover)
        .clicked()
}

/// Painted placeholder avatar: tinted disc with the display initial.
pub fn avatar_disc(ui: &mut egui::Ui, size: f32, glyph: char) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::hover());

    let fill = egui::Color32::from_rgb(58, 74, 106);
    let stroke = egui::Color32::from_rgb(120, 150, 200);

    let painter = ui.painter();
    painter.circle_filled(rect.center(), size / 2.0, fill);
    painter.circle_stroke(rect.center(), size / 2.0, egui::Stroke::new(1.5, stroke));
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        glyph,
        egui::FontId::proportional(size * 0.45),
        egui::Color32::WHITE,
    );
}

/// Avatar from the view model. An image reference that fails to resolve
/// at draw time falls back to the painted disc, same rule as build time.
pub fn avatar(ui: &mut egui::Ui, source: &AvatarSource, probe: &FsImageProbe, size: f32) {
    match source {
        AvatarSource::Image(reference) => match probe.resolve(reference) {
            Some(path) => {
                let uri = format!("file://{}", path.display());
                ui.add(
                    egui::Image::new(uri)
                        .fit_to_exact_size(egui::vec2(size, size))
                        .show_loading_spinner(false),
                );
            }
            None => avatar_disc(ui, size, '?'),
        },
        AvatarSource::Placeholder(glyph) => avatar_disc(ui, size, *glyph),
    }
}

/// One profile link as an outbound hyperlink chip.
pub fn link_chip(ui: &mut egui::Ui, link: &LinkRef) {
    ui.hyperlink_to(format!("{} ↗", link.kind.label()), &link.url)
        .on_hover_text(&link.url);
}

pub fn section_heading(ui: &mut egui::Ui, text: &str) {
    ui.add_space(10.0);
    ui.label(egui::RichText::new(text).strong().size(17.0));
    ui.separator();
}
