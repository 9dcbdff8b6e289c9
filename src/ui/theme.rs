// src/ui/theme.rs

use eframe::egui;
use folio_studio_lib::context::AppCtx;
use std::sync::Arc;

/// Startup styling: visuals plus an optional body font from the assets
/// dir. Fire-and-forget: failures are logged and the app continues on
/// the built-in defaults.
pub fn install_theme_best_effort(ctx: &egui::Context, app_ctx: &AppCtx) {
    let mut style = (*ctx.style()).clone();
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.visuals.widgets.noninteractive.corner_radius = egui::CornerRadius::same(6u8);
    style.visuals.widgets.inactive.corner_radius = egui::CornerRadius::same(6u8);
    style.visuals.widgets.hovered.corner_radius = egui::CornerRadius::same(6u8);
    style.visuals.widgets.active.corner_radius = egui::CornerRadius::same(6u8);
    ctx.set_style(style);

    install_body_font_best_effort(ctx, app_ctx);
}

fn install_body_font_best_effort(ctx: &egui::Context, app_ctx: &AppCtx) {
    let path = app_ctx.body_font_path();

    let bytes = match std::fs::read(&path) {
        Ok(b) => b,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "no custom body font");
            return;
        }
    };

    let mut fonts = egui::FontDefinitions::default();
    fonts.font_data.insert(
        "folio-body".to_owned(),
        Arc::new(egui::FontData::from_owned(bytes)),
    );
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, "folio-body".to_owned());

    ctx.set_fonts(fonts);
    tracing::info!(path = %path.display(), "installed custom body font");
}
