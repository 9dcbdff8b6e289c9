// src/ui/nav.rs

use eframe::egui;
use folio_studio_lib::types::{DisplayMode, TemplateId};

/// What the nav should show (derived by ui/mod.rs).
#[derive(Clone, Copy, Debug)]
pub struct NavModel {
    pub has_record: bool,
    pub mode: DisplayMode,
    pub template: TemplateId,
}

/// Requests the nav raises; ui/mod.rs applies them through the command
/// layer.
#[derive(Clone, Copy, Debug, Default)]
pub struct NavActions {
    pub reset_requested: bool,
    pub template_selected: Option<TemplateId>,
}

pub struct LeftNav;

impl LeftNav {
    pub fn new() -> Self {
        Self
    }

    /// Pure view: renders from NavModel and raises actions on click.
    pub fn ui(&mut self, ctx: &egui::Context, model: NavModel, actions: &mut NavActions) {
        egui::SidePanel::left("left_nav")
            .resizable(false)
            .min_width(170.0)
            .show(ctx, |ui| {
                ui.allocate_ui_with_layout(
                    ui.available_size(),
                    egui::Layout::bottom_up(egui::Align::Min),
                    |ui| {
                        ui.add_space(6.0);
                        // Bottom-pinned: the only way back to the editor.
                        let start_over =
                            ui.add_enabled(model.has_record, egui::Button::new("Start Over"));
                        if start_over
                            .on_hover_text("Discard the portfolio and edit from scratch")
                            .clicked()
                        {
                            actions.reset_requested = true;
                        }

                        ui.separator();

                        // The rest of the nav above
                        ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                            ui.add_space(6.0);
                            ui.heading("Folio Studio");
                            ui.add_space(10.0);

                            stage_row(ui, model.mode == DisplayMode::Editing, "1. Edit");
                            stage_row(ui, model.mode == DisplayMode::Summary, "2. Preview card");
                            stage_row(ui, model.mode == DisplayMode::Full, "3. Full layout");

                            ui.add_space(10.0);
                            ui.separator();

                            ui.label("Template");
                            egui::ComboBox::from_id_salt("template_picker")
                                .selected_text(model.template.label())
                                .show_ui(ui, |ui| {
                                    for t in TemplateId::ALL {
                                        if ui
                                            .selectable_label(model.template == t, t.label())
                                            .clicked()
                                        {
                                            actions.template_selected = Some(t);
                                        }
                                    }
                                });
                        });
                    },
                );
            });
    }
}

fn stage_row(ui: &mut egui::Ui, active: bool, label: &str) {
    if active {
        ui.label(egui::RichText::new(label).strong());
    } else {
        ui.label(egui::RichText::new(label).weak());
    }
}
