// src/ui/panel_editor.rs

use eframe::egui;
use folio_studio_lib::command;
use folio_studio_lib::command::draft::{self as ops, Draft};
use folio_studio_lib::context::AppCtx;
use folio_studio_lib::types::{AppState, SectionKind};

use super::message::PanelMsgState;
use super::Route;

pub struct EditorPanel {
    draft: Draft,
    msg: PanelMsgState,
}

impl EditorPanel {
    pub fn new() -> Self {
        Self {
            draft: Draft::default(),
            msg: PanelMsgState::default(),
        }
    }

    pub fn reset_inputs(&mut self) {
        self.draft = Draft::default();
        self.msg.clear();
    }

    pub fn clear_messages(&mut self) {
        self.msg.clear();
    }

    pub fn ui(&mut self, ui: &mut egui::Ui, state: &AppState, ctx: &AppCtx, route: &mut Route) {
        ui.heading("Edit Portfolio");
        ui.add_space(6.0);

        self.msg.show(ui);

        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                self.ui_profile(ui, ctx);
                self.ui_links(ui);
                self.ui_skills(ui);

                ui_experience_list(ui, &mut self.draft);
                ui_education_list(ui, &mut self.draft);
                ui_projects_list(ui, &mut self.draft);

                ui.add_space(14.0);

                let submit = egui::Button::new(egui::RichText::new("Generate Portfolio").size(16.0))
                    .min_size(egui::vec2(180.0, 32.0));

                if ui.add(submit).clicked() {
                    self.msg.clear();

                    let record = ops::normalize(&self.draft);
                    match command::submit_record(record, state) {
                        Ok(()) => *route = Route::Summary,
                        Err(e) => self.msg.from_app_error(&e, ctx.debug_ui),
                    }
                }
            });
    }

    fn ui_profile(&mut self, ui: &mut egui::Ui, ctx: &AppCtx) {
        super::widgets::section_heading(ui, "Profile");

        labeled_singleline(ui, "Name", &mut self.draft.name, "Jane Doe");
        labeled_singleline(ui, "Title", &mut self.draft.title, "Systems Engineer");
        labeled_singleline(ui, "Email", &mut self.draft.email, "jane@example.com");
        labeled_singleline(ui, "Phone", &mut self.draft.phone, "+1 555 0100");
        labeled_singleline(ui, "Location", &mut self.draft.location, "Berlin, DE");

        ui.label("Bio");
        ui.add(egui::TextEdit::multiline(&mut self.draft.bio).desired_rows(3));
        ui.add_space(6.0);

        ui.label("Profile image");
        ui.horizontal(|ui| {
            ui.add(
                egui::TextEdit::singleline(&mut self.draft.profile_image)
                    .hint_text("avatar.png (under the assets dir) or an absolute path"),
            );

            if ui.small_button("Browse").clicked() {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("Images", &["png", "jpg", "jpeg", "gif", "webp"])
                    .set_directory(&ctx.assets_dir)
                    .pick_file()
                {
                    self.draft.profile_image = path.display().to_string();
                }
            }
        });
        ui.add_space(6.0);
    }

    fn ui_links(&mut self, ui: &mut egui::Ui) {
        super::widgets::section_heading(ui, "Links");

        labeled_singleline(
            ui,
            "LinkedIn",
            &mut self.draft.linkedin,
            "https://linkedin.com/in/…",
        );
        labeled_singleline(ui, "GitHub", &mut self.draft.github, "https://github.com/…");
        labeled_singleline(ui, "Website", &mut self.draft.website, "https://…");
        labeled_singleline(ui, "Twitter", &mut self.draft.twitter, "https://twitter.com/…");
    }

    fn ui_skills(&mut self, ui: &mut egui::Ui) {
        super::widgets::section_heading(ui, "Skills");

        ui.label("Comma-separated; empty entries are dropped on submit.");
        ui.add(
            egui::TextEdit::singleline(&mut self.draft.skills)
                .hint_text("Rust, egui, accessibility"),
        );
        ui.add_space(6.0);
    }
}

fn labeled_singleline(ui: &mut egui::Ui, label: &str, buf: &mut String, hint: &str) {
    ui.label(label);
    ui.add(egui::TextEdit::singleline(buf).hint_text(hint));
    ui.add_space(6.0);
}

// ======================================================
// repeatable sub-record lists
// ======================================================

fn ui_experience_list(ui: &mut egui::Ui, draft: &mut Draft) {
    super::widgets::section_heading(ui, "Experience");

    let mut pending_remove: Option<usize> = None;

    for (i, entry) in draft.experience.iter_mut().enumerate() {
        ui.group(|ui| {
            entry_header(ui, "Position", i, &mut pending_remove);

            labeled_singleline(ui, "Job title", &mut entry.title, "Senior Engineer");
            labeled_singleline(ui, "Company", &mut entry.company, "Acme GmbH");
            labeled_singleline(ui, "Dates", &mut entry.dates, "2021 — present");

            ui.label("Description");
            ui.add(egui::TextEdit::multiline(&mut entry.description).desired_rows(2));
        });
        ui.add_space(6.0);
    }

    if let Some(i) = pending_remove {
        ops::remove_entry(draft, SectionKind::Experience, i);
    }

    if ui.button("+ Add experience").clicked() {
        ops::append_entry(draft, SectionKind::Experience);
    }
}

fn ui_education_list(ui: &mut egui::Ui, draft: &mut Draft) {
    super::widgets::section_heading(ui, "Education");

    let mut pending_remove: Option<usize> = None;

    for (i, entry) in draft.education.iter_mut().enumerate() {
        ui.group(|ui| {
            entry_header(ui, "Entry", i, &mut pending_remove);

            labeled_singleline(ui, "Degree", &mut entry.degree, "BSc Computer Science");
            labeled_singleline(ui, "Institution", &mut entry.institution, "TU Somewhere");
            labeled_singleline(ui, "Dates", &mut entry.dates, "2015 — 2018");

            ui.label("Description (optional)");
            ui.add(egui::TextEdit::multiline(&mut entry.description).desired_rows(2));
        });
        ui.add_space(6.0);
    }

    if let Some(i) = pending_remove {
        ops::remove_entry(draft, SectionKind::Education, i);
    }

    if ui.button("+ Add education").clicked() {
        ops::append_entry(draft, SectionKind::Education);
    }
}

fn ui_projects_list(ui: &mut egui::Ui, draft: &mut Draft) {
    super::widgets::section_heading(ui, "Projects");

    let mut pending_remove: Option<usize> = None;

    for (i, entry) in draft.projects.iter_mut().enumerate() {
        ui.group(|ui| {
            entry_header(ui, "Project", i, &mut pending_remove);

            labeled_singleline(ui, "Name", &mut entry.name, "folio-studio");
            ui.label("Description");
            ui.add(egui::TextEdit::multiline(&mut entry.description).desired_rows(2));
            ui.add_space(6.0);

            // Display string only; never split into a list.
            labeled_singleline(ui, "Technologies", &mut entry.technologies, "Rust, egui");
            labeled_singleline(ui, "Live URL (optional)", &mut entry.url, "https://…");
            labeled_singleline(ui, "Repository (optional)", &mut entry.repo, "https://…");
        });
        ui.add_space(6.0);
    }

    if let Some(i) = pending_remove {
        ops::remove_entry(draft, SectionKind::Projects, i);
    }

    if ui.button("+ Add project").clicked() {
        ops::append_entry(draft, SectionKind::Projects);
    }
}

fn entry_header(ui: &mut egui::Ui, noun: &str, index: usize, pending_remove: &mut Option<usize>) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(format!("{} {}", noun, index + 1)).strong());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.small_button("Remove").clicked() {
                *pending_remove = Some(index);
            }
        });
    });
    ui.add_space(4.0);
}
