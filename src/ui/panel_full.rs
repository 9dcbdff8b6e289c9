// src/ui/panel_full.rs

use eframe::egui;
use folio_studio_lib::command;
use folio_studio_lib::context::AppCtx;
use folio_studio_lib::media::FsImageProbe;
use folio_studio_lib::template::full_layout::{
    build_full_layout, EducationView, ExperienceView, FullLayout, HeaderView, ProjectView,
};
use folio_studio_lib::types::{AppState, TemplateId};

use super::message::PanelMsgState;
use super::widgets;

pub struct FullPanel {
    msg: PanelMsgState,
}

impl FullPanel {
    pub fn new() -> Self {
        Self {
            msg: PanelMsgState::default(),
        }
    }

    pub fn clear_messages(&mut self) {
        self.msg.clear();
    }

    pub fn ui(&mut self, ui: &mut egui::Ui, state: &AppState, ctx: &AppCtx, probe: &FsImageProbe) {
        let record = match command::record_snapshot(state) {
            Ok(r) => r,
            Err(e) => {
                // Route guards should make this unreachable.
                self.msg.from_app_error(&e, ctx.debug_ui);
                self.msg.show(ui);
                return;
            }
        };

        let template = command::get_status(state)
            .map(|s| s.template)
            .unwrap_or_default();

        let layout = build_full_layout(&record, template, probe);

        ui.horizontal(|ui| {
            ui.heading("Full Portfolio");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if widgets::copy_icon_button(ui, true, "Copy portfolio JSON") {
                    match serde_json::to_string_pretty(&record) {
                        Ok(s) => {
                            ui.ctx().copy_text(s);
                            self.msg.set_success("Copied portfolio JSON to clipboard.");
                        }
                        Err(e) => self.msg.set_warn(format!("Serialize failed: {e}")),
                    }
                }
            });
        });
        ui.add_space(6.0);

        self.msg.show(ui);

        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| match layout.variant {
                TemplateId::Modern => ui_modern(ui, &layout, probe),
                TemplateId::Classic => ui_classic(ui, &layout, probe),
            });
    }
}

// ======================================================
// Modern: banner header, two columns underneath
// ======================================================

fn ui_modern(ui: &mut egui::Ui, layout: &FullLayout, probe: &FsImageProbe) {
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(16))
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                widgets::avatar(ui, &layout.header.avatar, probe, 120.0);
                ui.add_space(8.0);
                header_text(ui, &layout.header, true);
            });
        });

    ui.add_space(10.0);

    ui.columns(2, |cols| {
        {
            let ui = &mut cols[0];
            if let Some(skills) = &layout.skills {
                widgets::section_heading(ui, "Skills");
                for s in skills {
                    ui.label(format!("• {s}"));
                }
            }
            if !layout.education.is_empty() {
                widgets::section_heading(ui, "Education");
                for e in &layout.education {
                    ui_education_entry(ui, e);
                }
            }
        }
        {
            let ui = &mut cols[1];
            if let Some(about) = &layout.about {
                widgets::section_heading(ui, "About");
                ui.label(about);
            }
            if !layout.experience.is_empty() {
                widgets::section_heading(ui, "Experience");
                for e in &layout.experience {
                    ui_experience_entry(ui, e);
                }
            }
            if !layout.projects.is_empty() {
                widgets::section_heading(ui, "Projects");
                for p in &layout.projects {
                    ui_project_entry(ui, p);
                }
            }
        }
    });
}

// ======================================================
// Classic: compact header, one stacked column
// ======================================================

fn ui_classic(ui: &mut egui::Ui, layout: &FullLayout, probe: &FsImageProbe) {
    ui.horizontal(|ui| {
        widgets::avatar(ui, &layout.header.avatar, probe, 72.0);
        ui.add_space(10.0);
        ui.vertical(|ui| {
            header_text(ui, &layout.header, false);
        });
    });

    ui.separator();

    if let Some(about) = &layout.about {
        widgets::section_heading(ui, "About");
        ui.label(about);
    }

    if let Some(skills) = &layout.skills {
        widgets::section_heading(ui, "Skills");
        ui.horizontal_wrapped(|ui| {
            for s in skills {
                chip(ui, s);
            }
        });
    }

    if !layout.experience.is_empty() {
        widgets::section_heading(ui, "Experience");
        for e in &layout.experience {
            ui_experience_entry(ui, e);
        }
    }

    if !layout.education.is_empty() {
        widgets::section_heading(ui, "Education");
        for e in &layout.education {
            ui_education_entry(ui, e);
        }
    }

    if !layout.projects.is_empty() {
        widgets::section_heading(ui, "Projects");
        for p in &layout.projects {
            ui_project_entry(ui, p);
        }
    }
}

// ======================================================
// shared pieces (identical data in both variants)
// ======================================================

fn header_text(ui: &mut egui::Ui, header: &HeaderView, centered: bool) {
    if !header.name.is_empty() {
        ui.label(egui::RichText::new(&header.name).strong().size(26.0));
    }
    if !header.title.is_empty() {
        ui.label(egui::RichText::new(&header.title).size(16.0));
    }

    let meta: Vec<&str> = [&header.location, &header.email, &header.phone]
        .into_iter()
        .flatten()
        .map(String::as_str)
        .collect();

    if !meta.is_empty() {
        ui.label(egui::RichText::new(meta.join("  ·  ")).weak());
    }

    if !header.links.is_empty() {
        ui.add_space(6.0);
        let draw = |ui: &mut egui::Ui| {
            for link in &header.links {
                widgets::link_chip(ui, link);
            }
        };
        if centered {
            ui.horizontal_wrapped(draw);
        } else {
            ui.horizontal(draw);
        }
    }
}

fn ui_experience_entry(ui: &mut egui::Ui, e: &ExperienceView) {
    if !e.title.is_empty() {
        ui.label(egui::RichText::new(&e.title).strong());
    }
    meta_line(ui, &e.company, &e.dates);
    if !e.description.is_empty() {
        ui.label(&e.description);
    }
    ui.add_space(8.0);
}

fn ui_education_entry(ui: &mut egui::Ui, e: &EducationView) {
    if !e.degree.is_empty() {
        ui.label(egui::RichText::new(&e.degree).strong());
    }
    meta_line(ui, &e.institution, &e.dates);
    if let Some(desc) = &e.description {
        ui.label(desc);
    }
    ui.add_space(8.0);
}

/// "Company | Dates" with whichever halves are present.
fn meta_line(ui: &mut egui::Ui, left: &str, right: &str) {
    let parts: Vec<&str> = [left, right].into_iter().filter(|s| !s.is_empty()).collect();
    if !parts.is_empty() {
        ui.label(parts.join(" | "));
    }
}

fn ui_project_entry(ui: &mut egui::Ui, p: &ProjectView) {
    if !p.name.is_empty() {
        ui.label(egui::RichText::new(&p.name).strong());
    }
    if !p.description.is_empty() {
        ui.label(&p.description);
    }
    if let Some(tech) = &p.technologies {
        ui.label(egui::RichText::new(format!("Technologies: {tech}")).weak());
    }
    ui.horizontal(|ui| {
        if let Some(url) = &p.url {
            ui.hyperlink_to("Live ↗", url);
        }
        if let Some(repo) = &p.repo {
            ui.hyperlink_to("Source ↗", repo);
        }
    });
    ui.add_space(8.0);
}

fn chip(ui: &mut egui::Ui, text: &str) {
    egui::Frame::NONE
        .fill(ui.visuals().faint_bg_color)
        .corner_radius(egui::CornerRadius::same(10u8))
        .inner_margin(egui::Margin::symmetric(8, 3))
        .show(ui, |ui| {
            ui.label(text);
        });
}
