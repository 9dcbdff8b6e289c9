// src/ui/panel_summary.rs

use eframe::egui;
use folio_studio_lib::command;
use folio_studio_lib::context::AppCtx;
use folio_studio_lib::media::FsImageProbe;
use folio_studio_lib::template::summary_card::build_summary_card;
use folio_studio_lib::types::AppState;

use super::message::PanelMsgState;
use super::widgets;
use super::Route;

pub struct SummaryPanel {
    msg: PanelMsgState,
}

impl SummaryPanel {
    pub fn new() -> Self {
        Self {
            msg: PanelMsgState::default(),
        }
    }

    pub fn clear_messages(&mut self) {
        self.msg.clear();
    }

    pub fn ui(
        &mut self,
        ui: &mut egui::Ui,
        state: &AppState,
        ctx: &AppCtx,
        probe: &FsImageProbe,
        route: &mut Route,
    ) {
        ui.heading("Preview");
        ui.add_space(6.0);

        self.msg.show(ui);

        let record = match command::record_snapshot(state) {
            Ok(r) => r,
            Err(e) => {
                // Route guards should make this unreachable.
                self.msg.from_app_error(&e, ctx.debug_ui);
                return;
            }
        };

        let card = build_summary_card(&record, probe);

        egui::Frame::group(ui.style())
            .inner_margin(egui::Margin::same(16))
            .show(ui, |ui| {
                ui.set_max_width(440.0);

                ui.horizontal(|ui| {
                    widgets::avatar(ui, &card.avatar, probe, 96.0);

                    ui.add_space(12.0);

                    ui.vertical(|ui| {
                        if !card.name.is_empty() {
                            ui.label(egui::RichText::new(&card.name).strong().size(22.0));
                        }
                        if !card.title.is_empty() {
                            ui.label(egui::RichText::new(&card.title).size(15.0));
                        }
                        if let Some(bio) = &card.bio_preview {
                            ui.add_space(6.0);
                            ui.label(egui::RichText::new(bio).weak());
                        }
                    });
                });

                if !card.links.is_empty() {
                    ui.add_space(10.0);
                    ui.horizontal_wrapped(|ui| {
                        for link in &card.links {
                            widgets::link_chip(ui, link);
                        }
                    });
                }
            });

        ui.add_space(12.0);

        let expand = egui::Button::new(egui::RichText::new("View Full Portfolio").size(16.0))
            .min_size(egui::vec2(180.0, 32.0));

        if ui.add(expand).clicked() {
            match command::expand_view(state) {
                Ok(()) => *route = Route::Full,
                Err(e) => self.msg.from_app_error(&e, ctx.debug_ui),
            }
        }

        ui.add_space(4.0);
        ui.label(
            egui::RichText::new("Use Start Over in the sidebar to discard and edit again.").weak(),
        );
    }
}
