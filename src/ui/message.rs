// src/ui/message.rs

use folio_studio_lib::error::{AppError, UserMsgKind};

use super::egui;
use super::egui::{Color32, Ui};

#[derive(Clone, Debug, Default)]
pub struct PanelMsgState {
    kind: Option<UserMsgKind>,
    short: Option<String>,
}

impl PanelMsgState {
    pub fn clear(&mut self) {
        self.kind = None;
        self.short = None;
    }

    pub fn is_set(&self) -> bool {
        self.kind.is_some() && self.short.is_some()
    }

    pub fn set_success(&mut self, short: impl Into<String>) {
        self.kind = Some(UserMsgKind::Success);
        self.short = Some(short.into());
    }

    pub fn set_warn(&mut self, short: impl Into<String>) {
        self.kind = Some(UserMsgKind::Warn);
        self.short = Some(short.into());
    }

    pub fn set_info(&mut self, short: impl Into<String>) {
        self.kind = Some(UserMsgKind::Info);
        self.short = Some(short.into());
    }

    pub fn set_error(&mut self, short: impl Into<String>) {
        self.kind = Some(UserMsgKind::Error);
        self.short = Some(short.into());
    }

    pub fn from_app_error(&mut self, err: &AppError, debug_ui: bool) {
        let msg = if debug_ui {
            err.to_string()
        } else {
            err.user_msg().short.to_string()
        };

        self.kind = Some(err.user_msg().kind);
        self.short = Some(msg);
    }

    pub fn show(&self, ui: &mut Ui) {
        if !self.is_set() {
            return;
        }

        let kind = self.kind.unwrap();
        let short = self.short.as_deref().unwrap_or("");

        let (stroke, fill) = match kind {
            UserMsgKind::Success => (
                Color32::from_rgb(70, 200, 120),
                Color32::from_rgb(16, 60, 36),
            ),
            UserMsgKind::Warn => (
                Color32::from_rgb(235, 180, 60),
                Color32::from_rgb(70, 52, 10),
            ),
            UserMsgKind::Error => (
                Color32::from_rgb(235, 90, 90),
                Color32::from_rgb(70, 16, 16),
            ),
            UserMsgKind::Info => (
                Color32::from_rgb(110, 170, 235),
                Color32::from_rgb(16, 40, 66),
            ),
        };

        egui::Frame::NONE
            .fill(fill)
            .stroke(egui::Stroke::new(1.0, stroke))
            .corner_radius(egui::CornerRadius::same(6u8))
            .inner_margin(egui::Margin::same(8))
            .show(ui, |ui| {
                ui.colored_label(stroke, short);
            });
    }
}
