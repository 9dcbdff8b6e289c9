// src/ui/mod.rs

pub mod nav;
pub mod panel_editor;
pub mod panel_full;
pub mod panel_summary;

pub mod message;
pub mod route_policy;
pub mod theme;
pub mod widgets;

use eframe::egui;
use std::sync::Arc;

use nav::{LeftNav, NavActions, NavModel};
use route_policy::{apply_route_guards, entering_editor, RouteCtx};

use folio_studio_lib::command::{self, StoreStatus};
use folio_studio_lib::context::AppCtx;
use folio_studio_lib::media::FsImageProbe;
use folio_studio_lib::types::AppState;

use panel_editor::EditorPanel;
use panel_full::FullPanel;
use panel_summary::SummaryPanel;

/// One route per display mode: Editing, Summary, Full.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Editor,
    Summary,
    Full,
}

pub struct UiApp {
    state: Arc<AppState>,
    ctx: Arc<AppCtx>,
    probe: FsImageProbe,

    route: Route,
    prev_route: Route,

    nav: LeftNav,
    editor: EditorPanel,
    summary: SummaryPanel,
    full: FullPanel,
}

impl UiApp {
    pub fn new(state: Arc<AppState>, ctx: Arc<AppCtx>) -> Self {
        let probe = FsImageProbe::new(ctx.assets_dir.clone());

        Self {
            state,
            ctx,
            probe,
            route: Route::Editor,
            prev_route: Route::Editor,
            nav: LeftNav::new(),
            editor: EditorPanel::new(),
            summary: SummaryPanel::new(),
            full: FullPanel::new(),
        }
    }

    /// Derive minimal routing context once per frame.
    fn store_status(&self) -> StoreStatus {
        command::get_status(self.state.as_ref()).unwrap_or(StoreStatus {
            has_record: false,
            template: Default::default(),
            display_mode: Default::default(),
        })
    }
}

impl eframe::App for UiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let status = self.store_status();
        let rctx = RouteCtx {
            has_record: status.has_record,
        };

        let guarded = apply_route_guards(rctx, self.route);
        if guarded != self.route {
            self.route = guarded;
        }

        // Route transition hooks
        if self.route != self.prev_route {
            self.editor.clear_messages();
            self.summary.clear_messages();
            self.full.clear_messages();

            if entering_editor(self.prev_route, self.route) {
                // Back from a discarded record: fresh blank draft.
                self.editor.reset_inputs();
            }

            self.prev_route = self.route;
        }

        // Nav (pure view)
        let nav_model = NavModel {
            has_record: status.has_record,
            mode: status.display_mode,
            template: status.template,
        };
        let mut actions = NavActions::default();
        self.nav.ui(ctx, nav_model, &mut actions);

        if let Some(t) = actions.template_selected {
            if let Err(e) = command::select_template(t, self.state.as_ref()) {
                tracing::warn!(error = %e, "template selection failed");
            }
        }

        if actions.reset_requested {
            match command::reset_record(self.state.as_ref()) {
                Ok(()) => self.route = Route::Editor,
                Err(e) => tracing::warn!(error = %e, "reset failed"),
            }
        }

        // Panels
        egui::CentralPanel::default().show(ctx, |ui| match self.route {
            Route::Editor => self
                .editor
                .ui(ui, self.state.as_ref(), &self.ctx, &mut self.route),

            Route::Summary => self.summary.ui(
                ui,
                self.state.as_ref(),
                &self.ctx,
                &self.probe,
                &mut self.route,
            ),

            Route::Full => self.full.ui(ui, self.state.as_ref(), &self.ctx, &self.probe),
        });
    }
}
