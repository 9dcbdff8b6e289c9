// src/main.rs

// Prevents additional console window on Windows in release, DO NOT REMOVE!!
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod ui;

use directories::ProjectDirs;
use folio_studio_lib::context::{AppCtx, APP_ID, APP_ORG, APP_QUALIFIER};
use std::env;
use std::path::PathBuf;
use std::sync::Arc;

fn main() -> eframe::Result<()> {
    folio_studio_lib::init_logging();

    let assets_dir: PathBuf = if let Ok(p) = env::var("FOLIO_ASSETS_DIR") {
        PathBuf::from(p)
    } else if cfg!(debug_assertions) {
        // dev-only sandbox
        let home = env::var("HOME").expect("HOME not set");
        PathBuf::from(home).join(".local/share/folio-studio-dev")
    } else {
        let proj = ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_ID)
            .expect("Could not determine app assets dir");
        proj.data_dir().to_path_buf()
    };

    // Best-effort: the app runs fine without an assets dir, images and
    // fonts just fall back.
    if let Err(e) = std::fs::create_dir_all(&assets_dir) {
        tracing::warn!(error = %e, "could not create assets dir");
    }

    let state = Arc::new(folio_studio_lib::init_state());
    let ctx = Arc::new(AppCtx::new(assets_dir));

    eframe::run_native(
        "Folio Studio",
        eframe::NativeOptions::default(),
        Box::new(move |cc| {
            // Fire-and-forget resource setup; the data model never
            // depends on either succeeding.
            egui_extras::install_image_loaders(&cc.egui_ctx);
            ui::theme::install_theme_best_effort(&cc.egui_ctx, ctx.as_ref());
            Ok(Box::new(ui::UiApp::new(state.clone(), ctx.clone())))
        }),
    )
}
