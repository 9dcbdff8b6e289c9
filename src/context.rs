// src/context.rs

use std::path::PathBuf;

pub const APP_QUALIFIER: &str = "dev";
pub const APP_ORG: &str = "folio";
pub const APP_ID: &str = "folio-studio";

pub const FONTS_DIR: &str = "fonts";
pub const BODY_FONT_FILE: &str = "body.ttf";

#[derive(Debug)]
pub struct AppCtx {
    /// Root directory for optional assets: profile images, fonts.
    pub assets_dir: PathBuf,
    pub debug_ui: bool,
}

impl AppCtx {
    pub fn new(assets_dir: PathBuf) -> Self {
        let debug_ui = std::env::var("FOLIO_DEBUG")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Self {
            assets_dir,
            debug_ui,
        }
    }

    /// <assets>/fonts/body.ttf
    pub fn body_font_path(&self) -> PathBuf {
        self.assets_dir.join(FONTS_DIR).join(BODY_FONT_FILE)
    }
}
