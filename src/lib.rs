// src/lib.rs

pub mod command;
pub mod command_state;
pub mod context;
pub mod error;
pub mod media;
pub mod template;
pub mod types;

use std::sync::Mutex;
use std::sync::Once;

use crate::types::AppState;

static INIT_LOGGING: Once = Once::new();

/// Installs the global tracing subscriber. Safe to call more than once.
pub fn init_logging() {
    INIT_LOGGING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::from_default_env()
            .add_directive("folio_studio_lib=info".parse().expect("static directive"));

        fmt().with_env_filter(filter).init();
    });
}

/// Fresh session state: no record, first template, editing mode.
pub fn init_state() -> AppState {
    AppState {
        record: Mutex::new(None),
        template: Mutex::new(Default::default()),
        display_mode: Mutex::new(Default::default()),
    }
}

impl AppState {
    pub fn new_for_tests() -> Self {
        crate::init_state()
    }
}
