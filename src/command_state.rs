// src/command_state.rs

use crate::{
    error::{AppError, AppResult},
    types::{AppState, DisplayMode, Record, TemplateId},
};
use std::sync::MutexGuard;

// ======================================================
// locking helpers
// ======================================================

pub fn lock_record<'a>(state: &'a AppState) -> AppResult<MutexGuard<'a, Option<Record>>> {
    state.record.lock().map_err(|_| AppError::StateLockPoisoned)
}

pub fn lock_template<'a>(state: &'a AppState) -> AppResult<MutexGuard<'a, TemplateId>> {
    state
        .template
        .lock()
        .map_err(|_| AppError::StateLockPoisoned)
}

pub fn lock_display_mode<'a>(state: &'a AppState) -> AppResult<MutexGuard<'a, DisplayMode>> {
    state
        .display_mode
        .lock()
        .map_err(|_| AppError::StateLockPoisoned)
}
