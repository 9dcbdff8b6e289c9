// src/command/store.rs

use crate::command_state::{lock_display_mode, lock_record, lock_template};
use crate::error::{AppError, AppResult};
use crate::types::{AppState, DisplayMode, Record, TemplateId};

/// Snapshot of the store for per-frame route derivation.
#[derive(Clone, Copy, Debug)]
pub struct StoreStatus {
    pub has_record: bool,
    pub template: TemplateId,
    pub display_mode: DisplayMode,
}

pub fn get_status(state: &AppState) -> AppResult<StoreStatus> {
    let has_record = lock_record(state)?.is_some();
    let template = *lock_template(state)?;
    let display_mode = *lock_display_mode(state)?;

    Ok(StoreStatus {
        has_record,
        template,
        display_mode,
    })
}

/// Stores the submitted record and forces the display mode to Summary.
/// No validation: any field combination, including all-empty, is accepted.
pub fn submit_record(record: Record, state: &AppState) -> AppResult<()> {
    {
        let mut guard = lock_record(state)?;
        *guard = Some(record);
    }
    {
        let mut mode = lock_display_mode(state)?;
        *mode = DisplayMode::Summary;
    }

    tracing::info!("portfolio record submitted");
    Ok(())
}

/// Updates the selected template. Legal in every display mode, record
/// present or not; takes effect on the next render.
pub fn select_template(id: TemplateId, state: &AppState) -> AppResult<()> {
    let mut guard = lock_template(state)?;
    if *guard != id {
        tracing::info!(template = id.label(), "template selected");
    }
    *guard = id;
    Ok(())
}

/// Switches the display mode to Full. Silent no-op when no record is
/// present (there is nothing to expand).
pub fn expand_view(state: &AppState) -> AppResult<()> {
    if lock_record(state)?.is_none() {
        return Ok(());
    }

    let mut mode = lock_display_mode(state)?;
    *mode = DisplayMode::Full;

    tracing::info!("expanded to full layout");
    Ok(())
}

/// Clears the record and returns the display mode to Editing. The caller
/// (UI) is responsible for blanking its draft on re-entry to the editor.
pub fn reset_record(state: &AppState) -> AppResult<()> {
    {
        let mut guard = lock_record(state)?;
        *guard = None;
    }
    {
        let mut mode = lock_display_mode(state)?;
        *mode = DisplayMode::Editing;
    }

    tracing::info!("portfolio record discarded");
    Ok(())
}

/// Clone of the current record, for the render panels.
pub fn record_snapshot(state: &AppState) -> AppResult<Record> {
    lock_record(state)?
        .clone()
        .ok_or(AppError::NoRecordSubmitted)
}

// ======================================================
// Unit Tests
// ======================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::init_state;

    #[test]
    fn initial_status_is_editing_without_record() {
        let state = init_state();
        let st = get_status(&state).unwrap();
        assert!(!st.has_record);
        assert_eq!(st.template, TemplateId::Modern);
        assert_eq!(st.display_mode, DisplayMode::Editing);
    }

    #[test]
    fn submit_forces_summary_mode() {
        let state = init_state();
        submit_record(Record::default(), &state).unwrap();

        let st = get_status(&state).unwrap();
        assert!(st.has_record);
        assert_eq!(st.display_mode, DisplayMode::Summary);
    }

    #[test]
    fn expand_without_record_is_a_no_op() {
        let state = init_state();
        expand_view(&state).unwrap();
        assert_eq!(
            get_status(&state).unwrap().display_mode,
            DisplayMode::Editing
        );
    }

    #[test]
    fn select_template_works_without_record() {
        let state = init_state();
        select_template(TemplateId::Classic, &state).unwrap();
        assert_eq!(get_status(&state).unwrap().template, TemplateId::Classic);
    }

    #[test]
    fn record_snapshot_without_record_errors() {
        let state = init_state();
        let err = record_snapshot(&state).unwrap_err();
        assert!(matches!(err, AppError::NoRecordSubmitted));
    }
}
