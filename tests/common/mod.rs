// tests/common/mod.rs

#![allow(dead_code)]

use folio_studio_lib::command::draft::{self as ops, Draft, EntryField, ExperienceField};
use folio_studio_lib::command::draft::{EducationField, ProjectField, ScalarField};
use folio_studio_lib::types::{AppState, Record, SectionKind};

pub fn fresh_state() -> AppState {
    AppState::new_for_tests()
}

/// A draft with every section populated, built through the editor
/// operations (not struct literals) so the tests walk the same path the
/// UI does.
pub fn sample_draft() -> Draft {
    let mut d = Draft::default();

    ops::set_scalar(&mut d, ScalarField::Name, "Ada Lovelace");
    ops::set_scalar(&mut d, ScalarField::Title, "Systems Engineer");
    ops::set_scalar(&mut d, ScalarField::Email, "ada@example.org");
    ops::set_scalar(&mut d, ScalarField::Location, "London");
    ops::set_scalar(&mut d, ScalarField::Bio, "Writes notes on engines.");
    ops::set_scalar(&mut d, ScalarField::Github, "https://github.com/ada");
    ops::set_scalar(&mut d, ScalarField::Skills, "Rust, egui, analysis");

    ops::append_entry(&mut d, SectionKind::Experience);
    ops::update_entry(
        &mut d,
        0,
        EntryField::Experience(ExperienceField::Title),
        "Engineer",
    );
    ops::update_entry(
        &mut d,
        0,
        EntryField::Experience(ExperienceField::Company),
        "Analytical Engines Ltd",
    );
    ops::update_entry(
        &mut d,
        0,
        EntryField::Experience(ExperienceField::Dates),
        "1837 — 1843",
    );

    ops::append_entry(&mut d, SectionKind::Education);
    ops::update_entry(
        &mut d,
        0,
        EntryField::Education(EducationField::Degree),
        "Private tuition",
    );
    ops::update_entry(
        &mut d,
        0,
        EntryField::Education(EducationField::Institution),
        "Home study",
    );

    ops::append_entry(&mut d, SectionKind::Projects);
    ops::update_entry(
        &mut d,
        0,
        EntryField::Project(ProjectField::Name),
        "Note G",
    );
    ops::update_entry(
        &mut d,
        0,
        EntryField::Project(ProjectField::Repo),
        "https://example.org/note-g",
    );

    d
}

pub fn sample_record() -> Record {
    ops::normalize(&sample_draft())
}
