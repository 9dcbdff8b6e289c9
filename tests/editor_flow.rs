// tests/editor_flow.rs

mod common;

use folio_studio_lib::command::draft::{
    self as ops, Draft, EntryField, ExperienceField, ProjectField, ScalarField,
};
use folio_studio_lib::types::SectionKind;

#[test]
fn skills_normalization_matches_the_documented_example() {
    let mut d = Draft::default();
    ops::set_scalar(&mut d, ScalarField::Skills, " React, , Node.js ,Node.js");

    let record = ops::normalize(&d);
    assert_eq!(record.skills, vec!["React", "Node.js", "Node.js"]);
}

#[test]
fn skills_parse_round_trips_through_a_comma_rejoin() {
    // Order-preserving idempotence, given no entry contains a comma.
    for raw in ["", "  ", "a", " a , b ,, c", "dup,dup , dup"] {
        let once = ops::parse_skills(raw);
        let again = ops::parse_skills(&once.join(","));
        assert_eq!(once, again, "raw input: {raw:?}");
    }
}

#[test]
fn append_then_remove_at_the_appended_position_restores_the_draft() {
    let mut d = common::sample_draft();
    let before = d.clone();

    for kind in [
        SectionKind::Experience,
        SectionKind::Education,
        SectionKind::Projects,
    ] {
        ops::append_entry(&mut d, kind);
        let appended = ops::entry_count(&d, kind) - 1;
        ops::remove_entry(&mut d, kind, appended);
    }

    assert_eq!(d, before);
}

#[test]
fn remove_in_the_middle_shifts_later_entries_down() {
    let mut d = Draft::default();
    for name in ["first", "second", "third", "fourth"] {
        ops::append_entry(&mut d, SectionKind::Projects);
        let last = ops::entry_count(&d, SectionKind::Projects) - 1;
        ops::update_entry(&mut d, last, EntryField::Project(ProjectField::Name), name);
    }

    ops::remove_entry(&mut d, SectionKind::Projects, 1);

    let names: Vec<&str> = d.projects.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["first", "third", "fourth"]);
}

#[test]
fn out_of_range_positional_operations_leave_the_draft_untouched() {
    let mut d = common::sample_draft();
    let before = d.clone();

    ops::update_entry(
        &mut d,
        99,
        EntryField::Experience(ExperienceField::Description),
        "never lands",
    );
    ops::remove_entry(&mut d, SectionKind::Experience, 99);
    // Empty-list removal on a kind with entries removed first
    let mut empty = Draft::default();
    ops::remove_entry(&mut empty, SectionKind::Education, 0);

    assert_eq!(d, before);
    assert_eq!(empty, Draft::default());
}

#[test]
fn normalize_builds_the_record_wholesale_from_the_draft() {
    let record = common::sample_record();

    assert_eq!(record.name, "Ada Lovelace");
    assert_eq!(record.skills, vec!["Rust", "egui", "analysis"]);
    assert_eq!(record.experience.len(), 1);
    assert_eq!(record.experience[0].company, "Analytical Engines Ltd");
    assert_eq!(record.education.len(), 1);
    assert_eq!(record.projects.len(), 1);
    assert_eq!(record.projects[0].repo, "https://example.org/note-g");
}

#[test]
fn technologies_stay_a_display_string() {
    let mut d = Draft::default();
    ops::append_entry(&mut d, SectionKind::Projects);
    ops::update_entry(
        &mut d,
        0,
        EntryField::Project(ProjectField::Technologies),
        "Rust, egui, serde",
    );

    let record = ops::normalize(&d);
    assert_eq!(record.projects[0].technologies, "Rust, egui, serde");
}
