// tests/render_views.rs

mod common;

use folio_studio_lib::command::draft::{self as ops, Draft};
use folio_studio_lib::media::{FsImageProbe, ImageProbe, NoImages};
use folio_studio_lib::template::full_layout::build_full_layout;
use folio_studio_lib::template::summary_card::build_summary_card;
use folio_studio_lib::template::{AvatarSource, LinkKind};
use folio_studio_lib::types::{Record, TemplateId};
use std::io::Write as _;

#[test]
fn all_empty_submission_renders_nothing_but_the_placeholder() {
    let record = ops::normalize(&Draft::default());

    let card = build_summary_card(&record, &NoImages);
    assert_eq!(card.avatar, AvatarSource::Placeholder('?'));
    assert!(card.bio_preview.is_none());
    assert!(card.links.is_empty());

    for variant in TemplateId::ALL {
        let layout = build_full_layout(&record, variant, &NoImages);
        assert!(layout.skills.is_none());
        assert!(layout.experience.is_empty());
        assert!(layout.education.is_empty());
        assert!(layout.projects.is_empty());
        assert!(layout.about.is_none());
        assert_eq!(layout.header.avatar, AvatarSource::Placeholder('?'));
    }
}

#[test]
fn template_switch_changes_grouping_not_inclusion() {
    let record = common::sample_record();

    let modern = build_full_layout(&record, TemplateId::Modern, &NoImages);
    let classic = build_full_layout(&record, TemplateId::Classic, &NoImages);

    assert_ne!(modern.variant, classic.variant);

    // Identical inclusion-filter outcome on identical data.
    assert_eq!(modern.header, classic.header);
    assert_eq!(modern.about, classic.about);
    assert_eq!(modern.skills, classic.skills);
    assert_eq!(modern.experience, classic.experience);
    assert_eq!(modern.education, classic.education);
    assert_eq!(modern.projects, classic.projects);
}

#[test]
fn summary_card_shows_only_populated_links() {
    let record = common::sample_record();

    let card = build_summary_card(&record, &NoImages);
    assert_eq!(card.links.len(), 1);
    assert_eq!(card.links[0].kind, LinkKind::Github);
}

#[test]
fn avatar_uses_the_image_only_when_the_probe_finds_it() {
    let td = tempfile::tempdir().expect("tempdir");
    let path = td.path().join("ada.png");
    let mut f = std::fs::File::create(&path).expect("create");
    f.write_all(b"pixels").expect("write");

    let probe = FsImageProbe::new(td.path().to_path_buf());
    assert!(probe.is_available("ada.png"));

    let mut record = common::sample_record();
    record.profile_image = "ada.png".to_string();

    let card = build_summary_card(&record, &probe);
    assert_eq!(card.avatar, AvatarSource::Image("ada.png".to_string()));

    // Same record, probe that cannot find the file: one-time fallback to
    // the generated placeholder keyed by the name initial.
    let card = build_summary_card(&record, &NoImages);
    assert_eq!(card.avatar, AvatarSource::Placeholder('A'));
}

#[test]
fn education_description_and_project_urls_are_conditional() {
    let record = common::sample_record();
    let layout = build_full_layout(&record, TemplateId::Modern, &NoImages);

    // sample data leaves these blank
    assert!(layout.education[0].description.is_none());
    assert!(layout.projects[0].url.is_none());
    assert!(layout.projects[0].technologies.is_none());
    // and fills these
    assert_eq!(
        layout.projects[0].repo.as_deref(),
        Some("https://example.org/note-g")
    );
}

#[test]
fn skills_section_is_omitted_exactly_when_empty() {
    let mut record = Record::default();
    assert!(build_full_layout(&record, TemplateId::Classic, &NoImages)
        .skills
        .is_none());

    record.skills = vec!["Rust".to_string()];
    assert_eq!(
        build_full_layout(&record, TemplateId::Classic, &NoImages).skills,
        Some(vec!["Rust".to_string()])
    );
}
