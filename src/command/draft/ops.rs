// src/command/draft/ops.rs

use crate::types::{Record, SectionKind};

use super::types::{
    Draft, EducationField, EntryField, ExperienceField, ProjectField, ScalarField,
};

// ======================================================
// generic positional machinery (implemented once)
// ======================================================

fn push_default<T: Default>(list: &mut Vec<T>) {
    list.push(T::default());
}

/// Out-of-range index is a no-op, not a fault.
fn remove_at<T>(list: &mut Vec<T>, index: usize) {
    if index < list.len() {
        list.remove(index);
    }
}

/// Out-of-range index is a no-op, not a fault.
fn edit_at<T>(list: &mut [T], index: usize, apply: impl FnOnce(&mut T)) {
    if let Some(entry) = list.get_mut(index) {
        apply(entry);
    }
}

// ======================================================
// editor operations (all total over the draft)
// ======================================================

/// Replaces one scalar field of the draft.
pub fn set_scalar(draft: &mut Draft, field: ScalarField, value: impl Into<String>) {
    let value = value.into();
    match field {
        ScalarField::Name => draft.name = value,
        ScalarField::Title => draft.title = value,
        ScalarField::Email => draft.email = value,
        ScalarField::Phone => draft.phone = value,
        ScalarField::Location => draft.location = value,
        ScalarField::Bio => draft.bio = value,
        ScalarField::ProfileImage => draft.profile_image = value,
        ScalarField::Linkedin => draft.linkedin = value,
        ScalarField::Github => draft.github = value,
        ScalarField::Website => draft.website = value,
        ScalarField::Twitter => draft.twitter = value,
        ScalarField::Skills => draft.skills = value,
    }
}

/// Appends one all-empty sub-record to the end of the given list.
pub fn append_entry(draft: &mut Draft, kind: SectionKind) {
    match kind {
        SectionKind::Experience => push_default(&mut draft.experience),
        SectionKind::Education => push_default(&mut draft.education),
        SectionKind::Projects => push_default(&mut draft.projects),
    }
}

/// Deletes the entry at `index`; subsequent entries shift down.
/// Removing from an empty list or out of range is a no-op.
pub fn remove_entry(draft: &mut Draft, kind: SectionKind, index: usize) {
    match kind {
        SectionKind::Experience => remove_at(&mut draft.experience, index),
        SectionKind::Education => remove_at(&mut draft.education, index),
        SectionKind::Projects => remove_at(&mut draft.projects, index),
    }
}

/// Replaces one sub-field of the entry at `index`; other positions and
/// fields are untouched. Out-of-range index is a no-op.
pub fn update_entry(draft: &mut Draft, index: usize, field: EntryField, value: impl Into<String>) {
    let value = value.into();
    match field {
        EntryField::Experience(f) => edit_at(&mut draft.experience, index, |e| match f {
            ExperienceField::Title => e.title = value,
            ExperienceField::Company => e.company = value,
            ExperienceField::Dates => e.dates = value,
            ExperienceField::Description => e.description = value,
        }),
        EntryField::Education(f) => edit_at(&mut draft.education, index, |e| match f {
            EducationField::Degree => e.degree = value,
            EducationField::Institution => e.institution = value,
            EducationField::Dates => e.dates = value,
            EducationField::Description => e.description = value,
        }),
        EntryField::Project(f) => edit_at(&mut draft.projects, index, |p| match f {
            ProjectField::Name => p.name = value,
            ProjectField::Description => p.description = value,
            ProjectField::Technologies => p.technologies = value,
            ProjectField::Url => p.url = value,
            ProjectField::Repo => p.repo = value,
        }),
    }
}

pub fn entry_count(draft: &Draft, kind: SectionKind) -> usize {
    match kind {
        SectionKind::Experience => draft.experience.len(),
        SectionKind::Education => draft.education.len(),
        SectionKind::Projects => draft.projects.len(),
    }
}

/// Splits a comma-separated skills string: trim each piece, drop empty
/// pieces, preserve the order (and duplicates) of what survives.
pub fn parse_skills(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Wholesale construction of a `Record` from the current draft state.
/// `skills` is parsed here and nowhere else; every other list is carried
/// over structurally.
pub fn normalize(draft: &Draft) -> Record {
    tracing::debug!(
        experience = draft.experience.len(),
        education = draft.education.len(),
        projects = draft.projects.len(),
        "normalizing draft"
    );

    Record {
        name: draft.name.clone(),
        title: draft.title.clone(),
        email: draft.email.clone(),
        phone: draft.phone.clone(),
        location: draft.location.clone(),
        bio: draft.bio.clone(),
        profile_image: draft.profile_image.clone(),

        linkedin: draft.linkedin.clone(),
        github: draft.github.clone(),
        website: draft.website.clone(),
        twitter: draft.twitter.clone(),

        skills: parse_skills(&draft.skills),
        experience: draft.experience.clone(),
        education: draft.education.clone(),
        projects: draft.projects.clone(),
    }
}

// ======================================================
// Unit Tests
// ======================================================
