// src/template/full_layout.rs

use crate::media::ImageProbe;
use crate::types::{Record, TemplateId};

use super::{opt_field, profile_links, resolve_avatar, AvatarSource, LinkRef};

/// Header block shared by both layout variants.
#[derive(Clone, Debug, PartialEq)]
pub struct HeaderView {
    pub avatar: AvatarSource,
    pub name: String,
    pub title: String,
    pub location: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub links: Vec<LinkRef>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExperienceView {
    pub title: String,
    pub company: String,
    pub dates: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EducationView {
    pub degree: String,
    pub institution: String,
    pub dates: String,
    pub description: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProjectView {
    pub name: String,
    pub description: String,
    pub technologies: Option<String>,
    pub url: Option<String>,
    pub repo: Option<String>,
}

/// Everything a full-layout panel needs, inclusion filter already
/// applied. The variant tag switches visual grouping downstream and
/// nothing else; both variants receive identical data.
#[derive(Clone, Debug, PartialEq)]
pub struct FullLayout {
    pub variant: TemplateId,
    pub header: HeaderView,
    pub about: Option<String>,
    /// `None` when the skills sequence is empty: the section is omitted.
    pub skills: Option<Vec<String>>,
    /// Empty vector means the section is omitted entirely.
    pub experience: Vec<ExperienceView>,
    pub education: Vec<EducationView>,
    pub projects: Vec<ProjectView>,
}

pub fn build_full_layout(record: &Record, variant: TemplateId, probe: &dyn ImageProbe) -> FullLayout {
    let header = HeaderView {
        avatar: resolve_avatar(record, probe),
        name: record.name.trim().to_string(),
        title: record.title.trim().to_string(),
        location: opt_field(&record.location),
        email: opt_field(&record.email),
        phone: opt_field(&record.phone),
        links: profile_links(record),
    };

    let skills = if record.skills.is_empty() {
        None
    } else {
        Some(record.skills.clone())
    };

    let experience = record
        .experience
        .iter()
        .map(|e| ExperienceView {
            title: e.title.clone(),
            company: e.company.clone(),
            dates: e.dates.clone(),
            description: e.description.clone(),
        })
        .collect();

    let education = record
        .education
        .iter()
        .map(|e| EducationView {
            degree: e.degree.clone(),
            institution: e.institution.clone(),
            dates: e.dates.clone(),
            description: opt_field(&e.description),
        })
        .collect();

    let projects = record
        .projects
        .iter()
        .map(|p| ProjectView {
            name: p.name.clone(),
            description: p.description.clone(),
            technologies: opt_field(&p.technologies),
            url: opt_field(&p.url),
            repo: opt_field(&p.repo),
        })
        .collect();

    FullLayout {
        variant,
        header,
        about: opt_field(&record.bio),
        skills,
        experience,
        education,
        projects,
    }
}

// ======================================================
// Unit Tests
// ======================================================
