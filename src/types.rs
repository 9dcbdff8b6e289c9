// src/types.rs

use std::sync::Mutex;

use serde::{Deserialize, Serialize};

/// Which of the two full-layout presentations consumes the record.
/// Selection only ever changes visual grouping, never which data is shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemplateId {
    #[default]
    Modern,
    Classic,
}

impl TemplateId {
    pub const ALL: [TemplateId; 2] = [TemplateId::Modern, TemplateId::Classic];

    pub fn label(self) -> &'static str {
        match self {
            TemplateId::Modern => "Modern",
            TemplateId::Classic => "Classic",
        }
    }
}

/// Editing -> Summary (submit) -> Full (expand) -> Editing (reset).
/// Reset is the only way out of Full; there is no collapse back to Summary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisplayMode {
    #[default]
    Editing,
    Summary,
    Full,
}

/// The repeatable sub-record lists of a portfolio.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionKind {
    Experience,
    Education,
    Projects,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub dates: String,
    pub description: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub dates: String,
    pub description: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    // Comma-separated display string; intentionally never parsed into a list.
    pub technologies: String,
    pub url: String,
    pub repo: String,
}

/// The normalized, submitted snapshot of portfolio data.
///
/// Constructed wholesale by `command::draft::normalize` when the editor
/// submits; destroyed by `command::reset_record`. Entry order of the
/// sub-record lists is user order and is meaningful for display.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub bio: String,
    pub profile_image: String,

    pub linkedin: String,
    pub github: String,
    pub website: String,
    pub twitter: String,

    pub skills: Vec<String>,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub projects: Vec<Project>,
}

pub struct AppState {
    // at most one submitted record at a time
    pub record: Mutex<Option<Record>>,
    pub template: Mutex<TemplateId>,
    pub display_mode: Mutex<DisplayMode>,
}
