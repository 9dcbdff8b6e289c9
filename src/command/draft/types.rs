// src/command/draft/types.rs

use crate::types::{Education, Experience, Project};

/// The in-progress, not-yet-submitted form state.
///
/// Same shape as `Record` except `skills` is the raw comma-separated
/// string the user is typing; it is split into a sequence only at
/// normalization time. The sub-record lists are stored structurally and
/// need no transformation on submit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Draft {
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

    pub skills: String,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub projects: Vec<Project>,
}

/// Every scalar field of the draft, for field-level replacement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScalarField {
    Name,
    Title,
    Email,
    Phone,
    Location,
    Bio,
    ProfileImage,
    Linkedin,
    Github,
    Website,
    Twitter,
    Skills,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExperienceField {
    Title,
    Company,
    Dates,
    Description,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EducationField {
    Degree,
    Institution,
    Dates,
    Description,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectField {
    Name,
    Description,
    Technologies,
    Url,
    Repo,
}

/// One sub-record field, tagged by list kind. The kind a positional
/// update applies to is implied by the variant, so an update can never
/// address the wrong list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryField {
    Experience(ExperienceField),
    Education(EducationField),
    Project(ProjectField),
}
