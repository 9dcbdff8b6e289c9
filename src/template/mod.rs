// src/template/mod.rs

pub mod full_layout;
pub mod summary_card;

use crate::media::ImageProbe;
use crate::types::Record;

/// The profile link slots a record may carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkKind {
    Linkedin,
    Github,
    Website,
    Twitter,
}

impl LinkKind {
    pub fn label(self) -> &'static str {
        match self {
            LinkKind::Linkedin => "LinkedIn",
            LinkKind::Github => "GitHub",
            LinkKind::Website => "Website",
            LinkKind::Twitter => "Twitter",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkRef {
    pub kind: LinkKind,
    pub url: String,
}

/// Only the links whose URLs are non-empty, in fixed slot order. Absent
/// links are omitted from the view model entirely, never rendered as
/// empty widgets.
pub fn profile_links(record: &Record) -> Vec<LinkRef> {
    let slots = [
        (LinkKind::Linkedin, &record.linkedin),
        (LinkKind::Github, &record.github),
        (LinkKind::Website, &record.website),
        (LinkKind::Twitter, &record.twitter),
    ];

    slots
        .into_iter()
        .filter_map(|(kind, url)| {
            opt_field(url).map(|url| LinkRef {
                kind,
                url,
            })
        })
        .collect()
}

/// Where the avatar pixels come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AvatarSource {
    /// Verified-available profile image reference.
    Image(String),
    /// Generated placeholder keyed by the display initial.
    Placeholder(char),
}

/// Uppercased first character of the name; `'?'` when the name is empty.
pub fn initial_glyph(name: &str) -> char {
    name.trim()
        .chars()
        .next()
        .and_then(|c| c.to_uppercase().next())
        .unwrap_or('?')
}

/// One-time substitution, not a retry loop: if the reference is empty or
/// the probe cannot find it, the generated placeholder stands in.
pub fn resolve_avatar(record: &Record, probe: &dyn ImageProbe) -> AvatarSource {
    let reference = record.profile_image.trim();
    if !reference.is_empty() && probe.is_available(reference) {
        AvatarSource::Image(reference.to_string())
    } else {
        AvatarSource::Placeholder(initial_glyph(&record.name))
    }
}

/// Trimmed, empty-is-absent view of an optional field.
pub(crate) fn opt_field(s: &str) -> Option<String> {
    let t = s.trim();
    if t.is_empty() {
        None
    } else {
        Some(t.to_string())
    }
}

/// Character-boundary-safe preview with a `…` suffix when truncated.
pub(crate) fn truncate_preview(s: &str, max_chars: usize) -> String {
    let mut out = String::new();
    for (i, c) in s.chars().enumerate() {
        if i == max_chars {
            out.push('…');
            return out;
        }
        out.push(c);
    }
    out
}

// ======================================================
// Unit Tests
// ======================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::NoImages;

    struct AlwaysAvailable;
    impl ImageProbe for AlwaysAvailable {
        fn is_available(&self, _reference: &str) -> bool {
            true
        }
    }

    #[test]
    fn initial_glyph_uppercases_first_char_and_defaults_to_question_mark() {
        assert_eq!(initial_glyph("ada lovelace"), 'A');
        assert_eq!(initial_glyph("  grace"), 'G');
        assert_eq!(initial_glyph(""), '?');
        assert_eq!(initial_glyph("   "), '?');
    }

    #[test]
    fn profile_links_keeps_only_non_empty_slots_in_order() {
        let record = Record {
            github: "https://github.com/ada".to_string(),
            twitter: "@ada".to_string(),
            ..Record::default()
        };

        let links = profile_links(&record);
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].kind, LinkKind::Github);
        assert_eq!(links[1].kind, LinkKind::Twitter);
    }

    #[test]
    fn avatar_falls_back_to_placeholder_when_probe_fails() {
        let record = Record {
            name: "Ada".to_string(),
            profile_image: "avatar.png".to_string(),
            ..Record::default()
        };

        assert_eq!(
            resolve_avatar(&record, &NoImages),
            AvatarSource::Placeholder('A')
        );
        assert_eq!(
            resolve_avatar(&record, &AlwaysAvailable),
            AvatarSource::Image("avatar.png".to_string())
        );
    }

    #[test]
    fn avatar_with_empty_name_and_no_image_keys_on_question_mark() {
        let record = Record::default();
        assert_eq!(
            resolve_avatar(&record, &AlwaysAvailable),
            AvatarSource::Placeholder('?')
        );
    }

    #[test]
    fn truncate_preview_is_char_boundary_safe() {
        assert_eq!(truncate_preview("héllo wörld", 5), "héllo…");
        assert_eq!(truncate_preview("short", 10), "short");
        assert_eq!(truncate_preview("exact", 5), "exact");
    }
}
