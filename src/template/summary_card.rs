// src/template/summary_card.rs

use crate::media::ImageProbe;
use crate::types::Record;

use super::{opt_field, profile_links, resolve_avatar, truncate_preview, AvatarSource, LinkRef};

/// Bio preview length on the card; roughly two lines.
pub const BIO_PREVIEW_MAX_CHARS: usize = 160;

/// The compact card shown right after submit. One layout regardless of
/// the selected template.
#[derive(Clone, Debug, PartialEq)]
pub struct SummaryCard {
    pub avatar: AvatarSource,
    pub name: String,
    pub title: String,
    pub bio_preview: Option<String>,
    pub links: Vec<LinkRef>,
}

pub fn build_summary_card(record: &Record, probe: &dyn ImageProbe) -> SummaryCard {
    SummaryCard {
        avatar: resolve_avatar(record, probe),
        name: record.name.trim().to_string(),
        title: record.title.trim().to_string(),
        bio_preview: opt_field(&record.bio).map(|b| truncate_preview(&b, BIO_PREVIEW_MAX_CHARS)),
        links: profile_links(record),
    }
}

// ======================================================
// Unit Tests
// ======================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::NoImages;
    use crate::template::LinkKind;

    #[test]
    fn empty_record_card_has_placeholder_and_nothing_else() {
        let card = build_summary_card(&Record::default(), &NoImages);

        assert_eq!(card.avatar, AvatarSource::Placeholder('?'));
        assert!(card.name.is_empty());
        assert!(card.title.is_empty());
        assert!(card.bio_preview.is_none());
        assert!(card.links.is_empty());
    }

    #[test]
    fn long_bio_is_truncated_with_ellipsis() {
        let record = Record {
            bio: "x".repeat(400),
            ..Record::default()
        };

        let card = build_summary_card(&record, &NoImages);
        let preview = card.bio_preview.expect("preview");
        assert_eq!(preview.chars().count(), BIO_PREVIEW_MAX_CHARS + 1);
        assert!(preview.ends_with('…'));
    }

    #[test]
    fn whitespace_only_bio_is_absent_not_empty() {
        let record = Record {
            bio: "   ".to_string(),
            ..Record::default()
        };

        let card = build_summary_card(&record, &NoImages);
        assert!(card.bio_preview.is_none());
    }

    #[test]
    fn card_links_mirror_the_non_empty_profile_urls() {
        let record = Record {
            name: "Ada".to_string(),
            website: "https://ada.dev".to_string(),
            ..Record::default()
        };

        let card = build_summary_card(&record, &NoImages);
        assert_eq!(card.links.len(), 1);
        assert_eq!(card.links[0].kind, LinkKind::Website);
        assert_eq!(card.links[0].url, "https://ada.dev");
    }
}
