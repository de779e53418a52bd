use assert_matches::assert_matches;

use pattern_hub::domain::{PaperSource, PathLevel, SessionStatus};
use pattern_hub::error::HubError;

#[test]
fn parse_paper_source_names_and_aliases() {
    let source: PaperSource = "complexity-digest".parse().unwrap();
    assert_eq!(source, PaperSource::ComplexityDigest);
    let source: PaperSource = "complexity".parse().unwrap();
    assert_eq!(source, PaperSource::ComplexityDigest);
    let source: PaperSource = "ai-science".parse().unwrap();
    assert_eq!(source, PaperSource::AiScience);
    let source: PaperSource = "arxiv".parse().unwrap();
    assert_eq!(source, PaperSource::Arxiv);
    let source: PaperSource = "user".parse().unwrap();
    assert_eq!(source, PaperSource::UserSubmitted);
}

#[test]
fn parse_paper_source_invalid() {
    let err = "biorxiv".parse::<PaperSource>().unwrap_err();
    assert_matches!(err, HubError::InvalidPaperSource(_));
}

#[test]
fn parse_level_english_and_localized() {
    let level: PathLevel = "beginner".parse().unwrap();
    assert_eq!(level, PathLevel::Beginner);
    let level: PathLevel = "专家".parse().unwrap();
    assert_eq!(level, PathLevel::Expert);

    let err = "guru".parse::<PathLevel>().unwrap_err();
    assert_matches!(err, HubError::InvalidLevel(_));
}

#[test]
fn enums_serialize_lowercase() {
    assert_eq!(
        serde_json::to_string(&PathLevel::Intermediate).unwrap(),
        r#""intermediate""#
    );
    assert_eq!(
        serde_json::to_string(&SessionStatus::Ended).unwrap(),
        r#""ended""#
    );
    assert_eq!(
        serde_json::to_string(&PaperSource::UserSubmitted).unwrap(),
        r#""user-submitted""#
    );
}

#[test]
fn level_labels_match_portal_wording() {
    assert_eq!(PathLevel::Beginner.label(), "入门");
    assert_eq!(PathLevel::Intermediate.label(), "进阶");
    assert_eq!(PathLevel::Expert.label(), "专家");
}
