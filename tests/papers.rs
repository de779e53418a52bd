use serde_json::json;

use pattern_hub::normalize::CDN_BASE;
use pattern_hub::papers::{ApiPaper, UserPaper, normalize_api_paper, normalize_user_paper};

fn api_paper(value: serde_json::Value) -> ApiPaper {
    serde_json::from_value(value).unwrap()
}

fn user_paper(value: serde_json::Value) -> UserPaper {
    serde_json::from_value(value).unwrap()
}

#[test]
fn authors_accept_string_or_array() {
    let paper = normalize_api_paper(api_paper(json!({
        "uuid": "p1",
        "title": "Scaling laws",
        "authors": "Alice, , Bob",
        "submitTime": "2024-05-01"
    })));
    assert_eq!(paper.authors, vec!["Alice", "Bob"]);

    let paper = normalize_api_paper(api_paper(json!({
        "uuid": "p2",
        "title": "Scaling laws",
        "authors": ["  Carol ", ""],
        "submitTime": "2024-05-01"
    })));
    assert_eq!(paper.authors, vec!["Carol"]);
}

#[test]
fn missing_authors_become_unknown() {
    let paper = normalize_api_paper(api_paper(json!({
        "uuid": "p3",
        "title": "No byline",
        "authors": null,
        "submitTime": "2024-05-01"
    })));
    assert_eq!(paper.authors, vec!["Unknown"]);
}

#[test]
fn labels_default_per_source() {
    let paper = normalize_api_paper(api_paper(json!({
        "uuid": "p4",
        "title": "Untagged",
        "labels": null,
        "submitTime": "2024-05-01"
    })));
    assert_eq!(paper.tags, vec!["复杂科学"]);

    let paper = normalize_user_paper(user_paper(json!({
        "uuid": "u1",
        "title": "Untagged",
        "labels": [],
        "submitTime": "2024-05-01"
    })));
    assert_eq!(paper.tags, vec!["用户推荐"]);
}

#[test]
fn chinese_abstract_fills_default_slot() {
    let paper = normalize_api_paper(api_paper(json!({
        "uuid": "p5",
        "title": "Bilingual",
        "abstract": "English abstract",
        "abstract_cn": "中文摘要",
        "submitTime": "2024-05-01"
    })));
    assert_eq!(paper.abstract_text, "中文摘要");
    assert_eq!(paper.abstract_en.as_deref(), Some("English abstract"));

    let paper = normalize_api_paper(api_paper(json!({
        "uuid": "p6",
        "title": "English only",
        "abstract": "English abstract",
        "submitTime": "2024-05-01"
    })));
    assert_eq!(paper.abstract_text, "English abstract");
}

#[test]
fn thumbnails_resolve_and_cap_at_seven() {
    let images: Vec<_> = (0..10).map(|n| format!("fig/{n}.png")).collect();
    let paper = normalize_api_paper(api_paper(json!({
        "uuid": "p7",
        "title": "Figures",
        "images": images,
        "submitTime": "2024-05-01"
    })));
    assert_eq!(paper.thumbnails.len(), 7);
    assert_eq!(paper.thumbnails[0], format!("{CDN_BASE}fig/0.png"));
    assert_eq!(paper.thumbnails[6], format!("{CDN_BASE}fig/6.png"));
}

#[test]
fn link_falls_back_to_portal_url() {
    let paper = normalize_api_paper(api_paper(json!({
        "uuid": "abc-123",
        "title": "No link",
        "submitTime": "2024-05-01"
    })));
    assert_eq!(paper.link, "https://pattern.swarma.org/paper/abc-123");

    let paper = normalize_api_paper(api_paper(json!({
        "uuid": "abc-123",
        "title": "Linked",
        "link": "https://arxiv.org/abs/2401.0001",
        "submitTime": "2024-05-01"
    })));
    assert_eq!(paper.link, "https://arxiv.org/abs/2401.0001");
}

#[test]
fn year_derives_from_submit_time() {
    let paper = normalize_api_paper(api_paper(json!({
        "uuid": "p8",
        "title": "Dated",
        "submitTime": "2023-11-30"
    })));
    assert_eq!(paper.year, 2023);
    assert_eq!(paper.date, "2023-11-30");
}

#[test]
fn chinese_title_backfills_missing_title() {
    let paper = normalize_api_paper(api_paper(json!({
        "uuid": "p9",
        "title": "",
        "title_cn": "中文标题",
        "submitTime": "2024-05-01"
    })));
    assert_eq!(paper.title, "中文标题");
    assert_eq!(paper.title_cn.as_deref(), Some("中文标题"));
}

#[test]
fn user_papers_land_in_fixed_domain() {
    let paper = normalize_user_paper(user_paper(json!({
        "uuid": "u2",
        "title": "Community pick",
        "authors": ["Eve"],
        "journal": "",
        "submitTime": "2024-05-01"
    })));
    assert_eq!(paper.domain, "User Recommended");
    assert!(paper.journal.is_none());
    assert!(paper.title_cn.is_none());
}

#[test]
fn empty_category_defaults_to_complex_systems() {
    let paper = normalize_api_paper(api_paper(json!({
        "uuid": "p10",
        "title": "Uncategorized",
        "category": "",
        "submitTime": "2024-05-01"
    })));
    assert_eq!(paper.domain, "Complex Systems");
}
