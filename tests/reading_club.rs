use chrono::{Duration, Local};
use serde_json::json;

use pattern_hub::domain::SessionStatus;
use pattern_hub::normalize::CDN_BASE;
use pattern_hub::reading_club::{RawStudyGroup, normalize_study_group};

fn group(value: serde_json::Value) -> RawStudyGroup {
    serde_json::from_value(value).unwrap()
}

#[test]
fn stage_codes_map_to_status() {
    let session = normalize_study_group(group(json!({
        "id": 1, "name": "读书会", "stage": 0, "start_date": "2030-01-01"
    })));
    assert_eq!(session.status, SessionStatus::New);
    assert_eq!(session.status_label, "上新");

    let session = normalize_study_group(group(json!({
        "id": 2, "name": "读书会", "stage": 2, "start_date": "2020-01-01"
    })));
    assert_eq!(session.status, SessionStatus::Ended);
    assert_eq!(session.status_label, "已结束");
}

#[test]
fn unrecognized_stage_defaults_to_running() {
    let session = normalize_study_group(group(json!({
        "id": 3, "name": "读书会", "stage": 7, "start_date": "2020-01-01"
    })));
    assert_eq!(session.status, SessionStatus::Running);
    assert_eq!(session.status_label, "进行中");

    let session = normalize_study_group(group(json!({
        "id": 4, "name": "读书会", "start_date": "2020-01-01"
    })));
    assert_eq!(session.status, SessionStatus::Running);
}

#[test]
fn countdown_counts_down_only_for_upcoming_sessions() {
    let start = (Local::now().date_naive() + Duration::days(5))
        .format("%Y-%m-%d")
        .to_string();
    let session = normalize_study_group(group(json!({
        "id": 5, "name": "即将上新", "stage": 0, "start_date": start
    })));
    assert_eq!(session.countdown, "5 天后");

    let past = (Local::now().date_naive() - Duration::days(5))
        .format("%Y-%m-%d")
        .to_string();
    let session = normalize_study_group(group(json!({
        "id": 6, "name": "已开播", "stage": 0, "start_date": past
    })));
    assert_eq!(session.countdown, "直播进行中");

    let session = normalize_study_group(group(json!({
        "id": 7, "name": "进行中", "stage": 1, "start_date": "2030-01-01"
    })));
    assert_eq!(session.countdown, "直播进行中");
}

#[test]
fn date_range_spans_issue_count_weeks() {
    let session = normalize_study_group(group(json!({
        "id": 8,
        "name": "十期读书会",
        "stage": 1,
        "start_date": "2025-12-07",
        "issues_total": 10
    })));
    assert_eq!(session.date_range, "起止时间:2025.12.07~2026.02");
    assert_eq!(session.cohort_info, "共10期");
}

#[test]
fn weekly_schedule_combines_weekday_and_times() {
    let session = normalize_study_group(group(json!({
        "id": 9,
        "name": "周四晚间",
        "stage": 1,
        "start_date": "2025-10-09",
        "day_number": 4,
        "start_time": "19:30:00",
        "end_time": "21:30:00"
    })));
    assert_eq!(session.weekly_schedule, "每周四 19:30~21:30");

    let session = normalize_study_group(group(json!({
        "id": 10, "name": "未排期", "stage": 1, "start_date": "2025-10-09"
    })));
    assert_eq!(session.weekly_schedule, "每周 --:--~--:--");
}

#[test]
fn subject_and_tags_split_into_tags_and_hashtags() {
    let session = normalize_study_group(group(json!({
        "id": 11,
        "name": "意识科学",
        "stage": 1,
        "start_date": "2025-11-14",
        "subject": {"name": "神经科学"},
        "tags": ["#信息整合", "#因果涌现", 3]
    })));
    assert_eq!(session.tags, vec!["神经科学"]);
    assert_eq!(session.hashtags, vec!["#信息整合", "#因果涌现"]);
}

#[test]
fn cover_resolves_and_link_is_constructed() {
    let session = normalize_study_group(group(json!({
        "id": 12,
        "name": "封面",
        "stage": 1,
        "start_date": "2025-11-14",
        "image": "groups/cover.png",
        "participants_count": 205
    })));
    assert_eq!(session.cover, format!("{CDN_BASE}groups/cover.png"));
    assert_eq!(session.link, "https://pattern.swarma.org/study_groups/12");
    assert_eq!(session.members_info, "205位会友");
}

#[test]
fn blank_summary_reads_as_absent() {
    let session = normalize_study_group(group(json!({
        "id": 13, "name": "无简介", "stage": 1, "start_date": "2025-11-14", "summary": "  "
    })));
    assert!(session.summary.is_none());

    let session = normalize_study_group(group(json!({
        "id": 14, "name": "有简介", "stage": 1, "start_date": "2025-11-14", "summary": "跨学科路线"
    })));
    assert_eq!(session.summary.as_deref(), Some("跨学科路线"));
}
