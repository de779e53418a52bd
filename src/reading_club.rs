use std::time::Duration;

use chrono::{Duration as ChronoDuration, Local, NaiveDate};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use crate::domain::{ReadingClubSession, SessionStatus};
use crate::error::HubError;
use crate::normalize::{PORTAL_BASE, parse_flexible_date, resolve_asset_url};
use crate::pager::{Page, collect_pages};

pub const PER_PAGE: u32 = 50;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSubject {
    #[serde(default)]
    pub name: String,
}

/// Raw record of the paginated `study_groups` listing.
#[derive(Debug, Clone, Deserialize)]
pub struct RawStudyGroup {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub stage: Option<i64>,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
    #[serde(default)]
    pub day_number: Option<u32>,
    #[serde(default)]
    pub issues_total: Option<u32>,
    #[serde(default)]
    pub participants_count: Option<u64>,
    #[serde(default)]
    pub subject: Option<RawSubject>,
    #[serde(default)]
    pub tags: Option<Vec<Value>>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub image: String,
}

pub trait StudyGroupsClient: Send + Sync {
    /// Every study group, across all pages.
    fn fetch_all(&self) -> Result<Vec<RawStudyGroup>, HubError>;
}

#[derive(Clone)]
pub struct StudyGroupsHttpClient {
    client: Client,
    base_url: String,
}

impl StudyGroupsHttpClient {
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, HubError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&format!("pattern-hub/{}", env!("CARGO_PKG_VERSION")))
                .map_err(|err| HubError::StudyGroupsHttp(err.to_string()))?,
        );
        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|err| HubError::StudyGroupsHttp(err.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn fetch_page(&self, page: u32) -> Result<Page<RawStudyGroup>, HubError> {
        let url = format!("{}/study_groups", self.base_url);
        info!(page, "fetching study_groups page");
        let response = self
            .client
            .get(&url)
            .query(&[("page", page), ("per_page", PER_PAGE)])
            .send()
            .map_err(|err| HubError::StudyGroupsHttp(err.to_string()))?;
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .unwrap_or_else(|_| "study_groups request failed".to_string());
            return Err(HubError::StudyGroupsStatus { status, message });
        }
        response
            .json()
            .map_err(|err| HubError::StudyGroupsHttp(err.to_string()))
    }
}

impl StudyGroupsClient for StudyGroupsHttpClient {
    fn fetch_all(&self) -> Result<Vec<RawStudyGroup>, HubError> {
        collect_pages(|page| self.fetch_page(page), None)
    }
}

/// Status badge for an upstream stage code. Unrecognized codes read as
/// running.
pub fn stage_status(code: i64) -> (&'static str, SessionStatus) {
    match code {
        0 => ("上新", SessionStatus::New),
        2 => ("已结束", SessionStatus::Ended),
        _ => ("进行中", SessionStatus::Running),
    }
}

/// Localized weekday for the 1–7 schedule code.
pub fn weekday_label(code: Option<u32>) -> &'static str {
    match code {
        Some(1) => "周一",
        Some(2) => "周二",
        Some(3) => "周三",
        Some(4) => "周四",
        Some(5) => "周五",
        Some(6) => "周六",
        Some(7) => "周日",
        _ => "周",
    }
}

/// HH:MM slice of an upstream time-of-day string.
pub fn format_clock(time: &str) -> String {
    let trimmed = time.trim();
    if trimmed.is_empty() {
        return "--:--".to_string();
    }
    trimmed.get(..5).unwrap_or(trimmed).to_string()
}

/// Maps one raw study group to a [`ReadingClubSession`].
///
/// The run is estimated to end `issues_total` weeks after the start date; the
/// countdown only counts down for not-yet-started sessions.
pub fn normalize_study_group(record: RawStudyGroup) -> ReadingClubSession {
    let (status_label, status) = stage_status(record.stage.unwrap_or(1));
    let start = parse_flexible_date(&record.start_date)
        .unwrap_or_else(|| Local::now().date_naive());
    let issues = record.issues_total.unwrap_or(0);
    let countdown = countdown_text(status, start);
    let estimated_end = start + ChronoDuration::weeks(i64::from(issues));

    let tags = record
        .subject
        .as_ref()
        .map(|subject| subject.name.trim())
        .filter(|name| !name.is_empty())
        .map(|name| vec![name.to_string()])
        .unwrap_or_default();
    let hashtags = record
        .tags
        .as_deref()
        .unwrap_or_default()
        .iter()
        .filter_map(|tag| tag.as_str())
        .map(str::to_string)
        .collect();

    ReadingClubSession {
        id: record.id.to_string(),
        title: record.name,
        countdown,
        cohort_info: format!("共{issues}期"),
        members_info: format!("{}位会友", record.participants_count.unwrap_or(0)),
        date_range: format!(
            "起止时间:{}~{}",
            start.format("%Y.%m.%d"),
            estimated_end.format("%Y.%m")
        ),
        weekly_schedule: format!(
            "每{} {}~{}",
            weekday_label(record.day_number),
            format_clock(&record.start_time),
            format_clock(&record.end_time)
        ),
        tags,
        hashtags,
        summary: record.summary.filter(|summary| !summary.trim().is_empty()),
        cover: resolve_asset_url(&record.image),
        link: format!("{PORTAL_BASE}/study_groups/{}", record.id),
        status_label: status_label.to_string(),
        status,
    }
}

fn countdown_text(status: SessionStatus, start: NaiveDate) -> String {
    let days_until = (start - Local::now().date_naive()).num_days();
    if status == SessionStatus::New && days_until > 0 {
        format!("{days_until} 天后")
    } else {
        "直播进行中".to_string()
    }
}
