use chrono::{Local, Utc};
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use crate::domain::ResearchPaper;
use crate::error::HubError;
use crate::normalize::{
    PORTAL_BASE, TextOrList, entries_or, resolve_thumbnails, submission_date,
};
use crate::pager::{Page, collect_pages};

pub const USER_PER_PAGE: u32 = 20;

/// The user-recommendation listing is long-tailed; only the first pages are
/// worth showing.
pub const USER_PAGE_CAP: u32 = 5;

/// Digest window requested from `express/top_issue`.
pub const TOP_ISSUE_START: &str = "2024-01-01";

/// When the arxiv subset of the digest comes up empty, this many unfiltered
/// records stand in for it.
pub const ARXIV_FALLBACK_LIMIT: usize = 100;

/// Raw record of the `express/top_issue` digest.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiPaper {
    #[serde(default)]
    pub uuid: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub title_cn: String,
    #[serde(default)]
    pub authors: Option<TextOrList>,
    #[serde(default)]
    pub labels: Option<TextOrList>,
    #[serde(default)]
    pub category: String,
    #[serde(default, rename = "abstract")]
    pub abstract_text: String,
    #[serde(default)]
    pub abstract_cn: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub journal: String,
    #[serde(default, rename = "submitTime")]
    pub submit_time: String,
    #[serde(default)]
    pub images: Option<Vec<Value>>,
    #[serde(default)]
    pub like_number: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmittingUser {
    #[serde(default)]
    pub nick_name: String,
    #[serde(default)]
    pub avatar: String,
}

/// Raw record of the paginated `user_papers` listing.
#[derive(Debug, Clone, Deserialize)]
pub struct UserPaper {
    #[serde(default)]
    pub uuid: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub authors: Option<TextOrList>,
    #[serde(default)]
    pub link: String,
    #[serde(default, rename = "abstract")]
    pub abstract_text: String,
    #[serde(default)]
    pub journal: String,
    #[serde(default)]
    pub labels: Option<TextOrList>,
    #[serde(default)]
    pub images: Option<Vec<Value>>,
    #[serde(default, rename = "submitTime")]
    pub submit_time: String,
    #[serde(default)]
    pub user: Option<SubmittingUser>,
}

pub trait PapersClient: Send + Sync {
    /// The full digest listing. Non-paginated; an empty or non-array payload
    /// is reported as [`HubError::EmptyListing`].
    fn fetch_top_issue(&self) -> Result<Vec<ApiPaper>, HubError>;

    /// The user-recommendation listing, paged up to [`USER_PAGE_CAP`].
    fn fetch_user_papers(&self) -> Result<Vec<UserPaper>, HubError>;
}

#[derive(Clone)]
pub struct PapersHttpClient {
    client: Client,
    base_url: String,
}

impl PapersHttpClient {
    pub fn new(base_url: &str) -> Result<Self, HubError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&format!("pattern-hub/{}", env!("CARGO_PKG_VERSION")))
                .map_err(|err| HubError::PapersHttp(err.to_string()))?,
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|err| HubError::PapersHttp(err.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn fetch_user_page(&self, page: u32) -> Result<Page<UserPaper>, HubError> {
        let url = format!("{}/user_papers", self.base_url);
        info!(page, "fetching user_papers page");
        let response = self
            .client
            .get(&url)
            .query(&[("page", page), ("per_page", USER_PER_PAGE)])
            .send()
            .map_err(|err| HubError::PapersHttp(err.to_string()))?;
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .unwrap_or_else(|_| "user_papers request failed".to_string());
            return Err(HubError::PapersStatus { status, message });
        }
        response
            .json()
            .map_err(|err| HubError::PapersHttp(err.to_string()))
    }
}

impl PapersClient for PapersHttpClient {
    fn fetch_top_issue(&self) -> Result<Vec<ApiPaper>, HubError> {
        let url = format!("{}/express/top_issue", self.base_url);
        let end = Local::now().format("%Y-%m-%d").to_string();
        info!(start = TOP_ISSUE_START, end = %end, "fetching top_issue digest");
        let response = self
            .client
            .put(&url)
            .query(&[("_t", Utc::now().timestamp_millis())])
            .json(&serde_json::json!({ "start": TOP_ISSUE_START, "end": end }))
            .send()
            .map_err(|err| HubError::PapersHttp(err.to_string()))?;
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .unwrap_or_else(|_| "top_issue request failed".to_string());
            return Err(HubError::PapersStatus { status, message });
        }
        let payload: Value = response
            .json()
            .map_err(|err| HubError::PapersHttp(err.to_string()))?;
        let records: Vec<ApiPaper> = payload
            .as_array()
            .map(|items| {
                items
                    .iter()
                    .cloned()
                    .filter_map(|item| serde_json::from_value(item).ok())
                    .collect()
            })
            .unwrap_or_default();
        if records.is_empty() {
            return Err(HubError::EmptyListing("express/top_issue".to_string()));
        }
        Ok(records)
    }

    fn fetch_user_papers(&self) -> Result<Vec<UserPaper>, HubError> {
        collect_pages(|page| self.fetch_user_page(page), Some(USER_PAGE_CAP))
    }
}

/// Maps one digest record to a [`ResearchPaper`]. The Chinese abstract fills
/// the default display slot when present; the raw abstract otherwise.
pub fn normalize_api_paper(record: ApiPaper) -> ResearchPaper {
    let (date, year) = submission_date(&record.submit_time);
    let title_cn = record.title_cn.trim();
    ResearchPaper {
        id: record.uuid.clone(),
        title: if record.title.trim().is_empty() {
            title_cn.to_string()
        } else {
            record.title.clone()
        },
        title_cn: (!title_cn.is_empty()).then(|| title_cn.to_string()),
        authors: entries_or(record.authors.as_ref(), "Unknown"),
        year,
        date,
        journal: (!record.journal.trim().is_empty()).then(|| record.journal.clone()),
        domain: if record.category.trim().is_empty() {
            "Complex Systems".to_string()
        } else {
            record.category.clone()
        },
        tags: entries_or(record.labels.as_ref(), "复杂科学"),
        abstract_text: if record.abstract_cn.is_empty() {
            record.abstract_text.clone()
        } else {
            record.abstract_cn.clone()
        },
        abstract_en: (!record.abstract_text.is_empty()).then(|| record.abstract_text.clone()),
        thumbnails: resolve_thumbnails(record.images.as_deref()),
        link: paper_link(&record.link, &record.uuid),
    }
}

/// Maps one user-recommendation record to a [`ResearchPaper`]. These all land
/// in the fixed "User Recommended" domain with a 用户推荐 default tag.
pub fn normalize_user_paper(record: UserPaper) -> ResearchPaper {
    let (date, year) = submission_date(&record.submit_time);
    ResearchPaper {
        id: record.uuid.clone(),
        title: record.title.clone(),
        title_cn: None,
        authors: entries_or(record.authors.as_ref(), "Unknown"),
        year,
        date,
        journal: (!record.journal.trim().is_empty()).then(|| record.journal.clone()),
        domain: "User Recommended".to_string(),
        tags: entries_or(record.labels.as_ref(), "用户推荐"),
        abstract_text: record.abstract_text.clone(),
        abstract_en: (!record.abstract_text.is_empty()).then(|| record.abstract_text.clone()),
        thumbnails: resolve_thumbnails(record.images.as_deref()),
        link: paper_link(&record.link, &record.uuid),
    }
}

fn paper_link(link: &str, uuid: &str) -> String {
    let trimmed = link.trim();
    if trimmed.is_empty() {
        format!("{PORTAL_BASE}/paper/{uuid}")
    } else {
        trimmed.to_string()
    }
}
