use chrono::Local;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use serde::Deserialize;
use tracing::info;

use crate::domain::{LearningPath, PathAuthor, PathLevel};
use crate::error::HubError;
use crate::normalize::{PORTAL_BASE, excerpt, parse_flexible_date, resolve_asset_url};
use crate::pager::{Page, collect_pages};

pub const PER_PAGE: u32 = 15;

/// Description excerpts keep this many characters of the content body, the
/// same length the listing endpoint is asked for via `substr_len`.
pub const EXCERPT_LEN: usize = 200;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiUserTitle {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiUser {
    #[serde(default)]
    pub nick_name: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub introduce: String,
    #[serde(default)]
    pub title: Vec<ApiUserTitle>,
}

/// Raw record of the `index/learn_paths` listing.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiLearnPath {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub user: Option<ApiUser>,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub like_number: u64,
    #[serde(default)]
    pub comment_number: u64,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

pub trait LearnPathsClient: Send + Sync {
    /// Every record of the listing, across all pages.
    fn fetch_all(&self) -> Result<Vec<ApiLearnPath>, HubError>;
}

#[derive(Clone)]
pub struct PathsHttpClient {
    client: Client,
    base_url: String,
}

impl PathsHttpClient {
    pub fn new(base_url: &str) -> Result<Self, HubError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&format!("pattern-hub/{}", env!("CARGO_PKG_VERSION")))
                .map_err(|err| HubError::PathsHttp(err.to_string()))?,
        );
        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|err| HubError::PathsHttp(err.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn fetch_page(&self, page: u32) -> Result<Page<ApiLearnPath>, HubError> {
        let url = format!("{}/index/learn_paths", self.base_url);
        info!(page, "fetching learn_paths page");
        let response = self
            .client
            .get(&url)
            .query(&[("serious", "1"), ("substr_len", "200")])
            .query(&[("page", page), ("per_page", PER_PAGE)])
            .send()
            .map_err(|err| HubError::PathsHttp(err.to_string()))?;
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .unwrap_or_else(|_| "learn_paths request failed".to_string());
            return Err(HubError::PathsStatus { status, message });
        }
        response
            .json()
            .map_err(|err| HubError::PathsHttp(err.to_string()))
    }
}

impl LearnPathsClient for PathsHttpClient {
    fn fetch_all(&self) -> Result<Vec<ApiLearnPath>, HubError> {
        collect_pages(|page| self.fetch_page(page), None)
    }
}

/// Maps one raw listing record to a [`LearningPath`].
///
/// The listing has no level or duration fields yet, so those get fixed
/// placeholders rather than derived values.
pub fn normalize_learn_path(record: ApiLearnPath) -> LearningPath {
    let user = record.user.unwrap_or_default();
    let nick_name = user.nick_name.trim();
    let role = user
        .title
        .first()
        .map(|title| title.name.trim())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| {
            let introduce = user.introduce.trim();
            if introduce.is_empty() { "学习者" } else { introduce }
        })
        .to_string();
    let author = PathAuthor {
        name: if nick_name.is_empty() {
            "未知用户".to_string()
        } else {
            nick_name.to_string()
        },
        role,
        avatar: resolve_asset_url(&user.avatar),
    };
    let mentor = if nick_name.is_empty() {
        "未知".to_string()
    } else {
        nick_name.to_string()
    };
    let touched = if record.updated_at.trim().is_empty() {
        &record.created_at
    } else {
        &record.updated_at
    };
    let time_ago = format_time_ago(touched);

    LearningPath {
        id: record.id.to_string(),
        link: format!("{PORTAL_BASE}/path/{}", record.id),
        title: record.title,
        description: excerpt(&record.content, EXCERPT_LEN),
        cover: resolve_asset_url(&record.image),
        content: record.content,
        level: PathLevel::Intermediate,
        duration_weeks: 8,
        topics: Vec::new(),
        progress: 0.0,
        mentor,
        resources: 0,
        author,
        likes: record.like_number,
        comments: record.comment_number,
        time_ago,
    }
}

/// Relative-time bucket for a last-touched date, in the portal's wording.
/// Unparseable dates read as today.
pub fn format_time_ago(value: &str) -> String {
    let Some(date) = parse_flexible_date(value) else {
        return "今天".to_string();
    };
    let days = (Local::now().date_naive() - date).num_days();
    if days < 1 {
        "今天".to_string()
    } else if days < 7 {
        format!("{days}天前")
    } else if days < 30 {
        format!("{}周前", days / 7)
    } else if days < 365 {
        format!("{}个月前", days / 30)
    } else {
        format!("{}年前", days / 365)
    }
}
