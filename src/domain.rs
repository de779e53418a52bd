use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::HubError;

/// Difficulty rating shown on a learning-path card. The upstream listing does
/// not carry one yet, so normalization assigns [`PathLevel::Intermediate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PathLevel {
    Beginner,
    Intermediate,
    Expert,
}

impl PathLevel {
    /// Localized label used by the portal UI.
    pub fn label(&self) -> &'static str {
        match self {
            PathLevel::Beginner => "入门",
            PathLevel::Intermediate => "进阶",
            PathLevel::Expert => "专家",
        }
    }
}

impl fmt::Display for PathLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathLevel::Beginner => write!(f, "beginner"),
            PathLevel::Intermediate => write!(f, "intermediate"),
            PathLevel::Expert => write!(f, "expert"),
        }
    }
}

impl FromStr for PathLevel {
    type Err = HubError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "beginner" | "入门" => Ok(PathLevel::Beginner),
            "intermediate" | "进阶" => Ok(PathLevel::Intermediate),
            "expert" | "专家" => Ok(PathLevel::Expert),
            _ => Err(HubError::InvalidLevel(value.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathAuthor {
    pub name: String,
    pub role: String,
    pub avatar: String,
}

/// A curated learning path, normalized from the `learn_paths` listing.
///
/// `cover` and `author.avatar` are always absolute URLs or the empty string,
/// never a bare relative path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningPath {
    pub id: String,
    pub title: String,
    pub description: String,
    pub content: String,
    pub cover: String,
    pub level: PathLevel,
    pub duration_weeks: u32,
    pub topics: Vec<String>,
    pub progress: f32,
    pub mentor: String,
    pub resources: u32,
    pub author: PathAuthor,
    pub likes: u64,
    pub comments: u64,
    pub time_ago: String,
    pub link: String,
}

/// A research paper, normalized from either the `express/top_issue` digest or
/// the user-submitted `user_papers` listing.
///
/// `abstract_text` carries the default display abstract (Chinese when the
/// digest provides one), `abstract_en` the expanded English abstract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchPaper {
    pub id: String,
    pub title: String,
    pub title_cn: Option<String>,
    pub authors: Vec<String>,
    pub year: i32,
    pub date: String,
    pub journal: Option<String>,
    pub domain: String,
    pub tags: Vec<String>,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub abstract_en: Option<String>,
    pub thumbnails: Vec<String>,
    pub link: String,
}

/// Lifecycle phase of a reading-club session, decoded from the upstream
/// numeric stage code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    New,
    Running,
    Ended,
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionStatus::New => write!(f, "new"),
            SessionStatus::Running => write!(f, "running"),
            SessionStatus::Ended => write!(f, "ended"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadingClubSession {
    pub id: String,
    pub title: String,
    pub countdown: String,
    pub cohort_info: String,
    pub members_info: String,
    pub date_range: String,
    pub weekly_schedule: String,
    pub tags: Vec<String>,
    pub hashtags: Vec<String>,
    pub summary: Option<String>,
    pub cover: String,
    pub link: String,
    pub status_label: String,
    pub status: SessionStatus,
}

/// Which upstream listing the papers store pulls from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum PaperSource {
    ComplexityDigest,
    AiScience,
    Arxiv,
    UserSubmitted,
}

impl fmt::Display for PaperSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaperSource::ComplexityDigest => write!(f, "complexity-digest"),
            PaperSource::AiScience => write!(f, "ai-science"),
            PaperSource::Arxiv => write!(f, "arxiv"),
            PaperSource::UserSubmitted => write!(f, "user-submitted"),
        }
    }
}

impl FromStr for PaperSource {
    type Err = HubError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "complexity-digest" | "complexity" => Ok(PaperSource::ComplexityDigest),
            "ai-science" => Ok(PaperSource::AiScience),
            "arxiv" => Ok(PaperSource::Arxiv),
            "user-submitted" | "user" => Ok(PaperSource::UserSubmitted),
            _ => Err(HubError::InvalidPaperSource(value.to_string())),
        }
    }
}
