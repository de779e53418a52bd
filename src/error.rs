use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum HubError {
    #[error("invalid paper source: {0}")]
    InvalidPaperSource(String),

    #[error("invalid level: {0}")]
    InvalidLevel(String),

    #[error("learn_paths request failed: {0}")]
    PathsHttp(String),

    #[error("learn_paths returned status {status}: {message}")]
    PathsStatus { status: u16, message: String },

    #[error("papers request failed: {0}")]
    PapersHttp(String),

    #[error("papers returned status {status}: {message}")]
    PapersStatus { status: u16, message: String },

    #[error("study_groups request failed: {0}")]
    StudyGroupsHttp(String),

    #[error("study_groups returned status {status}: {message}")]
    StudyGroupsStatus { status: u16, message: String },

    #[error("empty listing from {0}")]
    EmptyListing(String),

    #[error("failed to read config file at {0}")]
    ConfigRead(PathBuf),

    #[error("failed to parse JSON config: {0}")]
    ConfigParse(String),
}
