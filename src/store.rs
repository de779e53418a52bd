use tracing::{info, warn};

use crate::domain::{LearningPath, PaperSource, PathLevel, ReadingClubSession, ResearchPaper};
use crate::error::HubError;
use crate::fixtures;
use crate::papers::{ARXIV_FALLBACK_LIMIT, PapersClient, normalize_api_paper, normalize_user_paper};
use crate::paths::{LearnPathsClient, normalize_learn_path};
use crate::reading_club::{StudyGroupsClient, normalize_study_group};

/// Level filter for the paths collection. `All` passes everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LevelFilter {
    #[default]
    All,
    Only(PathLevel),
}

/// State container for the learning-path collection.
///
/// `fetch` replaces the whole collection; on failure the bundled samples are
/// swapped in and the error recorded, never rethrown.
pub struct PathsStore<C: LearnPathsClient> {
    client: C,
    items: Vec<LearningPath>,
    loading: bool,
    error: Option<String>,
    level_filter: LevelFilter,
}

impl<C: LearnPathsClient> PathsStore<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            items: Vec::new(),
            loading: false,
            error: None,
            level_filter: LevelFilter::All,
        }
    }

    pub fn fetch(&mut self) {
        self.loading = true;
        self.error = None;
        match self.client.fetch_all() {
            Ok(records) => {
                self.items = records.into_iter().map(normalize_learn_path).collect();
                info!(total = self.items.len(), "loaded learning paths");
            }
            Err(err) => {
                warn!(error = %err, "learn_paths fetch failed, serving bundled samples");
                self.items = fixtures::learning_paths();
                self.error = Some(err.to_string());
            }
        }
        self.loading = false;
    }

    pub fn set_level_filter(&mut self, filter: LevelFilter) {
        self.level_filter = filter;
    }

    pub fn items(&self) -> &[LearningPath] {
        &self.items
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn filtered(&self) -> Vec<&LearningPath> {
        self.items
            .iter()
            .filter(|path| match self.level_filter {
                LevelFilter::All => true,
                LevelFilter::Only(level) => path.level == level,
            })
            .collect()
    }
}

/// State container for the research-paper collection, covering all four
/// named sources.
pub struct PapersStore<C: PapersClient> {
    client: C,
    items: Vec<ResearchPaper>,
    loading: bool,
    error: Option<String>,
    domain_filter: Option<String>,
    search_keyword: String,
    current_source: PaperSource,
}

impl<C: PapersClient> PapersStore<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            items: Vec::new(),
            loading: false,
            error: None,
            domain_filter: None,
            search_keyword: String::new(),
            current_source: PaperSource::ComplexityDigest,
        }
    }

    pub fn fetch(&mut self, source: PaperSource) {
        self.loading = true;
        self.error = None;
        self.current_source = source;
        if let Err(err) = self.load(source) {
            warn!(source = %source, error = %err, "papers fetch failed, serving bundled samples");
            self.items = fixtures::research_papers();
            self.error = Some(err.to_string());
        }
        self.loading = false;
    }

    fn load(&mut self, source: PaperSource) -> Result<(), HubError> {
        let items: Vec<ResearchPaper> = match source {
            PaperSource::ComplexityDigest | PaperSource::AiScience => self
                .client
                .fetch_top_issue()?
                .into_iter()
                .map(normalize_api_paper)
                .collect(),
            PaperSource::Arxiv => {
                // No real arXiv integration: the digest subset without a
                // journal, or with an arxiv link, stands in for it.
                let records = self.client.fetch_top_issue()?;
                let preprints: Vec<_> = records
                    .iter()
                    .filter(|paper| {
                        paper.journal.trim().is_empty() || paper.link.contains("arxiv")
                    })
                    .cloned()
                    .collect();
                let chosen = if preprints.is_empty() {
                    records.into_iter().take(ARXIV_FALLBACK_LIMIT).collect()
                } else {
                    preprints
                };
                chosen.into_iter().map(normalize_api_paper).collect()
            }
            PaperSource::UserSubmitted => self
                .client
                .fetch_user_papers()?
                .into_iter()
                .map(normalize_user_paper)
                .collect(),
        };
        info!(source = %source, total = items.len(), "loaded research papers");
        self.items = items;
        Ok(())
    }

    /// Exact-match domain filter; `None` passes every domain.
    pub fn set_domain_filter(&mut self, domain: Option<String>) {
        self.domain_filter = domain;
    }

    pub fn set_search_keyword(&mut self, keyword: impl Into<String>) {
        self.search_keyword = keyword.into();
    }

    pub fn items(&self) -> &[ResearchPaper] {
        &self.items
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn current_source(&self) -> PaperSource {
        self.current_source
    }

    /// Domain filter composed with a case-insensitive keyword match against
    /// title, tags and authors.
    pub fn filtered(&self) -> Vec<&ResearchPaper> {
        let keyword = self.search_keyword.trim().to_lowercase();
        self.items
            .iter()
            .filter(|paper| {
                let domain_ok = self
                    .domain_filter
                    .as_deref()
                    .is_none_or(|domain| paper.domain == domain);
                let keyword_ok = keyword.is_empty()
                    || paper.title.to_lowercase().contains(&keyword)
                    || paper.tags.iter().any(|tag| tag.to_lowercase().contains(&keyword))
                    || paper
                        .authors
                        .iter()
                        .any(|author| author.to_lowercase().contains(&keyword));
                domain_ok && keyword_ok
            })
            .collect()
    }

    /// Distinct domains in first-seen order, preceded by the catch-all.
    pub fn domain_options(&self) -> Vec<String> {
        let mut options = vec!["全部".to_string()];
        for paper in &self.items {
            if !options.contains(&paper.domain) {
                options.push(paper.domain.clone());
            }
        }
        options
    }
}

/// State container for the reading-club collection. No client-side filters.
pub struct ReadingClubStore<C: StudyGroupsClient> {
    client: C,
    items: Vec<ReadingClubSession>,
    loading: bool,
    error: Option<String>,
}

impl<C: StudyGroupsClient> ReadingClubStore<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            items: Vec::new(),
            loading: false,
            error: None,
        }
    }

    pub fn fetch(&mut self) {
        self.loading = true;
        self.error = None;
        match self.client.fetch_all() {
            Ok(records) => {
                self.items = records.into_iter().map(normalize_study_group).collect();
                info!(total = self.items.len(), "loaded reading-club sessions");
            }
            Err(err) => {
                warn!(error = %err, "study_groups fetch failed, serving bundled samples");
                self.items = fixtures::reading_club_sessions();
                self.error = Some(err.to_string());
            }
        }
        self.loading = false;
    }

    /// Swaps in the bundled samples without fetching. `error` is left as-is.
    pub fn load_samples(&mut self) {
        self.items = fixtures::reading_club_sessions();
    }

    pub fn items(&self) -> &[ReadingClubSession] {
        &self.items
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
