use serde::Serialize;

use crate::domain::{LearningPath, PaperSource, ReadingClubSession, ResearchPaper};
use crate::papers::PapersClient;
use crate::paths::LearnPathsClient;
use crate::reading_club::StudyGroupsClient;
use crate::store::{LevelFilter, PapersStore, PathsStore, ReadingClubStore};

/// Snapshot of the paths store after a fetch: the filtered view plus the
/// collection total and any recorded failure.
#[derive(Debug, Clone, Serialize)]
pub struct PathsView {
    pub total: usize,
    pub error: Option<String>,
    pub items: Vec<LearningPath>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PapersView {
    pub source: PaperSource,
    pub total: usize,
    pub domains: Vec<String>,
    pub error: Option<String>,
    pub items: Vec<ResearchPaper>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionsView {
    pub total: usize,
    pub error: Option<String>,
    pub items: Vec<ReadingClubSession>,
}

/// Bundles the three collection stores behind the operations the CLI needs.
/// Each store owns its collection independently; nothing is shared across
/// them.
pub struct App<P: LearnPathsClient, A: PapersClient, S: StudyGroupsClient> {
    paths: PathsStore<P>,
    papers: PapersStore<A>,
    reading_club: ReadingClubStore<S>,
}

impl<P: LearnPathsClient, A: PapersClient, S: StudyGroupsClient> App<P, A, S> {
    pub fn new(paths_client: P, papers_client: A, groups_client: S) -> Self {
        Self {
            paths: PathsStore::new(paths_client),
            papers: PapersStore::new(papers_client),
            reading_club: ReadingClubStore::new(groups_client),
        }
    }

    pub fn fetch_paths(&mut self, filter: LevelFilter) -> PathsView {
        self.paths.set_level_filter(filter);
        self.paths.fetch();
        PathsView {
            total: self.paths.items().len(),
            error: self.paths.error().map(str::to_string),
            items: self.paths.filtered().into_iter().cloned().collect(),
        }
    }

    pub fn fetch_papers(
        &mut self,
        source: PaperSource,
        domain: Option<String>,
        keyword: Option<String>,
    ) -> PapersView {
        self.papers.set_domain_filter(domain);
        self.papers.set_search_keyword(keyword.unwrap_or_default());
        self.papers.fetch(source);
        PapersView {
            source: self.papers.current_source(),
            total: self.papers.items().len(),
            domains: self.papers.domain_options(),
            error: self.papers.error().map(str::to_string),
            items: self.papers.filtered().into_iter().cloned().collect(),
        }
    }

    pub fn fetch_sessions(&mut self, sample: bool) -> SessionsView {
        if sample {
            self.reading_club.load_samples();
        } else {
            self.reading_club.fetch();
        }
        SessionsView {
            total: self.reading_club.items().len(),
            error: self.reading_club.error().map(str::to_string),
            items: self.reading_club.items().to_vec(),
        }
    }
}
