use crate::view_model::{AppViewModel, ArticleRowView};
use crate::{Article, QuerySettings};

pub type RunId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PipelineState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Empty,
}

/// Fixed user-facing messages shown in place of the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserMessage {
    NoInternet,
    NoBrowser,
    NoNews,
}

impl UserMessage {
    pub fn text(self) -> &'static str {
        match self {
            UserMessage::NoInternet => "No internet connection.",
            UserMessage::NoBrowser => "No web browser available.",
            UserMessage::NoNews => "No news found.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    pipeline: PipelineState,
    articles: Vec<Article>,
    message: Option<UserMessage>,
    settings: QuerySettings,
    last_run_id: RunId,
    active_run: Option<RunId>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from previously persisted settings.
    pub fn with_settings(settings: QuerySettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            pipeline: self.pipeline,
            loading: self.pipeline == PipelineState::Loading,
            rows: self
                .articles
                .iter()
                .enumerate()
                .map(|(index, article)| ArticleRowView {
                    index,
                    title: article.title().to_string(),
                    section: article.section().to_string(),
                    author: article.author().to_string(),
                    date: article.date().to_string(),
                })
                .collect(),
            message: self.message,
            empty_text: self
                .message
                .filter(|_| self.articles.is_empty())
                .map(UserMessage::text),
            settings: self.settings.clone(),
        }
    }

    pub fn pipeline(&self) -> PipelineState {
        self.pipeline
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn settings(&self) -> &QuerySettings {
        &self.settings
    }

    pub fn active_run(&self) -> Option<RunId> {
        self.active_run
    }

    /// Returns whether anything visible changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Clears the list and enters Loading under a fresh run id.
    ///
    /// Returns the new run id and the run it superseded, if any.
    pub(crate) fn begin_run(&mut self) -> (RunId, Option<RunId>) {
        self.last_run_id += 1;
        let run_id = self.last_run_id;
        let superseded = self.active_run.replace(run_id);
        self.articles.clear();
        self.message = None;
        self.pipeline = PipelineState::Loading;
        self.mark_dirty();
        (run_id, superseded)
    }

    /// Skips the pipeline entirely: no connectivity.
    pub(crate) fn show_offline(&mut self) -> Option<RunId> {
        let superseded = self.active_run.take();
        self.articles.clear();
        self.message = Some(UserMessage::NoInternet);
        self.pipeline = PipelineState::Empty;
        self.mark_dirty();
        superseded
    }

    /// Applies a run's result. Results from any run other than the active one are dropped.
    pub(crate) fn apply_result(&mut self, run_id: RunId, articles: Vec<Article>) -> bool {
        if self.active_run != Some(run_id) {
            return false;
        }
        self.active_run = None;
        self.articles.clear();
        if articles.is_empty() {
            self.message = Some(UserMessage::NoNews);
            self.pipeline = PipelineState::Empty;
        } else {
            self.articles = articles;
            self.message = None;
            self.pipeline = PipelineState::Loaded;
        }
        self.mark_dirty();
        true
    }

    pub(crate) fn set_settings(&mut self, settings: QuerySettings) {
        self.settings = settings;
        self.mark_dirty();
    }

    pub(crate) fn show_message(&mut self, message: UserMessage) {
        self.message = Some(message);
        self.mark_dirty();
    }

    pub(crate) fn tear_down(&mut self) -> Option<RunId> {
        let superseded = self.active_run.take();
        if self.pipeline == PipelineState::Loading {
            self.pipeline = PipelineState::Idle;
            self.mark_dirty();
        }
        superseded
    }
}
