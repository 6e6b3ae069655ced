use crate::{Article, QuerySettings, RunId};

/// Result of one pipeline run as seen by the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadResult {
    Articles(Vec<Article>),
    /// The API answered with zero results.
    NoResults,
    /// URL, network, status or decode failure. Details are logged by the engine.
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The article screen became visible. `connected` is the result of the
    /// synchronous connectivity check.
    ViewStarted { connected: bool },
    /// User asked for a reload.
    RefreshRequested { connected: bool },
    /// User saved new query settings; the pipeline restarts.
    SettingsChanged {
        settings: QuerySettings,
        connected: bool,
    },
    /// Pipeline completion for a run.
    FetchFinished { run_id: RunId, result: LoadResult },
    /// User clicked the article at `index` in the visible list.
    ArticleActivated { index: usize },
    /// The opener found no handler for the article URL.
    BrowserUnavailable,
    /// The screen is going away; in-flight results must be dropped.
    Teardown,
}
