use crate::{PipelineState, QuerySettings, UserMessage};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub pipeline: PipelineState,
    /// Progress indicator visibility.
    pub loading: bool,
    pub rows: Vec<ArticleRowView>,
    pub message: Option<UserMessage>,
    /// Text shown in place of an empty list.
    pub empty_text: Option<&'static str>,
    pub settings: QuerySettings,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleRowView {
    pub index: usize,
    pub title: String,
    pub section: String,
    pub author: String,
    pub date: String,
}
