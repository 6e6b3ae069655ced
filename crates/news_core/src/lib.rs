//! News core: pure state machine, article model and view-model helpers.
mod article;
mod effect;
mod msg;
mod settings;
mod state;
mod update;
mod view_model;

pub use article::{Article, AUTHOR_FALLBACK};
pub use effect::Effect;
pub use msg::{LoadResult, Msg};
pub use settings::{QuerySettings, DEFAULT_ORDER_BY, DEFAULT_PAGE_SIZE};
pub use state::{AppState, PipelineState, RunId, UserMessage};
pub use update::update;
pub use view_model::{AppViewModel, ArticleRowView};
