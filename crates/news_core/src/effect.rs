use crate::{QuerySettings, RunId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Begin a background fetch for `run_id` using the given settings.
    StartFetch {
        run_id: RunId,
        settings: QuerySettings,
    },
    /// Drop an in-flight run; its result must never reach the state.
    CancelFetch { run_id: RunId },
    /// Hand an article URL to the platform opener.
    OpenUrl { url: String },
    PersistSettings(QuerySettings),
}
