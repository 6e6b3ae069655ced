use std::io;
use std::sync::{mpsc, Arc};

use news_core::{Effect, LoadResult, Msg, RunId};
use news_engine::{
    guardian_search_url, ChannelEventSink, FetchOutcome, FetchSettings, PipelineEvent,
    PipelineHandle, ReqwestFetcher, GUARDIAN_SEARCH_URL,
};
use news_logging::{news_debug, news_error, news_info, news_warn};

use super::opener::UrlOpener;
use super::settings::SettingsStore;

pub struct EffectRunner {
    pipeline: PipelineHandle,
    msg_tx: mpsc::Sender<Msg>,
    store: SettingsStore,
    opener: Box<dyn UrlOpener>,
    api_key: String,
}

impl EffectRunner {
    /// Pipeline completions go to `event_tx`; messages the runner itself
    /// produces go to `msg_tx`.
    pub(crate) fn new(
        event_tx: mpsc::Sender<PipelineEvent>,
        msg_tx: mpsc::Sender<Msg>,
        store: SettingsStore,
        opener: Box<dyn UrlOpener>,
        api_key: String,
    ) -> io::Result<Self> {
        let fetcher = Arc::new(ReqwestFetcher::new(FetchSettings::default()));
        let sink = Arc::new(ChannelEventSink::new(event_tx));
        let pipeline = PipelineHandle::new(fetcher, sink)?;

        Ok(Self {
            pipeline,
            msg_tx,
            store,
            opener,
            api_key,
        })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::StartFetch { run_id, settings } => {
                    match guardian_search_url(GUARDIAN_SEARCH_URL, &settings, &self.api_key) {
                        Ok(url) => {
                            news_info!(
                                "StartFetch run_id={} order_by={} page_size={}",
                                run_id,
                                settings.order_by,
                                settings.page_size
                            );
                            self.pipeline.start(run_id, url);
                        }
                        Err(err) => {
                            news_error!("Problem building the URL for run {}: {}", run_id, err);
                            let _ = self.msg_tx.send(Msg::FetchFinished {
                                run_id,
                                result: LoadResult::Failed,
                            });
                        }
                    }
                }
                Effect::CancelFetch { run_id } => {
                    news_debug!("CancelFetch run_id={}", run_id);
                    self.pipeline.cancel(run_id);
                }
                Effect::OpenUrl { url } => {
                    if !self.opener.open(&url) {
                        let _ = self.msg_tx.send(Msg::BrowserUnavailable);
                    }
                }
                Effect::PersistSettings(settings) => self.store.save(&settings),
            }
        }
    }

    pub fn shutdown(&self) {
        self.pipeline.shutdown();
    }
}

/// Turns a pipeline completion into the message the core expects.
pub(crate) fn finished_msg(event: PipelineEvent) -> Msg {
    let PipelineEvent::Finished { run_id, outcome } = event;
    Msg::FetchFinished {
        run_id,
        result: map_outcome(run_id, outcome),
    }
}

fn map_outcome(run_id: RunId, outcome: FetchOutcome) -> LoadResult {
    match outcome {
        FetchOutcome::Articles(articles) => LoadResult::Articles(articles),
        FetchOutcome::Empty => LoadResult::NoResults,
        FetchOutcome::Failed(kind) => {
            news_warn!("Run {} produced no articles: {}", run_id, kind);
            LoadResult::Failed
        }
    }
}
