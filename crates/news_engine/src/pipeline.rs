use std::io;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use news_core::RunId;
use news_logging::{news_debug, news_info, news_warn};
use tokio_util::sync::CancellationToken;

use crate::{decode_articles, FailureKind, FetchOutcome, Fetcher, PipelineEvent};

/// Receives each run's single completion event.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: PipelineEvent);
}

pub struct ChannelEventSink {
    tx: mpsc::Sender<PipelineEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: mpsc::Sender<PipelineEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: PipelineEvent) {
        let _ = self.tx.send(event);
    }
}

enum PipelineCommand {
    Start { run_id: RunId, url: String },
    Cancel { run_id: RunId },
}

/// Owner of the background fetch worker.
///
/// At most one run is in flight: starting a run cancels the previous one, and
/// a cancelled run never reaches the sink. Dropping the handle (or calling
/// [`PipelineHandle::shutdown`]) cancels the lifecycle token that parents every
/// run token.
pub struct PipelineHandle {
    cmd_tx: mpsc::Sender<PipelineCommand>,
    lifecycle: CancellationToken,
}

impl PipelineHandle {
    pub fn new(fetcher: Arc<dyn Fetcher>, sink: Arc<dyn EventSink>) -> io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("news-fetch")
            .enable_all()
            .build()?;
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let lifecycle = CancellationToken::new();
        let worker_lifecycle = lifecycle.clone();

        thread::Builder::new()
            .name("news-pipeline".to_string())
            .spawn(move || {
                let mut active: Option<(RunId, CancellationToken)> = None;
                while let Ok(command) = cmd_rx.recv() {
                    match command {
                        PipelineCommand::Start { run_id, url } => {
                            if let Some((previous, token)) = active.take() {
                                news_debug!("Run {} superseded by run {}", previous, run_id);
                                token.cancel();
                            }
                            let token = worker_lifecycle.child_token();
                            active = Some((run_id, token.clone()));
                            runtime.spawn(run_once(
                                fetcher.clone(),
                                sink.clone(),
                                run_id,
                                url,
                                token,
                            ));
                        }
                        PipelineCommand::Cancel { run_id } => {
                            if matches!(&active, Some((id, _)) if *id == run_id) {
                                if let Some((_, token)) = active.take() {
                                    news_debug!("Run {} cancelled", run_id);
                                    token.cancel();
                                }
                            }
                        }
                    }
                }
                worker_lifecycle.cancel();
                runtime.shutdown_timeout(Duration::from_secs(1));
            })?;

        Ok(Self { cmd_tx, lifecycle })
    }

    pub fn start(&self, run_id: RunId, url: impl Into<String>) {
        let _ = self.cmd_tx.send(PipelineCommand::Start {
            run_id,
            url: url.into(),
        });
    }

    pub fn cancel(&self, run_id: RunId) {
        let _ = self.cmd_tx.send(PipelineCommand::Cancel { run_id });
    }

    /// Cancels every current and future run.
    pub fn shutdown(&self) {
        self.lifecycle.cancel();
    }
}

impl Drop for PipelineHandle {
    fn drop(&mut self) {
        self.lifecycle.cancel();
    }
}

async fn run_once(
    fetcher: Arc<dyn Fetcher>,
    sink: Arc<dyn EventSink>,
    run_id: RunId,
    url: String,
    token: CancellationToken,
) {
    let outcome = tokio::select! {
        _ = token.cancelled() => {
            news_debug!("Run {} dropped before completion", run_id);
            return;
        }
        outcome = fetch_articles(fetcher.as_ref(), &url) => outcome,
    };

    if token.is_cancelled() {
        news_debug!("Run {} finished after cancellation; result discarded", run_id);
        return;
    }
    sink.emit(PipelineEvent::Finished { run_id, outcome });
}

/// Fetch then decode. Every failure is logged and folded into the outcome.
pub async fn fetch_articles(fetcher: &dyn Fetcher, url: &str) -> FetchOutcome {
    let body = match fetcher.fetch(url).await {
        Ok(body) => body,
        Err(err) => {
            news_warn!("Problem retrieving the article results: {}", err);
            return FetchOutcome::Failed(err.kind);
        }
    };

    match decode_articles(&body) {
        Ok(articles) => {
            news_info!("Decoded {} articles", articles.len());
            FetchOutcome::from_articles(articles)
        }
        Err(err) => {
            news_warn!("Problem parsing the article JSON results: {}", err);
            FetchOutcome::Failed(FailureKind::Decode)
        }
    }
}
