use std::sync::Arc;
use std::time::Duration;

use news_core::{QuerySettings, AUTHOR_FALLBACK};
use news_engine::{
    fetch_articles, guardian_search_url, EventSink, FailureKind, FetchOutcome, FetchSettings,
    PipelineEvent, PipelineHandle, ReqwestFetcher,
};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const THREE_RESULTS: &str = r#"{"response":{"results":[
    {"webTitle":"One","sectionName":"Technology","webPublicationDate":"2018-05-01T08:00:00Z",
     "webUrl":"https://www.theguardian.com/technology/1","tags":[{"webTitle":"Alex Hern"}]},
    {"webTitle":"Two","sectionName":"Technology","webPublicationDate":"2018-05-02T08:00:00Z",
     "webUrl":"https://www.theguardian.com/technology/2","tags":[{"webTitle":"Samuel Gibbs"}]},
    {"webTitle":"Three","sectionName":"Technology","webPublicationDate":"2018-05-03T08:00:00Z",
     "webUrl":"https://www.theguardian.com/technology/3"}
]}}"#;

struct TestSink {
    tx: UnboundedSender<PipelineEvent>,
}

impl EventSink for TestSink {
    fn emit(&self, event: PipelineEvent) {
        let _ = self.tx.send(event);
    }
}

fn pipeline(fetcher: Arc<ReqwestFetcher>) -> (PipelineHandle, UnboundedReceiver<PipelineEvent>) {
    news_logging::initialize_for_tests();
    let (tx, rx) = unbounded_channel();
    let handle = PipelineHandle::new(fetcher, Arc::new(TestSink { tx })).expect("pipeline");
    (handle, rx)
}

async fn next_event(rx: &mut UnboundedReceiver<PipelineEvent>) -> PipelineEvent {
    tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("event within timeout")
        .expect("sink open")
}

async fn mount_json(server: &MockServer, page_size: &str, body: &str, delay: Duration) {
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("page-size", page_size))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(delay)
                .set_body_raw(body.to_owned(), "application/json"),
        )
        .mount(server)
        .await;
}

fn search_url(server: &MockServer, page_size: &str) -> String {
    let settings = QuerySettings {
        order_by: "newest".to_string(),
        page_size: page_size.to_string(),
    };
    guardian_search_url(&format!("{}/search", server.uri()), &settings, "test").unwrap()
}

#[tokio::test(flavor = "multi_thread")]
async fn three_results_with_missing_tags_are_delivered_in_order() {
    let server = MockServer::start().await;
    mount_json(&server, "3", THREE_RESULTS, Duration::ZERO).await;

    let fetcher = Arc::new(ReqwestFetcher::new(FetchSettings::default()));
    let (handle, mut rx) = pipeline(fetcher.clone());
    handle.start(1, search_url(&server, "3"));

    let PipelineEvent::Finished { run_id, outcome } = next_event(&mut rx).await;
    assert_eq!(run_id, 1);
    let articles = outcome.articles();
    assert_eq!(articles.len(), 3);
    assert_eq!(
        articles.iter().map(|a| a.title()).collect::<Vec<_>>(),
        vec!["One", "Two", "Three"]
    );
    assert_eq!(articles[0].author(), "Alex Hern");
    assert_eq!(articles[2].author(), AUTHOR_FALLBACK);
    assert_eq!(fetcher.in_flight_fetches(), 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn empty_results_are_reported_as_empty() {
    let server = MockServer::start().await;
    mount_json(&server, "10", r#"{"response":{"results":[]}}"#, Duration::ZERO).await;

    let fetcher = Arc::new(ReqwestFetcher::new(FetchSettings::default()));
    let (handle, mut rx) = pipeline(fetcher);
    handle.start(4, search_url(&server, "10"));

    assert_eq!(
        next_event(&mut rx).await,
        PipelineEvent::Finished {
            run_id: 4,
            outcome: FetchOutcome::Empty,
        }
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn retrigger_delivers_only_the_latest_run() {
    let server = MockServer::start().await;
    mount_json(&server, "1", THREE_RESULTS, Duration::from_millis(400)).await;
    mount_json(&server, "2", r#"{"response":{"results":[]}}"#, Duration::ZERO).await;

    let fetcher = Arc::new(ReqwestFetcher::new(FetchSettings::default()));
    let (handle, mut rx) = pipeline(fetcher.clone());
    handle.start(1, search_url(&server, "1"));
    handle.start(2, search_url(&server, "2"));

    let PipelineEvent::Finished { run_id, .. } = next_event(&mut rx).await;
    assert_eq!(run_id, 2);

    // The superseded run would have answered by now.
    let late = tokio::time::timeout(Duration::from_millis(800), rx.recv()).await;
    assert!(late.is_err(), "unexpected late event: {late:?}");
    assert_eq!(fetcher.in_flight_fetches(), 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn cancelled_run_is_never_delivered() {
    let server = MockServer::start().await;
    mount_json(&server, "5", THREE_RESULTS, Duration::from_millis(300)).await;

    let fetcher = Arc::new(ReqwestFetcher::new(FetchSettings::default()));
    let (handle, mut rx) = pipeline(fetcher.clone());
    handle.start(1, search_url(&server, "5"));
    handle.cancel(1);

    let late = tokio::time::timeout(Duration::from_millis(700), rx.recv()).await;
    assert!(late.is_err(), "unexpected event: {late:?}");
    assert_eq!(fetcher.in_flight_fetches(), 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn shutdown_drops_in_flight_and_later_runs() {
    let server = MockServer::start().await;
    mount_json(&server, "5", THREE_RESULTS, Duration::from_millis(300)).await;

    let fetcher = Arc::new(ReqwestFetcher::new(FetchSettings::default()));
    let (handle, mut rx) = pipeline(fetcher);
    handle.start(1, search_url(&server, "5"));
    handle.shutdown();
    handle.start(2, search_url(&server, "5"));

    let late = tokio::time::timeout(Duration::from_millis(700), rx.recv()).await;
    assert!(late.is_err(), "unexpected event: {late:?}");
}

#[tokio::test]
async fn fetch_articles_folds_failures_into_outcome() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"response":{"results":[{"webTitle":"no url"}]}}"#,
            "application/json",
        ))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/down"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::new(FetchSettings::default());

    assert_eq!(
        fetch_articles(&fetcher, &format!("{}/broken", server.uri())).await,
        FetchOutcome::Failed(FailureKind::Decode)
    );
    assert_eq!(
        fetch_articles(&fetcher, &format!("{}/down", server.uri())).await,
        FetchOutcome::Failed(FailureKind::HttpStatus(503))
    );
}
