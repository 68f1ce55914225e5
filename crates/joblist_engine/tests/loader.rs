use std::collections::VecDeque;
use std::sync::{Mutex, Once};

use joblist_core::{ItemKey, LoadPhase, FETCH_ERROR_MESSAGE};
use joblist_engine::{
    FailureKind, FetchError, FetchSettings, Fetcher, PageLoader, RawResponse, ReqwestFetcher,
};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(engine_logging::initialize_for_tests);
}

/// Replays canned responses and records every requested page.
struct ScriptedFetcher {
    responses: Mutex<VecDeque<Result<RawResponse, FetchError>>>,
    requests: Mutex<Vec<u32>>,
}

impl ScriptedFetcher {
    fn new(responses: Vec<Result<RawResponse, FetchError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    fn requests(&self) -> Vec<u32> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Fetcher for ScriptedFetcher {
    async fn fetch(&self, page: u32) -> Result<RawResponse, FetchError> {
        self.requests.lock().unwrap().push(page);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(FetchError::new(FailureKind::Network, "script exhausted")))
    }
}

fn jobs_body(start: usize, count: usize) -> String {
    let results: Vec<_> = (start..start + count)
        .map(|id| json!({"id": id, "title": format!("Job {id}"), "primary_details": {"Place": "Chennai"}}))
        .collect();
    json!({ "results": results }).to_string()
}

fn ok(body: String) -> Result<RawResponse, FetchError> {
    Ok(RawResponse::new(200, body))
}

async fn mount_page(server: &MockServer, page: u32, body: String) {
    Mock::given(method("GET"))
        .and(path("/jobs"))
        .and(query_param("page", page.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
        .expect(1)
        .mount(server)
        .await;
}

fn http_loader(server: &MockServer) -> PageLoader {
    let settings = FetchSettings {
        base_url: format!("{}/jobs", server.uri()),
        ..FetchSettings::default()
    };
    PageLoader::new(ReqwestFetcher::new(settings).expect("client"))
}

#[tokio::test]
async fn first_page_over_http_advances_to_page_two() {
    init_logging();
    let server = MockServer::start().await;
    mount_page(&server, 1, jobs_body(0, 20)).await;

    let mut loader = http_loader(&server);
    loader.request_more().await;
    let state = loader.state();

    assert_eq!(state.items.len(), 20);
    assert_eq!(state.next_page, 2);
    assert!(state.has_more);
    assert!(!state.is_loading);
    assert_eq!(state.phase, LoadPhase::Idle);
}

#[tokio::test]
async fn empty_second_page_exhausts_over_http() {
    init_logging();
    let server = MockServer::start().await;
    mount_page(&server, 1, jobs_body(0, 20)).await;
    mount_page(&server, 2, json!({"results": []}).to_string()).await;

    let mut loader = http_loader(&server);
    loader.request_more().await;
    loader.request_more().await;
    // Both must be no-ops: each mock expects exactly one hit.
    loader.request_more().await;
    loader.retry().await;

    let state = loader.state();
    assert_eq!(state.items.len(), 20);
    assert!(!state.has_more);
    assert_eq!(state.phase, LoadPhase::Exhausted);
}

#[tokio::test]
async fn server_error_is_retried_on_same_page() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jobs"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    mount_page(&server, 1, jobs_body(0, 5)).await;

    let mut loader = http_loader(&server);
    loader.request_more().await;
    let state = loader.state();
    assert_eq!(state.error.as_deref(), Some(FETCH_ERROR_MESSAGE));
    assert_eq!(state.phase, LoadPhase::Errored);
    assert_eq!(state.next_page, 1);

    loader.retry().await;
    let state = loader.state();
    assert_eq!(state.items.len(), 5);
    assert_eq!(state.error, None);
    assert_eq!(state.next_page, 2);
}

#[tokio::test]
async fn network_error_then_retry_recovers() {
    init_logging();
    let fetcher = ScriptedFetcher::new(vec![
        Err(FetchError::new(FailureKind::Network, "connection refused")),
        ok(jobs_body(0, 5)),
    ]);
    let mut loader = PageLoader::new(fetcher);

    loader.request_more().await;
    let state = loader.state();
    assert!(state.error.as_deref().is_some_and(|msg| !msg.is_empty()));
    assert!(state.items.is_empty());
    assert_eq!(state.next_page, 1);

    loader.retry().await;
    let state = loader.state();
    assert_eq!(state.items.len(), 5);
    assert_eq!(state.error, None);
    assert_eq!(state.next_page, 2);
    assert_eq!(loader.fetcher().requests(), vec![1, 1]);
}

#[tokio::test]
async fn decode_failure_keeps_session_retryable() {
    init_logging();
    let fetcher = ScriptedFetcher::new(vec![
        ok(jobs_body(0, 2)),
        ok("<html>maintenance</html>".to_string()),
        ok(json!({"count": 0}).to_string()),
        ok(jobs_body(2, 3)),
        ok(json!({"results": []}).to_string()),
    ]);
    let mut loader = PageLoader::new(fetcher);

    loader.request_more().await;
    loader.request_more().await;
    assert_eq!(loader.state().items.len(), 2);
    assert_eq!(loader.state().next_page, 2);
    assert!(loader.state().error.is_some());

    loader.retry().await;
    assert!(loader.state().error.is_some());

    loader.retry().await;
    loader.request_more().await;
    loader.request_more().await;

    let state = loader.state();
    let ids: Vec<_> = state.rows().into_iter().map(|row| row.key).collect();
    assert_eq!(
        ids,
        (0..5).map(|id| ItemKey::Id(id.to_string())).collect::<Vec<_>>()
    );
    assert!(!state.has_more);
    assert_eq!(loader.fetcher().requests(), vec![1, 2, 2, 2, 3]);
}

#[tokio::test]
async fn one_request_per_accepted_command() {
    init_logging();
    let fetcher = ScriptedFetcher::new(vec![ok(jobs_body(0, 1)), ok(jobs_body(1, 1))]);
    let mut loader = PageLoader::new(fetcher);

    loader.request_more().await;
    loader.request_more().await;

    assert_eq!(loader.fetcher().requests(), vec![1, 2]);
    assert_eq!(loader.state().next_page, 3);
}

#[tokio::test]
async fn array_body_does_not_end_the_session() {
    init_logging();
    let fetcher = ScriptedFetcher::new(vec![ok("[[]]".to_string()), ok(jobs_body(0, 3))]);
    let mut loader = PageLoader::new(fetcher);

    loader.request_more().await;
    let state = loader.state();
    assert!(state.has_more);
    assert_eq!(state.phase, LoadPhase::Errored);
    assert_eq!(state.next_page, 1);

    loader.retry().await;
    let state = loader.state();
    assert_eq!(state.items.len(), 3);
    assert_eq!(state.next_page, 2);
    assert_eq!(loader.fetcher().requests(), vec![1, 1]);
}
