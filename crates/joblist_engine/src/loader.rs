use std::collections::VecDeque;

use engine_logging::{engine_info, engine_warn};
use joblist_core::{update, Effect, LoaderSnapshot, LoaderState, Msg, PageResult};

use crate::{decode_page, FailureKind, FetchError, Fetcher, ReqwestFetcher};

/// Fetch one page and turn the settled response into a [`PageResult`].
/// Non-2xx statuses and undecodable bodies are failures.
pub async fn fetch_page(fetcher: &dyn Fetcher, page: u32) -> Result<PageResult, FetchError> {
    let response = fetcher.fetch(page).await?;
    if !response.is_success() {
        return Err(FetchError::new(
            FailureKind::HttpStatus(response.status),
            format!("page {page} returned status {}", response.status),
        ));
    }
    decode_page(&response.body).map_err(|err| FetchError::new(FailureKind::Decode, err.to_string()))
}

/// Completion message for the state machine.
pub fn completion_msg(page: u32, result: Result<PageResult, FetchError>) -> Msg {
    match result {
        Ok(result) => {
            engine_info!("Page {} settled with {} items", page, result.items().len());
            Msg::PageLoaded { page, result }
        }
        Err(err) => {
            engine_warn!("Page {} failed: {}", page, err);
            Msg::PageFailed {
                page,
                failure: err.page_failure(),
            }
        }
    }
}

/// Async driver owning the pagination state. `&mut self` on the commands keeps
/// at most one fetch in flight per loader.
pub struct PageLoader<F = ReqwestFetcher> {
    fetcher: F,
    state: LoaderState,
}

impl<F: Fetcher> PageLoader<F> {
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            state: LoaderState::new(),
        }
    }

    /// Fetch the next page unless a fetch is in flight or the data is exhausted.
    pub async fn request_more(&mut self) {
        self.dispatch(Msg::LoadMoreRequested).await;
    }

    /// Re-issue the fetch for the page that last failed.
    pub async fn retry(&mut self) {
        self.dispatch(Msg::RetryRequested).await;
    }

    pub fn state(&self) -> LoaderSnapshot {
        self.state.view()
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    async fn dispatch(&mut self, msg: Msg) {
        let mut inbox = VecDeque::from([msg]);
        while let Some(msg) = inbox.pop_front() {
            let state = std::mem::take(&mut self.state);
            let (state, effects) = update(state, msg);
            self.state = state;
            for effect in effects {
                inbox.push_back(self.run(effect).await);
            }
        }
    }

    async fn run(&self, effect: Effect) -> Msg {
        match effect {
            Effect::FetchPage { page } => {
                engine_info!("Fetching page {}", page);
                completion_msg(page, fetch_page(&self.fetcher, page).await)
            }
        }
    }
}
