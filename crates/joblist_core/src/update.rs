use engine_logging::engine_trace;

use crate::{Effect, LoaderState, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: LoaderState, msg: Msg) -> (LoaderState, Vec<Effect>) {
    let effects = match msg {
        Msg::LoadMoreRequested | Msg::RetryRequested => match state.begin_fetch() {
            Some(page) => vec![Effect::FetchPage { page }],
            None => {
                engine_trace!(
                    "Fetch request ignored: loading={} has_more={}",
                    state.is_loading(),
                    state.has_more()
                );
                Vec::new()
            }
        },
        Msg::PageLoaded { page, result } => {
            state.apply_page(page, result);
            Vec::new()
        }
        Msg::PageFailed { page, failure } => {
            state.apply_failure(page, failure);
            Vec::new()
        }
    };

    (state, effects)
}
