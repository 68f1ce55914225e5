use crate::{PageFailure, PageResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Presentation reached its "load more" threshold.
    LoadMoreRequested,
    /// User asked to retry after a failed fetch.
    RetryRequested,
    /// Fetch for `page` settled with a decoded page.
    PageLoaded { page: u32, result: PageResult },
    /// Fetch for `page` settled with a failure.
    PageFailed { page: u32, failure: PageFailure },
}
