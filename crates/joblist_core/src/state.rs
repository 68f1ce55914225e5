use std::fmt;

use engine_logging::{engine_debug, engine_warn};

use crate::view_model::LoaderSnapshot;
use crate::{Item, PageResult};

/// User-facing message for every kind of fetch failure.
pub const FETCH_ERROR_MESSAGE: &str = "Failed to fetch jobs.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Errored,
    /// Terminal: a page came back empty.
    Exhausted,
}

/// Why a fetch settled without a usable page. All kinds recover the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageFailure {
    Network,
    HttpStatus(u16),
    Decode,
}

impl fmt::Display for PageFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageFailure::Network => write!(f, "network error"),
            PageFailure::HttpStatus(code) => write!(f, "http status {code}"),
            PageFailure::Decode => write!(f, "malformed response"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderState {
    items: Vec<Item>,
    next_page: u32,
    is_loading: bool,
    has_more: bool,
    error: Option<String>,
    last_failure: Option<PageFailure>,
    dirty: bool,
}

impl Default for LoaderState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_page: 1,
            is_loading: false,
            has_more: true,
            error: None,
            last_failure: None,
            dirty: false,
        }
    }
}

impl LoaderState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Immutable copy for the rendering side.
    pub fn view(&self) -> LoaderSnapshot {
        LoaderSnapshot {
            items: self.items.clone(),
            next_page: self.next_page,
            is_loading: self.is_loading,
            has_more: self.has_more,
            error: self.error.clone(),
            last_failure: self.last_failure,
            phase: self.phase(),
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn next_page(&self) -> u32 {
        self.next_page
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn phase(&self) -> LoadPhase {
        if self.is_loading {
            LoadPhase::Loading
        } else if !self.has_more {
            LoadPhase::Exhausted
        } else if self.error.is_some() {
            LoadPhase::Errored
        } else {
            LoadPhase::Idle
        }
    }

    /// Returns whether anything changed since the last call and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Marks a fetch for `next_page` as in flight, or returns `None` when the
    /// guard rejects it.
    pub(crate) fn begin_fetch(&mut self) -> Option<u32> {
        if self.is_loading || !self.has_more {
            return None;
        }
        self.is_loading = true;
        self.error = None;
        self.last_failure = None;
        self.dirty = true;
        engine_debug!("Fetching page {}", self.next_page);
        Some(self.next_page)
    }

    pub(crate) fn apply_page(&mut self, page: u32, result: PageResult) {
        if !self.settles_in_flight(page) {
            return;
        }
        self.is_loading = false;
        self.dirty = true;

        if !result.has_more() {
            engine_debug!("Page {} was empty; no more pages", page);
            self.has_more = false;
            return;
        }

        let count = result.items().len();
        self.items.extend(result.into_items());
        self.next_page += 1;
        engine_debug!(
            "Page {} appended {} items (total {})",
            page,
            count,
            self.items.len()
        );
    }

    pub(crate) fn apply_failure(&mut self, page: u32, failure: PageFailure) {
        if !self.settles_in_flight(page) {
            return;
        }
        engine_debug!("Page {} failed: {}", page, failure);
        self.is_loading = false;
        self.error = Some(FETCH_ERROR_MESSAGE.to_string());
        self.last_failure = Some(failure);
        self.dirty = true;
    }

    fn settles_in_flight(&self, page: u32) -> bool {
        if !self.is_loading || page != self.next_page {
            engine_warn!(
                "Ignoring completion for page {} (in flight: {})",
                page,
                if self.is_loading {
                    self.next_page.to_string()
                } else {
                    "none".to_string()
                }
            );
            return false;
        }
        true
    }
}
