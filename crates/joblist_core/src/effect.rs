#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue exactly one request for this 1-based page.
    FetchPage { page: u32 },
}
