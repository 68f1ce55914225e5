/// Substituted when a listing carries no place.
pub const PLACE_PLACEHOLDER: &str = "Location not specified";

/// One job listing as received from the endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: Option<String>,
    pub title: String,
    pub place: String,
}

impl Item {
    /// Builds a fully populated item. Empty ids count as absent and a missing
    /// or empty place becomes [`PLACE_PLACEHOLDER`].
    pub fn new(id: Option<String>, title: impl Into<String>, place: Option<String>) -> Self {
        Self {
            id: id.filter(|id| !id.is_empty()),
            title: title.into(),
            place: place
                .filter(|place| !place.is_empty())
                .unwrap_or_else(|| PLACE_PLACEHOLDER.to_string()),
        }
    }
}

/// Decoded response for one page. `has_more` is derived from the items so the
/// two can never disagree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageResult {
    items: Vec<Item>,
}

impl PageResult {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    /// The endpoint signals end-of-data with an empty page.
    pub fn has_more(&self) -> bool {
        !self.items.is_empty()
    }
}
