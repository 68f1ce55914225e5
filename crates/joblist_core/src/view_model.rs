use crate::{Item, LoadPhase, PageFailure};

/// Identity used by list renderers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ItemKey {
    Id(String),
    /// Fallback when the listing has no id. Duplicate upstream ids are not
    /// deduplicated.
    Position(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRow {
    pub key: ItemKey,
    pub title: String,
    pub place: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoaderSnapshot {
    pub items: Vec<Item>,
    pub next_page: u32,
    pub is_loading: bool,
    pub has_more: bool,
    pub error: Option<String>,
    pub last_failure: Option<PageFailure>,
    pub phase: LoadPhase,
}

impl LoaderSnapshot {
    pub fn rows(&self) -> Vec<ItemRow> {
        self.items
            .iter()
            .enumerate()
            .map(|(index, item)| ItemRow {
                key: item
                    .id
                    .clone()
                    .map_or(ItemKey::Position(index), ItemKey::Id),
                title: item.title.clone(),
                place: item.place.clone(),
            })
            .collect()
    }

    /// True when the list should show its "no jobs" placeholder.
    pub fn is_empty_and_settled(&self) -> bool {
        self.items.is_empty() && !self.is_loading
    }
}
