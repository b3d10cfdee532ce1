//! Filter engine - category filter, search, then sort
//!
//! One engine serves every tab; each tab owns its own `FilterState`.

use super::item::Item;
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;

/// Sort order of a view list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Seed order
    #[default]
    Default,
    AlphaAsc,
    AlphaDesc,
}

impl SortMode {
    pub fn label(&self) -> &str {
        match self {
            SortMode::Default => "Default order",
            SortMode::AlphaAsc => "Name (A-Z)",
            SortMode::AlphaDesc => "Name (Z-A)",
        }
    }
}

/// Unknown names fall back to `SortMode::Default`
impl From<&str> for SortMode {
    fn from(value: &str) -> Self {
        match value {
            "alpha-asc" | "alphabetical-asc" => SortMode::AlphaAsc,
            "alpha-desc" | "alphabetical-desc" => SortMode::AlphaDesc,
            _ => SortMode::Default,
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortMode::Default => "default",
            SortMode::AlphaAsc => "alpha-asc",
            SortMode::AlphaDesc => "alpha-desc",
        };
        write!(f, "{}", name)
    }
}

/// Filter inputs of one tab
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub search_term: String,
    pub sort_mode: SortMode,
    /// Empty means no category restriction
    pub active_category_tags: BTreeSet<String>,
}

impl FilterState {
    /// Whether any input differs from the defaults
    pub fn is_active(&self) -> bool {
        !self.search_term.trim().is_empty()
            || self.sort_mode != SortMode::Default
            || !self.active_category_tags.is_empty()
    }

    /// Flip membership of a tag; returns true if it is now active
    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        if self.active_category_tags.remove(tag) {
            false
        } else {
            self.active_category_tags.insert(tag.to_string());
            true
        }
    }

    pub fn clear(&mut self) {
        *self = FilterState::default();
    }
}

/// Produce the view list of a tab from its seed list
///
/// Steps always run in this order: category filter, search, sort.
/// The catalog is never touched; the result is a fresh copy.
pub fn compute_view(catalog: &[Item], state: &FilterState) -> Vec<Item> {
    let mut items: Vec<Item> = if state.active_category_tags.is_empty() {
        catalog.to_vec()
    } else {
        catalog
            .iter()
            .filter(|item| state.active_category_tags.contains(&item.category))
            .cloned()
            .collect()
    };

    let term = state.search_term.trim();
    if !term.is_empty() {
        let needle = term.to_lowercase();
        items.retain(|item| item.matches(&needle));
    }

    // sort_by is stable, so equal titles keep their relative order
    match state.sort_mode {
        SortMode::Default => items.sort_by_key(|item| item.original_index),
        SortMode::AlphaAsc => items.sort_by(|a, b| locale_cmp(&a.title, &b.title)),
        SortMode::AlphaDesc => items.sort_by(|a, b| locale_cmp(&b.title, &a.title)),
    }

    items
}

/// Case-insensitive primary order, lowercase before uppercase on ties
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}
