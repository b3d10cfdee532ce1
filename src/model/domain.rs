//! Domain state - catalog plus the filtered view of every tab
//!
//! Every filter input change goes through here so that the tab's view list
//! is recomputed synchronously.

use super::catalog::Catalog;
use super::filter::{compute_view, FilterState, SortMode};
use super::item::Item;
use super::ui::Tab;
use std::collections::HashSet;

/// Filter inputs and current view list of one tab
#[derive(Debug, Clone, Default)]
pub struct TabView {
    pub filter: FilterState,
    /// Filtered and sorted items, with expansion flags
    pub items: Vec<Item>,
}

impl TabView {
    fn new(seeds: &[Item]) -> Self {
        let filter = FilterState::default();
        let items = compute_view(seeds, &filter);
        Self { filter, items }
    }

    /// Recompute the view; items still present keep their expansion flag
    fn refresh(&mut self, seeds: &[Item]) {
        let expanded: HashSet<usize> = self
            .items
            .iter()
            .filter(|item| item.expanded)
            .map(|item| item.original_index)
            .collect();

        let mut items = compute_view(seeds, &self.filter);
        for item in &mut items {
            item.expanded = expanded.contains(&item.original_index);
        }
        self.items = items;
    }
}

/// Domain state containing the catalog and per-tab views
#[derive(Debug, Clone)]
pub struct DomainState {
    pub catalog: Catalog,
    tabs: Vec<TabView>,
}

impl Default for DomainState {
    fn default() -> Self {
        Self::new(Catalog::seeded())
    }
}

impl DomainState {
    pub fn new(catalog: Catalog) -> Self {
        let tabs = Tab::all()
            .into_iter()
            .map(|tab| TabView::new(catalog.items(tab)))
            .collect();
        Self { catalog, tabs }
    }

    pub fn tab(&self, tab: Tab) -> &TabView {
        &self.tabs[tab.index()]
    }

    /// Current view list of a tab
    pub fn view(&self, tab: Tab) -> &[Item] {
        &self.tab(tab).items
    }

    pub fn filter(&self, tab: Tab) -> &FilterState {
        &self.tab(tab).filter
    }

    fn refresh(&mut self, tab: Tab) {
        let seeds = self.catalog.items(tab);
        self.tabs[tab.index()].refresh(seeds);
        tracing::debug!(
            tab = %tab,
            visible = self.tabs[tab.index()].items.len(),
            "view recomputed"
        );
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Filter intents
    // ─────────────────────────────────────────────────────────────────────────

    pub fn set_search_term(&mut self, tab: Tab, term: &str) {
        self.tabs[tab.index()].filter.search_term = term.to_string();
        self.refresh(tab);
    }

    /// Append a character to the tab's search term
    pub fn search_input(&mut self, tab: Tab, c: char) {
        let mut term = self.filter(tab).search_term.clone();
        term.push(c);
        self.set_search_term(tab, &term);
    }

    /// Remove the last character of the tab's search term
    pub fn search_backspace(&mut self, tab: Tab) {
        let mut term = self.filter(tab).search_term.clone();
        if term.pop().is_some() {
            self.set_search_term(tab, &term);
        }
    }

    pub fn set_sort_mode(&mut self, tab: Tab, mode: SortMode) {
        self.tabs[tab.index()].filter.sort_mode = mode;
        self.refresh(tab);
    }

    /// Toggle a category tag; tags the tab's catalog does not carry are ignored
    pub fn toggle_category_tag(&mut self, tab: Tab, tag: &str) {
        if !self.catalog.has_tag(tab, tag) {
            tracing::debug!(tab = %tab, tag, "ignoring unknown category tag");
            return;
        }
        self.tabs[tab.index()].filter.toggle_tag(tag);
        self.refresh(tab);
    }

    /// Reset the tab's filter to defaults
    pub fn clear_filters(&mut self, tab: Tab) {
        self.tabs[tab.index()].filter.clear();
        self.refresh(tab);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Expansion
    // ─────────────────────────────────────────────────────────────────────────

    /// Flip `expanded` on the view item at `index`; out of range is a no-op
    pub fn toggle_expand(&mut self, tab: Tab, index: usize) {
        if let Some(item) = self.tabs[tab.index()].items.get_mut(index) {
            item.expanded = !item.expanded;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expanded_titles(domain: &DomainState, tab: Tab) -> Vec<String> {
        domain
            .view(tab)
            .iter()
            .filter(|i| i.expanded)
            .map(|i| i.title.clone())
            .collect()
    }

    #[test]
    fn test_initial_views_match_catalog() {
        let domain = DomainState::default();
        for tab in Tab::all() {
            assert_eq!(domain.view(tab), domain.catalog.items(tab));
            assert_eq!(domain.filter(tab), &FilterState::default());
        }
    }

    #[test]
    fn test_filters_are_scoped_to_one_tab() {
        let mut domain = DomainState::default();
        domain.set_search_term(Tab::Content, "gallery");
        assert_eq!(domain.view(Tab::Content).len(), 1);
        assert_eq!(domain.view(Tab::Design).len(), 10);
        assert!(domain.filter(Tab::Design).search_term.is_empty());
    }

    #[test]
    fn test_search_input_and_backspace() {
        let mut domain = DomainState::default();
        for c in "secu".chars() {
            domain.search_input(Tab::Advanced, c);
        }
        assert_eq!(domain.view(Tab::Advanced)[0].title, "Security");
        for _ in 0..4 {
            domain.search_backspace(Tab::Advanced);
        }
        assert_eq!(domain.view(Tab::Advanced).len(), 10);
        // backspace on an empty term is harmless
        domain.search_backspace(Tab::Advanced);
        assert_eq!(domain.filter(Tab::Advanced).search_term, "");
    }

    #[test]
    fn test_toggle_expand_uses_view_position() {
        let mut domain = DomainState::default();
        domain.set_sort_mode(Tab::Content, SortMode::AlphaAsc);
        domain.toggle_expand(Tab::Content, 0);
        assert_eq!(expanded_titles(&domain, Tab::Content), vec!["Analytics Dashboard"]);
        domain.toggle_expand(Tab::Content, 0);
        assert!(expanded_titles(&domain, Tab::Content).is_empty());
        // seeds stay untouched
        assert!(domain.catalog.items(Tab::Content).iter().all(|i| !i.expanded));
    }

    #[test]
    fn test_toggle_expand_out_of_range_is_noop() {
        let mut domain = DomainState::default();
        domain.set_search_term(Tab::Design, "shadow");
        domain.toggle_expand(Tab::Design, 5);
        assert_eq!(domain.view(Tab::Design).len(), 1);
        assert!(expanded_titles(&domain, Tab::Design).is_empty());
    }

    #[test]
    fn test_expansion_survives_refilter_only_when_still_visible() {
        let mut domain = DomainState::default();
        // Sizing (0) and Border (2)
        domain.toggle_expand(Tab::Design, 0);
        domain.toggle_expand(Tab::Design, 2);

        domain.set_search_term(Tab::Design, "border");
        assert_eq!(expanded_titles(&domain, Tab::Design), vec!["Border"]);

        domain.set_search_term(Tab::Design, "");
        assert_eq!(expanded_titles(&domain, Tab::Design), vec!["Border"]);
    }

    #[test]
    fn test_unknown_category_tag_is_ignored() {
        let mut domain = DomainState::default();
        domain.toggle_category_tag(Tab::Design, "media");
        assert!(domain.filter(Tab::Design).active_category_tags.is_empty());

        domain.toggle_category_tag(Tab::Design, "effects");
        let titles: Vec<&str> = domain
            .view(Tab::Design)
            .iter()
            .map(|i| i.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Filters", "Transform"]);
    }

    #[test]
    fn test_clear_filters_restores_seed_view() {
        let mut domain = DomainState::default();
        domain.toggle_category_tag(Tab::Advanced, "code");
        domain.set_sort_mode(Tab::Advanced, SortMode::AlphaDesc);
        domain.set_search_term(Tab::Advanced, "custom");
        domain.clear_filters(Tab::Advanced);
        assert_eq!(domain.view(Tab::Advanced), domain.catalog.items(Tab::Advanced));
        assert!(!domain.filter(Tab::Advanced).is_active());
    }
}
