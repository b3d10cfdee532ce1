//! View state - drawer, tab, dropdown and theme transitions
//!
//! All transitions are synchronous and total. The only side effect is the
//! theme write in `toggle_theme`, which goes through a `PreferenceStore`.

use super::ui::{Tab, Theme};
use crate::config::{PreferenceStore, THEME_KEY};
use anyhow::Result;

/// Transient presentation state of the drawer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub active_tab: Tab,
    pub drawer_open: bool,
    /// Tab whose filter dropdown is open; at most one at a time
    pub open_dropdown: Option<Tab>,
    /// Header "more" menu, exclusive with the filter dropdown
    pub more_menu_open: bool,
    pub theme: Theme,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

impl ViewState {
    pub fn new(theme: Theme) -> Self {
        Self {
            active_tab: Tab::Content,
            drawer_open: false,
            open_dropdown: None,
            more_menu_open: false,
            theme,
        }
    }

    /// Start with the theme stored in the preferences (dark if absent)
    pub fn from_preferences(store: &dyn PreferenceStore) -> Self {
        let theme = Theme::from_preference(store.get(THEME_KEY).as_deref());
        Self::new(theme)
    }

    /// Whether the filter dropdown of `tab` is open
    pub fn is_dropdown_open(&self, tab: Tab) -> bool {
        self.open_dropdown == Some(tab)
    }

    /// Whether any dropdown-like overlay is open
    pub fn any_dropdown_open(&self) -> bool {
        self.open_dropdown.is_some() || self.more_menu_open
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Drawer
    // ─────────────────────────────────────────────────────────────────────────

    pub fn open_drawer(&mut self) {
        self.drawer_open = true;
    }

    /// Close the drawer; no dropdown survives a drawer close
    pub fn close_drawer(&mut self) {
        self.drawer_open = false;
        self.close_dropdowns();
    }

    pub fn toggle_drawer(&mut self) {
        if self.drawer_open {
            self.close_drawer();
        } else {
            self.open_drawer();
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Tabs and dropdowns
    // ─────────────────────────────────────────────────────────────────────────

    /// Switch tabs; dropdowns are tab-scoped and close on switch
    pub fn set_active_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
        self.open_dropdown = None;
    }

    /// Open or close the filter dropdown of `tab`
    ///
    /// Only the active tab's dropdown can open, and only while the drawer is open.
    pub fn toggle_dropdown(&mut self, tab: Tab) {
        if self.open_dropdown == Some(tab) {
            self.open_dropdown = None;
            return;
        }
        if !self.drawer_open || tab != self.active_tab {
            tracing::debug!(tab = %tab, active = %self.active_tab, "dropdown request ignored");
            return;
        }
        self.more_menu_open = false;
        self.open_dropdown = Some(tab);
    }

    pub fn toggle_more_menu(&mut self) {
        if self.more_menu_open {
            self.more_menu_open = false;
        } else if self.drawer_open {
            self.open_dropdown = None;
            self.more_menu_open = true;
        }
    }

    pub fn close_dropdowns(&mut self) {
        self.open_dropdown = None;
        self.more_menu_open = false;
    }

    /// Pointer interaction somewhere in the UI
    ///
    /// `inside_dropdown` is the rendering layer's verdict on whether the
    /// target lies within an open dropdown's trigger or body.
    pub fn outside_interaction(&mut self, inside_dropdown: bool) {
        if !inside_dropdown {
            self.close_dropdowns();
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Theme
    // ─────────────────────────────────────────────────────────────────────────

    /// Flip the theme and persist it immediately
    ///
    /// The in-memory theme flips even when the write fails; the error is returned
    /// so the caller can report it.
    pub fn toggle_theme(&mut self, store: &mut dyn PreferenceStore) -> Result<Theme> {
        self.theme = self.theme.toggled();
        store.set(THEME_KEY, self.theme.as_str())?;
        Ok(self.theme)
    }
}
