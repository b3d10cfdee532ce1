//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Components emit Actions in response to events, and the App processes
//! them to update state.

use crate::model::{SortMode, Tab};
use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for timers
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Force quit without confirmation
    ForceQuit,

    // ─────────────────────────────────────────────────────────────────────────
    // Drawer
    // ─────────────────────────────────────────────────────────────────────────
    OpenDrawer,
    CloseDrawer,
    ToggleDrawer,

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────
    /// Move to next tab
    NextTab,
    /// Move to previous tab
    PrevTab,
    /// Jump to a specific tab
    SetActiveTab(Tab),
    /// Move to next item in the accordion list
    NextItem,
    /// Move to previous item in the accordion list
    PrevItem,
    /// Jump to first item
    FirstItem,
    /// Jump to last item
    LastItem,

    // ─────────────────────────────────────────────────────────────────────────
    // Accordion
    // ─────────────────────────────────────────────────────────────────────────
    /// Expand or collapse the selected item
    ToggleExpand,
    /// Expand or collapse the item at a view position
    ToggleExpandAt(usize),

    // ─────────────────────────────────────────────────────────────────────────
    // Dropdowns
    // ─────────────────────────────────────────────────────────────────────────
    /// Open or close the filter dropdown of a tab
    ToggleDropdown(Tab),
    /// Open or close the header "more" menu
    ToggleMoreMenu,
    /// Pointer pressed at (column, row)
    PointerDown(u16, u16),

    // ─────────────────────────────────────────────────────────────────────────
    // Search
    // ─────────────────────────────────────────────────────────────────────────
    /// Enter search mode
    EnterSearchMode,
    /// Exit search mode
    ExitSearchMode,
    /// Add character to search query
    SearchInput(char),
    /// Remove last character from search query
    SearchBackspace,

    // ─────────────────────────────────────────────────────────────────────────
    // Filters
    // ─────────────────────────────────────────────────────────────────────────
    SetSortMode(SortMode),
    ToggleCategoryTag(String),
    /// Reset the active tab's filters
    ClearFilters,
    /// Reset filters from the more menu and close it
    ResetSettings,

    // ─────────────────────────────────────────────────────────────────────────
    // Theme
    // ─────────────────────────────────────────────────────────────────────────
    ToggleTheme,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    /// Open quit confirmation dialog
    OpenQuitDialog,
    /// Open help dialog showing all keyboard shortcuts
    OpenHelp,
    /// Open the transform controls editor
    OpenTransform,
    /// Close the current modal
    CloseModal,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::OpenDrawer => write!(f, "OpenDrawer"),
            Action::CloseDrawer => write!(f, "CloseDrawer"),
            Action::ToggleDrawer => write!(f, "ToggleDrawer"),
            Action::NextTab => write!(f, "NextTab"),
            Action::PrevTab => write!(f, "PrevTab"),
            Action::SetActiveTab(tab) => write!(f, "SetActiveTab({})", tab),
            Action::NextItem => write!(f, "NextItem"),
            Action::PrevItem => write!(f, "PrevItem"),
            Action::FirstItem => write!(f, "FirstItem"),
            Action::LastItem => write!(f, "LastItem"),
            Action::ToggleExpand => write!(f, "ToggleExpand"),
            Action::ToggleExpandAt(index) => write!(f, "ToggleExpandAt({})", index),
            Action::ToggleDropdown(tab) => write!(f, "ToggleDropdown({})", tab),
            Action::ToggleMoreMenu => write!(f, "ToggleMoreMenu"),
            Action::PointerDown(col, row) => write!(f, "PointerDown({}, {})", col, row),
            Action::EnterSearchMode => write!(f, "EnterSearchMode"),
            Action::ExitSearchMode => write!(f, "ExitSearchMode"),
            Action::SearchInput(c) => write!(f, "SearchInput('{}')", c),
            Action::SearchBackspace => write!(f, "SearchBackspace"),
            Action::SetSortMode(mode) => write!(f, "SetSortMode({})", mode),
            Action::ToggleCategoryTag(tag) => write!(f, "ToggleCategoryTag({})", tag),
            Action::ClearFilters => write!(f, "ClearFilters"),
            Action::ResetSettings => write!(f, "ResetSettings"),
            Action::ToggleTheme => write!(f, "ToggleTheme"),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::OpenTransform => write!(f, "OpenTransform"),
            Action::CloseModal => write!(f, "CloseModal"),
        }
    }
}
