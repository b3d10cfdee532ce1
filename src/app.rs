//! Root application component
//!
//! The App struct implements the Component trait, acting as the root component
//! that delegates event handling and rendering to child components.
//! App is intentionally lean - it coordinates between components but
//! does not contain filtering or view logic itself.

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::rect_contains;
use crate::components::{
    draw_drawer_screen, DrawerComponent, DrawerRenderContext, FilterDropdown, HelpDialog,
    HitRegions, MoreMenu, Palette, QuitDialog, TransformDialog,
};
use crate::config::{Config, PreferenceStore};
use crate::model::modal::{Modal, ModalStack};
use crate::model::transform::TRANSFORM_ITEM_TITLE;
use crate::model::{DomainState, Tab, ViewState};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{layout::Rect, Frame};
use std::time::{Duration, Instant};

// ═══════════════════════════════════════════════════════════════════════════════
// App Struct
// ═══════════════════════════════════════════════════════════════════════════════

/// Main application state - coordinates between components
pub struct App {
    /// Catalog and per-tab filtered views
    pub domain: DomainState,

    /// Drawer, tab, dropdown and theme state
    pub view: ViewState,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// Where the theme preference is read from and written to
    pub preferences: Box<dyn PreferenceStore>,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Error message to display
    pub error: Option<String>,

    /// Status message to display
    pub status_message: Option<String>,

    /// Whether keys go to the search bar
    pub search_mode: bool,

    /// Pending startup auto-open
    auto_open_at: Option<Instant>,

    /// Clickable regions of the last drawn frame
    regions: HitRegions,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub drawer: DrawerComponent,
    pub filter_dropdown: FilterDropdown,
    pub more_menu: MoreMenu,
    pub quit_dialog: QuitDialog,
    pub help_dialog: HelpDialog,
    pub transform_dialog: TransformDialog,
}

// ═══════════════════════════════════════════════════════════════════════════════
// App Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    /// Create the app with the stored theme and a pending auto-open
    pub fn new(config: &Config, preferences: Box<dyn PreferenceStore>) -> App {
        let view = ViewState::from_preferences(&*preferences);
        tracing::info!(theme = view.theme.as_str(), "starting with stored theme");

        App {
            domain: DomainState::default(),
            view,
            modals: ModalStack::new(),
            preferences,
            should_quit: false,
            error: None,
            status_message: None,
            search_mode: false,
            auto_open_at: Some(Instant::now() + Duration::from_millis(config.auto_open_delay_ms)),
            regions: HitRegions::default(),
            drawer: DrawerComponent::new(),
            filter_dropdown: FilterDropdown::new(),
            more_menu: MoreMenu::new(),
            quit_dialog: QuitDialog::default(),
            help_dialog: HelpDialog::default(),
            transform_dialog: TransformDialog::default(),
        }
    }

    fn active_len(&self) -> usize {
        self.domain.view(self.view.active_tab).len()
    }

    /// Move the cursor back to the top after the active view was recomputed
    fn reset_cursor(&mut self) {
        let tab = self.view.active_tab;
        let len = self.active_len();
        self.drawer.select_first(tab, len);
    }

    fn switch_tab(&mut self, tab: Tab) {
        self.view.set_active_tab(tab);
        self.search_mode = false;
        tracing::debug!(tab = %tab, "active tab changed");
    }

    /// Any explicit drawer intent overrides the startup auto-open
    fn cancel_auto_open(&mut self) {
        if self.auto_open_at.take().is_some() {
            tracing::debug!("startup auto-open cancelled");
        }
    }

    fn toggle_theme(&mut self) {
        self.view.more_menu_open = false;
        match self.view.toggle_theme(&mut *self.preferences) {
            Ok(theme) => {
                tracing::info!(theme = theme.as_str(), "theme toggled");
                self.error = None;
                self.status_message = Some(format!("Theme: {}", theme.as_str()));
            }
            Err(e) => {
                tracing::warn!(error = %e, theme = self.view.theme.as_str(), "failed to persist theme");
                self.error = Some(format!("Failed to save theme preference: {}", e));
            }
        }
    }

    fn open_transform(&mut self) {
        let tab = self.view.active_tab;
        let on_transform = tab == Tab::Design
            && self
                .drawer
                .selected(tab)
                .and_then(|index| self.domain.view(tab).get(index))
                .is_some_and(|item| item.title == TRANSFORM_ITEM_TITLE);

        if on_transform {
            self.view.close_dropdowns();
            self.modals.push(Modal::Transform);
        } else {
            self.status_message = Some("Select Design > Transform to edit it".to_string());
        }
    }

    /// Route a left click through outside-click dismissal, then to its target
    fn pointer_down(&mut self, column: u16, row: u16) -> Option<Action> {
        let inside = self.regions.inside_dropdown(column, row);
        self.view.outside_interaction(inside);

        if let Some(index) = self.regions.dropdown_option_at(column, row) {
            if self.view.open_dropdown.is_some() {
                return self.filter_dropdown.action_for(index);
            }
            if self.view.more_menu_open {
                return self.more_menu.action_for(index);
            }
        }

        let hit = |rect: Option<Rect>| {
            rect.is_some_and(|r| rect_contains(r, column, row))
        };
        if hit(self.regions.filter_trigger) {
            return Some(Action::ToggleDropdown(self.view.active_tab));
        }
        if hit(self.regions.more_trigger) {
            return Some(Action::ToggleMoreMenu);
        }
        if inside {
            return None;
        }
        if hit(self.regions.launcher) {
            return Some(Action::OpenDrawer);
        }
        if let Some(tab) = self.regions.tab_at(column, row) {
            return Some(Action::SetActiveTab(tab));
        }
        self.regions
            .item_at(column, row)
            .map(Action::ToggleExpandAt)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Ok(Some(Action::ForceQuit));
        }

        if let Some(modal) = self.modals.top().cloned() {
            self.handle_modal_key_event(&modal, key)
        } else if self.search_mode {
            self.handle_search_key_event(key)
        } else if !self.view.drawer_open {
            self.handle_closed_key_event(key)
        } else if self.view.open_dropdown.is_some() {
            self.filter_dropdown.handle_key_event(key)
        } else if self.view.more_menu_open {
            self.more_menu.handle_key_event(key)
        } else {
            self.drawer.active_tab = self.view.active_tab;
            self.drawer.handle_key_event(key)
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if let Some(Modal::Transform) = self.modals.top() {
            return self.transform_dialog.handle_mouse_event(mouse);
        }
        if !self.modals.is_empty() {
            return Ok(None);
        }

        let action = match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                Some(Action::PointerDown(mouse.column, mouse.row))
            }
            MouseEventKind::ScrollDown if self.view.drawer_open && !self.view.any_dropdown_open() => {
                Some(Action::NextItem)
            }
            MouseEventKind::ScrollUp if self.view.drawer_open && !self.view.any_dropdown_open() => {
                Some(Action::PrevItem)
            }
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let tab = self.view.active_tab;

        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick => {
                if let Some(deadline) = self.auto_open_at {
                    if Instant::now() >= deadline {
                        self.auto_open_at = None;
                        if !self.view.drawer_open && !self.should_quit {
                            tracing::debug!("startup auto-open fired");
                            return Ok(Some(Action::OpenDrawer));
                        }
                    }
                }
            }
            Action::ForceQuit => {
                self.should_quit = true;
            }
            Action::Resize(_, _) => {}

            // ─────────────────────────────────────────────────────────────────
            // Drawer
            // ─────────────────────────────────────────────────────────────────
            Action::OpenDrawer => {
                self.cancel_auto_open();
                self.view.open_drawer();
                tracing::debug!("drawer opened");
            }
            Action::CloseDrawer => {
                self.cancel_auto_open();
                self.view.close_drawer();
                self.search_mode = false;
                tracing::debug!("drawer closed");
            }
            Action::ToggleDrawer => {
                self.cancel_auto_open();
                self.view.toggle_drawer();
                if !self.view.drawer_open {
                    self.search_mode = false;
                }
                tracing::debug!(open = self.view.drawer_open, "drawer toggled");
            }

            // ─────────────────────────────────────────────────────────────────
            // Navigation (delegate to DrawerComponent)
            // ─────────────────────────────────────────────────────────────────
            Action::NextTab => self.switch_tab(tab.next()),
            Action::PrevTab => self.switch_tab(tab.previous()),
            Action::SetActiveTab(target) => self.switch_tab(target),
            Action::NextItem => {
                let len = self.active_len();
                self.drawer.next(tab, len);
            }
            Action::PrevItem => {
                let len = self.active_len();
                self.drawer.previous(tab, len);
            }
            Action::FirstItem => {
                let len = self.active_len();
                self.drawer.select_first(tab, len);
            }
            Action::LastItem => {
                let len = self.active_len();
                self.drawer.select_last(tab, len);
            }

            // ─────────────────────────────────────────────────────────────────
            // Accordion
            // ─────────────────────────────────────────────────────────────────
            Action::ToggleExpand => {
                if let Some(index) = self.drawer.selected(tab) {
                    self.domain.toggle_expand(tab, index);
                }
            }
            Action::ToggleExpandAt(index) => {
                let len = self.active_len();
                self.drawer.select(tab, index, len);
                self.domain.toggle_expand(tab, index);
            }

            // ─────────────────────────────────────────────────────────────────
            // Dropdowns
            // ─────────────────────────────────────────────────────────────────
            Action::ToggleDropdown(target) => {
                let was_open = self.view.is_dropdown_open(target);
                self.view.toggle_dropdown(target);
                if !was_open && self.view.is_dropdown_open(target) {
                    self.filter_dropdown
                        .open_for(target, self.domain.catalog.tags(target));
                }
            }
            Action::ToggleMoreMenu => {
                self.view.toggle_more_menu();
                if self.view.more_menu_open {
                    self.more_menu.reset();
                }
            }
            Action::PointerDown(column, row) => {
                return Ok(self.pointer_down(column, row));
            }

            // ─────────────────────────────────────────────────────────────────
            // Search
            // ─────────────────────────────────────────────────────────────────
            Action::EnterSearchMode => {
                if self.view.drawer_open {
                    self.view.close_dropdowns();
                    self.search_mode = true;
                }
            }
            Action::ExitSearchMode => {
                self.search_mode = false;
            }
            Action::SearchInput(c) => {
                self.domain.search_input(tab, c);
                self.reset_cursor();
            }
            Action::SearchBackspace => {
                self.domain.search_backspace(tab);
                self.reset_cursor();
            }

            // ─────────────────────────────────────────────────────────────────
            // Filters
            // ─────────────────────────────────────────────────────────────────
            Action::SetSortMode(mode) => {
                self.domain.set_sort_mode(tab, mode);
                self.reset_cursor();
            }
            Action::ToggleCategoryTag(tag) => {
                self.domain.toggle_category_tag(tab, &tag);
                self.reset_cursor();
            }
            Action::ClearFilters => {
                self.domain.clear_filters(tab);
                self.reset_cursor();
                self.status_message = Some(format!("{} filters cleared", tab.name()));
            }
            Action::ResetSettings => {
                self.view.more_menu_open = false;
                return Ok(Some(Action::ClearFilters));
            }

            // ─────────────────────────────────────────────────────────────────
            // Theme
            // ─────────────────────────────────────────────────────────────────
            Action::ToggleTheme => self.toggle_theme(),

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => {
                self.view.close_dropdowns();
                self.modals.push(Modal::QuitConfirm);
            }
            Action::OpenHelp => {
                self.view.close_dropdowns();
                self.help_dialog.scroll_offset = 0;
                self.modals.toggle(Modal::Help);
            }
            Action::OpenTransform => self.open_transform(),
            Action::CloseModal => {
                self.modals.pop();
            }
        }

        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let palette = Palette::for_theme(self.view.theme);
        self.quit_dialog.palette = palette;
        self.help_dialog.palette = palette;
        self.transform_dialog.palette = palette;
        self.more_menu.palette = palette;
        self.regions.clear();

        // Build render context
        let ctx = DrawerRenderContext {
            domain: &self.domain,
            view: &self.view,
            transform: &self.transform_dialog.state,
            search_mode: self.search_mode,
            error: self.error.as_deref(),
            status_message: self.status_message.as_deref(),
        };
        let layout = draw_drawer_screen(frame, area, &mut self.drawer, &ctx, &mut self.regions)?;

        // Dropdowns render over the drawer, below any modal
        if let Some(drawer_layout) = layout.drawer {
            if let Some(tab) = self.view.open_dropdown {
                self.filter_dropdown.sync(self.domain.filter(tab), palette);
                self.filter_dropdown.draw_at(
                    frame,
                    drawer_layout.filter_trigger,
                    drawer_layout.area,
                    &mut self.regions,
                )?;
            } else if self.view.more_menu_open {
                self.more_menu.draw_at(
                    frame,
                    drawer_layout.more_trigger,
                    drawer_layout.area,
                    &mut self.regions,
                )?;
            }
        }

        // Draw modal overlay if active
        if let Some(modal) = self.modals.top().cloned() {
            self.draw_modal(frame, area, &modal)?;
        }
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Helper Methods
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    fn handle_modal_key_event(&mut self, modal: &Modal, key: KeyEvent) -> Result<Option<Action>> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.handle_key_event(key),
            Modal::Help => self.help_dialog.handle_key_event(key),
            Modal::Transform => self.transform_dialog.handle_key_event(key),
        }
    }

    fn handle_search_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Enter => Some(Action::ExitSearchMode),
            KeyCode::Backspace => Some(Action::SearchBackspace),
            KeyCode::Char(c) => Some(Action::SearchInput(c)),
            _ => None,
        };
        Ok(action)
    }

    /// Keys while only the canvas is showing
    fn handle_closed_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('o') | KeyCode::Enter => Some(Action::OpenDrawer),
            KeyCode::Char('t') => Some(Action::ToggleTheme),
            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::OpenQuitDialog),
            _ => None,
        };
        Ok(action)
    }

    fn draw_modal(&mut self, frame: &mut Frame, area: Rect, modal: &Modal) -> Result<()> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.draw(frame, area)?,
            Modal::Help => self.help_dialog.draw(frame, area)?,
            Modal::Transform => self.transform_dialog.draw(frame, area)?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MemoryPreferences, THEME_KEY};
    use crate::model::{SortMode, Theme};
    use ratatui::{backend::TestBackend, Terminal};

    struct FailingPreferences;

    impl PreferenceStore for FailingPreferences {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&mut self, _key: &str, _value: &str) -> anyhow::Result<()> {
            anyhow::bail!("disk full")
        }
    }

    fn config(delay_ms: u64) -> Config {
        Config {
            auto_open_delay_ms: delay_ms,
            ..Config::default()
        }
    }

    fn test_app() -> App {
        App::new(&config(60_000), Box::new(MemoryPreferences::default()))
    }

    /// Feed an action and its follow-ups, like the main loop does
    fn run(app: &mut App, action: Action) {
        let mut current = Some(action);
        while let Some(a) = current {
            current = app.update(a).unwrap();
        }
    }

    fn press(app: &mut App, code: KeyCode) {
        if let Some(action) = app
            .handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
            .unwrap()
        {
            run(app, action);
        }
    }

    fn draw(app: &mut App) {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal
            .draw(|frame| app.draw(frame, frame.area()).unwrap())
            .unwrap();
    }

    fn titles(app: &App, tab: Tab) -> Vec<String> {
        app.domain.view(tab).iter().map(|i| i.title.clone()).collect()
    }

    #[test]
    fn test_auto_open_fires_on_tick() {
        let mut app = App::new(&config(0), Box::new(MemoryPreferences::default()));
        assert!(!app.view.drawer_open);
        run(&mut app, Action::Tick);
        assert!(app.view.drawer_open);
        assert!(app.auto_open_at.is_none());
    }

    #[test]
    fn test_auto_open_cancelled_by_user_toggle() {
        let mut app = App::new(&config(0), Box::new(MemoryPreferences::default()));
        run(&mut app, Action::ToggleDrawer);
        run(&mut app, Action::ToggleDrawer);
        run(&mut app, Action::Tick);
        assert!(!app.view.drawer_open);
    }

    #[test]
    fn test_theme_loaded_and_persisted() {
        let mut store = MemoryPreferences::default();
        store.set(THEME_KEY, "light").unwrap();
        let mut app = App::new(&config(0), Box::new(store));
        assert_eq!(app.view.theme, Theme::Light);

        run(&mut app, Action::ToggleTheme);
        assert_eq!(app.view.theme, Theme::Dark);
        assert_eq!(app.preferences.get(THEME_KEY).as_deref(), Some("dark"));
        run(&mut app, Action::ToggleTheme);
        assert_eq!(app.preferences.get(THEME_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn test_failed_theme_write_still_flips() {
        let mut app = App::new(&config(0), Box::new(FailingPreferences));
        run(&mut app, Action::ToggleTheme);
        assert_eq!(app.view.theme, Theme::Light);
        assert!(app.error.as_deref().unwrap().contains("disk full"));
    }

    #[test]
    fn test_search_keys_filter_active_tab() {
        let mut app = test_app();
        run(&mut app, Action::OpenDrawer);
        press(&mut app, KeyCode::Char('/'));
        assert!(app.search_mode);
        for c in "gallery".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);
        assert!(!app.search_mode);
        assert_eq!(titles(&app, Tab::Content), vec!["Media Gallery"]);
        assert_eq!(app.drawer.selected(Tab::Content), Some(0));
        // other tabs are untouched
        assert_eq!(app.domain.view(Tab::Design).len(), 10);
    }

    #[test]
    fn test_filter_dropdown_keys() {
        let mut app = test_app();
        run(&mut app, Action::OpenDrawer);
        press(&mut app, KeyCode::Char('f'));
        assert_eq!(app.view.open_dropdown, Some(Tab::Content));

        // second option is A-Z
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.domain.filter(Tab::Content).sort_mode, SortMode::AlphaAsc);
        assert_eq!(titles(&app, Tab::Content)[0], "Analytics Dashboard");
        assert_eq!(app.view.open_dropdown, Some(Tab::Content));

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.view.open_dropdown, None);
        assert!(app.view.drawer_open);
        press(&mut app, KeyCode::Esc);
        assert!(!app.view.drawer_open);
    }

    #[test]
    fn test_tab_switch_closes_dropdown() {
        let mut app = test_app();
        run(&mut app, Action::OpenDrawer);
        run(&mut app, Action::SetActiveTab(Tab::Design));
        run(&mut app, Action::ToggleDropdown(Tab::Design));
        run(&mut app, Action::SetActiveTab(Tab::Advanced));
        assert_eq!(app.view.open_dropdown, None);
        assert_eq!(app.view.active_tab, Tab::Advanced);
    }

    #[test]
    fn test_more_menu_reset_clears_filters() {
        let mut app = test_app();
        run(&mut app, Action::OpenDrawer);
        run(&mut app, Action::ToggleCategoryTag("media".to_string()));
        assert_eq!(app.domain.view(Tab::Content).len(), 4);

        press(&mut app, KeyCode::Char('m'));
        assert!(app.view.more_menu_open);
        press(&mut app, KeyCode::Enter);
        assert!(!app.view.more_menu_open);
        assert_eq!(app.domain.view(Tab::Content).len(), 10);
    }

    #[test]
    fn test_click_outside_closes_dropdown() {
        let mut app = test_app();
        run(&mut app, Action::OpenDrawer);
        run(&mut app, Action::ToggleDropdown(Tab::Content));
        draw(&mut app);

        // the canvas sits left of the drawer
        run(&mut app, Action::PointerDown(2, 10));
        assert_eq!(app.view.open_dropdown, None);
        assert!(app.view.drawer_open);
    }

    #[test]
    fn test_click_inside_dropdown_keeps_it_open() {
        let mut app = test_app();
        run(&mut app, Action::OpenDrawer);
        run(&mut app, Action::ToggleDropdown(Tab::Content));
        draw(&mut app);

        let (rect, index) = app.regions.dropdown_options[1];
        assert_eq!(index, 1);
        run(&mut app, Action::PointerDown(rect.x + 1, rect.y));
        assert_eq!(app.view.open_dropdown, Some(Tab::Content));
        assert_eq!(app.domain.filter(Tab::Content).sort_mode, SortMode::AlphaAsc);
    }

    #[test]
    fn test_click_tab_and_item() {
        let mut app = test_app();
        run(&mut app, Action::OpenDrawer);
        draw(&mut app);

        let (rect, tab) = app.regions.tabs[1];
        assert_eq!(tab, Tab::Design);
        run(&mut app, Action::PointerDown(rect.x, rect.y));
        assert_eq!(app.view.active_tab, Tab::Design);

        draw(&mut app);
        let (rect, index) = app.regions.items[2];
        run(&mut app, Action::PointerDown(rect.x + 3, rect.y));
        assert!(app.domain.view(Tab::Design)[index].expanded);
        assert_eq!(app.drawer.selected(Tab::Design), Some(index));
    }

    #[test]
    fn test_launcher_click_opens_drawer() {
        let mut app = test_app();
        draw(&mut app);
        let launcher = app.regions.launcher.unwrap();
        run(&mut app, Action::PointerDown(launcher.x, launcher.y));
        assert!(app.view.drawer_open);
    }

    #[test]
    fn test_transform_editor_only_on_transform_item() {
        let mut app = test_app();
        run(&mut app, Action::OpenDrawer);
        run(&mut app, Action::OpenTransform);
        assert!(app.modals.is_empty());
        assert!(app.status_message.is_some());

        run(&mut app, Action::SetActiveTab(Tab::Design));
        let index = titles(&app, Tab::Design)
            .iter()
            .position(|t| t == TRANSFORM_ITEM_TITLE)
            .unwrap();
        let len = app.active_len();
        app.drawer.select(Tab::Design, index, len);
        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.modals.top(), Some(&Modal::Transform));

        // keys go to the editor while it is open
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.transform_dialog.state.selected_dot, 3);
        press(&mut app, KeyCode::Esc);
        assert!(app.modals.is_empty());
        assert!(app.view.drawer_open);
    }

    #[test]
    fn test_quit_flow() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.modals.top(), Some(&Modal::QuitConfirm));
        press(&mut app, KeyCode::Char('y'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_modal_blocks_pointer() {
        let mut app = test_app();
        run(&mut app, Action::OpenHelp);
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 1,
            row: 1,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(app.handle_mouse_event(click).unwrap(), None);
    }
}
