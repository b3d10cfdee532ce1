//! Filter dropdown component
//!
//! Lists the sort modes, the active tab's category tags and a clear entry.
//! Choosing an entry emits a filter Action; the dropdown stays open.

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::{dropdown_popup, HitRegions};
use crate::components::palette::Palette;
use crate::model::{FilterState, SortMode, Tab, Theme};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
    Frame,
};

const POPUP_WIDTH: u16 = 30;

/// Sort entries by their option value, in display order
const SORT_VALUES: [&str; 3] = ["default", "alpha-asc", "alpha-desc"];

/// One selectable row of the dropdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropdownOption {
    Sort(SortMode),
    Category(String),
    Clear,
}

/// Filter dropdown for the active tab
pub struct FilterDropdown {
    pub tab: Tab,
    pub options: Vec<DropdownOption>,
    pub selected_index: usize,
    pub list_state: ListState,
    /// Filter of `tab`, refreshed before each draw
    pub filter: FilterState,
    pub palette: Palette,
}

impl Default for FilterDropdown {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterDropdown {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            tab: Tab::Content,
            options: Vec::new(),
            selected_index: 0,
            list_state,
            filter: FilterState::default(),
            palette: Palette::for_theme(Theme::default()),
        }
    }

    /// Rebuild the options for `tab` and reset the cursor
    pub fn open_for(&mut self, tab: Tab, tags: Vec<String>) {
        self.tab = tab;
        self.options = SORT_VALUES
            .into_iter()
            .map(|value| DropdownOption::Sort(SortMode::from(value)))
            .chain(tags.into_iter().map(DropdownOption::Category))
            .chain(std::iter::once(DropdownOption::Clear))
            .collect();
        self.selected_index = 0;
        self.list_state = ListState::default();
        self.list_state.select(Some(0));
    }

    pub fn sync(&mut self, filter: &FilterState, palette: Palette) {
        self.filter = filter.clone();
        self.palette = palette;
    }

    /// Action for the option at `index`
    pub fn action_for(&self, index: usize) -> Option<Action> {
        let action = match self.options.get(index)? {
            DropdownOption::Sort(mode) => Action::SetSortMode(*mode),
            DropdownOption::Category(tag) => Action::ToggleCategoryTag(tag.clone()),
            DropdownOption::Clear => Action::ClearFilters,
        };
        Some(action)
    }

    fn select_next(&mut self) {
        if self.selected_index + 1 < self.options.len() {
            self.selected_index += 1;
            self.list_state.select(Some(self.selected_index));
        }
    }

    fn select_prev(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
            self.list_state.select(Some(self.selected_index));
        }
    }

    /// Draw below `anchor` and record the body and option rows
    pub fn draw_at(
        &mut self,
        frame: &mut Frame,
        anchor: Rect,
        bounds: Rect,
        regions: &mut HitRegions,
    ) -> Result<()> {
        let height = self.options.len() as u16 + 2;
        let popup = dropdown_popup(anchor, bounds, POPUP_WIDTH, height);
        self.draw(frame, popup)?;

        regions.dropdown_body = Some(popup);
        let inner = Rect::new(
            popup.x + 1,
            popup.y + 1,
            popup.width.saturating_sub(2),
            popup.height.saturating_sub(2),
        );
        let offset = self.list_state.offset();
        for row in 0..inner.height {
            let index = offset + row as usize;
            if index >= self.options.len() {
                break;
            }
            regions
                .dropdown_options
                .push((Rect::new(inner.x, inner.y + row, inner.width, 1), index));
        }
        Ok(())
    }

    fn option_line(&self, option: &DropdownOption) -> Line<'static> {
        let p = &self.palette;
        match option {
            DropdownOption::Sort(mode) => {
                let active = self.filter.sort_mode == *mode;
                Line::from(vec![
                    Span::styled(
                        if active { "◉ " } else { "○ " },
                        Style::default().fg(p.active),
                    ),
                    Span::styled(
                        mode.label().to_string(),
                        if active { p.title() } else { Style::default().fg(p.fg) },
                    ),
                ])
            }
            DropdownOption::Category(tag) => {
                let active = self.filter.active_category_tags.contains(tag);
                Line::from(vec![
                    Span::styled(
                        if active { "☑ " } else { "☐ " },
                        Style::default().fg(p.active),
                    ),
                    Span::styled(
                        tag.clone(),
                        if active { p.title() } else { Style::default().fg(p.fg) },
                    ),
                ])
            }
            DropdownOption::Clear => Line::from(vec![
                Span::styled("✕ ", Style::default().fg(p.error)),
                Span::styled("Clear all filters", Style::default().fg(p.muted)),
            ]),
        }
    }
}

impl Component for FilterDropdown {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('f') => Some(Action::ToggleDropdown(self.tab)),
            KeyCode::Enter | KeyCode::Char(' ') => self.action_for(self.selected_index),
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_prev();
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        frame.render_widget(Clear, area);

        let items: Vec<ListItem> = self
            .options
            .iter()
            .map(|option| ListItem::new(self.option_line(option)))
            .collect();

        let p = self.palette;
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Sort & Filter ")
                    .title_style(p.title())
                    .border_style(Style::default().fg(p.accent))
                    .style(p.base()),
            )
            .highlight_style(p.highlight());

        frame.render_stateful_widget(list, area, &mut self.list_state);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn dropdown() -> FilterDropdown {
        let mut dropdown = FilterDropdown::new();
        dropdown.open_for(Tab::Design, vec!["effects".to_string(), "layout".to_string()]);
        dropdown
    }

    #[test]
    fn test_options_order() {
        let dropdown = dropdown();
        assert_eq!(
            dropdown.options,
            vec![
                DropdownOption::Sort(SortMode::Default),
                DropdownOption::Sort(SortMode::AlphaAsc),
                DropdownOption::Sort(SortMode::AlphaDesc),
                DropdownOption::Category("effects".to_string()),
                DropdownOption::Category("layout".to_string()),
                DropdownOption::Clear,
            ]
        );
    }

    #[test]
    fn test_keys_move_cursor_and_emit_actions() {
        let mut dropdown = dropdown();
        dropdown.handle_key_event(key(KeyCode::Char('j'))).unwrap();
        assert_eq!(
            dropdown.handle_key_event(key(KeyCode::Enter)).unwrap(),
            Some(Action::SetSortMode(SortMode::AlphaAsc))
        );

        for _ in 0..10 {
            dropdown.handle_key_event(key(KeyCode::Down)).unwrap();
        }
        assert_eq!(dropdown.selected_index, 5);
        assert_eq!(
            dropdown.handle_key_event(key(KeyCode::Char(' '))).unwrap(),
            Some(Action::ClearFilters)
        );

        dropdown.handle_key_event(key(KeyCode::Up)).unwrap();
        assert_eq!(
            dropdown.handle_key_event(key(KeyCode::Enter)).unwrap(),
            Some(Action::ToggleCategoryTag("layout".to_string()))
        );
        assert_eq!(
            dropdown.handle_key_event(key(KeyCode::Esc)).unwrap(),
            Some(Action::ToggleDropdown(Tab::Design))
        );
    }

    #[test]
    fn test_sort_values_parse_to_distinct_modes() {
        for value in SORT_VALUES {
            assert_eq!(SortMode::from(value).to_string(), value);
        }
    }

    #[test]
    fn test_action_for_out_of_range() {
        assert_eq!(dropdown().action_for(42), None);
    }
}
