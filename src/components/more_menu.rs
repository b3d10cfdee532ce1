//! Header "more" menu

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::{dropdown_popup, HitRegions};
use crate::components::palette::Palette;
use crate::model::Theme;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoreEntry {
    ResetSettings,
    ToggleTheme,
    Help,
    CloseDrawer,
}

impl MoreEntry {
    pub fn all() -> Vec<MoreEntry> {
        vec![
            MoreEntry::ResetSettings,
            MoreEntry::ToggleTheme,
            MoreEntry::Help,
            MoreEntry::CloseDrawer,
        ]
    }

    pub fn label(&self) -> &str {
        match self {
            MoreEntry::ResetSettings => "Reset settings",
            MoreEntry::ToggleTheme => "Toggle theme",
            MoreEntry::Help => "Keyboard shortcuts",
            MoreEntry::CloseDrawer => "Close drawer",
        }
    }

    pub fn action(&self) -> Action {
        match self {
            MoreEntry::ResetSettings => Action::ResetSettings,
            MoreEntry::ToggleTheme => Action::ToggleTheme,
            MoreEntry::Help => Action::OpenHelp,
            MoreEntry::CloseDrawer => Action::CloseDrawer,
        }
    }
}

pub struct MoreMenu {
    pub selected_index: usize,
    pub list_state: ListState,
    pub palette: Palette,
}

impl Default for MoreMenu {
    fn default() -> Self {
        Self::new()
    }
}

impl MoreMenu {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            selected_index: 0,
            list_state,
            palette: Palette::for_theme(Theme::default()),
        }
    }

    pub fn reset(&mut self) {
        self.selected_index = 0;
        self.list_state.select(Some(0));
    }

    pub fn action_for(&self, index: usize) -> Option<Action> {
        MoreEntry::all().get(index).map(|entry| entry.action())
    }

    pub fn draw_at(
        &mut self,
        frame: &mut Frame,
        anchor: Rect,
        bounds: Rect,
        regions: &mut HitRegions,
    ) -> Result<()> {
        let entries = MoreEntry::all().len() as u16;
        let popup = dropdown_popup(anchor, bounds, 24, entries + 2);
        self.draw(frame, popup)?;

        regions.dropdown_body = Some(popup);
        for index in 0..entries.min(popup.height.saturating_sub(2)) {
            regions.dropdown_options.push((
                Rect::new(popup.x + 1, popup.y + 1 + index, popup.width.saturating_sub(2), 1),
                index as usize,
            ));
        }
        Ok(())
    }
}

impl Component for MoreMenu {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let last = MoreEntry::all().len() - 1;
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('m') => Some(Action::ToggleMoreMenu),
            KeyCode::Enter | KeyCode::Char(' ') => self.action_for(self.selected_index),
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected_index = self.selected_index.saturating_sub(1);
                self.list_state.select(Some(self.selected_index));
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected_index = (self.selected_index + 1).min(last);
                self.list_state.select(Some(self.selected_index));
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        frame.render_widget(Clear, area);

        let p = self.palette;
        let items: Vec<ListItem> = MoreEntry::all()
            .iter()
            .map(|entry| {
                let style = if *entry == MoreEntry::CloseDrawer {
                    Style::default().fg(p.error)
                } else {
                    Style::default().fg(p.fg)
                };
                ListItem::new(Line::from(Span::styled(format!(" {}", entry.label()), style)))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
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

    #[test]
    fn test_navigation_clamps_and_selects() {
        let mut menu = MoreMenu::new();
        let down = KeyEvent::new(KeyCode::Down, KeyModifiers::NONE);
        for _ in 0..6 {
            menu.handle_key_event(down).unwrap();
        }
        assert_eq!(menu.selected_index, 3);
        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(menu.handle_key_event(enter).unwrap(), Some(Action::CloseDrawer));

        menu.reset();
        assert_eq!(menu.handle_key_event(enter).unwrap(), Some(Action::ResetSettings));
    }

    #[test]
    fn test_action_for_index() {
        let menu = MoreMenu::new();
        assert_eq!(menu.action_for(1), Some(Action::ToggleTheme));
        assert_eq!(menu.action_for(4), None);
    }
}
