//! Help dialog component
//!
//! Displays all keyboard shortcuts available in the application.

use crate::action::Action;
use crate::component::Component;
use crate::components::palette::Palette;
use crate::model::Theme;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Help dialog showing all keyboard shortcuts
pub struct HelpDialog {
    pub scroll_offset: usize,
    pub palette: Palette,
}

impl Default for HelpDialog {
    fn default() -> Self {
        Self {
            scroll_offset: 0,
            palette: Palette::for_theme(Theme::default()),
        }
    }
}

impl Component for HelpDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => Some(Action::CloseModal),
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                None
            }
            KeyCode::PageDown => {
                self.scroll_offset = self.scroll_offset.saturating_add(10);
                None
            }
            KeyCode::PageUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(10);
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        frame.render_widget(Clear, area);

        let margin = 4;
        let dialog_area = Rect::new(
            area.x + margin,
            area.y + margin.min(area.height / 4),
            area.width.saturating_sub(margin * 2),
            area.height.saturating_sub(margin.min(area.height / 4) * 2),
        );

        let p = self.palette;
        let content = build_help_content(&p);
        let total = content.len();
        let visible_height = dialog_area.height.saturating_sub(2) as usize;

        // Clamp scroll offset
        let max_scroll = total.saturating_sub(visible_height);
        if self.scroll_offset > max_scroll {
            self.scroll_offset = max_scroll;
        }

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Keyboard Shortcuts ")
                    .title_style(p.title())
                    .border_style(Style::default().fg(p.accent))
                    .style(p.base()),
            )
            .scroll((self.scroll_offset as u16, 0));

        frame.render_widget(paragraph, dialog_area);

        if total > visible_height {
            let mut scrollbar_state =
                ScrollbarState::new(total.saturating_sub(visible_height)).position(self.scroll_offset);

            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(Some("↑"))
                    .end_symbol(Some("↓")),
                dialog_area.inner(ratatui::layout::Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut scrollbar_state,
            );
        }

        Ok(())
    }
}

/// Build the help content with all keyboard shortcuts
fn build_help_content(p: &Palette) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    let section_style = Style::default().fg(p.warning).add_modifier(Modifier::BOLD);
    let rule_style = Style::default().fg(p.muted);
    let key_style = Style::default().fg(p.accent).add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(p.fg);

    let add_section = |lines: &mut Vec<Line<'static>>, title: &str| {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(format!("  {} ", title), section_style)));
        lines.push(Line::from(Span::styled(
            format!("  {}", "─".repeat(title.len() + 2)),
            rule_style,
        )));
    };

    let add_shortcut = |lines: &mut Vec<Line<'static>>, key: &str, description: &str| {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:12}", key), key_style),
            Span::styled(description.to_string(), text_style),
        ]));
    };

    add_section(&mut lines, "Drawer");
    add_shortcut(&mut lines, "o", "Open / close the drawer");
    add_shortcut(&mut lines, "Esc", "Close dropdown, then drawer");
    add_shortcut(&mut lines, "m", "More menu");

    add_section(&mut lines, "Navigation");
    add_shortcut(&mut lines, "Tab", "Next tab (Content/Design/Advanced)");
    add_shortcut(&mut lines, "Shift+Tab", "Previous tab");
    add_shortcut(&mut lines, "1 / 2 / 3", "Jump to tab");
    add_shortcut(&mut lines, "j / ↓", "Move to next item");
    add_shortcut(&mut lines, "k / ↑", "Move to previous item");
    add_shortcut(&mut lines, "g / G", "Jump to first / last item");
    add_shortcut(&mut lines, "Enter/Space", "Expand or collapse item");

    add_section(&mut lines, "Search & Filter");
    add_shortcut(&mut lines, "/", "Search the active tab");
    add_shortcut(&mut lines, "Esc/Enter", "Leave search (term is kept)");
    add_shortcut(&mut lines, "f", "Sort & category dropdown");
    add_shortcut(&mut lines, "c", "Clear the active tab's filters");

    add_section(&mut lines, "Appearance");
    add_shortcut(&mut lines, "t", "Toggle dark / light theme");
    add_shortcut(&mut lines, "e", "Edit transform (Design > Transform)");

    add_section(&mut lines, "Mouse");
    add_shortcut(&mut lines, "Click", "Tabs, items, filter and more buttons");
    add_shortcut(&mut lines, "Click away", "Closes the open dropdown");

    add_section(&mut lines, "Application");
    add_shortcut(&mut lines, "?", "Show this help");
    add_shortcut(&mut lines, "q", "Quit");

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Press q, Esc, or ? to close",
        rule_style,
    )));

    lines
}
