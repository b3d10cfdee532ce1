//! Transform editor dialog
//!
//! Edits the transform kind, the two position sliders and the anchor grid.

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use crate::components::layout::rect_contains;
use crate::components::palette::Palette;
use crate::model::transform::TransformState;
use crate::model::{Theme, TransformKind};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, LineGauge, Paragraph, Tabs},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Slider step for one key press, in percent
const SLIDER_STEP: f32 = 5.0;

pub struct TransformDialog {
    pub state: TransformState,
    pub palette: Palette,
    /// Vertical and horizontal slider tracks of the last frame
    slider_areas: Option<(Rect, Rect)>,
}

impl Default for TransformDialog {
    fn default() -> Self {
        Self {
            state: TransformState::default(),
            palette: Palette::for_theme(Theme::default()),
            slider_areas: None,
        }
    }
}

impl Component for TransformDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('e') => {
                return Ok(Some(Action::CloseModal));
            }
            KeyCode::Tab => self.state.select_kind(self.state.kind.next()),
            KeyCode::Left | KeyCode::Char('h') => self.state.nudge_horizontal(-SLIDER_STEP),
            KeyCode::Right | KeyCode::Char('l') => self.state.nudge_horizontal(SLIDER_STEP),
            KeyCode::Up | KeyCode::Char('k') => self.state.nudge_vertical(-SLIDER_STEP),
            KeyCode::Down | KeyCode::Char('j') => self.state.nudge_vertical(SLIDER_STEP),
            KeyCode::Char('v') => self.state.center_vertical(),
            KeyCode::Char('c') => self.state.center_horizontal(),
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(dot) = c.to_digit(10) {
                    self.state.select_dot(dot as u8);
                }
            }
            _ => {}
        }
        tracing::trace!(state = ?self.state, "transform edited");
        Ok(None)
    }

    /// Clicking a slider row moves that slider to the pointer
    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(None);
        }
        if let Some((vertical, horizontal)) = self.slider_areas {
            if rect_contains(vertical, mouse.column, mouse.row) {
                let offset = mouse.column - vertical.x;
                self.state
                    .set_vertical(TransformState::slider_from_offset(offset, vertical.width));
            } else if rect_contains(horizontal, mouse.column, mouse.row) {
                let offset = mouse.column - horizontal.x;
                self.state
                    .set_horizontal(TransformState::slider_from_offset(offset, horizontal.width));
            }
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let popup = centered_popup(area, 46, 15);
        let p = self.palette;
        frame.render_widget(Clear, popup);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Transform ")
            .title_style(p.title())
            .border_style(Style::default().fg(p.accent))
            .style(p.base());
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // kind
                Constraint::Length(1), // vertical
                Constraint::Length(1), // horizontal
                Constraint::Length(1),
                Constraint::Length(3), // anchor grid
                Constraint::Min(0),
                Constraint::Length(2), // help
            ])
            .split(inner);

        let vertical_label = format!("Vertical   {:>3.0}%", self.state.vertical);
        let horizontal_label = format!("Horizontal {:>3.0}%", self.state.horizontal);
        self.slider_areas = Some((
            slider_track(chunks[1], &vertical_label),
            slider_track(chunks[2], &horizontal_label),
        ));

        let kinds = TransformKind::all();
        let selected = kinds.iter().position(|k| *k == self.state.kind).unwrap_or(0);
        let tabs = Tabs::new(kinds.iter().map(|k| k.name().to_string()).collect::<Vec<_>>())
            .block(Block::default().borders(Borders::BOTTOM).border_style(Style::default().fg(p.border)))
            .select(selected)
            .style(Style::default().fg(p.muted))
            .highlight_style(p.title());
        frame.render_widget(tabs, chunks[0]);

        frame.render_widget(
            LineGauge::default()
                .label(vertical_label)
                .filled_style(Style::default().fg(p.accent))
                .unfilled_style(Style::default().fg(p.border))
                .ratio(f64::from(self.state.vertical) / 100.0),
            chunks[1],
        );
        frame.render_widget(
            LineGauge::default()
                .label(horizontal_label)
                .filled_style(Style::default().fg(p.accent))
                .unfilled_style(Style::default().fg(p.border))
                .ratio(f64::from(self.state.horizontal) / 100.0),
            chunks[2],
        );

        let grid: Vec<Line> = (0..3u8)
            .map(|row| {
                let mut spans = vec![Span::raw("        ")];
                for col in 0..3u8 {
                    let dot = row * 3 + col + 1;
                    let (glyph, style) = if dot == self.state.selected_dot {
                        ("● ", Style::default().fg(p.active).add_modifier(Modifier::BOLD))
                    } else {
                        ("○ ", Style::default().fg(p.muted))
                    };
                    spans.push(Span::styled(glyph, style));
                }
                if row == 1 {
                    spans.push(Span::styled(
                        format!("   anchor {}", self.state.selected_dot),
                        Style::default().fg(p.fg),
                    ));
                }
                Line::from(spans)
            })
            .collect();
        frame.render_widget(Paragraph::new(grid), chunks[4]);

        let help = Paragraph::new(vec![
            Line::from(vec![
                Span::styled(" Tab ", p.key(p.accent)),
                Span::raw("Kind  "),
                Span::styled(" ←→↑↓ ", p.key(p.accent)),
                Span::raw("Move  "),
                Span::styled(" 1-9 ", p.key(p.accent)),
                Span::raw("Anchor"),
            ]),
            Line::from(vec![
                Span::styled(" v/c ", p.key(p.warning)),
                Span::raw("Center V/H  "),
                Span::styled(" Esc ", p.key(p.warning)),
                Span::raw("Close"),
            ]),
        ])
        .alignment(ratatui::layout::Alignment::Center);
        frame.render_widget(help, chunks[6]);

        Ok(())
    }
}

/// Part of a `LineGauge` row where the line is drawn: past the label and one gap cell
fn slider_track(row: Rect, label: &str) -> Rect {
    let skip = (label.width() as u16 + 1).min(row.width);
    Rect::new(row.x + skip, row.y, row.width - skip, row.height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(dialog: &mut TransformDialog, code: KeyCode) -> Option<Action> {
        dialog
            .handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
            .unwrap()
    }

    #[test]
    fn test_keys_edit_state() {
        let mut dialog = TransformDialog::default();
        press(&mut dialog, KeyCode::Tab);
        assert_eq!(dialog.state.kind, TransformKind::Move);

        press(&mut dialog, KeyCode::Right);
        press(&mut dialog, KeyCode::Up);
        assert_eq!(dialog.state.horizontal, 55.0);
        assert_eq!(dialog.state.vertical, 45.0);

        press(&mut dialog, KeyCode::Char('v'));
        press(&mut dialog, KeyCode::Char('c'));
        assert_eq!((dialog.state.vertical, dialog.state.horizontal), (50.0, 50.0));

        press(&mut dialog, KeyCode::Char('3'));
        assert_eq!(dialog.state.selected_dot, 3);

        assert_eq!(press(&mut dialog, KeyCode::Esc), Some(Action::CloseModal));
    }

    #[test]
    fn test_click_moves_slider() {
        let mut dialog = TransformDialog::default();
        dialog.slider_areas = Some((Rect::new(10, 5, 20, 1), Rect::new(10, 6, 20, 1)));
        let click = |column, row| MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        };
        dialog.handle_mouse_event(click(15, 6)).unwrap();
        assert_eq!(dialog.state.horizontal, 25.0);
        dialog.handle_mouse_event(click(10, 5)).unwrap();
        assert_eq!(dialog.state.vertical, 0.0);
        // outside both rows
        dialog.handle_mouse_event(click(15, 9)).unwrap();
        assert_eq!(dialog.state.horizontal, 25.0);
    }

    #[test]
    fn test_click_track_ends_after_render() {
        use ratatui::{backend::TestBackend, Terminal};

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut dialog = TransformDialog::default();
        terminal
            .draw(|frame| dialog.draw(frame, frame.area()).unwrap())
            .unwrap();

        let (_, track) = dialog.slider_areas.unwrap();
        let buffer = terminal.backend().buffer().clone();
        // the label ends right before the gap cell preceding the track
        assert_eq!(buffer[(track.x - 2, track.y)].symbol(), "%");
        assert_eq!(buffer[(track.x, track.y)].symbol(), "─");
        assert_eq!(buffer[(track.right() - 1, track.y)].symbol(), "─");

        let click = |column| MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row: track.y,
            modifiers: KeyModifiers::NONE,
        };
        dialog.handle_mouse_event(click(track.x)).unwrap();
        assert!(dialog.state.horizontal < 5.0);
        dialog.handle_mouse_event(click(track.right() - 1)).unwrap();
        assert!(dialog.state.horizontal > 95.0);

        // clicking the label leaves the slider alone
        dialog.handle_mouse_event(click(track.x - 5)).unwrap();
        assert!(dialog.state.horizontal > 95.0);
    }

    #[test]
    fn test_slider_track_skips_label() {
        let track = slider_track(Rect::new(10, 3, 40, 1), "Vertical    50%");
        assert_eq!(track, Rect::new(26, 3, 24, 1));
        let narrow = slider_track(Rect::new(0, 0, 8, 1), "Vertical    50%");
        assert_eq!(narrow.width, 0);
    }

    #[test]
    fn test_sliders_stop_at_bounds() {
        let mut dialog = TransformDialog::default();
        for _ in 0..30 {
            press(&mut dialog, KeyCode::Left);
        }
        assert_eq!(dialog.state.horizontal, 0.0);
    }
}
