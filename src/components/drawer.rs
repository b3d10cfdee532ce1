//! Drawer component - Main application screen
//!
//! Displays the canvas, and when open the drawer with its header, tabs,
//! search bar, filter trigger and accordion list. Owns list navigation state.

use crate::action::Action;
use crate::component::Component;
use crate::components::calculate_main_layout;
use crate::components::layout::{DrawerLayout, HitRegions, MainLayout};
use crate::components::palette::Palette;
use crate::model::transform::{TransformState, TRANSFORM_ITEM_TITLE};
use crate::model::{DomainState, Item, SortMode, Tab, Theme, ViewState};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

// ═══════════════════════════════════════════════════════════════════════════════
// Drawer Component
// ═══════════════════════════════════════════════════════════════════════════════

/// Drawer component for the main view
/// Owns the per-tab list cursor
pub struct DrawerComponent {
    /// Mirror of the active tab, set by the App before key handling
    pub active_tab: Tab,

    /// List selection state, one per tab
    list_states: Vec<ListState>,
}

impl Default for DrawerComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawerComponent {
    pub fn new() -> Self {
        let list_states = Tab::all()
            .into_iter()
            .map(|_| {
                let mut state = ListState::default();
                state.select(Some(0));
                state
            })
            .collect();
        Self {
            active_tab: Tab::Content,
            list_states,
        }
    }

    fn state_mut(&mut self, tab: Tab) -> &mut ListState {
        &mut self.list_states[tab.index()]
    }

    /// Selected position in the tab's view list
    pub fn selected(&self, tab: Tab) -> Option<usize> {
        self.list_states[tab.index()].selected()
    }

    pub fn select(&mut self, tab: Tab, index: usize, len: usize) {
        let selection = if len == 0 { None } else { Some(index.min(len - 1)) };
        self.state_mut(tab).select(selection);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────

    /// Select next item, wrapping to the first
    pub fn next(&mut self, tab: Tab, len: usize) {
        if len == 0 {
            return;
        }
        let next = match self.selected(tab) {
            Some(current) if current + 1 < len => current + 1,
            _ => 0,
        };
        self.state_mut(tab).select(Some(next));
    }

    /// Select previous item, wrapping to the last
    pub fn previous(&mut self, tab: Tab, len: usize) {
        if len == 0 {
            return;
        }
        let prev = match self.selected(tab) {
            Some(current) if current > 0 && current < len => current - 1,
            _ => len - 1,
        };
        self.state_mut(tab).select(Some(prev));
    }

    pub fn select_first(&mut self, tab: Tab, len: usize) {
        self.select(tab, 0, len);
    }

    pub fn select_last(&mut self, tab: Tab, len: usize) {
        self.select(tab, len.saturating_sub(1), len);
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for DrawerComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            // Drawer
            KeyCode::Char('o') => Some(Action::ToggleDrawer),
            KeyCode::Esc => Some(Action::CloseDrawer),
            KeyCode::Char('m') => Some(Action::ToggleMoreMenu),

            // Navigation
            KeyCode::Tab => Some(Action::NextTab),
            KeyCode::BackTab => Some(Action::PrevTab),
            KeyCode::Char('1') => Some(Action::SetActiveTab(Tab::Content)),
            KeyCode::Char('2') => Some(Action::SetActiveTab(Tab::Design)),
            KeyCode::Char('3') => Some(Action::SetActiveTab(Tab::Advanced)),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::NextItem),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevItem),
            KeyCode::Char('g') | KeyCode::Home => Some(Action::FirstItem),
            KeyCode::Char('G') | KeyCode::End => Some(Action::LastItem),

            // Accordion
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::ToggleExpand),

            // Search & filter
            KeyCode::Char('/') => Some(Action::EnterSearchMode),
            KeyCode::Char('f') => Some(Action::ToggleDropdown(self.active_tab)),
            KeyCode::Char('c') => Some(Action::ClearFilters),

            // Appearance
            KeyCode::Char('t') => Some(Action::ToggleTheme),
            KeyCode::Char('e') => Some(Action::OpenTransform),

            // Modals
            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Char('q') => Some(Action::OpenQuitDialog),

            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Drawing is done through draw_drawer_screen which takes full context
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Rendering Functions
// ═══════════════════════════════════════════════════════════════════════════════

/// Context needed for rendering the drawer screen
pub struct DrawerRenderContext<'a> {
    pub domain: &'a DomainState,
    pub view: &'a ViewState,
    pub transform: &'a TransformState,
    pub search_mode: bool,
    pub error: Option<&'a str>,
    pub status_message: Option<&'a str>,
}

/// Draw the drawer screen and record its clickable regions
pub fn draw_drawer_screen(
    frame: &mut Frame,
    area: Rect,
    drawer: &mut DrawerComponent,
    ctx: &DrawerRenderContext,
    regions: &mut HitRegions,
) -> Result<MainLayout> {
    let p = Palette::for_theme(ctx.view.theme);
    frame.render_widget(Block::default().style(p.base()), area);

    let layout = calculate_main_layout(area, ctx.view.drawer_open);

    render_canvas(frame, layout.canvas, ctx, &p, regions);
    if let Some(ref drawer_layout) = layout.drawer {
        render_header(frame, drawer_layout, ctx, &p, regions);
        render_tabs(frame, drawer_layout.tabs, ctx, &p, regions);
        render_toolbar(frame, drawer_layout, ctx, &p, regions);
        render_accordion(frame, drawer_layout.list, drawer, ctx, &p, regions);
    }
    render_status_bar(frame, layout.status, ctx, &p);
    render_help_bar(frame, layout.help, ctx, &p);

    Ok(layout)
}

fn render_canvas(
    frame: &mut Frame,
    area: Rect,
    ctx: &DrawerRenderContext,
    p: &Palette,
    regions: &mut HitRegions,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Canvas ")
        .title_style(p.title())
        .border_style(Style::default().fg(p.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let tab = ctx.view.active_tab;
    let mut lines = vec![Line::from("")];
    if ctx.view.drawer_open {
        let visible = ctx.domain.view(tab).len();
        let total = ctx.domain.catalog.items(tab).len();
        lines.push(Line::from(vec![
            Span::styled("Editing ", Style::default().fg(p.muted)),
            Span::styled(tab.name().to_string(), p.title()),
            Span::styled(
                format!("  {} of {} settings shown", visible, total),
                Style::default().fg(p.muted),
            ),
        ]));
        let t = ctx.transform;
        lines.push(Line::from(Span::styled(
            format!(
                "{} · V {:.0}% · H {:.0}% · anchor {}",
                t.kind.name(),
                t.vertical,
                t.horizontal,
                t.selected_dot
            ),
            Style::default().fg(p.muted),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "The design drawer is closed",
            Style::default().fg(p.muted),
        )));
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, inner);

    if !ctx.view.drawer_open && inner.height > 4 {
        let label = " Open design drawer  o ";
        let width = (label.width() as u16).min(inner.width);
        let button = Rect::new(inner.x + (inner.width - width) / 2, inner.y + 4, width, 1);
        frame.render_widget(Paragraph::new(Span::styled(label, p.highlight())), button);
        regions.launcher = Some(button);
    }
}

fn render_header(
    frame: &mut Frame,
    layout: &DrawerLayout,
    ctx: &DrawerRenderContext,
    p: &Palette,
    regions: &mut HitRegions,
) {
    let theme_label = match ctx.view.theme {
        Theme::Dark => "☾ dark",
        Theme::Light => "☀ light",
    };
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            " Design Settings ",
            Style::default().fg(p.fg).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" {}", theme_label), Style::default().fg(p.muted)),
    ]))
    .block(
        Block::default()
            .borders(Borders::TOP | Borders::BOTTOM | Borders::LEFT)
            .border_style(Style::default().fg(p.border)),
    );
    frame.render_widget(header, layout.header);

    let more_style = if ctx.view.more_menu_open {
        p.highlight()
    } else {
        Style::default().fg(p.fg)
    };
    let more = Paragraph::new(Span::styled(" ⋯ ", more_style))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(p.border)),
        );
    frame.render_widget(more, layout.more_trigger);
    regions.more_trigger = Some(layout.more_trigger);
}

fn render_tabs(
    frame: &mut Frame,
    area: Rect,
    ctx: &DrawerRenderContext,
    p: &Palette,
    regions: &mut HitRegions,
) {
    let all_tabs = Tab::all();
    let titles: Vec<&str> = all_tabs.iter().map(|t| t.name()).collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(p.border)),
        )
        .select(ctx.view.active_tab.index())
        .style(Style::default().fg(p.muted))
        .highlight_style(p.title());

    frame.render_widget(tabs, area);

    // Tabs renders " title " separated by a one-cell divider
    let mut x = area.x;
    for tab in all_tabs {
        let width = tab.name().width() as u16 + 2;
        if x >= area.right() {
            break;
        }
        let width = width.min(area.right() - x);
        regions.tabs.push((Rect::new(x, area.y, width, 1), tab));
        x = x.saturating_add(width + 1);
    }
}

fn render_toolbar(
    frame: &mut Frame,
    layout: &DrawerLayout,
    ctx: &DrawerRenderContext,
    p: &Palette,
    regions: &mut HitRegions,
) {
    let tab = ctx.view.active_tab;
    let filter = ctx.domain.filter(tab);

    let search_line = if ctx.search_mode {
        Line::from(vec![
            Span::styled("⌕ ", Style::default().fg(p.accent)),
            Span::styled(filter.search_term.clone(), Style::default().fg(p.fg)),
            Span::styled("█", Style::default().fg(p.accent)),
        ])
    } else if filter.search_term.is_empty() {
        Line::from(Span::styled(
            format!("⌕ Search {}…  /", tab.name().to_lowercase()),
            Style::default().fg(p.muted),
        ))
    } else {
        Line::from(vec![
            Span::styled("⌕ ", Style::default().fg(p.muted)),
            Span::styled(filter.search_term.clone(), Style::default().fg(p.fg)),
        ])
    };
    let search_border = if ctx.search_mode { p.accent } else { p.border };
    let search = Paragraph::new(search_line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(search_border)),
    );
    frame.render_widget(search, layout.search);

    let open = ctx.view.is_dropdown_open(tab);
    let badge = if filter.is_active() { "● " } else { "" };
    let arrow = if open { "▴" } else { "▾" };
    let trigger_style = if open {
        p.highlight()
    } else {
        Style::default().fg(p.fg)
    };
    let trigger = Paragraph::new(Line::from(vec![
        Span::styled(badge, Style::default().fg(p.active)),
        Span::styled(format!("Filter {}", arrow), trigger_style),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(if open { p.accent } else { p.border })),
    );
    frame.render_widget(trigger, layout.filter_trigger);
    regions.filter_trigger = Some(layout.filter_trigger);
}

fn render_accordion(
    frame: &mut Frame,
    area: Rect,
    drawer: &mut DrawerComponent,
    ctx: &DrawerRenderContext,
    p: &Palette,
    regions: &mut HitRegions,
) {
    let tab = ctx.view.active_tab;
    let items = ctx.domain.view(tab);
    let total = ctx.domain.catalog.items(tab).len();

    let title = format!(" {} ({}/{}) ", tab.name(), items.len(), total);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .title_style(p.title())
        .border_style(Style::default().fg(p.border));
    let inner = block.inner(area);

    if items.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "No settings match the current filters",
                Style::default().fg(p.warning),
            )),
            Line::from(Span::styled(
                "Press c to clear them",
                Style::default().fg(p.muted),
            )),
        ])
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    // highlight symbol takes two columns
    let text_width = inner.width.saturating_sub(2) as usize;
    let rendered: Vec<Text> = items
        .iter()
        .map(|item| accordion_text(item, tab, ctx.transform, text_width, p))
        .collect();
    let heights: Vec<u16> = rendered.iter().map(|text| text.height() as u16).collect();

    let list = List::new(rendered.into_iter().map(ListItem::new))
        .block(block)
        .highlight_style(p.highlight())
        .highlight_symbol("▶ ");

    let state = &mut drawer.list_states[tab.index()];
    frame.render_stateful_widget(list, area, state);

    // List draws trailing items only when they fit whole; the first one is clipped instead
    let offset = state.offset();
    let mut y = inner.y;
    for (index, height) in heights.iter().enumerate().skip(offset) {
        if index != offset && y + height > inner.bottom() {
            break;
        }
        let visible = (*height).min(inner.bottom().saturating_sub(y));
        if visible == 0 {
            break;
        }
        regions
            .items
            .push((Rect::new(inner.x, y, inner.width, visible), index));
        y += height;
    }
}

/// Header line plus, when expanded, the wrapped description
fn accordion_text(
    item: &Item,
    tab: Tab,
    transform: &TransformState,
    width: usize,
    p: &Palette,
) -> Text<'static> {
    let marker = if item.expanded { "▾ " } else { "▸ " };
    let mut lines = vec![Line::from(vec![
        Span::styled(marker, Style::default().fg(p.muted)),
        Span::styled(format!("{} ", item.icon()), Style::default().fg(p.icon)),
        Span::styled(
            item.title.clone(),
            Style::default().fg(p.fg).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  {}", item.category), Style::default().fg(p.muted)),
    ])];

    if item.expanded {
        for row in wrap_text(&item.description, width.saturating_sub(4)) {
            lines.push(Line::from(Span::styled(
                format!("    {}", row),
                Style::default().fg(p.fg),
            )));
        }
        if tab == Tab::Design && item.title == TRANSFORM_ITEM_TITLE {
            lines.push(Line::from(Span::styled(
                format!(
                    "    {} · V {:.0}% · H {:.0}% · anchor {}   e to edit",
                    transform.kind.name(),
                    transform.vertical,
                    transform.horizontal,
                    transform.selected_dot
                ),
                Style::default().fg(p.accent),
            )));
        }
        lines.push(Line::from(""));
    }

    Text::from(lines)
}

/// Greedy word wrap by display width; words longer than `width` are split
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }

    let mut rows = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.width()
        } else {
            current.width() + 1 + word.width()
        };
        if needed <= width {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            continue;
        }

        if !current.is_empty() {
            rows.push(std::mem::take(&mut current));
        }
        for c in word.chars() {
            if current.width() + c.width().unwrap_or(0) > width {
                rows.push(std::mem::take(&mut current));
            }
            current.push(c);
        }
    }
    if !current.is_empty() {
        rows.push(current);
    }
    rows
}

fn render_status_bar(frame: &mut Frame, area: Rect, ctx: &DrawerRenderContext, p: &Palette) {
    let tab = ctx.view.active_tab;
    let filter = ctx.domain.filter(tab);

    let mut spans = vec![Span::styled(
        format!(" {} ", tab.name()),
        Style::default()
            .fg(p.bg)
            .bg(p.accent)
            .add_modifier(Modifier::BOLD),
    )];

    if filter.sort_mode != SortMode::Default {
        spans.push(Span::styled(
            format!(" sort: {} ", filter.sort_mode.label()),
            Style::default().fg(p.muted),
        ));
    }
    if !filter.active_category_tags.is_empty() {
        let tags: Vec<&str> = filter
            .active_category_tags
            .iter()
            .map(|t| t.as_str())
            .collect();
        spans.push(Span::styled(
            format!(" tags: {} ", tags.join(", ")),
            Style::default().fg(p.muted),
        ));
    }

    if let Some(error) = ctx.error {
        spans.push(Span::styled(
            format!(" Error: {} ", error),
            Style::default().fg(p.error),
        ));
    } else if let Some(status) = ctx.status_message {
        spans.push(Span::styled(
            format!(" {} ", status),
            Style::default().fg(p.warning),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_help_bar(frame: &mut Frame, area: Rect, ctx: &DrawerRenderContext, p: &Palette) {
    let help_spans = if ctx.search_mode {
        vec![
            Span::styled(" Esc/Enter ", p.key(p.warning)),
            Span::raw("Done  "),
            Span::styled(" Backspace ", p.key(p.accent)),
            Span::raw("Delete"),
        ]
    } else if ctx.view.open_dropdown.is_some() || ctx.view.more_menu_open {
        vec![
            Span::styled(" j/k ", p.key(p.accent)),
            Span::raw("Navigate  "),
            Span::styled(" Enter ", p.key(p.active)),
            Span::raw("Select  "),
            Span::styled(" Esc ", p.key(p.warning)),
            Span::raw("Close"),
        ]
    } else if !ctx.view.drawer_open {
        vec![
            Span::styled(" o ", p.key(p.active)),
            Span::raw("Open drawer "),
            Span::styled(" t ", p.key(p.accent)),
            Span::raw("Theme "),
            Span::styled(" ? ", p.key(p.fg)),
            Span::raw("Help "),
            Span::styled(" q ", p.key(p.warning)),
            Span::raw("Quit"),
        ]
    } else {
        vec![
            Span::styled(" q ", p.key(p.warning)),
            Span::raw("Quit "),
            Span::styled(" Esc ", p.key(p.warning)),
            Span::raw("Close "),
            Span::styled(" Enter ", p.key(p.active)),
            Span::raw("Expand "),
            Span::styled(" / ", p.key(p.accent)),
            Span::raw("Search "),
            Span::styled(" f ", p.key(p.accent)),
            Span::raw("Filter "),
            Span::styled(" c ", p.key(p.accent)),
            Span::raw("Clear "),
            Span::styled(" t ", p.key(p.accent)),
            Span::raw("Theme "),
            Span::styled(" m ", p.key(p.accent)),
            Span::raw("More "),
            Span::styled(" ? ", p.key(p.fg)),
            Span::raw("Help"),
        ]
    };

    let paragraph = Paragraph::new(Line::from(help_spans))
        .style(Style::default().fg(p.fg))
        .alignment(Alignment::Left);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_next_and_previous_wrap() {
        let mut drawer = DrawerComponent::new();
        drawer.select_last(Tab::Content, 10);
        assert_eq!(drawer.selected(Tab::Content), Some(9));
        drawer.next(Tab::Content, 10);
        assert_eq!(drawer.selected(Tab::Content), Some(0));
        drawer.previous(Tab::Content, 10);
        assert_eq!(drawer.selected(Tab::Content), Some(9));
        // other tabs keep their own cursor
        assert_eq!(drawer.selected(Tab::Design), Some(0));
    }

    #[test]
    fn test_empty_list_clears_selection() {
        let mut drawer = DrawerComponent::new();
        drawer.select_first(Tab::Advanced, 0);
        assert_eq!(drawer.selected(Tab::Advanced), None);
        drawer.next(Tab::Advanced, 0);
        assert_eq!(drawer.selected(Tab::Advanced), None);
        drawer.select(Tab::Advanced, 7, 3);
        assert_eq!(drawer.selected(Tab::Advanced), Some(2));
    }

    #[test]
    fn test_filter_key_targets_active_tab() {
        let mut drawer = DrawerComponent::new();
        drawer.active_tab = Tab::Advanced;
        let key = KeyEvent::new(KeyCode::Char('f'), KeyModifiers::NONE);
        assert_eq!(
            drawer.handle_key_event(key).unwrap(),
            Some(Action::ToggleDropdown(Tab::Advanced))
        );
    }

    #[test]
    fn test_wrap_text() {
        assert_eq!(
            wrap_text("Apply 2D and 3D transformations", 12),
            vec!["Apply 2D and", "3D", "transformati", "ons"]
        );
        assert_eq!(wrap_text("short", 20), vec!["short"]);
        assert!(wrap_text("", 10).is_empty());
    }

    #[test]
    fn test_draw_records_regions() {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        let mut domain = DomainState::default();
        domain.toggle_expand(Tab::Content, 0);
        let mut view = ViewState::default();
        view.open_drawer();
        let transform = TransformState::default();
        let ctx = DrawerRenderContext {
            domain: &domain,
            view: &view,
            transform: &transform,
            search_mode: false,
            error: None,
            status_message: None,
        };
        let mut drawer = DrawerComponent::new();
        let mut regions = HitRegions::default();

        terminal
            .draw(|frame| {
                draw_drawer_screen(frame, frame.area(), &mut drawer, &ctx, &mut regions).unwrap();
            })
            .unwrap();

        assert_eq!(regions.tabs.len(), 3);
        assert!(regions.filter_trigger.is_some());
        assert!(regions.more_trigger.is_some());
        assert!(regions.launcher.is_none());
        // first item is expanded so it spans several rows
        let (first, index) = regions.items[0];
        assert_eq!(index, 0);
        assert!(first.height > 1);
        assert_eq!(regions.items[1].0.y, first.bottom());

        let buffer = terminal.backend().buffer().clone();
        let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("Design Settings"));
        assert!(text.contains("Content (10/10)"));
    }

    fn render_context<'a>(
        domain: &'a DomainState,
        view: &'a ViewState,
        transform: &'a TransformState,
    ) -> DrawerRenderContext<'a> {
        DrawerRenderContext {
            domain,
            view,
            transform,
            search_mode: false,
            error: None,
            status_message: None,
        }
    }

    fn row_text(buffer: &ratatui::buffer::Buffer, rect: Rect) -> String {
        (rect.x..rect.right())
            .map(|x| buffer[(x, rect.y)].symbol())
            .collect()
    }

    #[test]
    fn test_item_regions_only_cover_drawn_items() {
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        let mut domain = DomainState::default();
        for index in 0..10 {
            domain.toggle_expand(Tab::Content, index);
        }
        let mut view = ViewState::default();
        view.open_drawer();
        let transform = TransformState::default();
        let ctx = render_context(&domain, &view, &transform);
        let mut drawer = DrawerComponent::new();
        let mut regions = HitRegions::default();

        terminal
            .draw(|frame| {
                draw_drawer_screen(frame, frame.area(), &mut drawer, &ctx, &mut regions).unwrap();
            })
            .unwrap();

        let buffer = terminal.backend().buffer().clone();
        assert!(!regions.items.is_empty());
        assert!(regions.items.len() < 10);
        for (rect, index) in &regions.items {
            let title = &domain.view(Tab::Content)[*index].title;
            assert!(
                row_text(&buffer, *rect).contains(title.as_str()),
                "region of {} does not start on its title",
                title
            );
        }
    }

    #[test]
    fn test_empty_view_draws_message_without_regions() {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        let mut domain = DomainState::default();
        domain.set_search_term(Tab::Content, "zzz");
        let mut view = ViewState::default();
        view.open_drawer();
        let transform = TransformState::default();
        let ctx = render_context(&domain, &view, &transform);
        let mut drawer = DrawerComponent::new();
        let mut regions = HitRegions::default();

        terminal
            .draw(|frame| {
                draw_drawer_screen(frame, frame.area(), &mut drawer, &ctx, &mut regions).unwrap();
            })
            .unwrap();

        let buffer = terminal.backend().buffer().clone();
        let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("No settings match the current filters"));
        assert!(text.contains("Content (0/10)"));
        assert!(regions.items.is_empty());
    }

    #[test]
    fn test_closed_drawer_shows_launcher() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let domain = DomainState::default();
        let view = ViewState::default();
        let transform = TransformState::default();
        let ctx = DrawerRenderContext {
            domain: &domain,
            view: &view,
            transform: &transform,
            search_mode: false,
            error: None,
            status_message: None,
        };
        let mut drawer = DrawerComponent::new();
        let mut regions = HitRegions::default();

        terminal
            .draw(|frame| {
                draw_drawer_screen(frame, frame.area(), &mut drawer, &ctx, &mut regions).unwrap();
            })
            .unwrap();

        assert!(regions.launcher.is_some());
        assert!(regions.tabs.is_empty());
        assert!(regions.items.is_empty());
    }
}
