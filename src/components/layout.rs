//! Layout calculations and pointer hit regions

use crate::model::Tab;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Narrowest drawer that still fits the toolbar
const MIN_DRAWER_WIDTH: u16 = 44;

/// Main screen layout areas
pub struct MainLayout {
    pub canvas: Rect,
    pub drawer: Option<DrawerLayout>,
    pub status: Rect,
    pub help: Rect,
}

/// Areas inside the open drawer
pub struct DrawerLayout {
    pub area: Rect,
    pub header: Rect,
    pub more_trigger: Rect,
    pub tabs: Rect,
    pub search: Rect,
    pub filter_trigger: Rect,
    pub list: Rect,
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = area.x + (area.width.saturating_sub(width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Place a dropdown body below `anchor`, right-aligned to it and kept inside `bounds`
pub fn dropdown_popup(anchor: Rect, bounds: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(bounds.width);
    let height = height.min(bounds.height.saturating_sub(anchor.bottom().saturating_sub(bounds.y)));
    let right = anchor.right().min(bounds.right());
    let x = right.saturating_sub(width).max(bounds.x);
    Rect::new(x, anchor.bottom(), width, height)
}

/// Calculate main screen layout
pub fn calculate_main_layout(area: Rect, drawer_open: bool) -> MainLayout {
    // content + status line + help line
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    let (canvas, drawer) = if drawer_open {
        let width = (main_chunks[0].width * 45 / 100)
            .max(MIN_DRAWER_WIDTH)
            .min(main_chunks[0].width);
        let horizontal_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(width)])
            .split(main_chunks[0]);
        (
            horizontal_chunks[0],
            Some(calculate_drawer_layout(horizontal_chunks[1])),
        )
    } else {
        (main_chunks[0], None)
    };

    MainLayout {
        canvas,
        drawer,
        status: main_chunks[1],
        help: main_chunks[2],
    }
}

fn calculate_drawer_layout(area: Rect) -> DrawerLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Length(2), // tabs
            Constraint::Length(3), // search + filter trigger
            Constraint::Min(0),    // accordion
        ])
        .split(area);

    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(5)])
        .split(chunks[0]);

    let toolbar_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(16)])
        .split(chunks[2]);

    DrawerLayout {
        area,
        header: header_chunks[0],
        more_trigger: header_chunks[1],
        tabs: chunks[1],
        search: toolbar_chunks[0],
        filter_trigger: toolbar_chunks[1],
        list: chunks[3],
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Hit Regions
// ═══════════════════════════════════════════════════════════════════════════════

pub fn rect_contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
}

/// Clickable areas recorded while drawing the last frame
#[derive(Debug, Clone, Default)]
pub struct HitRegions {
    /// "Open drawer" button shown while the drawer is closed
    pub launcher: Option<Rect>,
    pub tabs: Vec<(Rect, Tab)>,
    pub filter_trigger: Option<Rect>,
    pub more_trigger: Option<Rect>,
    /// Body of whichever dropdown is open
    pub dropdown_body: Option<Rect>,
    /// Dropdown rows with their option index
    pub dropdown_options: Vec<(Rect, usize)>,
    /// Accordion rows with their view index
    pub items: Vec<(Rect, usize)>,
}

impl HitRegions {
    pub fn clear(&mut self) {
        *self = HitRegions::default();
    }

    /// Whether the point lies within a dropdown trigger or an open dropdown body
    pub fn inside_dropdown(&self, column: u16, row: u16) -> bool {
        [self.filter_trigger, self.more_trigger, self.dropdown_body]
            .into_iter()
            .flatten()
            .any(|rect| rect_contains(rect, column, row))
    }

    pub fn dropdown_option_at(&self, column: u16, row: u16) -> Option<usize> {
        find_at(&self.dropdown_options, column, row)
    }

    pub fn tab_at(&self, column: u16, row: u16) -> Option<Tab> {
        find_at(&self.tabs, column, row)
    }

    pub fn item_at(&self, column: u16, row: u16) -> Option<usize> {
        find_at(&self.items, column, row)
    }
}

fn find_at<T: Copy>(regions: &[(Rect, T)], column: u16, row: u16) -> Option<T> {
    regions
        .iter()
        .find(|(rect, _)| rect_contains(*rect, column, row))
        .map(|(_, value)| *value)
}
