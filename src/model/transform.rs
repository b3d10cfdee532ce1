//! Transform controls shown for the Design tab's "Transform" item

/// Title of the catalog item that owns the transform controls
pub const TRANSFORM_ITEM_TITLE: &str = "Transform";

/// Kind of transform being edited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransformKind {
    #[default]
    Expand,
    Move,
    Rotate,
    Skew,
}

impl TransformKind {
    pub fn all() -> Vec<TransformKind> {
        vec![
            TransformKind::Expand,
            TransformKind::Move,
            TransformKind::Rotate,
            TransformKind::Skew,
        ]
    }

    pub fn name(&self) -> &str {
        match self {
            TransformKind::Expand => "Expand",
            TransformKind::Move => "Move",
            TransformKind::Rotate => "Rotate",
            TransformKind::Skew => "Skew",
        }
    }

    pub fn next(&self) -> TransformKind {
        let kinds = TransformKind::all();
        let index = kinds.iter().position(|k| k == self).unwrap_or(0);
        kinds[(index + 1) % kinds.len()]
    }
}

/// Slider midpoint in percent
pub const SLIDER_CENTER: f32 = 50.0;
/// Center cell of the 3x3 anchor grid
pub const CENTER_DOT: u8 = 5;

/// Transform editor state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformState {
    pub kind: TransformKind,
    /// Percent, 0..=100
    pub vertical: f32,
    /// Percent, 0..=100
    pub horizontal: f32,
    /// Anchor cell, 1..=9 row by row
    pub selected_dot: u8,
}

impl Default for TransformState {
    fn default() -> Self {
        Self {
            kind: TransformKind::default(),
            vertical: SLIDER_CENTER,
            horizontal: SLIDER_CENTER,
            selected_dot: CENTER_DOT,
        }
    }
}

impl TransformState {
    pub fn select_kind(&mut self, kind: TransformKind) {
        self.kind = kind;
    }

    /// Select an anchor dot; values outside 1..=9 are ignored
    pub fn select_dot(&mut self, dot: u8) {
        if (1..=9).contains(&dot) {
            self.selected_dot = dot;
        }
    }

    /// Position a slider from a pointer offset within a track of `length` cells
    pub fn slider_from_offset(offset: u16, length: u16) -> f32 {
        if length == 0 {
            return SLIDER_CENTER;
        }
        (offset as f32 / length as f32 * 100.0).clamp(0.0, 100.0)
    }

    pub fn set_vertical(&mut self, percent: f32) {
        self.vertical = percent.clamp(0.0, 100.0);
    }

    pub fn set_horizontal(&mut self, percent: f32) {
        self.horizontal = percent.clamp(0.0, 100.0);
    }

    pub fn nudge_vertical(&mut self, delta: f32) {
        self.set_vertical(self.vertical + delta);
    }

    pub fn nudge_horizontal(&mut self, delta: f32) {
        self.set_horizontal(self.horizontal + delta);
    }

    pub fn center_vertical(&mut self) {
        self.vertical = SLIDER_CENTER;
    }

    pub fn center_horizontal(&mut self) {
        self.horizontal = SLIDER_CENTER;
    }
}
