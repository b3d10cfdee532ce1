//! Accordion items shown in the drawer

/// A single accordion entry of a tab
///
/// Content is fixed once seeded. Only `expanded` changes, and only through
/// an explicit toggle on a view list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub title: String,
    pub description: String,
    /// Category tag used by the filter dropdown
    pub category: String,
    /// Symbolic icon name, resolved to a glyph by `icon()`
    pub icon_ref: String,
    /// Position in the tab's seed list
    pub original_index: usize,
    pub expanded: bool,
}

impl Item {
    pub fn new(
        original_index: usize,
        title: &str,
        description: &str,
        category: &str,
        icon_ref: &str,
    ) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            category: category.to_string(),
            icon_ref: icon_ref.to_string(),
            original_index,
            expanded: false,
        }
    }

    /// Get a glyph for the item's icon reference
    pub fn icon(&self) -> &str {
        match self.icon_ref.as_str() {
            "text" => "¶",
            "editor" => "✎",
            "image" => "▣",
            "video" => "▶",
            "button" => "◉",
            "form" => "☰",
            "chart" => "▤",
            "icons" => "✦",
            "gallery" => "▦",
            "template" => "❐",
            "size" => "⤢",
            "spacing" => "↔",
            "border" => "□",
            "shadow" => "◩",
            "filter" => "◐",
            "transform" => "⟳",
            "background" => "▨",
            "font" => "A",
            "palette" => "●",
            "grid" => "▦",
            "code" => "‹›",
            "motion" => "≈",
            "responsive" => "⇔",
            "script" => "ƒ",
            "gauge" => "◔",
            "search" => "⌕",
            "access" => "♿",
            "plug" => "⚡",
            "lock" => "⚿",
            "stats" => "▥",
            _ => "•",
        }
    }

    /// Case-insensitive match of an already lowercased needle against title or description
    pub fn matches(&self, needle_lower: &str) -> bool {
        self.title.to_lowercase().contains(needle_lower)
            || self.description.to_lowercase().contains(needle_lower)
    }
}
