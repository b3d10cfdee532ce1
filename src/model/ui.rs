//! UI enums shared by the model and the components

use std::fmt;

/// Tab selection in the drawer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tab {
    Content,
    Design,
    Advanced,
}

impl Tab {
    pub fn all() -> Vec<Tab> {
        vec![Tab::Content, Tab::Design, Tab::Advanced]
    }

    pub fn name(&self) -> &str {
        match self {
            Tab::Content => "Content",
            Tab::Design => "Design",
            Tab::Advanced => "Advanced",
        }
    }

    /// Position of the tab in `Tab::all()`
    pub fn index(&self) -> usize {
        match self {
            Tab::Content => 0,
            Tab::Design => 1,
            Tab::Advanced => 2,
        }
    }

    pub fn next(&self) -> Tab {
        let tabs = Tab::all();
        tabs[(self.index() + 1) % tabs.len()]
    }

    pub fn previous(&self) -> Tab {
        let tabs = Tab::all();
        tabs[(self.index() + tabs.len() - 1) % tabs.len()]
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Color theme of the drawer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Value stored under the `theme` preference key
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Anything other than `"light"` is treated as dark
    pub fn from_preference(value: Option<&str>) -> Theme {
        match value {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}
