//! Model layer - centralized state management
//!
//! This module contains all state-related types:
//! - `Catalog` - Static seed lists per tab
//! - `DomainState` - Catalog plus per-tab filtered views
//! - `ViewState` - Drawer, tab, dropdown and theme state
//! - `ModalStack` - Modal overlay management

pub mod catalog;
pub mod domain;
pub mod filter;
pub mod item;
pub mod modal;
pub mod transform;
pub mod ui;
pub mod view;

// Re-export commonly used types
pub use domain::DomainState;
pub use filter::{FilterState, SortMode};
pub use item::Item;
pub use transform::{TransformKind, TransformState};
pub use ui::{Tab, Theme};
pub use view::ViewState;
