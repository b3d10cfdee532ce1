//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod drawer;
pub mod filter_dropdown;
pub mod help_dialog;
pub mod layout;
pub mod more_menu;
pub mod palette;
pub mod quit_dialog;
pub mod transform_dialog;

pub use drawer::{draw_drawer_screen, DrawerComponent, DrawerRenderContext};
pub use filter_dropdown::FilterDropdown;
pub use help_dialog::HelpDialog;
pub use layout::{calculate_main_layout, centered_popup, HitRegions};
pub use more_menu::MoreMenu;
pub use palette::Palette;
pub use quit_dialog::QuitDialog;
pub use transform_dialog::TransformDialog;
