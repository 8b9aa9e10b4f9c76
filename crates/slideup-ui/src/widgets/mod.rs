//! UI Widget components

pub mod nodes;
pub mod slide_up_menu;

pub use nodes::*;
pub use slide_up_menu::*;
