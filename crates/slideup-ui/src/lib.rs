//! Slide up menu widget.
//!
//! A header and a body wrapped in a card that sits at the bottom of its
//! container. Dragging the card moves it between a collapsed and an expanded
//! position; releasing it animates to one of the two.

pub mod attributes;
mod error;
pub mod widgets;

pub use attributes::{AttributeSet, ContentInflater};
pub use error::SlideUpMenuError;
pub use widgets::*;

pub use slideup_foundation::{MotionAction, MotionEvent, PointerSample, TouchHost};
pub use slideup_ui_graphics::{Color, CornerRadii, Density, Dp, Point, Size};

pub mod prelude {
    pub use crate::attributes::{AttributeSet, ContentInflater};
    pub use crate::error::SlideUpMenuError;
    pub use crate::widgets::{
        CardStyle, ContentNode, MenuGeometry, MenuState, SlideUpMenu, SlideUpMenuBuilder,
        SlideUpMenuListener,
    };
}
