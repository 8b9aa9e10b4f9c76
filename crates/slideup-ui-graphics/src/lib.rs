//! Pure math/data for SlideUp
//!
//! This crate contains geometry primitives, color definitions and unit
//! types shared by the gesture detector and the menu widget.

mod color;
mod geometry;
mod unit;

pub use color::*;
pub use geometry::*;
pub use unit::*;

pub mod prelude {
    pub use crate::color::Color;
    pub use crate::geometry::{CornerRadii, Point, Size};
    pub use crate::unit::{Density, Dp};
}
