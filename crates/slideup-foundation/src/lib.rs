//! Foundation layer for SlideUp: motion events, dispatch and the
//! multi-touch gesture detector that drives the menu widget.

pub mod clock;
pub mod gesture_constants;
pub mod nodes;

pub use clock::uptime_millis;
pub use nodes::input::*;

pub mod prelude {
    pub use crate::gesture_constants::*;
    pub use crate::nodes::input::prelude::*;
}
