//! Animation system for SlideUp
//!
//! Time-based tweens with easing curves, advanced by frame timestamps the
//! host delivers on vsync.

mod animation;

pub use animation::*;

pub mod prelude {
    pub use crate::animation::{AnimationFrame, AnimationSpec, Easing, Lerp, ValueAnimator};
}
