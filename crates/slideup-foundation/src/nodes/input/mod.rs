pub mod dispatcher;
pub mod gestures;
pub mod host;
pub mod types;

pub use dispatcher::PointerDispatcher;
pub use gestures::{GestureSession, OnTouchEvent, TouchGestureDetector, TouchPoints};
pub use host::TouchHost;
pub use types::{MotionAction, MotionEvent, PointerId, PointerPhase, PointerSample};

pub mod prelude {
    pub use super::gestures::{GestureSession, OnTouchEvent, TouchGestureDetector, TouchPoints};
    pub use super::host::TouchHost;
    pub use super::types::{MotionAction, MotionEvent, PointerId, PointerPhase, PointerSample};
}
