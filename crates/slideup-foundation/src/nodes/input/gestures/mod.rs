pub mod touch;

pub use touch::{GestureSession, OnTouchEvent, TouchGestureDetector, TouchPoints};
