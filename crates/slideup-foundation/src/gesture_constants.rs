//! Shared gesture constants for touch handling.
//!
//! Distances are in pixels of the coordinate space the detector reports in,
//! except [`TAP_SLOP`] which is density independent.

use slideup_ui_graphics::Dp;

/// Time a single recognized finger must be held before a long click fires.
pub const LONG_CLICK_TIME_MILLIS: u64 = 300;

/// Minimum time since the last down/up before a new finger count may be
/// recognized as a gesture start.
pub const GESTURE_START_DELAY_MILLIS: u64 = 100;

/// Jitter magnitude that must be exceeded to recognize a gesture start.
pub const GESTURE_START_JITTER: f32 = 3.0;

/// Jitter magnitude at or above which a long click is suppressed.
pub const LONG_CLICK_MAX_JITTER: f32 = 20.0;

/// Maximum number of points carried in a gesture snapshot.
pub const MAX_FINGER_COUNT: usize = 20;

/// Net drag below this distance is treated as a tap on release.
pub const TAP_SLOP: Dp = Dp(5.0);
