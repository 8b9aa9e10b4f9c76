//! Testing utilities and harness for SlideUp

pub mod fake_view;
pub mod recording;
pub mod robot;
pub mod robot_assertions;

pub use fake_view::{FakeInflater, FakeView};
pub use recording::{ListenerLog, MenuEvent, RecordingListener};
pub use robot::{MenuTestRule, TouchRobot, FRAME_NANOS};
pub use robot_assertions::{assert_approx_eq, assert_count};

pub mod prelude {
    pub use crate::fake_view::{FakeInflater, FakeView};
    pub use crate::recording::{ListenerLog, MenuEvent, RecordingListener};
    pub use crate::robot::{MenuTestRule, TouchRobot, FRAME_NANOS};
    pub use crate::robot_assertions::*;
}
