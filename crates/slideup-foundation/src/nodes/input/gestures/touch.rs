//! Multi-touch gesture detector.
//!
//! Turns the raw motion stream of one view into three callbacks: a gesture
//! started with a stable finger count, the gesture moved, and the gesture
//! ended when the last tracked pointer lifted. A single held finger can also
//! trigger the host's long click.
//!
//! Recognition is driven by a jitter accumulator: every move adds the mean
//! of the x and y displacement of each known pointer. A gesture starts once
//! the accumulated magnitude exceeds [`GESTURE_START_JITTER`], the live finger
//! count differs from the recognized one, and at least
//! [`GESTURE_START_DELAY_MILLIS`] passed since the last down/up. The finger
//! count is then frozen until every pointer is lifted.
//!
//! The accumulator is only reset when a gesture start is recognized, so
//! movement of one gesture carries into the next. A cancel ends the
//! recognized gesture and forgets every tracked pointer.

use std::collections::BTreeMap;

use slideup_ui_graphics::Point;
use smallvec::SmallVec;

use crate::gesture_constants::{
    GESTURE_START_DELAY_MILLIS, GESTURE_START_JITTER, LONG_CLICK_MAX_JITTER,
    LONG_CLICK_TIME_MILLIS, MAX_FINGER_COUNT,
};
use crate::nodes::input::host::TouchHost;
use crate::nodes::input::types::{MotionEvent, PointerId, PointerPhase};

/// Point snapshot handed to callbacks: tracked pointers in ascending id
/// order, at most [`MAX_FINGER_COUNT`] entries.
pub type TouchPoints = SmallVec<[Point; 4]>;

/// Receiver of recognized gestures.
pub trait OnTouchEvent {
    fn on_touch_started(&mut self, fingers: usize, points: &[Point]);
    fn on_move(&mut self, fingers: usize, points: &[Point]);
    fn on_touch_end(&mut self, fingers: usize, points: &[Point]);
}

/// Recognition state of the current touch session.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GestureSession {
    /// Signed movement accumulator.
    pub jitter: f32,
    /// Finger count of the recognized gesture, 0 when none is recognized.
    pub fingers: usize,
    /// Finger count the recognized gesture was frozen at.
    pub frozen_fingers: usize,
    /// Event time of the last down/up.
    pub started_at_millis: u64,
    pub long_press_fired: bool,
}

impl GestureSession {
    pub fn is_recognized(&self) -> bool {
        self.fingers != 0
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen_fingers != 0
    }

    /// Absolute distance to the session timestamp; events stamped before it
    /// still count as elapsed time.
    pub fn elapsed_millis(&self, now_millis: u64) -> u64 {
        now_millis.abs_diff(self.started_at_millis)
    }

    fn restart_timer(&mut self, now_millis: u64) {
        self.started_at_millis = now_millis;
        self.long_press_fired = false;
    }

    fn recognize(&mut self, fingers: usize) {
        self.jitter = 0.0;
        self.fingers = fingers;
        self.frozen_fingers = fingers;
    }

    fn end(&mut self) {
        self.fingers = 0;
        self.frozen_fingers = 0;
    }
}

#[derive(Debug, Default)]
pub struct TouchGestureDetector {
    active_points: BTreeMap<PointerId, Point>,
    session: GestureSession,
    required_finger_count: Option<usize>,
    return_raw_coordinates: bool,
}

impl TouchGestureDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only report gestures with exactly `count` fingers. `None` reports all.
    pub fn set_required_finger_count(&mut self, count: Option<usize>) {
        self.required_finger_count = count;
    }

    pub fn required_finger_count(&self) -> Option<usize> {
        self.required_finger_count
    }

    /// Report screen coordinates instead of view-local ones.
    pub fn set_return_raw_coordinates(&mut self, raw: bool) {
        self.return_raw_coordinates = raw;
    }

    pub fn returns_raw_coordinates(&self) -> bool {
        self.return_raw_coordinates
    }

    pub fn session(&self) -> &GestureSession {
        &self.session
    }

    pub fn tracked_pointers(&self) -> usize {
        self.active_points.len()
    }

    /// Feed one motion event. Every event is consumed; the return value is
    /// always `true`.
    pub fn on_touch_event(
        &mut self,
        event: &MotionEvent,
        host: &mut dyn TouchHost,
        handler: &mut dyn OnTouchEvent,
    ) -> bool {
        event.consume();
        let now = event.event_time_millis;

        match event.phase() {
            PointerPhase::Start => {
                let Some(pointer) = event.action_pointer() else {
                    log::warn!("down event without pointer at index {}", event.action_index);
                    return true;
                };
                let position = self.resolve(host, pointer.position);
                self.active_points.insert(pointer.id, position);
                self.session.restart_timer(now);
            }
            PointerPhase::Move => self.handle_move(event, host, handler),
            PointerPhase::End => {
                let Some(pointer) = event.action_pointer() else {
                    log::warn!("up event without pointer at index {}", event.action_index);
                    return true;
                };
                if self.session.is_recognized() && self.active_points.len() <= 1 {
                    self.finish_gesture(host, handler);
                }
                self.active_points.remove(&pointer.id);
                self.session.restart_timer(now);
            }
            PointerPhase::Cancel => {
                // A cancel lifts every pointer at once.
                if self.session.is_recognized() {
                    self.finish_gesture(host, handler);
                }
                self.active_points.clear();
                self.session.restart_timer(now);
            }
        }

        true
    }

    fn finish_gesture(&mut self, host: &mut dyn TouchHost, handler: &mut dyn OnTouchEvent) {
        let fingers = self.session.fingers;
        if self.accepts(fingers) {
            let points = self.snapshot();
            log::debug!("gesture ended with {fingers} finger(s)");
            handler.on_touch_end(fingers, &points);
        }
        host.perform_click();
        self.session.end();
    }

    fn handle_move(
        &mut self,
        event: &MotionEvent,
        host: &mut dyn TouchHost,
        handler: &mut dyn OnTouchEvent,
    ) {
        let now = event.event_time_millis;
        let live = event.pointer_count();

        for sample in &event.pointers {
            let position = self.resolve(host, sample.position);

            if let Some(previous) = self.active_points.get(&sample.id).copied() {
                self.session.jitter +=
                    ((previous.x - position.x) + (previous.y - position.y)) / 2.0;

                if self.session.elapsed_millis(now) > LONG_CLICK_TIME_MILLIS
                    && !self.session.long_press_fired
                    && self.session.fingers == 1
                    && host.is_long_clickable()
                    && self.session.jitter.abs() < LONG_CLICK_MAX_JITTER
                {
                    self.session.long_press_fired = host.perform_long_click(previous);
                    log::debug!(
                        "long click at ({}, {}) handled: {}",
                        previous.x,
                        previous.y,
                        self.session.long_press_fired
                    );
                }

                if self.session.jitter.abs() > GESTURE_START_JITTER
                    && self.session.fingers != live
                    && self.session.elapsed_millis(now) > GESTURE_START_DELAY_MILLIS
                    && !self.session.is_frozen()
                {
                    self.session.recognize(live);
                    if self.accepts(live) {
                        let points = self.snapshot();
                        log::debug!("gesture started with {live} finger(s)");
                        handler.on_touch_started(live, &points);
                    }
                }
            }

            self.active_points.insert(sample.id, position);
        }

        let fingers = self.session.fingers;
        if (self.session.frozen_fingers == live || !self.session.is_frozen())
            && self.active_points.len() == fingers
            && self.accepts(fingers)
        {
            let points = self.snapshot();
            log::trace!("gesture moved with {fingers} finger(s)");
            handler.on_move(fingers, &points);
        }
    }

    fn accepts(&self, fingers: usize) -> bool {
        self.required_finger_count
            .map_or(true, |required| required == fingers)
    }

    fn resolve(&self, host: &dyn TouchHost, local: Point) -> Point {
        if self.return_raw_coordinates {
            host.translate_to_screen(local)
        } else {
            local
        }
    }

    fn snapshot(&self) -> TouchPoints {
        self.active_points
            .values()
            .take(MAX_FINGER_COUNT)
            .copied()
            .collect()
    }
}

#[cfg(test)]
#[path = "../../../tests/touch_tests.rs"]
mod tests;
