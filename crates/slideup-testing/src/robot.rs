//! Robot testing for the slide up menu.
//!
//! [`TouchRobot`] scripts timed motion events in screen coordinates the way a
//! finger would produce them. [`MenuTestRule`] owns a menu together with its
//! fake host view, feeds the robot's events to the menu and pumps animation
//! frames until the menu settles.

use slideup_foundation::{MotionAction, MotionEvent, PointerDispatcher, PointerId, PointerSample};
use slideup_ui::SlideUpMenu;
use slideup_ui_graphics::{Point, Size};

use crate::fake_view::FakeView;
use crate::recording::ListenerLog;

/// One 60Hz frame.
pub const FRAME_NANOS: u64 = 16_666_667;

const MAX_FRAMES: usize = 600;

/// Builds motion event streams with a manual clock.
pub struct TouchRobot {
    now_millis: u64,
    pointers: Vec<(PointerId, Point)>,
    dispatcher: PointerDispatcher,
}

impl Default for TouchRobot {
    fn default() -> Self {
        Self::new()
    }
}

impl TouchRobot {
    pub fn new() -> Self {
        Self {
            now_millis: 1_000,
            pointers: Vec::new(),
            dispatcher: PointerDispatcher::new(),
        }
    }

    pub fn now_millis(&self) -> u64 {
        self.now_millis
    }

    pub fn advance(&mut self, millis: u64) -> &mut Self {
        self.now_millis += millis;
        self
    }

    pub fn is_pressed(&self, id: PointerId) -> bool {
        self.pointers.iter().any(|(pointer, _)| *pointer == id)
    }

    /// Put pointer `id` down. The first pointer produces `Down`, later ones
    /// `PointerDown`.
    pub fn press(&mut self, id: PointerId, x: f32, y: f32) -> &mut Self {
        if self.is_pressed(id) {
            log::warn!("pointer {id} is already down");
            return self;
        }
        let action = if self.pointers.is_empty() {
            MotionAction::Down
        } else {
            MotionAction::PointerDown
        };
        self.pointers.push((id, Point::new(x, y)));
        let index = self.pointers.len() - 1;
        self.emit(action, index);
        self
    }

    /// Move pointer `id`; every pointer that is down is reported.
    pub fn move_pointer(&mut self, id: PointerId, x: f32, y: f32) -> &mut Self {
        match self.index_of(id) {
            Some(index) => {
                self.pointers[index].1 = Point::new(x, y);
                self.emit(MotionAction::Move, index);
            }
            None => log::warn!("pointer {id} is not down"),
        }
        self
    }

    /// Lift pointer `id` where it last moved to.
    pub fn release(&mut self, id: PointerId) -> &mut Self {
        let Some(index) = self.index_of(id) else {
            log::warn!("pointer {id} is not down");
            return self;
        };
        let action = if self.pointers.len() == 1 {
            MotionAction::Up
        } else {
            MotionAction::PointerUp
        };
        self.emit(action, index);
        self.pointers.remove(index);
        self
    }

    /// Cancel the stream, lifting every pointer.
    pub fn cancel(&mut self) -> &mut Self {
        if !self.pointers.is_empty() {
            self.emit(MotionAction::Cancel, 0);
            self.pointers.clear();
        }
        self
    }

    /// Press at `from`, move to `to` in `steps` equal moves `step_millis`
    /// apart and release.
    pub fn drag(
        &mut self,
        id: PointerId,
        from: Point,
        to: Point,
        steps: usize,
        step_millis: u64,
    ) -> &mut Self {
        self.press(id, from.x, from.y);
        let steps = steps.max(1);
        for step in 1..=steps {
            let t = step as f32 / steps as f32;
            self.advance(step_millis);
            self.move_pointer(
                id,
                from.x + (to.x - from.x) * t,
                from.y + (to.y - from.y) * t,
            );
        }
        self.advance(step_millis);
        self.release(id)
    }

    pub fn pending(&self) -> usize {
        self.dispatcher.len()
    }

    pub fn dispatcher(&mut self) -> &mut PointerDispatcher {
        &mut self.dispatcher
    }

    fn index_of(&self, id: PointerId) -> Option<usize> {
        self.pointers.iter().position(|(pointer, _)| *pointer == id)
    }

    fn emit(&mut self, action: MotionAction, index: usize) {
        let samples = self
            .pointers
            .iter()
            .map(|(id, position)| PointerSample::new(*id, position.x, position.y));
        let event = MotionEvent::new(action, index, samples, self.now_millis);
        self.dispatcher.push(event);
    }
}

/// A menu wired to a fake host view, a robot and a recording listener.
pub struct MenuTestRule {
    pub menu: SlideUpMenu,
    pub view: FakeView,
    pub robot: TouchRobot,
    pub log: ListenerLog,
    frame_time_nanos: u64,
}

impl MenuTestRule {
    pub fn new(mut menu: SlideUpMenu) -> Self {
        let log = ListenerLog::new();
        menu.set_listener(log.listener());
        Self {
            menu,
            view: FakeView::new(),
            robot: TouchRobot::new(),
            log,
            frame_time_nanos: 0,
        }
    }

    /// Lay the menu out in a container `width` wide.
    pub fn layout(&mut self, width: f32, container: f32, header: f32, body: f32) -> &mut Self {
        self.menu.on_layout(
            Size::new(width, container),
            Size::new(width, header),
            Size::new(width, body),
        );
        self
    }

    /// Deliver queued robot events to the menu. Returns how many were left
    /// unconsumed.
    ///
    /// The card moves while it is dragged, so every event is translated into
    /// card-local coordinates against the card position at dispatch time.
    pub fn flush_input(&mut self) -> usize {
        let Self {
            menu, view, robot, ..
        } = self;
        robot.dispatcher().drain(|event| {
            view.origin = Point::new(0.0, menu.offset());
            let mut local = event.clone();
            for sample in local.pointers.iter_mut() {
                sample.position = view.to_local(sample.position);
            }
            menu.on_touch_event(&local, &mut *view)
        })
    }

    /// Advance one frame. Returns whether the menu wants another.
    pub fn advance_frame(&mut self) -> bool {
        self.frame_time_nanos += FRAME_NANOS;
        self.menu.on_frame(self.frame_time_nanos)
    }

    /// Flush input and run frames until the menu stops animating. Returns the
    /// number of frames run.
    pub fn pump_until_idle(&mut self) -> usize {
        self.flush_input();
        let mut frames = 0;
        while self.menu.is_animating() {
            if frames >= MAX_FRAMES {
                log::error!("menu still animating after {MAX_FRAMES} frames");
                break;
            }
            self.advance_frame();
            frames += 1;
        }
        frames
    }
}
