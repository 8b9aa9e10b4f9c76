use slideup_ui_graphics::Point;
use smallvec::SmallVec;
use std::cell::Cell;
use std::rc::Rc;

pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    Start,
    Move,
    End,
    Cancel,
}

/// Masked action of a motion event. `PointerDown`/`PointerUp` concern a
/// secondary pointer while others stay down.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MotionAction {
    Down,
    PointerDown,
    Move,
    Up,
    PointerUp,
    Cancel,
}

impl MotionAction {
    pub fn phase(self) -> PointerPhase {
        match self {
            MotionAction::Down | MotionAction::PointerDown => PointerPhase::Start,
            MotionAction::Move => PointerPhase::Move,
            MotionAction::Up | MotionAction::PointerUp => PointerPhase::End,
            MotionAction::Cancel => PointerPhase::Cancel,
        }
    }
}

/// One pointer carried by a motion event, in view-local coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub id: PointerId,
    pub position: Point,
}

impl PointerSample {
    pub fn new(id: PointerId, x: f32, y: f32) -> Self {
        Self {
            id,
            position: Point::new(x, y),
        }
    }
}

/// Multi-pointer motion event with consumption tracking.
///
/// `pointers` lists every pointer that is down when the event is dispatched,
/// including the one that is going up for `Up`/`PointerUp`. `action_index`
/// selects the pointer the action refers to.
#[derive(Clone, Debug)]
pub struct MotionEvent {
    pub action: MotionAction,
    pub action_index: usize,
    pub pointers: SmallVec<[PointerSample; 4]>,
    pub event_time_millis: u64,
    /// Shared via Rc<Cell> so consumption can be tracked across copies.
    consumed: Rc<Cell<bool>>,
}

impl MotionEvent {
    pub fn new(
        action: MotionAction,
        action_index: usize,
        pointers: impl IntoIterator<Item = PointerSample>,
        event_time_millis: u64,
    ) -> Self {
        Self {
            action,
            action_index,
            pointers: pointers.into_iter().collect(),
            event_time_millis,
            consumed: Rc::new(Cell::new(false)),
        }
    }

    pub fn phase(&self) -> PointerPhase {
        self.action.phase()
    }

    pub fn pointer_count(&self) -> usize {
        self.pointers.len()
    }

    /// Pointer the action refers to, if the index is in range.
    pub fn action_pointer(&self) -> Option<&PointerSample> {
        self.pointers.get(self.action_index)
    }

    /// Mark this event as handled so the host skips default handling.
    pub fn consume(&self) {
        self.consumed.set(true);
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed.get()
    }
}
