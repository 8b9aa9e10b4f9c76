//! Pointer input dispatcher plumbing.
//!
//! Platform integrations enqueue motion events as they arrive and drain them
//! into a handler on the UI thread.

use super::types::{MotionEvent, PointerPhase};

#[derive(Default)]
pub struct PointerDispatcher {
    queue: Vec<MotionEvent>,
}

impl PointerDispatcher {
    pub fn new() -> Self {
        Self { queue: Vec::new() }
    }

    pub fn push(&mut self, event: MotionEvent) {
        self.queue.push(event);
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Hand every queued event to `handler` in arrival order. Returns the
    /// number of events the handler left unconsumed.
    pub fn drain<F>(&mut self, mut handler: F) -> usize
    where
        F: FnMut(&MotionEvent) -> bool,
    {
        let mut unhandled = 0;
        for event in self.queue.drain(..) {
            if !handler(&event) || !event.is_consumed() {
                if event.phase() != PointerPhase::Move {
                    log::debug!("motion event {:?} was not consumed", event.action);
                }
                unhandled += 1;
            }
        }
        unhandled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::input::types::{MotionAction, PointerSample};

    #[test]
    fn drains_in_arrival_order() {
        let mut dispatcher = PointerDispatcher::new();
        dispatcher.push(MotionEvent::new(MotionAction::Down, 0, [PointerSample::new(0, 0.0, 0.0)], 1));
        dispatcher.push(MotionEvent::new(MotionAction::Up, 0, [PointerSample::new(0, 0.0, 0.0)], 2));
        assert_eq!(dispatcher.len(), 2);

        let mut seen = Vec::new();
        let unhandled = dispatcher.drain(|event| {
            seen.push(event.event_time_millis);
            if event.action == MotionAction::Down {
                event.consume();
                true
            } else {
                false
            }
        });

        assert_eq!(seen, vec![1, 2]);
        assert_eq!(unhandled, 1);
        assert!(dispatcher.is_empty());
    }
}
