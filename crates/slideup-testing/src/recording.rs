use std::cell::RefCell;
use std::rc::Rc;

use slideup_ui::{MenuState, SlideUpMenuListener};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MenuEvent {
    Slide { menu_height: f32, factor: f32 },
    StateChanged(MenuState),
}

/// Shared view of everything a [`RecordingListener`] received.
#[derive(Clone, Debug, Default)]
pub struct ListenerLog {
    events: Rc<RefCell<Vec<MenuEvent>>>,
}

impl ListenerLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Listener writing into this log, ready for `SlideUpMenu::set_listener`.
    pub fn listener(&self) -> Box<RecordingListener> {
        Box::new(RecordingListener {
            events: Rc::clone(&self.events),
        })
    }

    pub fn events(&self) -> Vec<MenuEvent> {
        self.events.borrow().clone()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    pub fn slides(&self) -> Vec<(f32, f32)> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match *event {
                MenuEvent::Slide {
                    menu_height,
                    factor,
                } => Some((menu_height, factor)),
                MenuEvent::StateChanged(_) => None,
            })
            .collect()
    }

    pub fn state_changes(&self) -> Vec<MenuState> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match *event {
                MenuEvent::StateChanged(state) => Some(state),
                MenuEvent::Slide { .. } => None,
            })
            .collect()
    }
}

pub struct RecordingListener {
    events: Rc<RefCell<Vec<MenuEvent>>>,
}

impl SlideUpMenuListener for RecordingListener {
    fn on_slide(&mut self, menu_height: f32, factor: f32) {
        self.events.borrow_mut().push(MenuEvent::Slide {
            menu_height,
            factor,
        });
    }

    fn on_state_changed(&mut self, new_state: MenuState) {
        self.events
            .borrow_mut()
            .push(MenuEvent::StateChanged(new_state));
    }
}
