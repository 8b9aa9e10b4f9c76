//! In-memory stand-ins for the host view and layout inflation.

use slideup_foundation::TouchHost;
use slideup_ui::{ContentInflater, ContentNode};
use slideup_ui_graphics::Point;

/// Host view that records click dispatch and sits at `origin` on screen.
#[derive(Debug, Default)]
pub struct FakeView {
    pub origin: Point,
    pub long_clickable: bool,
    pub clicks: usize,
    pub long_clicks: Vec<Point>,
}

impl FakeView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn long_clickable(mut self) -> Self {
        self.long_clickable = true;
        self
    }

    pub fn to_local(&self, screen: Point) -> Point {
        screen - self.origin
    }
}

impl TouchHost for FakeView {
    fn perform_click(&mut self) -> bool {
        self.clicks += 1;
        true
    }

    fn perform_long_click(&mut self, at: Point) -> bool {
        self.long_clicks.push(at);
        true
    }

    fn is_long_clickable(&self) -> bool {
        self.long_clickable
    }

    fn translate_to_screen(&self, local: Point) -> Point {
        local + self.origin
    }
}

/// Inflates any layout whose name was registered with [`FakeInflater::with_layout`].
#[derive(Debug, Default)]
pub struct FakeInflater {
    layouts: Vec<String>,
    next_id: u64,
}

impl FakeInflater {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_layout(mut self, layout: impl Into<String>) -> Self {
        self.layouts.push(layout.into());
        self
    }
}

impl ContentInflater for FakeInflater {
    fn inflate(&mut self, layout: &str) -> Option<ContentNode> {
        if !self.layouts.iter().any(|known| known == layout) {
            return None;
        }
        self.next_id += 1;
        Some(ContentNode::new(self.next_id, layout))
    }
}
