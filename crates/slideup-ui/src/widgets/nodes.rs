use slideup_ui_graphics::Size;

pub type NodeId = u64;

/// Host content placed inside the menu card.
///
/// The node is an opaque handle: `layout` names what the host inflated and
/// `size` is whatever the host measured on its last layout pass.
#[derive(Clone, Debug, PartialEq)]
pub struct ContentNode {
    id: NodeId,
    layout: String,
    size: Size,
}

impl ContentNode {
    pub fn new(id: NodeId, layout: impl Into<String>) -> Self {
        Self {
            id,
            layout: layout.into(),
            size: Size::ZERO,
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn layout(&self) -> &str {
        &self.layout
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn height(&self) -> f32 {
        self.size.height
    }

    pub(crate) fn set_size(&mut self, size: Size) {
        self.size = size;
    }
}
