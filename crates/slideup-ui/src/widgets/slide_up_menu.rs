//! Two-state slide up menu.
//!
//! The card holding header and body is positioned by a vertical offset inside
//! the container. `max_y` shows only the header (collapsed), `min_y` shows
//! header and body (expanded). The state is never stored: it is derived from
//! the offset every time it is asked for.

use slideup_animation::{AnimationSpec, ValueAnimator};
use slideup_foundation::gesture_constants::TAP_SLOP;
use slideup_foundation::{MotionEvent, OnTouchEvent, TouchGestureDetector, TouchHost};
use slideup_ui_graphics::{Color, CornerRadii, Density, Point, Size};

use crate::attributes::{
    AttributeSet, ContentInflater, BODY_VIEW, COLLAPSED_MENU_OFFSET, CORNER_RADIUS,
    EXPANDED_MENU_OFFSET, HEADER_VIEW, MENU_BACKGROUND_COLOR, MENU_ELEVATION,
};
use crate::error::SlideUpMenuError;
use crate::widgets::nodes::ContentNode;

/// Duration of the snap animation between states.
pub const SNAP_DURATION_MILLIS: u64 = 300;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MenuState {
    Collapsed,
    Expanded,
}

/// Receives position and state notifications from a [`SlideUpMenu`].
pub trait SlideUpMenuListener {
    /// Called on every position change, dragged or animated.
    fn on_slide(&mut self, menu_height: f32, factor: f32);

    /// Called once when an animated transition lands on its target.
    fn on_state_changed(&mut self, new_state: MenuState);
}

/// Visual style of the card wrapping header and body.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardStyle {
    pub corner_radius: CornerRadii,
    pub elevation: f32,
    pub background_color: Color,
}

impl Default for CardStyle {
    fn default() -> Self {
        Self {
            corner_radius: CornerRadii::default(),
            elevation: 0.0,
            background_color: Color::WHITE,
        }
    }
}

/// Configured offsets plus the measured heights the bounds derive from.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MenuGeometry {
    pub container_height: f32,
    pub header_height: f32,
    pub body_height: f32,
    pub collapsed_offset: f32,
    pub expanded_offset: f32,
}

impl MenuGeometry {
    /// Offset of the fully expanded card.
    pub fn min_y(&self) -> f32 {
        self.container_height - self.header_height - self.body_height - self.expanded_offset
    }

    /// Offset of the fully collapsed card.
    pub fn max_y(&self) -> f32 {
        self.container_height - self.header_height - self.collapsed_offset
    }

    pub fn is_inverted(&self) -> bool {
        self.min_y() > self.max_y()
    }

    /// Bounds `y` to `[min_y, max_y]`. With inverted bounds `max_y` wins.
    pub fn clamp(&self, y: f32) -> f32 {
        self.max_y().min(self.min_y().max(y))
    }

    /// The state nearest to `y`; the exact midpoint counts as expanded.
    pub fn state_for_y(&self, y: f32) -> MenuState {
        if y <= (self.min_y() + self.max_y()) / 2.0 {
            MenuState::Expanded
        } else {
            MenuState::Collapsed
        }
    }

    pub fn y_for_state(&self, state: MenuState) -> f32 {
        match state {
            MenuState::Collapsed => self.max_y(),
            MenuState::Expanded => self.min_y(),
        }
    }

    /// 1 when fully expanded, 0 when fully collapsed. A zero-length range
    /// reports 1.
    pub fn factor(&self, y: f32) -> f32 {
        let range = self.max_y() - self.min_y();
        if range == 0.0 {
            return 1.0;
        }
        1.0 - (y - self.min_y()) / range
    }
}

/// Programmatic configuration of a [`SlideUpMenu`].
pub struct SlideUpMenuBuilder {
    header: ContentNode,
    body: ContentNode,
    card: CardStyle,
    collapsed_offset: f32,
    expanded_offset: f32,
    density: Density,
}

impl SlideUpMenuBuilder {
    pub fn new(header: ContentNode, body: ContentNode) -> Self {
        Self {
            header,
            body,
            card: CardStyle::default(),
            collapsed_offset: 0.0,
            expanded_offset: 0.0,
            density: Density::default(),
        }
    }

    /// Reads every menu attribute, inflating header and body through
    /// `inflater`. Fails when either content reference is missing.
    pub fn from_attributes(
        attrs: &AttributeSet,
        inflater: &mut dyn ContentInflater,
        density: Density,
    ) -> Result<Self, SlideUpMenuError> {
        let header = inflate(attrs, inflater, HEADER_VIEW).ok_or(
            SlideUpMenuError::MissingContent {
                attribute: HEADER_VIEW,
            },
        )?;
        let body = inflate(attrs, inflater, BODY_VIEW).ok_or(SlideUpMenuError::MissingContent {
            attribute: BODY_VIEW,
        })?;

        let collapsed = attrs.dimension_pixel_size(COLLAPSED_MENU_OFFSET, 0, density)?;
        let expanded = attrs.dimension_pixel_size(EXPANDED_MENU_OFFSET, 0, density)?;
        let elevation = attrs.dimension_pixel_size(MENU_ELEVATION, 0, density)?;
        let corner_radius = attrs.dimension_pixel_size(CORNER_RADIUS, 0, density)?;
        let background = attrs.color(MENU_BACKGROUND_COLOR, Color::WHITE)?;

        Ok(Self::new(header, body)
            .collapsed_menu_offset(collapsed as f32)
            .expanded_menu_offset(expanded as f32)
            .elevation(elevation as f32)
            .corner_radius(corner_radius as f32)
            .background_color(background)
            .density(density))
    }

    pub fn collapsed_menu_offset(mut self, px: f32) -> Self {
        self.collapsed_offset = px;
        self
    }

    pub fn expanded_menu_offset(mut self, px: f32) -> Self {
        self.expanded_offset = px;
        self
    }

    pub fn corner_radius(mut self, px: f32) -> Self {
        self.card.corner_radius = CornerRadii::uniform(px);
        self
    }

    pub fn elevation(mut self, px: f32) -> Self {
        self.card.elevation = px;
        self
    }

    pub fn background_color(mut self, color: Color) -> Self {
        self.card.background_color = color;
        self
    }

    pub fn density(mut self, density: Density) -> Self {
        self.density = density;
        self
    }

    pub fn build(self) -> SlideUpMenu {
        let mut touch = TouchGestureDetector::new();
        touch.set_required_finger_count(Some(1));
        touch.set_return_raw_coordinates(true);

        SlideUpMenu {
            touch,
            surface: MenuSurface {
                header: self.header,
                body: self.body,
                card: self.card,
                geometry: MenuGeometry {
                    collapsed_offset: self.collapsed_offset,
                    expanded_offset: self.expanded_offset,
                    ..MenuGeometry::default()
                },
                density: self.density,
                offset: 0.0,
                visible: false,
                laid_out: false,
                animator: ValueAnimator::new(0.0),
                drag: DragAnchor::default(),
                listener: None,
            },
        }
    }
}

fn inflate(
    attrs: &AttributeSet,
    inflater: &mut dyn ContentInflater,
    key: &'static str,
) -> Option<ContentNode> {
    let layout = attrs.resource(key)?;
    let node = inflater.inflate(layout);
    if node.is_none() {
        log::error!("could not inflate '{layout}' referenced by '{key}'");
    }
    node
}

/// Touch point and card offset captured when a drag starts.
#[derive(Clone, Copy, Debug, Default)]
struct DragAnchor {
    touch_start: Point,
    start_offset: f32,
}

/// Everything but the gesture detector, so the detector can drive it.
struct MenuSurface {
    header: ContentNode,
    body: ContentNode,
    card: CardStyle,
    geometry: MenuGeometry,
    density: Density,
    offset: f32,
    visible: bool,
    laid_out: bool,
    animator: ValueAnimator<f32>,
    drag: DragAnchor,
    listener: Option<Box<dyn SlideUpMenuListener>>,
}

impl MenuSurface {
    fn state(&self) -> MenuState {
        self.geometry.state_for_y(self.offset)
    }

    fn menu_height(&self) -> f32 {
        self.geometry.container_height - self.offset
    }

    fn factor(&self) -> f32 {
        self.geometry.factor(self.offset)
    }

    fn notify_slide(&mut self) {
        let menu_height = self.menu_height();
        let factor = self.factor();
        if let Some(listener) = self.listener.as_mut() {
            listener.on_slide(menu_height, factor);
        }
    }

    /// Move without animating. Stops a running snap animation.
    fn jump_to(&mut self, y: f32) {
        self.animator.snap_to(y);
        self.offset = y;
        self.notify_slide();
    }

    fn set_state(&mut self, state: MenuState, animate: bool) {
        let target = self.geometry.y_for_state(state);
        log::debug!("moving menu to {state:?} (y = {target}, animate = {animate})");
        if animate {
            self.animator.start(
                self.offset,
                target,
                AnimationSpec::decelerate(SNAP_DURATION_MILLIS),
            );
        } else {
            self.jump_to(target);
        }
    }

    fn on_frame(&mut self, frame_time_nanos: u64) -> bool {
        let Some(frame) = self.animator.on_frame(frame_time_nanos) else {
            return self.animator.is_running();
        };
        self.offset = frame.value;
        self.notify_slide();
        if frame.finished && frame.value == self.animator.target() {
            let state = self.state();
            log::debug!("menu settled {state:?}");
            if let Some(listener) = self.listener.as_mut() {
                listener.on_state_changed(state);
            }
        }
        self.animator.is_running()
    }

    fn drag_target(&self, touch: Point) -> f32 {
        self.geometry
            .clamp(self.drag.start_offset + touch.y - self.drag.touch_start.y)
    }
}

impl OnTouchEvent for MenuSurface {
    fn on_touch_started(&mut self, _fingers: usize, points: &[Point]) {
        let Some(&touch) = points.first() else {
            return;
        };
        if self.animator.is_running() {
            self.animator.snap_to(self.offset);
        }
        self.drag = DragAnchor {
            touch_start: touch,
            start_offset: self.offset,
        };
    }

    fn on_move(&mut self, _fingers: usize, points: &[Point]) {
        let Some(&touch) = points.first() else {
            return;
        };
        self.offset = self.drag_target(touch);
        log::trace!("menu dragged to y = {}", self.offset);
        self.notify_slide();
    }

    fn on_touch_end(&mut self, _fingers: usize, points: &[Point]) {
        let Some(&touch) = points.first() else {
            return;
        };
        let y = self.drag_target(touch);
        let start = self.drag.start_offset;

        if (start - y).abs() < self.density.dp_to_px(TAP_SLOP) {
            let nearest = self.geometry.state_for_y(y);
            self.set_state(nearest, true);
        } else if start < y {
            self.set_state(MenuState::Collapsed, true);
        } else {
            self.set_state(MenuState::Expanded, true);
        }
    }
}

/// Bottom-anchored menu with a draggable header/body card.
///
/// The host forwards touch events on the card to [`SlideUpMenu::on_touch_event`],
/// reports measured sizes through [`SlideUpMenu::on_layout`] and, while
/// [`SlideUpMenu::is_animating`] holds, drives [`SlideUpMenu::on_frame`] from
/// its vsync callback.
pub struct SlideUpMenu {
    touch: TouchGestureDetector,
    surface: MenuSurface,
}

impl SlideUpMenu {
    pub fn builder(header: ContentNode, body: ContentNode) -> SlideUpMenuBuilder {
        SlideUpMenuBuilder::new(header, body)
    }

    /// Build a menu from host attributes.
    pub fn from_attributes(
        attrs: &AttributeSet,
        inflater: &mut dyn ContentInflater,
        density: Density,
    ) -> Result<Self, SlideUpMenuError> {
        SlideUpMenuBuilder::from_attributes(attrs, inflater, density).map(SlideUpMenuBuilder::build)
    }

    /// Record measured sizes. The first call places the card collapsed and
    /// makes it visible.
    pub fn on_layout(&mut self, container: Size, header: Size, body: Size) {
        let surface = &mut self.surface;
        surface.header.set_size(header);
        surface.body.set_size(body);
        surface.geometry.container_height = container.height;
        surface.geometry.header_height = header.height;
        surface.geometry.body_height = body.height;

        if surface.geometry.is_inverted() {
            log::warn!(
                "menu bounds are inverted (min_y = {} > max_y = {}); offsets exceed the available space",
                surface.geometry.min_y(),
                surface.geometry.max_y()
            );
        }

        if !surface.laid_out {
            surface.laid_out = true;
            let collapsed = surface.geometry.max_y();
            surface.jump_to(collapsed);
            surface.visible = true;
        }
    }

    /// Feed a touch event on the card. Always consumes it.
    ///
    /// A recognized drag stops a running snap animation where it is; that
    /// animation never reports a state change. The release starts a new snap.
    pub fn on_touch_event(&mut self, event: &MotionEvent, host: &mut dyn TouchHost) -> bool {
        self.touch.on_touch_event(event, host, &mut self.surface)
    }

    /// Advance the snap animation. Returns whether more frames are needed.
    pub fn on_frame(&mut self, frame_time_nanos: u64) -> bool {
        self.surface.on_frame(frame_time_nanos)
    }

    pub fn is_animating(&self) -> bool {
        self.surface.animator.is_running()
    }

    pub fn state(&self) -> MenuState {
        self.surface.state()
    }

    pub fn set_state(&mut self, state: MenuState, animate: bool) {
        self.surface.set_state(state, animate);
    }

    pub fn set_collapsed_menu_offset(&mut self, px: f32) {
        self.surface.geometry.collapsed_offset = px;
        let y = self.surface.geometry.max_y();
        self.surface.jump_to(y);
    }

    pub fn set_expanded_menu_offset(&mut self, px: f32) {
        self.surface.geometry.expanded_offset = px;
        let y = self.surface.geometry.min_y();
        self.surface.jump_to(y);
    }

    pub fn set_listener(&mut self, listener: Box<dyn SlideUpMenuListener>) {
        self.surface.listener = Some(listener);
    }

    pub fn clear_listener(&mut self) {
        self.surface.listener = None;
    }

    pub fn header(&self) -> &ContentNode {
        &self.surface.header
    }

    pub fn body(&self) -> &ContentNode {
        &self.surface.body
    }

    pub fn card(&self) -> &CardStyle {
        &self.surface.card
    }

    pub fn geometry(&self) -> &MenuGeometry {
        &self.surface.geometry
    }

    pub fn density(&self) -> Density {
        self.surface.density
    }

    /// Current vertical offset of the card inside the container.
    pub fn offset(&self) -> f32 {
        self.surface.offset
    }

    /// Visible height of the card measured from the container bottom.
    pub fn menu_height(&self) -> f32 {
        self.surface.menu_height()
    }

    pub fn factor(&self) -> f32 {
        self.surface.factor()
    }

    pub fn is_visible(&self) -> bool {
        self.surface.visible
    }

    pub fn touch_detector(&self) -> &TouchGestureDetector {
        &self.touch
    }
}

#[cfg(test)]
#[path = "../tests/slide_up_menu_tests.rs"]
mod tests;
