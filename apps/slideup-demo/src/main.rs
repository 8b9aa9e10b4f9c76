//! Headless walk through the menu: lay it out, drag it open with a scripted
//! finger, let it settle and collapse it again programmatically.

use anyhow::{bail, Context, Result};
use slideup_foundation::{uptime_millis, MotionAction, MotionEvent, PointerSample, TouchHost};
use slideup_ui::attributes::{
    BODY_VIEW, COLLAPSED_MENU_OFFSET, CORNER_RADIUS, EXPANDED_MENU_OFFSET, HEADER_VIEW,
    MENU_BACKGROUND_COLOR, MENU_ELEVATION,
};
use slideup_ui::{
    AttributeSet, ContentInflater, ContentNode, MenuState, SlideUpMenu, SlideUpMenuListener,
};
use slideup_ui_graphics::{Density, Point, Size};

const SCREEN: Size = Size::new(1080.0, 1920.0);
const HEADER: Size = Size::new(1080.0, 168.0);
const BODY: Size = Size::new(1080.0, 720.0);
const FRAME_NANOS: u64 = 16_666_667;

struct Layouts {
    next_id: u64,
}

impl ContentInflater for Layouts {
    fn inflate(&mut self, layout: &str) -> Option<ContentNode> {
        if !layout.starts_with("@layout/") {
            return None;
        }
        self.next_id += 1;
        Some(ContentNode::new(self.next_id, layout))
    }
}

/// Card view as seen by the detector; sits at the menu offset on screen.
#[derive(Default)]
struct CardView {
    origin: Point,
}

impl TouchHost for CardView {
    fn perform_click(&mut self) -> bool {
        log::info!("card clicked");
        true
    }

    fn perform_long_click(&mut self, at: Point) -> bool {
        log::info!("card long clicked at ({}, {})", at.x, at.y);
        true
    }

    fn is_long_clickable(&self) -> bool {
        true
    }

    fn translate_to_screen(&self, local: Point) -> Point {
        local + self.origin
    }
}

struct Printer;

impl SlideUpMenuListener for Printer {
    fn on_slide(&mut self, menu_height: f32, factor: f32) {
        log::info!("slide: height = {menu_height:.1}px, factor = {factor:.3}");
    }

    fn on_state_changed(&mut self, new_state: MenuState) {
        println!("menu is now {new_state:?}");
    }
}

fn init_logging() {
    #[cfg(feature = "logging")]
    {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .format_timestamp_millis()
            .init();
    }
}

fn settle(menu: &mut SlideUpMenu) -> usize {
    let mut frame_time = 0;
    let mut frames = 0;
    while menu.on_frame(frame_time) {
        frame_time += FRAME_NANOS;
        frames += 1;
    }
    frames
}

/// Feeds a one finger swipe in screen coordinates.
fn swipe(menu: &mut SlideUpMenu, view: &mut CardView, from: Point, to: Point, steps: u32) {
    let start = uptime_millis();
    let mut dispatch = |action: MotionAction, at: Point, time: u64| {
        view.origin = Point::new(0.0, menu.offset());
        let local = at - view.origin;
        let event = MotionEvent::new(action, 0, [PointerSample::new(0, local.x, local.y)], time);
        menu.on_touch_event(&event, &mut *view);
    };

    dispatch(MotionAction::Down, from, start);
    for step in 1..=steps {
        let t = step as f32 / steps as f32;
        let at = Point::new(from.x + (to.x - from.x) * t, from.y + (to.y - from.y) * t);
        dispatch(MotionAction::Move, at, start + u64::from(step) * 16);
    }
    dispatch(MotionAction::Up, to, start + u64::from(steps + 1) * 16);
}

fn main() -> Result<()> {
    init_logging();

    let attrs = AttributeSet::new()
        .with(HEADER_VIEW, "@layout/menu_header")
        .with(BODY_VIEW, "@layout/menu_body")
        .with(COLLAPSED_MENU_OFFSET, "8dp")
        .with(EXPANDED_MENU_OFFSET, "16dp")
        .with(CORNER_RADIUS, "12dp")
        .with(MENU_ELEVATION, "6dp")
        .with(MENU_BACKGROUND_COLOR, "#FFFAFAFA");
    let density = Density(3.0);

    let mut menu = SlideUpMenu::from_attributes(&attrs, &mut Layouts { next_id: 0 }, density)
        .context("building slide up menu")?;
    menu.set_listener(Box::new(Printer));
    menu.on_layout(SCREEN, HEADER, BODY);

    let geometry = *menu.geometry();
    println!(
        "laid out: collapsed at y = {}, expanded at y = {}",
        geometry.max_y(),
        geometry.min_y()
    );

    let mut view = CardView::default();
    let grab = Point::new(SCREEN.width / 2.0, geometry.max_y() + HEADER.height / 2.0);
    swipe(&mut menu, &mut view, grab, grab.translate(0.0, -600.0), 24);
    let frames = settle(&mut menu);
    println!("swipe settled after {frames} frames");
    if menu.state() != MenuState::Expanded {
        bail!("expected the swipe to expand the menu, got {:?}", menu.state());
    }

    menu.set_state(MenuState::Collapsed, true);
    settle(&mut menu);
    println!("final state: {:?}, height {}px", menu.state(), menu.menu_height());

    Ok(())
}
