use super::*;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq)]
enum Event {
    Slide(f32, f32),
    State(MenuState),
}

#[derive(Clone, Default)]
struct Recorder {
    events: Rc<RefCell<Vec<Event>>>,
}

impl Recorder {
    fn take(&self) -> Vec<Event> {
        std::mem::take(&mut *self.events.borrow_mut())
    }
}

impl SlideUpMenuListener for Recorder {
    fn on_slide(&mut self, menu_height: f32, factor: f32) {
        self.events.borrow_mut().push(Event::Slide(menu_height, factor));
    }

    fn on_state_changed(&mut self, new_state: MenuState) {
        self.events.borrow_mut().push(Event::State(new_state));
    }
}

struct Layouts;

impl ContentInflater for Layouts {
    fn inflate(&mut self, layout: &str) -> Option<ContentNode> {
        match layout {
            "menu_header" => Some(ContentNode::new(1, layout)),
            "menu_body" => Some(ContentNode::new(2, layout)),
            _ => None,
        }
    }
}

fn scenario_geometry() -> MenuGeometry {
    MenuGeometry {
        container_height: 400.0,
        header_height: 100.0,
        body_height: 200.0,
        collapsed_offset: 10.0,
        expanded_offset: 20.0,
    }
}

/// Menu laid out as in `scenario_geometry`, with a cleared recorder.
fn laid_out_menu() -> (SlideUpMenu, Recorder) {
    let mut menu = SlideUpMenu::builder(
        ContentNode::new(1, "menu_header"),
        ContentNode::new(2, "menu_body"),
    )
    .collapsed_menu_offset(10.0)
    .expanded_menu_offset(20.0)
    .build();
    let recorder = Recorder::default();
    menu.set_listener(Box::new(recorder.clone()));
    menu.on_layout(
        Size::new(300.0, 400.0),
        Size::new(300.0, 100.0),
        Size::new(300.0, 200.0),
    );
    recorder.take();
    (menu, recorder)
}

/// Runs 60Hz frames until the menu settles.
fn run_frames(menu: &mut SlideUpMenu) -> usize {
    let mut frames = 0;
    let mut time = 0;
    while menu.is_animating() && frames < 100 {
        menu.on_frame(time);
        time += 16_666_667;
        frames += 1;
    }
    frames
}

#[test]
fn geometry_bounds_and_states() {
    let geometry = scenario_geometry();
    assert_eq!(geometry.max_y(), 290.0);
    assert_eq!(geometry.min_y(), 80.0);
    assert!(!geometry.is_inverted());

    assert_eq!(geometry.state_for_y(80.0), MenuState::Expanded);
    assert_eq!(geometry.state_for_y(185.0), MenuState::Expanded);
    assert_eq!(geometry.state_for_y(186.0), MenuState::Collapsed);
    assert_eq!(geometry.state_for_y(290.0), MenuState::Collapsed);

    assert_eq!(geometry.factor(80.0), 1.0);
    assert_eq!(geometry.factor(290.0), 0.0);
    assert_eq!(geometry.factor(185.0), 0.5);

    assert_eq!(geometry.clamp(500.0), 290.0);
    assert_eq!(geometry.clamp(-10.0), 80.0);
    assert_eq!(geometry.clamp(150.0), 150.0);
}

#[test]
fn inverted_bounds_clamp_to_max() {
    let geometry = MenuGeometry {
        container_height: 400.0,
        header_height: 100.0,
        body_height: 10.0,
        collapsed_offset: 30.0,
        expanded_offset: 0.0,
    };
    assert!(geometry.is_inverted());
    assert_eq!(geometry.clamp(0.0), 270.0);
    assert_eq!(geometry.clamp(1000.0), 270.0);
}

#[test]
fn zero_range_reports_full_factor() {
    let geometry = MenuGeometry {
        container_height: 400.0,
        header_height: 100.0,
        ..MenuGeometry::default()
    };
    assert_eq!(geometry.min_y(), geometry.max_y());
    assert_eq!(geometry.factor(300.0), 1.0);
    assert_eq!(geometry.state_for_y(300.0), MenuState::Expanded);
}

#[test]
fn first_layout_places_menu_collapsed() {
    let mut menu = SlideUpMenu::builder(ContentNode::new(1, "h"), ContentNode::new(2, "b"))
        .collapsed_menu_offset(10.0)
        .expanded_menu_offset(20.0)
        .build();
    let recorder = Recorder::default();
    menu.set_listener(Box::new(recorder.clone()));
    assert!(!menu.is_visible());

    menu.on_layout(
        Size::new(300.0, 400.0),
        Size::new(300.0, 100.0),
        Size::new(300.0, 200.0),
    );

    assert!(menu.is_visible());
    assert_eq!(menu.offset(), 290.0);
    assert_eq!(menu.state(), MenuState::Collapsed);
    assert_eq!(menu.menu_height(), 110.0);
    assert_eq!(menu.header().height(), 100.0);
    assert_eq!(menu.body().height(), 200.0);
    assert_eq!(recorder.take(), vec![Event::Slide(110.0, 0.0)]);

    menu.on_layout(
        Size::new(300.0, 400.0),
        Size::new(300.0, 100.0),
        Size::new(300.0, 200.0),
    );
    assert!(recorder.take().is_empty());
}

#[test]
fn set_state_without_animation_jumps() {
    let (mut menu, recorder) = laid_out_menu();

    menu.set_state(MenuState::Expanded, false);

    assert_eq!(menu.offset(), 80.0);
    assert_eq!(menu.state(), MenuState::Expanded);
    assert!(!menu.is_animating());
    assert_eq!(recorder.take(), vec![Event::Slide(320.0, 1.0)]);
}

#[test]
fn animated_collapse_reports_state_once() {
    let (mut menu, recorder) = laid_out_menu();
    menu.set_state(MenuState::Expanded, false);
    recorder.take();

    menu.set_state(MenuState::Collapsed, true);
    assert!(menu.is_animating());
    assert_eq!(menu.offset(), 80.0);
    let frames = run_frames(&mut menu);

    assert_eq!(frames, 19);
    assert_eq!(menu.offset(), 290.0);
    let events = recorder.take();
    let (slides, states): (Vec<&Event>, Vec<&Event>) =
        events.iter().partition(|event| matches!(event, Event::Slide(..)));
    assert_eq!(states, vec![&Event::State(MenuState::Collapsed)]);
    assert_eq!(events.last(), Some(&Event::State(MenuState::Collapsed)));

    let factors: Vec<f32> = slides
        .iter()
        .filter_map(|event| match event {
            Event::Slide(_, factor) => Some(*factor),
            Event::State(_) => None,
        })
        .collect();
    assert_eq!(factors.first(), Some(&1.0));
    assert_eq!(factors.last(), Some(&0.0));
    assert!(factors.windows(2).all(|pair| pair[1] <= pair[0]));
}

#[test]
fn new_animation_supersedes_running_one() {
    let (mut menu, recorder) = laid_out_menu();

    menu.set_state(MenuState::Expanded, true);
    menu.on_frame(0);
    menu.on_frame(50_000_000);
    let midway = menu.offset();
    assert!(midway < 290.0 && midway > 80.0);

    menu.set_state(MenuState::Collapsed, true);
    run_frames(&mut menu);

    assert_eq!(menu.offset(), 290.0);
    let states: Vec<_> = recorder
        .take()
        .into_iter()
        .filter(|event| matches!(event, Event::State(_)))
        .collect();
    assert_eq!(states, vec![Event::State(MenuState::Collapsed)]);
}

#[test]
fn jump_cancels_running_animation() {
    let (mut menu, recorder) = laid_out_menu();

    menu.set_state(MenuState::Expanded, true);
    menu.on_frame(0);
    menu.set_state(MenuState::Collapsed, false);

    assert!(!menu.is_animating());
    assert!(!menu.on_frame(16_666_667));
    assert_eq!(menu.offset(), 290.0);
    assert!(recorder
        .take()
        .iter()
        .all(|event| matches!(event, Event::Slide(..))));
}

#[test]
fn offset_setters_jump_to_their_bound() {
    let (mut menu, recorder) = laid_out_menu();

    menu.set_collapsed_menu_offset(50.0);
    assert_eq!(menu.offset(), 250.0);
    assert_eq!(menu.state(), MenuState::Collapsed);

    menu.set_expanded_menu_offset(0.0);
    assert_eq!(menu.offset(), 100.0);
    assert_eq!(menu.state(), MenuState::Expanded);

    assert_eq!(
        recorder.take(),
        vec![Event::Slide(150.0, 0.0), Event::Slide(300.0, 1.0)]
    );
}

#[test]
fn short_drag_settles_to_nearest_state() {
    let (mut menu, _recorder) = laid_out_menu();
    let surface = &mut menu.surface;

    surface.on_touch_started(1, &[Point::new(10.0, 300.0)]);
    surface.on_move(1, &[Point::new(10.0, 296.0)]);
    assert_eq!(surface.offset, 286.0);
    surface.on_touch_end(1, &[Point::new(10.0, 296.0)]);

    assert!(surface.animator.is_running());
    assert_eq!(surface.animator.target(), 290.0);
}

#[test]
fn long_drag_settles_by_direction() {
    let (mut menu, _recorder) = laid_out_menu();
    let surface = &mut menu.surface;

    // 200 lies on the collapsed side of the midpoint.
    surface.on_touch_started(1, &[Point::new(10.0, 300.0)]);
    surface.on_move(1, &[Point::new(10.0, 210.0)]);
    surface.on_touch_end(1, &[Point::new(10.0, 210.0)]);
    assert_eq!(surface.animator.target(), 80.0);

    surface.animator.snap_to(100.0);
    surface.offset = 100.0;
    surface.on_touch_started(1, &[Point::new(10.0, 300.0)]);
    surface.on_touch_end(1, &[Point::new(10.0, 320.0)]);
    assert_eq!(surface.animator.target(), 290.0);
}

#[test]
fn drag_is_clamped_to_bounds() {
    let (mut menu, recorder) = laid_out_menu();
    let surface = &mut menu.surface;

    surface.on_touch_started(1, &[Point::new(10.0, 300.0)]);
    surface.on_move(1, &[Point::new(10.0, -400.0)]);
    assert_eq!(surface.offset, 80.0);
    surface.on_move(1, &[Point::new(10.0, 900.0)]);
    assert_eq!(surface.offset, 290.0);

    assert_eq!(
        recorder.take(),
        vec![Event::Slide(320.0, 1.0), Event::Slide(110.0, 0.0)]
    );
}

#[test]
fn drag_start_stops_the_snap_animation() {
    let (mut menu, _recorder) = laid_out_menu();
    menu.set_state(MenuState::Expanded, true);
    menu.on_frame(0);
    menu.on_frame(100_000_000);
    let held = menu.offset();

    menu.surface.on_touch_started(1, &[Point::new(10.0, 250.0)]);

    assert!(!menu.is_animating());
    assert!(!menu.on_frame(200_000_000));
    assert_eq!(menu.offset(), held);
}

#[test]
fn tap_slop_scales_with_density() {
    let (mut menu, _recorder) = laid_out_menu();
    menu.surface.density = Density(10.0);
    let surface = &mut menu.surface;

    // 40px is under the 50px slop, so 250 settles to the nearest state.
    surface.on_touch_started(1, &[Point::new(10.0, 300.0)]);
    surface.on_touch_end(1, &[Point::new(10.0, 260.0)]);
    assert_eq!(surface.animator.target(), 290.0);
}

#[test]
fn builder_configures_single_finger_raw_detector() {
    let menu = SlideUpMenu::builder(ContentNode::new(1, "h"), ContentNode::new(2, "b")).build();
    assert_eq!(menu.touch_detector().required_finger_count(), Some(1));
    assert!(menu.touch_detector().returns_raw_coordinates());
    assert_eq!(menu.card(), &CardStyle::default());
    assert_eq!(menu.card().background_color, Color::WHITE);
}

#[test]
fn from_attributes_reads_every_attribute() {
    let attrs = AttributeSet::new()
        .with(HEADER_VIEW, "menu_header")
        .with(BODY_VIEW, "menu_body")
        .with(COLLAPSED_MENU_OFFSET, "5dp")
        .with(EXPANDED_MENU_OFFSET, "12px")
        .with(CORNER_RADIUS, "4dp")
        .with(MENU_ELEVATION, "2dp")
        .with(MENU_BACKGROUND_COLOR, "#FF112233");

    let menu = SlideUpMenu::from_attributes(&attrs, &mut Layouts, Density(2.0))
        .expect("menu should build");

    assert_eq!(menu.header().layout(), "menu_header");
    assert_eq!(menu.body().layout(), "menu_body");
    assert_eq!(menu.geometry().collapsed_offset, 10.0);
    assert_eq!(menu.geometry().expanded_offset, 12.0);
    assert_eq!(menu.card().corner_radius, CornerRadii::uniform(8.0));
    assert_eq!(menu.card().elevation, 4.0);
    assert_eq!(
        menu.card().background_color,
        Color::from_rgb_u8(0x11, 0x22, 0x33)
    );
    assert_eq!(menu.density(), Density(2.0));
}

#[test]
fn from_attributes_requires_header_and_body() {
    let only_body = AttributeSet::new().with(BODY_VIEW, "menu_body");
    assert_eq!(
        SlideUpMenu::from_attributes(&only_body, &mut Layouts, Density::default()).err(),
        Some(SlideUpMenuError::MissingContent {
            attribute: HEADER_VIEW
        })
    );

    let unknown_body = AttributeSet::new()
        .with(HEADER_VIEW, "menu_header")
        .with(BODY_VIEW, "missing_layout");
    assert_eq!(
        SlideUpMenu::from_attributes(&unknown_body, &mut Layouts, Density::default()).err(),
        Some(SlideUpMenuError::MissingContent {
            attribute: BODY_VIEW
        })
    );
}

#[test]
fn from_attributes_rejects_malformed_color() {
    let attrs = AttributeSet::new()
        .with(HEADER_VIEW, "menu_header")
        .with(BODY_VIEW, "menu_body")
        .with(MENU_BACKGROUND_COLOR, "#12345");
    assert_eq!(
        SlideUpMenu::from_attributes(&attrs, &mut Layouts, Density::default()).err(),
        Some(SlideUpMenuError::InvalidColor {
            attribute: MENU_BACKGROUND_COLOR,
            value: "#12345".to_string(),
        })
    );
}
