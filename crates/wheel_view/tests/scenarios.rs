//! End-to-end wheel behavior driven through pointer events and frame ticks

use std::sync::{Arc, Mutex};

use wheel_platform::{MonospaceTextMeasurer, PointerEvent, RecordingHost};
use wheel_view::{WheelConfig, WheelSnapshot, WheelState, WheelView};

const FRAME: f32 = 1.0 / 60.0;

/// A wheel with one-letter labels 50px apart in a 300px viewport, resting
/// on index 0 with listeners attached
struct Harness {
    wheel: WheelView,
    host: Arc<RecordingHost>,
    changed: Arc<Mutex<Vec<i32>>>,
    selected: Arc<Mutex<Vec<i32>>>,
    time_ms: u64,
}

impl Harness {
    fn new(count: usize) -> Self {
        let host = Arc::new(RecordingHost::new());
        let config = WheelConfig {
            spacing_factor: 1.0,
            ..Default::default()
        };
        let mut wheel = WheelView::new(
            config,
            Arc::new(MonospaceTextMeasurer::new(50.0)),
            host.clone(),
        );
        wheel.set_items((0..count).map(|i| ((b'A' + i as u8) as char).to_string()));
        wheel.set_viewport_size(300.0, 60.0);
        wheel.tick(FRAME);

        let changed = Arc::new(Mutex::new(Vec::new()));
        let selected = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&changed);
        wheel.on_changed(move |index| sink.lock().unwrap().push(index));
        let sink = Arc::clone(&selected);
        wheel.on_selected(move |index| sink.lock().unwrap().push(index));

        Self {
            wheel,
            host,
            changed,
            selected,
            time_ms: 1_000,
        }
    }

    /// Jump to `index` and forget the notifications it caused
    fn rest_on(&mut self, index: i32) {
        self.wheel.select_index(index);
        self.wheel.tick(FRAME);
        self.clear();
    }

    fn clear(&self) {
        self.changed.lock().unwrap().clear();
        self.selected.lock().unwrap().clear();
        self.host.reset();
    }

    fn changed(&self) -> Vec<i32> {
        self.changed.lock().unwrap().clone()
    }

    fn selected(&self) -> Vec<i32> {
        self.selected.lock().unwrap().clone()
    }

    fn down(&mut self, x: f32) {
        self.time_ms += 10;
        self.wheel.on_pointer_event(&PointerEvent::down(x, self.time_ms));
    }

    fn move_to(&mut self, x: f32) {
        self.time_ms += 10;
        self.wheel.on_pointer_event(&PointerEvent::moved(x, self.time_ms));
    }

    /// Lift together with the last move, keeping its velocity
    fn fling_up(&mut self, x: f32) {
        self.wheel.on_pointer_event(&PointerEvent::up(x, self.time_ms));
    }

    /// Lift after holding still
    fn release(&mut self, x: f32) {
        self.time_ms += 500;
        self.wheel.on_pointer_event(&PointerEvent::up(x, self.time_ms));
    }

    fn run(&mut self) {
        for _ in 0..600 {
            if !self.wheel.tick(FRAME) {
                return;
            }
        }
        panic!("wheel did not come to rest");
    }

    fn assert_in_bounds(&self) {
        let index = self.wheel.selected_index();
        assert!(
            self.wheel.min_selectable_index() <= index
                && index <= self.wheel.max_selectable_index(),
            "selected {} outside ({}, {})",
            index,
            self.wheel.min_selectable_index(),
            self.wheel.max_selectable_index()
        );
    }

    fn assert_at_rest_on_selection(&self) {
        assert_eq!(
            self.wheel.offset(),
            self.wheel.offset_for_index(self.wheel.selected_index())
        );
        assert_eq!(self.wheel.state(), WheelState::Idle);
    }
}

#[test]
fn test_selection_stays_in_bounds() {
    let mut h = Harness::new(10);
    h.wheel.set_min_selectable_index(2);
    h.assert_in_bounds();
    h.wheel.set_max_selectable_index(6);
    h.assert_in_bounds();
    h.wheel.select_index(9);
    h.assert_in_bounds();
    h.wheel.smooth_select_index(0);
    h.assert_in_bounds();
    h.run();
    h.assert_in_bounds();

    // drag far past the lower bound
    h.down(100.0);
    for x in [200.0, 300.0, 400.0, 600.0] {
        h.move_to(x);
        h.assert_in_bounds();
    }
    h.release(600.0);
    h.run();
    h.assert_in_bounds();

    h.wheel.set_items(["A", "B", "C", "D", "E"]);
    h.assert_in_bounds();
    h.wheel.restore(WheelSnapshot {
        index: 40,
        min: -3,
        max: 100,
    });
    h.assert_in_bounds();
    assert_eq!(h.wheel.selected_index(), 4);
}

#[test]
fn test_index_offset_round_trip() {
    for (width, count) in [(300.0, 10), (301.0, 26), (17.0, 3)] {
        let mut h = Harness::new(count);
        h.wheel.set_viewport_size(width, 60.0);
        for i in 0..count as i32 {
            let offset = h.wheel.offset_for_index(i);
            assert_eq!(h.wheel.index_from_offset(offset), i);
        }
    }
}

#[test]
fn test_drag_release_settles_exactly() {
    let mut h = Harness::new(10);
    h.rest_on(1);

    h.down(150.0);
    h.move_to(120.0);
    assert_eq!(h.wheel.offset(), -70.0);
    assert_eq!(h.wheel.selected_index(), 2);

    h.release(120.0);
    assert_eq!(h.wheel.state(), WheelState::Settling);
    h.run();

    h.assert_at_rest_on_selection();
    assert_eq!(h.wheel.selected_index(), 2);
    assert_eq!(h.selected(), vec![2]);
    assert!(h.host.redraws() > 0);
}

#[test]
fn test_changed_per_crossing_selected_once() {
    let mut h = Harness::new(10);
    h.rest_on(3);

    h.down(150.0);
    for x in [140.0, 120.0, 70.0, 120.0, 150.0] {
        h.move_to(x);
    }
    assert_eq!(h.changed(), vec![4, 5, 4, 3]);

    // back on the committed index: nothing new to report
    h.release(150.0);
    h.run();
    assert!(h.selected().is_empty());
    h.assert_at_rest_on_selection();

    // the same drag ending on 4 reports it once
    h.clear();
    h.down(150.0);
    for x in [140.0, 120.0, 70.0, 120.0] {
        h.move_to(x);
    }
    h.release(120.0);
    h.run();
    assert_eq!(h.changed(), vec![4, 5, 4]);
    assert_eq!(h.selected(), vec![4]);
}

#[test]
fn test_drag_stops_one_slack_past_the_end() {
    let mut h = Harness::new(5);
    h.rest_on(4);
    assert_eq!(h.wheel.offset(), 50.0);

    h.down(200.0);
    // inside the legal range: full speed
    h.move_to(100.0);
    assert_eq!(h.wheel.offset(), 150.0);
    // within one slack (150px) past the end: quarter speed
    h.move_to(0.0);
    assert_eq!(h.wheel.offset(), 175.0);
    h.move_to(-200.0);
    assert_eq!(h.wheel.offset(), 225.0);
    // more than one slack past the end: stuck
    h.move_to(-300.0);
    assert_eq!(h.wheel.offset(), 225.0);
    h.move_to(-600.0);
    assert_eq!(h.wheel.offset(), 225.0);
    assert_eq!(h.wheel.selected_index(), 4);

    h.release(-600.0);
    h.run();
    assert_eq!(h.wheel.offset(), 50.0);
    assert!(h.changed().is_empty());
}

#[test]
fn test_select_index_basic() {
    let mut h = Harness::new(5);
    h.wheel.set_min_selectable_index(0);
    h.wheel.set_max_selectable_index(4);

    h.wheel.select_index(2);
    assert!(!h.wheel.tick(FRAME));
    assert_eq!(h.wheel.selected_index(), 2);
    assert_eq!(h.selected(), vec![2]);

    h.wheel.tick(FRAME);
    h.wheel.tick(FRAME);
    assert_eq!(h.selected(), vec![2]);
    h.assert_at_rest_on_selection();
}

#[test]
fn test_shrinking_bounds_recenters() {
    let mut h = Harness::new(5);
    h.rest_on(4);

    h.wheel.set_max_selectable_index(2);
    assert_eq!(h.wheel.selected_index(), 2);
    assert!(h.host.redraws() > 0);

    h.wheel.tick(FRAME);
    h.assert_at_rest_on_selection();
    assert_eq!(h.wheel.offset(), -50.0);
    assert_eq!(h.selected(), vec![2]);
}

#[test]
fn test_tap_selects_and_settles() {
    let mut h = Harness::new(5);
    assert_eq!(h.wheel.offset(), -150.0);

    // 75px right of the cursor
    h.down(225.0);
    h.time_ms += 50;
    let up = PointerEvent::up(225.0, h.time_ms);
    assert!(h.wheel.on_pointer_event(&up));

    assert_eq!(h.wheel.selected_index(), 2);
    assert_eq!(h.changed(), vec![2]);
    assert_eq!(h.host.clicks(), 1);
    assert_eq!(h.wheel.state(), WheelState::Settling);

    h.run();
    assert_eq!(h.wheel.offset(), h.wheel.offset_for_index(2));
    assert_eq!(h.selected(), vec![2]);
}

#[test]
fn test_fling_outside_bounds_settles_instead() {
    let mut h = Harness::new(5);
    h.rest_on(4);

    h.down(200.0);
    for x in [180.0, 160.0, 140.0, 120.0, 100.0] {
        h.move_to(x);
    }
    // 20px full speed, then quarter speed past the end
    assert_eq!(h.wheel.offset(), 90.0);

    h.fling_up(100.0);
    assert_eq!(h.wheel.state(), WheelState::Settling);
    assert!(h.wheel.is_animating());

    h.run();
    assert_eq!(h.wheel.offset(), 50.0);
    assert_eq!(h.wheel.selected_index(), 4);
}

#[test]
fn test_fling_coasts_and_lands_on_a_mark() {
    let mut h = Harness::new(10);
    h.rest_on(2);

    h.down(200.0);
    for x in [180.0, 160.0, 140.0, 120.0, 100.0] {
        h.move_to(x);
    }
    assert_eq!(h.wheel.selected_index(), 4);

    h.fling_up(100.0);
    assert_eq!(h.wheel.state(), WheelState::Flinging);

    h.run();
    h.assert_at_rest_on_selection();
    let index = h.wheel.selected_index();
    assert!(index > 4 && index <= 9, "landed on {index}");
    assert_eq!(h.selected(), vec![index]);
    assert!(h.wheel.offset() <= h.wheel.offset_for_index(9));
}

#[test]
fn test_fling_stops_at_selectable_end() {
    let mut h = Harness::new(20);
    h.wheel.set_max_selectable_index(6);
    h.rest_on(2);
    let end = h.wheel.offset_for_index(6);

    h.down(200.0);
    for x in [180.0, 160.0, 140.0, 120.0, 100.0] {
        h.move_to(x);
    }
    assert_eq!(h.wheel.offset(), 50.0);

    h.fling_up(100.0);
    assert_eq!(h.wheel.state(), WheelState::Flinging);

    for _ in 0..600 {
        assert!(h.wheel.offset() <= end, "passed the end at {}", h.wheel.offset());
        if !h.wheel.tick(FRAME) {
            break;
        }
    }
    assert_eq!(h.wheel.selected_index(), 6);
    assert_eq!(h.wheel.offset(), end);
    h.assert_at_rest_on_selection();
    assert_eq!(h.selected(), vec![6]);
}

#[test]
fn test_second_pointer_and_cancel() {
    let mut h = Harness::new(10);
    h.rest_on(3);

    h.down(150.0);
    h.move_to(120.0);
    let other = PointerEvent::Moved {
        id: 7,
        x: 0.0,
        y: 0.0,
        time_ms: h.time_ms + 5,
    };
    h.wheel.on_pointer_event(&other);
    assert_eq!(h.wheel.offset(), 30.0);

    h.wheel.on_pointer_event(&PointerEvent::Cancelled { id: 0 });
    assert_eq!(h.wheel.state(), WheelState::Settling);
    h.run();
    assert_eq!(h.wheel.selected_index(), 4);
    h.assert_at_rest_on_selection();
}

#[test]
fn test_touch_interrupts_settle() {
    let mut h = Harness::new(10);
    h.wheel.smooth_select_index(9);
    for _ in 0..5 {
        h.wheel.tick(FRAME);
    }
    let offset = h.wheel.offset();

    h.down(150.0);
    assert_eq!(h.wheel.state(), WheelState::Dragging);
    assert!(!h.wheel.tick(FRAME));
    assert_eq!(h.wheel.offset(), offset);

    h.release(150.0);
    h.run();
    h.assert_at_rest_on_selection();
    assert_eq!(h.selected().len(), 1);
}
