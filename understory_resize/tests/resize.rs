// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `understory_resize` crate.
//!
//! These drive a [`ResizeController`] through whole drag gestures the way a
//! host would: start on a handle, then dispatch document-level move and end
//! events through a [`ListenerRegistry`].

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::{Point, Size};
use understory_resize::{
    EventType, Geometry, Handle, InlineStyle, ListenerRegistry, PointerEvent, ResizeConfig,
    ResizeController, ResizeError,
};

type Controller = ResizeController<ListenerRegistry, InlineStyle>;

fn controller(width: f64, height: f64) -> Controller {
    let geometry = Geometry::new(width / height, width, height).unwrap();
    ResizeController::new(
        geometry,
        Point::ZERO,
        ListenerRegistry::new(),
        InlineStyle::new(),
    )
}

fn mouse(x: f64, y: f64) -> PointerEvent {
    PointerEvent::mouse(Point::new(x, y))
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn record(c: &mut Controller) -> Rc<RefCell<Vec<Size>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = log.clone();
    c.subscribe(move |size| sink.borrow_mut().push(size));
    log
}

/// Run a full gesture on `handle`: start at `from`, move through `path`, end.
fn drag(c: &mut Controller, handle: Handle, from: Point, path: &[Point]) {
    c.start(handle, &mut PointerEvent::mouse(from)).unwrap();
    for &p in path {
        c.dispatch(EventType::MouseMove, &mut PointerEvent::mouse(p))
            .unwrap();
    }
    let end = path.last().copied().unwrap_or(from);
    c.dispatch(EventType::MouseUp, &mut PointerEvent::mouse(end))
        .unwrap();
}

#[test]
fn right_drag_width_is_initial_plus_sum_of_deltas() {
    let mut c = controller(200.0, 100.0);
    let xs = [10.0, 25.0, 18.0, 40.0, 39.5];
    let path: Vec<_> = xs.iter().map(|&x| Point::new(x, 7.0)).collect();

    drag(&mut c, Handle::Right, Point::new(0.0, 0.0), &path);

    let mut previous = 0.0;
    let mut expected = 200.0;
    for x in xs {
        expected += x - previous;
        previous = x;
    }
    let g = c.geometry();
    assert!(approx(g.width(), expected), "width {}", g.width());
    assert_eq!(g.height(), 100.0);
    assert!(approx(g.aspect_ratio(), g.width() / g.height()));
}

#[test]
fn bottom_corner_example() {
    let mut c = controller(200.0, 100.0);
    let log = record(&mut c);

    c.start_bottom_corner(&mut mouse(0.0, 100.0)).unwrap();
    c.dispatch(EventType::MouseMove, &mut mouse(0.0, 150.0))
        .unwrap();

    assert_eq!(c.geometry().size(), Size::new(300.0, 150.0));
    assert_eq!(log.borrow().last(), Some(&Size::new(300.0, 150.0)));
}

#[test]
fn left_drag_example() {
    let mut c = controller(200.0, 100.0);

    c.start_left(&mut mouse(100.0, 0.0)).unwrap();
    c.dispatch(EventType::MouseMove, &mut mouse(80.0, 0.0))
        .unwrap();

    let g = c.geometry();
    assert_eq!(g.width(), 220.0);
    assert_eq!(g.height(), 100.0);
    assert!(approx(g.aspect_ratio(), 2.2));
}

#[test]
fn corner_drags_never_change_the_ratio() {
    let mut c = controller(200.0, 100.0);
    // An edge drag first, so the locked ratio is not the initial one.
    drag(&mut c, Handle::Right, Point::ZERO, &[Point::new(40.0, 0.0)]);
    let locked = c.geometry().aspect_ratio();
    assert!(approx(locked, 2.4));

    for handle in [Handle::TopCorner, Handle::BottomCorner] {
        c.start(handle, &mut mouse(0.0, 200.0)).unwrap();
        for y in [190.0, 230.0, 205.0, 260.0, 150.0] {
            c.dispatch(EventType::MouseMove, &mut mouse(0.0, y))
                .unwrap();
            let g = c.geometry();
            assert!(
                approx(g.width(), g.height() * locked),
                "{handle:?}: {}x{}",
                g.width(),
                g.height()
            );
            assert_eq!(g.aspect_ratio(), locked);
        }
        c.dispatch(EventType::MouseUp, &mut mouse(0.0, 150.0))
            .unwrap();
    }
}

#[test]
fn end_without_start_changes_nothing() {
    let mut c = controller(200.0, 100.0);
    let log = record(&mut c);

    for handle in Handle::ALL {
        c.handle(c.listeners(handle).drag_end, &mut mouse(5.0, 5.0))
            .unwrap();
    }
    assert_eq!(
        c.dispatch(EventType::TouchEnd, &mut PointerEvent::touch([], []))
            .unwrap(),
        0
    );

    assert_eq!(c.geometry().size(), Size::new(200.0, 100.0));
    assert_eq!(c.dimensions().revision(), 0);
    assert_eq!(log.borrow().len(), 1, "only the subscription replay");
}

#[test]
fn move_after_end_is_not_delivered() {
    let mut c = controller(200.0, 100.0);

    c.start_top(&mut mouse(0.0, 50.0)).unwrap();
    c.dispatch(EventType::MouseUp, &mut mouse(0.0, 50.0))
        .unwrap();

    let invoked = c
        .dispatch(EventType::MouseMove, &mut mouse(0.0, 0.0))
        .unwrap();
    assert_eq!(invoked, 0);
    assert_eq!(c.geometry().size(), Size::new(200.0, 100.0));

    // Even a host that calls the stale listener directly sees no change.
    let stale = c.listeners(Handle::Top).drag_move;
    c.handle(stale, &mut mouse(0.0, -100.0)).unwrap();
    assert_eq!(c.geometry().size(), Size::new(200.0, 100.0));
}

#[test]
fn edge_drags_on_disjoint_axes_commute() {
    let top = |c: &mut Controller| {
        drag(
            c,
            Handle::Top,
            Point::new(0.0, 100.0),
            &[Point::new(0.0, 80.0), Point::new(0.0, 70.0)],
        );
    };
    let right = |c: &mut Controller| {
        drag(
            c,
            Handle::Right,
            Point::new(10.0, 0.0),
            &[Point::new(50.0, 0.0), Point::new(35.0, 0.0)],
        );
    };

    let mut a = controller(200.0, 100.0);
    top(&mut a);
    right(&mut a);

    let mut b = controller(200.0, 100.0);
    right(&mut b);
    top(&mut b);

    // Interleaved: both sessions active at once.
    let mut c = controller(200.0, 100.0);
    c.start_top(&mut mouse(0.0, 100.0)).unwrap();
    c.start_right(&mut mouse(10.0, 100.0)).unwrap();
    c.dispatch(EventType::MouseMove, &mut mouse(50.0, 80.0))
        .unwrap();
    c.dispatch(EventType::MouseMove, &mut mouse(35.0, 70.0))
        .unwrap();
    c.dispatch(EventType::MouseUp, &mut mouse(35.0, 70.0))
        .unwrap();

    assert_eq!(a.geometry().size(), Size::new(225.0, 130.0));
    assert_eq!(a.geometry().size(), b.geometry().size());
    assert_eq!(a.geometry().size(), c.geometry().size());
    assert!(approx(a.geometry().aspect_ratio(), b.geometry().aspect_ratio()));
}

#[test]
fn touch_gesture_uses_primary_contact() {
    let mut c = controller(200.0, 100.0);

    let mut start = PointerEvent::touch([Point::new(0.0, 100.0), Point::new(400.0, 0.0)], []);
    c.start_bottom(&mut start).unwrap();
    assert!(start.default_prevented());

    let mut touch_move =
        PointerEvent::touch([Point::new(0.0, 130.0), Point::new(400.0, 900.0)], []);
    assert_eq!(c.dispatch(EventType::TouchMove, &mut touch_move).unwrap(), 1);
    assert_eq!(c.geometry().height(), 130.0);

    // Touch-end has no active touches; the changed touch is used.
    let mut touch_end = PointerEvent::touch([], [Point::new(0.0, 130.0)]);
    c.dispatch(EventType::TouchEnd, &mut touch_end).unwrap();
    assert!(!c.is_dragging(Handle::Bottom));
}

#[test]
fn style_tracks_published_size() {
    let mut c = controller(200.0, 100.0);
    c.start_top_corner(&mut mouse(0.0, 100.0)).unwrap();
    c.dispatch(EventType::MouseMove, &mut mouse(0.0, 75.0))
        .unwrap();

    assert_eq!(c.style().css_height().as_deref(), Some("125px"));
    assert_eq!(c.style().css_width().as_deref(), Some("250px"));
    assert_eq!(c.dimensions().latest(), Size::new(250.0, 125.0));
}

#[test]
fn controllers_do_not_share_dimensions() {
    let mut a = controller(200.0, 100.0);
    let mut b = controller(50.0, 50.0);
    let log_b = record(&mut b);

    drag(&mut a, Handle::Bottom, Point::ZERO, &[Point::new(0.0, 10.0)]);

    assert_eq!(a.dimensions().latest(), Size::new(200.0, 110.0));
    assert_eq!(b.dimensions().latest(), Size::new(50.0, 50.0));
    assert_eq!(*log_b.borrow(), vec![Size::new(50.0, 50.0)]);
}

#[test]
fn drags_repeat_indefinitely() {
    let mut c = controller(200.0, 100.0);
    for _ in 0..10 {
        drag(&mut c, Handle::Bottom, Point::ZERO, &[Point::new(0.0, 1.0)]);
    }
    assert_eq!(c.geometry().height(), 110.0);
    // Ends never detach the end listeners; dedup keeps one of each.
    assert_eq!(c.source().len(), 2);
}

#[test]
fn nan_coordinate_is_rejected_and_drag_recovers() {
    let geometry = Geometry::new(2.0, 200.0, 100.0).unwrap();
    let mut c = ResizeController::with_config(
        geometry,
        Point::ZERO,
        ListenerRegistry::new(),
        InlineStyle::new(),
        ResizeConfig::default().with_min_size(10.0),
    );
    let log = record(&mut c);

    c.start_bottom(&mut mouse(0.0, 100.0)).unwrap();
    let err = c
        .dispatch(EventType::MouseMove, &mut mouse(0.0, f64::NAN))
        .unwrap_err();
    assert!(matches!(err, ResizeError::DegenerateGeometry(_)));
    assert_eq!(c.geometry().size(), Size::new(200.0, 100.0));
    assert_eq!(c.cursor().y, 100.0, "non-finite coordinate must not be stored");

    // The next finite move is measured from the last good position.
    c.dispatch(EventType::MouseMove, &mut mouse(0.0, 101.0))
        .unwrap();
    assert_eq!(c.geometry().size(), Size::new(200.0, 101.0));
    assert_eq!(
        *log.borrow(),
        vec![Size::new(200.0, 100.0), Size::new(200.0, 101.0)]
    );
}

#[test]
fn completed_drags_can_release_their_end_listeners() {
    let mut c = controller(200.0, 100.0);
    for handle in Handle::ALL {
        drag(&mut c, handle, Point::new(0.0, 100.0), &[Point::new(1.0, 101.0)]);
    }
    assert_eq!(c.source().len(), 2 * Handle::ALL.len());
    assert_eq!(c.cancel_all(), 0, "nothing is dragging");

    assert_eq!(c.release_end_listeners(), Handle::ALL.len());
    assert!(c.source().is_empty());
}
