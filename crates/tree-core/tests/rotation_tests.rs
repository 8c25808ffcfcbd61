use tree_core::DragRotation;

#[test]
fn idle_spin_when_untouched() {
    let mut r = DragRotation::new();
    for _ in 0..100 {
        r.tick();
    }
    assert!((r.angle() - 0.05).abs() < 1e-5);
}

#[test]
fn drag_builds_velocity_from_horizontal_motion() {
    let mut r = DragRotation::new();
    r.drag_start(100.0);
    r.drag_move(120.0);
    assert!((r.angular_velocity() - 0.1).abs() < 1e-6);
    r.drag_move(110.0);
    assert!((r.angular_velocity() - 0.05).abs() < 1e-6);
}

#[test]
fn moves_without_drag_are_ignored() {
    let mut r = DragRotation::new();
    r.drag_move(500.0);
    assert_eq!(r.angular_velocity(), 0.0);
    assert!(!r.is_dragging());
}

#[test]
fn momentum_survives_release_and_decays() {
    let mut r = DragRotation::new();
    r.drag_start(0.0);
    r.drag_move(100.0);
    r.drag_end();
    let angle0 = r.angle();
    r.tick();
    assert!((r.angle() - angle0 - 0.5).abs() < 1e-6);
    assert!((r.angular_velocity() - 0.475).abs() < 1e-6);
    for _ in 0..500 {
        r.tick();
    }
    assert!(r.angular_velocity().abs() < 1e-3);
}

#[test]
fn no_idle_spin_while_dragging() {
    let mut r = DragRotation::new();
    r.drag_start(10.0);
    for _ in 0..10 {
        r.tick();
    }
    assert_eq!(r.angle(), 0.0);
    assert!(r.is_dragging());
}
