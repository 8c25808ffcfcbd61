use tree_core::{Morph, TreeState};

#[test]
fn starts_formed() {
    let m = Morph::new();
    assert_eq!(m.progress(), 1.0);
    assert!(m.is_settled(TreeState::Formed));
    assert_eq!(TreeState::default(), TreeState::Formed);
}

#[test]
fn rate_is_step_scale_times_speed() {
    assert!((Morph::new().rate() - 1.6).abs() < 1e-6);
}

#[test]
fn converges_to_formed_exactly_without_overshoot() {
    let mut m = Morph::with_progress(0.0);
    let mut ticks = 0;
    while m.progress() != 1.0 {
        let p = m.tick(TreeState::Formed, 0.016);
        assert!(p <= 1.0);
        ticks += 1;
        assert!(ticks < 1_000, "did not converge");
    }
    assert!(m.is_settled(TreeState::Formed));
}

#[test]
fn shatter_reaches_zero_within_five_hundred_ticks() {
    let mut m = Morph::new();
    for _ in 0..500 {
        let p = m.tick(TreeState::Chaos, 0.016);
        assert!((0.0..=1.0).contains(&p));
    }
    assert_eq!(m.progress(), 0.0);
}

#[test]
fn reversal_mid_transition_heads_back() {
    let mut m = Morph::new();
    for _ in 0..30 {
        m.tick(TreeState::Chaos, 0.016);
    }
    let mid = m.progress();
    assert!(mid > 0.0 && mid < 1.0);
    let next = m.tick(TreeState::Formed, 0.016);
    assert!(next > mid);
}

#[test]
fn large_step_clamps_to_bounds() {
    let mut m = Morph::with_progress(0.3);
    assert_eq!(m.tick(TreeState::Formed, 5.0), 1.0);
    let mut m = Morph::new();
    assert_eq!(m.tick(TreeState::Chaos, 5.0), 0.0);
}

#[test]
fn bad_delta_time_does_not_move_progress() {
    let mut m = Morph::with_progress(0.5);
    assert_eq!(m.tick(TreeState::Formed, f32::NAN), 0.5);
    assert_eq!(m.tick(TreeState::Formed, -1.0), 0.5);
    assert_eq!(m.tick(TreeState::Formed, 0.0), 0.5);
}

#[test]
fn snaps_inside_epsilon() {
    let mut m = Morph::with_progress(0.9995);
    assert_eq!(m.tick(TreeState::Formed, 0.0), 1.0);
}

#[test]
fn labels_describe_the_next_action() {
    assert_eq!(TreeState::Formed.button_label(), "SHATTER");
    assert_eq!(TreeState::Chaos.button_label(), "ASSEMBLE");
    assert_eq!(TreeState::Formed.status_label(), "Formed Mode Active");
    assert_eq!(TreeState::Chaos.status_label(), "Chaos Mode Active");
    assert_eq!(TreeState::Chaos.toggled(), TreeState::Formed);
}
