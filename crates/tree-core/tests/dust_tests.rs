use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tree_core::dust::{attraction, drift};
use tree_core::DustField;

#[test]
fn generated_inside_cube() {
    let mut rng = StdRng::seed_from_u64(30);
    let dust = DustField::generate(300, &mut rng);
    assert_eq!(dust.len(), 300);
    for p in dust.positions() {
        assert!(p.abs().max_element() <= 15.0);
    }
}

#[test]
fn drift_has_downward_bias_and_no_depth() {
    let mut sum = 0.0;
    for i in 0..200 {
        let d = drift(i as f32 * 0.1, i as f32);
        assert_eq!(d.z, 0.0);
        assert!(d.x.abs() <= 0.02 + 1e-6);
        sum += d.y;
    }
    assert!(sum / 200.0 < 0.0);
}

#[test]
fn attraction_falls_off_and_cuts_out() {
    let target = Vec3::ZERO;
    assert_eq!(attraction(Vec3::new(8.0, 0.0, 0.0), target), Vec3::ZERO);
    assert_eq!(attraction(Vec3::new(12.0, 0.0, 0.0), target), Vec3::ZERO);
    let near = attraction(Vec3::new(1.0, 0.0, 0.0), target);
    let far = attraction(Vec3::new(6.0, 0.0, 0.0), target);
    assert!(near.x < 0.0 && far.x < 0.0);
    assert!(near.length() > far.length());
    assert!((near.length() - 0.2 * 0.9).abs() < 1e-5);
    // coincident point has no direction
    assert_eq!(attraction(target, target), Vec3::ZERO);
}

#[test]
fn motes_below_floor_respawn_on_top() {
    let mut dust = DustField::from_positions(vec![Vec3::new(0.0, -10.5, 0.0); 4]);
    dust.tick(0.0, None);
    assert_eq!(dust.len(), 4);
    for p in dust.positions() {
        assert_eq!(p.y, 15.0);
    }
    let untouched = Vec3::new(0.0, 3.0, 0.0);
    let mut dust = DustField::from_positions(vec![untouched]);
    dust.tick(0.0, None);
    assert!(dust.positions()[0].y < 4.0);
}

#[test]
fn pointer_pulls_nearby_motes() {
    let start = Vec3::new(2.0, 0.0, 5.0);
    let mut free = DustField::from_positions(vec![start]);
    let mut pulled = DustField::from_positions(vec![start]);
    let target = Vec3::new(0.0, 0.0, 5.0);
    free.tick(1.0, None);
    pulled.tick(1.0, Some(target));
    let d_free = free.positions()[0].distance(target);
    let d_pulled = pulled.positions()[0].distance(target);
    assert!(d_pulled < d_free);
}
