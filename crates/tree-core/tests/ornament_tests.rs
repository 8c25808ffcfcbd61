use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tree_core::shape::cone_radius_at;
use tree_core::{generate_ornaments, OrnamentKind, OrnamentLayer, TreeParams};
use tree_core::{DARK_RED, GOLD, SILVER, WHITE};

fn ornaments(seed: u64) -> (TreeParams, Vec<tree_core::Ornament>) {
    let params = TreeParams::default();
    let mut rng = StdRng::seed_from_u64(seed);
    let o = generate_ornaments(&params, &mut rng);
    (params, o)
}

fn cone_height(params: &TreeParams, y: f32) -> f32 {
    y + params.tree_height / 2.0 - params.vertical_offset
}

#[test]
fn quotas_and_ids() {
    let (params, o) = ornaments(11);
    assert_eq!(o.len(), 270);
    for (i, orn) in o.iter().enumerate() {
        assert_eq!(orn.id as usize, i);
    }
    for orn in &o[params.ornament_base_count..] {
        assert_eq!(orn.kind, OrnamentKind::Ball);
    }
}

#[test]
fn bottom_quota_lives_in_lowest_band() {
    let (params, o) = ornaments(12);
    let band = params.tree_height * params.ornament_bottom_fraction;
    for orn in &o[params.ornament_base_count..] {
        let y = cone_height(&params, orn.target.y);
        assert!(y >= -1e-4 && y <= band + 1e-4, "bottom ornament at {y}");
    }
}

#[test]
fn targets_sit_on_cone_surface() {
    let (params, o) = ornaments(13);
    for orn in &o {
        let y = cone_height(&params, orn.target.y);
        let radial = (orn.target.x * orn.target.x + orn.target.z * orn.target.z).sqrt();
        let r = cone_radius_at(y, params.tree_height, params.max_radius);
        assert!((radial - r).abs() < 1e-3, "radial {radial} vs {r}");
    }
}

#[test]
fn chaos_in_cube() {
    let (_, o) = ornaments(14);
    for orn in &o {
        assert!(orn.chaos.abs().max_element() <= 20.0);
    }
}

#[test]
fn category_attributes_follow_kind() {
    let (_, o) = ornaments(15);
    for orn in &o {
        assert_eq!(orn.scale, orn.kind.scale());
        assert_eq!(orn.lerp_speed, orn.kind.lerp_speed());
        assert!(orn.kind.palette().contains(&orn.color));
        assert!(orn.rotation.x >= 0.0 && orn.rotation.x <= std::f32::consts::PI);
        assert_eq!(orn.rotation.z, 0.0);
    }
    assert_eq!(OrnamentKind::Gift.palette(), &[DARK_RED, GOLD]);
    assert_eq!(OrnamentKind::Ball.palette(), &[SILVER, GOLD]);
    assert_eq!(OrnamentKind::Light.palette(), &[WHITE]);
    // heavier ornaments converge slower
    assert!(OrnamentKind::Gift.lerp_speed() < OrnamentKind::Ball.lerp_speed());
    assert!(OrnamentKind::Ball.lerp_speed() < OrnamentKind::Light.lerp_speed());
}

#[test]
fn base_quota_is_mostly_gifts() {
    let params = TreeParams {
        ornament_base_count: 4_000,
        ornament_bottom_count: 0,
        ..TreeParams::default()
    };
    let mut rng = StdRng::seed_from_u64(16);
    let o = generate_ornaments(&params, &mut rng);
    let gifts = o.iter().filter(|x| x.kind == OrnamentKind::Gift).count() as f32;
    let share = gifts / o.len() as f32;
    assert!((share - 0.7).abs() < 0.05, "gift share {share}");
}

#[test]
fn linear_blend_midpoint() {
    let (_, o) = ornaments(17);
    let orn = &o[3];
    let mid = orn.position_at(0.5, 2.0);
    let expected = (orn.chaos + orn.target) * 0.5;
    assert!(mid.distance(expected) < 1e-4);
    assert_eq!(orn.position_at(1.0, 2.0), orn.target);
}

#[test]
fn hover_only_when_scattered() {
    let (_, o) = ornaments(18);
    let orn = &o[1];
    let a = orn.position_at(0.05, 0.0);
    let b = orn.position_at(0.05, 1.0);
    assert_eq!(a.x, b.x);
    assert!((a.y - b.y).abs() <= 0.04 + 1e-6);
    assert_eq!(orn.position_at(0.5, 0.0), orn.position_at(0.5, 1.0));
}

#[test]
fn gifts_spin_others_hold() {
    let (_, o) = ornaments(19);
    let mut layer = OrnamentLayer::new(o);
    let before: Vec<Vec3> = layer.poses().iter().map(|p| p.rotation).collect();
    for _ in 0..10 {
        layer.update(1.0, 0.0);
    }
    for (orn, pose) in layer.ornaments().iter().zip(layer.poses()) {
        let r0 = before[orn.id as usize];
        if orn.kind == OrnamentKind::Gift {
            assert!((pose.rotation.x - r0.x - 0.1).abs() < 1e-4);
            assert!((pose.rotation.y - r0.y - 0.1).abs() < 1e-4);
            assert_eq!(pose.rotation.z, r0.z);
        } else {
            assert_eq!(pose.rotation, r0);
        }
        assert_eq!(pose.position, orn.target);
    }
}

#[test]
fn layer_lookup_by_id() {
    let (_, o) = ornaments(20);
    let layer = OrnamentLayer::new(o);
    let (orn, pose) = layer.get(42).expect("ornament 42");
    assert_eq!(orn.id, 42);
    assert_eq!(pose.id, 42);
    assert!(layer.get(10_000).is_none());
}

#[test]
fn zero_quotas_produce_nothing() {
    let params = TreeParams {
        ornament_base_count: 0,
        ornament_bottom_count: 0,
        ..TreeParams::default()
    };
    let mut rng = StdRng::seed_from_u64(21);
    let layer = OrnamentLayer::new(generate_ornaments(&params, &mut rng));
    assert!(layer.is_empty());
}
