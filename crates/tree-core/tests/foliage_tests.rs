use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tree_core::easing::{ease_out_cubic, effective_progress, foliage_position, sway_offset};
use tree_core::shape::cone_radius_at;
use tree_core::{FoliageField, TreeParams, SWAY_AMPLITUDE};

fn field(count: usize, seed: u64) -> (TreeParams, FoliageField) {
    let params = TreeParams::default();
    let mut rng = StdRng::seed_from_u64(seed);
    let f = FoliageField::generate(count, &params, &mut rng);
    (params, f)
}

#[test]
fn chaos_positions_stay_inside_shell() {
    let (params, f) = field(2_000, 1);
    let lo = params.chaos_base_radius - 1e-3;
    let hi = params.chaos_base_radius + params.chaos_spread + 1e-3;
    for c in f.chaos_positions() {
        let r = c.length();
        assert!(r >= lo && r <= hi, "chaos radius {r} outside [{lo}, {hi}]");
    }
}

#[test]
fn target_positions_stay_inside_cone() {
    let (params, f) = field(2_000, 2);
    for t in f.target_positions() {
        // undo the recentre to get cone-space height
        let y = t.y + params.tree_height / 2.0 - params.vertical_offset;
        assert!(y >= -1e-4 && y <= params.tree_height + 1e-4, "height {y}");
        let radial = (t.x * t.x + t.z * t.z).sqrt();
        let limit = cone_radius_at(y, params.tree_height, params.max_radius);
        assert!(radial <= limit + 1e-4, "radial {radial} > {limit} at y={y}");
    }
}

#[test]
fn stock_tree_fits_expected_bounds() {
    let (_, f) = field(15_000, 3);
    assert_eq!(f.len(), 15_000);
    for t in f.target_positions() {
        assert!(t.y >= -4.0 - 1e-4 && t.y <= 8.0 + 1e-4, "y={}", t.y);
        assert!((t.x * t.x + t.z * t.z).sqrt() <= 4.0 + 1e-4);
    }
    for r in f.random_factors() {
        assert!((0.0..1.0).contains(r));
    }
}

#[test]
fn empty_field_is_valid() {
    let (_, f) = field(0, 4);
    assert!(f.is_empty());
    assert!(f.instances().is_empty());
    assert_eq!(f.position_at(0, 0.5, 1.0), None);
    let mut out = vec![Vec3::ONE];
    f.positions_into(0.5, 1.0, &mut out);
    assert!(out.is_empty());
}

#[test]
fn position_function_is_pure() {
    let (_, f) = field(64, 5);
    for i in 0..f.len() {
        let a = f.position_at(i, 0.63, 4.2);
        let b = f.position_at(i, 0.63, 4.2);
        assert_eq!(a, b);
    }
}

#[test]
fn zero_progress_is_chaos() {
    let (_, f) = field(256, 6);
    for i in 0..f.len() {
        assert_eq!(f.position_at(i, 0.0, 9.0), Some(f.chaos_positions()[i]));
    }
}

#[test]
fn full_progress_lands_on_target_for_fast_particles() {
    let (_, f) = field(512, 7);
    for i in 0..f.len() {
        let r = f.random_factors()[i];
        let p = f.position_at(i, 1.0, 3.0).unwrap_or(Vec3::NAN);
        if r >= 0.51 {
            // effective progress saturates, so no residual sway either
            assert_eq!(effective_progress(1.0, r), 1.0);
            assert_eq!(p, f.target_positions()[i]);
        } else {
            // slow particles stop short by the eased residual plus leftover sway
            let target = f.target_positions()[i];
            let span = (target - f.chaos_positions()[i]).length();
            let e = effective_progress(1.0, r);
            let bound = (1.0 - ease_out_cubic(e)) * span + SWAY_AMPLITUDE * (1.0 - e) + 1e-5;
            assert!(p.distance(target) <= bound, "r={r} off by {}", p.distance(target));
        }
    }
}

#[test]
fn sway_only_above_threshold() {
    let chaos = Vec3::new(10.0, 0.0, 0.0);
    let target = Vec3::new(1.0, 2.0, 0.0);
    // r = 0 keeps effective progress below 1 so sway would be visible
    let below = foliage_position(chaos, target, 0.0, 0.8, 0.0);
    let below_later = foliage_position(chaos, target, 0.0, 0.8, 1.3);
    assert_eq!(below, below_later);

    let above = foliage_position(chaos, target, 0.0, 0.9, 0.0);
    let above_later = foliage_position(chaos, target, 0.0, 0.9, 1.3);
    assert_ne!(above.x, above_later.x);
    assert_eq!(above.y, above_later.y);
    assert_eq!(above.z, above_later.z);
}

#[test]
fn sway_vanishes_when_settled() {
    assert_eq!(sway_offset(1.7, 3.0, 1.0), 0.0);
    assert!(sway_offset(0.3, 0.5, 0.0).abs() <= 0.05);
}

#[test]
fn larger_random_factor_arrives_sooner() {
    let slow = effective_progress(0.5, 0.0);
    let fast = effective_progress(0.5, 1.0);
    assert!(fast > slow);
}

#[test]
fn instances_match_fields() {
    let (_, f) = field(32, 8);
    let inst = f.instances();
    assert_eq!(inst.len(), 32);
    assert_eq!(std::mem::size_of_val(&inst[0]), 32);
    for (i, v) in inst.iter().enumerate() {
        assert_eq!(Vec3::from(v.chaos), f.chaos_positions()[i]);
        assert_eq!(Vec3::from(v.target), f.target_positions()[i]);
        assert_eq!(v.random, f.random_factors()[i]);
    }
}

#[test]
fn cone_radius_handles_degenerate_cone() {
    assert_eq!(cone_radius_at(1.0, 0.0, 4.0), 0.0);
    assert_eq!(cone_radius_at(1.0, 12.0, 0.0), 0.0);
    assert_eq!(cone_radius_at(0.0, 12.0, 4.0), 4.0);
    assert_eq!(cone_radius_at(12.0, 12.0, 4.0), 0.0);
}
