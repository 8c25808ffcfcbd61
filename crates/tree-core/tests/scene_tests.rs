use glam::{Vec3, Vec4};
use tree_core::{ConfigError, TreeParams, TreeScene, TreeState};

fn small_params() -> TreeParams {
    TreeParams {
        foliage_count: 500,
        ornament_base_count: 20,
        ornament_bottom_count: 10,
        dust_count: 50,
        ..TreeParams::default()
    }
}

#[test]
fn new_scene_is_formed_and_populated() {
    let scene = TreeScene::seeded(small_params(), 1).expect("scene");
    assert_eq!(scene.state(), TreeState::Formed);
    assert_eq!(scene.progress(), 1.0);
    assert_eq!(scene.foliage().len(), 500);
    assert_eq!(scene.ornaments().len(), 30);
    assert_eq!(scene.ornament_poses().len(), 30);
    assert_eq!(scene.dust_positions().len(), 50);
    assert!(scene.star().visible());
}

#[test]
fn stock_counts() {
    let scene = TreeScene::seeded(TreeParams::default(), 2).expect("scene");
    assert_eq!(scene.foliage().len(), 15_000);
    assert_eq!(scene.ornaments().len(), 270);
    assert_eq!(scene.dust_positions().len(), 300);
}

#[test]
fn same_seed_same_scene() {
    let a = TreeScene::seeded(small_params(), 7).expect("scene");
    let b = TreeScene::seeded(small_params(), 7).expect("scene");
    assert_eq!(a.foliage().target_positions(), b.foliage().target_positions());
    assert_eq!(a.ornaments().ornaments(), b.ornaments().ornaments());
}

#[test]
fn toggle_drives_progress_and_star() {
    let mut scene = TreeScene::seeded(small_params(), 3).expect("scene");
    assert_eq!(scene.toggle(), TreeState::Chaos);
    for _ in 0..500 {
        scene.tick(0.016);
    }
    assert_eq!(scene.progress(), 0.0);
    assert!(!scene.star().visible());
    // ornaments sit at their chaos positions, give or take the hover
    for (orn, pose) in scene.ornaments().ornaments().iter().zip(scene.ornament_poses()) {
        assert!(pose.position.distance(orn.chaos) <= 0.02 + 1e-5);
    }
    assert_eq!(scene.toggle(), TreeState::Formed);
    for _ in 0..500 {
        scene.tick(0.016);
    }
    assert_eq!(scene.progress(), 1.0);
    assert!(scene.star().visible());
    assert!((scene.elapsed() - 16.0).abs() < 1e-2);
}

#[test]
fn zero_counts_are_fine() {
    let params = TreeParams {
        foliage_count: 0,
        ornament_base_count: 0,
        ornament_bottom_count: 0,
        dust_count: 0,
        ..TreeParams::default()
    };
    let mut scene = TreeScene::seeded(params, 4).expect("scene");
    scene.toggle();
    scene.tick(0.016);
    assert!(scene.foliage().is_empty());
    assert!(scene.ornament_poses().is_empty());
    assert!(scene.dust_positions().is_empty());
}

#[test]
fn invalid_params_are_rejected() {
    let bad = TreeParams {
        tree_height: 0.0,
        ..TreeParams::default()
    };
    assert_eq!(
        TreeScene::seeded(bad, 5).err(),
        Some(ConfigError::TreeHeight(0.0))
    );
    let bad = TreeParams {
        max_radius: f32::NAN,
        ..TreeParams::default()
    };
    assert!(matches!(
        TreeScene::seeded(bad, 5).err(),
        Some(ConfigError::MaxRadius(_))
    ));
    let bad = TreeParams {
        chaos_spread: -1.0,
        ..TreeParams::default()
    };
    assert!(matches!(
        bad.validate(),
        Err(ConfigError::ChaosShell { .. })
    ));
    let bad = TreeParams {
        ornament_bottom_fraction: 1.5,
        ..TreeParams::default()
    };
    assert_eq!(bad.validate(), Err(ConfigError::BottomFraction(1.5)));
    assert!(ConfigError::TreeHeight(0.0).to_string().contains("tree height"));
}

#[test]
fn tree_transform_scales_and_offsets() {
    let scene = TreeScene::seeded(small_params(), 6).expect("scene");
    let m = scene.tree_transform();
    let origin = m * Vec4::new(0.0, 0.0, 0.0, 1.0);
    assert!(origin.truncate().distance(Vec3::new(0.0, -2.5, 0.0)) < 1e-5);
    let up = m * Vec4::new(0.0, 10.0, 0.0, 1.0);
    assert!((up.y - (8.0 - 2.5)).abs() < 1e-4);
}

#[test]
fn drag_spins_the_tree() {
    let mut scene = TreeScene::seeded(small_params(), 8).expect("scene");
    scene.drag_start(0.0);
    scene.drag_move(200.0);
    scene.drag_end();
    scene.tick(0.016);
    assert!(scene.rotation().angle() > 0.9);
}

#[test]
fn pointer_target_moves_dust() {
    let mut a = TreeScene::seeded(small_params(), 9).expect("scene");
    let mut b = TreeScene::seeded(small_params(), 9).expect("scene");
    b.set_pointer_target(Some(Vec3::new(0.0, 0.0, 5.0)));
    a.tick(0.016);
    b.tick(0.016);
    assert_ne!(a.dust_positions(), b.dust_positions());
}
