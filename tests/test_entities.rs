use glam::Vec2;

use square_chase::camera::{Camera2D, Viewport};
use square_chase::config::GameConfig;
use square_chase::entities::*;
use square_chase::GameError;

#[test]
fn new_state_is_idle_start_screen() {
    let s = GameState::new();
    assert_eq!(s.scene(), Scene::StartScreen);
    assert!(s.is_running());
    assert_eq!(s.player.score, 0);
    assert_eq!(s.active_target_count(), 0);
    assert_eq!(s.targets.len(), POOL_CAPACITY);
}

#[test]
fn entity_flags_toggle() {
    let mut t = Target::new(Entity::new(Vec2::ZERO, Vec2::splat(5.0)), false);
    assert!(t.is_active());
    assert!(!t.is_enemy());
    t.set_enemy(true);
    t.entity.set_active(false);
    assert!(t.is_enemy());
    assert!(!t.is_active());
}

#[test]
fn deactivate_clears_whole_pool() {
    let mut s = GameState::new();
    for t in &mut s.targets {
        *t = Target::new(Entity::new(Vec2::ONE, Vec2::ONE), true);
    }
    assert_eq!(s.active_target_count(), POOL_CAPACITY);
    s.deactivate_targets();
    assert_eq!(s.active_target_count(), 0);
}

#[test]
fn shutdown_only_stops_running() {
    let mut s = GameState::new();
    s.set_scene(Scene::Playing);
    s.targets[2] = Target::new(Entity::new(Vec2::ONE, Vec2::ONE), false);
    s.shutdown();
    assert!(!s.is_running());
    assert_eq!(s.scene(), Scene::Playing);
    assert_eq!(s.active_target_count(), 1);
}

#[test]
fn game_state_copy_is_independent() {
    let original = GameState::new();
    let mut copy = original;

    copy.player.entity.position.x = 99.0;
    copy.player.score = 999;
    copy.targets[0] = Target::new(Entity::new(Vec2::ONE, Vec2::ONE), true);

    assert_eq!(original.player.entity.position.x, 0.0);
    assert_eq!(original.player.score, 0);
    assert_eq!(original.active_target_count(), 0);
}

// ── Camera ────────────────────────────────────────────────────────────────────

#[test]
fn camera_round_trips_points() {
    let camera = Camera2D {
        offset: Vec2::new(40.0, 12.0),
        target: Vec2::new(-8.0, 3.0),
        zoom: 0.5,
    };
    let world = Vec2::new(17.0, -4.0);
    let back = camera.screen_to_world(camera.world_to_screen(world));
    assert!(back.abs_diff_eq(world, 1e-5));
}

#[test]
fn viewport_bounds_scale_with_zoom() {
    let view = Viewport::new(Camera2D::with_zoom(0.5), Vec2::new(80.0, 40.0));
    let bounds = view.world_bounds();
    assert_eq!(bounds.min, Vec2::ZERO);
    assert_eq!(bounds.max, Vec2::new(160.0, 80.0));
    assert_eq!(bounds.center(), Vec2::new(80.0, 40.0));
    assert_eq!(bounds.size(), Vec2::new(160.0, 80.0));
}

// ── Config ────────────────────────────────────────────────────────────────────

#[test]
fn default_config_is_valid() {
    let config = GameConfig::default();
    assert_eq!(config.validate(), Ok(()));
    assert_eq!(config.player_speed, 100.0);
    assert_eq!(config.growth_interval, 5);
    assert_eq!(config.enemy_chance, 0.3);
}

#[test]
fn config_rejects_bad_values() {
    let bad = [
        GameConfig { enemy_chance: 1.5, ..GameConfig::default() },
        GameConfig { growth_interval: 0, ..GameConfig::default() },
        GameConfig { target_size_min: 30.0, ..GameConfig::default() },
        GameConfig { zoom: 0.0, ..GameConfig::default() },
        GameConfig { player_size: f32::NAN, ..GameConfig::default() },
    ];
    for config in bad {
        assert!(matches!(config.validate(), Err(GameError::InvalidConfig(_))), "{config:?}");
    }
}
