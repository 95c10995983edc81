/// Per-frame game logic.
///
/// `tick` takes an immutable reference to the current `GameState` (plus the
/// frame's input, clock delta, viewport, config and an RNG handle) and returns
/// the next `GameState`.  Side effects are limited to the injected RNG and
/// tracing output.

use glam::Vec2;
use rand::Rng;
use tracing::{debug, info};

use crate::camera::Viewport;
use crate::collision::collides;
use crate::config::GameConfig;
use crate::entities::{GameState, Player, Scene, POOL_CAPACITY};
use crate::input::FrameInput;
use crate::scene::{transition, SceneEvent, Transition};
use crate::spawner::spawn;

// ── Per-frame tick ───────────────────────────────────────────────────────────

/// Advance the game by one frame.  Exactly one scene update runs; quit is
/// honoured first in every scene.
pub fn tick(
    state: &GameState,
    input: &FrameInput,
    dt: f32,
    view: &Viewport,
    config: &GameConfig,
    rng: &mut impl Rng,
) -> GameState {
    let mut next = *state;

    if input.quit {
        let t = transition(next.scene(), SceneEvent::Quit);
        apply_transition(&mut next, t, view, config, rng);
        return next;
    }

    match next.scene() {
        Scene::StartScreen | Scene::GameOver => {
            if input.confirm {
                let t = transition(next.scene(), SceneEvent::Confirm);
                apply_transition(&mut next, t, view, config, rng);
            }
        }
        Scene::Playing => step_playing(&mut next, input, dt, view, config, rng),
    }
    next
}

pub fn apply_transition(
    state: &mut GameState,
    t: Transition,
    view: &Viewport,
    config: &GameConfig,
    rng: &mut impl Rng,
) {
    match t {
        Transition::Stay => {}
        Transition::Enter(scene) => enter_scene(state, scene, view, config, rng),
        Transition::Terminate => {
            info!(score = state.player.score, "quit requested");
            state.shutdown();
        }
    }
}

/// Switch to `scene` and run its entry side effects.
pub fn enter_scene(
    state: &mut GameState,
    scene: Scene,
    view: &Viewport,
    config: &GameConfig,
    rng: &mut impl Rng,
) {
    info!(from = ?state.scene(), to = ?scene, "scene transition");
    state.set_scene(scene);
    match scene {
        Scene::Playing => reset_run(state, view, config, rng),
        Scene::GameOver => info!(score = state.player.score, "run over"),
        Scene::StartScreen => {}
    }
}

/// Fresh run: score 0, default player, empty pool, one initial target.
pub fn reset_run(
    state: &mut GameState,
    view: &Viewport,
    config: &GameConfig,
    rng: &mut impl Rng,
) {
    let start = view.world_bounds().center() - Vec2::splat(config.player_size * 0.5);
    state.player = Player::new(start, config.player_size);
    state.deactivate_targets();
    // An empty pool always has room; the error arm only matters for the log.
    let _ = spawn(&mut state.targets, view, config, rng);
}

// ── Playing ──────────────────────────────────────────────────────────────────

fn step_playing(
    state: &mut GameState,
    input: &FrameInput,
    dt: f32,
    view: &Viewport,
    config: &GameConfig,
    rng: &mut impl Rng,
) {
    // ── 1. Move the player ───────────────────────────────────────────────────
    let player = &mut state.player.entity;
    player.position += input.movement() * config.player_speed * dt;
    let bounds = view.world_bounds();
    let max = (bounds.max - player.size).max(bounds.min);
    player.position = player.position.clamp(bounds.min, max);

    // ── 2. Resolve collisions in slot order ──────────────────────────────────
    for slot in 0..POOL_CAPACITY {
        let target = state.targets[slot];
        if !target.is_active() || !collides(&state.player.entity, &target.entity) {
            continue;
        }
        if target.is_enemy() {
            debug!(slot, "player hit an enemy");
            let t = transition(Scene::Playing, SceneEvent::EnemyHit);
            apply_transition(state, t, view, config, rng);
            return;
        }
        collect(state, slot, view, config, rng);
    }
}

/// Score a non-enemy target, grow on every `growth_interval`th point and
/// spawn its replacement.
fn collect(
    state: &mut GameState,
    slot: usize,
    view: &Viewport,
    config: &GameConfig,
    rng: &mut impl Rng,
) {
    state.targets[slot].entity.set_active(false);
    state.player.score += 1;
    let score = state.player.score;
    if score % config.growth_interval == 0 {
        state.player.entity.size += Vec2::splat(config.growth_increment);
    }
    debug!(slot, score, "collected target");

    // Pool exhaustion is already logged by the spawner; the frame carries on.
    let _ = spawn(&mut state.targets, view, config, rng);
}
