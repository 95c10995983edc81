//! Target spawning into the fixed slot pool.
//!
//! Slot choice is deterministic (lowest free index); only geometry and the
//! enemy roll come from the injected RNG.

use glam::Vec2;
use rand::Rng;
use tracing::{debug, warn};

use crate::camera::Viewport;
use crate::config::GameConfig;
use crate::entities::{Entity, Target, POOL_CAPACITY};
use crate::error::GameError;

/// What a successful `spawn` wrote.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpawnReport {
    pub slot: usize,
    pub enemy: bool,
    /// Slot of the non-enemy forced alongside an enemy, if one was needed.
    pub companion: Option<usize>,
}

pub fn first_free_slot(pool: &[Target; POOL_CAPACITY]) -> Option<usize> {
    pool.iter().position(|t| !t.is_active())
}

/// Write one target into the lowest free slot.  `allow_enemy == false` skips
/// the enemy roll.  Mutates exactly one slot on success and none on failure.
pub fn spawn_into_free_slot(
    pool: &mut [Target; POOL_CAPACITY],
    view: &Viewport,
    config: &GameConfig,
    allow_enemy: bool,
    rng: &mut impl Rng,
) -> Result<usize, GameError> {
    let slot = first_free_slot(pool).ok_or(GameError::PoolFull {
        capacity: POOL_CAPACITY,
    })?;

    let size = rng.gen_range(config.target_size_min..=config.target_size_max);
    // Pad by the on-screen size so the whole square stays visible.
    let padded = (view.screen - Vec2::splat(size * view.camera.zoom)).max(Vec2::ZERO);
    let screen_pos = Vec2::new(rng.gen_range(0.0..=padded.x), rng.gen_range(0.0..=padded.y));
    let position = view.camera.screen_to_world(screen_pos);
    let is_enemy = allow_enemy && rng.gen_bool(config.enemy_chance);

    pool[slot] = Target::new(Entity::new(position, Vec2::splat(size)), is_enemy);
    debug!(slot, is_enemy, x = position.x, y = position.y, size, "spawned target");
    Ok(slot)
}

/// Spawn a target while keeping a non-enemy on the board.
///
/// When the roll produces an enemy and no other non-enemy is active, a
/// non-enemy companion goes into the next free slot.  With no slot left for
/// the companion, the rolled target is downgraded to a non-enemy instead.
pub fn spawn(
    pool: &mut [Target; POOL_CAPACITY],
    view: &Viewport,
    config: &GameConfig,
    rng: &mut impl Rng,
) -> Result<SpawnReport, GameError> {
    let slot = spawn_into_free_slot(pool, view, config, true, rng).map_err(|err| {
        warn!("{err}; spawn skipped");
        err
    })?;

    if !pool[slot].is_enemy() {
        return Ok(SpawnReport {
            slot,
            enemy: false,
            companion: None,
        });
    }

    let other_collectible = pool
        .iter()
        .enumerate()
        .any(|(i, t)| i != slot && t.is_active() && !t.is_enemy());
    if other_collectible {
        return Ok(SpawnReport {
            slot,
            enemy: true,
            companion: None,
        });
    }

    match spawn_into_free_slot(pool, view, config, false, rng) {
        Ok(companion) => Ok(SpawnReport {
            slot,
            enemy: true,
            companion: Some(companion),
        }),
        Err(_) => {
            debug!(slot, "no room for a companion; spawned target downgraded");
            pool[slot].set_enemy(false);
            Ok(SpawnReport {
                slot,
                enemy: false,
                companion: None,
            })
        }
    }
}

pub fn has_enemy(pool: &[Target; POOL_CAPACITY]) -> bool {
    pool.iter().any(|t| t.is_active() && t.is_enemy())
}

pub fn has_collectible(pool: &[Target; POOL_CAPACITY]) -> bool {
    pool.iter().any(|t| t.is_active() && !t.is_enemy())
}
